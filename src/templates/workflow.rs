//! # CI Workflow Template
//!
//! Renders `.github/workflows/ci.yml`. Non-configuration categories get the
//! full pipeline (checkout → pnpm setup → install → typecheck → test →
//! build); the configuration category only has a declarative file to check,
//! so its job is checkout → install → validate.

use crate::descriptor::{Category, RepoDescriptor};

const HEADER: &str = "\
name: CI

on:
  push:
    branches: [main]
  pull_request:

jobs:
  ci:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: pnpm/action-setup@v4
      - uses: actions/setup-node@v4
        with:
          node-version: 20
          cache: pnpm
      - run: pnpm install
";

const BUILD_STEPS: &str = "      - run: pnpm typecheck
      - run: pnpm test
      - run: pnpm build
";

const VALIDATE_STEPS: &str = "      - run: pnpm validate
";

/// Render the CI workflow for a descriptor.
pub fn render(repo: &RepoDescriptor) -> String {
    let steps = if repo.category == Category::Configuration {
        VALIDATE_STEPS
    } else {
        BUILD_STEPS
    };
    format!("{}{}", HEADER, steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(category: Category) -> RepoDescriptor {
        RepoDescriptor {
            name: "cfstudio-core".to_string(),
            description: String::new(),
            private: false,
            category,
            dependencies: vec![],
        }
    }

    #[test]
    fn test_build_pipeline_for_package_categories() {
        for category in [Category::Library, Category::Application, Category::Plugin, Category::Docs]
        {
            let workflow = render(&descriptor(category));
            assert!(workflow.contains("actions/checkout@v4"));
            assert!(workflow.contains("pnpm/action-setup@v4"));
            assert!(workflow.contains("pnpm install"));
            assert!(workflow.contains("pnpm typecheck"));
            assert!(workflow.contains("pnpm test"));
            assert!(workflow.contains("pnpm build"));
            assert!(!workflow.contains("pnpm validate"));
        }
    }

    #[test]
    fn test_validate_pipeline_for_configuration() {
        let workflow = render(&descriptor(Category::Configuration));
        assert!(workflow.contains("actions/checkout@v4"));
        assert!(workflow.contains("pnpm install"));
        assert!(workflow.contains("pnpm validate"));
        assert!(!workflow.contains("pnpm build"));
        assert!(!workflow.contains("pnpm test"));
    }

    #[test]
    fn test_workflow_is_parseable_yaml() {
        let workflow = render(&descriptor(Category::Library));
        let parsed: serde_yaml::Value = serde_yaml::from_str(&workflow).unwrap();
        assert_eq!(parsed["name"], "CI");
    }
}
