//! Default values and the built-in descriptor table.
//!
//! The built-in table is the fixed repository fleet the tool was written
//! for: nine cfstudio repositories, two public and seven private. A YAML
//! config file with the same shape (see `config`) can replace it entirely;
//! the table itself is never mutated at runtime.

use crate::config::ForgeConfig;
use crate::descriptor::{Category, RepoDescriptor};

/// Default descriptor config file name, used when `--config` is not given
/// to `validate`.
pub const DEFAULT_CONFIG_FILENAME: &str = ".repo-forge.yaml";

/// Default hosting organization.
pub fn default_organization() -> String {
    "cfstudio".to_string()
}

fn repo(
    name: &str,
    description: &str,
    private: bool,
    category: Category,
    dependencies: &[&str],
) -> RepoDescriptor {
    RepoDescriptor {
        name: name.to_string(),
        description: description.to_string(),
        private,
        category,
        dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
    }
}

/// The built-in repository fleet.
pub fn builtin_config() -> ForgeConfig {
    ForgeConfig {
        organization: default_organization(),
        repositories: vec![
            repo(
                "cfstudio-types",
                "Shared TypeScript types and plugin interfaces",
                false,
                Category::Library,
                &[],
            ),
            repo(
                "cfstudio-docs",
                "Public documentation site",
                false,
                Category::Docs,
                &[],
            ),
            repo(
                "cfstudio-core",
                "Core orchestration engine",
                true,
                Category::Library,
                &["@cfstudio/types"],
            ),
            repo(
                "cfstudio-cli",
                "Command-line interface for studio workflows",
                true,
                Category::Application,
                &["@cfstudio/core", "commander"],
            ),
            repo(
                "cfstudio-web",
                "Web dashboard application",
                true,
                Category::Application,
                &["@cfstudio/core"],
            ),
            repo(
                "cfstudio-plugin-github",
                "GitHub integration plugin",
                true,
                Category::Plugin,
                &["@cfstudio/types", "octokit"],
            ),
            repo(
                "cfstudio-plugin-slack",
                "Slack notification plugin",
                true,
                Category::Plugin,
                &["@cfstudio/types"],
            ),
            repo(
                "cfstudio-plugin-jira",
                "Jira issue-tracking plugin",
                true,
                Category::Plugin,
                &["@cfstudio/types"],
            ),
            repo(
                "cfstudio-config",
                "Studio workspace configuration",
                true,
                Category::Configuration,
                &[],
            ),
        ],
    }
}
