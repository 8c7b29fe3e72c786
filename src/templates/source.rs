//! # Source Stub Template
//!
//! Renders the single `src/index.ts` stub whose shape depends on category:
//!
//! - plugin: a class implementing the studio plugin interface, with empty
//!   resource/action lists and async `initialize`/`execute` stubs that log
//!   and echo their input;
//! - application: a `main` function logging a startup message, guarded so
//!   it only runs when invoked directly;
//! - library and docs: a version constant and one exported greeting
//!   function.
//!
//! The configuration category has no source tree and never reaches this
//! module.

use crate::descriptor::{Category, RepoDescriptor};

/// Convert a repository name to a PascalCase class name.
///
/// Splits on `-` and `_`, capitalizing each segment: `cfstudio-plugin-github`
/// becomes `CfstudioPluginGithub`.
pub fn pascal_case(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn render_plugin(repo: &RepoDescriptor) -> String {
    let class_name = pascal_case(&repo.name);
    format!(
        r#"import type {{ PluginContext, StudioPlugin }} from "@cfstudio/types";

export default class {class_name} implements StudioPlugin {{
  resources: string[] = [];
  actions: string[] = [];

  async initialize(context: PluginContext): Promise<void> {{
    console.log("{name}: initialized", context);
  }}

  async execute(action: string, input: unknown): Promise<unknown> {{
    console.log(`{name}: executing ${{action}}`);
    return input;
  }}
}}
"#,
        class_name = class_name,
        name = repo.name,
    )
}

fn render_application(repo: &RepoDescriptor) -> String {
    format!(
        r#"function main(): void {{
  console.log("{name} starting up");
}}

if (import.meta.url === `file://${{process.argv[1]}}`) {{
  main();
}}

export {{ main }};
"#,
        name = repo.name,
    )
}

fn render_library(repo: &RepoDescriptor) -> String {
    format!(
        r#"export const VERSION = "0.1.0";

export function greet(name: string): string {{
  return `Hello from {repo}, ${{name}}!`;
}}
"#,
        repo = repo.name,
    )
}

/// Render the `src/index.ts` stub for a descriptor.
pub fn render(repo: &RepoDescriptor) -> String {
    match repo.category {
        Category::Plugin => render_plugin(repo),
        Category::Application => render_application(repo),
        // Docs repositories carry the library stub
        Category::Library | Category::Docs => render_library(repo),
        Category::Configuration => unreachable!("configuration repos have no source stub"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, category: Category) -> RepoDescriptor {
        RepoDescriptor {
            name: name.to_string(),
            description: String::new(),
            private: false,
            category,
            dependencies: vec![],
        }
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("cfstudio-plugin-github"), "CfstudioPluginGithub");
        assert_eq!(pascal_case("core"), "Core");
        assert_eq!(pascal_case("my_repo-name"), "MyRepoName");
        assert_eq!(pascal_case("--x"), "X");
    }

    #[test]
    fn test_plugin_stub() {
        let stub = render(&descriptor("cfstudio-plugin-slack", Category::Plugin));
        assert!(stub.contains("class CfstudioPluginSlack implements StudioPlugin"));
        assert!(stub.contains("resources: string[] = [];"));
        assert!(stub.contains("actions: string[] = [];"));
        assert!(stub.contains("async initialize(context: PluginContext)"));
        assert!(stub.contains("async execute(action: string, input: unknown)"));
        assert!(stub.contains("return input;"));
    }

    #[test]
    fn test_application_stub() {
        let stub = render(&descriptor("cfstudio-cli", Category::Application));
        assert!(stub.contains("function main(): void"));
        assert!(stub.contains("cfstudio-cli starting up"));
        // Run-only-when-invoked-directly guard
        assert!(stub.contains("import.meta.url"));
        assert!(stub.contains("process.argv[1]"));
    }

    #[test]
    fn test_library_stub() {
        let stub = render(&descriptor("cfstudio-types", Category::Library));
        assert!(stub.contains("export const VERSION = \"0.1.0\";"));
        assert!(stub.contains("export function greet(name: string): string"));
        assert!(stub.contains("Hello from cfstudio-types"));
    }

    #[test]
    fn test_docs_uses_library_stub() {
        let docs = render(&descriptor("cfstudio-docs", Category::Docs));
        assert!(docs.contains("export const VERSION"));
        assert!(docs.contains("Hello from cfstudio-docs"));
    }
}
