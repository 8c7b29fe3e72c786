//! # README Template
//!
//! Assembles the general `README.md` from category-conditional text blocks:
//! an overview sentence, an installation command, a usage example, the
//! development commands, and a license line driven by visibility.

use crate::descriptor::{Category, RepoDescriptor};

fn overview(repo: &RepoDescriptor) -> String {
    match repo.category {
        Category::Library => format!(
            "`{}` is a TypeScript library in the cfstudio workspace.",
            repo.name
        ),
        Category::Application => format!("`{}` is a runnable cfstudio application.", repo.name),
        Category::Plugin => format!(
            "`{}` is a cfstudio plugin; it is loaded by the studio runtime.",
            repo.name
        ),
        Category::Docs => format!("`{}` holds cfstudio documentation.", repo.name),
        Category::Configuration => format!(
            "`{}` holds the declarative studio configuration for this workspace.",
            repo.name
        ),
    }
}

fn usage(repo: &RepoDescriptor) -> String {
    match repo.category {
        Category::Library | Category::Docs => format!(
            "```ts\nimport {{ greet }} from \"{}\";\n\nconsole.log(greet(\"world\"));\n```",
            repo.name
        ),
        Category::Application => "```bash\npnpm dev\n```".to_string(),
        Category::Plugin => format!(
            "Add `{}` to the `plugins` list of your `cfstudio.yaml`.",
            repo.name
        ),
        Category::Configuration => {
            "Edit `cfstudio.yaml` and run `pnpm validate` before committing.".to_string()
        }
    }
}

fn development(repo: &RepoDescriptor) -> &'static str {
    match repo.category {
        Category::Configuration => {
            "```bash\npnpm install\npnpm validate\n```"
        }
        Category::Application => {
            "```bash\npnpm install\npnpm typecheck\npnpm test\npnpm build\npnpm dev\n```"
        }
        _ => "```bash\npnpm install\npnpm typecheck\npnpm test\npnpm build\n```",
    }
}

/// License line, driven by visibility.
pub fn license_line(repo: &RepoDescriptor) -> &'static str {
    if repo.private {
        "Proprietary. Internal use only; all rights reserved."
    } else {
        "MIT"
    }
}

/// Render the general `README.md` for a descriptor.
pub fn render(repo: &RepoDescriptor) -> String {
    format!(
        "# {name}\n\n{description}\n\n{overview}\n\n\
         ## Installation\n\n```bash\npnpm install\n```\n\n\
         ## Usage\n\n{usage}\n\n\
         ## Development\n\n{development}\n\n\
         ## License\n\n{license}\n",
        name = repo.name,
        description = repo.description,
        overview = overview(repo),
        usage = usage(repo),
        development = development(repo),
        license = license_line(repo),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(category: Category, private: bool) -> RepoDescriptor {
        RepoDescriptor {
            name: "cfstudio-core".to_string(),
            description: "Core orchestration engine".to_string(),
            private,
            category,
            dependencies: vec![],
        }
    }

    #[test]
    fn test_title_and_description() {
        let readme = render(&descriptor(Category::Library, false));
        assert!(readme.starts_with("# cfstudio-core\n"));
        assert!(readme.contains("Core orchestration engine"));
    }

    #[test]
    fn test_private_license_line() {
        let readme = render(&descriptor(Category::Library, true));
        assert!(readme.contains("Proprietary"));
        assert!(!readme.contains("\nMIT\n"));
    }

    #[test]
    fn test_public_license_line() {
        let readme = render(&descriptor(Category::Library, false));
        assert!(readme.contains("## License\n\nMIT\n"));
        assert!(!readme.contains("Proprietary"));
    }

    #[test]
    fn test_category_blocks_differ() {
        let library = render(&descriptor(Category::Library, false));
        let application = render(&descriptor(Category::Application, false));
        let plugin = render(&descriptor(Category::Plugin, false));
        let configuration = render(&descriptor(Category::Configuration, false));

        assert!(library.contains("import { greet }"));
        assert!(application.contains("pnpm dev"));
        assert!(plugin.contains("plugins` list"));
        assert!(configuration.contains("pnpm validate"));
    }

    #[test]
    fn test_all_sections_present() {
        let readme = render(&descriptor(Category::Plugin, true));
        for section in ["## Installation", "## Usage", "## Development", "## License"] {
            assert!(readme.contains(section), "missing {}", section);
        }
    }
}
