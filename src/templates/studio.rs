//! # Studio Configuration Templates
//!
//! Templates specific to the configuration category: the declarative
//! `cfstudio.yaml` naming the project with a fixed pair of plugin
//! references and empty placeholder sections, plus a minimal `USAGE.md`
//! that is distinct from the general README written for every repository.

use crate::descriptor::RepoDescriptor;

/// The two plugins every generated studio configuration starts with.
pub const DEFAULT_PLUGINS: [&str; 2] = ["@cfstudio/plugin-github", "@cfstudio/plugin-slack"];

/// Render the `cfstudio.yaml` declarative file.
pub fn render_studio_file(repo: &RepoDescriptor) -> String {
    format!(
        "\
project: {name}

plugins:
  - \"{first}\"
  - \"{second}\"

resources: []

workflows: []
",
        name = repo.name,
        first = DEFAULT_PLUGINS[0],
        second = DEFAULT_PLUGINS[1],
    )
}

/// Render the short `USAGE.md` for a configuration repository.
pub fn render_usage(repo: &RepoDescriptor) -> String {
    format!(
        "\
# Using {name}

This repository holds the studio configuration. To change what the studio
runs:

1. Edit `cfstudio.yaml`.
2. Add plugin references under `plugins:` and definitions under
   `resources:` / `workflows:`.
3. Run `pnpm validate` to check the file before committing.

Changes take effect the next time the studio reloads its configuration.
",
        name = repo.name,
    )
}
