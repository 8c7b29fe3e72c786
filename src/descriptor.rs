//! # Repository Descriptor Model
//!
//! Data model for the scaffolding input: each `RepoDescriptor` names one
//! repository to create, and its `Category` selects which template branch
//! runs during generation. Descriptors are plain serde-derived structs so
//! the list can live in a YAML file as well as in the built-in table
//! (`defaults::builtin_config`).
//!
//! Descriptors are independent of each other: generation never consults
//! another entry, and the only uniqueness guard is the directory-existence
//! skip in the generator.

use serde::{Deserialize, Serialize};

/// The closed set of repository kinds.
///
/// The category decides which manifest scripts, source stub, CI workflow,
/// and README blocks are generated. `Configuration` is the odd one out: it
/// gets a declarative studio file instead of a package manifest and source
/// tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A TypeScript library package (version constant + exported API).
    Library,
    /// A runnable application with an entry point.
    Application,
    /// A studio plugin implementing the plugin interface.
    Plugin,
    /// A documentation repository; scaffolded like a library.
    Docs,
    /// A declarative studio configuration repository (no package manifest).
    Configuration,
}

impl Category {
    /// Whether this category gets a package manifest, compiler config, and
    /// source stub. The configuration category gets the studio file and a
    /// usage document instead.
    pub fn has_package(&self) -> bool {
        !matches!(self, Category::Configuration)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Library => "library",
            Category::Application => "application",
            Category::Plugin => "plugin",
            Category::Docs => "docs",
            Category::Configuration => "configuration",
        };
        write!(f, "{}", name)
    }
}

/// One repository to scaffold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoDescriptor {
    /// Unique repository name, used verbatim in paths, package names, and
    /// display text.
    pub name: String,
    /// Free-text description, embedded in the manifest, README, and the
    /// initial commit message.
    pub description: String,
    /// Whether the remote repository is created private. Also drives the
    /// README license line.
    #[serde(default)]
    pub private: bool,
    /// Template branch selector.
    pub category: Category,
    /// Package identifiers written into the manifest's dependency map.
    ///
    /// Identifiers scoped to the organization (`@<org>/…`) resolve to a
    /// workspace reference; everything else resolves to `latest`.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl RepoDescriptor {
    /// Repository URL on the hosting platform, derived from org + name.
    pub fn repo_url(&self, org: &str) -> String {
        format!("https://github.com/{}/{}.git", org, self.name)
    }

    /// Homepage URL, derived from org + name.
    pub fn homepage_url(&self, org: &str) -> String {
        format!("https://github.com/{}/{}#readme", org, self.name)
    }

    /// Visibility label used in generated text and summary output.
    pub fn visibility(&self) -> &'static str {
        if self.private {
            "private"
        } else {
            "public"
        }
    }
}
