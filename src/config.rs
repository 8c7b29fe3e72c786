//! # Configuration Schema and Parsing
//!
//! Defines the on-disk form of a descriptor list and the logic for loading
//! it. When no config file is given, generation uses the built-in table
//! from `defaults`; a YAML file with the same shape can override it:
//!
//! ```yaml
//! organization: cfstudio
//! repositories:
//!   - name: core
//!     description: Core orchestration engine
//!     private: true
//!     category: library
//!     dependencies:
//!       - "@cfstudio/types"
//! ```
//!
//! Parsing is strict about structure (unknown categories are rejected) but
//! deliberately loose about content: duplicate names and empty descriptions
//! are reported by `lint` as warnings, never as parse errors, because the
//! generator's directory-existence skip is the only uniqueness guard the
//! tool actually enforces.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::descriptor::RepoDescriptor;
use crate::error::{Error, Result};

/// A full descriptor list: the hosting organization plus the repositories
/// to scaffold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgeConfig {
    /// Hosting organization; remote repositories are created under this
    /// namespace and scoped dependencies (`@<org>/…`) resolve to workspace
    /// references.
    #[serde(default = "defaults::default_organization")]
    pub organization: String,
    /// The repositories to create, processed strictly in list order.
    pub repositories: Vec<RepoDescriptor>,
}

/// Parse a YAML string into a `ForgeConfig`.
pub fn parse(content: &str) -> Result<ForgeConfig> {
    serde_yaml::from_str(content).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: Some(
            "expected top-level 'organization' and 'repositories' keys; each repository \
             needs 'name', 'description', and 'category'"
                .to_string(),
        ),
    })
}

/// Load and parse a descriptor configuration file.
pub fn from_file(path: &Path) -> Result<ForgeConfig> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Lint a configuration, returning human-readable warnings.
///
/// Warnings never block generation; the `validate` command turns them into
/// failures only under `--strict`.
pub fn lint(config: &ForgeConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.repositories.is_empty() {
        warnings.push("no repositories defined".to_string());
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for repo in &config.repositories {
        if !seen.insert(repo.name.as_str()) {
            warnings.push(format!(
                "duplicate repository name '{}' (later entry will be skipped once the \
                 directory exists)",
                repo.name
            ));
        }
        if repo.description.trim().is_empty() {
            warnings.push(format!("repository '{}' has an empty description", repo.name));
        }
        if repo.name.trim().is_empty() {
            warnings.push("repository with an empty name".to_string());
        }
    }

    warnings
}
