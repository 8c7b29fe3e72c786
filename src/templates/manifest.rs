//! # Package Manifest Template
//!
//! Renders `package.json` for every non-configuration repository. The
//! manifest is assembled as a `serde_json` value rather than by string
//! splicing, so names and descriptions are always correctly escaped.
//!
//! Dependency resolution follows the workspace convention: identifiers
//! scoped to the organization (`@<org>/…`) resolve to a local workspace
//! reference, everything else to an unpinned `latest` marker.

use serde_json::{json, Map, Value};

use crate::descriptor::{Category, RepoDescriptor};
use crate::error::Result;

/// Marker for dependencies resolved within the local workspace.
pub const WORKSPACE_MARKER: &str = "workspace:*";

/// Marker for external dependencies left unpinned.
pub const LATEST_MARKER: &str = "latest";

/// Resolve one dependency identifier to its version marker.
pub fn resolve_dependency(identifier: &str, org: &str) -> &'static str {
    if identifier.starts_with(&format!("@{}/", org)) {
        WORKSPACE_MARKER
    } else {
        LATEST_MARKER
    }
}

fn scripts_for(category: Category) -> Value {
    let mut scripts = Map::new();
    scripts.insert("build".to_string(), json!("tsc"));
    scripts.insert("typecheck".to_string(), json!("tsc --noEmit"));
    scripts.insert("test".to_string(), json!("vitest run"));
    if category == Category::Application {
        scripts.insert("dev".to_string(), json!("tsx watch src/index.ts"));
        scripts.insert("start".to_string(), json!("node dist/index.js"));
    }
    Value::Object(scripts)
}

fn dev_dependencies_for(category: Category) -> Value {
    let mut pins = Map::new();
    pins.insert("typescript".to_string(), json!("^5.4.0"));
    pins.insert("@types/node".to_string(), json!("^20.11.0"));
    pins.insert("vitest".to_string(), json!("^1.4.0"));
    if category == Category::Application {
        pins.insert("tsx".to_string(), json!("^4.7.0"));
    }
    Value::Object(pins)
}

/// Render the `package.json` content for a descriptor.
pub fn render(repo: &RepoDescriptor, org: &str) -> Result<String> {
    let mut dependencies = Map::new();
    for dep in &repo.dependencies {
        dependencies.insert(dep.clone(), json!(resolve_dependency(dep, org)));
    }

    let manifest = json!({
        "name": repo.name,
        "version": "0.1.0",
        "description": repo.description,
        "type": "module",
        "private": repo.private,
        "repository": {
            "type": "git",
            "url": repo.repo_url(org),
        },
        "homepage": repo.homepage_url(org),
        "scripts": scripts_for(repo.category),
        "dependencies": Value::Object(dependencies),
        "devDependencies": dev_dependencies_for(repo.category),
    });

    let mut rendered = serde_json::to_string_pretty(&manifest)?;
    rendered.push('\n');
    Ok(rendered)
}
