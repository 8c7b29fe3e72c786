//! Ignore-file template (`.gitignore`).
//!
//! The same list for every category: build output, dependency trees, local
//! env files, and editor/OS noise.

/// Render the `.gitignore` content.
pub fn render() -> String {
    "\
node_modules/
dist/
coverage/
*.log
.env
.env.local
.DS_Store
.idea/
.vscode/
"
    .to_string()
}
