//! Compiler configuration template (`tsconfig.json`).
//!
//! The settings are fixed for the whole fleet: strict NodeNext modules,
//! `src` compiled to `dist` with declarations. No field varies by
//! descriptor, so the renderer takes no input.

use serde_json::json;

use crate::error::Result;

/// Render the `tsconfig.json` content.
pub fn render() -> Result<String> {
    let config = json!({
        "compilerOptions": {
            "target": "ES2022",
            "module": "NodeNext",
            "moduleResolution": "NodeNext",
            "lib": ["ES2022"],
            "strict": true,
            "declaration": true,
            "esModuleInterop": true,
            "skipLibCheck": true,
            "rootDir": "src",
            "outDir": "dist",
        },
        "include": ["src/**/*"],
        "exclude": ["dist", "node_modules"],
    });

    let mut rendered = serde_json::to_string_pretty(&config)?;
    rendered.push('\n');
    Ok(rendered)
}
