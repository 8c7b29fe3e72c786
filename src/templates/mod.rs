//! # File Templates
//!
//! One submodule per generated artifact. Every renderer is a pure function
//! from a descriptor (plus the organization name where URLs or scoped
//! dependencies are involved) to file content; nothing in here touches the
//! filesystem, so each template is testable as string output and the
//! generator owns all writes.
//!
//! - `manifest`: `package.json`
//! - `compiler`: `tsconfig.json`
//! - `source`: the category-dependent `src/index.ts` stub
//! - `ignore`: `.gitignore`
//! - `workflow`: `.github/workflows/ci.yml`
//! - `readme`: the general `README.md`
//! - `studio`: configuration category (`cfstudio.yaml` and `USAGE.md`)

pub mod compiler;
pub mod ignore;
pub mod manifest;
pub mod readme;
pub mod source;
pub mod studio;
pub mod workflow;
