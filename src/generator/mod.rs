//! # Generator Module
//!
//! The generator turns a directory of YAML schemas into provider source
//! files, examples and documentation, and keeps them up to date across runs
//! without clobbering hand edits.
//!
//! ## Overview
//!
//! For each schema unit the generator renders a fixed set of artifacts:
//! - **Model** - the typed data model for the object
//! - **Data source / Resource** - read and CRUD implementations, skipped with
//!   `no_data_source` / `no_resource`
//! - **Acceptance tests** - one per data source and resource
//! - **Examples** - `data-source.tf`, `resource.tf` and `import.sh` snippets
//!
//! Once all units are rendered, a provider registration file is produced from
//! the whole schema set, and the changelog is passed through into the docs.
//!
//! ## Architecture
//!
//! ```text
//! YAML schemas → load + validate → render (minijinja) → reconcile sections → write
//! ```
//!
//! 1. **Schema** - parsed and validated by [`crate::schema`], derived names filled in
//! 2. **Rendering** - every template runs in a fresh environment with the
//!    functions of a [`FunctionRegistry`] installed
//! 3. **Reconciliation** - source files are merged section by section into
//!    whatever already exists; examples and docs are overwritten
//! 4. **Writing** - only after every render succeeded, and only files whose
//!    content changed
//!
//! ## Sections
//!
//! Generated source files delimit generator-owned regions with
//!
//! ```text
//! //template:begin NAME
//! ...
//! //template:end NAME
//! ```
//!
//! Deleting a section's markers from a generated file opts that region out of
//! regeneration. See [`reconcile`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use provider_gen::generator::{Generator, GeneratorConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = Generator::new(GeneratorConfig::default()).run(false)?;
//! println!("{} files written", report.written.len());
//! # Ok(())
//! # }
//! ```

mod config;
mod functions;
pub mod names;
mod predicates;
mod project;
mod sections;
mod templates;
#[cfg(test)]
mod tests;

pub use config::*;
pub use functions::*;
pub use names::*;
pub use predicates::*;
pub use project::*;
pub use sections::*;
pub use templates::*;
