//! # provider-gen
//!
//! **provider-gen** generates the boilerplate of a Terraform-style provider
//! (typed models, data sources, resources, acceptance tests, examples and
//! docs) from one declarative YAML schema per API object.
//!
//! ## Overview
//!
//! Generated source files stay editable. Generator-owned regions are wrapped
//! in `//template:begin NAME` / `//template:end NAME` markers and are
//! refreshed on every run; everything outside them is left exactly as the
//! developer wrote it. Removing a pair of markers takes that region out of
//! the generator's hands for good.
//!
//! ## Architecture
//!
//! - **[`schema`]** - schema model, name derivation and structural validation
//! - **[`generator`]** - template functions, rendering, section reconciliation
//!   and the run orchestrator
//! - **[`lint`]** - non-fatal schema checks
//! - **[`cli`]** - the `provider-gen` command line
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`error`]** - the run-level error type
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as CLI<br/>(provider-gen)
//!     participant Schema as schema::load_schema_file
//!     participant Render as generator::render
//!     participant Merge as generator::reconcile
//!     participant FS as File System
//!
//!     CLI->>Schema: every gen/definitions/*.yaml, sorted
//!     Schema-->>CLI: SchemaConfig (names derived, validated)
//!     loop each schema × artifact
//!         CLI->>Render: template + schema context
//!         Render-->>CLI: fresh text
//!         CLI->>Merge: existing file + fresh text
//!         Merge-->>CLI: reconciled text
//!     end
//!     CLI->>Render: provider.rs over all schemas
//!     CLI->>Render: changelog.md over CHANGELOG.md
//!     CLI->>FS: write changed files only
//! ```
//!
//! A failure anywhere before the write phase leaves the output tree untouched.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use provider_gen::generator::{Generator, GeneratorConfig};
//!
//! # fn main() -> Result<(), provider_gen::error::Error> {
//! let report = Generator::new(GeneratorConfig::default()).run(false)?;
//! println!("{} written, {} unchanged", report.written.len(), report.unchanged.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod generator;
pub mod lint;
pub mod logging;
pub mod schema;

pub use error::{Error, Result};
pub use generator::{Generator, GeneratorConfig};
pub use schema::{load_schema, load_schema_file, Attribute, AttributeType, SchemaConfig};
