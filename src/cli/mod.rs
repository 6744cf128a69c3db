//! # CLI Module
//!
//! Command-line front end of the generator.
//!
//! ## Commands
//!
//! ### `generate` (default)
//!
//! Render every template for every schema and merge the output into the tree:
//!
//! ```bash
//! provider-gen
//! provider-gen generate --output ../terraform-provider --dry-run
//! ```
//!
//! Options:
//! - `--output <DIR>` - Output root (overrides `output_dir` in the config)
//! - `--dry-run` - Report what would change without writing
//!
//! ### `validate`
//!
//! Load and validate every schema:
//!
//! ```bash
//! provider-gen validate
//! ```
//!
//! ### `lint`
//!
//! Report likely schema mistakes:
//!
//! ```bash
//! provider-gen lint --fail-on-error
//! ```
//!
//! Every command accepts `--config <FILE>` (or `PROVIDER_GEN_CONFIG`); without
//! it `./provider-gen.toml` is used when present.

mod commands;


pub use commands::{load_config, run_cli, Cli, Commands};
