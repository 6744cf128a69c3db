use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::generator::{load_generator_config, resolve_config_path, Generator, GeneratorConfig};
use crate::lint::{has_errors, lint_definitions, print_lint_issues, LintIssue, LintSeverity};

/// Command-line interface for provider-gen
///
/// Runs with no arguments from the repository root: `provider-gen` alone is
/// `provider-gen generate`.
#[derive(Parser, Debug)]
#[command(name = "provider-gen")]
#[command(about = "Generate provider sources from YAML schemas", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the generator configuration file (default: ./provider-gen.toml if present)
    #[arg(short, long, global = true, env = "PROVIDER_GEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// The subcommand to execute (default: generate)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Render every template for every schema and merge the results into the output tree
    Generate {
        /// Output root, overriding `output_dir` from the configuration
        #[arg(short, long, env = "PROVIDER_GEN_OUTPUT")]
        output: Option<PathBuf>,

        /// Perform a dry run: report what would change without writing files
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Load and validate every schema without rendering anything
    Validate,
    /// Lint every schema
    ///
    /// Reports issues that load fine but are probably mistakes:
    /// - duplicate sibling names
    /// - minimum bounds greater than maximum bounds
    /// - enum values on non-string attributes
    /// - mandatory attributes that generated tests cannot set
    Lint {
        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Generate {
            output: None,
            dry_run: false,
        }
    }
}

/// Resolve the generator configuration for a CLI invocation
///
/// An explicit `--config` path must exist. Relative paths inside a config
/// file that lives outside the working directory are taken relative to that
/// file.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("config file {} does not exist", path.display());
        }
    }
    let Some(path) = resolve_config_path(explicit) else {
        info!("no configuration file, using defaults");
        return Ok(GeneratorConfig::default());
    };
    let config = load_generator_config(&path)?.unwrap_or_default();
    info!(path = %path.display(), "loaded configuration");
    Ok(match path.parent() {
        Some(root) if !root.as_os_str().is_empty() => config.rooted_at(root),
        _ => config,
    })
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file is missing (when explicit) or malformed
/// - A schema fails to parse or validate
/// - A template fails to parse or render
/// - An output file cannot be written
/// - `lint --fail-on-error` finds error-level issues
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command.unwrap_or_default() {
        Commands::Generate { output, dry_run } => {
            let mut config = config;
            if let Some(output) = output {
                config.output_dir = output;
            }
            let output_dir = config.output_dir.clone();
            let report = Generator::new(config)
                .run(dry_run)
                .with_context(|| format!("generation into {} failed", output_dir.display()))?;
            let verb = if dry_run { "would write" } else { "wrote" };
            info!(
                schemas = report.schemas,
                written = report.written.len(),
                unchanged = report.unchanged.len(),
                "generation complete"
            );
            println!(
                "✅ {} schema(s): {verb} {} file(s), {} unchanged",
                report.schemas,
                report.written.len(),
                report.unchanged.len()
            );
            if dry_run {
                for path in &report.written {
                    println!("   {}", path.display());
                }
            }
            Ok(())
        }
        Commands::Validate => {
            let schemas = Generator::new(config).load_schemas()?;
            for (path, schema) in &schemas {
                println!("   {} ({})", schema.name, path.display());
            }
            println!("✅ {} schema(s) valid", schemas.len());
            Ok(())
        }
        Commands::Lint {
            fail_on_error,
            errors_only,
        } => {
            let issues = lint_definitions(&config.definitions_dir)?;
            let shown: Vec<LintIssue> = if errors_only {
                issues
                    .iter()
                    .filter(|i| i.severity == LintSeverity::Error)
                    .cloned()
                    .collect()
            } else {
                issues.clone()
            };
            print_lint_issues(&shown);
            if has_errors(&issues) {
                if fail_on_error {
                    bail!("lint found error-level issues");
                }
                warn!("lint found error-level issues");
            }
            Ok(())
        }
    }
}
