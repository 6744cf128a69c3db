use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{Artifact, ARTIFACTS, CHANGELOG_OUTPUT, CHANGELOG_TEMPLATE, PROVIDER_OUTPUT, PROVIDER_TEMPLATE};
use crate::error::{Error, Result};
use crate::generator::config::GeneratorConfig;
use crate::generator::functions::FunctionRegistry;
use crate::generator::sections::{read_existing, reconcile, section_names};
use crate::generator::templates::{render, ArtifactKind, TemplateSource};
use crate::schema::{load_schema_file, SchemaConfig};

/// Context for per-schema templates: the schema's fields at top level plus
/// the provider name.
#[derive(Serialize)]
struct SchemaContext<'a> {
    provider: &'a str,
    #[serde(flatten)]
    schema: &'a SchemaConfig,
}

#[derive(Serialize)]
struct ProviderContext<'a> {
    provider: &'a str,
    schemas: &'a [SchemaConfig],
}

#[derive(Serialize)]
struct ChangelogContext<'a> {
    provider: &'a str,
    content: &'a str,
}

/// One output file, fully rendered and reconciled, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub content: String,
    /// False when the file already holds exactly `content`
    pub changed: bool,
}

/// Outcome of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of schema units loaded
    pub schemas: usize,
    /// Files written, or that would be written in a dry run
    pub written: Vec<PathBuf>,
    /// Files whose content was already up to date
    pub unchanged: Vec<PathBuf>,
}

/// Schema files in `dir` (`*.yaml`, `*.yml`), sorted by file name.
pub fn list_definitions(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::fs("list", dir, e))?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::fs("list", dir, e))?.path();
        let is_schema = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml" | "yml")
        );
        if is_schema && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Drives a full generation run: load, render, reconcile, write.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    registry: FunctionRegistry,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let registry = FunctionRegistry::new(config.max_nesting_depth);
        Self { config, registry }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Load and validate every schema; the first failure aborts.
    pub fn load_schemas(&self) -> Result<Vec<(PathBuf, SchemaConfig)>> {
        let mut schemas = Vec::new();
        for path in list_definitions(&self.config.definitions_dir)? {
            let schema = load_schema_file(&path)?;
            debug!(path = %path.display(), schema = %schema.name, "loaded schema");
            schemas.push((path, schema));
        }
        Ok(schemas)
    }

    /// Render and reconcile every output in memory.
    ///
    /// Nothing is written, so a schema or template failure leaves the output
    /// tree untouched.
    pub fn plan(&self) -> Result<(usize, Vec<PlannedFile>)> {
        let schemas: Vec<SchemaConfig> = self
            .load_schemas()?
            .into_iter()
            .map(|(_, schema)| schema)
            .collect();
        let templates = ARTIFACTS
            .iter()
            .map(|a| TemplateSource::load(&self.config.templates_dir, a.template, a.kind))
            .collect::<Result<Vec<_>>>()?;

        let mut planner = Planner::default();
        for schema in &schemas {
            let context = SchemaContext {
                provider: &self.config.provider,
                schema,
            };
            for (artifact, template) in ARTIFACTS.iter().zip(&templates) {
                if !artifact.applies_to(schema) {
                    continue;
                }
                let fresh = render(&self.registry, template, &context)
                    .map_err(|e| e.into_error(&template.name, &schema.name))?;
                planner.add(self.output_path(artifact, schema), &schema.name, artifact.kind, fresh)?;
            }
        }

        let provider = TemplateSource::load(&self.config.templates_dir, PROVIDER_TEMPLATE, ArtifactKind::Code)?;
        let fresh = render(
            &self.registry,
            &provider,
            &ProviderContext {
                provider: &self.config.provider,
                schemas: &schemas,
            },
        )
        .map_err(|e| e.into_error(PROVIDER_TEMPLATE, "<aggregate>"))?;
        planner.add(
            self.config.output_dir.join(PROVIDER_OUTPUT),
            "<aggregate>",
            ArtifactKind::Code,
            fresh,
        )?;

        let changelog_path = &self.config.changelog;
        let content =
            fs::read_to_string(changelog_path).map_err(|e| Error::fs("read", changelog_path, e))?;
        let changelog =
            TemplateSource::load(&self.config.templates_dir, CHANGELOG_TEMPLATE, ArtifactKind::Document)?;
        let fresh = render(
            &self.registry,
            &changelog,
            &ChangelogContext {
                provider: &self.config.provider,
                content: &content,
            },
        )
        .map_err(|e| e.into_error(CHANGELOG_TEMPLATE, "<changelog>"))?;
        planner.add(
            self.config.output_dir.join(CHANGELOG_OUTPUT),
            "<changelog>",
            ArtifactKind::Document,
            fresh,
        )?;

        Ok((schemas.len(), planner.files))
    }

    /// Plan the run, then write every changed file unless `dry_run` is set.
    pub fn run(&self, dry_run: bool) -> Result<GenerationReport> {
        let (schemas, files) = self.plan()?;
        let mut report = GenerationReport {
            schemas,
            ..GenerationReport::default()
        };
        for file in files {
            if !file.changed {
                debug!(path = %file.path.display(), "up to date");
                report.unchanged.push(file.path);
                continue;
            }
            if dry_run {
                info!(path = %file.path.display(), "would write");
            } else {
                write_file(&file.path, &file.content)?;
                info!(path = %file.path.display(), "wrote");
            }
            report.written.push(file.path);
        }
        Ok(report)
    }

    fn output_path(&self, artifact: &Artifact, schema: &SchemaConfig) -> PathBuf {
        artifact.output_path(&self.config.output_dir, schema)
    }
}

#[derive(Default)]
struct Planner {
    files: Vec<PlannedFile>,
    /// Output path -> owner, to reject two renders targeting one file
    owners: HashMap<PathBuf, String>,
}

impl Planner {
    fn add(&mut self, path: PathBuf, owner: &str, kind: ArtifactKind, fresh: String) -> Result<()> {
        if let Some(first) = self.owners.get(&path) {
            return Err(Error::DuplicateOutput {
                path,
                first: first.clone(),
                second: owner.to_string(),
            });
        }
        let existing = read_existing(&path)?;
        let content = match kind {
            ArtifactKind::Code => {
                if let Some(old) = existing.as_deref() {
                    debug!(
                        path = %path.display(),
                        sections = ?section_names(old),
                        "reconciling sections"
                    );
                }
                reconcile(existing.as_deref(), &fresh)
            }
            ArtifactKind::Document => fresh,
        };
        let changed = existing.as_deref() != Some(content.as_str());
        self.owners.insert(path.clone(), owner.to_string());
        self.files.push(PlannedFile {
            path,
            content,
            changed,
        });
        Ok(())
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::fs("create", parent, e))?;
    }
    fs::write(path, content).map_err(|e| Error::fs("write", path, e))
}
