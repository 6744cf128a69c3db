mod generate;

pub use generate::{list_definitions, GenerationReport, Generator, PlannedFile};

use std::path::{Path, PathBuf};

use super::templates::ArtifactKind;
use crate::schema::SchemaConfig;

/// Which schemas an artifact is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFamily {
    /// Every schema
    Model,
    /// Skipped when the schema sets `no_data_source`
    DataSource,
    /// Skipped when the schema sets `no_resource`
    Resource,
}

/// One per-schema output: a template and the rule naming its output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artifact {
    /// Template file name inside the templates directory
    pub template: &'static str,
    /// Output path up to the schema's short name
    pub prefix: &'static str,
    /// Output path after the schema's short name
    pub suffix: &'static str,
    pub kind: ArtifactKind,
    pub family: ArtifactFamily,
}

impl Artifact {
    /// `output_dir/<prefix><tf_name><suffix>`
    pub fn output_path(&self, output_dir: &Path, schema: &SchemaConfig) -> PathBuf {
        output_dir.join(format!("{}{}{}", self.prefix, schema.tf_name, self.suffix))
    }

    pub fn applies_to(&self, schema: &SchemaConfig) -> bool {
        match self.family {
            ArtifactFamily::Model => true,
            ArtifactFamily::DataSource => !schema.no_data_source,
            ArtifactFamily::Resource => !schema.no_resource,
        }
    }
}

/// Per-schema artifacts, in render order.
pub const ARTIFACTS: &[Artifact] = &[
    Artifact {
        template: "model.rs",
        prefix: "src/provider/model_",
        suffix: ".rs",
        kind: ArtifactKind::Code,
        family: ArtifactFamily::Model,
    },
    Artifact {
        template: "data_source.rs",
        prefix: "src/provider/data_source_",
        suffix: ".rs",
        kind: ArtifactKind::Code,
        family: ArtifactFamily::DataSource,
    },
    Artifact {
        template: "data_source_test.rs",
        prefix: "tests/data_source_",
        suffix: ".rs",
        kind: ArtifactKind::Code,
        family: ArtifactFamily::DataSource,
    },
    Artifact {
        template: "resource.rs",
        prefix: "src/provider/resource_",
        suffix: ".rs",
        kind: ArtifactKind::Code,
        family: ArtifactFamily::Resource,
    },
    Artifact {
        template: "resource_test.rs",
        prefix: "tests/resource_",
        suffix: ".rs",
        kind: ArtifactKind::Code,
        family: ArtifactFamily::Resource,
    },
    Artifact {
        template: "data-source.tf",
        prefix: "examples/data-sources/",
        suffix: "/data-source.tf",
        kind: ArtifactKind::Document,
        family: ArtifactFamily::DataSource,
    },
    Artifact {
        template: "resource.tf",
        prefix: "examples/resources/",
        suffix: "/resource.tf",
        kind: ArtifactKind::Document,
        family: ArtifactFamily::Resource,
    },
    Artifact {
        template: "import.sh",
        prefix: "examples/resources/",
        suffix: "/import.sh",
        kind: ArtifactKind::Document,
        family: ArtifactFamily::Resource,
    },
];

/// Registration table rendered once over every schema.
pub const PROVIDER_TEMPLATE: &str = "provider.rs";
pub const PROVIDER_OUTPUT: &str = "src/provider/mod.rs";

/// Guide that embeds the changelog document verbatim.
pub const CHANGELOG_TEMPLATE: &str = "changelog.md";
pub const CHANGELOG_OUTPUT: &str = "docs/guides/changelog.md";
