#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

pub mod workspace {
    use provider_gen::generator::GeneratorConfig;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Minimal template set: one section per source file, one line per document.
    pub const TEMPLATES: &[(&str, &str)] = &[
        (
            "model.rs",
            "#![cfg(any())]\n//template:begin model\npub struct {{ type_name }};\npub const PATH: &str = \"{{ rest_endpoint }}\";\n//template:end model\n",
        ),
        (
            "data_source.rs",
            "#![cfg(any())]\n//template:begin dataSource\n// {{ ds_description }}\n//template:end dataSource\n",
        ),
        (
            "data_source_test.rs",
            "#![cfg(any())]\n//template:begin test\n// data source test for {{ tf_name }}\n//template:end test\n",
        ),
        (
            "resource.rs",
            "#![cfg(any())]\n//template:begin resource\n// {{ res_description }}\n//template:end resource\n//template:begin import\n// {{ import_parts(attributes) }} part(s)\n//template:end import\n",
        ),
        (
            "resource_test.rs",
            "#![cfg(any())]\n//template:begin test\n// resource test for {{ tf_name }}\n//template:end test\n",
        ),
        ("data-source.tf", "data \"{{ provider }}_{{ tf_name }}\" \"example\" {}\n"),
        ("resource.tf", "resource \"{{ provider }}_{{ tf_name }}\" \"example\" {}\n"),
        ("import.sh", "terraform import {{ provider }}_{{ tf_name }}.example {{ import_parts(attributes) }}\n"),
        (
            "provider.rs",
            "#![cfg(any())]\n//template:begin registry\n{% for s in schemas %}{{ s.tf_name }}\n{% endfor %}//template:end registry\n",
        ),
        ("changelog.md", "# Changelog\n\n{{ content }}"),
    ];

    pub const ALPHA: &str = "\
name: Alpha Site
rest_endpoint: /api/v1/alpha
attributes:
  - model_name: parentId
    type: String
    reference: true
  - model_name: name
    type: String
    id: true
";

    pub const BETA: &str = "\
name: Beta
rest_endpoint: /api/v1/beta
no_resource: true
";

    /// A throwaway generator root with definitions, templates and a changelog.
    pub struct Workspace {
        pub dir: TempDir,
    }

    impl Workspace {
        pub fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let ws = Workspace { dir };
            fs::create_dir_all(ws.definitions()).unwrap();
            fs::create_dir_all(ws.templates()).unwrap();
            for (name, source) in TEMPLATES {
                ws.template(name, source);
            }
            fs::write(ws.root().join("CHANGELOG.md"), "## 1.0.0\n\n- Initial release\n").unwrap();
            ws
        }

        /// Workspace with the `alpha` and `beta` schemas.
        pub fn with_schemas() -> Self {
            let ws = Self::new();
            ws.schema("alpha.yaml", ALPHA);
            ws.schema("beta.yaml", BETA);
            ws
        }

        pub fn root(&self) -> &Path {
            self.dir.path()
        }

        pub fn definitions(&self) -> PathBuf {
            self.root().join("definitions")
        }

        pub fn templates(&self) -> PathBuf {
            self.root().join("templates")
        }

        pub fn out(&self) -> PathBuf {
            self.root().join("out")
        }

        pub fn schema(&self, file: &str, yaml: &str) {
            fs::write(self.definitions().join(file), yaml).unwrap();
        }

        pub fn template(&self, name: &str, source: &str) {
            fs::write(self.templates().join(name), source).unwrap();
        }

        pub fn config(&self) -> GeneratorConfig {
            GeneratorConfig {
                provider: "acme".to_string(),
                definitions_dir: self.definitions(),
                templates_dir: self.templates(),
                output_dir: self.out(),
                changelog: self.root().join("CHANGELOG.md"),
                ..GeneratorConfig::default()
            }
        }

        /// Write a `provider-gen.toml` equivalent to [`Workspace::config`].
        pub fn config_file(&self) -> PathBuf {
            let path = self.root().join("provider-gen.toml");
            fs::write(
                &path,
                "provider = \"acme\"\ndefinitions_dir = \"definitions\"\ntemplates_dir = \"templates\"\noutput_dir = \"out\"\n",
            )
            .unwrap();
            path
        }

        pub fn read(&self, rel: &str) -> String {
            fs::read_to_string(self.out().join(rel)).unwrap()
        }

        pub fn write(&self, rel: &str, content: &str) {
            fs::write(self.out().join(rel), content).unwrap();
        }

        /// Every file under the output root, relative and sorted.
        pub fn output_files(&self) -> Vec<String> {
            let mut files = Vec::new();
            collect(&self.out(), &self.out(), &mut files);
            files.sort();
            files
        }
    }

    fn collect(root: &Path, dir: &Path, out: &mut Vec<String>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries {
            let path = entry.unwrap().path();
            if path.is_dir() {
                collect(root, &path, out);
            } else {
                out.push(path.strip_prefix(root).unwrap().to_string_lossy().into_owned());
            }
        }
    }
}
