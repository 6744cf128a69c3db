#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::schema::{load_schema, SchemaConfig};
use minijinja::Value;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const TREE_SCHEMA: &str = r#"
name: Test Object
rest_endpoint: /api/v1/test
attributes:
  - model_name: name
    type: String
    reference: true
  - model_name: id
    type: String
    id: true
  - model_name: plain
    type: String
  - model_name: outer
    type: List
    attributes:
      - model_name: key
        type: String
        id: true
      - model_name: inner
        type: List
        attributes:
          - model_name: leaf
            type: Int64
            resource_id: true
  - model_name: tags
    type: Map
    attributes:
      - model_name: value
        type: String
  - model_name: vlans
    type: Set
    element_type: Int64
  - model_name: names
    type: List
    element_type: String
"#;

fn tree() -> SchemaConfig {
    load_schema(TREE_SCHEMA.as_bytes()).unwrap()
}

fn attr<'a>(schema: &'a SchemaConfig, tf_name: &str) -> &'a crate::schema::Attribute {
    schema
        .attributes
        .iter()
        .find(|a| a.tf_name == tf_name)
        .unwrap()
}

#[derive(Serialize)]
struct Attrs<'a> {
    attributes: &'a [crate::schema::Attribute],
}

fn render_doc<S: Serialize>(registry: &FunctionRegistry, source: &str, data: &S) -> Result<String, RenderError> {
    render(registry, &TemplateSource::new("test.tf", source, ArtifactKind::Document), data)
}

fn empty() -> BTreeMap<&'static str, String> {
    BTreeMap::new()
}

// ----- names -----

#[test]
fn test_to_pascal_case() {
    assert_eq!(to_pascal_case("ssid_details"), "SsidDetails");
    assert_eq!(to_pascal_case("single"), "Single");
    assert_eq!(to_pascal_case(""), "");
    assert_eq!(to_pascal_case("_leading__double_"), "LeadingDouble");
    assert_eq!(to_pascal_case("keepCase_rest"), "KeepCaseRest");
}

#[test]
fn test_pascal_and_snake_names() {
    assert_eq!(to_pascal_name("Wireless Profile"), "WirelessProfile");
    assert_eq!(to_pascal_name("Access-Point group"), "AccessPointGroup");
    assert_eq!(to_snake_name("Wireless Profile"), "wireless_profile");
    assert_eq!(to_snake_name("Access-Point Group"), "access_point_group");
}

#[test]
fn test_derive_tf_name() {
    assert_eq!(derive_tf_name("EnableSomething"), "enable_something");
    assert_eq!(derive_tf_name("name"), "name");
    assert_eq!(derive_tf_name("vlanId"), "vlan_id");
    assert_eq!(derive_tf_name("HTTPPort"), "h_t_t_p_port");
    assert_eq!(derive_tf_name(""), "");
}

#[test]
fn test_build_path_and_article() {
    assert_eq!(build_path(&["response", "id"]), "response.id");
    assert_eq!(build_path::<&str>(&[]), "");
    assert_eq!(indefinite_article("Interface"), "an");
    assert_eq!(indefinite_article("site"), "a");
    assert_eq!(indefinite_article(""), "a");
}

// ----- predicates -----

#[test]
fn test_collection_predicates() {
    let schema = tree();
    let vlans = attr(&schema, "vlans");
    let names = attr(&schema, "names");
    let outer = attr(&schema, "outer");
    let tags = attr(&schema, "tags");
    let plain = attr(&schema, "plain");

    assert!(is_list_set(vlans));
    assert!(is_int64_list_set(vlans));
    assert!(!is_string_list_set(vlans));
    assert!(is_string_list_set(names));
    assert!(!is_nested(vlans));

    assert!(is_nested(outer) && is_nested_list(outer));
    assert!(!is_nested_set(outer) && !is_list_set(outer));
    assert!(is_nested(tags) && is_nested_map(tags));

    assert!(!is_nested(plain) && !is_list_set(plain));
}

#[test]
fn test_id_predicates_look_at_immediate_children() {
    let schema = tree();
    let outer = attr(&schema, "outer");

    assert!(has_id(&schema.attributes));
    assert!(has_reference(&schema.attributes));
    assert!(has_id(&outer.attributes));
    assert!(!has_reference(&outer.attributes));
    assert!(!has_id(&attr(&schema, "tags").attributes));
    // `leaf` is two levels down: only the recursive check sees it
    assert!(has_resource_id(&schema.attributes));
    assert!(has_resource_id(&outer.attributes));
    assert!(!has_resource_id(&attr(&schema, "tags").attributes));
}

#[test]
fn test_import_parts() {
    let schema = load_schema(
        br#"
name: Thing
rest_endpoint: /things
attributes:
  - model_name: parent
    type: String
    reference: true
  - model_name: id
    type: String
    id: true
  - model_name: both
    type: String
    id: true
    reference: true
  - model_name: plain
    type: String
"#,
    )
    .unwrap();
    assert_eq!(import_parts(&schema.attributes[..3]), 4);
    let without_both = [
        schema.attributes[0].clone(),
        schema.attributes[1].clone(),
        schema.attributes[3].clone(),
    ];
    assert_eq!(import_parts(&without_both), 3);
    assert_eq!(import_parts(&[]), 1);
}

#[test]
fn test_nested_types_pre_order() {
    let schema = tree();
    let names: Vec<&str> = nested_types(&schema.attributes, DEFAULT_MAX_NESTING_DEPTH)
        .unwrap()
        .into_iter()
        .map(|a| a.type_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["TestObjectOuter", "TestObjectOuterInner", "TestObjectTags"]
    );
}

#[test]
fn test_nested_types_depth_limit() {
    let schema = load_schema(
        br#"
name: Deep
rest_endpoint: /deep
attributes:
  - model_name: a
    type: List
    attributes:
      - model_name: b
        type: List
        attributes:
          - model_name: c
            type: Set
            attributes:
              - model_name: d
                type: String
"#,
    )
    .unwrap();
    assert_eq!(nested_types(&schema.attributes, 3).unwrap().len(), 3);

    let err = nested_types(&schema.attributes, 2).unwrap_err();
    assert_eq!(
        err,
        DepthExceeded {
            type_name: "DeepABC".to_string(),
            depth: 3,
            max_depth: 2,
        }
    );
}

// ----- rendering -----

#[test]
fn test_render_name_functions() {
    let registry = FunctionRegistry::default();
    let out = render_doc(
        &registry,
        r#"{{ pascal_case("ssid_details") }} {{ pascal_name("Wireless Profile") }} {{ snake_name("Wireless Profile") }} {{ path(["a", "b"]) }} {{ subtract(5, 2) }}"#,
        &empty(),
    )
    .unwrap();
    assert_eq!(out, "SsidDetails WirelessProfile wireless_profile a.b 3");
}

#[test]
fn test_render_predicates_on_attributes() {
    let schema = tree();
    let registry = FunctionRegistry::default();
    let out = render_doc(
        &registry,
        "{% for a in attributes %}{% if is_string_list_set(a) %}{{ a.tf_name }}:s {% elif is_nested(a) %}{{ a.tf_name }}:n {% endif %}{% endfor %}",
        &Attrs {
            attributes: &schema.attributes,
        },
    )
    .unwrap();
    assert_eq!(out, "outer:n tags:n names:s ");

    let out = render_doc(
        &registry,
        "{{ import_parts(attributes) }} {{ has_id(attributes) }} {{ has_resource_id(attributes) }}",
        &Attrs {
            attributes: &schema.attributes,
        },
    )
    .unwrap();
    assert_eq!(out, "3 true true");
}

#[test]
fn test_render_nested_types() {
    let schema = tree();
    let out = render_doc(
        &FunctionRegistry::default(),
        "{% for t in nested_types(attributes) %}{{ t.type_name }},{% endfor %}",
        &Attrs {
            attributes: &schema.attributes,
        },
    )
    .unwrap();
    assert_eq!(out, "TestObjectOuter,TestObjectOuterInner,TestObjectTags,");
}

#[test]
fn test_render_depth_guard_is_execution_error() {
    let schema = tree();
    let registry = FunctionRegistry::new(1);
    assert_eq!(
        render_doc(&registry, "{{ MAX_NESTING_DEPTH }}", &empty()).unwrap(),
        "1"
    );
    let err = render_doc(
        &registry,
        "{% for t in nested_types(attributes) %}{{ t.type_name }}{% endfor %}",
        &Attrs {
            attributes: &schema.attributes,
        },
    )
    .unwrap_err();
    match err {
        RenderError::Execution(e) => assert!(e.to_string().contains("TestObjectOuterInner")),
        other => panic!("expected execution error, got {other:?}"),
    }
}

#[test]
fn test_fail_aborts_with_formatted_message() {
    let err = render_doc(
        &FunctionRegistry::default(),
        r#"before {{ fail("unsupported attribute {} at depth {}", "vlan", 3) }} after"#,
        &empty(),
    )
    .unwrap_err();
    match err {
        RenderError::Execution(e) => {
            assert!(e.to_string().contains("unsupported attribute vlan at depth 3"))
        }
        other => panic!("expected execution error, got {other:?}"),
    }
}

#[test]
fn test_subtract_overflow_is_execution_error() {
    let registry = FunctionRegistry::default();
    assert_eq!(
        render_doc(&registry, "{{ subtract(-9223372036854775807, 1) }}", &empty()).unwrap(),
        i64::MIN.to_string()
    );
    match render_doc(&registry, "{{ subtract(9223372036854775807, -1) }}", &empty()).unwrap_err() {
        RenderError::Execution(e) => assert!(e.to_string().contains("overflows")),
        other => panic!("expected execution error, got {other:?}"),
    }
}

#[test]
fn test_format_message() {
    assert_eq!(format_message("a {} b {}", &[Value::from(1)]), "a 1 b {}");
    assert_eq!(format_message("no args", &[Value::from("x")]), "no args");
    assert_eq!(
        format_message("{}{}", &[Value::from("x"), Value::from(true)]),
        "xtrue"
    );
}

#[test]
fn test_parse_and_execution_errors_are_distinct() {
    let registry = FunctionRegistry::default();
    assert!(matches!(
        render_doc(&registry, "{% for %}", &empty()),
        Err(RenderError::Parse(_))
    ));
    assert!(matches!(
        render_doc(&registry, "{{ missing }}", &empty()),
        Err(RenderError::Execution(_))
    ));
    assert!(matches!(
        render_doc(&registry, "{{ no_such_function() }}", &empty()),
        Err(RenderError::Execution(_))
    ));
}

#[test]
fn test_code_template_first_line_stripped() {
    let mut data = BTreeMap::new();
    data.insert("name", "read_site".to_string());
    let template = TemplateSource::new(
        "model.rs",
        "#![cfg(any())]\n{% if true %}\nfn {{ name }}() {}\n{% endif %}\n",
        ArtifactKind::Code,
    );
    assert_eq!(template.body(), "{% if true %}\nfn {{ name }}() {}\n{% endif %}\n");
    let out = render(&FunctionRegistry::default(), &template, &data).unwrap();
    assert_eq!(out, "fn read_site() {}\n");

    // The directive line would be a parse error if it were not stripped
    let directive = TemplateSource::new("x.rs", "{% bad\nok\n", ArtifactKind::Code);
    assert_eq!(render(&FunctionRegistry::default(), &directive, &data).unwrap(), "ok\n");
}

#[test]
fn test_document_template_is_not_stripped() {
    let template = TemplateSource::new("import.sh", "line one\nline two\n", ArtifactKind::Document);
    assert_eq!(template.body(), "line one\nline two\n");
}

#[test]
fn test_registry_lists_installed_functions() {
    let registry = FunctionRegistry::default();
    assert_eq!(registry.max_nesting_depth(), DEFAULT_MAX_NESTING_DEPTH);
    let mut env = minijinja::Environment::new();
    registry.install(&mut env);
    for name in FunctionRegistry::FUNCTIONS {
        let src = format!("{{{{ {name} is defined }}}}");
        let out = env.render_str(&src, ()).unwrap();
        assert_eq!(out, "true", "{name} should be installed");
    }
}

// ----- sections -----

const FRESH: &str = "\
header
//template:begin imports
use a;
//template:end imports
middle
//template:begin body
fn body() {}
//template:end body
";

#[test]
fn test_parse_marker() {
    assert_eq!(parse_marker("//template:begin model"), Some(Marker::Begin("model")));
    assert_eq!(parse_marker("//template:end model"), Some(Marker::End("model")));
    assert_eq!(parse_marker("    //template:end model"), Some(Marker::End("model")));
    assert_eq!(parse_marker("//template:begin"), None);
    assert_eq!(parse_marker("//template:begin  model"), None);
    assert_eq!(parse_marker("//template:begin model extra"), None);
    assert_eq!(parse_marker("//template:middle model"), None);
    assert_eq!(parse_marker("fn main() {}"), None);
    assert_eq!(parse_marker("//template:begin model\r\n"), Some(Marker::Begin("model")));
    assert_eq!(parse_marker("//template:end model\n"), Some(Marker::End("model")));
}

#[test]
fn test_extract_and_list_sections() {
    assert_eq!(
        extract_section(FRESH, "body"),
        Some("//template:begin body\nfn body() {}\n//template:end body\n")
    );
    assert_eq!(extract_section(FRESH, "missing"), None);
    assert_eq!(extract_section("//template:begin open\nx\n", "open"), None);
    assert_eq!(section_names(FRESH), vec!["imports", "body"]);
}

#[test]
fn test_reconcile_without_existing_returns_fresh() {
    assert_eq!(reconcile(None, FRESH), FRESH);
    assert_eq!(reconcile(Some(""), FRESH), FRESH);
}

#[test]
fn test_reconcile_is_idempotent() {
    let once = reconcile(Some(FRESH), FRESH);
    assert_eq!(once, FRESH);
    assert_eq!(reconcile(Some(&once), FRESH), once);
}

#[test]
fn test_reconcile_preserves_outside_edits() {
    let existing = "\
header edited by hand
//template:begin imports
use old;
//template:end imports
// custom helper
fn helper() {}
//template:begin body
fn old_body() {}
//template:end body
trailer
";
    let expected = "\
header edited by hand
//template:begin imports
use a;
//template:end imports
// custom helper
fn helper() {}
//template:begin body
fn body() {}
//template:end body
trailer
";
    let merged = reconcile(Some(existing), FRESH);
    assert_eq!(merged, expected);
    assert_eq!(reconcile(Some(&merged), FRESH), merged);
}

#[test]
fn test_reconcile_does_not_inject_new_sections() {
    let existing = "mine\n//template:begin body\nstale\n//template:end body\n";
    assert_eq!(
        reconcile(Some(existing), FRESH),
        "mine\n//template:begin body\nfn body() {}\n//template:end body\n"
    );
}

#[test]
fn test_reconcile_drops_sections_missing_from_fresh() {
    let existing = "a\n//template:begin gone\nold\n//template:end gone\nb\n";
    assert_eq!(reconcile(Some(existing), FRESH), "a\nb\n");
}

#[test]
fn test_reconcile_unterminated_section_restored() {
    let existing = "a\n//template:begin body\nkept\nmore\n";
    assert_eq!(reconcile(Some(existing), FRESH), existing);
}

#[test]
fn test_reconcile_ignores_foreign_end_marker_inside_section() {
    let existing = "//template:begin body\n//template:end imports\nold\n//template:end body\nafter\n";
    assert_eq!(
        reconcile(Some(existing), FRESH),
        "//template:begin body\nfn body() {}\n//template:end body\nafter\n"
    );
}

#[test]
fn test_reconcile_malformed_markers_are_content() {
    let existing = "//template:begin  body\nhand\n//template:end  body\n";
    assert_eq!(reconcile(Some(existing), FRESH), existing);
}

#[test]
fn test_reconcile_keeps_crlf_outside_sections() {
    let existing = "// hand\r\n//template:begin body\r\nold\r\n//template:end body\r\n// tail\r\n";
    assert_eq!(
        reconcile(Some(existing), FRESH),
        "// hand\r\n//template:begin body\nfn body() {}\n//template:end body\n// tail\r\n"
    );

    let crlf_fresh = FRESH.replace('\n', "\r\n");
    assert_eq!(reconcile(Some(existing), &crlf_fresh).replace("fn body() {}", "old"), existing);
}

#[test]
fn test_reconcile_keeps_missing_final_newline() {
    let existing = "//template:begin body\nfn body() {}\n//template:end body\n// hand tail";
    assert_eq!(reconcile(Some(existing), FRESH), existing);

    let unterminated = "a\n//template:begin body\nkept";
    assert_eq!(reconcile(Some(unterminated), FRESH), unterminated);

    // fresh block at EOF without a newline borrows the old line ending
    let fresh = "//template:begin body\nnew\n//template:end body";
    let existing = "//template:begin body\nold\n//template:end body\nafter\n";
    assert_eq!(
        reconcile(Some(existing), fresh),
        "//template:begin body\nnew\n//template:end body\nafter\n"
    );
}

#[test]
fn test_reconcile_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.rs");
    assert_eq!(reconcile_file(&path, FRESH).unwrap(), FRESH);

    fs::write(&path, "top\n//template:begin imports\nx\n//template:end imports\n").unwrap();
    assert_eq!(
        reconcile_file(&path, FRESH).unwrap(),
        "top\n//template:begin imports\nuse a;\n//template:end imports\n"
    );
    assert!(read_existing(dir.path()).is_err());
}

// ----- config and artifacts -----

#[test]
fn test_artifact_paths_and_families() {
    let mut schema = tree();
    let out = Path::new("/out");
    let paths: Vec<PathBuf> = ARTIFACTS
        .iter()
        .filter(|a| a.applies_to(&schema))
        .map(|a| a.output_path(out, &schema))
        .collect();
    assert_eq!(paths.len(), ARTIFACTS.len());
    assert!(paths.contains(&PathBuf::from("/out/src/provider/model_test_object.rs")));
    assert!(paths.contains(&PathBuf::from("/out/examples/resources/test_object/import.sh")));

    schema.no_resource = true;
    let families: Vec<ArtifactFamily> = ARTIFACTS
        .iter()
        .filter(|a| a.applies_to(&schema))
        .map(|a| a.family)
        .collect();
    assert!(!families.contains(&ArtifactFamily::Resource));
    assert!(families.contains(&ArtifactFamily::Model));
}

#[test]
fn test_list_definitions_sorted_and_filtered() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["b.yaml", "a.yml", "c.txt", "README.md"] {
        fs::write(dir.path().join(name), "").unwrap();
    }
    fs::create_dir(dir.path().join("nested.yaml")).unwrap();
    let names: Vec<String> = list_definitions(dir.path())
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.yml", "b.yaml"]);
}

#[test]
fn test_generator_config_defaults_and_rooting() {
    let config: GeneratorConfig = toml::from_str("provider = \"catalyst\"").unwrap();
    assert_eq!(config.provider, "catalyst");
    assert_eq!(config.definitions_dir, PathBuf::from("gen/definitions"));
    assert_eq!(config.max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);

    let rooted = config.rooted_at(Path::new("/repo"));
    assert_eq!(rooted.templates_dir, PathBuf::from("/repo/gen/templates"));
    assert_eq!(rooted.changelog, PathBuf::from("/repo/CHANGELOG.md"));

    assert!(toml::from_str::<GeneratorConfig>("unknown = 1").is_err());
}

#[test]
fn test_load_generator_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_CONFIG_FILE);
    assert!(load_generator_config(&path).unwrap().is_none());

    fs::write(&path, "output_dir = \"out\"\nmax_nesting_depth = 2\n").unwrap();
    let config = load_generator_config(&path).unwrap().unwrap();
    assert_eq!(config.output_dir, PathBuf::from("out"));
    assert_eq!(config.max_nesting_depth, 2);

    fs::write(&path, "max_nesting_depth = \"deep\"\n").unwrap();
    assert!(matches!(
        load_generator_config(&path),
        Err(crate::error::Error::Config { .. })
    ));

    assert_eq!(
        resolve_config_path(Some(&path)),
        Some(path.clone())
    );
}
