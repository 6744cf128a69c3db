//! # Schema Linter Module
//!
//! Non-fatal checks over loaded schemas. Anything that would make generation
//! impossible is already rejected by [`crate::schema::load_schema`]; the
//! linter reports what loads fine but is probably a mistake.
//!
//! ## Checks Performed
//!
//! 1. **Duplicate names** - two siblings with the same external name (error)
//! 2. **Inverted bounds** - a minimum greater than its maximum (error)
//! 3. **Enum on non-string** - `enum_values` on anything but `String` (warning)
//! 4. **Untestable mandatory** - a mandatory attribute excluded from tests
//!    with neither `example` nor `test_value` (info)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use provider_gen::lint::{lint_definitions, print_lint_issues};
//!
//! # fn main() -> anyhow::Result<()> {
//! let issues = lint_definitions(std::path::Path::new("gen/definitions"))?;
//! print_lint_issues(&issues);
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::error::Error;
use crate::generator::list_definitions;
use crate::schema::{load_schema_file, Attribute, AttributeType, SchemaConfig};


/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Error - generated code will misbehave
    Error,
    /// Warning - probably unintended
    Warning,
    /// Info - coverage suggestion
    Info,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LintSeverity::Error => "error",
            LintSeverity::Warning => "warning",
            LintSeverity::Info => "info",
        })
    }
}

/// A lint issue found in a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    /// Where the issue occurred (e.g., "Wireless Profile:ssid_details.ssid")
    pub location: String,
    /// Severity of the issue
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "duplicate_name", "inverted_bounds")
    pub kind: String,
    /// Human-readable description of the problem
    pub message: String,
    /// Optional suggestion for how to fix it
    pub suggestion: Option<String>,
}

impl LintIssue {
    /// Create a new lint issue
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion for fixing the issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint every schema in `dir`, in file-name order
///
/// Stops at the first schema that fails to load; lint only runs on schemas
/// that generation would accept.
pub fn lint_definitions(dir: &Path) -> Result<Vec<LintIssue>, Error> {
    let mut issues = Vec::new();
    for path in list_definitions(dir)? {
        let schema = load_schema_file(&path)?;
        issues.extend(lint_schema(&schema));
    }
    Ok(issues)
}

/// Lint one loaded schema
pub fn lint_schema(schema: &SchemaConfig) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    lint_attributes(&mut issues, &schema.name, "", &schema.attributes);
    issues
}

fn lint_attributes(issues: &mut Vec<LintIssue>, schema: &str, parent: &str, attrs: &[Attribute]) {
    let mut seen = HashSet::new();
    for attr in attrs {
        let path = if parent.is_empty() {
            attr.tf_name.clone()
        } else {
            format!("{parent}.{}", attr.tf_name)
        };
        let location = format!("{schema}:{path}");

        if !seen.insert(attr.tf_name.as_str()) {
            issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Error,
                    "duplicate_name",
                    format!("'{}' is declared more than once at this level", attr.tf_name),
                )
                .with_suggestion("Set tf_name explicitly on one of the attributes"),
            );
        }

        lint_bounds(issues, &location, attr);

        if !attr.enum_values.is_empty() && attr.attr_type != AttributeType::String {
            issues.push(LintIssue::new(
                &location,
                LintSeverity::Warning,
                "enum_on_non_string",
                format!("enum_values are only enforced on String attributes, not {}", attr.attr_type),
            ));
        }

        if attr.mandatory && attr.exclude_test && attr.example.is_none() && attr.test_value.is_none() {
            issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Info,
                    "untested_mandatory",
                    "mandatory attribute is excluded from tests and has no example or test_value",
                )
                .with_suggestion("Provide a test_value so generated tests can set it"),
            );
        }

        lint_attributes(issues, schema, &path, &attr.attributes);
    }
}

fn lint_bounds(issues: &mut Vec<LintIssue>, location: &str, attr: &Attribute) {
    let mut check = |field: &str, inverted: bool| {
        if inverted {
            issues.push(LintIssue::new(
                location,
                LintSeverity::Error,
                "inverted_bounds",
                format!("min_{field} is greater than max_{field}"),
            ));
        }
    };
    check("list", matches!((attr.min_list, attr.max_list), (Some(lo), Some(hi)) if lo > hi));
    check("int", matches!((attr.min_int, attr.max_int), (Some(lo), Some(hi)) if lo > hi));
    check("float", matches!((attr.min_float, attr.max_float), (Some(lo), Some(hi)) if lo > hi));
    check(
        "length",
        matches!((attr.string_min_length, attr.string_max_length), (Some(lo), Some(hi)) if lo > hi),
    );
}

/// True when any issue is an error
pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}

/// Print lint issues in a formatted way
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    let count = |severity| issues.iter().filter(|i| i.severity == severity).count();
    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        count(LintSeverity::Error),
        count(LintSeverity::Warning),
        count(LintSeverity::Info)
    );

    for (severity, heading) in [
        (LintSeverity::Error, "❌ Errors (must fix):"),
        (LintSeverity::Warning, "⚠️  Warnings (should fix):"),
        (LintSeverity::Info, "ℹ️  Info:"),
    ] {
        if count(severity) == 0 {
            continue;
        }
        println!("{heading}");
        for issue in issues.iter().filter(|i| i.severity == severity) {
            println!("   [{}] {}", issue.kind, issue.location);
            println!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                println!("      💡 Suggestion: {suggestion}");
            }
        }
        println!();
    }
}
