//! The function library handed to every render call.
//!
//! A [`FunctionRegistry`] is built once per run and installed into each
//! template environment. It holds no mutable state, so renders stay
//! deterministic for identical inputs.

use minijinja::value::{Rest, Value, ViaDeserialize};
use minijinja::{Environment, Error, ErrorKind};

use super::names::{build_path, to_pascal_case, to_pascal_name, to_snake_name};
use super::predicates;
use crate::schema::Attribute;

/// Deepest composite attribute the shipped templates can render.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 4;

/// Explicit registry of template functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRegistry {
    max_nesting_depth: usize,
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NESTING_DEPTH)
    }
}

impl FunctionRegistry {
    /// Names of every function installed by [`FunctionRegistry::install`].
    pub const FUNCTIONS: &'static [&'static str] = &[
        "pascal_case",
        "pascal_name",
        "snake_name",
        "path",
        "subtract",
        "fail",
        "is_list_set",
        "is_string_list_set",
        "is_int64_list_set",
        "is_nested",
        "is_nested_list",
        "is_nested_set",
        "is_nested_map",
        "has_id",
        "has_reference",
        "has_resource_id",
        "import_parts",
        "nested_types",
    ];

    pub fn new(max_nesting_depth: usize) -> Self {
        Self { max_nesting_depth }
    }

    pub fn max_nesting_depth(&self) -> usize {
        self.max_nesting_depth
    }

    /// Register every function, plus the `MAX_NESTING_DEPTH` global.
    pub fn install(&self, env: &mut Environment<'_>) {
        env.add_function("pascal_case", pascal_case);
        env.add_function("pascal_name", pascal_name);
        env.add_function("snake_name", snake_name);
        env.add_function("path", path);
        env.add_function("subtract", subtract);
        env.add_function("fail", fail);

        env.add_function("is_list_set", |a: ViaDeserialize<Attribute>| predicates::is_list_set(&a.0));
        env.add_function("is_string_list_set", |a: ViaDeserialize<Attribute>| {
            predicates::is_string_list_set(&a.0)
        });
        env.add_function("is_int64_list_set", |a: ViaDeserialize<Attribute>| {
            predicates::is_int64_list_set(&a.0)
        });
        env.add_function("is_nested", |a: ViaDeserialize<Attribute>| predicates::is_nested(&a.0));
        env.add_function("is_nested_list", |a: ViaDeserialize<Attribute>| predicates::is_nested_list(&a.0));
        env.add_function("is_nested_set", |a: ViaDeserialize<Attribute>| predicates::is_nested_set(&a.0));
        env.add_function("is_nested_map", |a: ViaDeserialize<Attribute>| predicates::is_nested_map(&a.0));

        env.add_function("has_id", |a: ViaDeserialize<Vec<Attribute>>| predicates::has_id(&a.0));
        env.add_function("has_reference", |a: ViaDeserialize<Vec<Attribute>>| {
            predicates::has_reference(&a.0)
        });
        env.add_function("has_resource_id", |a: ViaDeserialize<Vec<Attribute>>| {
            predicates::has_resource_id(&a.0)
        });
        env.add_function("import_parts", |a: ViaDeserialize<Vec<Attribute>>| {
            to_i64(predicates::import_parts(&a.0))
        });

        let max_depth = self.max_nesting_depth;
        env.add_function(
            "nested_types",
            move |a: ViaDeserialize<Vec<Attribute>>| -> Result<Value, Error> {
                let nodes = predicates::nested_types(&a.0, max_depth).map_err(|e| {
                    Error::new(
                        ErrorKind::InvalidOperation,
                        format!(
                            "composite attribute '{}' is nested {} levels deep, at most {} are supported",
                            e.type_name, e.depth, e.max_depth
                        ),
                    )
                })?;
                Ok(Value::from_serialize(&nodes))
            },
        );
        env.add_global("MAX_NESTING_DEPTH", Value::from(to_i64(max_depth)));
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn pascal_case(s: String) -> String {
    to_pascal_case(&s)
}

fn pascal_name(s: String) -> String {
    to_pascal_name(&s)
}

fn snake_name(s: String) -> String {
    to_snake_name(&s)
}

fn path(segments: ViaDeserialize<Vec<String>>) -> String {
    build_path(&segments.0)
}

fn subtract(a: i64, b: i64) -> Result<i64, Error> {
    a.checked_sub(b).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("subtract({a}, {b}) overflows a 64-bit integer"),
        )
    })
}

/// Abort the render. `{}` placeholders in `message` take `args` in order.
fn fail(message: String, args: Rest<Value>) -> Result<Value, Error> {
    Err(Error::new(ErrorKind::InvalidOperation, format_message(&message, &args)))
}

pub(crate) fn format_message(message: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(message.len());
    let mut args = args.iter();
    let mut rest = message;
    while let Some(idx) = rest.find("{}") {
        out.push_str(&rest[..idx]);
        match args.next() {
            Some(v) => out.push_str(&v.to_string()),
            None => out.push_str("{}"),
        }
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    out
}
