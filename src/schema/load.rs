use std::fmt;
use std::path::Path;

use super::types::{Attribute, AttributeType, SchemaConfig};
use crate::error::Error;
use crate::generator::names::{derive_tf_name, indefinite_article, to_pascal_case, to_pascal_name, to_snake_name};

/// Structural invariants checked on every attribute at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Child attributes require a `List`, `Set` or `Map` type
    ChildrenRequireCollection,
    /// Child attributes and an element type are mutually exclusive
    ChildrenWithElementType,
    /// `Map` attributes cannot declare an element type
    MapElementType,
    /// `ordered_list` is only valid on `List` attributes
    OrderedListNotList,
    /// An ordered list identifies children by position, not by an `id` child
    OrderedListWithId,
    /// A map is keyed by its map key, not by an `id` child
    MapWithId,
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ValidationRule::ChildrenRequireCollection => {
                "attributes with child attributes must be of type List, Set or Map"
            }
            ValidationRule::ChildrenWithElementType => {
                "attributes cannot have both child attributes and an element type"
            }
            ValidationRule::MapElementType => "Map attributes with an element type are not supported",
            ValidationRule::OrderedListNotList => "ordered_list is only supported on List attributes",
            ValidationRule::OrderedListWithId => {
                "ordered_list attributes cannot contain a child flagged as id"
            }
            ValidationRule::MapWithId => "Map attributes cannot contain a child flagged as id",
        };
        f.write_str(msg)
    }
}

/// Failure to turn a schema document into a [`SchemaConfig`].
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("{0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("attribute '{attribute}': {rule}")]
    Validation {
        attribute: String,
        rule: ValidationRule,
    },
}

/// Parse a schema document, derive every name and validate the attribute tree.
///
/// Validation is top-down and stops at the first violation.
pub fn load_schema(bytes: &[u8]) -> Result<SchemaConfig, SchemaError> {
    let mut config: SchemaConfig = serde_yaml::from_slice(bytes)?;
    augment_config(&mut config)?;
    Ok(config)
}

/// [`load_schema`] on a file, attaching the path to any error.
pub fn load_schema_file(path: &Path) -> Result<SchemaConfig, Error> {
    let bytes = std::fs::read(path).map_err(|e| Error::fs("read", path, e))?;
    load_schema(&bytes).map_err(|e| match e {
        SchemaError::Parse(source) => Error::SchemaParse {
            path: path.to_path_buf(),
            source,
        },
        SchemaError::Validation { attribute, rule } => Error::SchemaValidation {
            path: path.to_path_buf(),
            attribute,
            rule,
        },
    })
}

fn augment_config(config: &mut SchemaConfig) -> Result<(), SchemaError> {
    if config.tf_name.is_empty() {
        config.tf_name = to_snake_name(&config.name);
    }
    config.type_name = to_pascal_name(&config.name);
    if config.ds_description.is_empty() {
        config.ds_description = format!("This data source can read the {}.", config.name);
    }
    if config.res_description.is_empty() {
        config.res_description = format!(
            "This resource can manage {} {}.",
            indefinite_article(&config.name),
            config.name
        );
    }

    let root_type = config.type_name.clone();
    for attr in &mut config.attributes {
        augment_attribute(attr, &root_type, "")?;
    }
    Ok(())
}

fn augment_attribute(attr: &mut Attribute, parent_type: &str, parent_path: &str) -> Result<(), SchemaError> {
    if attr.tf_name.is_empty() {
        attr.tf_name = derive_tf_name(&attr.model_name);
    }
    attr.type_name = format!("{parent_type}{}", to_pascal_case(&attr.tf_name));

    let path = if parent_path.is_empty() {
        attr.tf_name.clone()
    } else {
        format!("{parent_path}.{}", attr.tf_name)
    };

    if let Some(rule) = violated_rule(attr) {
        return Err(SchemaError::Validation { attribute: path, rule });
    }

    let type_name = attr.type_name.clone();
    for child in &mut attr.attributes {
        augment_attribute(child, &type_name, &path)?;
    }
    Ok(())
}

fn violated_rule(attr: &Attribute) -> Option<ValidationRule> {
    let has_children = attr.is_composite();
    if has_children && !attr.attr_type.is_collection() {
        return Some(ValidationRule::ChildrenRequireCollection);
    }
    if has_children && attr.element_type.is_some() {
        return Some(ValidationRule::ChildrenWithElementType);
    }
    if attr.attr_type == AttributeType::Map && attr.element_type.is_some() {
        return Some(ValidationRule::MapElementType);
    }
    if attr.ordered_list {
        if attr.attr_type != AttributeType::List {
            return Some(ValidationRule::OrderedListNotList);
        }
        if attr.attributes.iter().any(|a| a.id) {
            return Some(ValidationRule::OrderedListWithId);
        }
    }
    if attr.attr_type == AttributeType::Map && attr.attributes.iter().any(|a| a.id) {
        return Some(ValidationRule::MapWithId);
    }
    None
}
