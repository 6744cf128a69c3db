use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of attribute type tags.
///
/// `Version` and `Versions` are scalar on the wire (a single string) but carry
/// structure the generated code understands: a dotted version and a
/// comma-joined list of versions respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeType {
    String,
    Int64,
    Float64,
    Bool,
    List,
    Set,
    Map,
    Version,
    Versions,
}

impl AttributeType {
    /// `List`, `Set` or `Map`.
    pub fn is_collection(self) -> bool {
        matches!(self, AttributeType::List | AttributeType::Set | AttributeType::Map)
    }

    /// `List` or `Set`.
    pub fn is_list_or_set(self) -> bool {
        matches!(self, AttributeType::List | AttributeType::Set)
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AttributeType::String => "String",
            AttributeType::Int64 => "Int64",
            AttributeType::Float64 => "Float64",
            AttributeType::Bool => "Bool",
            AttributeType::List => "List",
            AttributeType::Set => "Set",
            AttributeType::Map => "Map",
            AttributeType::Version => "Version",
            AttributeType::Versions => "Versions",
        };
        write!(f, "{s}")
    }
}

/// One schema field, possibly composite.
///
/// `tf_name` and `type_name` are derived during load and are always populated
/// on a loaded schema. The struct serializes with the same keys it accepts, so
/// a loaded attribute handed to a template can be deserialized back by the
/// predicate functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Declared field name in the wire model (e.g. `EnableSomething`)
    pub model_name: String,
    /// Externally visible name; derived from `model_name` when absent
    #[serde(default)]
    pub tf_name: String,
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    /// Element type for flat (leaf) collections
    #[serde(default)]
    pub element_type: Option<AttributeType>,
    /// Path segments locating the parent object of this field in the payload
    #[serde(default)]
    pub data_path: Vec<String>,
    /// Identifies an object within its parent collection
    #[serde(default)]
    pub id: bool,
    /// Supplies part of the parent resource's identity path
    #[serde(default)]
    pub resource_id: bool,
    /// Read-only back-reference, only usable to look up an existing object
    #[serde(default)]
    pub reference: bool,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default)]
    pub requires_replace: bool,
    #[serde(default)]
    pub write_only: bool,
    #[serde(default)]
    pub write_changes_only: bool,
    #[serde(default)]
    pub exclude_test: bool,
    #[serde(default)]
    pub exclude_example: bool,
    /// Position in the list is the identity; only valid on `List`
    #[serde(default)]
    pub ordered_list: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enum_values: Vec<String>,
    #[serde(default)]
    pub min_list: Option<i64>,
    #[serde(default)]
    pub max_list: Option<i64>,
    #[serde(default)]
    pub min_int: Option<i64>,
    #[serde(default)]
    pub max_int: Option<i64>,
    #[serde(default)]
    pub min_float: Option<f64>,
    #[serde(default)]
    pub max_float: Option<f64>,
    #[serde(default)]
    pub string_patterns: Vec<String>,
    #[serde(default)]
    pub string_min_length: Option<i64>,
    #[serde(default)]
    pub string_max_length: Option<i64>,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub test_value: Option<String>,
    /// Literal value expression; the attribute is computed, never user-set
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Qualified type name: the ancestor chain's PascalCased names, root first
    #[serde(default)]
    pub type_name: String,
}

impl Attribute {
    /// True when this attribute has nested child attributes.
    pub fn is_composite(&self) -> bool {
        !self.attributes.is_empty()
    }
}

/// One generation unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Human name (e.g. `Wireless Profile`)
    pub name: String,
    /// Short name used in file names; snake-cased from `name` when absent
    #[serde(default)]
    pub tf_name: String,
    /// PascalCased `name`, root of every nested `type_name`
    #[serde(default)]
    pub type_name: String,
    pub rest_endpoint: String,
    /// Create with PUT instead of POST
    #[serde(default)]
    pub put_create: bool,
    #[serde(default)]
    pub no_update: bool,
    #[serde(default)]
    pub no_delete: bool,
    /// Locate the object id by querying the endpoint path after create
    #[serde(default)]
    pub id_from_query_path: Option<String>,
    /// Data source looks objects up by a `name` query parameter
    #[serde(default)]
    pub data_source_name_query: bool,
    #[serde(default)]
    pub no_data_source: bool,
    #[serde(default)]
    pub no_resource: bool,
    /// Minimum controller version the resource is supported on
    #[serde(default)]
    pub minimum_version: Option<String>,
    #[serde(default)]
    pub ds_description: String,
    #[serde(default)]
    pub res_description: String,
    #[serde(default)]
    pub doc_category: Option<String>,
    #[serde(default)]
    pub test_tags: Vec<String>,
    /// Configuration snippet the generated tests apply before the resource
    #[serde(default)]
    pub test_prerequisites: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}
