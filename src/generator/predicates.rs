//! Type and structure predicates over schema attributes.
//!
//! `has_id` and `has_reference` only look at immediate children while
//! `has_resource_id` searches the whole subtree. Templates rely on both
//! behaviours; keep them as they are.

use crate::schema::{Attribute, AttributeType};

/// Flat list or set of scalars (a `List`/`Set` with an element type).
pub fn is_list_set(attr: &Attribute) -> bool {
    attr.attr_type.is_list_or_set() && attr.element_type.is_some()
}

/// Flat list or set of strings.
pub fn is_string_list_set(attr: &Attribute) -> bool {
    is_list_set(attr) && attr.element_type == Some(AttributeType::String)
}

/// Flat list or set of 64-bit integers.
pub fn is_int64_list_set(attr: &Attribute) -> bool {
    is_list_set(attr) && attr.element_type == Some(AttributeType::Int64)
}

/// Composite collection: `List`, `Set` or `Map` without an element type.
pub fn is_nested(attr: &Attribute) -> bool {
    attr.attr_type.is_collection() && attr.element_type.is_none()
}

pub fn is_nested_list(attr: &Attribute) -> bool {
    attr.attr_type == AttributeType::List && attr.element_type.is_none()
}

pub fn is_nested_set(attr: &Attribute) -> bool {
    attr.attr_type == AttributeType::Set && attr.element_type.is_none()
}

pub fn is_nested_map(attr: &Attribute) -> bool {
    attr.attr_type == AttributeType::Map && attr.element_type.is_none()
}

/// Any immediate child flagged `id`.
pub fn has_id(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|a| a.id)
}

/// Any immediate child flagged `reference`.
pub fn has_reference(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|a| a.reference)
}

/// Any attribute flagged `resource_id`, at any depth.
pub fn has_resource_id(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .any(|a| a.resource_id || has_resource_id(&a.attributes))
}

/// Number of segments in an import identifier.
///
/// One for the object's own id, plus one per immediate child that is a
/// `reference` or, failing that, an `id`. A child flagged both counts once.
pub fn import_parts(attrs: &[Attribute]) -> usize {
    1 + attrs.iter().filter(|a| a.reference || a.id).count()
}

/// Depth at which a composite attribute was found beyond the supported limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthExceeded {
    pub type_name: String,
    pub depth: usize,
    pub max_depth: usize,
}

/// Composite attributes of a tree in pre-order, parents before children.
///
/// Top-level attributes sit at depth 1. A composite attribute found deeper
/// than `max_depth` is an error rather than being left out.
pub fn nested_types(attrs: &[Attribute], max_depth: usize) -> Result<Vec<&Attribute>, DepthExceeded> {
    let mut out = Vec::new();
    collect_nested(attrs, 1, max_depth, &mut out)?;
    Ok(out)
}

fn collect_nested<'a>(
    attrs: &'a [Attribute],
    depth: usize,
    max_depth: usize,
    out: &mut Vec<&'a Attribute>,
) -> Result<(), DepthExceeded> {
    for attr in attrs.iter().filter(|a| a.is_composite()) {
        if depth > max_depth {
            return Err(DepthExceeded {
                type_name: attr.type_name.clone(),
                depth,
                max_depth,
            });
        }
        out.push(attr);
        collect_nested(&attr.attributes, depth + 1, max_depth, out)?;
    }
    Ok(())
}
