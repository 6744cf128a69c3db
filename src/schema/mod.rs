//! Schema model: one [`SchemaConfig`] per generation unit and its recursive
//! [`Attribute`] tree, loaded from YAML, defaulted and validated once.

mod load;
mod types;

pub use load::*;
pub use types::*;
