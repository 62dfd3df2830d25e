//! Dynamic metadata lookups.

use namesmith_data::DynamicField;

/// Resolve a dynamic metadata field by exact name.
///
/// Linear scan, first match wins (field names are assumed unique). Only
/// the first stored value is read. A missing field, an empty value list,
/// or a blank first value all resolve to `None`.
pub fn resolve_dynamic(fields: &[DynamicField], name: &str) -> Option<String> {
    let field = fields.iter().find(|field| field.name == name)?;
    let value = field.values.first()?.trim();
    if value.is_empty() { None } else { Some(value.to_string()) }
}
