use std::collections::HashSet;
use std::fmt;

use crate::{Page, StructuredNode};

/// Validation error for malformed field sources in a page snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateSibling { path: String, id: String },
    DuplicateDynamicField { name: String },
    EmptyIdentifier { path: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateSibling { path, id } => {
                write!(f, "duplicate structured-data identifier '{id}' under '{path}'")
            },
            ValidationError::DuplicateDynamicField { name } => {
                write!(f, "duplicate dynamic metadata field '{name}'")
            },
            ValidationError::EmptyIdentifier { path } => {
                write!(f, "empty structured-data identifier under '{path}'")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate the structural invariants of a page's field sources.
///
/// Identifiers must be unique among siblings at each level of the
/// structured-data tree (not globally), and dynamic field names must be
/// unique. Resolution assumes both.
///
/// ```
/// use namesmith_data::{Page, StructuredNode, TextKind, validate_page};
///
/// let page = Page {
///     structured_data: Some(vec![StructuredNode::Leaf {
///         identifier: "headline".into(),
///         kind: TextKind::PlainText,
///         values: vec!["FY24 Results".into()],
///     }]),
///     ..Page::default()
/// };
/// assert!(validate_page(&page).is_empty());
/// ```
pub fn validate_page(page: &Page) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(fields) = &page.dynamic_fields {
        let mut seen = HashSet::new();
        for field in fields {
            if !seen.insert(field.name.as_str()) {
                errors.push(ValidationError::DuplicateDynamicField {
                    name: field.name.clone(),
                });
            }
        }
    }

    if let Some(nodes) = &page.structured_data {
        check_siblings(nodes, "", &mut errors);
    }

    errors
}

/// Check identifier uniqueness within one sibling group, then descend.
fn check_siblings(nodes: &[StructuredNode], path: &str, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for node in nodes {
        let id = node.identifier();
        if id.is_empty() {
            errors.push(ValidationError::EmptyIdentifier { path: path.to_string() });
        }
        if !seen.insert(id) {
            errors.push(ValidationError::DuplicateSibling {
                path: path.to_string(),
                id: id.to_string(),
            });
        }
        if let StructuredNode::Group { identifier, children } = node {
            let child_path = if path.is_empty() {
                identifier.clone()
            } else {
                format!("{path}/{identifier}")
            };
            check_siblings(children, &child_path, errors);
        }
    }
}
