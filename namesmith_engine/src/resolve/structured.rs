//! Structured-data tree search.
//!
//! Structured data is a tree of groups and typed leaf fields. A path with
//! explicit group prefixes descends only through the named groups; a bare
//! leaf identifier is searched at every depth, entering groups in
//! encounter order.

use namesmith_data::{StructuredNode, TextKind};

use crate::dates::{format_epoch_millis, reformat_calendar};

/// Resolve a structured-data path to a formatted leaf value.
///
/// With more than one segment remaining, the FIRST group whose identifier
/// equals the head segment is entered and the rest of the path resolved
/// inside it. Later same-named siblings are never tried, even when the
/// chosen subtree turns up nothing.
///
/// With a single segment remaining, nodes are scanned in order: groups are
/// entered depth-first as they are encountered, and the first leaf that
/// matches the segment and yields a value wins.
pub fn resolve_structured(nodes: &[StructuredNode], path: &[String]) -> Option<String> {
    match path {
        [] => None,
        [leaf] => search_leaf(nodes, leaf),
        [head, tail @ ..] => {
            let children = nodes.iter().find_map(|node| match node {
                StructuredNode::Group { identifier, children } if identifier == head => Some(children),
                _ => None,
            })?;
            resolve_structured(children, tail)
        },
    }
}

/// Depth-first scan for a leaf with the given identifier.
///
/// A matching leaf that yields no value (blank, wysiwyg, malformed date)
/// does not end the scan; later nodes may still produce one.
fn search_leaf(nodes: &[StructuredNode], target: &str) -> Option<String> {
    for node in nodes {
        match node {
            StructuredNode::Group { children, .. } => {
                if let Some(value) = search_leaf(children, target) {
                    return Some(value);
                }
            },
            StructuredNode::Leaf { identifier, kind, values } if identifier == target => {
                if let Some(value) = leaf_value(*kind, values) {
                    return Some(value);
                }
            },
            StructuredNode::Leaf { .. } => {},
        }
    }
    None
}

/// Format a leaf's stored values according to its kind.
///
/// Wysiwyg leaves never yield a value -- rich text is excluded from name
/// generation. Date kinds that cannot be parsed also yield nothing.
fn leaf_value(kind: TextKind, values: &[String]) -> Option<String> {
    let first = values.first()?.trim();
    if first.is_empty() {
        return None;
    }

    match kind {
        TextKind::Datetime => first.parse::<i64>().ok().and_then(format_epoch_millis),
        TextKind::Calendar => reformat_calendar(first),
        TextKind::Checkbox | TextKind::Multiselect => join_selected(values),
        TextKind::Wysiwyg => None,
        TextKind::PlainText => values.first().cloned(),
    }
}

/// Join every non-blank value with a single space (checkbox/multi-select).
fn join_selected(values: &[String]) -> Option<String> {
    let selected: Vec<&str> = values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect();
    if selected.is_empty() { None } else { Some(selected.join(" ")) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &str, children: Vec<StructuredNode>) -> StructuredNode {
        StructuredNode::Group {
            identifier: id.into(),
            children,
        }
    }

    fn leaf(id: &str, kind: TextKind, values: &[&str]) -> StructuredNode {
        StructuredNode::Leaf {
            identifier: id.into(),
            kind,
            values: values.iter().map(|v| (*v).to_string()).collect(),
        }
    }

    fn text_leaf(id: &str, value: &str) -> StructuredNode {
        leaf(id, TextKind::PlainText, &[value])
    }

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn explicit_group_path_descends_named_groups_only() {
        let nodes = vec![
            group("other", vec![text_leaf("headline", "wrong")]),
            group("header", vec![group("inner", vec![text_leaf("headline", "right")])]),
        ];
        assert_eq!(
            resolve_structured(&nodes, &path(&["header", "inner", "headline"])).as_deref(),
            Some("right")
        );
    }

    #[test]
    fn missing_group_resolves_to_none() {
        let nodes = vec![group("header", vec![text_leaf("headline", "x")])];
        assert!(resolve_structured(&nodes, &path(&["footer", "headline"])).is_none());
    }

    #[test]
    fn first_matching_group_wins_without_backtracking() {
        // the first "header" group lacks the leaf; the second would match,
        // but is never tried once a group matched the path prefix
        let nodes = vec![
            group("header", vec![text_leaf("other", "x")]),
            group("header", vec![text_leaf("headline", "reachable")]),
        ];
        assert!(resolve_structured(&nodes, &path(&["header", "headline"])).is_none());
    }

    #[test]
    fn bare_leaf_is_found_at_any_depth() {
        let nodes = vec![group(
            "outer",
            vec![group("inner", vec![text_leaf("headline", "deep value")])],
        )];
        assert_eq!(
            resolve_structured(&nodes, &path(&["headline"])).as_deref(),
            Some("deep value")
        );
    }

    #[test]
    fn bare_leaf_search_is_depth_first_in_encounter_order() {
        // the group comes first, so its nested match beats the shallow one
        let nodes = vec![
            group("outer", vec![text_leaf("headline", "nested")]),
            text_leaf("headline", "shallow"),
        ];
        assert_eq!(resolve_structured(&nodes, &path(&["headline"])).as_deref(), Some("nested"));
    }

    #[test]
    fn non_yielding_leaf_does_not_end_bare_scan() {
        let nodes = vec![
            leaf("headline", TextKind::Wysiwyg, &["<p>rich</p>"]),
            text_leaf("headline", "plain"),
        ];
        assert_eq!(resolve_structured(&nodes, &path(&["headline"])).as_deref(), Some("plain"));
    }

    #[test]
    fn empty_path_resolves_to_none() {
        let nodes = vec![text_leaf("headline", "x")];
        assert!(resolve_structured(&nodes, &[]).is_none());
    }

    #[test]
    fn plain_text_value_is_verbatim() {
        let nodes = vec![text_leaf("headline", "  FY24 Results  ")];
        assert_eq!(
            resolve_structured(&nodes, &path(&["headline"])).as_deref(),
            Some("  FY24 Results  ")
        );
    }

    #[test]
    fn blank_first_value_resolves_to_none() {
        let nodes = vec![leaf("headline", TextKind::PlainText, &["   "])];
        assert!(resolve_structured(&nodes, &path(&["headline"])).is_none());
        let nodes = vec![leaf("headline", TextKind::PlainText, &[])];
        assert!(resolve_structured(&nodes, &path(&["headline"])).is_none());
    }

    #[test]
    fn datetime_leaf_formats_epoch_millis() {
        let nodes = vec![leaf("published", TextKind::Datetime, &["0"])];
        assert_eq!(
            resolve_structured(&nodes, &path(&["published"])).as_deref(),
            Some("1970-01-01")
        );
    }

    #[test]
    fn datetime_leaf_with_garbage_resolves_to_none() {
        let nodes = vec![leaf("published", TextKind::Datetime, &["not-a-number"])];
        assert!(resolve_structured(&nodes, &path(&["published"])).is_none());
    }

    #[test]
    fn calendar_leaf_reformats_to_iso() {
        let nodes = vec![leaf("event-date", TextKind::Calendar, &["02-05-2024"])];
        assert_eq!(
            resolve_structured(&nodes, &path(&["event-date"])).as_deref(),
            Some("2024-02-05")
        );
    }

    #[test]
    fn malformed_calendar_leaf_resolves_to_none() {
        let nodes = vec![leaf("event-date", TextKind::Calendar, &["2024/02/05"])];
        assert!(resolve_structured(&nodes, &path(&["event-date"])).is_none());
    }

    #[test]
    fn checkbox_joins_non_blank_values() {
        let nodes = vec![leaf("tags", TextKind::Checkbox, &["a", "", "b"])];
        assert_eq!(resolve_structured(&nodes, &path(&["tags"])).as_deref(), Some("a b"));
    }

    #[test]
    fn multiselect_joins_trimmed_values() {
        let nodes = vec![leaf("tags", TextKind::Multiselect, &[" red ", "blue "])];
        assert_eq!(resolve_structured(&nodes, &path(&["tags"])).as_deref(), Some("red blue"));
    }

    #[test]
    fn wysiwyg_leaf_always_resolves_to_none() {
        let nodes = vec![leaf("body", TextKind::Wysiwyg, &["anything at all"])];
        assert!(resolve_structured(&nodes, &path(&["body"])).is_none());
    }
}
