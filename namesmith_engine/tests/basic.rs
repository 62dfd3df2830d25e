use namesmith_data::{DynamicField, Metadata, Page, StructuredNode, TextKind};
use namesmith_engine as ne;

#[test]
fn test_classify_modes() {
    use ne::FieldIdentifier;
    assert!(matches!(ne::classify("title"), FieldIdentifier::Wired(Some(_))));
    assert!(ne::classify("dynamic-metadata/topic").is_dynamic());
    assert!(ne::classify("system-data-structure/a/b").is_structured());
    assert!(matches!(ne::classify("mystery"), FieldIdentifier::Wired(None)));
}

#[test]
fn test_normalize_filename() {
    assert_eq!(ne::normalize_filename("Hello, World!"), "Hello World");
}

#[test]
fn test_resolve_wired_title() {
    use ne::WiredField;
    let metadata = Metadata {
        title: "A Title".into(),
        ..Metadata::default()
    };
    assert_eq!(
        ne::resolve::resolve_wired(&metadata, WiredField::Title).as_deref(),
        Some("A Title")
    );
}

#[test]
fn test_resolve_dynamic_first_value() {
    let fields = vec![DynamicField {
        name: "topic".into(),
        values: vec!["Budget".into(), "Forecast".into()],
    }];
    assert_eq!(ne::resolve::resolve_dynamic(&fields, "topic").as_deref(), Some("Budget"));
}

#[test]
fn test_resolve_structured_nested() {
    let nodes = vec![StructuredNode::Group {
        identifier: "header".into(),
        children: vec![StructuredNode::Leaf {
            identifier: "headline".into(),
            kind: TextKind::PlainText,
            values: vec!["Deep".into()],
        }],
    }];
    let path: Vec<String> = vec!["headline".into()];
    assert_eq!(ne::resolve::resolve_structured(&nodes, &path).as_deref(), Some("Deep"));
}

#[test]
fn test_assemble_single_field() {
    let page = Page {
        metadata: Metadata {
            title: "Hello World".into(),
            ..Metadata::default()
        },
        ..Page::default()
    };
    let params = ne::PluginParams {
        field_ids: "title".into(),
        ..ne::PluginParams::default()
    };
    let name = ne::assemble_name(&page, &params, ne::normalize_filename).expect("assembly failed");
    assert_eq!(name, "hello-world");
}

#[test]
fn test_validate_page_reexport() {
    assert!(namesmith_data::validate_page(&Page::default()).is_empty());
}

#[test]
fn test_lib_version() {
    assert!(!ne::NAMESMITH_VERSION.is_empty());
}
