use serde::{Deserialize, Serialize};

/// The built-in descriptive attributes every page carries.
///
/// Text attributes default to empty strings when absent from a snapshot.
/// Date attributes are stored as epoch milliseconds; `None` means the date
/// was never set. The expiration-folder attribute is not stored here at
/// all -- it is an unsupported lookup kept only for identifier
/// compatibility, so there is nothing to snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Metadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub teaser: String,
    #[serde(default)]
    pub start_date: Option<i64>,
    #[serde(default)]
    pub end_date: Option<i64>,
    #[serde(default)]
    pub review_date: Option<i64>,
}

/// A deployment-defined custom metadata field.
///
/// Fields may store several values; name generation only ever reads the
/// first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicField {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Input type of a structured-data leaf field.
///
/// The kind drives how stored values are turned into one display string:
/// dates are reformatted, multi-value kinds are joined, and wysiwyg content
/// is excluded from name generation entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TextKind {
    #[default]
    PlainText,
    Wysiwyg,
    Datetime,
    Calendar,
    Checkbox,
    Multiselect,
}

/// One node in a page's structured-data tree.
///
/// Identifiers are unique among siblings at the same level (not globally);
/// the tree may be arbitrarily deep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StructuredNode {
    Group {
        identifier: String,
        #[serde(default)]
        children: Vec<StructuredNode>,
    },
    Leaf {
        identifier: String,
        #[serde(default)]
        kind: TextKind,
        #[serde(default)]
        values: Vec<String>,
    },
}

impl StructuredNode {
    /// The node's identifier within its sibling group.
    pub fn identifier(&self) -> &str {
        match self {
            StructuredNode::Group { identifier, .. } | StructuredNode::Leaf { identifier, .. } => identifier,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, StructuredNode::Group { .. })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, StructuredNode::Leaf { .. })
    }
}

/// Read-only snapshot of the page under creation.
///
/// `dynamic_fields` and `structured_data` are `None` when the page has no
/// such source at all, which is distinct from an empty collection: a
/// missing source makes any identifier addressing it invalid.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Page {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hide_system_name: bool,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub dynamic_fields: Option<Vec<DynamicField>>,
    #[serde(default)]
    pub structured_data: Option<Vec<StructuredNode>>,
}

/// A non-page file asset. Only the naming surface is modeled.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileAsset {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hide_system_name: bool,
}

/// A folder asset. Only the naming surface is modeled.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FolderAsset {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hide_system_name: bool,
}

/// Any folder-contained asset a creation workflow can hand to a hook.
///
/// Pages are the only kind with field sources; files and folders exist so
/// the hook can report a type mismatch instead of assuming its input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Asset {
    Page(Page),
    File(FileAsset),
    Folder(FolderAsset),
}

impl Asset {
    /// Display label for the asset kind, used in workflow messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Asset::Page(_) => "page",
            Asset::File(_) => "file",
            Asset::Folder(_) => "folder",
        }
    }

    /// The asset's current system name.
    pub fn name(&self) -> &str {
        match self {
            Asset::Page(page) => &page.name,
            Asset::File(file) => &file.name,
            Asset::Folder(folder) => &folder.name,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        match self {
            Asset::Page(page) => page.name = name,
            Asset::File(file) => file.name = name,
            Asset::Folder(folder) => folder.name = name,
        }
    }

    /// Suppress (or restore) the editable system-name field in the
    /// creation workflow's UI.
    pub fn set_hide_system_name(&mut self, hide: bool) {
        match self {
            Asset::Page(page) => page.hide_system_name = hide,
            Asset::File(file) => file.hide_system_name = hide,
            Asset::Folder(folder) => folder.hide_system_name = hide,
        }
    }

    pub fn as_page(&self) -> Option<&Page> {
        match self {
            Asset::Page(page) => Some(page),
            _ => None,
        }
    }

    pub fn as_page_mut(&mut self) -> Option<&mut Page> {
        match self {
            Asset::Page(page) => Some(page),
            _ => None,
        }
    }
}
