//! Field identifier classification.
//!
//! Hook parameters address page fields with a compact string syntax:
//!
//! - Wired metadata: `[field-name]` e.g. `title,display-name,author`
//! - Dynamic metadata: `[dynamic-metadata/field-name]` e.g. `dynamic-metadata/my-custom-field`
//! - Structured data: `[system-data-structure/{group-name}/field-name]` e.g. `system-data-structure/my-group/my-field`
//!
//! Classification is total: every input lands in exactly one mode, falling
//! back to wired when neither special token is present.

use variantly::Variantly;

/// Token marking a dynamic (deployment-defined) metadata reference.
pub const DYNAMIC_METADATA_TOKEN: &str = "dynamic-metadata";
/// Token marking a structured-data reference.
pub const STRUCTURED_DATA_TOKEN: &str = "system-data-structure";

/// The fixed wired metadata attributes every page carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WiredField {
    Title,
    DisplayName,
    Description,
    Author,
    Keywords,
    Summary,
    Teaser,
    StartDate,
    EndDate,
    ReviewDate,
    ExpirationFolder,
}

impl WiredField {
    /// Keyword table in match priority order.
    const KEYWORDS: [(&'static str, WiredField); 11] = [
        ("title", WiredField::Title),
        ("display-name", WiredField::DisplayName),
        ("description", WiredField::Description),
        ("author", WiredField::Author),
        ("keywords", WiredField::Keywords),
        ("summary", WiredField::Summary),
        ("teaser", WiredField::Teaser),
        ("start-date", WiredField::StartDate),
        ("end-date", WiredField::EndDate),
        ("review-date", WiredField::ReviewDate),
        ("expiration-folder", WiredField::ExpirationFolder),
    ];

    /// Match an identifier against the wired keywords by substring
    /// containment, first keyword in table order winning.
    ///
    /// Callers must keep identifiers unambiguous: an identifier containing
    /// several keywords matches whichever comes first in the table, not
    /// necessarily the one intended. Unrecognized identifiers return `None`
    /// and resolve to nothing downstream.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| identifier.contains(keyword))
            .map(|(_, field)| *field)
    }

    /// The canonical keyword for this attribute.
    pub fn keyword(self) -> &'static str {
        Self::KEYWORDS
            .iter()
            .find(|(_, field)| *field == self)
            .map(|(keyword, _)| *keyword)
            .unwrap_or_default()
    }
}

/// A classified reference to one page field.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum FieldIdentifier {
    /// Built-in metadata attribute; `None` when no wired keyword matched.
    Wired(Option<WiredField>),
    /// Deployment-defined metadata field, addressed by exact name.
    Dynamic(String),
    /// Structured-data path: zero or more group identifiers followed by a
    /// leaf identifier.
    Structured(Vec<String>),
}

/// Classify a raw field identifier into its addressing mode.
pub fn classify(identifier: &str) -> FieldIdentifier {
    if let Some(rest) = strip_token(identifier, DYNAMIC_METADATA_TOKEN) {
        FieldIdentifier::Dynamic(rest.to_string())
    } else if let Some(rest) = strip_token(identifier, STRUCTURED_DATA_TOKEN) {
        FieldIdentifier::Structured(rest.split('/').map(str::to_string).collect())
    } else {
        FieldIdentifier::Wired(WiredField::from_identifier(identifier))
    }
}

/// Strip everything through `token`, plus one leading `/` from the
/// remainder if present.
fn strip_token<'a>(identifier: &'a str, token: &str) -> Option<&'a str> {
    let start = identifier.find(token)? + token.len();
    let rest = &identifier[start..];
    Some(rest.strip_prefix('/').unwrap_or(rest))
}
