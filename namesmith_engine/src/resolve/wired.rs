//! Wired metadata lookups.

use namesmith_data::Metadata;

use crate::dates::format_epoch_millis;
use crate::identifier::WiredField;

/// Resolve a wired metadata attribute to its trimmed value.
///
/// Date attributes format as `YYYY-MM-DD`; an unset date resolves to
/// nothing. The expiration-folder attribute is unsupported and always
/// resolves to nothing.
pub fn resolve_wired(metadata: &Metadata, field: WiredField) -> Option<String> {
    match field {
        WiredField::Title => text_value(&metadata.title),
        WiredField::DisplayName => text_value(&metadata.display_name),
        WiredField::Description => text_value(&metadata.description),
        WiredField::Author => text_value(&metadata.author),
        WiredField::Keywords => text_value(&metadata.keywords),
        WiredField::Summary => text_value(&metadata.summary),
        WiredField::Teaser => text_value(&metadata.teaser),
        WiredField::StartDate => date_value(metadata.start_date),
        WiredField::EndDate => date_value(metadata.end_date),
        WiredField::ReviewDate => date_value(metadata.review_date),
        WiredField::ExpirationFolder => None,
    }
}

fn text_value(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

fn date_value(millis: Option<i64>) -> Option<String> {
    millis.and_then(format_epoch_millis)
}
