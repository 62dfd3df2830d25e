//! Name assembly --
//!
//! Drives classification and resolution over an ordered identifier list
//! and joins the normalized values into the page's system name.

use log::debug;
use namesmith_data::Page;
use thiserror::Error;

use crate::identifier::{FieldIdentifier, classify};
use crate::params::PluginParams;
use crate::resolve::{resolve_dynamic, resolve_structured, resolve_wired};

/// Ways a name-generation attempt can fail.
///
/// Every variant is fatal for the current creation attempt; the message
/// names the offending identifier where one exists.
#[derive(Debug, Error)]
pub enum NameError {
    #[error("field IDs are required for system name generation")]
    MissingFieldIds,
    #[error("this page has no dynamic metadata fields, so '{identifier}' cannot be resolved")]
    NoDynamicMetadata { identifier: String },
    #[error("this page has no structured data, so '{identifier}' cannot be resolved")]
    NoStructuredData { identifier: String },
    #[error("the field '{identifier}' does not exist or has no value on this page")]
    FieldNotFoundOrEmpty { identifier: String },
    #[error("none of the requested fields are populated: {identifiers}")]
    NoContent { identifiers: String },
}

/// Build the system name for `page` from the configured field identifiers.
///
/// Each identifier is classified, resolved against its source, passed
/// through `normalize`, trimmed, space-replaced, lowercased, and appended
/// with the concat token; one trailing concat token is stripped at the
/// end. Any resolution failure aborts immediately -- no partial name is
/// ever produced.
///
/// # Errors
/// See [`NameError`]; every variant denies the creation attempt.
pub fn assemble_name<F>(page: &Page, params: &PluginParams, normalize: F) -> Result<String, NameError>
where
    F: Fn(&str) -> String,
{
    if params.field_ids.trim().is_empty() {
        return Err(NameError::MissingFieldIds);
    }

    let space_token = params.space_token();
    let concat_token = params.concat_token();

    let mut assembled = String::new();
    for identifier in params.identifiers() {
        let value = resolve_identifier(page, identifier)?;
        let cleaned = clean_value(&value, &normalize, space_token);
        debug!("field '{identifier}' resolved to '{cleaned}'");
        assembled.push_str(&cleaned);
        assembled.push_str(concat_token);
    }

    let name = assembled.strip_suffix(concat_token).unwrap_or(&assembled);
    if name.trim().is_empty() {
        return Err(NameError::NoContent {
            identifiers: params.field_ids.clone(),
        });
    }

    Ok(name.to_string())
}

/// Resolve one raw identifier against the page's field sources.
///
/// A referenced source collection that is entirely absent on the page is
/// its own failure, distinct from a field that is merely missing or blank.
fn resolve_identifier(page: &Page, identifier: &str) -> Result<String, NameError> {
    let resolved = match classify(identifier) {
        FieldIdentifier::Dynamic(name) => {
            let fields = page
                .dynamic_fields
                .as_deref()
                .ok_or_else(|| NameError::NoDynamicMetadata {
                    identifier: identifier.to_string(),
                })?;
            resolve_dynamic(fields, &name)
        },
        FieldIdentifier::Structured(path) => {
            let nodes = page
                .structured_data
                .as_deref()
                .ok_or_else(|| NameError::NoStructuredData {
                    identifier: identifier.to_string(),
                })?;
            resolve_structured(nodes, &path)
        },
        FieldIdentifier::Wired(field) => field.and_then(|field| resolve_wired(&page.metadata, field)),
    };

    resolved.ok_or_else(|| NameError::FieldNotFoundOrEmpty {
        identifier: identifier.to_string(),
    })
}

/// Apply the external normalizer, then trim, space-replace, and lowercase.
fn clean_value<F>(value: &str, normalize: &F, space_token: &str) -> String
where
    F: Fn(&str) -> String,
{
    normalize(value).trim().replace(' ', space_token).to_lowercase()
}
