//! Loader utilities for asset snapshots and hook parameters.
//!
//! Asset snapshots are RON-backed; hook parameters are TOML-backed. Both
//! exist for the demo driver and for tests -- the hook itself only ever
//! sees already-materialized values.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use namesmith_data::{Asset, validate_page};

use crate::params::PluginParams;

/// Load an asset snapshot from a RON file.
///
/// Page snapshots are validated before use; validation failures are
/// aggregated into a single error.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or validation.
pub fn load_asset(path: &Path) -> Result<Asset> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading asset snapshot from '{}'", path.display()))?;
    let asset: Asset =
        ron::from_str(&text).with_context(|| format!("parsing asset snapshot RON from '{}'", path.display()))?;

    if let Asset::Page(page) = &asset {
        let errors = validate_page(page);
        if !errors.is_empty() {
            let details = errors
                .into_iter()
                .map(|err| format!("- {err}"))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("page snapshot validation failed:\n{details}");
        }
        info!(
            "page snapshot loaded: {} dynamic fields, {} structured nodes",
            page.dynamic_fields.as_ref().map_or(0, Vec::len),
            page.structured_data.as_ref().map_or(0, Vec::len)
        );
    }

    Ok(asset)
}

/// Load hook parameters from a TOML file.
///
/// There is no default fallback here: field identifiers are required for
/// the hook to do anything at all.
///
/// # Errors
/// Errors bubble up from file IO or deserialization.
pub fn load_params(path: &Path) -> Result<PluginParams> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading hook parameters from '{}'", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing hook parameters from '{}'", path.display()))
}
