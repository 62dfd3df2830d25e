//! Asset-creation hook surface.
//!
//! Two operations wrap the name assembler for the host workflow: a
//! pre-creation pass that hides the editable system-name field, and a
//! post-creation pass that validates the asset kind, assembles the name,
//! and applies it to the page.

use log::info;
use namesmith_data::Asset;
use serde::Serialize;

use crate::assemble::assemble_name;
use crate::params::PluginParams;
use crate::slug::normalize_filename;

/// Placeholder system name seeded while the real name is pending.
const PLACEHOLDER_NAME: &str = "hidden";

/// Outcome reported back to the host workflow.
#[derive(Debug, Clone, Serialize)]
pub struct Decision {
    pub allow: bool,
    pub message: String,
}

impl Decision {
    fn allow() -> Self {
        Self {
            allow: true,
            message: String::new(),
        }
    }

    fn deny(message: impl Into<String>) -> Self {
        Self {
            allow: false,
            message: message.into(),
        }
    }
}

/// Pre-creation pass, run before the user sees the edit screen.
///
/// Suppresses the editable system-name field and seeds a placeholder name
/// so the workflow never submits an empty one. Independent of resolution;
/// applies to every asset kind.
pub fn pre_create(asset: &mut Asset) {
    asset.set_hide_system_name(true);
    if asset.name().trim().is_empty() {
        asset.set_name(PLACEHOLDER_NAME);
    }
}

/// Post-creation pass, run after the user submits the creation.
///
/// Non-page assets are denied outright -- only pages carry field sources.
/// Any assembly failure denies creation and leaves the asset untouched;
/// on success the page's system name is replaced with the assembled one.
pub fn post_create(asset: &mut Asset, params: &PluginParams) -> Decision {
    let page = match asset {
        Asset::Page(page) => page,
        other => {
            return Decision::deny(format!(
                "system names can only be generated for pages, not {} assets",
                other.kind()
            ));
        },
    };

    match assemble_name(page, params, normalize_filename) {
        Ok(name) => {
            info!("page system name set to '{name}'");
            page.name = name;
            Decision::allow()
        },
        Err(err) => Decision::deny(err.to_string()),
    }
}
