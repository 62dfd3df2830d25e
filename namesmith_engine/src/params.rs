//! Creation-hook parameters.
//!
//! The host workflow supplies three plain-string parameters; only the
//! field identifier list is required. The demo driver loads them from a
//! TOML file with the same keys.

use serde::{Deserialize, Serialize};

/// Parameter key for the comma-delimited field identifier list.
pub const PARAM_FIELD_IDS: &str = "field-ids";
/// Parameter key for the token substituted for spaces inside one value.
pub const PARAM_SPACE_TOKEN: &str = "space-token";
/// Parameter key for the token joining adjacent field values.
pub const PARAM_CONCAT_TOKEN: &str = "concat-token";

/// Fallback for both tokens when a parameter is unset or blank.
const DEFAULT_TOKEN: &str = "-";

/// Configuration for one name-generation invocation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct PluginParams {
    /// Comma-delimited field identifiers, resolved in order.
    #[serde(default)]
    pub field_ids: String,
    /// Replacement for spaces inside a resolved value (default `-`).
    #[serde(default)]
    pub space_token: Option<String>,
    /// Separator between adjacent resolved values (default `-`).
    #[serde(default)]
    pub concat_token: Option<String>,
}

impl PluginParams {
    /// Split the identifier list on commas, keeping segments as supplied.
    pub fn identifiers(&self) -> Vec<&str> {
        self.field_ids.split(',').collect()
    }

    pub fn space_token(&self) -> &str {
        token_or_default(&self.space_token)
    }

    pub fn concat_token(&self) -> &str {
        token_or_default(&self.concat_token)
    }

    /// Parameter keys and descriptions for factory configuration screens.
    pub fn parameter_descriptions() -> [(&'static str, &'static str); 3] {
        [
            (
                PARAM_FIELD_IDS,
                "Comma-delimited list of page field identifiers used to build the system name.",
            ),
            (
                PARAM_SPACE_TOKEN,
                "Token substituted for spaces within each field value (defaults to '-').",
            ),
            (
                PARAM_CONCAT_TOKEN,
                "Token used to join field values together (defaults to '-').",
            ),
        ]
    }
}

fn token_or_default(token: &Option<String>) -> &str {
    match token {
        Some(value) if !value.trim().is_empty() => value,
        _ => DEFAULT_TOKEN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_default_when_unset_or_blank() {
        let params = PluginParams::default();
        assert_eq!(params.space_token(), "-");
        assert_eq!(params.concat_token(), "-");

        let params = PluginParams {
            space_token: Some("   ".into()),
            concat_token: Some(String::new()),
            ..PluginParams::default()
        };
        assert_eq!(params.space_token(), "-");
        assert_eq!(params.concat_token(), "-");
    }

    #[test]
    fn explicit_tokens_are_used() {
        let params = PluginParams {
            space_token: Some("_".into()),
            concat_token: Some("--".into()),
            ..PluginParams::default()
        };
        assert_eq!(params.space_token(), "_");
        assert_eq!(params.concat_token(), "--");
    }

    #[test]
    fn identifiers_split_on_commas_without_trimming() {
        let params = PluginParams {
            field_ids: "title, dynamic-metadata/topic".into(),
            ..PluginParams::default()
        };
        assert_eq!(params.identifiers(), vec!["title", " dynamic-metadata/topic"]);
    }

    #[test]
    fn params_deserialize_from_kebab_case_toml() {
        let params: PluginParams = toml::from_str(
            r#"
            field-ids = "title,author"
            space-token = "_"
            "#,
        )
        .expect("params should parse");
        assert_eq!(params.field_ids, "title,author");
        assert_eq!(params.space_token(), "_");
        assert_eq!(params.concat_token(), "-");
    }

    #[test]
    fn parameter_descriptions_cover_all_keys() {
        let descriptions = PluginParams::parameter_descriptions();
        let keys: Vec<&str> = descriptions.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec![PARAM_FIELD_IDS, PARAM_SPACE_TOKEN, PARAM_CONCAT_TOKEN]);
    }
}
