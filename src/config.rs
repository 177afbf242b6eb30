use serde::Deserialize;

use crate::dom;

/// Id of the optional `<script type="application/json">` block in index.html.
pub const CONFIG_SCRIPT_ID: &str = "board-config";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    /// Backend origin + prefix. Empty means same origin.
    pub api_base: String,
    pub notice_hide_ms: u32,
    pub ids: ElementIds,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ElementIds {
    pub activities_list: String,
    pub activity_select: String,
    pub email_input: String,
    pub signup_form: String,
    pub message: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            notice_hide_ms: 5000,
            ids: ElementIds::default(),
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            activities_list: "activities-list".into(),
            activity_select: "activity".into(),
            email_input: "email".into(),
            signup_form: "signup-form".into(),
            message: "message".into(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads the embedded config block if the page has one. A broken block is
    /// logged and ignored.
    pub fn load() -> Self {
        let Some(json) = dom::embedded_text(CONFIG_SCRIPT_ID) else {
            return Self::default();
        };
        if json.trim().is_empty() {
            return Self::default();
        }
        match Self::from_json(&json) {
            Ok(cfg) => cfg,
            Err(e) => {
                gloo::console::error!(format!("Ignoring #{CONFIG_SCRIPT_ID}: {e}"));
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_ids() {
        let cfg = BoardConfig::default();
        assert_eq!(cfg.api_base, "");
        assert_eq!(cfg.notice_hide_ms, 5000);
        assert_eq!(cfg.ids.activities_list, "activities-list");
        assert_eq!(cfg.ids.activity_select, "activity");
        assert_eq!(cfg.ids.email_input, "email");
        assert_eq!(cfg.ids.signup_form, "signup-form");
        assert_eq!(cfg.ids.message, "message");
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = BoardConfig::from_json(
            r#"{"api_base": "https://api.example", "ids": {"message": "toast"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.api_base, "https://api.example");
        assert_eq!(cfg.notice_hide_ms, 5000);
        assert_eq!(cfg.ids.message, "toast");
        assert_eq!(cfg.ids.signup_form, "signup-form");
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(BoardConfig::from_json("{}").unwrap(), BoardConfig::default());
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(BoardConfig::from_json(r#"{"notice_hide_ms": "soon"}"#).is_err());
    }
}
