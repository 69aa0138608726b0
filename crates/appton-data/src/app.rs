//! App portfolio records.

use serde::{Deserialize, Serialize};

/// One app in the portfolio, as stored in `data/apps.json`.
///
/// Records are loaded once and never mutated. Names are the key; the
/// loader assumes uniqueness and validation reports duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRecord {
    /// Display name, unique across the portfolio
    pub name: String,
    /// Short tagline shown under the name
    #[serde(default)]
    pub subtitle: String,
    /// Longer description for the showcase detail panel
    #[serde(default)]
    pub description: String,
    /// Logo image path, relative to the asset root
    pub image: String,
    /// External product link
    pub link: String,
    /// Whether the app has shipped to the stores
    #[serde(default = "default_published")]
    pub published: bool,
    /// App Store link, when published there
    #[serde(default)]
    pub app_store_link: Option<String>,
    /// Play Store link, when published there
    #[serde(default)]
    pub play_store_link: Option<String>,
}

const fn default_published() -> bool {
    true
}

impl AppRecord {
    /// Store links in display order, skipping absent ones.
    #[must_use]
    pub fn store_links(&self) -> Vec<&str> {
        self.app_store_link
            .iter()
            .chain(self.play_store_link.iter())
            .map(String::as_str)
            .collect()
    }

    /// Whether any store badge should be shown.
    #[must_use]
    pub fn has_store_links(&self) -> bool {
        self.app_store_link.is_some() || self.play_store_link.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "name": "Lumen",
        "subtitle": "Light journal",
        "description": "Track your mood with light.",
        "image": "apps/lumen.png",
        "link": "https://appton.io/lumen",
        "published": true,
        "appStoreLink": "https://apps.apple.com/app/id100001",
        "playStoreLink": "https://play.google.com/store/apps/details?id=io.appton.lumen"
    }"#;

    #[test]
    fn test_parse_full_record() {
        let app: AppRecord = serde_json::from_str(SAMPLE).expect("valid record");
        assert_eq!(app.name, "Lumen");
        assert!(app.published);
        assert_eq!(app.store_links().len(), 2);
    }

    #[test]
    fn test_camel_case_field_names() {
        let app: AppRecord = serde_json::from_str(SAMPLE).expect("valid record");
        let json = serde_json::to_string(&app).expect("serialize");
        assert!(json.contains("appStoreLink"));
        assert!(json.contains("playStoreLink"));
        assert!(!json.contains("app_store_link"));
    }

    #[test]
    fn test_minimal_record_defaults() {
        let app: AppRecord = serde_json::from_str(
            r#"{"name": "Drift", "image": "apps/drift.png", "link": "https://appton.io/drift"}"#,
        )
        .expect("minimal record");
        assert!(app.published);
        assert!(app.subtitle.is_empty());
        assert!(!app.has_store_links());
        assert!(app.store_links().is_empty());
    }

    #[test]
    fn test_store_links_order() {
        let app = AppRecord {
            name: "X".to_string(),
            subtitle: String::new(),
            description: String::new(),
            image: "x.png".to_string(),
            link: "https://example.com".to_string(),
            published: true,
            app_store_link: Some("https://apps.apple.com/x".to_string()),
            play_store_link: Some("https://play.google.com/x".to_string()),
        };
        assert_eq!(
            app.store_links(),
            vec!["https://apps.apple.com/x", "https://play.google.com/x"]
        );
    }
}
