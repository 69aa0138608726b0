//! Site manifest: identity, contact, and organization data.

use serde::{Deserialize, Serialize};

/// Site-wide data loaded from `data/site.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteManifest {
    /// Organization name
    pub name: String,
    /// Hero headline
    pub tagline: String,
    /// Wordmark image path
    pub logo: String,
    /// Contact email shown in the footer
    pub contact_email: String,
    /// Postal address
    pub address: Address,
    /// Social profile URLs
    #[serde(default)]
    pub social: Vec<String>,
}

/// Postal address of the organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street line
    pub street: String,
    /// City
    pub locality: String,
    /// State or region code
    pub region: String,
    /// Postal code
    pub postal_code: String,
    /// Country code
    pub country: String,
}

impl Address {
    /// Single-line rendering for the footer.
    #[must_use]
    pub fn single_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.street, self.locality, self.region, self.postal_code, self.country
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "name": "Appton LLC",
        "tagline": "We create apps that make life simpler, smarter, and more playful",
        "logo": "logo_appton.png",
        "contactEmail": "contact@appton.io",
        "address": {
            "street": "701 Tillery Street Unit 12 Suite 3028",
            "locality": "Austin",
            "region": "TX",
            "postalCode": "78702",
            "country": "US"
        },
        "social": ["https://linkedin.com/company/appton"]
    }"#;

    #[test]
    fn test_parse_manifest() {
        let manifest: SiteManifest = serde_json::from_str(SAMPLE).expect("valid manifest");
        assert_eq!(manifest.name, "Appton LLC");
        assert_eq!(manifest.contact_email, "contact@appton.io");
        assert_eq!(manifest.social.len(), 1);
    }

    #[test]
    fn test_address_single_line() {
        let manifest: SiteManifest = serde_json::from_str(SAMPLE).expect("valid manifest");
        assert_eq!(
            manifest.address.single_line(),
            "701 Tillery Street Unit 12 Suite 3028, Austin, TX 78702, US"
        );
    }

    #[test]
    fn test_social_defaults_to_empty() {
        let manifest: SiteManifest = serde_json::from_str(
            r#"{
                "name": "Appton LLC",
                "tagline": "tagline",
                "logo": "logo_appton.png",
                "contactEmail": "contact@appton.io",
                "address": {
                    "street": "701 Tillery Street",
                    "locality": "Austin",
                    "region": "TX",
                    "postalCode": "78702",
                    "country": "US"
                }
            }"#,
        )
        .expect("valid manifest");
        assert!(manifest.social.is_empty());
    }
}
