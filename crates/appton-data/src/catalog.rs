//! The loaded data set backing the page.

use crate::app::AppRecord;
use crate::error::DataError;
use crate::manifest::SiteManifest;
use crate::member::MemberRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Everything the page renders, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Site identity and contact data
    pub manifest: SiteManifest,
    /// App portfolio in display order
    pub apps: Vec<AppRecord>,
    /// Team roster in display order
    pub members: Vec<MemberRecord>,
}

/// A non-fatal problem found while validating the data set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Record the finding refers to, e.g. `apps[2] "Drift"`
    pub record: String,
    /// Human-readable description
    pub message: String,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.record, self.message)
    }
}

impl Catalog {
    /// Build a catalog from the three JSON documents.
    ///
    /// # Errors
    ///
    /// Returns an error if any document fails to parse.
    pub fn from_json_strs(site: &str, apps: &str, members: &str) -> Result<Self, DataError> {
        Ok(Self {
            manifest: serde_json::from_str(site)?,
            apps: serde_json::from_str(apps)?,
            members: serde_json::from_str(members)?,
        })
    }

    /// Load `site.json`, `apps.json`, and `members.json` from a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, DataError> {
        let dir = dir.as_ref();
        let read = |name: &str| -> Result<String, DataError> {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|e| DataError::io(path, e))
        };

        let site = read("site.json")?;
        let apps = read("apps.json")?;
        let members = read("members.json")?;

        let manifest = serde_json::from_str(&site)
            .map_err(|e| DataError::json_in(dir.join("site.json"), e))?;
        let apps = serde_json::from_str(&apps)
            .map_err(|e| DataError::json_in(dir.join("apps.json"), e))?;
        let members = serde_json::from_str(&members)
            .map_err(|e| DataError::json_in(dir.join("members.json"), e))?;

        Ok(Self {
            manifest,
            apps,
            members,
        })
    }

    /// Look up an app by its (assumed unique) name.
    #[must_use]
    pub fn app_by_name(&self, name: &str) -> Option<&AppRecord> {
        self.apps.iter().find(|a| a.name == name)
    }

    /// Validate the data set, returning all findings.
    ///
    /// Findings are advisory: the page renders whatever it is given, and
    /// broken asset references are the pipeline's concern. Uniqueness of
    /// app names is assumed rather than enforced, so duplicates surface
    /// here instead of failing the load.
    #[must_use]
    pub fn validate(&self) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut seen = HashSet::new();

        for (i, app) in self.apps.iter().enumerate() {
            let record = format!("apps[{i}] {:?}", app.name);
            if app.name.trim().is_empty() {
                findings.push(Finding {
                    record: record.clone(),
                    message: "empty name".to_string(),
                });
            } else if !seen.insert(app.name.clone()) {
                findings.push(Finding {
                    record: record.clone(),
                    message: "duplicate name".to_string(),
                });
            }
            if app.image.trim().is_empty() {
                findings.push(Finding {
                    record: record.clone(),
                    message: "missing image reference".to_string(),
                });
            }
            for link in std::iter::once(app.link.as_str()).chain(app.store_links()) {
                if !link.starts_with("https://") {
                    findings.push(Finding {
                        record: record.clone(),
                        message: format!("link is not https: {link}"),
                    });
                }
            }
            if app.published && !app.has_store_links() {
                findings.push(Finding {
                    record,
                    message: "published but has no store links".to_string(),
                });
            }
        }

        for (i, member) in self.members.iter().enumerate() {
            let record = format!("members[{i}] {:?}", member.name);
            if member.name.trim().is_empty() {
                findings.push(Finding {
                    record: record.clone(),
                    message: "empty name".to_string(),
                });
            }
            if member.image.trim().is_empty() {
                findings.push(Finding {
                    record: record.clone(),
                    message: "missing image reference".to_string(),
                });
            }
            if !member.link.starts_with("https://") {
                findings.push(Finding {
                    record,
                    message: format!("link is not https: {}", member.link),
                });
            }
        }

        findings
    }
}
