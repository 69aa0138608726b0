//! Team roster records.

use serde::{Deserialize, Serialize};

/// One team member, as stored in `data/members.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    /// Full name
    pub name: String,
    /// Role title
    pub title: String,
    /// Portrait image path, relative to the asset root
    pub image: String,
    /// External profile link
    pub link: String,
}
