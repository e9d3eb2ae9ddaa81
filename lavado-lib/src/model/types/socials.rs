//! Social profile links

use serde::Deserialize;
use serde::Serialize;

/// Social network links for a contact. All links are optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Socials {
    #[serde(rename = "X", skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(rename = "LinkedIn", skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(rename = "Facebook", skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

impl Socials {
    /// Iterates over the filled links as `(field, url)` pairs.
    pub fn links(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("x", self.x.as_deref()),
            ("linkedin", self.linkedin.as_deref()),
            ("facebook", self.facebook.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, url)| url.filter(|u| !u.trim().is_empty()).map(|u| (name, u)))
    }

    /// Returns true if no link is filled in.
    pub fn is_empty(&self) -> bool {
        self.links().next().is_none()
    }
}
