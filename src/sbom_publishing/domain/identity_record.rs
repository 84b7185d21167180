use super::run_metadata::NOT_AVAILABLE;
use serde::Deserialize;

/// Identifier as returned by the identity API: numeric or opaque string
///
/// Any other JSON shape is kept as `Other` so that it never fails the
/// record; it renders as the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdentityValue {
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl IdentityValue {
    fn render(&self) -> String {
        match self {
            IdentityValue::Number(n) => n.to_string(),
            IdentityValue::Text(s) => s.clone(),
            IdentityValue::Other(_) => String::new(),
        }
    }
}

/// IdentityRecord - `id` and `node_id` of a repository or account
///
/// Missing fields render as the sentinel individually, so a payload
/// carrying only `node_id` still yields that value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IdentityRecord {
    #[serde(default)]
    id: Option<IdentityValue>,
    #[serde(default)]
    node_id: Option<String>,
}

impl IdentityRecord {
    pub fn new(id: Option<IdentityValue>, node_id: Option<String>) -> Self {
        Self { id, node_id }
    }

    /// Record with neither identifier
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn id(&self) -> String {
        self.id
            .as_ref()
            .map(IdentityValue::render)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn node_id(&self) -> String {
        self.node_id
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}
