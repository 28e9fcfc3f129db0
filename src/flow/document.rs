use super::Hotspot;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A screen entry exactly as it appears in the document.
///
/// `id` and `image` are optional at this stage so that presence can be
/// checked explicitly by the indexer instead of failing during decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Any other descriptive fields, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A transition entry exactly as it appears in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionEntry {
    #[serde(default)]
    pub from_screen: Option<String>,
    #[serde(default)]
    pub to_screen: Option<String>,
    #[serde(default)]
    pub trigger: Option<String>,
    #[serde(default)]
    pub hotspot: Option<Hotspot>,
}

/// A document whose top-level shape has been checked by [`crate::schema::validate`].
///
/// Cross references are not checked yet; that is the indexer's job.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFlowMap {
    pub flow_name: Option<String>,
    pub platform: Option<String>,
    pub start_screen: String,
    pub screens: Vec<ScreenEntry>,
    pub transitions: Vec<TransitionEntry>,
}
