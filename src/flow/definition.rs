use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

/// Placeholder shown when an optional display label is absent.
pub const MISSING_LABEL: &str = "-";

/// Display information about the loaded flow map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowMeta {
    pub flow_name: Option<String>,
    pub platform: Option<String>,
    pub start_screen: String,
}

impl FlowMeta {
    pub fn display_name(&self) -> &str {
        self.flow_name.as_deref().unwrap_or(MISSING_LABEL)
    }

    pub fn display_platform(&self) -> &str {
        self.platform.as_deref().unwrap_or(MISSING_LABEL)
    }
}

/// A navigable screen with its image resolved to an absolute locator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    pub id: String,
    /// The image reference as written in the document.
    pub image: String,
    pub image_url: Url,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A rectangular, screen-relative region that activates a transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Hotspot {
    /// Returns `true` if the point lies inside the rectangle.
    /// The left and top edges are inclusive, the right and bottom edges exclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// How a presentation layer can offer a transition to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Affordance {
    /// A spatial region drawn over the screen image.
    Hotspot(Hotspot),
    /// No region was declared; the transition is only reachable from a list.
    List,
}

/// A directed, validated edge between two indexed screens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub from_screen: String,
    pub to_screen: String,
    pub trigger: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotspot: Option<Hotspot>,
}

impl Transition {
    pub fn affordance(&self) -> Affordance {
        match self.hotspot {
            Some(hotspot) => Affordance::Hotspot(hotspot),
            None => Affordance::List,
        }
    }
}
