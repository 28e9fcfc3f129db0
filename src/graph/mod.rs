//! Screen and transition indexes built from a validated flow map.
//!
//! All graph integrity is enforced here: once a [`FlowGraph`] exists, its start
//! screen and every transition endpoint are guaranteed to name indexed screens.

use crate::error::GraphError;
use crate::flow::{FlowMeta, Screen, Transition, ValidatedFlowMap};
use crate::location::resolve_reference;
use ahash::AHashMap;
use tracing::{debug, warn};
use url::Url;

mod builder;

// Typed `Screen` fields; document keys with these names never pass through as extras.
const SCREEN_FIELDS: [&str; 3] = ["id", "image", "image_url"];

pub use builder::IndexerBuilder;

/// What to do when two screens share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail with [`GraphError::DuplicateScreen`].
    #[default]
    Reject,
    /// Keep the later screen. The id keeps the position of its first declaration.
    LastWriteWins,
}

/// The immutable, indexed form of a flow map.
#[derive(Debug, Clone)]
pub struct FlowGraph {
    meta: FlowMeta,
    location: Url,
    screens: AHashMap<String, Screen>,
    outgoing: AHashMap<String, Vec<Transition>>,
    screen_order: Vec<String>,
    transition_count: usize,
}

impl FlowGraph {
    pub fn meta(&self) -> &FlowMeta {
        &self.meta
    }

    /// The locator the document was loaded from; images were resolved against it.
    pub fn location(&self) -> &Url {
        &self.location
    }

    pub fn start_screen(&self) -> &str {
        &self.meta.start_screen
    }

    pub fn screen(&self, id: &str) -> Option<&Screen> {
        self.screens.get(id)
    }

    pub fn contains_screen(&self, id: &str) -> bool {
        self.screens.contains_key(id)
    }

    /// Transitions leaving `id`, in declaration order. Unknown ids and
    /// terminal screens both yield an empty slice.
    pub fn outgoing(&self, id: &str) -> &[Transition] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Screens in declaration order.
    pub fn screens(&self) -> impl Iterator<Item = &Screen> {
        self.screen_order.iter().filter_map(|id| self.screens.get(id))
    }

    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transition_count
    }
}

/// Builds [`FlowGraph`]s from validated documents.
#[derive(Debug, Clone, Default)]
pub struct Indexer {
    duplicates: DuplicatePolicy,
}

impl Indexer {
    pub fn builder() -> IndexerBuilder {
        IndexerBuilder::new()
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Indexes `flow`, resolving image references against `location`.
    /// The input is left untouched.
    pub fn index(&self, flow: &ValidatedFlowMap, location: &Url) -> Result<FlowGraph, GraphError> {
        let mut screens = AHashMap::with_capacity(flow.screens.len());
        let mut screen_order = Vec::with_capacity(flow.screens.len());

        for (index, entry) in flow.screens.iter().enumerate() {
            let id = required(entry.id.as_deref())
                .ok_or(GraphError::MissingScreenField { index, field: "id" })?;
            let image = required(entry.image.as_deref()).ok_or(GraphError::MissingScreenField {
                index,
                field: "image",
            })?;

            let image_url =
                resolve_reference(image, location).map_err(|e| GraphError::InvalidImageReference {
                    screen_id: id.to_string(),
                    image: image.to_string(),
                    message: e.to_string(),
                })?;

            let mut extra = entry.extra.clone();
            extra.retain(|key, _| !SCREEN_FIELDS.contains(&key.as_str()));

            let screen = Screen {
                id: id.to_string(),
                image: image.to_string(),
                image_url,
                extra,
            };

            if screens.insert(id.to_string(), screen).is_some() {
                match self.duplicates {
                    DuplicatePolicy::Reject => return Err(GraphError::DuplicateScreen(id.to_string())),
                    DuplicatePolicy::LastWriteWins => {
                        warn!(screen = id, "duplicate screen id, keeping the later declaration");
                    }
                }
            } else {
                screen_order.push(id.to_string());
            }
        }

        if !screens.contains_key(&flow.start_screen) {
            return Err(GraphError::UnresolvedStartScreen(flow.start_screen.clone()));
        }

        let mut outgoing: AHashMap<String, Vec<Transition>> = AHashMap::new();
        for (index, entry) in flow.transitions.iter().enumerate() {
            let from_screen = required(entry.from_screen.as_deref()).ok_or(
                GraphError::MissingTransitionField {
                    index,
                    field: "from_screen",
                },
            )?;
            let to_screen = required(entry.to_screen.as_deref()).ok_or(
                GraphError::MissingTransitionField {
                    index,
                    field: "to_screen",
                },
            )?;
            let trigger = required(entry.trigger.as_deref()).ok_or(
                GraphError::MissingTransitionField {
                    index,
                    field: "trigger",
                },
            )?;

            for (field, screen_id) in [("from_screen", from_screen), ("to_screen", to_screen)] {
                if !screens.contains_key(screen_id) {
                    return Err(GraphError::UnresolvedScreenReference {
                        index,
                        field,
                        screen_id: screen_id.to_string(),
                    });
                }
            }

            outgoing
                .entry(from_screen.to_string())
                .or_default()
                .push(Transition {
                    from_screen: from_screen.to_string(),
                    to_screen: to_screen.to_string(),
                    trigger: trigger.to_string(),
                    hotspot: entry.hotspot,
                });
        }

        debug!(
            screens = screens.len(),
            transitions = flow.transitions.len(),
            location = %location,
            "indexed flow map"
        );

        Ok(FlowGraph {
            meta: FlowMeta {
                flow_name: flow.flow_name.clone(),
                platform: flow.platform.clone(),
                start_screen: flow.start_screen.clone(),
            },
            location: location.clone(),
            screens,
            outgoing,
            screen_order,
            transition_count: flow.transitions.len(),
        })
    }
}

/// Indexes `flow` with the default options (duplicate screen ids are rejected).
pub fn index(flow: &ValidatedFlowMap, location: &Url) -> Result<FlowGraph, GraphError> {
    Indexer::default().index(flow, location)
}

// Present and non-empty. Absence and the empty string are both rejected, nothing else is.
fn required(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
