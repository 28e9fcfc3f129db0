use crate::error::{NavigationError, StateError};
use crate::flow::Screen;
use crate::graph::FlowGraph;
use std::sync::Arc;
use tracing::info;

mod events;
mod view;

pub use events::{NavigationEvent, SubscriptionId};
pub use view::CurrentView;

use events::Subscribers;

/// The result of a [`NavigationEngine::go_back`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackOutcome {
    /// The previous screen was restored.
    Returned { from: String, to: String },
    /// History was empty; nothing changed.
    NoPreviousScreen,
}

/// Navigation state of a loaded flow map.
#[derive(Debug, Clone)]
struct Session {
    graph: Arc<FlowGraph>,
    current: String,
    history: Vec<String>,
}

impl Session {
    // `load` and `navigate` only ever set indexed ids.
    fn current_screen(&self) -> Result<&Screen, StateError> {
        self.graph
            .screen(&self.current)
            .ok_or_else(|| StateError::UnindexedScreen(self.current.clone()))
    }
}

#[derive(Debug, Clone, Default)]
enum NavigationState {
    #[default]
    Unloaded,
    Loaded(Session),
}

/// Owns the current screen and the back-history of a prototype walk.
///
/// The engine is the only place navigation state changes. Presentation code reads
/// [`CurrentView`]s and issues commands; it never writes state directly. Each
/// change is reported to subscribers as a [`NavigationEvent`], which keeps the
/// engine fully usable without any UI attached.
#[derive(Debug, Default)]
pub struct NavigationEngine {
    state: NavigationState,
    subscribers: Subscribers,
}

impl NavigationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any loaded flow map, resetting to its start screen with empty history.
    ///
    /// Cannot fail: every [`FlowGraph`] already has a resolvable start screen.
    pub fn load(&mut self, graph: impl Into<Arc<FlowGraph>>) {
        let graph = graph.into();
        let start = graph.start_screen().to_string();
        let event = NavigationEvent::Loaded {
            flow_name: graph.meta().flow_name.clone(),
            start_screen: start.clone(),
        };

        info!(
            flow = graph.meta().display_name(),
            start_screen = %start,
            screens = graph.screen_count(),
            "loaded flow map"
        );
        self.state = NavigationState::Loaded(Session {
            graph,
            current: start,
            history: Vec::new(),
        });
        self.subscribers.notify(&event);
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, NavigationState::Loaded(_))
    }

    /// The loaded graph, if any.
    pub fn graph(&self) -> Option<&Arc<FlowGraph>> {
        match &self.state {
            NavigationState::Loaded(session) => Some(&session.graph),
            NavigationState::Unloaded => None,
        }
    }

    /// The current screen id, or `None` before the first load.
    pub fn current_screen_id(&self) -> Option<&str> {
        match &self.state {
            NavigationState::Loaded(session) => Some(&session.current),
            NavigationState::Unloaded => None,
        }
    }

    /// Previously visited screen ids, oldest first. Empty before the first load.
    pub fn history(&self) -> &[String] {
        match &self.state {
            NavigationState::Loaded(session) => &session.history,
            NavigationState::Unloaded => &[],
        }
    }

    pub fn current_view(&self) -> Result<CurrentView<'_>, StateError> {
        let session = self.session("read the current view")?;
        let screen = session.current_screen()?;
        Ok(CurrentView {
            meta: session.graph.meta(),
            screen,
            outgoing: session.graph.outgoing(&session.current),
            history: &session.history,
        })
    }

    /// Moves to `target`, pushing the current screen onto history.
    ///
    /// Callers normally pick targets from [`CurrentView::outgoing`], but any
    /// indexed screen is accepted. Unknown targets are rejected without touching state.
    pub fn navigate(&mut self, target: &str, trigger: &str) -> Result<NavigationEvent, NavigationError> {
        let session = self.session_mut("navigate")?;
        if !session.graph.contains_screen(target) {
            return Err(NavigationError::UnknownScreen(target.to_string()));
        }

        let from = std::mem::replace(&mut session.current, target.to_string());
        session.history.push(from.clone());

        let event = NavigationEvent::Navigated {
            from,
            to: target.to_string(),
            trigger: trigger.to_string(),
        };
        info!(trigger, to = target, depth = session.history.len(), "navigated");
        self.subscribers.notify(&event);
        Ok(event)
    }

    /// Takes the `index`-th outgoing transition of the current screen.
    pub fn follow(&mut self, index: usize) -> Result<NavigationEvent, NavigationError> {
        let session = self.session("follow a transition")?;
        let transition = session
            .graph
            .outgoing(&session.current)
            .get(index)
            .ok_or_else(|| NavigationError::NoSuchTransition {
                screen_id: session.current.clone(),
                index,
            })?;
        let (target, trigger) = (transition.to_screen.clone(), transition.trigger.clone());
        self.navigate(&target, &trigger)
    }

    /// Restores the most recent history entry.
    ///
    /// An empty history is a normal boundary, reported as
    /// [`BackOutcome::NoPreviousScreen`] rather than an error.
    pub fn go_back(&mut self) -> Result<BackOutcome, StateError> {
        let session = self.session_mut("go back")?;
        let Some(previous) = session.history.pop() else {
            info!(screen = %session.current, "no previous screen in history");
            return Ok(BackOutcome::NoPreviousScreen);
        };

        let from = std::mem::replace(&mut session.current, previous.clone());
        info!(from = %from, to = %previous, depth = session.history.len(), "went back");

        let event = NavigationEvent::WentBack {
            from: from.clone(),
            to: previous.clone(),
        };
        self.subscribers.notify(&event);
        Ok(BackOutcome::Returned { from, to: previous })
    }

    /// Registers a listener for every subsequent [`NavigationEvent`].
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&NavigationEvent) + Send + 'static,
    {
        self.subscribers.add(Box::new(callback))
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn session(&self, operation: &'static str) -> Result<&Session, StateError> {
        match &self.state {
            NavigationState::Loaded(session) => Ok(session),
            NavigationState::Unloaded => Err(StateError::NotLoaded { operation }),
        }
    }

    fn session_mut(&mut self, operation: &'static str) -> Result<&mut Session, StateError> {
        match &mut self.state {
            NavigationState::Loaded(session) => Ok(session),
            NavigationState::Unloaded => Err(StateError::NotLoaded { operation }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{ScreenEntry, ValidatedFlowMap};
    use serde_json::Map;
    use url::Url;

    fn single_screen_graph() -> FlowGraph {
        let flow = ValidatedFlowMap {
            flow_name: None,
            platform: None,
            start_screen: "home".to_string(),
            screens: vec![ScreenEntry {
                id: Some("home".to_string()),
                image: Some("home.png".to_string()),
                extra: Map::new(),
            }],
            transitions: Vec::new(),
        };
        let location = Url::parse("file:///maps/flow.json").unwrap();
        crate::graph::index(&flow, &location).unwrap()
    }

    #[test]
    fn test_current_view_reports_unindexed_screen() {
        let engine = NavigationEngine {
            state: NavigationState::Loaded(Session {
                graph: Arc::new(single_screen_graph()),
                current: "ghost".to_string(),
                history: Vec::new(),
            }),
            subscribers: Subscribers::default(),
        };

        assert_eq!(
            engine.current_view().unwrap_err(),
            StateError::UnindexedScreen("ghost".to_string())
        );
    }
}
