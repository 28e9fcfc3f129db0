use serde::Serialize;
use std::fmt;

/// A record of a state change made by the [`super::NavigationEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationEvent {
    /// A flow map was loaded and the engine reset to its start screen.
    Loaded {
        flow_name: Option<String>,
        start_screen: String,
    },
    /// A forward transition was taken.
    Navigated {
        from: String,
        to: String,
        trigger: String,
    },
    /// The previous screen was restored from history.
    WentBack { from: String, to: String },
}

impl NavigationEvent {
    /// The screen that is current after this event.
    pub fn destination(&self) -> &str {
        match self {
            NavigationEvent::Loaded { start_screen, .. } => start_screen,
            NavigationEvent::Navigated { to, .. } | NavigationEvent::WentBack { to, .. } => to,
        }
    }
}

/// Handle returned by [`super::NavigationEngine::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&NavigationEvent) + Send>;

/// Registered event listeners, notified in subscription order.
#[derive(Default)]
pub(super) struct Subscribers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub(super) fn add(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub(super) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    pub(super) fn notify(&mut self, event: &NavigationEvent) {
        for (_, callback) in self.callbacks.iter_mut() {
            callback(event);
        }
    }

    pub(super) fn len(&self) -> usize {
        self.callbacks.len()
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
