use crate::flow::{FlowMeta, Screen, Transition};

/// Everything a presentation layer needs to draw the current screen.
#[derive(Debug, Clone, Copy)]
pub struct CurrentView<'a> {
    pub meta: &'a FlowMeta,
    pub screen: &'a Screen,
    /// Outgoing transitions in declaration order. Transitions sharing a
    /// trigger label are all kept.
    pub outgoing: &'a [Transition],
    pub history: &'a [String],
}

impl<'a> CurrentView<'a> {
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Transitions that declare a spatial hotspot.
    pub fn hotspot_transitions(self) -> impl Iterator<Item = &'a Transition> {
        self.outgoing.iter().filter(|t| t.hotspot.is_some())
    }

    /// Transitions without a hotspot, only reachable from a list.
    pub fn list_transitions(self) -> impl Iterator<Item = &'a Transition> {
        self.outgoing.iter().filter(|t| t.hotspot.is_none())
    }

    /// Every hotspot transition whose rectangle contains the point, in declaration
    /// order. Choosing among overlapping matches is left to the caller.
    pub fn hotspots_at(self, x: f64, y: f64) -> impl Iterator<Item = &'a Transition> {
        self.outgoing
            .iter()
            .filter(move |t| t.hotspot.is_some_and(|h| h.contains(x, y)))
    }

    /// Outgoing transitions carrying `trigger`, in declaration order.
    pub fn transitions_for(self, trigger: &str) -> impl Iterator<Item = &'a Transition> {
        self.outgoing.iter().filter(move |t| t.trigger == trigger)
    }
}
