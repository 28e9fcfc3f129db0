//! Integration tests for Flowwalk
//!
//! End-to-end walks through a prototype: load, click through, go back, reload.
//!
mod common;
use common::*;
use flowwalk::prelude::*;
use std::sync::{Arc, Mutex};

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_full_walk_with_status_log() {
        let loader = FlowLoader::new();
        let mut engine = NavigationEngine::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        engine.subscribe(move |event| {
            sink.lock()
                .unwrap()
                .push(StatusFormatter::event(event).message)
        });

        let base = Url::parse("file:///prototype/").unwrap();
        let ticket = loader.begin("maps/flow.json", &base).unwrap();
        loader
            .complete(&ticket, Ok(shop_document().to_string()), &mut engine)
            .expect("shop flow should load");

        // Click inside the product card hotspot.
        let target = {
            let view = engine.current_view().unwrap();
            let hit = view
                .hotspots_at(100.0, 140.0)
                .next()
                .expect("point lies inside the card");
            (hit.to_screen.clone(), hit.trigger.clone())
        };
        engine.navigate(&target.0, &target.1).unwrap();

        // The adapter picks the first transition for a shared trigger.
        let target = {
            let view = engine.current_view().unwrap();
            let first = view.transitions_for("add_to_cart").next().unwrap();
            (first.to_screen.clone(), first.trigger.clone())
        };
        engine.navigate(&target.0, &target.1).unwrap();
        engine.follow(0).unwrap();

        let view = engine.current_view().unwrap();
        assert_eq!(view.screen.id, "done");
        assert!(view.outgoing.is_empty());
        assert_eq!(
            StatusFormatter::breadcrumbs(view.history, &view.screen.id),
            "home > detail > cart > done"
        );

        while let BackOutcome::Returned { .. } = engine.go_back().unwrap() {}
        assert_eq!(engine.current_screen_id(), Some("home"));

        assert_eq!(
            *log.lock().unwrap(),
            [
                "Loaded screen: home",
                "Transition: tap_card -> detail",
                "Transition: add_to_cart -> cart",
                "Transition: pay -> done",
                "Loaded screen: cart",
                "Loaded screen: detail",
                "Loaded screen: home",
            ]
        );
    }

    #[test]
    fn test_switching_maps_mid_walk() {
        let loader = FlowLoader::new();
        let mut engine = NavigationEngine::new();
        let base = Url::parse("file:///prototype/").unwrap();

        let ticket = loader.begin("maps/flow.json", &base).unwrap();
        loader
            .complete(&ticket, Ok(shop_document().to_string()), &mut engine)
            .unwrap();
        engine.navigate("detail", "tap_card").unwrap();

        let ticket = loader.begin("maps/flow.json", &base).unwrap();
        loader
            .complete(&ticket, Ok(scenario_document().to_string()), &mut engine)
            .unwrap();

        let view = engine.current_view().unwrap();
        assert_eq!(view.screen.id, "home");
        assert_eq!(view.meta.display_name(), "-");
        assert_eq!(view.outgoing.len(), 1);
        assert!(engine.history().is_empty());
    }
}
