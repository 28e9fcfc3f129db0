//! Common test utilities for building flow-map documents and engines.
use flowwalk::prelude::*;
use serde_json::{Value, json};

/// The location every fixture document is pretended to be loaded from.
#[allow(dead_code)]
pub const MAP_LOCATION: &str = "file:///prototype/maps/flow.json";

#[allow(dead_code)]
pub fn map_location() -> Url {
    Url::parse(MAP_LOCATION).expect("fixture location is a valid URL")
}

/// Two screens and one transition: `home --tap_card--> detail`.
#[allow(dead_code)]
pub fn scenario_document() -> Value {
    json!({
        "start_screen": "home",
        "screens": [
            { "id": "home", "image": "a.png" },
            { "id": "detail", "image": "b.png" }
        ],
        "transitions": [
            { "from_screen": "home", "to_screen": "detail", "trigger": "tap_card" }
        ]
    })
}

/// A small shop prototype with hotspots, a list-only transition, a shared
/// trigger label and a terminal screen.
///
/// ```text
/// home --tap_card [hotspot]--> detail --add_to_cart [hotspot]--> cart --pay--> done
///   \--open_menu--> menu         \--add_to_cart--> cart_error
/// ```
#[allow(dead_code)]
pub fn shop_document() -> Value {
    json!({
        "flow_name": "Shop",
        "platform": "ios",
        "start_screen": "home",
        "screens": [
            { "id": "home", "image": "screens/home.png", "notes": "Landing page" },
            { "id": "menu", "image": "screens/menu.png" },
            { "id": "detail", "image": "screens/detail.png" },
            { "id": "cart", "image": "https://cdn.example/cart.png" },
            { "id": "cart_error", "image": "screens/cart_error.png" },
            { "id": "done", "image": "../done.png" }
        ],
        "transitions": [
            {
                "from_screen": "home", "to_screen": "detail", "trigger": "tap_card",
                "hotspot": { "x": 10, "y": 100, "width": 200, "height": 80 }
            },
            { "from_screen": "home", "to_screen": "menu", "trigger": "open_menu" },
            {
                "from_screen": "detail", "to_screen": "cart", "trigger": "add_to_cart",
                "hotspot": { "x": 0, "y": 600, "width": 375, "height": 60 }
            },
            { "from_screen": "detail", "to_screen": "cart_error", "trigger": "add_to_cart" },
            { "from_screen": "cart", "to_screen": "done", "trigger": "pay" }
        ]
    })
}

/// Validates and indexes a document at [`MAP_LOCATION`].
#[allow(dead_code)]
pub fn build_graph(document: &Value) -> FlowGraph {
    let validated = validate(document).expect("fixture should pass schema validation");
    index(&validated, &map_location()).expect("fixture should index")
}

/// An engine already loaded with `document`.
#[allow(dead_code)]
pub fn loaded_engine(document: &Value) -> NavigationEngine {
    let mut engine = NavigationEngine::new();
    engine.load(build_graph(document));
    engine
}
