//! # Flowwalk - Prototype Flow-Map Navigation Engine
//!
//! **Flowwalk** lets you walk a static UI prototype without a backend. A prototype is
//! described by a *flow map*: a JSON document listing screens (an id plus an image)
//! and the transitions between them (a trigger label plus an optional hotspot).
//!
//! ## Core Workflow
//!
//! 1.  **Validate**: [`schema::validate`] checks the document's top-level shape.
//! 2.  **Index**: [`graph::Indexer`] resolves image references against the document's
//!     location and builds screen and outgoing-transition lookups. Every dangling
//!     reference is rejected here.
//! 3.  **Navigate**: [`navigation::NavigationEngine`] holds the current screen and a
//!     back-history stack. Presentation code pulls a [`navigation::CurrentView`] and
//!     pushes `navigate` / `go_back` commands, optionally subscribing to events.
//!
//! [`loader::FlowLoader`] strings the steps together and makes sure that when loads
//! overlap, only the most recently requested one is applied.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowwalk::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let document = json!({
//!         "flow_name": "Checkout",
//!         "start_screen": "home",
//!         "screens": [
//!             { "id": "home", "image": "home.png" },
//!             { "id": "detail", "image": "detail.png" }
//!         ],
//!         "transitions": [
//!             { "from_screen": "home", "to_screen": "detail", "trigger": "tap_card" }
//!         ]
//!     });
//!
//!     let location = Url::parse("file:///prototype/flow.json")?;
//!     let graph = index(&validate(&document)?, &location)?;
//!
//!     let mut engine = NavigationEngine::new();
//!     engine.load(graph);
//!
//!     let view = engine.current_view()?;
//!     assert_eq!(view.screen.image_url.as_str(), "file:///prototype/home.png");
//!
//!     engine.navigate("detail", "tap_card")?;
//!     assert_eq!(engine.history(), ["home"]);
//!
//!     engine.go_back()?;
//!     assert_eq!(engine.current_screen_id(), Some("home"));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod flow;
pub mod graph;
pub mod loader;
pub mod location;
pub mod navigation;
pub mod prelude;
pub mod schema;
pub mod status;
