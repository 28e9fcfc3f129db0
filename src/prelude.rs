//! Prelude module for convenient imports
//!
//! Re-exports the types needed to load a flow map and walk it.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowwalk::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let loader = FlowLoader::new();
//! let mut engine = NavigationEngine::new();
//! let base = current_dir_base()?;
//!
//! loader.load_from(&FileSource, "prototype/flow.json", &base, &mut engine)?;
//! let view = engine.current_view()?;
//! println!("On '{}' with {} transitions", view.screen.id, view.outgoing.len());
//! # Ok(())
//! # }
//! ```

// Pipeline
pub use crate::graph::{DuplicatePolicy, FlowGraph, Indexer, index};
pub use crate::loader::{FileSource, FlowLoader, FlowSource, LoadOutcome, LoadTicket};
pub use crate::location::{current_dir_base, directory_base, resolve_location};
pub use crate::schema::validate;

// Navigation
pub use crate::navigation::{
    BackOutcome, CurrentView, NavigationEngine, NavigationEvent, SubscriptionId,
};

// Data model
pub use crate::flow::{Affordance, FlowMeta, Hotspot, Screen, Transition, ValidatedFlowMap};

// Error types
pub use crate::error::{GraphError, LoadError, NavigationError, SchemaError, StateError};

// Status formatting
pub use crate::status::{StatusFormatter, StatusLine};

pub use url::Url;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
