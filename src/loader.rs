//! The load pipeline: retrieve, parse, validate, index, then hand the graph to
//! the engine.
//!
//! Retrieval may be slow and may complete out of order. Every request gets a
//! [`LoadTicket`] stamped with a generation number, and a completion is only
//! applied if no newer request has started since (last load wins). Completions
//! of superseded tickets are dropped whatever their content, so a stale error
//! never overwrites a newer map either. A ticket is applied at most once.

use crate::error::LoadError;
use crate::graph::{FlowGraph, Indexer};
use crate::location::resolve_location;
use crate::navigation::NavigationEngine;
use crate::schema;
use std::fs;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};
use url::Url;

/// Retrieves the raw text of a flow-map document.
pub trait FlowSource {
    fn fetch(&self, location: &Url) -> Result<String, LoadError>;
}

/// Reads `file://` locations from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl FlowSource for FileSource {
    fn fetch(&self, location: &Url) -> Result<String, LoadError> {
        let path = location.to_file_path().map_err(|_| LoadError::Retrieval {
            location: location.to_string(),
            message: format!("unsupported scheme '{}', expected a file location", location.scheme()),
        })?;
        fs::read_to_string(&path).map_err(|e| LoadError::Retrieval {
            location: location.to_string(),
            message: e.to_string(),
        })
    }
}

/// A pending load request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    location: Url,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The resolved document locator, to be handed to the retriever.
    pub fn location(&self) -> &Url {
        &self.location
    }
}

/// What happened to a completed load request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The map was indexed and the engine now sits on its start screen.
    Applied { generation: u64, start_screen: String },
    /// A newer request had started; the result was discarded unseen.
    Superseded { generation: u64, latest: u64 },
    /// The ticket had already been applied; the engine was left alone.
    AlreadyApplied { generation: u64 },
}

/// Issues load tickets and applies their results to a [`NavigationEngine`].
#[derive(Debug, Default)]
pub struct FlowLoader {
    generation: AtomicU64,
    applied: AtomicU64,
    indexer: Indexer,
}

impl FlowLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indexer(indexer: Indexer) -> Self {
        Self {
            generation: AtomicU64::new(0),
            applied: AtomicU64::new(0),
            indexer,
        }
    }

    /// The generation of the most recently started request; `0` before any.
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Starts a request for `location`, resolved against `base`. Every earlier
    /// ticket becomes stale. An unresolvable location fails without superseding anything.
    pub fn begin(&self, location: &str, base: &Url) -> Result<LoadTicket, LoadError> {
        let location = resolve_location(location, base)?;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation, location = %location, "started flow map load");
        Ok(LoadTicket { generation, location })
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.latest_generation()
    }

    /// Applies the retrieved document for `ticket`.
    ///
    /// On any error the engine keeps whatever it had loaded before.
    pub fn complete(
        &self,
        ticket: &LoadTicket,
        fetched: Result<String, LoadError>,
        engine: &mut NavigationEngine,
    ) -> Result<LoadOutcome, LoadError> {
        if let Some(outcome) = self.skip(ticket) {
            return Ok(outcome);
        }
        let graph = self.prepare(&fetched?, &ticket.location)?;
        Ok(self.apply(ticket, graph, engine))
    }

    /// Hands an already prepared graph to the engine, unless `ticket` was
    /// superseded or applied while the graph was being built.
    pub fn apply(
        &self,
        ticket: &LoadTicket,
        graph: FlowGraph,
        engine: &mut NavigationEngine,
    ) -> LoadOutcome {
        if let Some(outcome) = self.skip(ticket) {
            return outcome;
        }
        let start_screen = graph.start_screen().to_string();
        self.applied.store(ticket.generation, Ordering::SeqCst);
        engine.load(graph);
        LoadOutcome::Applied {
            generation: ticket.generation,
            start_screen,
        }
    }

    // Each ticket loads at most once, and only while it is the latest.
    fn skip(&self, ticket: &LoadTicket) -> Option<LoadOutcome> {
        let latest = self.latest_generation();
        if ticket.generation != latest {
            warn!(
                generation = ticket.generation,
                latest,
                location = %ticket.location,
                "discarding superseded flow map load"
            );
            return Some(LoadOutcome::Superseded {
                generation: ticket.generation,
                latest,
            });
        }
        if self.applied.load(Ordering::SeqCst) == ticket.generation {
            warn!(
                generation = ticket.generation,
                location = %ticket.location,
                "ignoring repeated completion of an applied flow map load"
            );
            return Some(LoadOutcome::AlreadyApplied {
                generation: ticket.generation,
            });
        }
        None
    }

    /// Begins, retrieves and completes a request in one call.
    pub fn load_from<S: FlowSource + ?Sized>(
        &self,
        source: &S,
        location: &str,
        base: &Url,
        engine: &mut NavigationEngine,
    ) -> Result<LoadOutcome, LoadError> {
        let ticket = self.begin(location, base)?;
        let fetched = source.fetch(ticket.location());
        self.complete(&ticket, fetched, engine)
    }

    /// Parses, validates and indexes a document without touching any engine.
    pub fn prepare(&self, document: &str, location: &Url) -> Result<FlowGraph, LoadError> {
        let value: serde_json::Value =
            serde_json::from_str(document).map_err(|e| LoadError::Parse(e.to_string()))?;
        let validated = schema::validate(&value)?;
        Ok(self.indexer.index(&validated, location)?)
    }
}
