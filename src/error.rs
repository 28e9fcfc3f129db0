use thiserror::Error;

/// Errors raised while checking the top-level shape of a flow-map document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Flow map must be a JSON object, but found {found}")]
    NotAnObject { found: &'static str },

    #[error("Flow map must include a 'screens' array")]
    MissingScreens,

    #[error("Flow map must include non-empty 'screens'")]
    EmptyScreens,

    #[error("Flow map must include a 'transitions' array")]
    MissingTransitions,

    #[error("Flow map must include a non-empty string 'start_screen'")]
    MissingStartScreen,

    #[error("Entry {index} of '{field}' is malformed: {message}")]
    MalformedEntry {
        field: &'static str,
        index: usize,
        message: String,
    },
}

/// Errors raised while building the screen and transition indexes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Screen {index} is missing a non-empty '{field}'; every screen requires 'id' and 'image'")]
    MissingScreenField { index: usize, field: &'static str },

    #[error("Screen id '{0}' is declared more than once")]
    DuplicateScreen(String),

    #[error("Screen '{screen_id}' has an image reference '{image}' that cannot be resolved: {message}")]
    InvalidImageReference {
        screen_id: String,
        image: String,
        message: String,
    },

    #[error("Unresolved start screen: '{0}' is not present in screens")]
    UnresolvedStartScreen(String),

    #[error(
        "Transition {index} is missing a non-empty '{field}'; each transition requires from_screen, to_screen, and trigger"
    )]
    MissingTransitionField { index: usize, field: &'static str },

    #[error("Unresolved screen reference in transition {index}: unknown {field} '{screen_id}'")]
    UnresolvedScreenReference {
        index: usize,
        field: &'static str,
        screen_id: String,
    },
}

/// An engine operation was invoked in a state that does not support it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Cannot {operation}: no flow map has been loaded")]
    NotLoaded { operation: &'static str },

    #[error("Current screen '{0}' is not part of the loaded flow map")]
    UnindexedScreen(String),
}

/// Errors that can occur when asking the engine to move to another screen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error("Cannot navigate to unknown screen '{0}'")]
    UnknownScreen(String),

    #[error("Screen '{screen_id}' has no outgoing transition at position {index}")]
    NoSuchTransition { screen_id: String, index: usize },
}

/// Errors surfaced by the load pipeline, from retrieval through indexing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Invalid flow map location '{location}': {message}")]
    InvalidLocation { location: String, message: String },

    #[error("Could not load flow map from '{location}': {message}")]
    Retrieval { location: String, message: String },

    #[error("Failed to parse flow map JSON: {0}")]
    Parse(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
