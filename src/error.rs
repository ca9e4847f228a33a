//! Error types for qcd-view
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! Variants are grouped by where they surface: descriptor configuration,
//! tree lookup, value application, scripts and network transport.

use snafu::Snafu;

/// Main error type for the view runtime
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// A required option is absent from a component descriptor
    #[snafu(display("Component {path}: missing required option `{key}`"))]
    MissingOption { path: String, key: String },

    /// An option is present but has the wrong type or range
    #[snafu(display("Component {path}: invalid option `{key}`: {message}"))]
    InvalidOption {
        path: String,
        key: String,
        message: String,
    },

    /// The descriptor itself could not be decoded
    #[snafu(display("Component {path}: malformed descriptor: {source}"))]
    MalformedDescriptor {
        path: String,
        source: serde_json::Error,
    },

    /// No factory is registered for the declared component type
    #[snafu(display("Component {path}: unknown component type `{kind}`"))]
    UnknownComponentType { path: String, kind: String },

    /// Two different components claim the same reference name
    #[snafu(display(
        "Component {path}: reference name `{name}` is already registered by {existing}"
    ))]
    DuplicateReference {
        name: String,
        existing: String,
        path: String,
    },

    /// A value or state payload names a child the container does not hold
    #[snafu(display("Component {path}: no child named `{key}`"))]
    ChildNotFound { path: String, key: String },

    /// No component is addressable by the given path
    #[snafu(display("No component at path {path}"))]
    ComponentNotFound { path: String },

    /// A container operation was requested on a leaf component
    #[snafu(display("Component {path} is not a container"))]
    NotAContainer { path: String },

    /// A value or state payload does not match the widget's shape
    #[snafu(display("Component {path}: invalid value: {message}"))]
    InvalidValue { path: String, message: String },

    /// A scripted action failed inside the action evaluator
    #[snafu(display("Script error in {path}: {message}"))]
    Script { path: String, message: String },

    /// Transport failure (script fetch, password reset submission)
    #[snafu(display("Network error for {url}: {message}"))]
    Network { url: String, message: String },

    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl Error {
    /// Malformed or missing descriptor data, detected at construction
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::MissingOption { .. }
                | Error::InvalidOption { .. }
                | Error::MalformedDescriptor { .. }
                | Error::UnknownComponentType { .. }
                | Error::DuplicateReference { .. }
        )
    }

    /// A reference to a component or child that does not exist
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Error::ChildNotFound { .. } | Error::ComponentNotFound { .. } | Error::NotAContainer { .. }
        )
    }

    /// Transport failure
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
