use std::path::PathBuf;

/// Errors that can occur while generating the resource module.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// I/O error reading a resource file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A skin file could not be parsed as structured style data.
    #[error("Skin parse error for {path}: {message}")]
    Json { path: PathBuf, message: String },

    /// A provider file-name mask is not a valid regular expression.
    #[error("Invalid file name mask '{pattern}': {source}")]
    InvalidMask {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Two keys of one category map to the same emitted identifier.
    #[error("Identifier collision: {identifier} is produced by both '{key_a}' and '{key_b}'")]
    IdentifierCollision {
        identifier: String,
        key_a: String,
        key_b: String,
    },

    /// Two providers were configured with the same category label.
    #[error("Category '{0}' is produced by more than one provider")]
    DuplicateCategory(String),

    /// The configuration file could not be read or parsed.
    #[error("Config error for {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// The effective configuration could not be rendered as TOML.
    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// The generated module could not be written to its destination.
    #[error("Failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
