/// Convenience result type used across scenespace.
pub type SceneResult<T> = Result<T, SceneError>;

/// Top-level error taxonomy used by the public APIs.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// Invalid user-provided scene or animation data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The two interpolation inputs disagree on the kind of value at `path`.
    #[error("shape mismatch at {path}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Location of the offending value, e.g. `$.pts[1].v`.
        path: String,
        /// Kind required by the target (second) value.
        expected: String,
        /// Kind actually present in the source (first) value.
        found: String,
    },

    /// The target value has a key the source value lacks.
    #[error("missing key at {path}: {key}")]
    MissingKey {
        /// Location of the structure that lacks the key.
        path: String,
        /// Name of the missing key.
        key: String,
    },

    /// The source sequence is shorter than the target sequence.
    #[error("sequence length mismatch at {path}: expected {expected}, found {found}")]
    SequenceLength {
        /// Location of the sequence.
        path: String,
        /// Length of the target sequence.
        expected: usize,
        /// Length of the source sequence.
        found: usize,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneError {
    /// Build a [`SceneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SceneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`SceneError::ShapeMismatch`] value.
    pub fn shape_mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::ShapeMismatch {
            path: path.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Build a [`SceneError::MissingKey`] value.
    pub fn missing_key(path: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingKey {
            path: path.into(),
            key: key.into(),
        }
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

impl serde::ser::Error for SceneError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Self::Serde(msg.to_string())
    }
}

impl serde::de::Error for SceneError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Self::Serde(msg.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
