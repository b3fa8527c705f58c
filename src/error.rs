//! Error handling for Hearth Morph
//!
//! A single error type covers mesh validation, correspondence building,
//! per-step precondition checks and configuration loading.
//! Out-of-range control values are not errors; they are logged.

/// Main error type for Hearth Morph
#[derive(Debug, thiserror::Error)]
pub enum MorphError {
    // Input Errors
    #[error("Empty vertex set: {role} has no vertices")]
    EmptyVertexSet { role: String },

    #[error("Mesh '{mesh}' has no vertices")]
    EmptyMesh { mesh: String },

    #[error("Mesh '{mesh}': index {index} at position {position} >= vertex count {vertex_count}")]
    IndexOutOfRange {
        mesh: String,
        position: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("Mesh '{mesh}': index count {count} is not a multiple of 3")]
    MalformedIndices { mesh: String, count: usize },

    #[error("Mesh '{mesh}': uv channel {channel} has {found} entries, expected {expected}")]
    UvChannelMismatch {
        mesh: String,
        channel: usize,
        found: usize,
        expected: usize,
    },

    #[error("Mesh '{mesh}': {count} uv channels exceeds maximum of {max}")]
    TooManyUvChannels { mesh: String, count: usize, max: usize },

    #[error("Mesh '{mesh}': vertex {index} is not finite ({position:?})")]
    NonFiniteVertex {
        mesh: String,
        index: usize,
        position: [f32; 3],
    },

    // State Errors
    #[error("Precondition violated: {0}")]
    Precondition(String),

    // Configuration Errors
    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("IO error for {path}: {error}")]
    Io { path: String, error: String },
}

impl MorphError {
    /// True for every error raised while validating source data
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            MorphError::EmptyVertexSet { .. }
                | MorphError::EmptyMesh { .. }
                | MorphError::IndexOutOfRange { .. }
                | MorphError::MalformedIndices { .. }
                | MorphError::UvChannelMismatch { .. }
                | MorphError::TooManyUvChannels { .. }
                | MorphError::NonFiniteVertex { .. }
        )
    }
}

/// Type alias for Results in Hearth Morph
pub type MorphResult<T> = Result<T, MorphError>;

impl From<toml::de::Error> for MorphError {
    fn from(error: toml::de::Error) -> Self {
        MorphError::ConfigParse(error.to_string())
    }
}

/// Convert Option to Result with context
pub trait OptionExt<T> {
    fn ok_or_morph<F>(self, f: F) -> MorphResult<T>
    where
        F: FnOnce() -> MorphError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_morph<F>(self, f: F) -> MorphResult<T>
    where
        F: FnOnce() -> MorphError,
    {
        self.ok_or_else(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MorphError::IndexOutOfRange {
            mesh: "cube".to_string(),
            position: 4,
            index: 10,
            vertex_count: 8,
        };
        assert_eq!(
            err.to_string(),
            "Mesh 'cube': index 10 at position 4 >= vertex count 8"
        );
    }

    #[test]
    fn test_invalid_input_classification() {
        assert!(MorphError::EmptyMesh {
            mesh: "a".to_string()
        }
        .is_invalid_input());
        assert!(MorphError::EmptyVertexSet {
            role: "target".to_string()
        }
        .is_invalid_input());
        assert!(!MorphError::Precondition("tables".to_string()).is_invalid_input());
        assert!(!MorphError::ConfigParse("bad".to_string()).is_invalid_input());
    }

    #[test]
    fn test_option_ext() {
        let opt: Option<i32> = None;
        let result = opt.ok_or_morph(|| MorphError::Precondition("test".to_string()));
        assert!(matches!(result, Err(MorphError::Precondition(_))));
    }
}
