//! Error types for graph construction and rendering configuration.

use core::fmt;

/// Errors returned by the fallible graph entry points.
///
/// Insertion through the `usize` API cannot fail; these variants cover signed
/// input and rendering configuration only.
#[derive(Debug)]
pub enum GraphError {
    /// An edge endpoint was negative.
    InvalidVertex {
        /// The rejected endpoint.
        vertex: i64,
    },
    /// Rendering options could not be parsed.
    Config(serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, GraphError>;

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidVertex { vertex } => {
                write!(f, "invalid vertex index {vertex}: endpoints must be non-negative")
            }
            GraphError::Config(err) => write!(f, "invalid render options: {err}"),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraphError::InvalidVertex { .. } => None,
            GraphError::Config(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_vertex_message_names_the_index() {
        let err = GraphError::InvalidVertex { vertex: -3 };
        assert_eq!(
            err.to_string(),
            "invalid vertex index -3: endpoints must be non-negative"
        );
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn config_error_keeps_its_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = GraphError::from(json_err);
        assert!(err.to_string().starts_with("invalid render options:"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
