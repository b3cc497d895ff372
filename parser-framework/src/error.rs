use common_framework::Position;

/// Error returned by the [`parse_complete`](crate::parse_complete) entry point.
///
/// Unlike [`ParseFailure`](crate::ParseFailure) it owns its data, so it can be
/// returned after the input text is gone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The grammar did not match.
    #[error("parse failed at {position}: {message}")]
    Failed { message: String, position: Position },

    /// The grammar matched a prefix but input was left over.
    #[error("unexpected trailing input at {position}: {remaining:?}")]
    TrailingInput { remaining: String, position: Position },
}

impl ParseError {
    /// Returns the position the error refers to.
    pub fn position(&self) -> Position {
        match self {
            ParseError::Failed { position, .. } | ParseError::TrailingInput { position, .. } => {
                *position
            }
        }
    }
}
