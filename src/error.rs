use crate::config::ConfigError;
use crate::formula::TokenKind;
use crate::suggest::SuggestError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Suggest(#[from] SuggestError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("empty token at position {0}")]
    EmptyToken(usize),

    /// A token that would break the value/operand alternation
    #[error("{kind:?} `{text}` cannot follow the previous token (position {position})")]
    Rejected {
        position: usize,
        text: String,
        kind: TokenKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message() {
        let err = AppError::Rejected {
            position: 2,
            text: "*".to_string(),
            kind: TokenKind::Operand,
        };
        assert_eq!(
            err.to_string(),
            "Operand `*` cannot follow the previous token (position 2)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let err: AppError = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, AppError::Io(_)));
    }
}
