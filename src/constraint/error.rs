use thiserror::Error;

/// Why a single constraint expression could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("empty build constraint")]
    EmptyExpression,
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unexpected token {token:?} at offset {offset}")]
    UnexpectedToken { token: String, offset: usize },
    #[error("missing close paren for paren at offset {offset}")]
    MissingCloseParen { offset: usize },
    #[error("double negation not allowed")]
    DoubleNegation,
    #[error("invalid build tag {0:?}")]
    InvalidTag(String),
    #[error("build expression too complex")]
    TooComplex,
}

/// A malformed constraint found while selecting files.
///
/// Carries the file and the raw constraint line so the caller can point at
/// the offending source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{file}: invalid build constraint {expression:?}: {source}")]
pub struct ParseError {
    pub file: String,
    pub expression: String,
    #[source]
    pub source: SyntaxError,
}
