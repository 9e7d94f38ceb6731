//! Build constraints: finding them in a file header, parsing both
//! syntaxes into one expression tree, and evaluating that tree.

pub mod error;
pub mod eval;
pub mod expr;
pub mod extract;
pub mod legacy;
pub mod modern;

pub use error::{ParseError, SyntaxError};
pub use eval::{TagEvaluator, EXPERIMENT_PREFIX};
pub use expr::{Expr, TagMatcher};
pub use extract::{extract, RawConstraint, Syntax};
pub use legacy::parse_plus_build;
pub use modern::parse_go_build;

/// Parse an extracted constraint with the grammar its syntax calls for.
pub fn parse(raw: &RawConstraint) -> Result<Expr, SyntaxError> {
    match raw.syntax {
        Syntax::Legacy => parse_plus_build(&raw.expr),
        Syntax::Modern => parse_go_build(&raw.expr),
    }
}
