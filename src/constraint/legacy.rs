use crate::constraint::error::SyntaxError;
use crate::constraint::expr::Expr;

/// Upper bound on `,` and space operators in one `+build` line.
const MAX_OPERATORS: usize = 100;

/// Parse the body of a `// +build` line.
///
/// Space-separated clauses are ORed; comma-separated atoms inside a clause
/// are ANDed; a single leading `!` negates an atom.
pub fn parse_plus_build(text: &str) -> Result<Expr, SyntaxError> {
    let mut operators = 0;
    let mut clauses = Vec::new();

    for clause in text.split_whitespace() {
        let mut atoms = Vec::new();
        for lit in clause.split(',') {
            atoms.push(parse_literal(lit)?);
        }
        operators += atoms.len() - 1;
        clauses.push(group_of(atoms, Expr::and));
    }

    if clauses.is_empty() {
        return Err(SyntaxError::EmptyExpression);
    }
    operators += clauses.len() - 1;
    if operators > MAX_OPERATORS {
        return Err(SyntaxError::TooComplex);
    }

    Ok(group_of(clauses, Expr::or))
}

fn parse_literal(lit: &str) -> Result<Expr, SyntaxError> {
    let (negated, tag) = match lit.strip_prefix('!') {
        Some(rest) if rest.starts_with('!') => return Err(SyntaxError::DoubleNegation),
        Some(rest) => (true, rest),
        None => (false, lit),
    };
    if !is_valid_tag(tag) {
        return Err(SyntaxError::InvalidTag(tag.to_string()));
    }
    let atom = Expr::atom(tag);
    Ok(if negated { Expr::not(atom) } else { atom })
}

/// A lone operand is returned as-is rather than wrapped in a one-element group.
fn group_of(mut xs: Vec<Expr>, group: fn(Vec<Expr>) -> Expr) -> Expr {
    if xs.len() == 1 {
        xs.remove(0)
    } else {
        group(xs)
    }
}

/// Tags are non-empty runs of letters, digits, `_` and `.`.
pub(crate) fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty() && tag.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '.')
}
