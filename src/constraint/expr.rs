use std::fmt;

/// Resolves a single atomic tag to true or false.
pub trait TagMatcher {
    fn matches(&self, tag: &str) -> bool;
}

impl<F> TagMatcher for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, tag: &str) -> bool {
        self(tag)
    }
}

/// A parsed build constraint. Both grammars produce this tree, so
/// evaluation does not care which syntax a file used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Atom(String),
    Not(Box<Expr>),
    And(Vec<Expr>),
    Or(Vec<Expr>),
}

impl Expr {
    pub fn atom(tag: impl Into<String>) -> Self {
        Expr::Atom(tag.into())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(x: Expr) -> Self {
        Expr::Not(Box::new(x))
    }

    /// Conjunction. Nested `And` operands are flattened.
    pub fn and(operands: impl IntoIterator<Item = Expr>) -> Self {
        let mut flat = Vec::new();
        for x in operands {
            match x {
                Expr::And(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        Expr::And(flat)
    }

    /// Disjunction. Nested `Or` operands are flattened.
    pub fn or(operands: impl IntoIterator<Item = Expr>) -> Self {
        let mut flat = Vec::new();
        for x in operands {
            match x {
                Expr::Or(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        Expr::Or(flat)
    }

    /// Evaluate against `matcher`. Empty `And` is true, empty `Or` is false.
    pub fn eval<M: TagMatcher + ?Sized>(&self, matcher: &M) -> bool {
        match self {
            Expr::Atom(tag) => matcher.matches(tag),
            Expr::Not(x) => !x.eval(matcher),
            Expr::And(xs) => xs.iter().all(|x| x.eval(matcher)),
            Expr::Or(xs) => xs.iter().any(|x| x.eval(matcher)),
        }
    }

    /// All atoms in the tree, left to right, duplicates included.
    pub fn tags(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_tags(&mut out);
        out
    }

    fn collect_tags<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expr::Atom(tag) => out.push(tag),
            Expr::Not(x) => x.collect_tags(out),
            Expr::And(xs) | Expr::Or(xs) => xs.iter().for_each(|x| x.collect_tags(out)),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Or(xs) if xs.len() > 1 => 0,
            Expr::And(xs) if xs.len() > 1 => 1,
            _ => 2,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        if self.precedence() < min {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

/// Renders in `//go:build` syntax with the fewest parentheses needed.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Atom(tag) => f.write_str(tag),
            Expr::Not(x) => {
                f.write_str("!")?;
                // `!!x` is not valid syntax, so a nested negation keeps its parens.
                match x.as_ref() {
                    Expr::Not(_) => write!(f, "({x})"),
                    x => x.fmt_operand(f, 2),
                }
            }
            // Empty groups have no spelling in the grammar.
            Expr::And(xs) | Expr::Or(xs) if xs.is_empty() => f.write_str("()"),
            Expr::And(xs) => join(f, xs, " && ", 1),
            Expr::Or(xs) => join(f, xs, " || ", 0),
        }
    }
}

fn join(f: &mut fmt::Formatter<'_>, xs: &[Expr], sep: &str, level: u8) -> fmt::Result {
    for (i, x) in xs.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        // Operands of the same operator never need parens once flattened,
        // so anything binding looser than this level is wrapped.
        x.fmt_operand(f, level + 1)?;
    }
    Ok(())
}
