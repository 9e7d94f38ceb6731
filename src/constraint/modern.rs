use crate::constraint::error::SyntaxError;
use crate::constraint::expr::Expr;

/// Upper bound on tokens in one `//go:build` expression.
const MAX_TOKENS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind<'a> {
    LParen,
    RParen,
    Not,
    And,
    Or,
    Tag(&'a str),
}

#[derive(Debug, Clone)]
struct Token<'a> {
    kind: TokenKind<'a>,
    offset: usize,
}

impl Token<'_> {
    fn text(&self) -> &str {
        match self.kind {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Not => "!",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Tag(tag) => tag,
        }
    }
}

fn tokenize(text: &str) -> Result<Vec<Token<'_>>, SyntaxError> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let c = bytes[pos];
        if c.is_ascii_whitespace() {
            pos += 1;
            continue;
        }
        let offset = pos;
        let (kind, len) = match c {
            b'(' => (TokenKind::LParen, 1),
            b')' => (TokenKind::RParen, 1),
            b'!' => (TokenKind::Not, 1),
            b'&' if bytes.get(pos + 1) == Some(&b'&') => (TokenKind::And, 2),
            b'|' if bytes.get(pos + 1) == Some(&b'|') => (TokenKind::Or, 2),
            _ => {
                let len = text[pos..]
                    .find(|ch: char| !(ch.is_alphanumeric() || ch == '_' || ch == '.'))
                    .unwrap_or(text.len() - pos);
                if len == 0 {
                    // A lone `&` or `|`, or a character no tag may contain.
                    let ch = text[pos..].chars().next().unwrap_or_default();
                    return Err(SyntaxError::UnexpectedToken {
                        token: ch.to_string(),
                        offset,
                    });
                }
                (TokenKind::Tag(&text[pos..pos + len]), len)
            }
        };
        pos += len;
        tokens.push(Token { kind, offset });
        if tokens.len() > MAX_TOKENS {
            return Err(SyntaxError::TooComplex);
        }
    }

    Ok(tokens)
}

/// Parse the body of a `//go:build` line.
///
/// `||` binds loosest, then `&&`, then unary `!`; parentheses group. Both
/// binary operators are left-associative.
pub fn parse_go_build(text: &str) -> Result<Expr, SyntaxError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(SyntaxError::EmptyExpression);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.or()?;
    if let Some(tok) = parser.peek() {
        return Err(SyntaxError::UnexpectedToken {
            token: tok.text().to_string(),
            offset: tok.offset,
        });
    }
    Ok(expr)
}

struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn eat(&mut self, kind: &TokenKind<'_>) -> bool {
        match self.peek() {
            Some(tok) if &tok.kind == kind => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn or(&mut self) -> Result<Expr, SyntaxError> {
        let mut operands = vec![self.and()?];
        while self.eat(&TokenKind::Or) {
            operands.push(self.and()?);
        }
        Ok(if operands.len() == 1 {
            operands.remove(0)
        } else {
            Expr::or(operands)
        })
    }

    fn and(&mut self) -> Result<Expr, SyntaxError> {
        let mut operands = vec![self.not()?];
        while self.eat(&TokenKind::And) {
            operands.push(self.not()?);
        }
        Ok(if operands.len() == 1 {
            operands.remove(0)
        } else {
            Expr::and(operands)
        })
    }

    fn not(&mut self) -> Result<Expr, SyntaxError> {
        if !self.eat(&TokenKind::Not) {
            return self.atom();
        }
        if matches!(self.peek(), Some(Token { kind: TokenKind::Not, .. })) {
            return Err(SyntaxError::DoubleNegation);
        }
        Ok(Expr::not(self.atom()?))
    }

    fn atom(&mut self) -> Result<Expr, SyntaxError> {
        let tok = self.peek().cloned().ok_or(SyntaxError::UnexpectedEnd)?;
        self.pos += 1;
        match tok.kind {
            TokenKind::Tag(tag) => Ok(Expr::atom(tag)),
            TokenKind::LParen => {
                let inner = self.or()?;
                if !self.eat(&TokenKind::RParen) {
                    return Err(SyntaxError::MissingCloseParen { offset: tok.offset });
                }
                Ok(inner)
            }
            _ => Err(SyntaxError::UnexpectedToken {
                token: tok.text().to_string(),
                offset: tok.offset,
            }),
        }
    }
}
