//! Finding constraint lines in a file's leading comment block.
//!
//! Only the header is inspected: everything up to the first line that holds
//! something other than blank space or comments. Nothing after that point is
//! ever a constraint.

const GO_BUILD: &[u8] = b"//go:build";
const PLUS_BUILD: &[u8] = b"+build";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// `// +build a,b c`
    Legacy,
    /// `//go:build a && b || c`
    Modern,
}

/// One constraint line as it appeared in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawConstraint {
    pub syntax: Syntax,
    /// The expression with the comment marker removed.
    pub expr: String,
    /// The whole trimmed line, marker included.
    pub line: String,
    /// 1-based line number within the file.
    pub line_number: usize,
}

impl RawConstraint {
    fn new(syntax: Syntax, expr: &[u8], line: &[u8], line_number: usize) -> Self {
        Self {
            syntax,
            expr: String::from_utf8_lossy(expr).into_owned(),
            line: String::from_utf8_lossy(line).into_owned(),
            line_number,
        }
    }
}

/// Extract every constraint line from the header of `content`, in file order.
///
/// `//go:build` lines are returned wherever they sit in the header.
/// `// +build` lines are returned only when a blank line separates them from
/// the first non-comment line; otherwise they are ordinary comment text.
pub fn extract(content: &[u8]) -> Vec<RawConstraint> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    // Byte offset just past the last blank line that still counts as part
    // of the header. `+build` lines must start before it.
    let mut end = 0;
    // Set once a line that does not start with `//` is seen. Blank lines
    // after that point no longer move `end`.
    let mut ended = false;
    let mut in_block = false;
    let mut offset = 0;
    let mut found = Vec::new();

    'lines: for (index, raw) in content.split_inclusive(|&b| b == b'\n').enumerate() {
        let start = offset;
        offset += raw.len();
        let line = trim(raw);

        if line.is_empty() && !ended {
            end = offset;
            continue;
        }
        if !line.starts_with(b"//") {
            ended = true;
        }

        if !in_block {
            if let Some(expr) = go_build_expr(line) {
                found.push((start, RawConstraint::new(Syntax::Modern, expr, line, index + 1)));
            } else if let Some(expr) = plus_build_expr(line) {
                found.push((start, RawConstraint::new(Syntax::Legacy, expr, line, index + 1)));
            }
        }

        let mut rest = line;
        while !rest.is_empty() {
            if in_block {
                match find(rest, b"*/") {
                    Some(i) => {
                        in_block = false;
                        rest = trim(&rest[i + 2..]);
                        continue;
                    }
                    None => continue 'lines,
                }
            }
            if rest.starts_with(b"//") {
                continue 'lines;
            }
            if let Some(after) = rest.strip_prefix(b"/*") {
                in_block = true;
                rest = trim(after);
                continue;
            }
            // Code.
            break 'lines;
        }
    }

    found
        .into_iter()
        .filter(|(start, raw)| raw.syntax == Syntax::Modern || *start < end)
        .map(|(_, raw)| raw)
        .collect()
}

/// Expression of a `//go:build` line, if `line` is one.
fn go_build_expr(line: &[u8]) -> Option<&[u8]> {
    let rest = line.strip_prefix(GO_BUILD)?;
    match rest.first() {
        None => Some(rest),
        Some(b) if b.is_ascii_whitespace() => Some(trim(rest)),
        Some(_) => None,
    }
}

/// Expression of a `// +build` line, if `line` is one.
fn plus_build_expr(line: &[u8]) -> Option<&[u8]> {
    let text = trim(line.strip_prefix(b"//")?);
    let rest = text.strip_prefix(PLUS_BUILD)?;
    match rest.first() {
        None => Some(rest),
        Some(b' ' | b'\t') => Some(trim(rest)),
        Some(_) => None,
    }
}

fn trim(mut b: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = b {
        if first.is_ascii_whitespace() {
            b = rest;
        } else {
            break;
        }
    }
    while let [rest @ .., last] = b {
        if last.is_ascii_whitespace() {
            b = rest;
        } else {
            break;
        }
    }
    b
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
