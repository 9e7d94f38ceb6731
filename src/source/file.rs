use std::collections::BTreeMap;

/// File name to raw content, as handed over by the fetching layer.
///
/// Ordering is irrelevant to selection; `BTreeMap` keeps reports and
/// logs stable across runs.
pub type FileMap = BTreeMap<String, Vec<u8>>;

/// A named file with its raw bytes. Borrowed from the caller's map and never
/// modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFile<'a> {
    pub name: &'a str,
    pub content: &'a [u8],
}

impl<'a> SourceFile<'a> {
    pub fn new(name: &'a str, content: &'a [u8]) -> Self {
        Self { name, content }
    }

    /// Base name up to its first `.`, so `x_linux.pb.go` has stem `x_linux`.
    pub fn stem(&self) -> &'a str {
        let base = match self.name.rfind('/') {
            Some(i) => &self.name[i + 1..],
            None => self.name,
        };
        match base.find('.') {
            Some(i) => &base[..i],
            None => base,
        }
    }
}

impl<'a> From<(&'a String, &'a Vec<u8>)> for SourceFile<'a> {
    fn from((name, content): (&'a String, &'a Vec<u8>)) -> Self {
        SourceFile::new(name, content)
    }
}
