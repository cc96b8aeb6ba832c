use crate::error::{GodzinaError, Result};

/// One zero-indexed list of words, one entry per line of its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    name: &'static str,
    words: Vec<String>,
}

/// How a resource's entries are checked after reading.
#[derive(Debug, Clone, Copy)]
pub struct Domain {
    pub size: usize,
    /// Index 0 of the minute list is never looked up and may be blank.
    pub blank_first: bool,
}

impl Domain {
    pub const HOURS: Domain = Domain { size: 24, blank_first: false };
    pub const MINUTES: Domain = Domain { size: 60, blank_first: true };
}

impl WordList {
    /// Builds a list from newline-delimited text. Trailing whitespace on every
    /// line is dropped, as are blank lines past the end of the domain.
    pub fn parse(name: &'static str, content: &str, domain: Domain) -> Result<Self> {
        let mut words: Vec<String> = content
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect();

        while words.len() > domain.size && words.last().map_or(false, |w| w.is_empty()) {
            words.pop();
        }

        if words.len() < domain.size {
            return Err(GodzinaError::LexiconTruncated {
                resource: name.to_string(),
                expected: domain.size,
                found: words.len(),
            });
        }
        if words.len() > domain.size {
            return Err(GodzinaError::LexiconOverflow {
                resource: name.to_string(),
                expected: domain.size,
                found: words.len(),
            });
        }

        let first_checked = if domain.blank_first { 1 } else { 0 };
        if let Some(index) = (first_checked..words.len()).find(|&i| words[i].is_empty()) {
            return Err(GodzinaError::LexiconBlankEntry {
                resource: name.to_string(),
                index,
            });
        }

        Ok(WordList { name, words })
    }

    /// Same as [`WordList::parse`] but starting from raw bytes, so encoding
    /// problems surface as a lexicon error.
    pub fn parse_bytes(name: &'static str, bytes: &[u8], domain: Domain) -> Result<Self> {
        let content = std::str::from_utf8(bytes).map_err(|_| GodzinaError::LexiconEncoding {
            resource: name.to_string(),
        })?;
        Self::parse(name, content, domain)
    }

    pub fn get(&self, index: usize) -> Result<&str> {
        self.words
            .get(index)
            .map(String::as_str)
            .ok_or(GodzinaError::OutOfRange {
                table: self.name,
                index,
                len: self.words.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
