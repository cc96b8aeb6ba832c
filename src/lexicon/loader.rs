use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GodzinaError, Result};
use super::table::Lexicon;
use super::word_list::{Domain, WordList};

pub const OFFICIAL_HOURS_NOMINATIVE_FILE: &str = "official_hours_a.txt";
pub const OFFICIAL_HOURS_LOCATIVE_FILE: &str = "official_hours_ej.txt";
pub const UNOFFICIAL_HOURS_NOMINATIVE_FILE: &str = "unofficial_hours_a.txt";
pub const UNOFFICIAL_HOURS_LOCATIVE_FILE: &str = "unofficial_hours_ej.txt";
pub const MINUTES_FILE: &str = "minutes.txt";

/// Every resource in the order [`Lexicon::new`] takes them.
pub const RESOURCES: [(&str, Domain); 5] = [
    (OFFICIAL_HOURS_NOMINATIVE_FILE, Domain::HOURS),
    (OFFICIAL_HOURS_LOCATIVE_FILE, Domain::HOURS),
    (UNOFFICIAL_HOURS_NOMINATIVE_FILE, Domain::HOURS),
    (UNOFFICIAL_HOURS_LOCATIVE_FILE, Domain::HOURS),
    (MINUTES_FILE, Domain::MINUTES),
];

const BUILTIN: [&str; 5] = [
    include_str!("../../data/lexicon/official_hours_a.txt"),
    include_str!("../../data/lexicon/official_hours_ej.txt"),
    include_str!("../../data/lexicon/unofficial_hours_a.txt"),
    include_str!("../../data/lexicon/unofficial_hours_ej.txt"),
    include_str!("../../data/lexicon/minutes.txt"),
];

/// Where the word lists come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexiconSource {
    /// The lists compiled into the binary.
    #[default]
    Builtin,
    /// A directory holding the five list files.
    Directory(PathBuf),
}

impl LexiconSource {
    pub fn describe(&self) -> String {
        match self {
            LexiconSource::Builtin => "builtin".to_string(),
            LexiconSource::Directory(dir) => dir.display().to_string(),
        }
    }
}

/// Loads a complete lexicon, failing if any list is unreadable or incomplete.
pub fn load(source: &LexiconSource) -> Result<Lexicon> {
    let lexicon = match source {
        LexiconSource::Builtin => load_builtin()?,
        LexiconSource::Directory(dir) => load_from_dir(dir)?,
    };
    debug!(
        source = %source.describe(),
        entries = lexicon.word_lists().iter().map(|l| l.len()).sum::<usize>(),
        "lexicon loaded"
    );
    Ok(lexicon)
}

pub fn load_builtin() -> Result<Lexicon> {
    let mut lists = Vec::with_capacity(RESOURCES.len());
    for ((name, domain), content) in RESOURCES.iter().zip(BUILTIN.iter()) {
        lists.push(WordList::parse(*name, content, *domain)?);
    }
    assemble(lists)
}

pub fn load_from_dir(dir: &Path) -> Result<Lexicon> {
    let mut lists = Vec::with_capacity(RESOURCES.len());
    for (name, domain) in RESOURCES.iter() {
        let path = dir.join(name);
        let bytes = fs::read(&path).map_err(|source| GodzinaError::LexiconIo {
            path: path.clone(),
            source,
        })?;
        lists.push(WordList::parse_bytes(*name, &bytes, *domain)?);
    }
    assemble(lists)
}

fn assemble(lists: Vec<WordList>) -> Result<Lexicon> {
    let [official_a, official_ej, unofficial_a, unofficial_ej, minutes]: [WordList; 5] = lists
        .try_into()
        .map_err(|lists: Vec<WordList>| GodzinaError::LexiconTruncated {
            resource: "lexicon".to_string(),
            expected: RESOURCES.len(),
            found: lists.len(),
        })?;
    Ok(Lexicon::new(official_a, official_ej, unofficial_a, unofficial_ej, minutes))
}

/// Writes the builtin lists into `dir`, one file per list.
pub fn export_builtin(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| GodzinaError::LexiconIo {
        path: dir.to_path_buf(),
        source,
    })?;
    for ((name, _), content) in RESOURCES.iter().zip(BUILTIN.iter()) {
        let path = dir.join(name);
        fs::write(&path, content).map_err(|source| GodzinaError::LexiconIo { path, source })?;
    }
    Ok(())
}
