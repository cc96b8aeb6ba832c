//! Tells the time in Polish, in the official 24-hour register and the
//! colloquial 12-hour one, both as "it is ..." and "at ..." phrases.

pub mod config;
pub mod error;
pub mod lexicon;
pub mod logging;
pub mod phrase;
pub mod report;
pub mod types {
    pub mod time_of_day;
}
pub mod parsing {
    pub mod time_parser;
}

pub use error::{GodzinaError, Result};
pub use lexicon::{Lexicon, LexiconSource};
pub use phrase::{Form, PhraseComposer, Register};
pub use report::{OutputFormat, TimeReport};
pub use types::time_of_day::TimeOfDay;

/// Loads the lexicon from `source` and describes `input` (an `HH:MM` string).
/// The time is validated before any word list is read.
pub fn describe(input: &str, source: &LexiconSource) -> Result<TimeReport> {
    let time = parsing::time_parser::parse_time(input)?;
    let lexicon = lexicon::load(source)?;
    TimeReport::build(&PhraseComposer::new(&lexicon), time)
}
