use crate::error::Result;
use super::word_list::WordList;

/// "quarter", used for the :15 and :45 landmarks.
pub const QUARTER: &str = "kwadrans";
/// "half", used for the :30 landmark ("wpół do ...").
pub const HALF: &str = "wpół";

/// Grammatical case an hour word is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourCase {
    /// "jest ósma"
    Nominative,
    /// "o ósmej"
    Locative,
}

/// Read-only set of word lists the phrase rules draw from.
///
/// Built once by the loader and shared by reference afterwards; nothing
/// mutates it after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    official_hours_nominative: WordList,
    official_hours_locative: WordList,
    unofficial_hours_nominative: WordList,
    unofficial_hours_locative: WordList,
    minutes: WordList,
}

impl Lexicon {
    pub fn new(
        official_hours_nominative: WordList,
        official_hours_locative: WordList,
        unofficial_hours_nominative: WordList,
        unofficial_hours_locative: WordList,
        minutes: WordList,
    ) -> Self {
        Lexicon {
            official_hours_nominative,
            official_hours_locative,
            unofficial_hours_nominative,
            unofficial_hours_locative,
            minutes,
        }
    }

    pub fn official_hour_nominative(&self, hour: usize) -> Result<&str> {
        self.official_hours_nominative.get(hour)
    }

    pub fn official_hour_locative(&self, hour: usize) -> Result<&str> {
        self.official_hours_locative.get(hour)
    }

    pub fn unofficial_hour_nominative(&self, hour: usize) -> Result<&str> {
        self.unofficial_hours_nominative.get(hour)
    }

    pub fn unofficial_hour_locative(&self, hour: usize) -> Result<&str> {
        self.unofficial_hours_locative.get(hour)
    }

    pub fn minute_word(&self, minute: usize) -> Result<&str> {
        self.minutes.get(minute)
    }

    pub fn official_hour(&self, hour: usize, case: HourCase) -> Result<&str> {
        match case {
            HourCase::Nominative => self.official_hour_nominative(hour),
            HourCase::Locative => self.official_hour_locative(hour),
        }
    }

    pub fn unofficial_hour(&self, hour: usize, case: HourCase) -> Result<&str> {
        match case {
            HourCase::Nominative => self.unofficial_hour_nominative(hour),
            HourCase::Locative => self.unofficial_hour_locative(hour),
        }
    }

    pub(crate) fn word_lists(&self) -> [&WordList; 5] {
        [
            &self.official_hours_nominative,
            &self.official_hours_locative,
            &self.unofficial_hours_nominative,
            &self.unofficial_hours_locative,
            &self.minutes,
        ]
    }
}
