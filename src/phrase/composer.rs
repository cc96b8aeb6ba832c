use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::types::time_of_day::TimeOfDay;
use super::rules::{compose, Form, Register};

/// Turns clock times into Polish phrases using a borrowed [`Lexicon`].
///
/// Holds no state of its own, so it is `Copy` and can be handed to as many
/// threads as share the lexicon.
#[derive(Debug, Clone, Copy)]
pub struct PhraseComposer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> PhraseComposer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        PhraseComposer { lexicon }
    }

    pub fn compose(&self, register: Register, form: Form, hour: usize, minute: usize) -> Result<String> {
        compose(self.lexicon, register, form, hour, minute)
    }

    /// "jest dwudziesta pierwsza", "jest siódma pietnaście"
    pub fn official_declarative(&self, hour: usize, minute: usize) -> Result<String> {
        self.compose(Register::Official, Form::Declarative, hour, minute)
    }

    /// "o trzynastej", "o trzynastej czterdzieści pięć"
    pub fn official_temporal(&self, hour: usize, minute: usize) -> Result<String> {
        self.compose(Register::Official, Form::Temporal, hour, minute)
    }

    /// "jest wpół do dziewiątej", "jest za pięć szósta"
    pub fn unofficial_declarative(&self, hour: usize, minute: usize) -> Result<String> {
        self.compose(Register::Unofficial, Form::Declarative, hour, minute)
    }

    /// "kwadrans po pierwszej", "za kwadrans druga"
    pub fn unofficial_temporal(&self, hour: usize, minute: usize) -> Result<String> {
        self.compose(Register::Unofficial, Form::Temporal, hour, minute)
    }

    pub fn phrase_for(&self, time: TimeOfDay, register: Register, form: Form) -> Result<String> {
        self.compose(register, form, time.hour() as usize, time.minute() as usize)
    }
}
