pub mod composer;
pub mod rules;

pub use composer::PhraseComposer;
pub use rules::{compose, Form, MinuteBucket, Register};
