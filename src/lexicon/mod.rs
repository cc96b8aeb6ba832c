pub mod loader;
pub mod table;
pub mod word_list;

pub use loader::{load, LexiconSource};
pub use table::{HourCase, Lexicon, HALF, QUARTER};
pub use word_list::{Domain, WordList};
