use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GodzinaError, Result};
use crate::phrase::{Form, PhraseComposer, Register};
use crate::types::time_of_day::TimeOfDay;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PhrasePair {
    pub declarative: String,
    pub temporal: String,
}

/// Every phrase for one time, in both registers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TimeReport {
    pub time: TimeOfDay,
    pub official: PhrasePair,
    pub unofficial: PhrasePair,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = GodzinaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(GodzinaError::Config(format!(
                "unknown output format '{}', expected 'text' or 'json'",
                other
            ))),
        }
    }
}

impl TimeReport {
    pub fn build(composer: &PhraseComposer<'_>, time: TimeOfDay) -> Result<Self> {
        let pair = |register: Register| -> Result<PhrasePair> {
            Ok(PhrasePair {
                declarative: composer.phrase_for(time, register, Form::Declarative)?,
                temporal: composer.phrase_for(time, register, Form::Temporal)?,
            })
        };
        Ok(TimeReport {
            time,
            official: pair(Register::Official)?,
            unofficial: pair(Register::Unofficial)?,
        })
    }

    pub fn pair(&self, register: Register) -> &PhrasePair {
        match register {
            Register::Official => &self.official,
            Register::Unofficial => &self.unofficial,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to<W: Write>(&self, format: OutputFormat, mut out: W) -> std::io::Result<()> {
        match format {
            OutputFormat::Text => write!(out, "{}", self),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, self)?;
                writeln!(out)
            }
        }
    }
}

impl fmt::Display for TimeReport {
    /// The echoed time followed by one line per register.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.time)?;
        for register in Register::ALL {
            let pair = self.pair(register);
            writeln!(f, "{}: {}, {}", register, pair.declarative, pair.temporal)?;
        }
        Ok(())
    }
}
