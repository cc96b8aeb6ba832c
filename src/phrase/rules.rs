use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{GodzinaError, Result};
use crate::lexicon::{HourCase, Lexicon, HALF, QUARTER};
use crate::types::time_of_day::{next_hour_index, HOURS_PER_DAY, MINUTES_PER_HOUR};

/// Official is the 24-hour administrative way of telling time, unofficial the
/// 12-hour colloquial one built around quarter and half landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Register {
    Official,
    Unofficial,
}

/// Declarative says what time it is ("jest ..."), temporal says when
/// something happens ("o ...", "za ...").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Declarative,
    Temporal,
}

impl Register {
    pub const ALL: [Register; 2] = [Register::Official, Register::Unofficial];

    /// Label used in the text report.
    pub fn label(&self) -> &'static str {
        match self {
            Register::Official => "oficjalnie",
            Register::Unofficial => "nieoficjalnie",
        }
    }
}

impl Form {
    pub const ALL: [Form; 2] = [Form::Declarative, Form::Temporal];

    fn hour_case(&self) -> HourCase {
        match self {
            Form::Declarative => HourCase::Nominative,
            Form::Temporal => HourCase::Locative,
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a minute falls relative to the quarter-hour landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinuteBucket {
    OnTheHour,
    QuarterPast,
    HalfTo,
    QuarterTo,
    /// 1-14 and 16-29, counted after the current hour.
    Past(usize),
    /// 31-44 and 46-59, stored as minutes left until the next hour.
    To(usize),
}

impl MinuteBucket {
    pub fn classify(minute: usize) -> Self {
        match minute {
            0 => MinuteBucket::OnTheHour,
            15 => MinuteBucket::QuarterPast,
            30 => MinuteBucket::HalfTo,
            45 => MinuteBucket::QuarterTo,
            m if m < 30 => MinuteBucket::Past(m),
            m => MinuteBucket::To(MINUTES_PER_HOUR as usize - m),
        }
    }

    /// Temporal phrases take a leading "o" only when they name an hour
    /// directly: "o pierwszej", "o wpół do drugiej".
    fn takes_temporal_particle(&self) -> bool {
        matches!(self, MinuteBucket::OnTheHour | MinuteBucket::HalfTo)
    }
}

/// Builds the phrase for `(register, form)` at `hour:minute`.
///
/// Hour and minute are expected to be in range already; anything outside
/// 0-23 / 0-59 is reported as [`GodzinaError::OutOfRange`].
pub fn compose(
    lexicon: &Lexicon,
    register: Register,
    form: Form,
    hour: usize,
    minute: usize,
) -> Result<String> {
    check_range("hour", hour, HOURS_PER_DAY as usize)?;
    check_range("minute", minute, MINUTES_PER_HOUR as usize)?;

    let phrase = match register {
        Register::Official => official(lexicon, form, hour, minute)?,
        Register::Unofficial => unofficial(lexicon, form, hour, minute)?,
    };
    trace!(?register, ?form, hour, minute, %phrase, "composed phrase");
    Ok(phrase)
}

fn check_range(table: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(GodzinaError::OutOfRange { table, index, len })
    }
}

fn official(lexicon: &Lexicon, form: Form, hour: usize, minute: usize) -> Result<String> {
    let prefix = match form {
        Form::Declarative => "jest",
        Form::Temporal => "o",
    };
    let hour_word = lexicon.official_hour(hour, form.hour_case())?;
    if minute == 0 {
        Ok(format!("{} {}", prefix, hour_word))
    } else {
        Ok(format!("{} {} {}", prefix, hour_word, lexicon.minute_word(minute)?))
    }
}

fn unofficial(lexicon: &Lexicon, form: Form, hour: usize, minute: usize) -> Result<String> {
    let next_hour = next_hour_index(hour);
    let bucket = MinuteBucket::classify(minute);

    let core = match bucket {
        MinuteBucket::OnTheHour => lexicon.unofficial_hour(hour, form.hour_case())?.to_string(),
        MinuteBucket::QuarterPast => {
            format!("{} po {}", QUARTER, lexicon.unofficial_hour_locative(hour)?)
        }
        MinuteBucket::HalfTo => {
            format!("{} do {}", HALF, lexicon.unofficial_hour_locative(next_hour)?)
        }
        MinuteBucket::QuarterTo => {
            format!("za {} {}", QUARTER, lexicon.unofficial_hour_nominative(next_hour)?)
        }
        MinuteBucket::Past(m) => format!(
            "{} po {}",
            lexicon.minute_word(m)?,
            lexicon.unofficial_hour_locative(hour)?
        ),
        MinuteBucket::To(m) => format!(
            "za {} {}",
            lexicon.minute_word(m)?,
            lexicon.unofficial_hour_nominative(next_hour)?
        ),
    };

    let phrase = match form {
        Form::Declarative => format!("jest {}", core),
        Form::Temporal if bucket.takes_temporal_particle() => format!("o {}", core),
        Form::Temporal => core,
    };
    Ok(phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_follow_quarter_landmarks() {
        assert_eq!(MinuteBucket::classify(0), MinuteBucket::OnTheHour);
        assert_eq!(MinuteBucket::classify(1), MinuteBucket::Past(1));
        assert_eq!(MinuteBucket::classify(14), MinuteBucket::Past(14));
        assert_eq!(MinuteBucket::classify(15), MinuteBucket::QuarterPast);
        assert_eq!(MinuteBucket::classify(29), MinuteBucket::Past(29));
        assert_eq!(MinuteBucket::classify(30), MinuteBucket::HalfTo);
        assert_eq!(MinuteBucket::classify(31), MinuteBucket::To(29));
        assert_eq!(MinuteBucket::classify(45), MinuteBucket::QuarterTo);
        assert_eq!(MinuteBucket::classify(59), MinuteBucket::To(1));
    }

    #[test]
    fn out_of_range_input_is_reported_not_wrapped() {
        let lexicon = crate::lexicon::loader::load_builtin().unwrap();
        for register in Register::ALL {
            for form in Form::ALL {
                assert!(matches!(
                    compose(&lexicon, register, form, 24, 0),
                    Err(GodzinaError::OutOfRange { table: "hour", index: 24, len: 24 })
                ));
                assert!(matches!(
                    compose(&lexicon, register, form, 10, 75),
                    Err(GodzinaError::OutOfRange { table: "minute", index: 75, len: 60 })
                ));
            }
        }
    }
}
