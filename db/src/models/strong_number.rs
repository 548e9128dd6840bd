use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde_derive::Serialize;

use crate::DbError;

/// The concordance a Strong's number belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Lexicon {
    Hebrew,
    Greek,
}

impl Lexicon {
    fn prefix(self) -> char {
        match self {
            Lexicon::Hebrew => 'H',
            Lexicon::Greek => 'G',
        }
    }
}

/// Highest number either concordance uses.
const MAX_NUMBER: u32 = 99_999;

/// A Strong's concordance identifier such as `H430` or `G26`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StrongNumber {
    pub lexicon: Lexicon,
    pub number: u32,
}

impl fmt::Display for StrongNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.lexicon.prefix(), self.number)
    }
}

impl FromStr for StrongNumber {
    type Err = DbError;

    /// Parses `H`/`G` followed by digits. The prefix is case-insensitive
    /// and leading zeros are ignored, so `h0430` reads as `H430`. The value
    /// must fall in `1..=99999`.
    fn from_str(s: &str) -> Result<StrongNumber, Self::Err> {
        lazy_static! {
            static ref STRONG_RE: Regex = Regex::new(r"^([HhGg])([0-9]+)$").unwrap();
        }

        let caps = STRONG_RE
            .captures(s.trim())
            .ok_or_else(|| invalid_number(s))?;
        match (caps.get(1), caps.get(2)) {
            (Some(prefix), Some(digits)) => {
                let lexicon = match prefix.as_str() {
                    "H" | "h" => Lexicon::Hebrew,
                    _ => Lexicon::Greek,
                };
                let number: u32 = digits.as_str().parse().map_err(|_| invalid_number(s))?;
                if number == 0 || number > MAX_NUMBER {
                    return Err(invalid_number(s));
                }
                Ok(StrongNumber { lexicon, number })
            }
            _ => Err(invalid_number(s)),
        }
    }
}

/// Create an invalid Strong's number error from the input.
fn invalid_number(s: &str) -> DbError {
    DbError::InvalidStrongNumber {
        number: s.to_string(),
    }
}
