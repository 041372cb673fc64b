use std::{fmt, ops::RangeInclusive};

use serde::{Deserialize, Serialize};

use crate::{ConfigError, InvalidCardValueError};

/// Closed range of card values a player may place.
///
/// Cards are never exhausted: every value in the range is always available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRange {
    min: u8,
    max: u8,
}

impl Default for CardRange {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl CardRange {
    /// The standard deck: values 1 through 8.
    pub const STANDARD: Self = Self { min: 1, max: 8 };

    pub fn new(min: u8, max: u8) -> Result<Self, ConfigError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub(crate) fn validate(self) -> Result<(), ConfigError> {
        if self.min == 0 || self.min > self.max {
            return Err(ConfigError::EmptyCardRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn min(self) -> u8 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> u8 {
        self.max
    }

    #[must_use]
    pub const fn contains(self, value: u8) -> bool {
        self.min <= value && value <= self.max
    }

    /// Like [`Self::contains`], for a value that may be negative or oversized
    /// (e.g. the difference still needed to reach a target sum).
    #[must_use]
    pub fn contains_needed(self, needed: i32) -> bool {
        u8::try_from(needed).is_ok_and(|value| self.contains(value))
    }

    /// Iterates over every available value in ascending order.
    pub fn values(self) -> RangeInclusive<u8> {
        self.min..=self.max
    }

    /// Checks a value coming from outside the core (user input, agents).
    pub fn check(self, value: u8) -> Result<u8, InvalidCardValueError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(InvalidCardValueError { value, range: self })
        }
    }
}

impl fmt::Display for CardRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}
