//! Whole-number percentages as entered on the calculator sliders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A whole-number percentage, capped at 100.
///
/// Range checks tighter than 0-100 (slider bounds) belong to the caller;
/// this type only guarantees the value is a valid percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Values above 100 are capped.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// 40% → 0.4
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
