//! Kinds of wellness practice a lead can belong to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeType {
    FunctionalMedicine,
    Naturopathic,
    Chiropractic,
    PhysicalTherapy,
    YogaStudio,
    PilatesStudio,
    HrtClinic,
    IvTherapy,
    Other,
}

impl PracticeType {
    /// Every practice type, in form display order.
    pub fn all() -> &'static [PracticeType] {
        &[
            PracticeType::FunctionalMedicine,
            PracticeType::Naturopathic,
            PracticeType::Chiropractic,
            PracticeType::PhysicalTherapy,
            PracticeType::YogaStudio,
            PracticeType::PilatesStudio,
            PracticeType::HrtClinic,
            PracticeType::IvTherapy,
            PracticeType::Other,
        ]
    }

    /// Wire identifier, e.g. `yoga-studio`.
    pub fn id(&self) -> &'static str {
        match self {
            PracticeType::FunctionalMedicine => "functional-medicine",
            PracticeType::Naturopathic => "naturopathic",
            PracticeType::Chiropractic => "chiropractic",
            PracticeType::PhysicalTherapy => "physical-therapy",
            PracticeType::YogaStudio => "yoga-studio",
            PracticeType::PilatesStudio => "pilates-studio",
            PracticeType::HrtClinic => "hrt-clinic",
            PracticeType::IvTherapy => "iv-therapy",
            PracticeType::Other => "other",
        }
    }

    /// Human-readable label for select boxes.
    pub fn label(&self) -> &'static str {
        match self {
            PracticeType::FunctionalMedicine => "Functional Medicine",
            PracticeType::Naturopathic => "Naturopathic Doctor",
            PracticeType::Chiropractic => "Chiropractic",
            PracticeType::PhysicalTherapy => "Physical Therapy",
            PracticeType::YogaStudio => "Yoga Studio",
            PracticeType::PilatesStudio => "Pilates Studio",
            PracticeType::HrtClinic => "HRT Clinic",
            PracticeType::IvTherapy => "IV Therapy",
            PracticeType::Other => "Other Wellness Business",
        }
    }
}

impl fmt::Display for PracticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PracticeType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PracticeType::all()
            .iter()
            .copied()
            .find(|pt| pt.id() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "practiceType",
                    format!("unknown practice type '{}'", s),
                )
            })
    }
}
