use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Practice areas a visitor can pick on the contact form.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PracticeArea {
    Criminal,
    Business,
    Family,
    Protection,
    Cyber,
    IntellectualProperty,
    Other,
}

impl PracticeArea {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Criminal => "Criminal Law",
            Self::Business => "Business Law",
            Self::Family => "Family & Marriage Laws",
            Self::Protection => "Protection Laws",
            Self::Cyber => "Cyber Law",
            Self::IntellectualProperty => "Intellectual Property",
            Self::Other => "Other",
        }
    }
}
