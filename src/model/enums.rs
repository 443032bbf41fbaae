//! Closed enumerations spelled out in Ariane files.
//!
//! Each enum parses case-insensitively and maps back to exactly one spelling.
//! The model stores the original strings and exposes these as typed views.

use std::fmt;
use std::str::FromStr;

use super::ModelError;

/// Unit system of a survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    Metric,
    Imperial,
}

impl UnitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "m",
            Self::Imperial => "ft",
        }
    }
}

impl FromStr for UnitType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "M" | "METRIC" => Ok(Self::Metric),
            "FT" | "IMPERIAL" => Ok(Self::Imperial),
            _ => Err(ModelError::UnknownVariant {
                kind: "unit",
                value: s.to_string(),
            }),
        }
    }
}

/// Projection used for a shot's profile view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileType {
    Vertical,
}

impl ProfileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vertical => "VERTICAL",
        }
    }
}

impl FromStr for ProfileType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "VERTICAL" => Ok(Self::Vertical),
            _ => Err(ModelError::UnknownVariant {
                kind: "profile type",
                value: s.to_string(),
            }),
        }
    }
}

/// Role of a shot in the survey graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotType {
    Real,
    Virtual,
    Start,
    Closure,
}

impl ShotType {
    pub const ALL: [Self; 4] = [Self::Real, Self::Virtual, Self::Start, Self::Closure];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Real => "REAL",
            Self::Virtual => "VIRTUAL",
            Self::Start => "START",
            Self::Closure => "CLOSURE",
        }
    }
}

impl FromStr for ShotType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "REAL" => Ok(Self::Real),
            "VIRTUAL" => Ok(Self::Virtual),
            "START" => Ok(Self::Start),
            "CLOSURE" => Ok(Self::Closure),
            _ => Err(ModelError::UnknownVariant {
                kind: "shot type",
                value: s.to_string(),
            }),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(UnitType, ProfileType, ShotType);
