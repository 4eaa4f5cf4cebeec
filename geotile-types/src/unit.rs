use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Linear distance unit used for every radius, width, height and offset an
/// engine accepts, and for the distances it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Statute miles
    #[default]
    Miles,
    /// International nautical miles
    NauticalMiles,
    Kilometers,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Miles, Unit::NauticalMiles, Unit::Kilometers];

    /// Short symbol: `mi`, `nm` or `km`.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Unit::Miles => "mi",
            Unit::NauticalMiles => "nm",
            Unit::Kilometers => "km",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Error returned when parsing an unknown unit name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUnitError(String);

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown distance unit '{}', expected one of mi, nm, km",
            self.0
        )
    }
}

impl std::error::Error for ParseUnitError {}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mi" | "mile" | "miles" => Ok(Unit::Miles),
            "nm" | "nmi" | "nautical_miles" | "nautical-miles" => Ok(Unit::NauticalMiles),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Ok(Unit::Kilometers)
            }
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}
