use crate::error::ChartError;
use crate::zodiac::geometry::normalize_degree_string;
use crate::zodiac::Body;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Major aspect kinds recorded in the aspect grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Square,
    Trine,
    Sextile,
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Whether an aspect is approaching exactness or moving away from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbDirection {
    #[serde(rename = "A")]
    Applying,
    #[serde(rename = "S")]
    Separating,
}

impl OrbDirection {
    pub fn code(self) -> &'static str {
        match self {
            OrbDirection::Applying => "A",
            OrbDirection::Separating => "S",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, ChartError> {
        match code {
            "A" => Ok(OrbDirection::Applying),
            "S" => Ok(OrbDirection::Separating),
            other => Err(ChartError::invalid(format!(
                "orb direction must be A or S, got {:?}",
                other
            ))),
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            OrbDirection::Applying => OrbDirection::Separating,
            OrbDirection::Separating => OrbDirection::Applying,
        }
    }
}

/// Orb as written in the aspect grid: `"<magnitude> <A|S>"`.
///
/// The magnitude text is kept verbatim so a mirrored aspect carries exactly
/// the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Orb {
    pub magnitude: String,
    pub direction: Option<OrbDirection>,
}

impl Orb {
    pub fn new(magnitude: impl Into<String>, direction: Option<OrbDirection>) -> Self {
        Self {
            magnitude: magnitude.into(),
            direction,
        }
    }

    /// Same magnitude, opposite direction.
    pub fn flipped(&self) -> Self {
        Self {
            magnitude: self.magnitude.clone(),
            direction: self.direction.map(OrbDirection::flipped),
        }
    }

    /// Magnitude in decimal degrees.
    pub fn degrees(&self) -> Result<f64, ChartError> {
        normalize_degree_string(&self.magnitude)
    }
}

impl FromStr for Orb {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let magnitude = parts
            .next()
            .ok_or_else(|| ChartError::invalid("orb text is empty"))?;
        let direction = parts.next().map(OrbDirection::from_code).transpose()?;
        if parts.next().is_some() {
            return Err(ChartError::invalid(format!("unexpected orb text: {:?}", s)));
        }
        Ok(Orb::new(magnitude, direction))
    }
}

impl TryFrom<String> for Orb {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Orb> for String {
    fn from(orb: Orb) -> Self {
        orb.to_string()
    }
}

impl fmt::Display for Orb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Some(direction) => write!(f, "{} {}", self.magnitude, direction.code()),
            None => f.write_str(&self.magnitude),
        }
    }
}

/// An aspect as seen from the body that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub to: Body,
    #[serde(rename = "type")]
    pub kind: AspectKind,
    pub orb: Orb,
}
