//! Signs and bodies.

use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SIGN_COUNT: usize = 12;
pub const SIGN_WIDTH: f64 = 30.0;

/// Zodiac sign in ordinal order, serialized as its 3-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sign {
    #[serde(rename = "Ari")]
    Aries,
    #[serde(rename = "Tau")]
    Taurus,
    #[serde(rename = "Gem")]
    Gemini,
    #[serde(rename = "Can")]
    Cancer,
    #[serde(rename = "Leo")]
    Leo,
    #[serde(rename = "Vir")]
    Virgo,
    #[serde(rename = "Lib")]
    Libra,
    #[serde(rename = "Sco")]
    Scorpio,
    #[serde(rename = "Sag")]
    Sagittarius,
    #[serde(rename = "Cap")]
    Capricorn,
    #[serde(rename = "Aqu")]
    Aquarius,
    #[serde(rename = "Pis")]
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; SIGN_COUNT] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Position in the zodiac, 0 (Aries) to 11 (Pisces).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> &'static str {
        match self {
            Sign::Aries => "Ari",
            Sign::Taurus => "Tau",
            Sign::Gemini => "Gem",
            Sign::Cancer => "Can",
            Sign::Leo => "Leo",
            Sign::Virgo => "Vir",
            Sign::Libra => "Lib",
            Sign::Scorpio => "Sco",
            Sign::Sagittarius => "Sag",
            Sign::Capricorn => "Cap",
            Sign::Aquarius => "Aqu",
            Sign::Pisces => "Pis",
        }
    }

    pub fn from_code(code: &str) -> Result<Sign, ChartError> {
        Self::ALL
            .iter()
            .copied()
            .find(|sign| sign.code() == code)
            .ok_or_else(|| ChartError::invalid(format!("unknown sign code: {:?}", code)))
    }

    /// Absolute longitude where the sign begins.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * SIGN_WIDTH
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Sign {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sign::from_code(s)
    }
}

/// Bodies and chart points, declared in canonical order.
///
/// The derived ordering is the enumeration order used by every pattern search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    #[serde(rename = "North_Node")]
    NorthNode,
    Ascendant,
    Midheaven,
}

impl Body {
    pub const ALL: [Body; 13] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::NorthNode,
        Body::Ascendant,
        Body::Midheaven,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::NorthNode => "North_Node",
            Body::Ascendant => "Ascendant",
            Body::Midheaven => "Midheaven",
        }
    }

    pub fn from_name(name: &str) -> Result<Body, ChartError> {
        Self::ALL
            .iter()
            .copied()
            .find(|body| body.name() == name)
            .ok_or_else(|| ChartError::invalid(format!("unknown body: {:?}", name)))
    }

    /// Sun, Moon, Mercury, Venus and Mars.
    pub fn is_personal(self) -> bool {
        matches!(
            self,
            Body::Sun | Body::Moon | Body::Mercury | Body::Venus | Body::Mars
        )
    }

    /// Uranus, Neptune and Pluto.
    pub fn is_outer(self) -> bool {
        matches!(self, Body::Uranus | Body::Neptune | Body::Pluto)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Body::from_name(s)
    }
}
