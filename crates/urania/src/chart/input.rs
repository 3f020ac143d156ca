//! Decoded chart rows as delivered by the chart source.

use crate::aspects::{AspectKind, Orb};
use crate::error::ChartError;
use crate::houses::Cusp;
use crate::zodiac::{Body, Sign, SIGN_WIDTH};
use serde::{Deserialize, Serialize};

fn degree_with_minutes(degree: f64, minutes: f64) -> Result<f64, ChartError> {
    if !minutes.is_finite() || !(0.0..60.0).contains(&minutes) {
        return Err(ChartError::invalid(format!(
            "minutes must be in [0, 60), got {}",
            minutes
        )));
    }
    let total = degree + minutes / 60.0;
    if !total.is_finite() || !(0.0..=SIGN_WIDTH).contains(&total) {
        return Err(ChartError::invalid(format!(
            "degree within sign must be in [0, 30], got {}",
            total
        )));
    }
    Ok(total)
}

fn check_house(house: u8) -> Result<u8, ChartError> {
    if (1..=12).contains(&house) {
        Ok(house)
    } else {
        Err(ChartError::invalid(format!(
            "house must be in 1..=12, got {}",
            house
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuspRow {
    pub house: u8,
    pub sign: Sign,
    pub degree: f64,
    #[serde(default)]
    pub minutes: f64,
}

impl CuspRow {
    pub fn to_cusp(&self) -> Result<Cusp, ChartError> {
        Ok(Cusp::new(
            check_house(self.house)?,
            self.sign,
            degree_with_minutes(self.degree, self.minutes)?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRow {
    pub body: Body,
    pub sign: Sign,
    pub degree: f64,
    #[serde(default)]
    pub minutes: f64,
    #[serde(default)]
    pub house: Option<u8>,
    #[serde(default)]
    pub score: Option<f64>,
}

impl PlanetRow {
    /// Degree within sign with minutes folded in.
    pub fn degree_within_sign(&self) -> Result<f64, ChartError> {
        degree_with_minutes(self.degree, self.minutes)
    }

    pub fn reported_house(&self) -> Result<Option<u8>, ChartError> {
        self.house.map(check_house).transpose()
    }
}

/// One cell of the aspect grid, recorded in one direction only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRow {
    pub from: Body,
    pub to: Body,
    pub kind: AspectKind,
    pub orb: Orb,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    pub cusps: Vec<CuspRow>,
    pub planets: Vec<PlanetRow>,
    #[serde(default)]
    pub aspects: Vec<AspectRow>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl ChartInput {
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        serde_json::from_str(json).map_err(|e| ChartError::InvalidJson(e.to_string()))
    }

    pub fn cusp_list(&self) -> Result<Vec<Cusp>, ChartError> {
        self.cusps.iter().map(CuspRow::to_cusp).collect()
    }
}
