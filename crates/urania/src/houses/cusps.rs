use crate::error::ChartError;
use crate::zodiac::geometry::absolute_longitude;
use crate::zodiac::{Sign, SIGN_COUNT};
use serde::{Deserialize, Serialize};

/// Start of a house: sign plus degree within the sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cusp {
    pub house: u8,
    pub sign: Sign,
    pub degree: f64,
}

impl Cusp {
    pub fn new(house: u8, sign: Sign, degree: f64) -> Self {
        Self {
            house,
            sign,
            degree,
        }
    }

    pub fn longitude(&self) -> Result<f64, ChartError> {
        absolute_longitude(self.sign.index(), self.degree)
    }
}

/// The twelve cusps sorted by house number with their absolute longitudes.
#[derive(Debug, Clone, PartialEq)]
pub struct CuspRing {
    cusps: Vec<Cusp>,
    longitudes: Vec<f64>,
}

impl CuspRing {
    /// Build from cusps in any order. Exactly one cusp per house 1..=12.
    pub fn new(cusps: &[Cusp]) -> Result<Self, ChartError> {
        if cusps.len() != SIGN_COUNT {
            return Err(ChartError::invalid(format!(
                "expected 12 house cusps, got {}",
                cusps.len()
            )));
        }

        let mut sorted = cusps.to_vec();
        sorted.sort_by_key(|cusp| cusp.house);
        for (index, cusp) in sorted.iter().enumerate() {
            if cusp.house as usize != index + 1 {
                return Err(ChartError::invalid(format!(
                    "house cusps must be numbered 1..=12 exactly once, found house {} at position {}",
                    cusp.house,
                    index + 1
                )));
            }
        }

        let longitudes = sorted
            .iter()
            .map(Cusp::longitude)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            cusps: sorted,
            longitudes,
        })
    }

    pub fn cusps(&self) -> &[Cusp] {
        &self.cusps
    }

    pub fn cusp(&self, house: u8) -> &Cusp {
        &self.cusps[Self::slot(house)]
    }

    /// Absolute longitude of a house cusp.
    pub fn longitude(&self, house: u8) -> f64 {
        self.longitudes[Self::slot(house)]
    }

    /// `(start, end)` of a house with `end` lifted past 360 when the house
    /// crosses 0° Aries, so that `end >= start` always holds.
    pub fn span(&self, house: u8) -> (f64, f64) {
        let start = self.longitude(house);
        let mut end = self.longitude(next_house(house));
        if end < start {
            end += 360.0;
        }
        (start, end)
    }

    /// `(house, start, end)` for houses 1..=12 in order.
    pub fn spans(&self) -> impl Iterator<Item = (u8, f64, f64)> + '_ {
        (1..=SIGN_COUNT as u8).map(move |house| {
            let (start, end) = self.span(house);
            (house, start, end)
        })
    }

    fn slot(house: u8) -> usize {
        (house as usize + SIGN_COUNT - 1) % SIGN_COUNT
    }
}

/// House that follows `house`, wrapping 12 to 1.
pub fn next_house(house: u8) -> u8 {
    house % 12 + 1
}
