//! Glyph-font codes used by chart tables.
//!
//! Chart pages render planets, signs and aspects with a symbol font, so the
//! raw table cells hold single letters. These tables map them back.

use crate::aspects::{AspectKind, Orb};
use crate::chart::input::{AspectRow, CuspRow, PlanetRow};
use crate::error::ChartError;
use crate::zodiac::{Body, Sign};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static::lazy_static! {
    static ref PLANET_GLYPHS: HashMap<&'static str, Body> = {
        let mut table = HashMap::new();
        table.insert("Q", Body::Sun);
        table.insert("W", Body::Moon);
        table.insert("E", Body::Mercury);
        table.insert("R", Body::Venus);
        table.insert("T", Body::Mars);
        table.insert("Y", Body::Jupiter);
        table.insert("U", Body::Saturn);
        table.insert("I", Body::Uranus);
        table.insert("O", Body::Neptune);
        table.insert("P", Body::Pluto);
        table.insert("\u{2039}", Body::NorthNode);
        // The same glyph after its UTF-8 bytes were decoded as Windows-1252.
        table.insert("\u{e2}\u{20ac}\u{b9}", Body::NorthNode);
        table.insert("Z", Body::Ascendant);
        table.insert("X", Body::Midheaven);
        table
    };

    static ref ASPECT_GLYPHS: HashMap<&'static str, AspectKind> = {
        let mut table = HashMap::new();
        table.insert("q", AspectKind::Conjunction);
        table.insert("w", AspectKind::Opposition);
        table.insert("r", AspectKind::Square);
        table.insert("e", AspectKind::Trine);
        table.insert("t", AspectKind::Sextile);
        table
    };

    static ref SIGN_GLYPHS: HashMap<&'static str, Sign> = {
        const CODES: [&str; 12] = ["a", "s", "d", "f", "g", "h", "j", "k", "l", "z", "x", "c"];
        CODES.iter().copied().zip(Sign::ALL).collect()
    };
}

pub fn planet_from_glyph(glyph: &str) -> Result<Body, ChartError> {
    PLANET_GLYPHS
        .get(glyph.trim())
        .copied()
        .ok_or_else(|| ChartError::invalid(format!("unknown planet glyph '{}'", glyph)))
}

pub fn sign_from_glyph(glyph: &str) -> Result<Sign, ChartError> {
    SIGN_GLYPHS
        .get(glyph.trim())
        .copied()
        .ok_or_else(|| ChartError::invalid(format!("unknown sign glyph '{}'", glyph)))
}

pub fn aspect_from_glyph(glyph: &str) -> Result<AspectKind, ChartError> {
    ASPECT_GLYPHS
        .get(glyph.trim())
        .copied()
        .ok_or_else(|| ChartError::invalid(format!("unknown aspect glyph '{}'", glyph)))
}

fn parse_number(field: &str, text: &str) -> Result<f64, ChartError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ChartError::invalid(format!("{} '{}' is not a number", field, text)))
}

fn parse_house(text: &str) -> Result<u8, ChartError> {
    text.trim()
        .parse::<u8>()
        .map_err(|_| ChartError::invalid(format!("house '{}' is not a house number", text)))
}

/// Planet table row as read from the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphPlanetRow {
    pub planet: String,
    pub sign: String,
    pub degree: String,
    pub minutes: String,
    pub house: String,
    #[serde(default)]
    pub score: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphCuspRow {
    pub house: String,
    pub sign: String,
    pub degree: String,
    pub minutes: String,
}

/// One filled cell of the aspect grid with its orb label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphAspectCell {
    pub from: String,
    pub to: String,
    pub aspect: String,
    pub orb: String,
}

pub fn decode_planet_row(row: &GlyphPlanetRow) -> Result<PlanetRow, ChartError> {
    let house = match row.house.trim() {
        "" => None,
        text => Some(parse_house(text)?),
    };
    let score = match row.score.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(text) => Some(parse_number("score", text)?),
    };

    Ok(PlanetRow {
        body: planet_from_glyph(&row.planet)?,
        sign: sign_from_glyph(&row.sign)?,
        degree: parse_number("degree", &row.degree)?,
        minutes: parse_number("minutes", &row.minutes)?,
        house,
        score,
    })
}

pub fn decode_cusp_row(row: &GlyphCuspRow) -> Result<CuspRow, ChartError> {
    Ok(CuspRow {
        house: parse_house(&row.house)?,
        sign: sign_from_glyph(&row.sign)?,
        degree: parse_number("degree", &row.degree)?,
        minutes: parse_number("minutes", &row.minutes)?,
    })
}

pub fn decode_aspect_cell(cell: &GlyphAspectCell) -> Result<AspectRow, ChartError> {
    let orb: Orb = cell.orb.trim().parse()?;
    Ok(AspectRow {
        from: planet_from_glyph(&cell.from)?,
        to: planet_from_glyph(&cell.to)?,
        kind: aspect_from_glyph(&cell.aspect)?,
        orb,
    })
}
