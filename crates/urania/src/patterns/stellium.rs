//! Stellium grouping by sign and by house.

use crate::chart::model::BodyMap;
use crate::patterns::types::{Stellium, StelliumKind, StelliumLocation};
use crate::zodiac::{Body, Sign};
use std::collections::BTreeMap;

pub const MIN_STELLIUM_COUNT: usize = 3;
/// Widest spread of degree-within-sign allowed for a sign stellium.
pub const SIGN_STELLIUM_SPAN: f64 = 15.0;
pub const DEFAULT_HOUSE_WIDTH: f64 = 30.0;
/// Slack for spans built from degrees and arc-minutes.
const SPAN_EPSILON: f64 = 1e-9;

fn spread(positions: &[f64]) -> f64 {
    let min = positions.iter().copied().fold(f64::INFINITY, f64::min);
    let max = positions.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    max - min
}

fn qualifies(points: &[Body], positions: &[f64], max_spread: f64) -> bool {
    points.len() >= MIN_STELLIUM_COUNT
        && points.iter().any(|body| body.is_personal())
        && spread(positions) <= max_spread + SPAN_EPSILON
}

/// Value shared by more than half of `values`, if any.
fn majority<T: Copy + Ord>(values: impl IntoIterator<Item = T>) -> Option<T> {
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    let mut total = 0usize;
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
        total += 1;
    }
    counts
        .into_iter()
        .find(|&(_, count)| count * 2 > total)
        .map(|(value, _)| value)
}

/// Find sign and house stelliums among `members`.
///
/// Sign groups need a 15° spread or less on degree within sign. House groups
/// need a spread of at most a third of `house_width`, measured on absolute
/// longitude modulo `house_width`. Both passes are independent.
pub fn find_stelliums(bodies: &BodyMap, members: &[Body], house_width: f64) -> Vec<Stellium> {
    let mut by_sign: BTreeMap<Sign, Vec<Body>> = BTreeMap::new();
    let mut by_house: BTreeMap<u8, Vec<Body>> = BTreeMap::new();

    for body in members {
        let Some(data) = bodies.get(body) else {
            continue;
        };
        by_sign.entry(data.sign).or_default().push(*body);
        if let Some(house) = data.effective_house() {
            by_house.entry(house).or_default().push(*body);
        }
    }

    let mut stelliums = Vec::new();

    for (sign, points) in by_sign {
        let positions: Vec<f64> = points.iter().map(|b| bodies[b].longitude).collect();
        if !qualifies(&points, &positions, SIGN_STELLIUM_SPAN) {
            continue;
        }
        let dominant = majority(points.iter().filter_map(|b| bodies[b].effective_house()));
        stelliums.push(Stellium {
            kind: StelliumKind::Sign,
            location: StelliumLocation::Sign(sign),
            count: points.len(),
            points,
            dominant_location: dominant.map(StelliumLocation::House),
        });
    }

    let house_orb = house_width / 3.0;
    for (house, points) in by_house {
        let positions: Vec<f64> = points
            .iter()
            .map(|b| bodies[b].absolute_degree() % house_width)
            .collect();
        if !qualifies(&points, &positions, house_orb) {
            continue;
        }
        let dominant = majority(points.iter().map(|b| bodies[b].sign));
        stelliums.push(Stellium {
            kind: StelliumKind::House,
            location: StelliumLocation::House(house),
            count: points.len(),
            points,
            dominant_location: dominant.map(StelliumLocation::Sign),
        });
    }

    stelliums
}
