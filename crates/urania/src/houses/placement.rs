//! Planet-to-house placement.
//!
//! A body is first placed in the house whose cusp interval contains it. When it
//! sits within `orb` degrees before the next cusp it is counted in that next
//! house instead (the early-cusp rule).

use crate::error::ChartError;
use crate::houses::cusps::{next_house, CuspRing};
use crate::zodiac::geometry::{absolute_longitude, forward_distance};
use crate::zodiac::Sign;
use log::warn;
use serde::Serialize;
use std::collections::BTreeSet;

pub const DEFAULT_HOUSE_ORB: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub absolute_degree: f64,
    pub sign_index: usize,
    pub geometric_house: u8,
    /// Either `geometric_house` or the house after it.
    pub final_house: u8,
    pub moved_by_orb_rule: bool,
    pub is_intercepted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementOutcome {
    pub placement: Placement,
    /// False when no house contained the body and house 1 was assumed.
    pub geometry_resolved: bool,
}

/// House whose `[start, end)` interval holds `longitude`.
pub fn geometric_house(longitude: f64, ring: &CuspRing) -> Option<u8> {
    ring.spans().find_map(|(house, start, end)| {
        let mut lon = longitude;
        if lon < start && lon + 360.0 < end {
            lon += 360.0;
        }
        (lon >= start && lon < end).then_some(house)
    })
}

/// Place a body given its sign and degree within that sign.
pub fn place_body(
    sign: Sign,
    degree: f64,
    ring: &CuspRing,
    intercepted_signs: &BTreeSet<Sign>,
    orb: f64,
) -> Result<PlacementOutcome, ChartError> {
    if !orb.is_finite() || orb < 0.0 {
        return Err(ChartError::invalid(format!(
            "house orb must be a non-negative number, got {}",
            orb
        )));
    }

    let absolute_degree = absolute_longitude(sign.index(), degree)?;

    let (geometric, geometry_resolved) = match geometric_house(absolute_degree, ring) {
        Some(house) => (house, true),
        None => {
            warn!(
                "no house contains longitude {:.4}, defaulting to house 1",
                absolute_degree
            );
            (1, false)
        }
    };

    let following = next_house(geometric);
    let distance = forward_distance(absolute_degree, ring.longitude(following));
    let moved = distance <= orb;

    Ok(PlacementOutcome {
        placement: Placement {
            absolute_degree,
            sign_index: sign.index(),
            geometric_house: geometric,
            final_house: if moved { following } else { geometric },
            moved_by_orb_rule: moved,
            is_intercepted: intercepted_signs.contains(&sign),
        },
        geometry_resolved,
    })
}
