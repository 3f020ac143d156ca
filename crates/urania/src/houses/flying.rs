//! Flying houses: where each house's ruler is placed.

use crate::chart::model::{BodyMap, CelestialBody};
use crate::error::Diagnostic;
use crate::houses::table::HouseMap;
use crate::zodiac::rulers::get_active_rulers;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlyingHouseOptions {
    /// Ignore Uranus, Neptune and Pluto as rulers.
    pub traditional: bool,
    /// Report a ruler's geometric house as well when the orb rule moved it.
    pub use_dual_flying_house: bool,
}

/// Houses a ruler points to, geometric before final in dual mode.
fn ruler_destinations(ruler: &CelestialBody, dual: bool) -> Vec<u8> {
    match ruler.placement {
        Some(placement) => {
            let mut houses = Vec::with_capacity(2);
            if dual && placement.geometric_house != placement.final_house {
                houses.push(placement.geometric_house);
            }
            houses.push(placement.final_house);
            houses
        }
        None => ruler.house.into_iter().collect(),
    }
}

/// Fill `flying_to` on every house with a sign.
///
/// Rulers absent from the chart, or present without any house, are skipped and
/// reported. Destinations are deduplicated in first-seen order; a house whose
/// rulers resolve to nothing keeps `flying_to = None`.
pub fn resolve_flying_houses(
    houses: &mut HouseMap,
    bodies: &BodyMap,
    options: FlyingHouseOptions,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for (&number, house) in houses.iter_mut() {
        let Some(sign) = house.sign else {
            continue;
        };

        let mut destinations: Vec<u8> = Vec::new();
        for ruler in get_active_rulers(sign, options.traditional) {
            let found = bodies
                .get(&ruler)
                .map(|data| ruler_destinations(data, options.use_dual_flying_house))
                .unwrap_or_default();

            if found.is_empty() {
                debug!("house {}: ruler {} has no placement", number, ruler);
                diagnostics.push(Diagnostic::MissingCollaboratorData {
                    house: number,
                    ruler,
                });
                continue;
            }

            for destination in found {
                if !destinations.contains(&destination) {
                    destinations.push(destination);
                }
            }
        }

        house.flying_to = (!destinations.is_empty()).then_some(destinations);
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::houses::placement::Placement;
    use crate::houses::table::House;
    use crate::zodiac::{Body, Sign};

    fn placed(sign: Sign, geometric: u8, final_house: u8) -> CelestialBody {
        let mut body = CelestialBody::new(sign, 20.0);
        body.placement = Some(Placement {
            absolute_degree: sign.start_longitude() + 20.0,
            sign_index: sign.index(),
            geometric_house: geometric,
            final_house,
            moved_by_orb_rule: geometric != final_house,
            is_intercepted: false,
        });
        body
    }

    fn houses_with(signs: &[(u8, Sign)]) -> HouseMap {
        signs
            .iter()
            .map(|(number, sign)| (*number, House::new(Some(*sign), Some(0.0))))
            .collect()
    }

    #[test]
    fn test_dual_mode_reports_both_houses() {
        let mut bodies = BodyMap::new();
        bodies.insert(Body::Mars, placed(Sign::Leo, 9, 10));
        let mut houses = houses_with(&[(6, Sign::Aries)]);

        let options = FlyingHouseOptions {
            traditional: true,
            use_dual_flying_house: true,
        };
        resolve_flying_houses(&mut houses, &bodies, options);
        assert_eq!(houses[&6].flying_to, Some(vec![9, 10]));
    }

    #[test]
    fn test_single_mode_reports_final_house() {
        let mut bodies = BodyMap::new();
        bodies.insert(Body::Mars, placed(Sign::Leo, 9, 10));
        let mut houses = houses_with(&[(6, Sign::Aries)]);

        resolve_flying_houses(&mut houses, &bodies, FlyingHouseOptions::default());
        assert_eq!(houses[&6].flying_to, Some(vec![10]));
    }

    #[test]
    fn test_unplaced_ruler_leaves_field_absent() {
        let bodies = BodyMap::new();
        let mut houses = houses_with(&[(2, Sign::Taurus)]);

        let diagnostics =
            resolve_flying_houses(&mut houses, &bodies, FlyingHouseOptions::default());
        assert_eq!(houses[&2].flying_to, None);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::MissingCollaboratorData {
                house: 2,
                ruler: Body::Venus
            }]
        );
    }

    #[test]
    fn test_traditional_mode_ignores_outer_rulers() {
        let mut bodies = BodyMap::new();
        bodies.insert(Body::Pluto, placed(Sign::Libra, 11, 11));
        bodies.insert(Body::Mars, placed(Sign::Leo, 9, 9));
        let mut houses = houses_with(&[(1, Sign::Scorpio)]);

        let traditional = FlyingHouseOptions {
            traditional: true,
            use_dual_flying_house: false,
        };
        resolve_flying_houses(&mut houses, &bodies, traditional);
        assert_eq!(houses[&1].flying_to, Some(vec![9]));

        resolve_flying_houses(&mut houses, &bodies, FlyingHouseOptions::default());
        assert_eq!(houses[&1].flying_to, Some(vec![11, 9]));
    }

    #[test]
    fn test_shared_destination_is_deduplicated() {
        let mut bodies = BodyMap::new();
        bodies.insert(Body::Uranus, placed(Sign::Gemini, 4, 4));
        bodies.insert(Body::Saturn, placed(Sign::Gemini, 4, 4));
        let mut houses = houses_with(&[(5, Sign::Aquarius)]);

        resolve_flying_houses(&mut houses, &bodies, FlyingHouseOptions::default());
        assert_eq!(houses[&5].flying_to, Some(vec![4]));
    }
}
