use crate::aspects::AspectKind;
use crate::chart::model::BodyMap;
use crate::patterns::combinations::combinations;
use crate::patterns::stellium::find_stelliums;
use crate::patterns::types::{GrandCross, GrandTrine, Kite, PatternSet, TSquare};
use crate::zodiac::Body;
use log::debug;

/// Bodies never used for pattern geometry, whatever the mode.
pub const DEFAULT_PATTERN_EXCLUSIONS: &[Body] = &[
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::NorthNode,
    Body::Ascendant,
    Body::Midheaven,
];

/// Searches a chart's aspect web for classical configurations.
///
/// Aspects are looked up on the first-named body of each pair, so the body map
/// should already be normalized in both directions.
pub struct PatternDetector<'a> {
    bodies: &'a BodyMap,
    members: Vec<Body>,
}

impl<'a> PatternDetector<'a> {
    pub fn new(bodies: &'a BodyMap, excluded: &[Body]) -> Self {
        let members = bodies
            .keys()
            .copied()
            .filter(|body| !excluded.contains(body))
            .collect();
        Self { bodies, members }
    }

    /// Bodies taking part in the search, in canonical order.
    pub fn members(&self) -> &[Body] {
        &self.members
    }

    fn aspected(&self, from: Body, to: Body, kind: AspectKind) -> bool {
        self.bodies
            .get(&from)
            .map_or(false, |body| body.has_aspect(to, kind))
    }

    pub fn grand_trines(&self) -> Vec<GrandTrine> {
        combinations(&self.members, 3)
            .filter(|c| {
                self.aspected(c[0], c[1], AspectKind::Trine)
                    && self.aspected(c[1], c[2], AspectKind::Trine)
                    && self.aspected(c[2], c[0], AspectKind::Trine)
            })
            .map(|c| GrandTrine {
                points: [c[0], c[1], c[2]],
            })
            .collect()
    }

    /// One kite per (trine, vertex, opposing body); a trine can yield several.
    pub fn kites(&self, grand_trines: &[GrandTrine]) -> Vec<Kite> {
        let mut kites = Vec::new();

        for trine in grand_trines {
            for &vertex in &trine.points {
                for &candidate in &self.members {
                    if trine.points.contains(&candidate) {
                        continue;
                    }
                    if self.aspected(vertex, candidate, AspectKind::Opposition) {
                        let [a, b, c] = trine.points;
                        kites.push(Kite {
                            points: [a, b, c, candidate],
                            vertex,
                            opposition_point: candidate,
                        });
                    }
                }
            }
        }

        kites
    }

    /// Tests the pairing p1-p3 / p2-p4 of each 4-combination only; crosses
    /// whose oppositions pair up differently in canonical order are missed.
    pub fn grand_crosses(&self) -> Vec<GrandCross> {
        let mut crosses = Vec::new();

        for c in combinations(&self.members, 4) {
            let (p1, p2, p3, p4) = (c[0], c[1], c[2], c[3]);

            if !self.aspected(p1, p3, AspectKind::Opposition)
                || !self.aspected(p2, p4, AspectKind::Opposition)
            {
                continue;
            }

            if self.aspected(p1, p2, AspectKind::Square)
                && self.aspected(p2, p3, AspectKind::Square)
                && self.aspected(p3, p4, AspectKind::Square)
                && self.aspected(p4, p1, AspectKind::Square)
            {
                crosses.push(GrandCross {
                    points: [p1, p2, p3, p4],
                    opposition_pairs: [[p1, p3], [p2, p4]],
                });
            }
        }

        crosses
    }

    pub fn t_squares(&self) -> Vec<TSquare> {
        let mut t_squares = Vec::new();

        for c in combinations(&self.members, 3) {
            let (p1, p2, p3) = (c[0], c[1], c[2]);
            for (a, b, apex) in [(p1, p2, p3), (p1, p3, p2), (p2, p3, p1)] {
                if self.aspected(a, b, AspectKind::Opposition)
                    && self.aspected(a, apex, AspectKind::Square)
                    && self.aspected(b, apex, AspectKind::Square)
                {
                    t_squares.push(TSquare {
                        points: [a, b, apex],
                        opposition_points: [a, b],
                        apex_point: apex,
                    });
                }
            }
        }

        t_squares
    }

    /// Run every search.
    pub fn detect(&self, house_width: f64) -> PatternSet {
        let grand_trines = self.grand_trines();
        let kites = self.kites(&grand_trines);
        let patterns = PatternSet {
            grand_crosses: self.grand_crosses(),
            t_squares: self.t_squares(),
            stelliums: find_stelliums(self.bodies, &self.members, house_width),
            grand_trines,
            kites,
        };

        debug!(
            "patterns over {} bodies: {} grand trines, {} kites, {} grand crosses, {} t-squares, {} stelliums",
            self.members.len(),
            patterns.grand_trines.len(),
            patterns.kites.len(),
            patterns.grand_crosses.len(),
            patterns.t_squares.len(),
            patterns.stelliums.len()
        );

        patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::{normalize_aspects, Aspect};
    use crate::chart::model::CelestialBody;
    use crate::zodiac::Sign;

    fn web(edges: &[(Body, Body, AspectKind)]) -> BodyMap {
        let mut bodies = BodyMap::new();
        for &(from, to, _) in edges {
            for body in [from, to] {
                bodies
                    .entry(body)
                    .or_insert_with(|| CelestialBody::new(Sign::Aries, 1.0));
            }
        }
        for &(from, to, kind) in edges {
            if let Some(body) = bodies.get_mut(&from) {
                body.aspects.push(Aspect {
                    to,
                    kind,
                    orb: "1°00 A".parse().unwrap(),
                });
            }
        }
        normalize_aspects(&mut bodies);
        bodies
    }

    #[test]
    fn test_t_square_apex() {
        use AspectKind::*;
        let bodies = web(&[
            (Body::Sun, Body::Saturn, Opposition),
            (Body::Sun, Body::Mars, Square),
            (Body::Mars, Body::Saturn, Square),
        ]);
        let detector = PatternDetector::new(&bodies, DEFAULT_PATTERN_EXCLUSIONS);
        let t_squares = detector.t_squares();
        assert_eq!(t_squares.len(), 1);
        assert_eq!(t_squares[0].apex_point, Body::Mars);
        assert_eq!(t_squares[0].opposition_points, [Body::Sun, Body::Saturn]);
    }

    #[test]
    fn test_excluded_points_do_not_form_trines() {
        use AspectKind::*;
        let bodies = web(&[
            (Body::Sun, Body::Moon, Trine),
            (Body::Moon, Body::Ascendant, Trine),
            (Body::Ascendant, Body::Sun, Trine),
        ]);
        let detector = PatternDetector::new(&bodies, DEFAULT_PATTERN_EXCLUSIONS);
        assert!(detector.grand_trines().is_empty());

        let unrestricted = PatternDetector::new(&bodies, &[]);
        assert_eq!(unrestricted.grand_trines().len(), 1);
    }

    #[test]
    fn test_members_skip_exclusions() {
        use AspectKind::*;
        let bodies = web(&[(Body::Sun, Body::Midheaven, Square)]);
        let detector = PatternDetector::new(&bodies, DEFAULT_PATTERN_EXCLUSIONS);
        assert_eq!(detector.members(), &[Body::Sun]);
    }
}
