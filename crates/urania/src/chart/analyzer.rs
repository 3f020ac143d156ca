use crate::aspects::{normalize_aspects, Aspect};
use crate::chart::input::ChartInput;
use crate::chart::model::{BodyMap, CelestialBody, ChartAnalysis};
use crate::chart::options::AnalysisOptions;
use crate::error::{ChartError, Diagnostic};
use crate::features::classify_features;
use crate::houses::{
    build_houses, detect_interceptions, place_body, resolve_flying_houses, CuspRing,
};
use crate::patterns::PatternDetector;
use log::{debug, info};

/// Runs the full analysis over one decoded chart.
///
/// Holds only its options; every call builds its own maps and returns an
/// independent result.
#[derive(Debug, Clone)]
pub struct ChartAnalyzer {
    options: AnalysisOptions,
}

impl ChartAnalyzer {
    pub fn new(options: AnalysisOptions) -> Result<Self, ChartError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Analyze a chart.
    ///
    /// Malformed input aborts with `InvalidInput`. Relations that cannot be
    /// resolved are dropped and listed in `diagnostics`.
    pub fn analyze(&self, input: &ChartInput) -> Result<ChartAnalysis, ChartError> {
        let ring = CuspRing::new(&input.cusp_list()?)?;
        let mut bodies = self.build_bodies(input)?;
        let mut diagnostics = attach_aspects(&mut bodies, input);
        diagnostics.extend(normalize_aspects(&mut bodies));

        let interceptions = detect_interceptions(&ring);
        diagnostics.extend(
            interceptions
                .unresolved
                .iter()
                .map(|&sign| Diagnostic::UnresolvedInterception { sign }),
        );

        for (&body, data) in bodies.iter_mut() {
            let outcome = place_body(
                data.sign,
                data.longitude,
                &ring,
                &interceptions.intercepted_signs,
                self.options.orb,
            )?;
            if !outcome.geometry_resolved {
                diagnostics.push(Diagnostic::UnresolvedGeometry {
                    body,
                    absolute_degree: outcome.placement.absolute_degree,
                });
            }
            data.placement = Some(outcome.placement);
        }

        let mut houses = build_houses(&ring, &bodies, self.options.traditional);
        diagnostics.extend(resolve_flying_houses(
            &mut houses,
            &bodies,
            self.options.flying_house_options(),
        ));

        let patterns = PatternDetector::new(&bodies, &self.options.pattern_exclusions())
            .detect(self.options.house_width);
        let features = classify_features(&input.features);

        info!(
            "analyzed chart: {} bodies, {} intercepted signs, {} diagnostics",
            bodies.len(),
            interceptions.chains.len(),
            diagnostics.len()
        );

        Ok(ChartAnalysis {
            bodies,
            houses,
            intercepted_chains: interceptions.chains,
            patterns,
            features,
            diagnostics,
        })
    }

    fn build_bodies(&self, input: &ChartInput) -> Result<BodyMap, ChartError> {
        let mut bodies = BodyMap::new();

        for row in &input.planets {
            if bodies.contains_key(&row.body) {
                return Err(ChartError::invalid(format!(
                    "{} is listed more than once",
                    row.body
                )));
            }
            let mut body = CelestialBody::new(row.sign, row.degree_within_sign()?);
            body.house = row.reported_house()?;
            body.score = row.score;
            bodies.insert(row.body, body);
        }

        Ok(bodies)
    }
}

/// Put each aspect row on its source body. Rows from bodies absent from the
/// chart are reported; repeated rows are kept once.
fn attach_aspects(bodies: &mut BodyMap, input: &ChartInput) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for row in &input.aspects {
        let Some(source) = bodies.get_mut(&row.from) else {
            debug!("aspect {} -> {} skipped: source not in chart", row.from, row.to);
            diagnostics.push(Diagnostic::UnknownAspectTarget {
                from: row.from,
                to: row.to,
            });
            continue;
        };
        if source.has_aspect(row.to, row.kind) {
            continue;
        }
        source.aspects.push(Aspect {
            to: row.to,
            kind: row.kind,
            orb: row.orb.clone(),
        });
    }

    diagnostics
}

/// Parse chart JSON and analyze it in one step.
pub fn analyze_chart(json: &str, options: AnalysisOptions) -> Result<ChartAnalysis, ChartError> {
    let input = ChartInput::from_json(json)?;
    ChartAnalyzer::new(options)?.analyze(&input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::{AspectKind, Orb};
    use crate::chart::input::{AspectRow, CuspRow, PlanetRow};
    use crate::zodiac::{Body, Sign};

    fn equal_cusps() -> Vec<CuspRow> {
        Sign::ALL
            .iter()
            .enumerate()
            .map(|(i, &sign)| CuspRow {
                house: i as u8 + 1,
                sign,
                degree: 0.0,
                minutes: 0.0,
            })
            .collect()
    }

    fn planet(body: Body, sign: Sign, degree: f64) -> PlanetRow {
        PlanetRow {
            body,
            sign,
            degree,
            minutes: 0.0,
            house: None,
            score: None,
        }
    }

    #[test]
    fn test_analyze_places_and_mirrors() {
        let input = ChartInput {
            cusps: equal_cusps(),
            planets: vec![
                planet(Body::Sun, Sign::Aries, 10.0),
                planet(Body::Moon, Sign::Leo, 10.0),
            ],
            aspects: vec![AspectRow {
                from: Body::Sun,
                to: Body::Moon,
                kind: AspectKind::Trine,
                orb: "0°00 A".parse::<Orb>().unwrap(),
            }],
            features: vec![],
        };

        let analysis = ChartAnalyzer::new(AnalysisOptions::default())
            .unwrap()
            .analyze(&input)
            .unwrap();

        let moon = analysis.body(Body::Moon).unwrap();
        assert!(moon.has_aspect(Body::Sun, AspectKind::Trine));
        assert_eq!(moon.placement.unwrap().final_house, 5);
        assert_eq!(analysis.house(5).unwrap().occupants, vec![Body::Moon]);
        assert!(analysis.intercepted_chains.is_empty());
    }

    #[test]
    fn test_duplicate_body_is_invalid_input() {
        let input = ChartInput {
            cusps: equal_cusps(),
            planets: vec![
                planet(Body::Sun, Sign::Aries, 10.0),
                planet(Body::Sun, Sign::Taurus, 10.0),
            ],
            ..Default::default()
        };
        let analyzer = ChartAnalyzer::new(AnalysisOptions::default()).unwrap();
        assert!(matches!(
            analyzer.analyze(&input),
            Err(ChartError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_aspect_from_absent_body_is_reported() {
        let input = ChartInput {
            cusps: equal_cusps(),
            planets: vec![planet(Body::Sun, Sign::Aries, 10.0)],
            aspects: vec![AspectRow {
                from: Body::Pluto,
                to: Body::Sun,
                kind: AspectKind::Square,
                orb: "2°00 S".parse::<Orb>().unwrap(),
            }],
            features: vec![],
        };
        let analysis = ChartAnalyzer::new(AnalysisOptions::default())
            .unwrap()
            .analyze(&input)
            .unwrap();
        assert!(analysis.diagnostics.contains(&Diagnostic::UnknownAspectTarget {
            from: Body::Pluto,
            to: Body::Sun,
        }));
        assert!(analysis.body(Body::Sun).unwrap().aspects.is_empty());
    }

    #[test]
    fn test_rejects_invalid_options() {
        let options = AnalysisOptions {
            orb: f64::NAN,
            ..Default::default()
        };
        assert!(ChartAnalyzer::new(options).is_err());
    }
}
