use crate::aspects::types::Aspect;
use crate::chart::model::BodyMap;
use crate::error::Diagnostic;
use crate::zodiac::Body;
use log::debug;

/// Mirror every one-directional aspect onto its target.
///
/// The grid only records one triangle, so `Sun -> Moon Trine "1°10 A"` yields
/// `Moon -> Sun Trine "1°10 S"`. A reverse entry is only added when the target
/// does not already list the same kind back to the source, which makes the
/// pass idempotent. Aspects to bodies missing from the map are reported and
/// left alone.
pub fn normalize_aspects(bodies: &mut BodyMap) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut synthesized = 0usize;
    let sources: Vec<Body> = bodies.keys().copied().collect();

    for from in sources {
        let outgoing = match bodies.get(&from) {
            Some(body) => body.aspects.clone(),
            None => continue,
        };

        for aspect in outgoing {
            let Some(target) = bodies.get_mut(&aspect.to) else {
                debug!("aspect {} -> {} skipped: target not in chart", from, aspect.to);
                diagnostics.push(Diagnostic::UnknownAspectTarget {
                    from,
                    to: aspect.to,
                });
                continue;
            };

            if target.has_aspect(from, aspect.kind) {
                continue;
            }

            target.aspects.push(Aspect {
                to: from,
                kind: aspect.kind,
                orb: aspect.orb.flipped(),
            });
            synthesized += 1;
        }
    }

    debug!("synthesized {} reverse aspects", synthesized);
    diagnostics
}
