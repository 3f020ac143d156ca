use urania::aspects::{normalize_aspects, Aspect, AspectKind, Orb, OrbDirection};
use urania::chart::{BodyMap, CelestialBody};
use urania::{Body, Sign};

fn chart(edges: &[(Body, Body, AspectKind, &str)]) -> BodyMap {
    let mut bodies = BodyMap::new();
    for body in [Body::Sun, Body::Moon, Body::Mars, Body::Saturn] {
        bodies.insert(body, CelestialBody::new(Sign::Aries, 1.0));
    }
    for &(from, to, kind, orb) in edges {
        bodies.get_mut(&from).unwrap().aspects.push(Aspect {
            to,
            kind,
            orb: orb.parse().unwrap(),
        });
    }
    bodies
}

fn find(bodies: &BodyMap, from: Body, to: Body, kind: AspectKind) -> Option<Aspect> {
    bodies[&from]
        .aspects
        .iter()
        .find(|a| a.to == to && a.kind == kind)
        .cloned()
}

#[test]
fn test_reverse_aspect_flips_direction() {
    let mut bodies = chart(&[
        (Body::Sun, Body::Moon, AspectKind::Trine, "1°10 A"),
        (Body::Mars, Body::Saturn, AspectKind::Square, "4°02 S"),
    ]);
    let diagnostics = normalize_aspects(&mut bodies);
    assert!(diagnostics.is_empty());

    let reverse = find(&bodies, Body::Moon, Body::Sun, AspectKind::Trine).unwrap();
    assert_eq!(reverse.orb.magnitude, "1°10");
    assert_eq!(reverse.orb.direction, Some(OrbDirection::Separating));

    let reverse = find(&bodies, Body::Saturn, Body::Mars, AspectKind::Square).unwrap();
    assert_eq!(reverse.orb.to_string(), "4°02 A");
}

#[test]
fn test_normalization_is_idempotent() {
    let mut bodies = chart(&[
        (Body::Sun, Body::Moon, AspectKind::Trine, "1°10 A"),
        (Body::Sun, Body::Saturn, AspectKind::Opposition, "0°45 S"),
        (Body::Moon, Body::Mars, AspectKind::Sextile, "2°00"),
    ]);
    normalize_aspects(&mut bodies);
    let once = bodies.clone();
    normalize_aspects(&mut bodies);
    assert_eq!(bodies, once);
}

#[test]
fn test_existing_reverse_is_left_alone() {
    let mut bodies = chart(&[
        (Body::Sun, Body::Moon, AspectKind::Trine, "1°10 A"),
        (Body::Moon, Body::Sun, AspectKind::Trine, "1°12 S"),
    ]);
    normalize_aspects(&mut bodies);
    assert_eq!(bodies[&Body::Moon].aspects.len(), 1);
    assert_eq!(bodies[&Body::Sun].aspects.len(), 1);
    assert_eq!(bodies[&Body::Moon].aspects[0].orb.to_string(), "1°12 S");
}

#[test]
fn test_orb_without_direction_stays_without() {
    let mut bodies = chart(&[(Body::Moon, Body::Mars, AspectKind::Sextile, "2°00")]);
    normalize_aspects(&mut bodies);
    let reverse = find(&bodies, Body::Mars, Body::Moon, AspectKind::Sextile).unwrap();
    assert_eq!(reverse.orb, Orb::new("2°00", None));
}

#[test]
fn test_different_kinds_between_same_pair_are_both_mirrored() {
    let mut bodies = chart(&[
        (Body::Sun, Body::Mars, AspectKind::Conjunction, "0°30 A"),
        (Body::Sun, Body::Mars, AspectKind::Sextile, "5°00 A"),
    ]);
    normalize_aspects(&mut bodies);
    assert!(bodies[&Body::Mars].has_aspect(Body::Sun, AspectKind::Conjunction));
    assert!(bodies[&Body::Mars].has_aspect(Body::Sun, AspectKind::Sextile));
}
