//! Intercepted signs.
//!
//! A sign that sits on no cusp lies wholly inside one house and is said to be
//! intercepted by it.

use crate::houses::cusps::CuspRing;
use crate::zodiac::{Sign, SIGN_WIDTH};
use log::debug;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterceptedChain {
    pub container_house: u8,
    pub intercepted_sign_index: usize,
    pub house_span_degrees: f64,
}

impl InterceptedChain {
    pub fn intercepted_sign(&self) -> Sign {
        Sign::ALL[self.intercepted_sign_index]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterceptionResult {
    pub chains: Vec<InterceptedChain>,
    pub intercepted_signs: BTreeSet<Sign>,
    /// Signs missing from every cusp for which no container house was found.
    pub unresolved: Vec<Sign>,
}

/// Signs that appear on no cusp, in zodiac order.
pub fn missing_signs(ring: &CuspRing) -> Vec<Sign> {
    let present: BTreeSet<Sign> = ring.cusps().iter().map(|cusp| cusp.sign).collect();
    Sign::ALL
        .iter()
        .copied()
        .filter(|sign| !present.contains(sign))
        .collect()
}

/// Find every intercepted sign and the house that swallows it.
///
/// Houses are scanned 1..=12 and the first one whose span contains the whole
/// sign wins. A missing sign without a container is left out of the chains and
/// listed in `unresolved`.
pub fn detect_interceptions(ring: &CuspRing) -> InterceptionResult {
    let mut result = InterceptionResult::default();

    for sign in missing_signs(ring) {
        let sign_start = sign.start_longitude();
        let sign_end = sign_start + SIGN_WIDTH;

        let container = ring.spans().find(|&(_, start, end)| {
            (start <= sign_start && end >= sign_end)
                || (start <= sign_start + 360.0 && end >= sign_end + 360.0)
        });

        match container {
            Some((house, start, end)) => {
                result.chains.push(InterceptedChain {
                    container_house: house,
                    intercepted_sign_index: sign.index(),
                    house_span_degrees: end - start,
                });
                result.intercepted_signs.insert(sign);
            }
            None => {
                debug!("sign {} is on no cusp but no house contains it", sign);
                result.unresolved.push(sign);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::houses::cusps::Cusp;

    fn cusps(spec: &[(Sign, f64)]) -> CuspRing {
        let cusps: Vec<Cusp> = spec
            .iter()
            .enumerate()
            .map(|(i, (sign, degree))| Cusp::new(i as u8 + 1, *sign, *degree))
            .collect();
        CuspRing::new(&cusps).unwrap()
    }

    #[test]
    fn test_equal_houses_have_no_interceptions() {
        let ring = cusps(&Sign::ALL.map(|sign| (sign, 0.0)));
        let result = detect_interceptions(&ring);
        assert!(result.chains.is_empty());
        assert!(result.intercepted_signs.is_empty());
        assert!(result.unresolved.is_empty());
    }

    #[test]
    fn test_wrapping_house_contains_aries() {
        let ring = cusps(&[
            (Sign::Pisces, 25.0),
            (Sign::Taurus, 5.0),
            (Sign::Gemini, 5.0),
            (Sign::Cancer, 5.0),
            (Sign::Leo, 5.0),
            (Sign::Virgo, 5.0),
            (Sign::Virgo, 25.0),
            (Sign::Scorpio, 5.0),
            (Sign::Sagittarius, 5.0),
            (Sign::Capricorn, 5.0),
            (Sign::Aquarius, 5.0),
            (Sign::Pisces, 5.0),
        ]);
        let result = detect_interceptions(&ring);

        assert_eq!(result.chains.len(), 2);
        let aries = &result.chains[0];
        assert_eq!(aries.intercepted_sign(), Sign::Aries);
        assert_eq!(aries.container_house, 1);
        assert!((aries.house_span_degrees - 40.0).abs() < 1e-9);

        let libra = &result.chains[1];
        assert_eq!(libra.intercepted_sign(), Sign::Libra);
        assert_eq!(libra.container_house, 7);
        assert!(result.intercepted_signs.contains(&Sign::Aries));
        assert!(result.intercepted_signs.contains(&Sign::Libra));
    }
}
