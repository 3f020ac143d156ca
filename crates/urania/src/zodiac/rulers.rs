//! Sign rulers.
//!
//! Maps zodiac signs to their ruling bodies. Scorpio, Aquarius and Pisces list
//! the modern outer ruler first, then the traditional one.

use crate::zodiac::types::{Body, Sign, SIGN_COUNT};

const SIGN_RULERS: [&[Body]; SIGN_COUNT] = [
    &[Body::Mars],                 // Aries
    &[Body::Venus],                // Taurus
    &[Body::Mercury],              // Gemini
    &[Body::Moon],                 // Cancer
    &[Body::Sun],                  // Leo
    &[Body::Mercury],              // Virgo
    &[Body::Venus],                // Libra
    &[Body::Pluto, Body::Mars],    // Scorpio
    &[Body::Jupiter],              // Sagittarius
    &[Body::Saturn],               // Capricorn
    &[Body::Uranus, Body::Saturn], // Aquarius
    &[Body::Neptune, Body::Jupiter], // Pisces
];

/// All rulers of a sign, modern first.
pub fn get_sign_rulers(sign: Sign) -> &'static [Body] {
    SIGN_RULERS[sign.index()]
}

/// Rulers in effect; traditional mode drops Uranus, Neptune and Pluto.
pub fn get_active_rulers(sign: Sign, traditional: bool) -> Vec<Body> {
    get_sign_rulers(sign)
        .iter()
        .copied()
        .filter(|ruler| !(traditional && ruler.is_outer()))
        .collect()
}
