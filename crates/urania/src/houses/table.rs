use crate::chart::model::BodyMap;
use crate::houses::cusps::CuspRing;
use crate::zodiac::rulers::get_active_rulers;
use crate::zodiac::{Body, Sign};
use serde::Serialize;
use std::collections::BTreeMap;

/// Houses keyed by number 1..=12.
pub type HouseMap = BTreeMap<u8, House>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    pub sign: Option<Sign>,
    pub cusp_degree: Option<f64>,
    pub rulers: Vec<Body>,
    pub occupants: Vec<Body>,
    /// Houses holding this house's rulers. `None` when no ruler could be
    /// placed, which is distinct from an empty destination list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flying_to: Option<Vec<u8>>,
}

impl House {
    pub fn new(sign: Option<Sign>, cusp_degree: Option<f64>) -> Self {
        Self {
            sign,
            cusp_degree,
            rulers: Vec::new(),
            occupants: Vec::new(),
            flying_to: None,
        }
    }
}

/// Build the twelve houses from the cusps and the placed bodies.
///
/// Traditional mode leaves Uranus, Neptune and Pluto out of both `rulers` and
/// `occupants`.
pub fn build_houses(ring: &CuspRing, bodies: &BodyMap, traditional: bool) -> HouseMap {
    let mut houses = HouseMap::new();

    for cusp in ring.cusps() {
        let mut house = House::new(Some(cusp.sign), Some(cusp.degree));
        house.rulers = get_active_rulers(cusp.sign, traditional);
        house.occupants = bodies
            .iter()
            .filter(|(body, _)| !(traditional && body.is_outer()))
            .filter(|(_, data)| data.effective_house() == Some(cusp.house))
            .map(|(body, _)| *body)
            .collect();
        houses.insert(cusp.house, house);
    }

    houses
}
