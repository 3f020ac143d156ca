use crate::aspects::{Aspect, AspectKind};
use crate::error::Diagnostic;
use crate::features::FeatureLine;
use crate::houses::{HouseMap, InterceptedChain, Placement};
use crate::patterns::PatternSet;
use crate::zodiac::{Body, Sign};
use serde::Serialize;
use std::collections::BTreeMap;

/// Bodies keyed in canonical order.
pub type BodyMap = BTreeMap<Body, CelestialBody>;

/// One body of the chart together with everything derived for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBody {
    pub sign: Sign,
    /// Degree within the sign, minutes folded in.
    pub longitude: f64,
    /// House reported by the chart source.
    pub house: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub aspects: Vec<Aspect>,
    #[serde(flatten)]
    pub placement: Option<Placement>,
}

impl CelestialBody {
    pub fn new(sign: Sign, longitude: f64) -> Self {
        Self {
            sign,
            longitude,
            house: None,
            score: None,
            aspects: Vec::new(),
            placement: None,
        }
    }

    pub fn has_aspect(&self, to: Body, kind: AspectKind) -> bool {
        self.aspects
            .iter()
            .any(|aspect| aspect.to == to && aspect.kind == kind)
    }

    /// Final house when placed, otherwise the reported house.
    pub fn effective_house(&self) -> Option<u8> {
        self.placement
            .map(|placement| placement.final_house)
            .or(self.house)
    }

    /// Absolute longitude, from the placement when available.
    pub fn absolute_degree(&self) -> f64 {
        match self.placement {
            Some(placement) => placement.absolute_degree,
            None => self.sign.start_longitude() + self.longitude,
        }
    }
}

/// Result of analyzing one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAnalysis {
    pub bodies: BodyMap,
    pub houses: HouseMap,
    pub intercepted_chains: Vec<InterceptedChain>,
    pub patterns: PatternSet,
    pub features: Vec<FeatureLine>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ChartAnalysis {
    pub fn body(&self, body: Body) -> Option<&CelestialBody> {
        self.bodies.get(&body)
    }

    pub fn house(&self, number: u8) -> Option<&crate::houses::House> {
        self.houses.get(&number)
    }
}
