use crate::zodiac::{Body, Sign};
use serde::Serialize;

/// Three bodies mutually in trine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrandTrine {
    pub points: [Body; 3],
}

/// A grand trine plus a body opposing one of its vertices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kite {
    pub points: [Body; 4],
    pub vertex: Body,
    pub opposition_point: Body,
}

/// Two oppositions linked by four squares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrandCross {
    pub points: [Body; 4],
    pub opposition_pairs: [[Body; 2]; 2],
}

/// An opposition with both ends square to an apex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSquare {
    pub points: [Body; 3],
    pub opposition_points: [Body; 2],
    pub apex_point: Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StelliumKind {
    Sign,
    House,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StelliumLocation {
    Sign(Sign),
    House(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stellium {
    #[serde(rename = "type")]
    pub kind: StelliumKind,
    pub location: StelliumLocation,
    pub points: Vec<Body>,
    pub count: usize,
    /// House (for a sign group) or sign (for a house group) held by a strict
    /// majority of the members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_location: Option<StelliumLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSet {
    pub grand_trines: Vec<GrandTrine>,
    pub grand_crosses: Vec<GrandCross>,
    pub kites: Vec<Kite>,
    pub t_squares: Vec<TSquare>,
    pub stelliums: Vec<Stellium>,
}
