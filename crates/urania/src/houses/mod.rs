pub mod cusps;
pub mod flying;
pub mod interception;
pub mod placement;
pub mod table;

pub use cusps::{next_house, Cusp, CuspRing};
pub use flying::{resolve_flying_houses, FlyingHouseOptions};
pub use interception::{detect_interceptions, missing_signs, InterceptedChain, InterceptionResult};
pub use placement::{geometric_house, place_body, Placement, PlacementOutcome, DEFAULT_HOUSE_ORB};
pub use table::{build_houses, House, HouseMap};
