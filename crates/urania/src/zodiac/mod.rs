pub mod geometry;
pub mod glyphs;
pub mod rulers;
pub mod types;

pub use geometry::{
    absolute_longitude, forward_distance, normalize_degree_string, normalize_degrees, sign_index,
    sign_index_from_code, sign_of_longitude,
};
pub use rulers::{get_active_rulers, get_sign_rulers};
pub use types::{Body, Sign, SIGN_COUNT, SIGN_WIDTH};
