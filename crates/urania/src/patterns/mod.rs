pub mod combinations;
pub mod detector;
pub mod stellium;
pub mod types;

pub use combinations::{combinations, Combinations};
pub use detector::{PatternDetector, DEFAULT_PATTERN_EXCLUSIONS};
pub use stellium::{find_stelliums, DEFAULT_HOUSE_WIDTH, MIN_STELLIUM_COUNT, SIGN_STELLIUM_SPAN};
pub use types::{
    GrandCross, GrandTrine, Kite, PatternSet, Stellium, StelliumKind, StelliumLocation, TSquare,
};
