//! Analysis of decoded natal charts: house placement with the early-cusp
//! rule, intercepted signs, flying houses and aspect patterns.

pub mod aspects;
pub mod chart;
pub mod error;
pub mod features;
pub mod houses;
pub mod patterns;
pub mod zodiac;

pub use chart::{analyze_chart, AnalysisOptions, ChartAnalysis, ChartAnalyzer, ChartInput};
pub use error::{ChartError, Diagnostic};
pub use zodiac::{Body, Sign};
