pub mod analyzer;
pub mod input;
pub mod model;
pub mod options;

pub use analyzer::{analyze_chart, ChartAnalyzer};
pub use input::{AspectRow, ChartInput, CuspRow, PlanetRow};
pub use model::{BodyMap, CelestialBody, ChartAnalysis};
pub use options::AnalysisOptions;
