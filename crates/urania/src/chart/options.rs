use crate::error::ChartError;
use crate::houses::{FlyingHouseOptions, DEFAULT_HOUSE_ORB};
use crate::patterns::{DEFAULT_HOUSE_WIDTH, DEFAULT_PATTERN_EXCLUSIONS};
use crate::zodiac::Body;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Request timeout for the chart source. Not used by the analysis.
    pub timeout_ms: Option<u64>,
    /// Leave Uranus, Neptune and Pluto out of rulers and occupants.
    pub traditional: bool,
    #[serde(alias = "useDualFlyingHouse")]
    pub use_dual_flying_house: bool,
    /// Early-cusp threshold in degrees.
    pub orb: f64,
    /// Nominal house width for house stelliums.
    pub house_width: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            traditional: false,
            use_dual_flying_house: false,
            orb: DEFAULT_HOUSE_ORB,
            house_width: DEFAULT_HOUSE_WIDTH,
        }
    }
}

impl AnalysisOptions {
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.orb.is_finite() || self.orb < 0.0 {
            return Err(ChartError::invalid(format!(
                "orb must be a non-negative number, got {}",
                self.orb
            )));
        }
        if !self.house_width.is_finite() || self.house_width <= 0.0 || self.house_width > 360.0 {
            return Err(ChartError::invalid(format!(
                "house_width must be in (0, 360], got {}",
                self.house_width
            )));
        }
        Ok(())
    }

    pub fn flying_house_options(&self) -> FlyingHouseOptions {
        FlyingHouseOptions {
            traditional: self.traditional,
            use_dual_flying_house: self.use_dual_flying_house,
        }
    }

    /// Bodies left out of pattern geometry. The set does not depend on
    /// `traditional`.
    pub fn pattern_exclusions(&self) -> Vec<Body> {
        DEFAULT_PATTERN_EXCLUSIONS.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AnalysisOptions::default();
        assert_eq!(options.orb, 5.0);
        assert_eq!(options.house_width, 30.0);
        assert!(!options.traditional);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options: AnalysisOptions =
            serde_json::from_str(r#"{ "traditional": true, "useDualFlyingHouse": true }"#).unwrap();
        assert!(options.traditional);
        assert!(options.use_dual_flying_house);
        assert_eq!(options.orb, 5.0);
    }

    #[test]
    fn test_outer_planets_excluded_from_patterns_in_both_modes() {
        let modern = AnalysisOptions::default().pattern_exclusions();
        assert!(modern.contains(&Body::Pluto));
        assert!(modern.contains(&Body::Uranus));
        assert!(modern.contains(&Body::Ascendant));

        let traditional = AnalysisOptions {
            traditional: true,
            ..Default::default()
        };
        assert_eq!(traditional.pattern_exclusions(), modern);
        assert!(!modern.contains(&Body::Saturn));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let negative = AnalysisOptions {
            orb: -0.5,
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let zero_width = AnalysisOptions {
            house_width: 0.0,
            ..Default::default()
        };
        assert!(zero_width.validate().is_err());
    }
}
