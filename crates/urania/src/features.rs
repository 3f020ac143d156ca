//! Chart feature lines.
//!
//! The chart source lists free-text features. Lines citing domicile or
//! exaltation describe reception between bodies and are tagged; every line is
//! kept with its text untouched.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReceptionDignity {
    Domicile,
    Exaltation,
}

impl ReceptionDignity {
    fn keyword(self) -> &'static str {
        match self {
            ReceptionDignity::Domicile => "domicile",
            ReceptionDignity::Exaltation => "exaltation",
        }
    }
}

const RECEPTION_DIGNITIES: [ReceptionDignity; 2] =
    [ReceptionDignity::Domicile, ReceptionDignity::Exaltation];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reception {
    pub dignities: Vec<ReceptionDignity>,
    pub mutual: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureLine {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reception: Option<Reception>,
}

pub fn classify_feature(line: &str) -> FeatureLine {
    let lowered = line.to_lowercase();
    let dignities: Vec<ReceptionDignity> = RECEPTION_DIGNITIES
        .iter()
        .copied()
        .filter(|dignity| lowered.contains(dignity.keyword()))
        .collect();

    let reception = (!dignities.is_empty()).then(|| Reception {
        dignities,
        mutual: lowered.contains("mutual"),
    });

    FeatureLine {
        text: line.to_string(),
        reception,
    }
}

pub fn classify_features<I, S>(lines: I) -> Vec<FeatureLine>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| classify_feature(line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reception_line_is_tagged() {
        let feature = classify_feature("Mars in domicile of Venus");
        assert_eq!(feature.text, "Mars in domicile of Venus");
        let reception = feature.reception.unwrap();
        assert_eq!(reception.dignities, vec![ReceptionDignity::Domicile]);
        assert!(!reception.mutual);
    }

    #[test]
    fn test_mutual_reception_with_both_dignities() {
        let feature = classify_feature("Mutual reception: Moon Exaltation / Venus Domicile");
        let reception = feature.reception.unwrap();
        assert_eq!(
            reception.dignities,
            vec![ReceptionDignity::Domicile, ReceptionDignity::Exaltation]
        );
        assert!(reception.mutual);
    }

    #[test]
    fn test_other_lines_pass_through() {
        let features = classify_features(["Sun is oriental", ""]);
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].text, "Sun is oriental");
        assert!(features.iter().all(|f| f.reception.is_none()));
    }
}
