use serde::Deserialize;
use std::fs;
use std::path::Path;
use urania::AnalysisOptions;

/// `[analysis]` table; every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
struct AnalysisToml {
    #[serde(default)]
    timeout_ms: Option<u64>,
    #[serde(default)]
    traditional: Option<bool>,
    #[serde(default)]
    use_dual_flying_house: Option<bool>,
    #[serde(default)]
    orb: Option<f64>,
    #[serde(default)]
    house_width: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    analysis: Option<AnalysisToml>,
}

/// Try the usual relative paths for `configs/urania.toml`.
pub fn read_config_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/urania.toml", "../../configs/urania.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load urania.toml from {:?}", paths);
}

pub fn parse_analysis_options(text: &str) -> anyhow::Result<AnalysisOptions> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))?;
    let AnalysisToml {
        timeout_ms,
        traditional,
        use_dual_flying_house,
        orb,
        house_width,
    } = root.analysis.unwrap_or_default();

    let defaults = AnalysisOptions::default();
    let options = AnalysisOptions {
        timeout_ms: timeout_ms.or(defaults.timeout_ms),
        traditional: traditional.unwrap_or(defaults.traditional),
        use_dual_flying_house: use_dual_flying_house.unwrap_or(defaults.use_dual_flying_house),
        orb: orb.unwrap_or(defaults.orb),
        house_width: house_width.unwrap_or(defaults.house_width),
    };

    options
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid [analysis] config in urania.toml: {e}"))?;
    Ok(options)
}

pub fn load_analysis_options_from(path: &Path) -> anyhow::Result<AnalysisOptions> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    parse_analysis_options(&text)
}

pub fn load_analysis_options() -> anyhow::Result<AnalysisOptions> {
    let text = read_config_toml_text()?;
    parse_analysis_options(&text)
}
