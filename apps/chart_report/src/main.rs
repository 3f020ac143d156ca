use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use urania::{AnalysisOptions, ChartAnalyzer, ChartInput};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Decoded chart JSON (cusps, planets, aspects, features).
    #[arg(long)]
    input: PathBuf,

    /// Config file (otherwise configs/urania.toml, then built-in defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Early-cusp threshold in degrees. Overrides the config.
    #[arg(long)]
    orb: Option<f64>,

    /// Leave Uranus, Neptune and Pluto out of rulers and occupants.
    #[arg(long, default_value_t = false)]
    traditional: bool,

    /// Report both houses of a ruler moved by the early-cusp rule.
    #[arg(long, default_value_t = false)]
    dual_flying_house: bool,

    /// Pretty-print the output JSON.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn load_options(args: &Args) -> anyhow::Result<AnalysisOptions> {
    let mut options = match &args.config {
        Some(path) => urania_config::load_analysis_options_from(path)?,
        None => match urania_config::read_config_toml_text() {
            Ok(text) => urania_config::parse_analysis_options(&text)?,
            Err(e) => {
                log::warn!("{e}; using default analysis options");
                AnalysisOptions::default()
            }
        },
    };

    if let Some(orb) = args.orb {
        options.orb = orb;
    }
    options.traditional |= args.traditional;
    options.use_dual_flying_house |= args.dual_flying_house;
    Ok(options)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let options = load_options(&args)?;
    log::debug!("analysis options: {:?}", options);

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read chart {}", args.input.display()))?;
    let input: ChartInput = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse chart {}", args.input.display()))?;

    let analysis = ChartAnalyzer::new(options)?
        .analyze(&input)
        .with_context(|| format!("Failed to analyze chart {}", args.input.display()))?;

    for diagnostic in &analysis.diagnostics {
        log::info!("{:?}", diagnostic);
    }

    let out = if args.pretty {
        serde_json::to_string_pretty(&analysis)?
    } else {
        serde_json::to_string(&analysis)?
    };
    println!("{out}");
    Ok(())
}
