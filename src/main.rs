use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use umts_viz::output::make_plots;
use umts_viz::report::render_text;
use umts_viz::{run, ConfigOverrides, QosClass, SimConfig};

#[derive(Debug, Parser)]
#[command(author, version, about = "3G / UMTS radio network visualizer")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of users [1, 10]
    #[arg(long)]
    users: Option<usize>,

    /// Spreading factor [2, 16]
    #[arg(long)]
    spreading_factor: Option<usize>,

    /// User distance from cell A in km [0.1, 5.0]
    #[arg(long)]
    distance: Option<f64>,

    /// QoS class: conversational, streaming, interactive or background
    #[arg(long, value_parser = QosClass::from_str)]
    qos: Option<QosClass>,

    /// Random seed for reproducible draws
    #[arg(long)]
    seed: Option<u64>,

    /// Repeat the handover draw this many times and report cell A's win rate
    #[arg(long)]
    trials: Option<usize>,

    /// Directory for the SVG charts
    #[arg(long)]
    plot_dir: Option<PathBuf>,

    /// Print the run as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(error) = try_main(cli) {
        eprintln!("umts-viz failed: {error:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn try_main(cli: Cli) -> anyhow::Result<()> {
    let mut cfg = match &cli.config {
        Some(path) => SimConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SimConfig::default(),
    };

    cfg.apply_overrides(&ConfigOverrides {
        users: cli.users,
        spreading_factor: cli.spreading_factor,
        distance_km: cli.distance,
        qos_class: cli.qos,
        seed: cli.seed,
        handover_trials: cli.trials,
    });

    let params = cfg.validate()?;
    let mut rng = match cfg.seed {
        Some(seed) => {
            debug!(seed, "seeded generator");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let run = run(&params, &mut rng).with_win_rate(&mut rng, cfg.handover_trials);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&run)?);
    } else {
        println!("{}", render_text(&run));
    }

    if let Some(dir) = &cli.plot_dir {
        let files = make_plots(&run, dir)
            .with_context(|| format!("failed to write charts to {}", dir.display()))?;
        info!("Charts written to {}", files.output_dir.display());
        info!("Spreading plot: {}", files.spreading_path.display());
        info!("Power plot: {}", files.power_path.display());
        info!("Handover plot: {}", files.handover_path.display());
    }

    Ok(())
}
