//! Moneyness Explorer CLI
//!
//! Prints the readout and a payoff table for one set of inputs.
//!
//! Usage:
//!   cargo run --bin moneyness_cli -- --spot 130 --strike 100 --maturity 0.5
//!   cargo run --bin moneyness_cli -- --option-type put --spot 80 --json
//!
//! Environment:
//!   MONEYNESS_CONFIG - JSON config supplying defaults for omitted flags
//!                      (replaced by --config when given)
//!   MONEYNESS_LOG    - Log filter when RUST_LOG is unset (default: info),
//!                      applied with either config source

use clap::Parser;
use tracing::error;

use moneyness_explorer::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Spot price (S), 0-200
    #[arg(short, long)]
    spot: Option<f64>,

    /// Exercise price (X), 0-200
    #[arg(short = 'x', long)]
    strike: Option<f64>,

    /// Fraction of life remaining (T), 0-1
    #[arg(short = 't', long)]
    maturity: Option<f64>,

    /// call or put
    #[arg(short, long)]
    option_type: Option<OptionType>,

    /// Print every n-th price of the payoff curve
    #[arg(long, default_value_t = 10)]
    step: usize,

    /// Print the full snapshot as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// JSON config file (overrides MONEYNESS_CONFIG)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

fn main() {
    let args = Args::parse();

    let config = match ExplorerConfig::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            init_tracing("info");
            error!("config error: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(&config.log_filter);

    let initial = config.initial;
    let inputs = match Inputs::new(
        args.spot.unwrap_or(initial.spot),
        args.strike.unwrap_or(initial.strike),
        args.maturity.unwrap_or(initial.time_to_maturity),
        args.option_type.unwrap_or(initial.option_type),
    ) {
        Ok(i) => i,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    let engine = match MoneynessEngine::with_inputs(inputs) {
        Ok(engine) => engine,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    if args.json {
        match engine.snapshot().to_json_pretty() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("could not serialize snapshot: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print_report(&engine, args.step);
}

fn print_report(engine: &MoneynessEngine, step: usize) {
    let inputs = engine.inputs();
    let readout = engine.readout();

    let header = format!(
        "Option Moneyness Explorer [{} {}]",
        inputs.option_type,
        engine.moneyness().short_label()
    );
    println!("{header}");
    println!("{}\n", "=".repeat(header.len()));

    println!("Inputs:");
    println!("  Spot Price (S):        {}", inputs.spot);
    println!("  Exercise Price (X):    {}", inputs.strike);
    println!("  Time to Maturity (T):  {:.2}", inputs.time_to_maturity);
    println!("  Option Type:           {}\n", inputs.option_type);

    for line in readout.lines() {
        println!("  {line}");
    }
    println!("  Color:                 {}\n", engine.color());

    let series = engine.payoff_series();
    let marker = engine.marker();
    let scale = series.y_axis_max();

    println!(
        "{} Payoff Curve, X = {} ({} points, S in [{}, {}]):",
        series.option_type(),
        series.strike(),
        series.len(),
        series.low(),
        series.high()
    );
    println!("   Price |  Payoff");
    println!("---------+--------------------------------------------");

    for point in series.sampled(step) {
        let width = if scale > 0.0 {
            ((point.payoff / scale) * 32.0).round() as usize
        } else {
            0
        };
        println!(
            "  {:>6.0} | {:>7.2} {}",
            point.price,
            point.payoff,
            "#".repeat(width)
        );
    }

    if let Some(marker) = series.point_at(marker.price) {
        println!(
            "\nSpot marker at ({}, {:.2})",
            marker.price, marker.payoff
        );
    } else {
        println!(
            "\nSpot {} lies outside the charted window",
            marker.price
        );
    }
}
