use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use utmconvert::{from_latlon_with, to_latlon, ForwardOptions, HemisphereSpec};

/// Command-line arguments for utm-converter.
#[derive(Parser, Debug)]
#[command(author, version, about = "Converts between latitude/longitude and UTM coordinates.")]
struct Args {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert latitude/longitude in degrees to UTM.
    Latlon {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        #[arg(allow_negative_numbers = true)]
        longitude: f64,

        /// Project into this zone instead of the natural one.
        #[arg(long)]
        zone_number: Option<i32>,

        /// Accept coordinates a hair outside the UTM range.
        #[arg(long)]
        relaxed: bool,
    },
    /// Convert a UTM coordinate to latitude/longitude.
    Utm {
        #[arg(allow_negative_numbers = true)]
        easting: f64,

        #[arg(allow_negative_numbers = true)]
        northing: f64,

        zone_number: i32,

        /// Latitude band letter; give this or --northern/--southern.
        zone_letter: Option<char>,

        #[arg(long, conflicts_with = "southern")]
        northern: bool,

        #[arg(long)]
        southern: bool,

        /// Widen the easting/northing bounds by 100km.
        #[arg(long)]
        relaxed: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!(?args, "parsed arguments");

    match args.command {
        Command::Latlon { latitude, longitude, zone_number, relaxed } => {
            let options = ForwardOptions {
                force_zone_number: zone_number,
                strict: !relaxed,
            };
            let utm = from_latlon_with(latitude, longitude, options)
                .with_context(|| format!("cannot project {latitude} {longitude}"))?;

            println!(
                "{} {} {} {}",
                utm.easting(),
                utm.northing(),
                utm.zone_number(),
                utm.zone_letter(),
            );
        }
        Command::Utm { easting, northing, zone_number, zone_letter, northern, southern, relaxed } => {
            let northern = match (northern, southern) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let hemisphere = HemisphereSpec::from_parts(zone_letter, northern)?;

            let coord = to_latlon(easting, northing, zone_number, hemisphere, !relaxed)
                .with_context(|| format!("cannot convert {easting} {northing} zone {zone_number}"))?;

            println!("{coord}");
        }
    }

    Ok(())
}
