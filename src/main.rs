use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::Parser;
use log::info;
use solar_twilight::report::{render_table, DayReport, GeoCoordinate};
use solar_twilight::{Band, Error};

/// Sunrise, sunset and twilight times for a date and place.
///
/// Examples:
///   twilight --lat 51.5074 --lon -0.1278 --tz Europe/London
///   twilight --lat 69.6492 --lon 18.9553 --date 2026-06-21 --json
///   twilight --lat -33.8688 --lon 151.2093 --tz Australia/Sydney --band civil
#[derive(Parser)]
#[command(name = "twilight", version, about, long_about = None)]
struct Cli {
    /// Latitude (-90 to 90), north positive.
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude (-180 to 180), east positive.
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Date (YYYY-MM-DD). Defaults to today (UTC).
    #[arg(long, short = 'd')]
    date: Option<String>,

    /// IANA timezone for the output (e.g. Europe/Oslo). Defaults to UTC.
    #[arg(long)]
    tz: Option<String>,

    /// Only report one band: horizon, civil, nautical or astronomical.
    #[arg(long, value_parser = parse_band)]
    band: Option<Band>,

    /// Print JSON only, without the table.
    #[arg(long)]
    json: bool,
}

fn parse_band(s: &str) -> Result<Band, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

fn parse_date(s: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| Error::InvalidDate(s.to_string()))
}

fn parse_tz(s: &str) -> Result<Tz, Error> {
    s.parse().map_err(|_| Error::UnknownTimezone(s.to_string()))
}

fn run(cli: &Cli) -> Result<(), Error> {
    let location = GeoCoordinate::new(cli.lat, cli.lon)?;

    let date = match &cli.date {
        Some(d) => parse_date(d)?,
        None => Utc::now().date_naive(),
    };

    let tz = match &cli.tz {
        Some(name) => parse_tz(name)?,
        None => chrono_tz::UTC,
    };

    info!("computing {} at {:.4}, {:.4} in {}", date, location.latitude, location.longitude, tz);

    let report = match cli.band {
        Some(band) => DayReport::compute_bands(date, location, tz, &[band]),
        None => DayReport::compute(date, location, tz),
    };

    // Table to stderr, JSON to stdout
    if !cli.json {
        eprint!("{}", render_table(&report));
    }
    println!("{}", report.to_json()?);
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
