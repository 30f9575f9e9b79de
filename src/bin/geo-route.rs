use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use geo_route::catalog::{parse_selection, Catalog};
use geo_route::local_search::TwoOptOptions;
use geo_route::models::{PriceConfig, DEFAULT_CURRENCY, DEFAULT_PRICE_PER_UNIT};
use geo_route::planner::{plan_route, PlannedTrip};

fn cli() -> Command {
    Command::new("geo-route")
        .about("Plans a low-cost route between Latin American cities")
        .arg(
            Arg::new("cities")
                .long("cities")
                .value_name("LIST")
                .help("Comma-separated cities to visit, starting with the first; omit for the interactive menu"),
        )
        .arg(
            Arg::new("currency")
                .long("currency")
                .value_name("CURRENCY")
                .help("Currency label for costs [default: USD]"),
        )
        .arg(
            Arg::new("price")
                .long("price")
                .value_name("PRICE")
                .help("Price per kilometer [default: 0.5]"),
        )
        .arg(
            Arg::new("max-passes")
                .long("max-passes")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help("Stop 2-opt after N passes"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print reports as JSON"),
        )
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

/// Parses a price answer, falling back to the default on blank or bad input.
///
/// The fallback notice goes to `notices`, never to the report stream.
fn parse_price(text: Option<&str>, notices: &mut impl Write) -> f64 {
    let text = text.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return DEFAULT_PRICE_PER_UNIT;
    }
    match text.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => price,
        _ => {
            warn!(input = text, "invalid price, using {DEFAULT_PRICE_PER_UNIT}");
            // a failed notice write is not worth aborting the request
            let _ = writeln!(notices, "Invalid price, using {DEFAULT_PRICE_PER_UNIT}");
            DEFAULT_PRICE_PER_UNIT
        }
    }
}

fn price_config(
    currency: Option<&str>,
    price: Option<&str>,
    notices: &mut impl Write,
) -> Result<PriceConfig, Box<dyn Error>> {
    let currency = currency
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CURRENCY);
    Ok(PriceConfig::new(currency, parse_price(price, notices))?)
}

struct Session {
    price: PriceConfig,
    options: TwoOptOptions,
    json: bool,
}

impl Session {
    fn plan(&self, selection: &str) -> Result<(), Box<dyn Error>> {
        let names = parse_selection(selection);
        let trip = plan_route(Catalog::latam(), &names, self.price.clone(), self.options)?;
        self.print(&trip)
    }

    fn print(&self, trip: &PlannedTrip) -> Result<(), Box<dyn Error>> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(trip)?);
        } else {
            println!("\nInitial route (nearest neighbor):");
            println!("{}", trip.initial_report);
            println!("\nOptimized route:");
            println!("{}", trip.optimized_report);
        }
        Ok(())
    }
}

fn list_cities() {
    println!("\nAvailable cities:");
    for name in Catalog::latam().sorted_names() {
        println!(" - {name}");
    }
}

/// Prints `message` and reads one trimmed line; `None` at end of input.
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    lines.next().transpose().map(|line| line.map(|l| l.trim().to_string()))
}

fn interactive(matches: &ArgMatches, options: TwoOptOptions, json: bool) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let currency = match matches.get_one::<String>("currency") {
        Some(c) => Some(c.clone()),
        None => prompt(&mut lines, "Currency (default USD): ")?,
    };
    let price = match matches.get_one::<String>("price") {
        Some(p) => Some(p.clone()),
        None => prompt(&mut lines, "Price per km (default 0.5): ")?,
    };
    let session = Session {
        price: price_config(currency.as_deref(), price.as_deref(), &mut io::stderr())?,
        options,
        json,
    };

    println!("Best route in LATAM");
    loop {
        println!("\nMenu:");
        println!(" 1 - Create route");
        println!(" 2 - Show available cities");
        println!(" 0 - Exit");
        let Some(choice) = prompt(&mut lines, "Option: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => {
                list_cities();
                let Some(selection) = prompt(
                    &mut lines,
                    "\nCities to visit (at least 2, comma-separated): ",
                )?
                else {
                    break;
                };
                if let Err(e) = session.plan(&selection) {
                    println!("Error: {e}");
                }
            }
            "2" => list_cities(),
            "0" => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid option."),
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let matches = cli().get_matches();

    let options = TwoOptOptions {
        max_passes: matches.get_one::<usize>("max-passes").copied(),
    };
    let json = matches.get_flag("json");

    match matches.get_one::<String>("cities") {
        Some(selection) => {
            let session = Session {
                price: price_config(
                    matches.get_one::<String>("currency").map(String::as_str),
                    matches.get_one::<String>("price").map(String::as_str),
                    &mut io::stderr(),
                )?,
                options,
                json,
            };
            session.plan(selection)
        }
        None => interactive(&matches, options, json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn test_parse_price() {
        let mut notices: Vec<u8> = Vec::new();
        assert_eq!(parse_price(None, &mut notices), 0.5);
        assert_eq!(parse_price(Some("  "), &mut notices), 0.5);
        assert_eq!(parse_price(Some(" 1.25 "), &mut notices), 1.25);
        assert!(notices.is_empty());
        assert_eq!(parse_price(Some("abc"), &mut notices), 0.5);
        assert_eq!(parse_price(Some("-3"), &mut notices), 0.5);
        assert_eq!(
            String::from_utf8(notices).expect("utf8"),
            "Invalid price, using 0.5\nInvalid price, using 0.5\n"
        );
    }

    #[test]
    fn test_price_config_defaults() {
        let mut notices: Vec<u8> = Vec::new();
        let price = price_config(Some(" "), None, &mut notices).expect("valid");
        assert_eq!(price, PriceConfig::default());
        let price = price_config(Some("COP"), Some("1200"), &mut notices).expect("valid");
        assert_eq!(price.currency(), "COP");
        assert_eq!(price.price_per_unit(), 1200.0);
        assert!(notices.is_empty());
    }

    #[test]
    fn test_bad_price_notice_stays_off_report_stream() {
        // the notice lands in the writer handed in, which main binds to stderr
        let mut notices: Vec<u8> = Vec::new();
        let price = price_config(Some("USD"), Some("abc"), &mut notices).expect("valid");
        assert_eq!(price, PriceConfig::default());
        assert!(!notices.is_empty());
    }

    #[test]
    fn test_cli_parses_flags() {
        let matches = cli()
            .try_get_matches_from(["geo-route", "--cities", "Lima,Quito", "--max-passes", "3", "--json"])
            .expect("valid args");
        assert_eq!(matches.get_one::<String>("cities").map(String::as_str), Some("Lima,Quito"));
        assert_eq!(matches.get_one::<usize>("max-passes"), Some(&3));
        assert!(matches.get_flag("json"));
    }
}
