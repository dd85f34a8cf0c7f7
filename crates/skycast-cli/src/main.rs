use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

use skycast_core::country;
use skycast_core::geocode::GeocodeClient;
use skycast_core::{Location, Renderer, Units, WeatherClient, WeatherQuery};

use crate::cli::Cli;
use crate::config::ApiConfig;

mod cli;
mod config;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    let config = ApiConfig::load()?;

    run(args, config)
}

fn run(args: Cli, config: ApiConfig) -> anyhow::Result<()> {
    let city = args.city_name();
    let units: Units = args.units.into();

    // With a country we resolve coordinates first (two sequential calls);
    // otherwise the provider looks the city up by name directly.
    let location = match args.country.as_deref() {
        Some(country_name) => {
            let code = country::resolve(country_name)?;
            debug!("resolved country `{country_name}` to `{code}`");

            let geocoder = GeocodeClient::new(config.api_key.clone());
            let (lat, lon) = geocoder.lookup(&city, Some(code))?;
            Location::coords(lat, lon)
        }
        None => Location::named(city),
    };

    let client = WeatherClient::new(config.api_key);
    let renderer = Renderer::new(units, args.verbose);

    if args.forecast {
        let query = WeatherQuery::forecast(location, units, args.forecast_days);
        let series = client.forecast(&query)?;
        println!("{}", renderer.forecast(&series));
    } else {
        let query = WeatherQuery::current(location, units);
        let observation = client.current(&query)?;
        println!("{}", renderer.observation(&observation));
    }

    Ok(())
}

/// Initialize global tracing subscriber.
///
/// - Uses `RUST_LOG` if set (e.g. `RUST_LOG=skycast_cli=debug,skycast_core=trace`)
/// - Otherwise defaults per crate, raised to `debug` by the `-d` flag so
///   request URLs and raw response bodies get logged.
fn init_tracing(debug: bool) {
    let default = if debug {
        "skycast_cli=debug,skycast_core=debug"
    } else {
        "skycast_cli=info,skycast_core=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}
