use clap::{Parser, ValueEnum};
use skycast_core::Units;

/// Top-level CLI for the `skycast` command.
///
/// Examples:
///   skycast chicago
///   skycast new york -v
///   skycast london -c "United Kingdom" -u metric
///   skycast chicago -f --forecast-days 2.5
#[derive(Debug, Parser)]
#[command(
    name = "skycast",
    version,
    about = "gets weather and temperature info for a city"
)]
pub struct Cli {
    /// City name; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub city: Vec<String>,

    /// Country the city is in. Resolved to an ISO code and geocoded, so the
    /// lookup runs by coordinates instead of by name.
    #[arg(short, long)]
    pub country: Option<String>,

    /// Measurement system for the request and the output.
    #[arg(short, long, value_enum, default_value_t = UnitsCli::Imperial)]
    pub units: UnitsCli,

    /// Display additional output for the query.
    #[arg(short, long)]
    pub verbose: bool,

    /// Get the forecasted weather instead of current conditions.
    #[arg(short, long)]
    pub forecast: bool,

    /// Run with debug logging for more detailed information.
    #[arg(short, long)]
    pub debug: bool,

    /// Days of forecast to request, 0-5 in half-day steps.
    #[arg(
        long,
        visible_alias = "fd",
        default_value_t = 1.0,
        value_parser = parse_forecast_days
    )]
    pub forecast_days: f64,
}

impl Cli {
    /// The city words joined back into one name.
    pub fn city_name(&self) -> String {
        self.city.join(" ")
    }
}

/// CLI-facing units choice, mapped into the core type.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum UnitsCli {
    Metric,
    Imperial,
}

impl From<UnitsCli> for Units {
    fn from(units: UnitsCli) -> Self {
        match units {
            UnitsCli::Metric => Units::Metric,
            UnitsCli::Imperial => Units::Imperial,
        }
    }
}

fn parse_forecast_days(raw: &str) -> Result<f64, String> {
    let days: f64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;

    if !(0.0..=5.0).contains(&days) {
        return Err(format!("`{raw}` is out of range (0 to 5 days)"));
    }
    if (days * 2.0).fract() != 0.0 {
        return Err(format!("`{raw}` is not a half-day increment"));
    }

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("skycast").chain(args.iter().copied()))
    }

    #[test]
    fn city_is_required() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn single_word_city_parses() {
        let cli = parse(&["chicago"]).unwrap();
        assert_eq!(cli.city_name(), "chicago");
        assert_eq!(cli.units, UnitsCli::Imperial);
        assert!(!cli.verbose && !cli.forecast && !cli.debug);
    }

    #[test]
    fn multi_word_city_joins_with_spaces() {
        let cli = parse(&["new", "york"]).unwrap();
        assert_eq!(cli.city_name(), "new york");
    }

    #[test]
    fn all_flags_parse_together() {
        let cli = parse(&["chicago", "-v", "-d", "-f"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.debug);
        assert!(cli.forecast);
    }

    #[test]
    fn country_and_units_parse() {
        let cli = parse(&["london", "-c", "United Kingdom", "-u", "metric"]).unwrap();
        assert_eq!(cli.country.as_deref(), Some("United Kingdom"));
        assert_eq!(cli.units, UnitsCli::Metric);
    }

    #[test]
    fn units_reject_anything_but_metric_or_imperial() {
        assert!(parse(&["chicago", "-u", "kelvin"]).is_err());
    }

    #[rstest]
    #[case("0")]
    #[case("0.5")]
    #[case("2.5")]
    #[case("5")]
    fn valid_forecast_days_parse(#[case] days: &str) {
        let cli = parse(&["chicago", "--forecast-days", days]).unwrap();
        assert_eq!(cli.forecast_days, days.parse::<f64>().unwrap());
    }

    #[rstest]
    #[case("5.5")]
    #[case("-1")]
    #[case("0.3")]
    #[case("two")]
    fn invalid_forecast_days_are_rejected(#[case] days: &str) {
        assert!(parse(&["chicago", "--forecast-days", days]).is_err());
    }

    #[test]
    fn fd_alias_works() {
        let cli = parse(&["chicago", "--fd", "3"]).unwrap();
        assert_eq!(cli.forecast_days, 3.0);
    }

    #[test]
    fn forecast_days_default_is_one() {
        let cli = parse(&["chicago"]).unwrap();
        assert_eq!(cli.forecast_days, 1.0);
    }
}
