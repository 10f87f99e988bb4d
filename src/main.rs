use clap::{Parser, Subcommand, ValueEnum};
use geodb_cities::{ApiResponse, ClientConfig, GeoDbClient, QueryParams, DEFAULT_API_HOST};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// GeoDB Cities command-line client.
///
/// Examples:
///   geodb cities -q namePrefix=Stock -q limit=5
///   geodb city 3350606
///   geodb city-distance 3350606 3379274 -q distanceUnit=KM
///   geodb near-location +59.3293+018.0686 --kind places -q radius=50
///   geodb region US CA
///   geodb currencies FR
///   geodb get geo/adminDivisions/3301438/nearbyCities
#[derive(Parser)]
#[command(name = "geodb", version, about, long_about = None)]
struct Cli {
    /// RapidAPI key.
    #[arg(long, env = "RAPIDAPI_KEY", hide_env_values = true)]
    api_key: String,

    /// API host.
    #[arg(long, env = "RAPIDAPI_HOST", default_value = DEFAULT_API_HOST)]
    host: String,

    /// Request timeout in seconds.
    #[arg(long)]
    timeout: Option<u64>,

    /// Log requests and responses to stderr (same as RUST_LOG=geodb_cities=debug).
    #[arg(long, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find cities.
    Cities(Filters),
    /// City details.
    City {
        id: String,
        #[command(flatten)]
        filters: Filters,
    },
    /// Distance between two cities.
    CityDistance {
        from: String,
        to: String,
        #[command(flatten)]
        filters: Filters,
    },
    /// Cities, divisions or places near a city.
    NearCity {
        id: String,
        #[arg(long, value_enum, default_value = "cities")]
        kind: NearKind,
        #[command(flatten)]
        filters: Filters,
    },
    /// Cities, divisions or places near an administrative division.
    NearDivision {
        id: String,
        #[arg(long, value_enum, default_value = "cities")]
        kind: NearKind,
        #[command(flatten)]
        filters: Filters,
    },
    /// Cities, divisions or places near an ISO-6709 location (e.g. +40.7128-074.0060).
    NearLocation {
        #[arg(allow_hyphen_values = true)]
        location: String,
        #[arg(long, value_enum, default_value = "cities")]
        kind: NearKind,
        #[command(flatten)]
        filters: Filters,
    },
    /// Find countries.
    Countries(Filters),
    /// Country details.
    Country {
        id: String,
        #[command(flatten)]
        filters: Filters,
    },
    /// Regions of a country.
    Regions {
        country: String,
        #[command(flatten)]
        filters: Filters,
    },
    /// Region details.
    Region {
        country: String,
        region: String,
        #[command(flatten)]
        filters: Filters,
    },
    /// Find places.
    Places(Filters),
    /// Place details.
    Place {
        id: String,
        #[command(flatten)]
        filters: Filters,
    },
    /// Currencies of a country.
    Currencies {
        country: String,
        #[command(flatten)]
        filters: Filters,
    },
    /// Supported languages.
    Languages(Filters),
    /// Known locales.
    Locales(Filters),
    /// Known time-zones.
    Timezones(Filters),
    /// A single time-zone.
    Timezone {
        zone: String,
    },
    /// Raw GET on any path relative to the base URL.
    Get {
        path: String,
        #[command(flatten)]
        filters: Filters,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum NearKind {
    Cities,
    Divisions,
    Places,
}

#[derive(clap::Args, Default)]
struct Filters {
    /// Query filter as name=value. Repeatable.
    #[arg(short = 'q', long = "query", value_parser = parse_filter)]
    query: Vec<(String, String)>,
}

impl Filters {
    fn params(&self) -> QueryParams {
        self.query.iter().map(|(k, v)| (k.clone(), v)).collect()
    }
}

fn parse_filter(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("Invalid filter '{}'. Use name=value.", s)),
    }
}

fn main() {
    let cli = Cli::parse();

    // ── Logging ─────────────────────────────────────────────────

    let filter = if cli.verbose {
        EnvFilter::new("geodb_cities=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // ── Build client ────────────────────────────────────────────

    let mut config = ClientConfig::new(cli.api_key.clone()).with_host(cli.host.clone());
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let mut client = GeoDbClient::from_config(config);

    // ── Dispatch ────────────────────────────────────────────────

    let result = run(&client, &cli.command);
    client.close();

    let response = result.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    eprintln!("  {} {}  {}", response.status(), response.status_text(), response.url());
    println!("{}", render_body(&response));

    if !response.is_success() {
        std::process::exit(1);
    }
}

fn run(client: &GeoDbClient, command: &Command) -> geodb_cities::Result<ApiResponse> {
    match command {
        Command::Cities(f) => client.get_cities(&f.params()),
        Command::City { id, filters } => client.get_city_details(id, &filters.params()),
        Command::CityDistance { from, to, filters } => client.get_city_distance(from, to, &filters.params()),
        Command::NearCity { id, kind, filters } => {
            let p = filters.params();
            match kind {
                NearKind::Cities => client.get_cities_near_city(id, &p),
                NearKind::Divisions => client.get_admin_divisions_near_city(id, &p),
                NearKind::Places => client.get_places_near_city(id, &p),
            }
        }
        Command::NearDivision { id, kind, filters } => {
            let p = filters.params();
            match kind {
                NearKind::Cities => client.get_cities_near_division(id, &p),
                NearKind::Divisions => client.get_admin_divisions_near_division(id, &p),
                NearKind::Places => client.get_places_near_division(id, &p),
            }
        }
        Command::NearLocation { location, kind, filters } => {
            let p = filters.params();
            match kind {
                NearKind::Cities => client.get_cities_near_location(location, &p),
                NearKind::Divisions => client.get_admin_divisions_near_location(location, &p),
                NearKind::Places => client.get_places_near_location(location, &p),
            }
        }
        Command::Countries(f) => client.get_countries(&f.params()),
        Command::Country { id, filters } => client.get_country_details(id, &filters.params()),
        Command::Regions { country, filters } => client.get_country_regions(country, &filters.params()),
        Command::Region { country, region, filters } => {
            client.get_region_details(country, region, &filters.params())
        }
        Command::Places(f) => client.get_places(&f.params()),
        Command::Place { id, filters } => client.get_place_details(id, &filters.params()),
        Command::Currencies { country, filters } => client.get_currencies(country, &filters.params()),
        Command::Languages(f) => client.get_languages(&f.params()),
        Command::Locales(f) => client.get_locales(&f.params()),
        Command::Timezones(f) => client.get_timezones(&f.params()),
        Command::Timezone { zone } => client.get_timezone(zone),
        Command::Get { path, filters } => client.get(
            path.trim_start_matches('/'),
            geodb_cities::RequestOptions::new().params(filters.params()),
        ),
    }
}

/// Pretty JSON when the body parses, raw text otherwise.
fn render_body(response: &ApiResponse) -> String {
    match response.json::<serde_json::Value>() {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| response.text().to_string()),
        Err(_) => response.text().to_string(),
    }
}
