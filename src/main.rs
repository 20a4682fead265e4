use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use fly_oracle::astro::{
    is_in_solunar_period, moon_phase, solunar_periods, solunar_rating_at,
};
use fly_oracle::catalog::builtin::builtin_patterns;
use fly_oracle::config::{Config, ConfigOverrides};
use fly_oracle::conditions::{
    ConditionInput, Location, TimeOfDay, WaterClarity, WaterFlow, WaterLevel, WeatherCondition,
};
use fly_oracle::engine::{EngineOptions, RecommendationEngine};
use fly_oracle::output::render_json;
use fly_oracle::output::table::{
    render_catalog_table, render_moon_table, render_solunar_table, render_suggestions_table,
};
use fly_oracle::providers::usage::InMemoryUsageService;
use fly_oracle::providers::water::UsgsWaterProvider;
use fly_oracle::providers::weather::OpenMeteoProvider;
use fly_oracle::providers::{
    CatalogStore, JsonFileCatalog, StaticCatalog, WaterGaugeProvider, WeatherProvider,
};
use fly_oracle::server::run_server;
use fly_oracle::types::RecommendationRequest;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "fly-oracle", about = "Condition-aware fly pattern recommendations")]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    /// Catalog JSON file; overrides the configured catalog.
    #[arg(long)]
    catalog: Option<String>,
    /// Identify as an authenticated caller.
    #[arg(long = "api-key")]
    api_key: Option<String>,
    /// Skip live weather/water lookups.
    #[arg(long = "no-live")]
    no_live: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Args, Clone, Default)]
struct ConditionArgs {
    #[arg(long)]
    weather: Option<String>,
    #[arg(long = "wind")]
    wind_speed_mph: Option<f64>,
    #[arg(long = "water-temp")]
    water_temperature_f: Option<f64>,
    #[arg(long)]
    clarity: Option<String>,
    #[arg(long)]
    level: Option<String>,
    #[arg(long)]
    flow: Option<String>,
    #[arg(long = "time-of-day")]
    time_of_day: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rank fly patterns for a location and conditions.
    Recommend {
        /// Water name, e.g. "Madison River".
        #[arg(long)]
        location: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
        /// Evaluation instant (RFC 3339); defaults to now.
        #[arg(long)]
        at: Option<DateTime<Utc>>,
        #[arg(long)]
        count: Option<usize>,
        #[command(flatten)]
        conditions: ConditionArgs,
    },
    /// Moon phase and feeding outlook.
    Moon {
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
    /// Solunar feeding windows for a day and place.
    Solunar {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List the active fly catalog.
    Catalog,
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    Config {
        #[arg(long)]
        init: bool,
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(Some(&config_path))?;
    config.apply_overrides(ConfigOverrides {
        catalog_path: cli.catalog.clone(),
        live_data: if cli.no_live { Some(false) } else { None },
        listen: None,
    });

    if matches!(cli.command, Commands::Config { .. }) {
        return handle_config_command(&cli.command, &config, &config_path);
    }
    if let Commands::Serve { host, port } = &cli.command {
        let bind = format!("{host}:{port}");
        let addr: SocketAddr = bind
            .parse()
            .map_err(|e| anyhow!("invalid bind address {bind}: {e}"))?;
        let engine = Arc::new(build_engine(&config));
        return run_server(config, engine, addr).await;
    }

    match &cli.command {
        Commands::Recommend {
            location,
            lat,
            lon,
            at,
            count,
            conditions,
        } => {
            let engine = build_engine(&config);
            let request = RecommendationRequest {
                conditions: condition_input(location, *lat, *lon, conditions)?,
                count: *count,
            };
            let now = at.unwrap_or_else(Utc::now);
            let response = engine
                .recommend_at(&request, cli.api_key.as_deref(), now)
                .await;
            if let Some(error) = &response.error {
                return Err(anyhow!("{error}"));
            }
            match cli.output {
                OutputFormat::Table => println!("{}", render_suggestions_table(&response)),
                OutputFormat::Json => println!("{}", render_json(&response)?),
            }
        }
        Commands::Moon { at } => {
            let moon = moon_phase(at.unwrap_or_else(Utc::now));
            match cli.output {
                OutputFormat::Table => println!("{}", render_moon_table(&moon)),
                OutputFormat::Json => println!("{}", render_json(&moon)?),
            }
        }
        Commands::Solunar { lat, lon, date } => {
            let now = Utc::now();
            let date = date.unwrap_or_else(|| now.date_naive());
            let periods = solunar_periods(date, *lat, *lon);
            let rating = solunar_rating_at(&periods, &moon_phase(now), now);
            match cli.output {
                OutputFormat::Table => {
                    println!("{}", render_solunar_table(&periods, Some(&rating)));
                }
                OutputFormat::Json => {
                    let status = is_in_solunar_period(&periods, now);
                    println!(
                        "{}",
                        render_json(&serde_json::json!({
                            "periods": periods,
                            "status": status,
                            "rating": rating,
                        }))?
                    );
                }
            }
        }
        Commands::Catalog => {
            let patterns = match config.resolved_catalog_path() {
                Some(path) => JsonFileCatalog::new(path).fetch_patterns().await?,
                None => builtin_patterns(),
            };
            match cli.output {
                OutputFormat::Table => println!("{}", render_catalog_table(&patterns)),
                OutputFormat::Json => println!("{}", render_json(&patterns)?),
            }
        }
        Commands::Config { .. } => {}
        Commands::Serve { .. } => unreachable!("serve command handled before dispatch"),
    }

    Ok(())
}

fn handle_config_command(command: &Commands, config: &Config, config_path: &PathBuf) -> Result<()> {
    let Commands::Config { init, show } = command else {
        return Ok(());
    };
    if *init {
        Config::write_template(config_path)?;
        println!("Wrote config template to {}", config_path.display());
    }
    if *show || !*init {
        println!("{}", render_json(config)?);
    }
    Ok(())
}

fn build_engine(config: &Config) -> RecommendationEngine {
    let catalog: Arc<dyn CatalogStore> = match config.resolved_catalog_path() {
        Some(path) => Arc::new(JsonFileCatalog::new(path)),
        None => Arc::new(StaticCatalog::builtin()),
    };
    let usage = Arc::new(InMemoryUsageService::new(config.quota.daily_limit));

    let mut engine = RecommendationEngine::new(catalog, usage).with_options(EngineOptions {
        provider_timeout: Duration::from_secs(config.providers.timeout_secs.max(1)),
        gauge_radius_miles: config.providers.water_radius_miles,
        free_tier_max: config.suggestions.free_tier_max.max(1),
        authenticated_max: config.suggestions.authenticated_max.max(1),
    });
    if config.providers.live_data {
        let weather: Arc<dyn WeatherProvider> =
            Arc::new(OpenMeteoProvider::new(&config.providers.weather_base_url));
        let water: Arc<dyn WaterGaugeProvider> =
            Arc::new(UsgsWaterProvider::new(&config.providers.water_base_url));
        engine = engine
            .with_weather_provider(weather)
            .with_water_provider(water);
    }
    engine
}

fn condition_input(
    location: &str,
    lat: f64,
    lon: f64,
    args: &ConditionArgs,
) -> Result<ConditionInput> {
    Ok(ConditionInput {
        location: Some(Location::new(location, lat, lon)),
        weather: args.weather.as_deref().map(parse_weather).transpose()?,
        wind_speed_mph: args.wind_speed_mph,
        water_temperature_f: args.water_temperature_f,
        water_clarity: args.clarity.as_deref().map(parse_clarity).transpose()?,
        water_level: args.level.as_deref().map(parse_level).transpose()?,
        water_flow: args.flow.as_deref().map(parse_flow).transpose()?,
        time_of_day: args
            .time_of_day
            .as_deref()
            .map(parse_time_of_day)
            .transpose()?,
        ..ConditionInput::default()
    })
}

fn parse_weather(raw: &str) -> Result<WeatherCondition> {
    match raw.to_lowercase().as_str() {
        "sunny" => Ok(WeatherCondition::Sunny),
        "cloudy" => Ok(WeatherCondition::Cloudy),
        "overcast" => Ok(WeatherCondition::Overcast),
        "rainy" => Ok(WeatherCondition::Rainy),
        "stormy" => Ok(WeatherCondition::Stormy),
        "foggy" => Ok(WeatherCondition::Foggy),
        other => Err(anyhow!("unknown weather: {other}")),
    }
}

fn parse_clarity(raw: &str) -> Result<WaterClarity> {
    match raw.to_lowercase().as_str() {
        "clear" => Ok(WaterClarity::Clear),
        "slightly-murky" | "slightly_murky" => Ok(WaterClarity::SlightlyMurky),
        "murky" => Ok(WaterClarity::Murky),
        "very-murky" | "very_murky" => Ok(WaterClarity::VeryMurky),
        other => Err(anyhow!("unknown clarity: {other}")),
    }
}

fn parse_level(raw: &str) -> Result<WaterLevel> {
    match raw.to_lowercase().as_str() {
        "low" => Ok(WaterLevel::Low),
        "moderate" | "normal" => Ok(WaterLevel::Moderate),
        "high" => Ok(WaterLevel::High),
        other => Err(anyhow!("unknown level: {other}")),
    }
}

fn parse_flow(raw: &str) -> Result<WaterFlow> {
    match raw.to_lowercase().as_str() {
        "slow" => Ok(WaterFlow::Slow),
        "moderate" => Ok(WaterFlow::Moderate),
        "fast" => Ok(WaterFlow::Fast),
        other => Err(anyhow!("unknown flow: {other}")),
    }
}

fn parse_time_of_day(raw: &str) -> Result<TimeOfDay> {
    match raw.to_lowercase().as_str() {
        "dawn" => Ok(TimeOfDay::Dawn),
        "morning" => Ok(TimeOfDay::Morning),
        "midday" => Ok(TimeOfDay::Midday),
        "afternoon" => Ok(TimeOfDay::Afternoon),
        "dusk" => Ok(TimeOfDay::Dusk),
        "night" => Ok(TimeOfDay::Night),
        other => Err(anyhow!("unknown time of day: {other}")),
    }
}
