use anyhow::{bail, Context};
use bust_odds_drivers::server::Server;
use bust_odds_drivers::{parse_config_from_file, Config};
use clap::Parser;

const DEFAULT_CONFIG_PATH: &str = "~/.bust_odds.yml";

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,

    /// Overrides the host in the config file
    #[arg(long)]
    host: Option<String>,

    /// Overrides the port in the config file
    #[arg(short, long)]
    port: Option<u16>,
}

/// Loads the config. Only the default config file may be absent, in which
/// case the built-in defaults are used.
fn load_config(args: &CommandLineArgs) -> anyhow::Result<Config> {
    if args.config != DEFAULT_CONFIG_PATH {
        return parse_config_from_file(&args.config)
            .with_context(|| format!("cannot load config {}", args.config));
    }

    let home_dir = home::home_dir().context("Cannot find home directory")?;
    let config_file_path = home_dir.join(".bust_odds.yml");
    if !config_file_path.exists() {
        return Ok(Config::default());
    }
    if config_file_path.is_dir() {
        bail!("{} should be a file rather than a directory", config_file_path.display());
    }
    parse_config_from_file(&config_file_path)
        .with_context(|| format!("cannot load config {}", config_file_path.display()))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = CommandLineArgs::parse();
    let mut config = load_config(&args)?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    let config = config;

    let level: log::LevelFilter = config.log_level()?.into();
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
    log::debug!("{:#?}", config);

    Server::run(&config.server)
        .await
        .context("HTTP server stopped with an error")
}
