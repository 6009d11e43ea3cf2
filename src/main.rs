use anyhow::{Context, Result};
use cascade::app::App;
use cascade::config::Config;
use cascade::menu::outline;
use clap::Parser;
use std::path::PathBuf;

/// Get the config file path (~/.config/cascade/config.toml)
fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("cascade")
        .join("config.toml"))
}

#[derive(Parser, Debug)]
#[command(name = "cascade", about = "Recursive dropdown menu for the terminal")]
struct Args {
    /// Config file to use instead of ~/.config/cascade/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the menu tree as an outline and exit
    #[arg(long)]
    print_tree: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    tracing::debug!(?config, "Effective configuration");

    let menu = config.menu_tree();
    if args.print_tree {
        print!("{}", outline(&menu));
        return Ok(());
    }

    let mut app = App::new(menu, &config);

    cascade::ui::run(&mut app).await?;

    Ok(())
}
