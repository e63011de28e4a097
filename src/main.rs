use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use voidmate::cli::{analyze_position, App, Cli, Commands, Config, ConfigCommand, PlayOptions};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            time_limit,
            removals,
            unlimited_removals,
            ascii,
            resume,
        } => {
            let app = App::with_config(Config::load_or_default());
            app.play(PlayOptions {
                time_limit_secs: time_limit,
                removals_per_player: removals,
                unlimited_removals,
                ascii,
                resume,
            })
            .await?;
        }
        Commands::Analyze {
            placement,
            to_move,
            removed,
            castling,
        } => match analyze_position(&placement, &to_move, &removed, &castling) {
            Ok(report) => println!("{}", report),
            Err(e) => {
                error!("Cannot analyze position: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Config { command } => match command {
            ConfigCommand::Path => {
                let path = Config::default_config_file()?;
                println!("{}", path.display());
                if !path.exists() {
                    println!("(not created yet, run 'voidmate config init')");
                }
            }
            ConfigCommand::Show => {
                let config = App::new()?.config;
                print!("{}", toml::to_string_pretty(&config)?);
            }
            ConfigCommand::Init => {
                let config = Config::default();
                config.save()?;
                info!("Wrote default configuration");
                println!("Wrote {}", Config::default_config_file()?.display());
            }
        },
    }

    Ok(())
}
