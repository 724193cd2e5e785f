/// nftower - check user records and sign in to a Tower server
use clap::{Parser, Subcommand};
use nftower_cli::{
    commands::{self, OutputFormat, Shape},
    CliConfig,
};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "nftower")]
#[command(about = "Tower user record tools", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Server URL, overriding the configuration
    #[arg(short, long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that JSON files hold conforming user records
    Check {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Expect the profile shape (no jwtAuthData)
        #[arg(long)]
        profile: bool,
    },
    /// Sign in and print the user record
    Login {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long, env = "NFTOWER_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Print the full record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the profile an access token belongs to
    Whoami {
        /// Access token
        #[arg(short, long, env = "NFTOWER_TOKEN", hide_env_values = true)]
        token: String,
        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(server) = cli.server {
        config.server.url = server;
    }
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Check { files, profile } => {
            let shape = if profile { Shape::Profile } else { Shape::UserData };
            let summary = commands::check::run(&files, shape, &mut stdout)?;
            if !summary.all_ok() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Login {
            username,
            password,
            json,
        } => {
            tracing::info!(url = %config.server.url, "Signing in");
            commands::account::login(
                &config,
                &username,
                password.as_deref(),
                output_format(json),
                &mut stdout,
            )
            .await?;
        }
        Commands::Whoami { token, json } => {
            commands::account::whoami(&config, &token, output_format(json), &mut stdout).await?;
        }
        Commands::Config => {
            write!(stdout, "{}", config.to_toml()?)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn output_format(json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        OutputFormat::Summary
    }
}
