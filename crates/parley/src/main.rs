use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use parley::config::Config;
use parley::server::{AppState, build_app};
use parley_client::{Conversation, RelayClient, Target};
use parley_types::Provider;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "parley", version, about = "Relay chat conversations to hosted LLM providers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the relay server
    Serve {
        /// Path to the YAML config file
        #[arg(short, long, default_value = "parley.yaml")]
        config: PathBuf,
        /// Override the configured host
        #[arg(long)]
        host: Option<String>,
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Send a single prompt through a running relay
    Ask {
        #[command(flatten)]
        target: TargetArgs,
        /// Prompt to send
        prompt: String,
    },
    /// Interactive conversation through a running relay
    Chat {
        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Args)]
struct TargetArgs {
    /// Upstream provider (gemini, openai, groq, anthropic)
    #[arg(long)]
    provider: Provider,
    /// Model identifier, forwarded verbatim
    #[arg(long)]
    model: String,
    /// API key; defaults to the provider's environment variable
    #[arg(long)]
    api_key: Option<String>,
    /// Relay server URL
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server: String,
}

impl TargetArgs {
    fn into_parts(self) -> Result<(RelayClient, Target)> {
        let api_key = match self.api_key {
            Some(key) => key,
            None => {
                let var = self.provider.api_key_env();
                match std::env::var(var) {
                    Ok(key) => key,
                    Err(_) => bail!("no API key for {}: pass --api-key or set {var}", self.provider),
                }
            }
        };

        let target = Target {
            provider: self.provider,
            model: self.model,
            api_key,
        };
        Ok((RelayClient::new(self.server), target))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { config, host, port } => serve(config, host, port).await,
        Command::Ask { target, prompt } => ask(target, prompt).await,
        Command::Chat { target } => chat(target).await,
    }
}

async fn serve(config_path: PathBuf, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = Config::load(&config_path)
        .await
        .with_context(|| format!("loading {}", config_path.display()))?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let state = AppState::from_config(&config);
    let app = build_app(state, config.server.request_timeout_seconds);

    let bind_address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("binding {bind_address}"))?;
    info!(address = %bind_address, "relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("relay shut down");
    Ok(())
}

async fn ask(args: TargetArgs, prompt: String) -> Result<()> {
    let (client, target) = args.into_parts()?;
    let mut conversation = Conversation::new();

    match client.send_turn(&mut conversation, &target, prompt).await {
        Ok(reply) => {
            println!("{reply}");
            Ok(())
        }
        Err(e) => {
            tracing::debug!(error = %e, "turn failed");
            bail!("{}", e.user_message())
        }
    }
}

async fn chat(args: TargetArgs) -> Result<()> {
    let (client, target) = args.into_parts()?;
    let mut conversation = Conversation::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match client.send_turn(&mut conversation, &target, line).await {
            Ok(reply) => println!("{reply}\n"),
            Err(e) => {
                tracing::debug!(error = %e, "turn failed");
                eprintln!("{}\n", e.user_message());
            }
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("received shutdown signal");
}
