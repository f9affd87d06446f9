use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use translator_backend::config::Config;
use translator_backend::form::{Phase, RelayClient, TranslatorForm};
use translator_backend::languages::SupportedLanguage;
use translator_backend::routes;
use translator_backend::state::AppState;

#[derive(Parser)]
#[command(name = "translator-backend", version, about = "Translation relay and client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the relay server (default)
    Serve,

    /// Translate text through a running relay
    Translate {
        /// Text to translate
        text: String,

        /// Source language code
        #[arg(long = "from", default_value = "spanish")]
        source: SupportedLanguage,

        /// Target language code
        #[arg(long = "to", default_value = "english")]
        target: SupportedLanguage,

        /// Relay base URL, defaults to the configured local server
        #[arg(long)]
        relay: Option<String>,

        /// Seconds to wait for the relay
        #[arg(long, default_value_t = 60)]
        timeout: u64,
    },

    /// List supported languages
    Languages,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("translator_backend=debug,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let (config, loaded_from) = Config::discover()?;
    match loaded_from {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!("No config file found, using defaults"),
    }

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Translate {
            text,
            source,
            target,
            relay,
            timeout,
        } => {
            let relay = relay.unwrap_or_else(|| format!("http://127.0.0.1:{}", config.server.port));
            translate_once(&relay, text, source, target, Duration::from_secs(timeout)).await
        }
        Command::Languages => {
            for lang in SupportedLanguage::ALL {
                println!("{:<12} {}", lang.code(), lang.display_name());
            }
            Ok(())
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Relaying translations to {}", config.upstream.endpoint);

    let app_state = AppState::new(config.clone())?;
    let app = routes::build_app(app_state);

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn translate_once(
    relay: &str,
    text: String,
    source: SupportedLanguage,
    target: SupportedLanguage,
    timeout: Duration,
) -> Result<()> {
    let client = RelayClient::new(relay, timeout)?;

    let mut form = TranslatorForm::new();
    form.set_text(text);
    form.set_source(source);
    form.set_target(target);

    match form.submit(&client).await {
        Phase::Succeeded(translated) => {
            println!("{}", translated);
            Ok(())
        }
        Phase::Failed(message) => anyhow::bail!("{}", message),
        other => anyhow::bail!("translation ended in unexpected state {:?}", other),
    }
}
