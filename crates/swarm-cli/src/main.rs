use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use swarm_core::{
    AnthropicProvider, GoogleProvider, LlmProvider, OfflineProvider, OllamaProvider,
    RouterConfig, SwarmOrchestrator,
};

mod config;

use config::{ProviderKind, SwarmConfig};

const DEFAULT_TASK: &str = "Help me check today's weather";

#[derive(Parser)]
#[command(name = "swarm")]
#[command(version)]
#[command(about = "swarm: a router that delegates tasks to coder, reviewer and researcher agents")]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a task through the swarm
    Run {
        /// Task description (falls back to $AGENT_TASK)
        task: Vec<String>,

        /// Log delegation progress at info level
        #[arg(short, long)]
        verbose: bool,
    },

    /// Initialize config directory and default config
    Init,

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Run { task, verbose } => cmd_run(&cli.config, &task, verbose).await,
        Commands::Init => cmd_init().await,
        Commands::Config => cmd_config(&cli.config).await,
    }
}

async fn cmd_init() -> Result<()> {
    let config_dir = config::config_dir();
    tokio::fs::create_dir_all(&config_dir)
        .await
        .with_context(|| format!("Failed to create config dir: {}", config_dir.display()))?;

    let config_path = config_dir.join("config.toml");
    if config_path.exists() {
        warn!("Config already exists at {}", config_path.display());
    } else {
        let default_config = include_str!("../../../config/default.toml");
        tokio::fs::write(&config_path, default_config).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&config_path, std::fs::Permissions::from_mode(0o600))
                .await?;
        }
        info!("Created default config at {}", config_path.display());
    }

    println!("swarm initialized at {}", config_dir.display());
    println!("Edit {} to choose a provider and API key.", config_path.display());
    Ok(())
}

async fn cmd_config(config_path: &Option<PathBuf>) -> Result<()> {
    let cfg = SwarmConfig::load(config_path)?;
    println!("{}", toml::to_string_pretty(&cfg)?);
    Ok(())
}

async fn cmd_run(config_path: &Option<PathBuf>, task_args: &[String], verbose: bool) -> Result<()> {
    let cfg = SwarmConfig::load(config_path)?;
    let task = resolve_task(task_args, std::env::var("AGENT_TASK").ok());

    let provider = build_provider(&cfg);
    info!(
        "Using provider {} ({})",
        provider.provider_name(),
        provider.model()
    );

    let mut swarm = SwarmOrchestrator::with_router_config(
        provider,
        RouterConfig {
            use_llm_planning: cfg.router.use_llm_planning,
        },
    );

    info!("Task: {}", task);

    let cancel = CancellationToken::new();
    let cancel_on_signal = cancel.clone();
    let signal_watch = tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, cancelling run...");
            cancel_on_signal.cancel();
        }
    });

    let outcome = tokio::select! {
        _ = cancel.cancelled() => None,
        result = swarm.execute(&task, verbose) => Some(result),
    };

    signal_watch.abort();
    swarm.shutdown();

    match outcome {
        Some(result) => {
            let text = result.context("Swarm run failed")?;
            println!("{}", text);
            Ok(())
        }
        None => {
            println!("Run cancelled.");
            Ok(())
        }
    }
}

/// Task text from the command line, else `AGENT_TASK`, else the built-in default
fn resolve_task(args: &[String], env_task: Option<String>) -> String {
    let joined = args.join(" ");
    if !joined.trim().is_empty() {
        return joined.trim().to_string();
    }
    match env_task {
        Some(task) if !task.trim().is_empty() => task.trim().to_string(),
        _ => DEFAULT_TASK.to_string(),
    }
}

/// Provider selected in config; offline if the selected one has no API key
fn build_provider(cfg: &SwarmConfig) -> Arc<dyn LlmProvider> {
    let max_tokens = cfg.agent.max_tokens;
    match cfg.agent.provider {
        ProviderKind::Offline => Arc::new(OfflineProvider::new()),
        ProviderKind::Anthropic => {
            let anthropic = &cfg.providers.anthropic;
            if anthropic.api_key.trim().is_empty() {
                warn!("Anthropic API key is empty, falling back to the offline provider");
                return Arc::new(OfflineProvider::new());
            }
            Arc::new(
                AnthropicProvider::new(anthropic.api_key.clone(), Some(anthropic.model.clone()))
                    .with_max_tokens(max_tokens)
                    .with_base_url(anthropic.base_url.clone()),
            )
        }
        ProviderKind::Google => {
            let google = &cfg.providers.google;
            if google.api_key.trim().is_empty() {
                warn!("Google API key is empty, falling back to the offline provider");
                return Arc::new(OfflineProvider::new());
            }
            Arc::new(GoogleProvider::new(
                google.api_key.clone(),
                google.model.clone(),
                max_tokens,
            ))
        }
        ProviderKind::Ollama => {
            let ollama = &cfg.providers.ollama;
            Arc::new(
                OllamaProvider::new(ollama.base_url.clone(), ollama.model.clone())
                    .with_max_tokens(max_tokens),
            )
        }
    }
}
