//! CLI entrypoint for the survey chatbot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use survey_application::{ResponseRouter, RouteOutcome, RouterSettings};
use survey_domain::{Model, SurveyDataset};
use survey_infrastructure::{ApiKey, ConfigLoader, FileConfig, GeminiLlmGateway, JsonlConversationLogger};
use survey_presentation::{
    ChatRepl, ChatServerState, Cli, ConsoleFormatter, ReplConfig, RunMode, ThinkingSpinner,
    app_router,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Question asked by `--self-check`
const SELF_CHECK_QUESTION: &str = "What is the household income according to the survey?";

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the key may come from the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        let details: Vec<String> = issues.iter().map(|i| format!("  - {}", i)).collect();
        bail!("Invalid configuration:\n{}", details.join("\n"));
    }

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_tracing(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting survey chatbot");

    // === Dependency Injection ===
    info!("Verifying API key...");
    let api_key = ApiKey::from_env().context("Cannot start without an API key")?;

    let gateway = Arc::new(
        GeminiLlmGateway::with_endpoint(
            api_key,
            config.model.generation_params(),
            &config.model.endpoint,
        )
        .context("Failed to configure the Gemini client")?,
    );

    let router = Arc::new(build_router(gateway, &config, cli.model.as_deref()).await?);

    match cli.run_mode() {
        RunMode::SelfCheck => self_check(&router).await,
        RunMode::Serve => {
            let bind = config
                .server
                .resolve_bind(cli.bind.as_deref())
                .context("Cannot start the HTTP server")?;
            serve(router, bind).await
        }
        RunMode::Single(question) => {
            let response = if cli.quiet {
                router.process_question(&question).await
            } else {
                let spinner = ThinkingSpinner::start("Thinking...");
                let response = router.process_question(&question).await;
                spinner.finish();
                response
            };
            println!("{}", response);
            Ok(())
        }
        RunMode::Interactive => {
            let repl_config = ReplConfig {
                show_progress: config.repl.show_progress && !cli.quiet,
                history_file: config
                    .repl
                    .history_file
                    .as_ref()
                    .map(PathBuf::from)
                    .or_else(ConfigLoader::default_history_path),
            };
            ChatRepl::new(router).with_config(repl_config).run().await?;
            Ok(())
        }
    }
}

/// Install the stderr subscriber and, when configured, the log file writer.
fn init_tracing(verbose: u8, log_file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let path = Path::new(path);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("chatbot.log");

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(name)
                .build(dir)
                .with_context(|| format!("Cannot open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(appender);

            // The file always records at least info, like a service log
            let file_level = if verbose >= 2 { level } else { "info" };
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new(file_level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .init();

    Ok(guard)
}

async fn build_router(
    gateway: Arc<GeminiLlmGateway>,
    config: &FileConfig,
    model_override: Option<&str>,
) -> Result<ResponseRouter> {
    let model = model_override
        .map(Model::from)
        .unwrap_or_else(|| config.model.model());

    let dataset = SurveyDataset::respondent();
    let knowledge = dataset
        .knowledge_table()
        .with_additional(config.knowledge.to_facts());

    let settings = RouterSettings::for_dataset(&dataset, model)
        .with_knowledge(knowledge)
        .with_behavior(config.model.behavior());

    info!("Initializing chat handler...");
    let mut router = ResponseRouter::start(gateway, settings)
        .await
        .context("Failed to initialize the chat handler")?;

    if let Some(path) = &config.logging.conversation_log {
        match JsonlConversationLogger::open(path) {
            Some(logger) => {
                info!("Conversation log: {}", logger.path().display());
                router = router.with_conversation_logger(Arc::new(logger));
            }
            None => warn!("Conversation logging disabled"),
        }
    }

    Ok(router)
}

async fn self_check(router: &ResponseRouter) -> Result<()> {
    info!("Running self-check");

    let outcome = router.route(SELF_CHECK_QUESTION).await;
    let passed = matches!(
        outcome,
        RouteOutcome::DirectAnswer { .. } | RouteOutcome::ModelAnswer(_)
    );
    let route = outcome.route_name();
    let response = outcome.into_response();

    println!(
        "{}",
        ConsoleFormatter::self_check(SELF_CHECK_QUESTION, &response, passed)
    );

    if !passed {
        bail!("Self-check failed: question was routed as {}", route);
    }
    Ok(())
}

async fn serve(router: Arc<ResponseRouter>, bind: SocketAddr) -> Result<()> {
    let app = app_router(ChatServerState::new(router));

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;

    info!("survey-chatbot server listening on {}", bind);
    info!("  GET  /health : liveness probe");
    info!("  POST /chat   : ask a question");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await
        .context("Server failed")?;

    Ok(())
}
