//! CLI entrypoint for supportbot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use supportbot_application::{
    AskQuestionInput, AskQuestionUseCase, ChatHistoryRepository, ChatHistoryUseCase,
    ContextRetriever, ConversationLogger, NoConversationLogger, ResolveAnswerUseCase,
};
use supportbot_domain::{LocalResponder, ThreadRngPicker};
use supportbot_infrastructure::config::FileLoggingConfig;
use supportbot_infrastructure::{
    ConfigLoader, FileConfig, GoogleSearchRetriever, JsonlChatHistory, JsonlConversationLogger,
    Severity, build_client, build_providers,
};
use supportbot_presentation::{
    ChatRepl, Cli, Command, ConsoleFormatter, ResolutionSpinner, join_question,
};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Used when the platform has no data directory.
const FALLBACK_HISTORY_FILE: &str = "supportbot-history.jsonl";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = init_logging(cli.verbose, &config.logging);

    info!("Starting supportbot");

    for issue in config.validate() {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }

    let Some(command) = cli.command else {
        bail!("No command given. Run `supportbot --help` for usage.");
    };

    let user = command
        .user()
        .map(str::to_string)
        .unwrap_or_else(|| config.history.default_user.clone());

    // === Dependency Injection ===
    let app = App::build(&config)?;

    match command {
        Command::Ask {
            question, quiet, ..
        } => {
            let spinner = ResolutionSpinner::start("Thinking...", !quiet);
            let result = app
                .ask
                .execute(AskQuestionInput::new(user, join_question(&question)))
                .await;
            spinner.finish();

            let output = result?;
            if !output.persisted {
                warn!("Answer was not saved to history");
            }
            println!("{}", ConsoleFormatter::format_answer(&output.record));
        }
        Command::Chat { quiet, .. } => {
            let repl = ChatRepl::new(app.ask, app.history, user)
                .with_progress(!quiet)
                .with_line_history(config.history.repl_history_path());

            repl.run().await.context("Chat session failed")?;
        }
        Command::History { limit, json, .. } => {
            let records = app.history.execute(&user, limit).await?;
            if json {
                println!("{}", ConsoleFormatter::format_history_json(&records));
            } else {
                print!("{}", ConsoleFormatter::format_history(&user, &records));
            }
        }
    }

    Ok(())
}

/// Use cases wired to their adapters.
struct App {
    ask: Arc<AskQuestionUseCase>,
    history: Arc<ChatHistoryUseCase>,
}

impl App {
    fn build(config: &FileConfig) -> Result<Self> {
        let client = build_client(&config.http).context("Failed to build HTTP client")?;

        let providers = build_providers(&client, &config.providers);
        let retriever: Arc<dyn ContextRetriever> =
            Arc::new(GoogleSearchRetriever::new(client, config.search.clone()));
        let logger = conversation_logger(&config.logging);

        let resolver =
            ResolveAnswerUseCase::new(providers, LocalResponder::new(Arc::new(ThreadRngPicker)))
                .with_retriever(retriever)
                .with_classifier(config.resolution.to_classifier())
                .with_params(config.resolution.to_params(&config.search))
                .with_conversation_logger(logger.clone());

        let history_path = config
            .history
            .resolved_path()
            .unwrap_or_else(|| PathBuf::from(FALLBACK_HISTORY_FILE));
        info!("Chat history: {}", history_path.display());
        let store: Arc<dyn ChatHistoryRepository> = Arc::new(JsonlChatHistory::new(history_path));

        Ok(Self {
            ask: Arc::new(
                AskQuestionUseCase::new(resolver, store.clone()).with_conversation_logger(logger),
            ),
            history: Arc::new(ChatHistoryUseCase::new(store)),
        })
    }
}

fn conversation_logger(config: &FileLoggingConfig) -> Arc<dyn ConversationLogger> {
    match config
        .conversation_log
        .as_ref()
        .and_then(JsonlConversationLogger::new)
    {
        Some(logger) => Arc::new(logger) as Arc<dyn ConversationLogger>,
        None => Arc::new(NoConversationLogger),
    }
}

/// Console logging by verbosity, plus a daily-rotated file when configured.
fn init_logging(verbose: u8, config: &FileLoggingConfig) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "supportbot.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(console)
        .with(file)
        .init();

    guard
}
