//! CLI entrypoint for roundtable
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use roundtable_application::{NoObserver, RunRoundUseCase, RunSessionUseCase, TopicRequest};
use roundtable_domain::{Topic, panel::catalog};
use roundtable_infrastructure::{ConfigLoader, ExecutorConfig, OpenAiExecutor};
use roundtable_presentation::{
    Cli, ConsoleFormatter, ConsoleReporter, ConsoleTopicSource, OutputFormat,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };

    // Resolve the taxonomy: CLI flag overrides the config file
    let taxonomy_id = cli
        .taxonomy
        .map(|t| t.id().to_string())
        .unwrap_or_else(|| config.session.taxonomy.clone());
    let taxonomy = match catalog::by_id(&taxonomy_id) {
        Some(t) => Arc::new(t),
        None => bail!(
            "unknown taxonomy '{}' (expected '{}' or '{}')",
            taxonomy_id,
            catalog::HATS,
            catalog::LENSES
        ),
    };

    let mut executor_config: ExecutorConfig = config.executor.clone().into();
    if let Some(model) = &cli.model {
        executor_config.model = model.clone();
    }
    let model_name = executor_config.model.clone();

    info!("Starting roundtable ({} / {})", taxonomy.id(), model_name);

    // === Dependency Injection ===
    let executor = Arc::new(OpenAiExecutor::from_env(executor_config)?);
    let topics = Arc::new(ConsoleTopicSource::new(config.repl.history_file.as_deref())?);

    if !cli.quiet {
        println!();
        println!(
            "Roundtable: {} panel, model {}. Ctrl-C at the prompt ends the session.",
            taxonomy.id(),
            model_name
        );
        println!();
    }

    // Initial topic: positional argument, or prompt for one
    let initial_topic = match cli.topic.and_then(Topic::try_new) {
        Some(topic) => topic,
        None => match topics.initial_topic()? {
            TopicRequest::New(text) => Topic::new(text),
            TopicRequest::Continue | TopicRequest::Cancelled => {
                println!("No topic given.");
                return Ok(());
            }
        },
    };

    // Ctrl-C outside the prompt cancels at the next round boundary
    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    let session = RunSessionUseCase::new(RunRoundUseCase::new(executor, taxonomy), topics);

    let transcript = if cli.quiet || !config.repl.show_progress {
        session.execute(initial_topic, cancel, &NoObserver).await?
    } else {
        let reporter = ConsoleReporter::new();
        session.execute(initial_topic, cancel, &reporter).await?
    };

    // Output the accumulated transcript
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&transcript),
        OutputFormat::Final => ConsoleFormatter::format_final(&transcript),
        OutputFormat::Json => ConsoleFormatter::format_json(&transcript),
    };

    println!("{}", output);

    Ok(())
}
