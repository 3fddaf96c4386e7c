mod cli;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dailyps_core::{
    load_config, validate_config, Config, DailyJob, DiscordNotifier, LogNotifier, Notifier,
    ProblemSearcher, ProblemSelector, SanitizedConfig, SolvedAcSearcher, SolvedProblemStore,
    SqliteSolvedStore, Syncer,
};

use cli::{Cli, Command};

/// Exit status when the selection could not be delivered.
const EXIT_NOTIFY_FAILED: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = cli.config_path();
    let loaded = load_config(&config_path);

    let json_logs = cli.log_json || loaded.as_ref().is_ok_and(|c| c.logging.json);
    init_logging(json_logs);

    info!("Loading configuration from {:?}", config_path);
    let config =
        loaded.with_context(|| format!("Failed to load config from {:?}", config_path))?;
    validate_config(&config).context("Configuration validation failed")?;

    info!(
        config = %serde_json::to_string(&SanitizedConfig::from(&config)).unwrap_or_default(),
        "Configuration loaded"
    );

    let components = Components::build(&config)?;

    match cli.command {
        Command::Run => run_job(&config, components).await,
        Command::Sync { handle } => run_sync(&config, components, handle).await,
        Command::Select => run_select(&config, components).await,
    }
}

/// Backends shared by every subcommand.
struct Components {
    searcher: Arc<dyn ProblemSearcher>,
    store: Arc<dyn SolvedProblemStore>,
}

impl Components {
    fn build(config: &Config) -> Result<Self> {
        let searcher: Arc<dyn ProblemSearcher> = Arc::new(
            SolvedAcSearcher::new(config.solvedac.clone())
                .context("Failed to create solved.ac client")?,
        );
        info!("Using search backend: {}", searcher.name());

        let store: Arc<dyn SolvedProblemStore> = Arc::new(
            SqliteSolvedStore::new(&config.database.path)
                .context("Failed to open solved-problem store")?,
        );
        info!(
            path = ?config.database.path,
            records = store.count().unwrap_or_default(),
            "Solved-problem store opened"
        );

        Ok(Self { searcher, store })
    }

    fn syncer(&self, config: &Config) -> Syncer {
        Syncer::new(
            Arc::clone(&self.searcher),
            Arc::clone(&self.store),
            config.sync.clone(),
        )
    }

    fn selector(&self, config: &Config) -> ProblemSelector {
        ProblemSelector::new(
            Arc::clone(&self.searcher),
            Arc::clone(&self.store),
            config.pool.clone(),
            config.solvers.clone(),
            config.selector.clone(),
        )
    }
}

fn build_notifier(config: &Config) -> Result<Arc<dyn Notifier>> {
    if config.notifier.webhook().is_some() {
        let notifier = DiscordNotifier::new(config.notifier.clone())
            .context("Failed to create Discord notifier")?;
        Ok(Arc::new(notifier))
    } else {
        warn!("No webhook configured, selections will only be logged");
        Ok(Arc::new(LogNotifier::new()))
    }
}

async fn run_job(config: &Config, components: Components) -> Result<ExitCode> {
    let notifier = build_notifier(config)?;
    info!("Using notifier: {}", notifier.name());

    let job = DailyJob::new(
        components.syncer(config),
        components.selector(config),
        notifier,
        config.solvers.clone(),
    );
    let report = job.run().await;

    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.status.is_failure() {
        return Ok(ExitCode::from(EXIT_NOTIFY_FAILED));
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_sync(
    config: &Config,
    components: Components,
    handle: Option<String>,
) -> Result<ExitCode> {
    let syncer = components.syncer(config);

    let reports = match handle {
        Some(handle) => {
            if !config.solvers.iter().any(|s| s.handle == handle) {
                warn!(handle = %handle, "Handle is not a tracked solver");
            }
            vec![syncer.sync_solver(&handle).await]
        }
        None => syncer.sync_all(&config.solvers).await,
    };

    for report in reports.iter().filter(|r| !r.is_complete()) {
        warn!(handle = %report.handle, outcome = ?report.outcome, "Sync ended early");
    }

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(ExitCode::SUCCESS)
}

async fn run_select(config: &Config, components: Components) -> Result<ExitCode> {
    let selection = components.selector(config).select_random().await;
    info!(
        selected = selection.len(),
        attempts = selection.attempts,
        "Dry-run selection finished"
    );

    println!("{}", serde_json::to_string_pretty(&selection)?);
    Ok(ExitCode::SUCCESS)
}
