pub mod config;
pub mod notifier;
pub mod orchestrator;
pub mod searcher;
pub mod selector;
pub mod store;
pub mod sync;
pub mod testing;
pub mod tier;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
    TrackedSolver,
};
pub use notifier::{DiscordNotifier, LogNotifier, Notifier, NotifierConfig, NotifyError};
pub use orchestrator::{DailyJob, JobReport, JobStatus};
pub use searcher::{ProblemQuery, ProblemSearcher, SearchError, SearchPage, SolvedAcSearcher};
pub use selector::{ProblemSelector, SelectedProblem, Selection};
pub use store::{SolvedProblemStore, SqliteSolvedStore, StoreError};
pub use sync::{SyncReport, Syncer};
