mod app_state;
mod cli;

use std::path::Path;
use std::rc::Rc;

use taskdock_common::types::GroupId;
use taskdock_config::TaskdockConfig;
use taskdock_platform::PlatformAdapter;
use taskdock_taskbar::JsonGroupStore;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use app_state::{LogPopout, TaskdockApp};

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = taskdock_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- TaskDock crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("------------------------\n");

        default_hook(info);
    }));
}

/// `--log-level` wins over the config file. A bare level applies to the
/// taskdock crates; anything with `=` is used as a full directive.
fn log_directive(cli_level: Option<&str>, config: &TaskdockConfig) -> String {
    match cli_level {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("taskdock={level}"),
        None => format!("taskdock={}", config.logging.level.as_filter()),
    }
}

fn init_logging(directive: &str) {
    let parsed: Result<Directive, _> = directive.parse().or_else(|_| "taskdock=info".parse());
    let filter = match parsed {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Logging depends on the config, so load errors are reported after init.
    let loaded = match args.config.as_deref() {
        Some(path) => taskdock_config::load_config_from(Path::new(path)),
        None => taskdock_config::load_config(),
    };
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&log_directive(args.log_level.as_deref(), &config));

    tracing::info!("TaskDock v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Err(e) = loaded {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::debug!("effective config: {}", taskdock_config::config_to_json(&config));

    if let Err(e) = taskdock_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let store_path = match config.store.resolve_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::error!("No location for the group store: {e}");
            return;
        }
    };
    tracing::info!("Group store: {}", store_path.display());

    let adapter: Rc<dyn PlatformAdapter> = Rc::from(taskdock_platform::create_platform_adapter());
    let store = Rc::new(JsonGroupStore::new(&store_path));
    let mut app = TaskdockApp::new(
        config,
        adapter,
        store,
        Box::new(LogPopout::new()),
        Some(store_path),
    );

    match args.group {
        Some(id) => {
            let outcome = app.run_launch(&GroupId::from(id));
            tracing::info!("Launch finished: {outcome:?}");
        }
        None => {
            tracing::info!("Entering message loop");
            app.run();
        }
    }
    tracing::info!("Shutdown complete");
}
