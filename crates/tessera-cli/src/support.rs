use serde_json::Value;
use std::fs;
use tessera_kernel::{Pipeline, PipelineSettings, ReturnPolicy};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Install a stderr fmt subscriber. `--log-level` wins over RUST_LOG.
pub fn init_logging(log_level: Option<&str>) {
    let filter = match log_level {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
            eprintln!("error: invalid log level `{directive}`: {e}");
            std::process::exit(1);
        }),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

pub fn parse_policy_or_exit(policy: &str) -> ReturnPolicy {
    policy.parse().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn load_settings_or_exit(path: &str) -> PipelineSettings {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error: failed to read {path}: {e}");
        std::process::exit(1);
    });
    PipelineSettings::from_toml_str(&text, path).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

/// Default pipeline, then the settings file (if any), then the policy flag.
pub fn build_pipeline_or_exit(config: Option<&str>, policy: Option<&str>) -> Pipeline {
    let mut pipeline = Pipeline::new();

    if let Some(path) = config {
        let settings = load_settings_or_exit(path);
        let resolved = settings.to_config().unwrap_or_else(|e| {
            eprintln!("error: {path}: {e}");
            std::process::exit(1);
        });
        pipeline.configure(&resolved);
        debug!(path, "applied pipeline settings");
    }

    if let Some(policy) = policy {
        pipeline.set_return_policy(parse_policy_or_exit(policy));
    }

    pipeline
}

pub fn print_json(payload: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}
