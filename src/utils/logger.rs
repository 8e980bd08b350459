use tracing_subscriber::fmt::{self, format};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type StderrLayer<S> = fmt::Layer<S, format::DefaultFields, format::Format, fn() -> std::io::Stderr>;

/// RUST_LOG 優先，否則使用預設等級
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// stdout 保留給服務回應，日誌一律寫到 stderr
fn stderr_layer<S>() -> StderrLayer<S> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr as fn() -> std::io::Stderr)
}

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        env_filter("ballot_bridge=debug,info")
    } else {
        env_filter("ballot_bridge=info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer().compact())
        .init();
}

/// JSON output for log shippers.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter("ballot_bridge=info"))
        .with(stderr_layer().json())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_compose_with_filter() {
        let compact = tracing_subscriber::registry()
            .with(env_filter("ballot_bridge=debug,info"))
            .with(stderr_layer().compact());
        tracing::subscriber::with_default(compact, || {
            tracing::info!("📝 compact logger ready");
        });

        let json = tracing_subscriber::registry()
            .with(env_filter("ballot_bridge=info"))
            .with(stderr_layer().json());
        tracing::subscriber::with_default(json, || {
            tracing::info!(operation = "addUser", "📝 json logger ready");
        });
    }
}
