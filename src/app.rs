use crate::adapters::display::{ConsoleDisplay, FileDisplay};
use crate::config::CliConfig;
use crate::core::bridge::FormBridge;
use crate::core::dispatch::Dispatcher;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Runs the command line request end to end. The error's `exit_code()` is the
/// process exit status: 1 for configuration problems, 2 for failed requests.
pub async fn run(config: &CliConfig) -> Result<()> {
    config.validate()?;

    let routes = config.load_routes()?;
    let form = config.load_form()?;
    tracing::info!("🎯 Target service: {}", routes.base_url);

    let operations = config.command.operations();
    match &config.output_dir {
        Some(dir) => {
            let bridge = FormBridge::new(form, FileDisplay::new(dir.clone()), routes);
            Dispatcher::new(bridge).submit(&operations).await
        }
        None => {
            let bridge = FormBridge::new(form, ConsoleDisplay, routes);
            Dispatcher::new(bridge).submit(&operations).await
        }
    }
}
