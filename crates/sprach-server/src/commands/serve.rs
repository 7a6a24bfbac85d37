use sprach_config::SprachConfig;

use crate::bootstrap;
use crate::cli::root_commands::ServeArgs;
use crate::server::{self, AppState};

/// Handle `sprach serve`.
pub fn handle(args: &ServeArgs, mut config: SprachConfig) -> anyhow::Result<()> {
    if let Some(bind) = &args.bind {
        config.server.bind.clone_from(bind);
    }
    if let Some(workers) = args.workers {
        config.server.workers = workers;
    }
    config.server.validate()?;

    let deck = bootstrap::load_deck(&config)?;
    let evaluator = bootstrap::build_evaluator(&config, &deck.targets())?;

    server::run(AppState {
        evaluator,
        deck,
        server: config.server,
    })
}
