use anyhow::Context;
use sprach_config::SprachConfig;
use sprach_core::responses::EvaluationResponse;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::EvaluateArgs;
use crate::output::output;

/// Handle `sprach evaluate`.
pub fn handle(args: &EvaluateArgs, config: &SprachConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let deck = bootstrap::load_deck(config)?;
    let target = match (&args.target, args.card) {
        (Some(target), _) => target.clone(),
        (None, Some(id)) => deck
            .get(id)
            .map(|card| card.target_german)
            .with_context(|| format!("flashcard {id} not found"))?,
        (None, None) => anyhow::bail!("either --target or --card is required"),
    };

    let evaluator = bootstrap::build_evaluator(config, &deck.targets())?;
    let outcome = evaluator.evaluate(&args.user, &target)?;
    output(&EvaluationResponse::from(outcome), flags.format)
}
