use sprach_config::SprachConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `sprach config`.
pub fn handle(config: &SprachConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(config, flags.format)
}
