//! Fill a partial config with default values

use std::path::Path;

use super::save::{is_stdout, save_config};
use crate::config::{diff_strings, Config};
use crate::error::Result;
use crate::registry::{
    auto_fill, check_pretrain_readiness, distill_config, pretrain_config, sourced_components,
    validate,
};
use crate::report::Reporter;

/// Options for [`fill_config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FillOptions {
    pub distillation: bool,
    pub pretraining: bool,
    pub diff: bool,
    pub silent: bool,
}

/// Fill a partial config with all missing default values and write the
/// result to `output_file` (or stdout for `-`).
///
/// Returns both the original and the filled config for programmatic
/// callers. Filling an already-complete config is reported as a no-op.
pub fn fill_config(
    output_file: &Path,
    base_path: &Path,
    opts: &FillOptions,
) -> Result<(Config, Config)> {
    let no_print = is_stdout(output_file) || opts.silent;
    let msg = Reporter::new(no_print);
    let config = Config::from_path(base_path)?;
    let filled = auto_fill(&config)?;
    // Reload the filled result from its text form to be extra sure the
    // produced config is valid as written
    let mut filled: Config = filled.to_string().parse()?;
    validate(&filled)?;
    // Sourced components would have been replaced by instantiation, so
    // re-add them verbatim
    for name in sourced_components(&config) {
        let path = format!("components.{name}");
        if let Some(table) = config.section(&path) {
            filled.insert_section(path, table.clone());
        }
    }
    if opts.distillation {
        filled = distill_config().merge(&filled);
    }
    if opts.pretraining {
        check_pretrain_readiness(&filled, &msg);
        filled = pretrain_config().merge(&filled);
    }
    let before = config.to_string();
    let after = filled.to_string();
    if before == after {
        msg.warn("Nothing to auto-fill: base config is already complete");
    } else {
        msg.good("Auto-filled config with all values");
    }
    if opts.diff && !no_print {
        if before == after {
            msg.warn("No diff to show: nothing was auto-filled");
        } else {
            msg.divider("START CONFIG DIFF");
            println!();
            println!("{}", diff_strings(&before, &after));
            msg.divider("END CONFIG DIFF");
            println!();
        }
    }
    save_config(&filled, output_file, opts.silent)?;
    Ok((config, filled))
}
