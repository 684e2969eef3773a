//! Config writer

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::report::Reporter;

/// A literal dash as output target means stdout.
pub fn is_stdout(path: &Path) -> bool {
    path == Path::new("-")
}

/// Write a config to a file or to stdout.
///
/// Interpolation placeholders stay unresolved in the persisted form. When
/// the target is stdout nothing but the serialized config is printed;
/// otherwise parent directories are created as needed and a hint naming
/// the next command is shown, unless silenced.
pub fn save_config(config: &Config, output_file: &Path, silent: bool) -> Result<()> {
    if is_stdout(output_file) {
        print!("{config}");
        return Ok(());
    }
    let msg = Reporter::new(silent);
    config.to_path(output_file)?;
    msg.good(&format!("Saved config to {}", output_file.display()));
    msg.text("You can now add your data and train your pipeline:");
    let file_name = output_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| output_file.display().to_string());
    msg.text(&format!(
        "palabra train {file_name} --paths.train ./train.pal --paths.dev ./dev.pal"
    ));
    Ok(())
}
