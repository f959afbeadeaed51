use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;

/// Initialize logging.
///
/// With a log file everything from `Info` up goes to that file. Without one
/// only warnings reach stderr, which the alternate screen hides while the
/// game runs. `RUST_LOG` is applied on top of either default.
pub fn init(log_path: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::builder();
    match log_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder
                .filter_level(LevelFilter::Info)
                .target(env_logger::Target::Pipe(Box::new(file)))
                .write_style(env_logger::WriteStyle::Never);
        }
        None => {
            builder.filter_level(LevelFilter::Warn);
        }
    }
    builder.parse_default_env().try_init()?;
    Ok(())
}
