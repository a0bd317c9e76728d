use std::io;

use anyhow::{anyhow, Result};
use log::info;

use mass_rename::cli::{get_config, get_log_file, get_matches, get_verbosity, skip_confirmation};
use mass_rename::logging::init_logger;
use mass_rename::prompt::confirm;
use mass_rename::workflow::{mass_replace, LogReporter};

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let matches = get_matches();
    let config = get_config(&matches)?;

    let log_file = get_log_file(&matches)?;
    init_logger(get_verbosity(&matches), log_file.as_deref())?;

    config
        .validate()
        .map_err(|e| anyhow!("Cannot process {}: {}", config.root().display(), e))?;

    if !skip_confirmation(&matches) {
        let confirmed = confirm(&mut io::stdin().lock(), &mut io::stdout())?;
        if !confirmed {
            info!("Operation cancelled, nothing was changed.");
            return Ok(());
        }
    }

    let mut reporter = LogReporter;
    let stats = mass_replace(&config, &mut reporter)?;

    if !stats.has_changes() {
        info!("No occurrences of '{}' found.", config.rule.old());
    }
    info!("Summary: {stats}");

    Ok(())
}
