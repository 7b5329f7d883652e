//! `ledgerlab` — runs the finance, inventory, healthcare, grading and store sessions.

mod config;
mod scenarios;

use config::AppConfig;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    ledgerlab_observability::init(&config.log);

    if config.grades_input.is_none() {
        tracing::warn!("LEDGERLAB_GRADES_INPUT not set; importing built-in sample grades");
    }

    scenarios::finance()?;
    scenarios::inventory();
    scenarios::healthcare();
    scenarios::grading(&config)?;
    scenarios::store();

    tracing::info!("all sessions finished");
    Ok(())
}
