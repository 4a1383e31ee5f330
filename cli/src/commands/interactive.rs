use std::io;

use morse_common::config::Config;
use morse_core::session::{InteractiveSession, SessionSummary};
use tracing::debug;

pub fn interactive(cfg: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin().lock();
    let session = InteractiveSession::with_config(stdin, io::stdout(), cfg);

    let summary: SessionSummary = session.run()?;
    debug!(
        conversions = summary.conversions,
        rejected = summary.rejected_choices,
        table_loaded = summary.table_loaded,
        "session finished"
    );
    Ok(())
}
