//! Non-interactive mode: fetch every panel once and print the views.

use std::io::{self, Write};
use std::sync::Arc;

use crate::config::Config;
use crate::fetch::{FetchStatus, ReqwestClient};
use crate::ui::panel::{build_panels, FetchPanel};

/// Fetch every configured resource once and write each view to `out`.
///
/// Returns `true` when no panel ended in an error.
pub fn run(config: &Config, seed: Option<u64>, out: &mut impl Write) -> io::Result<bool> {
    let client = ReqwestClient::from_defaults(&config.defaults).map_err(io::Error::other)?;
    let panels = build_panels(config, Arc::new(client), seed, None);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(fetch_and_print(&panels, out))
}

pub async fn fetch_and_print(
    panels: &[Arc<dyn FetchPanel>],
    out: &mut impl Write,
) -> io::Result<bool> {
    let mut all_ok = true;
    for panel in panels {
        let status = panel.fetch().await;
        all_ok &= status != FetchStatus::Error;

        writeln!(out, "== {} ==", panel.kind().title())?;
        for line in panel.view().plain_lines() {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(all_ok)
}
