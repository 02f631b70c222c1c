//! `check` command: configuration diagnostics plus URL conflicts.

use anyhow::{Result, bail};
use tola_collections::config::SiteConfig;
use tola_collections::route::{collect_url_sources, detect_conflicts, print_conflicts};
use tola_collections::utils::{counted, counted_s};
use tola_collections::{Site, log};

/// Fail on URL conflicts, otherwise print a summary.
///
/// Configuration errors never reach here and warnings were already printed:
/// [`SiteConfig::load`] handles both.
pub fn run_check(config: &SiteConfig, site: &Site) -> Result<()> {
    let conflicts = detect_conflicts(&collect_url_sources(site.store()));
    if !conflicts.is_empty() {
        print_conflicts(&conflicts);
        bail!("found {}", counted_s(conflicts.len(), "url conflict"));
    }

    let store = site.store();
    let items: usize = store.collections().iter().map(|c| c.len()).sum();
    log!("check"; "ok: {}, {}, {}, {}",
        counted_s(store.collections().len(), "collection"),
        counted_s(items, "item"),
        counted(site.queries().definitions().len(), "query", "queries"),
        counted_s(config.diagnose().warnings().len(), "warning"));
    Ok(())
}
