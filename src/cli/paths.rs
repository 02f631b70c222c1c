//! `paths` command.

use anyhow::Result;
use tola_collections::route::{collection_paths, single_segment_paths, two_segment_paths};
use tola_collections::utils::counted_s;
use tola_collections::{Site, log};

use super::args::PathKind;

/// Print static routes, one per line, optionally only one kind.
pub fn run_paths(site: &Site, kind: Option<PathKind>) -> Result<()> {
    let store = site.store();
    let wants = |k: PathKind| kind.is_none_or(|kind| kind == k);
    let mut total = 0;

    if wants(PathKind::Collections) {
        let paths = collection_paths(store);
        total += paths.len();
        paths.iter().for_each(|p| println!("{p}"));
    }
    if wants(PathKind::Two) {
        let paths = two_segment_paths(store);
        total += paths.len();
        paths.iter().for_each(|p| println!("{p}"));
    }
    if wants(PathKind::Single) {
        let paths = single_segment_paths(store);
        total += paths.len();
        paths.iter().for_each(|p| println!("{p}"));
    }

    log!("paths"; "{}", counted_s(total, "route"));
    Ok(())
}
