//! Routing: aliases, redirects, static paths and URL conflicts.
//!
//! | Module     | Purpose                                           |
//! |------------|---------------------------------------------------|
//! | `alias`    | `redirect-from` lookup tables                     |
//! | `redirect` | Two- and single-segment path resolution           |
//! | `paths`    | Static route lists                                |
//! | `conflict` | URLs claimed more than once                       |

mod alias;
mod conflict;
mod paths;
mod redirect;

pub use alias::AliasIndex;
pub use conflict::{UrlConflict, UrlSourceMap, collect_url_sources, detect_conflicts, print_conflicts};
pub use paths::{TwoSegmentPath, collection_paths, single_segment_paths, two_segment_paths};
pub use redirect::{NOT_FOUND, Redirect, Redirector};
