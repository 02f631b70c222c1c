//! `resolve` command.

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use tola_collections::Site;
use tola_collections::route::Redirect;

/// Resolve each path and print one line per path.
///
/// ```text
/// /service/web-design -> /services/web-design
/// /services/web-design (canonical)
/// /nowhere -> /404
/// ```
pub fn run_resolve(site: &Site, paths: &[String]) -> Result<()> {
    for path in paths {
        println!("{}", describe(path, &site.resolve_path(path)));
    }
    Ok(())
}

fn describe(path: &str, redirect: &Redirect) -> String {
    match redirect {
        Redirect::Canonical => {
            let note = "(canonical)";
            format!("{path} {}", note.if_supports_color(Stream::Stdout, |n| n.dimmed()))
        }
        Redirect::To(target) => {
            format!("{path} -> {}", target.if_supports_color(Stream::Stdout, |t| t.bright_green()))
        }
        Redirect::NotFound => {
            let target = redirect.target().unwrap_or_default();
            format!("{path} -> {}", target.if_supports_color(Stream::Stdout, |t| t.red()))
        }
    }
}
