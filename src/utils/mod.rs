//! Small shared helpers.

mod plural;

pub use plural::{counted, counted_s, plural_s};
