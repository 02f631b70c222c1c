//! Counted nouns for log and report lines.

/// `"s"` unless `n` is exactly one.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `"1 entry"`, `"3 entries"`: explicit singular and plural forms.
pub fn counted(n: usize, singular: &str, plural: &str) -> String {
    format!("{n} {}", if n == 1 { singular } else { plural })
}

/// `"1 warning"`, `"2 warnings"`: regular plural with `s`.
#[inline]
pub fn counted_s(n: usize, noun: &str) -> String {
    format!("{n} {noun}{}", plural_s(n))
}
