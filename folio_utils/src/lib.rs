pub use folio_utils_derive::trace_instrument;

mod macros;

/// Returns the version of this build, as reported by `folio --version`.
pub const fn folio_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Counts the characters of `value` after trimming leading and trailing
/// whitespace.
pub fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_len_counts_chars() {
        for (input, expected) in [
            ("", 0),
            ("   ", 0),
            ("  Jo ", 2),
            ("\tHello World\n", 11),
            ("Zoë", 3),
        ] {
            assert_eq!(trimmed_len(input), expected, "{input:?}");
        }
    }
}
