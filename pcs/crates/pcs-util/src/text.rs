//! Small text helpers shared by the scanner and its driver.

/// Split `input` on any character in `delims`, skipping empty pieces.
///
/// Runs of delimiters, and delimiters at either end, never produce empty
/// strings. An input made only of delimiters yields nothing.
///
/// # Examples
///
/// ```
/// use pcs_util::text::split;
///
/// assert_eq!(split("  a bc\t d ", " \t"), vec!["a", "bc", "d"]);
/// assert!(split(",,,", ",").is_empty());
/// ```
pub fn split<'a>(input: &'a str, delims: &str) -> Vec<&'a str> {
    input
        .split(|c: char| delims.contains(c))
        .filter(|piece| !piece.is_empty())
        .collect()
}
