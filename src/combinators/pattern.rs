/// Something that can decide whether a piece of text is acceptable.
///
/// Implemented for plain closures and, with the `regex` feature, for
/// [`regex::Regex`].
///
/// # Examples
///
/// ```
/// use scalar_rail::combinators::Pattern;
///
/// let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
/// assert!(digits.is_match("2024"));
/// assert!(!digits.is_match("20x4"));
/// ```
pub trait Pattern {
    /// Returns `true` if `text` satisfies the pattern.
    fn is_match(&self, text: &str) -> bool;
}

impl<F> Pattern for F
where
    F: Fn(&str) -> bool,
{
    #[inline]
    fn is_match(&self, text: &str) -> bool {
        self(text)
    }
}

#[cfg(feature = "regex")]
impl Pattern for regex::Regex {
    #[inline]
    fn is_match(&self, text: &str) -> bool {
        regex::Regex::is_match(self, text)
    }
}
