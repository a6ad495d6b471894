//! Case-insensitive text comparison shared by the domain.
//!
//! Holiday type tags, dates and display names are all compared through
//! [`eq_ignore_case`] so every caller folds case the same way, independent
//! of the host locale.

/// Compare two strings using Unicode simple lowercase folding.
///
/// # Examples
/// ```
/// use holidays_api::domain::text::eq_ignore_case;
///
/// assert!(eq_ignore_case("Public", "PUBLIC"));
/// assert!(!eq_ignore_case("Public", "Bank"));
/// ```
#[must_use]
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}
