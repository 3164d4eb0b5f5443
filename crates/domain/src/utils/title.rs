//! Pure string utility functions for capture title rendering

/// Maximum rendered title length in display characters.
pub const MAX_TITLE_LENGTH: usize = 64;

/// Suffix appended when a title is truncated.
pub const TITLE_TRUNCATE_SUFFIX: &str = "...";

/// Collapse internal whitespace runs (including newlines) into single spaces
/// and trim the ends.
///
/// # Examples
///
/// ```
/// use capgrab_domain::utils::title::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  team \n meeting  "), "team meeting");
/// ```
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render a capture title from raw selection text.
///
/// Whitespace is collapsed, then the result is truncated to
/// [`MAX_TITLE_LENGTH`] display characters. Truncation keeps 61 characters
/// and appends `...` so the rendered form never exceeds 64.
///
/// # Examples
///
/// ```
/// use capgrab_domain::utils::title::render_title;
///
/// assert_eq!(render_title("Quick sync"), "Quick sync");
/// assert!(render_title(&"x".repeat(200)).chars().count() <= 64);
/// ```
#[must_use]
pub fn render_title(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    if collapsed.chars().count() <= MAX_TITLE_LENGTH {
        return collapsed;
    }

    let keep = MAX_TITLE_LENGTH - TITLE_TRUNCATE_SUFFIX.len();
    let mut truncated: String = collapsed.chars().take(keep).collect();
    truncated.push_str(TITLE_TRUNCATE_SUFFIX);
    truncated
}
