//! Number and layout helpers for the text report.

/// Width of the rules and centered titles.
pub const REPORT_WIDTH: usize = 60;

/// Format `value` with `,` between groups of three digits.
///
/// # Examples
///
/// ```
/// use magnitude_report::format::group_thousands;
/// assert_eq!(group_thousands(46_349), "46,349");
/// assert_eq!(group_thousands(964), "964");
/// ```
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A full-width rule of `ch`.
pub fn rule(ch: char) -> String {
    std::iter::repeat_n(ch, REPORT_WIDTH).collect()
}

/// `text` centered in the report width; odd padding goes to the right.
pub fn centered(text: &str) -> String {
    format!("{text:^width$}", width = REPORT_WIDTH)
}
