//! Shared presentation helpers.
//!
//! Two explicitly-typed display transforms, each selected by its caller:
//! integer grouping for large counters and unix-timestamp rendering for
//! calendar fields. Values never pick their formatter by runtime type.

use chrono::DateTime;

/// Group the digits of an integer with thousands separators.
///
/// # Examples
///
/// ```
/// use kw_server::util::group_thousands;
///
/// assert_eq!(group_thousands(512), "512");
/// assert_eq!(group_thousands(44_519_000), "44,519,000");
/// assert_eq!(group_thousands(-1234), "-1,234");
/// ```
#[must_use]
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        format!("-{out}")
    } else {
        out
    }
}

/// Render a unix timestamp as `YYYY-MM-DD HH:MM:SS` (UTC).
///
/// Out-of-range timestamps render as a fixed placeholder rather than
/// panicking; the upstream feed should never produce them.
///
/// # Examples
///
/// ```
/// use kw_server::util::format_timestamp;
///
/// assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
/// assert_eq!(format_timestamp(1_356_998_460), "2013-01-01 00:01:00");
/// ```
#[must_use]
pub fn format_timestamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0).map_or_else(
        || "invalid date".to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}
