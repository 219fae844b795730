use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// Current UTC instant, truncated to microseconds so stored and rendered
/// values agree.
pub fn utc_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Renders an instant as ISO-8601 with a literal `Z` suffix,
/// e.g. `2025-11-11T14:30:45.123456Z`.
pub fn to_iso8601(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
