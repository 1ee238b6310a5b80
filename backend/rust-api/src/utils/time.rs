use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 UTC timestamp with microsecond precision and a trailing `Z`.
pub fn iso_utc(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn iso_utc_now() -> String {
    iso_utc(Utc::now())
}
