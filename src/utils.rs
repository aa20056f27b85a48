use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Serialize a timestamp filter as RFC3339 with whole seconds, the format the API expects in
/// query strings (`2017-07-10T12:00:00Z`).
pub fn serialize_rfc3339<S>(time: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match time {
        Some(time) => s.serialize_str(&time.to_rfc3339_opts(SecondsFormat::Secs, true)),
        None => s.serialize_none(),
    }
}

/// Read a single query parameter out of an absolute URL.
pub fn query_param(url: &str, key: &str) -> Option<String> {
    let url = url::Url::parse(url).ok()?;
    for (k, v) in url.query_pairs() {
        if k == key {
            return Some(v.into_owned());
        }
    }
    None
}
