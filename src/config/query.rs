//! Query-string codec for the page address.
//!
//! ## Contract
//!
//! | Key | Values | Default |
//! |-----|--------|---------|
//! | `pairs` | `6`, `8`, `10`, `12` | `8` |
//! | `view` | `dashboard`, `memory`, `zip` | `dashboard` |
//!
//! Reading never fails: a missing, non-numeric, or out-of-set value yields
//! the default. Writing keeps addresses minimal: a field equal to its
//! default is removed rather than written. Unrelated parameters survive
//! both directions in their original order and encoding.
//!
//! ```
//! use pairs_dash::config::{query, PairCount, View};
//!
//! let config = query::parse("?pairs=10&view=memory");
//! assert_eq!(config.pairs.get(), 10);
//! assert_eq!(config.view, View::Memory);
//!
//! let config = query::parse("?pairs=99");
//! assert_eq!(config.pairs, PairCount::DEFAULT);
//!
//! assert_eq!(query::with_view("?pairs=10", View::Zip), "?pairs=10&view=zip");
//! assert_eq!(query::with_pairs("?pairs=10&view=zip", PairCount::DEFAULT), "?view=zip");
//! ```

use std::borrow::Cow;

use tracing::debug;
use url::form_urlencoded;

use super::settings::{DashConfig, PairCount, View};

/// Query key for the pair count.
pub const PAIRS_KEY: &str = "pairs";

/// Query key for the active view.
pub const VIEW_KEY: &str = "view";

/// Parse a full configuration from a query string.
///
/// The leading `?` is optional.
#[must_use]
pub fn parse(search: &str) -> DashConfig {
    DashConfig {
        pairs: read_pairs(search),
        view: read_view(search),
    }
}

/// Read the pair count, falling back to the default.
#[must_use]
pub fn read_pairs(search: &str) -> PairCount {
    match first_value(search, PAIRS_KEY) {
        None => PairCount::DEFAULT,
        Some(raw) => raw.parse::<PairCount>().unwrap_or_else(|err| {
            debug!(%err, "ignoring pairs parameter");
            PairCount::DEFAULT
        }),
    }
}

/// Read the active view, falling back to the default.
#[must_use]
pub fn read_view(search: &str) -> View {
    match first_value(search, VIEW_KEY) {
        None => View::default(),
        Some(raw) => raw.parse::<View>().unwrap_or_else(|err| {
            debug!(%err, "ignoring view parameter");
            View::default()
        }),
    }
}

/// Rewrite the query with `pairs` set, or removed when it is the default.
#[must_use]
pub fn with_pairs(search: &str, pairs: PairCount) -> String {
    let value = (!pairs.is_default()).then(|| pairs.to_string());
    write_param(search, PAIRS_KEY, value.as_deref())
}

/// Rewrite the query with `view` set, or removed when it is the default.
#[must_use]
pub fn with_view(search: &str, view: View) -> String {
    let value = (!view.is_default()).then_some(view.as_str());
    write_param(search, VIEW_KEY, value)
}

/// Set or remove a single key.
///
/// With `Some(value)` the first occurrence of `key` is replaced in place
/// (or appended if absent) and later duplicates are dropped. With `None`
/// every occurrence is removed. Other segments are kept exactly as
/// written. Returns `""` or `"?k=v&..."`.
#[must_use]
pub fn write_param(search: &str, key: &str, value: Option<&str>) -> String {
    let encoded = value.map(|value| {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(key, value)
            .finish()
    });
    let mut replacement = encoded.as_deref();
    let mut segments: Vec<&str> = Vec::new();

    for segment in raw_segments(search) {
        if segment_key(segment).as_deref() == Some(key) {
            if let Some(pair) = replacement.take() {
                segments.push(pair);
            }
            continue;
        }
        segments.push(segment);
    }
    segments.extend(replacement);

    if segments.is_empty() {
        String::new()
    } else {
        format!("?{}", segments.join("&"))
    }
}

fn strip(search: &str) -> &str {
    search.strip_prefix('?').unwrap_or(search)
}

fn raw_segments(search: &str) -> impl Iterator<Item = &str> {
    strip(search).split('&').filter(|segment| !segment.is_empty())
}

fn segment_key(segment: &str) -> Option<Cow<'_, str>> {
    form_urlencoded::parse(segment.as_bytes()).next().map(|(k, _)| k)
}

fn entries(search: &str) -> form_urlencoded::Parse<'_> {
    form_urlencoded::parse(strip(search).as_bytes())
}

fn first_value(search: &str, key: &str) -> Option<String> {
    entries(search).find(|(k, _)| k == key).map(|(_, v)| v.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse(""), DashConfig::default());
        assert_eq!(parse("?"), DashConfig::default());
    }

    #[test]
    fn test_parse_without_question_mark() {
        let config = parse("pairs=6&view=zip");
        assert_eq!(config.pairs.get(), 6);
        assert_eq!(config.view, View::Zip);
    }

    #[test]
    fn test_parse_falls_back_per_field() {
        let config = parse("?pairs=abc&view=memory");
        assert_eq!(config.pairs, PairCount::DEFAULT);
        assert_eq!(config.view, View::Memory);

        let config = parse("?pairs=12&view=chess");
        assert_eq!(config.pairs.get(), 12);
        assert_eq!(config.view, View::Dashboard);
    }

    #[test]
    fn test_parse_out_of_set() {
        for raw in ["0", "7", "16", "99", "-8", "8.5", ""] {
            assert_eq!(read_pairs(&format!("?pairs={raw}")), PairCount::DEFAULT, "{raw}");
        }
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(read_pairs("?pairs=6&pairs=12").get(), 6);
        assert_eq!(read_view("?view=zip&view=memory"), View::Zip);
    }

    #[test]
    fn test_write_appends_missing_key() {
        assert_eq!(write_param("", "view", Some("memory")), "?view=memory");
        assert_eq!(write_param("?a=1", "view", Some("memory")), "?a=1&view=memory");
    }

    #[test]
    fn test_write_replaces_in_place() {
        assert_eq!(
            write_param("?view=zip&a=1&view=memory", "view", Some("dashboard")),
            "?view=dashboard&a=1"
        );
    }

    #[test]
    fn test_write_removes() {
        assert_eq!(write_param("?view=zip", "view", None), "");
        assert_eq!(write_param("?a=1&view=zip&b=2", "view", None), "?a=1&b=2");
    }

    #[test]
    fn test_write_keeps_other_segments_verbatim() {
        assert_eq!(
            with_view("?flag&q=a%20b&r=%7E", View::Memory),
            "?flag&q=a%20b&r=%7E&view=memory"
        );
        assert_eq!(
            with_pairs("?q=a+b&pairs=6&x=%C3%A9", PairCount::DEFAULT),
            "?q=a+b&x=%C3%A9"
        );
        assert_eq!(write_param("?a=1&&b=2", "c", Some("x y")), "?a=1&b=2&c=x+y");
    }

    #[test]
    fn test_write_matches_encoded_key() {
        assert_eq!(write_param("?vie%77=zip&a=1", "view", None), "?a=1");
    }

    #[test]
    fn test_defaults_are_not_written() {
        assert_eq!(with_pairs("", PairCount::DEFAULT), "");
        assert_eq!(with_view("", View::Dashboard), "");
        assert_eq!(with_pairs("?pairs=12", PairCount::DEFAULT), "");
    }

    #[test]
    fn test_non_defaults_are_written() {
        let pairs = PairCount::new(12).unwrap();
        assert_eq!(with_pairs("?view=memory", pairs), "?view=memory&pairs=12");
        assert_eq!(with_view("?pairs=12", View::Memory), "?pairs=12&view=memory");
    }

    #[test]
    fn test_write_then_parse() {
        let pairs = PairCount::new(6).unwrap();
        let search = with_view(&with_pairs("?utm=x", pairs), View::Zip);
        assert_eq!(parse(&search), DashConfig::new(pairs, View::Zip));
        assert!(search.starts_with("?utm=x"));
    }
}
