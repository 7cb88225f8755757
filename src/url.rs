//! URL composition: gating, query merging, and deterministic re-emission.
//!
//! The composer splits the input URL into base, query, and fragment, overlays
//! the bundle's wire parameters onto the existing query pairs, and re-emits a
//! single URL. Existing pairs are treated as opaque byte strings — no percent
//! decoding or re-encoding happens anywhere, so already-encoded characters
//! survive the round trip.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::params::Params;
use crate::serialize::wire_params;

/// Engine options for [`translate_with`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[non_exhaustive]
pub struct Options {
    /// Process `blob:` URLs instead of returning them untouched.
    ///
    /// A `blob:` URL names a locally-generated resource the remote service
    /// cannot fetch; appending query parameters to one has no remote meaning
    /// and can corrupt it, so by default such URLs pass through unmodified.
    pub support_blobs: bool,
    /// Skip translation entirely and return the input URL as-is.
    pub disable: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn support_blobs(mut self, support_blobs: bool) -> Self {
        self.support_blobs = support_blobs;
        self
    }

    pub fn disable(mut self, disable: bool) -> Self {
        self.disable = disable;
        self
    }
}

/// Translate a bundle onto an image URL with default [`Options`].
///
/// ```
/// use imgquery::Params;
///
/// let params = Params::new().height(100).width(200).auto(true).blur(500);
/// assert_eq!(
///     imgquery::translate("https://example.com/image.jpg?foo=bar", &params),
///     "https://example.com/image.jpg?auto=webp&blur=500&foo=bar&height=100&width=200",
/// );
/// ```
pub fn translate(url: &str, params: &Params) -> String {
    translate_with(url, params, &Options::new())
}

/// Translate a bundle onto an image URL.
///
/// The result keeps the input's scheme, host, path, and fragment; its query
/// is the input's existing parameters overlaid with the bundle's wire
/// parameters (new values win on collision), emitted in ascending key order.
/// An empty merged query produces no `?` at all.
///
/// Never fails: structurally unusable option values degrade to absence
/// rather than erroring, and the only early exits are the `disable` and
/// `blob:` gates.
pub fn translate_with(url: &str, params: &Params, options: &Options) -> String {
    if options.disable {
        return String::from(url);
    }
    if !options.support_blobs && is_blob(url) {
        return String::from(url);
    }

    let (rest, fragment) = split_fragment(url);
    let (base, query) = split_query(rest);

    // Existing pairs first, wire parameters overlaid on top.
    let mut merged: BTreeMap<String, Option<String>> = BTreeMap::new();
    for (key, value) in query_pairs(query) {
        merged.insert(String::from(key), value.map(String::from));
    }
    for (key, value) in wire_params(params) {
        merged.insert(String::from(key), Some(value));
    }

    assemble(base, &merged, fragment)
}

/// Case-insensitive `blob:` scheme check.
fn is_blob(url: &str) -> bool {
    url.get(..5).is_some_and(|p| p.eq_ignore_ascii_case("blob:"))
}

/// Split off the fragment at the first `#`.
fn split_fragment(url: &str) -> (&str, Option<&str>) {
    match url.find('#') {
        Some(pos) => (&url[..pos], Some(&url[pos + 1..])),
        None => (url, None),
    }
}

/// Split base from query at the first `?`.
fn split_query(url: &str) -> (&str, &str) {
    match url.find('?') {
        Some(pos) => (&url[..pos], &url[pos + 1..]),
        None => (url, ""),
    }
}

/// Opaque key/value pairs from a query component. A pair without `=` yields
/// `None` and is re-emitted as a bare key.
fn query_pairs(query: &str) -> impl Iterator<Item = (&str, Option<&str>)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.find('=') {
            Some(pos) => (&pair[..pos], Some(&pair[pos + 1..])),
            None => (pair, None),
        })
}

/// Re-emit base + sorted query + fragment.
fn assemble(
    base: &str,
    merged: &BTreeMap<String, Option<String>>,
    fragment: Option<&str>,
) -> String {
    let mut out = String::from(base);
    for (i, (key, value)) in merged.iter().enumerate() {
        out.push(if i == 0 { '?' } else { '&' });
        out.push_str(key);
        if let Some(value) = value {
            out.push('=');
            out.push_str(value);
        }
    }
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.example.com/image.jpg";

    #[test]
    fn empty_bundle_returns_url_unchanged() {
        assert_eq!(translate(URL, &Params::new()), URL);
    }

    #[test]
    fn empty_bundle_keeps_existing_query() {
        let url = "https://www.example.com/image.jpg?foo=bar";
        assert_eq!(translate(url, &Params::new()), url);
    }

    #[test]
    fn stray_question_mark_dropped_when_query_empty() {
        assert_eq!(
            translate("https://www.example.com/image.jpg?", &Params::new()),
            URL
        );
    }

    #[test]
    fn new_value_wins_on_key_collision() {
        let url = "https://www.example.com/image.jpg?width=999";
        assert_eq!(
            translate(url, &Params::new().width(200)),
            "https://www.example.com/image.jpg?width=200"
        );
    }

    #[test]
    fn encoded_existing_values_pass_through() {
        let url = "https://www.example.com/image.jpg?name=a%20b%3Dc";
        assert_eq!(
            translate(url, &Params::new().width(200)),
            "https://www.example.com/image.jpg?name=a%20b%3Dc&width=200"
        );
    }

    #[test]
    fn bare_keys_survive() {
        let url = "https://www.example.com/image.jpg?flag";
        assert_eq!(
            translate(url, &Params::new().width(200)),
            "https://www.example.com/image.jpg?flag&width=200"
        );
    }

    #[test]
    fn fragment_preserved() {
        assert_eq!(
            translate(
                "https://www.example.com/image.jpg#section",
                &Params::new().width(200)
            ),
            "https://www.example.com/image.jpg?width=200#section"
        );
    }

    #[test]
    fn fragment_after_query_preserved() {
        assert_eq!(
            translate(
                "https://www.example.com/image.jpg?foo=bar#s",
                &Params::new().width(200)
            ),
            "https://www.example.com/image.jpg?foo=bar&width=200#s"
        );
    }

    #[test]
    fn blob_url_untouched_by_default() {
        let blob = "blob:https://www.example.com/image.jpg";
        assert_eq!(translate(blob, &Params::new().width(200)), blob);
    }

    #[test]
    fn blob_check_is_case_insensitive() {
        let blob = "BLOB:https://www.example.com/image.jpg";
        assert_eq!(translate(blob, &Params::new().width(200)), blob);
    }

    #[test]
    fn blob_url_processed_when_supported() {
        let blob = "blob:https://www.example.com/image.jpg";
        assert_eq!(
            translate_with(
                blob,
                &Params::new().width(200),
                &Options::new().support_blobs(true)
            ),
            "blob:https://www.example.com/image.jpg?width=200"
        );
    }

    #[test]
    fn disable_returns_input_verbatim() {
        assert_eq!(
            translate_with(URL, &Params::new().width(200), &Options::new().disable(true)),
            URL
        );
    }

    #[test]
    fn short_urls_are_not_blobs() {
        // Must not panic on inputs shorter than the scheme prefix.
        assert_eq!(translate("b", &Params::new().width(200)), "b?width=200");
    }
}
