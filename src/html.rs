//! HTML `<img>` tag rendering over translated URLs.
//!
//! A thin markup wrapper around [`translate_with`](crate::translate_with):
//! the source URL runs through translation, every other attribute is
//! forwarded as supplied.
//!
//! # Example
//!
//! ```
//! use imgquery::Params;
//! use imgquery::html::ImageTag;
//!
//! let tag = ImageTag::new()
//!     .src("https://example.com/image.jpg")
//!     .params(Params::new().width(200))
//!     .attr("alt", "a picture")
//!     .render();
//! assert_eq!(
//!     tag,
//!     r#"<img src="https://example.com/image.jpg?width=200" alt="a picture">"#,
//! );
//! ```

use crate::params::Params;
use crate::url::{Options, translate_with};

/// Builder for an `<img>` tag whose `src` is a translated image URL.
///
/// Without a source URL the tag renders with no `src` attribute at all;
/// the builder never synthesizes one.
#[derive(Debug, Clone, Default)]
pub struct ImageTag {
    src: Option<String>,
    params: Params,
    options: Options,
    attrs: Vec<(String, String)>,
}

impl ImageTag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source image URL to translate.
    pub fn src(mut self, url: impl Into<String>) -> Self {
        self.src = Some(url.into());
        self
    }

    /// Transformation options for the source URL.
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Engine options for the translation.
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Passthrough attribute, emitted after `src` in insertion order.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Render the tag as markup.
    pub fn render(&self) -> String {
        let mut out = String::from("<img");
        if let Some(src) = &self.src {
            let url = translate_with(src, &self.params, &self.options);
            out.push_str(" src=\"");
            out.push_str(&escape_attr(&url));
            out.push('"');
        }
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');
        out
    }
}

/// Minimal attribute-value escaping.
fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}
