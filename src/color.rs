//! Color values for the `bg-color` parameter.

use alloc::format;
use alloc::string::String;

/// A color as the image service accepts it.
///
/// Channel ranges are advisory: hex strings are forwarded without
/// validation and alpha is nominally `0.0`–`1.0` but unenforced,
/// matching the service's own leniency.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Bare hex string without a leading `#`, forwarded unchanged.
    Hex(String),
    /// RGB channels with an optional alpha.
    Rgb {
        r: u8,
        g: u8,
        b: u8,
        /// Alpha in `0.0`–`1.0`. Emitted whenever set — including `0` —
        /// and omitted entirely when `None`.
        a: Option<f64>,
    },
}

impl Color {
    /// Opaque RGB color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b, a: None }
    }

    /// RGB color with an explicit alpha.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self::Rgb { r, g, b, a: Some(a) }
    }

    /// Wire value: `r,g,b`, `r,g,b,a`, or the hex string verbatim.
    pub(crate) fn value(&self) -> String {
        match self {
            Self::Hex(s) => s.clone(),
            Self::Rgb { r, g, b, a: None } => format!("{r},{g},{b}"),
            Self::Rgb {
                r,
                g,
                b,
                a: Some(a),
            } => format!("{r},{g},{b},{a}"),
        }
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self::Hex(String::from(s))
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self::Hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forwarded_verbatim() {
        assert_eq!(Color::from("fff").value(), "fff");
        assert_eq!(Color::from("c0ffee").value(), "c0ffee");
    }

    #[test]
    fn rgb_without_alpha() {
        assert_eq!(Color::rgb(255, 255, 255).value(), "255,255,255");
    }

    #[test]
    fn rgba_with_alpha() {
        assert_eq!(Color::rgba(255, 255, 255, 0.5).value(), "255,255,255,0.5");
    }

    #[test]
    fn zero_alpha_still_emitted() {
        assert_eq!(Color::rgba(0, 0, 0, 0.0).value(), "0,0,0,0");
    }

    #[test]
    fn whole_alpha_has_no_fraction() {
        assert_eq!(Color::rgba(1, 2, 3, 1.0).value(), "1,2,3,1");
    }
}
