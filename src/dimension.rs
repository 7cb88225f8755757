//! Pixel-or-percentage dimension values.

use alloc::string::String;
use core::fmt;

/// A dimension as the image service understands it: an absolute pixel
/// count, a percentage of the source dimension, or a raw passthrough
/// string.
///
/// Percentages serialize as `{n}p` (`50p` = 50% of the source). `Raw`
/// is the escape hatch for wire syntax this crate does not model; it is
/// forwarded verbatim and never validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// Absolute size in pixels.
    Pixels(u32),
    /// Percentage of the source dimension. `Percent(50)` → `50p`.
    Percent(u32),
    /// Raw wire value, forwarded unchanged.
    Raw(String),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(n) => write!(f, "{n}"),
            Self::Percent(n) => write!(f, "{n}p"),
            Self::Raw(s) => f.write_str(s),
        }
    }
}

impl From<u32> for Dimension {
    fn from(pixels: u32) -> Self {
        Self::Pixels(pixels)
    }
}

impl From<&str> for Dimension {
    /// Strings matching the percentage pattern (`<whole number>p`) become
    /// [`Percent`](Self::Percent); anything else is kept [`Raw`](Self::Raw).
    fn from(s: &str) -> Self {
        match parse_percent(s) {
            Some(n) => Self::Percent(n),
            None => Self::Raw(String::from(s)),
        }
    }
}

impl From<String> for Dimension {
    fn from(s: String) -> Self {
        match parse_percent(&s) {
            Some(n) => Self::Percent(n),
            None => Self::Raw(s),
        }
    }
}

/// Recognize the `{n}p` percentage pattern.
fn parse_percent(s: &str) -> Option<u32> {
    let digits = s.strip_suffix('p')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn pixels_display() {
        assert_eq!(Dimension::Pixels(200).to_string(), "200");
    }

    #[test]
    fn percent_display() {
        assert_eq!(Dimension::Percent(50).to_string(), "50p");
    }

    #[test]
    fn raw_forwarded_verbatim() {
        assert_eq!(Dimension::from("calc(3)").to_string(), "calc(3)");
    }

    #[test]
    fn percent_pattern_recognized() {
        assert_eq!(Dimension::from("50p"), Dimension::Percent(50));
        assert_eq!(Dimension::from("200p"), Dimension::Percent(200));
    }

    #[test]
    fn non_percent_strings_stay_raw() {
        assert_eq!(Dimension::from("p"), Dimension::Raw(String::from("p")));
        assert_eq!(Dimension::from("5x"), Dimension::Raw(String::from("5x")));
        assert_eq!(
            Dimension::from("5.5p"),
            Dimension::Raw(String::from("5.5p"))
        );
    }

    #[test]
    fn from_u32() {
        assert_eq!(Dimension::from(1600), Dimension::Pixels(1600));
    }
}
