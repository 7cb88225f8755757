//! Orientation values for the `orient` parameter.

/// Orientation applied by the service before any other transformation.
///
/// Each symbolic name maps to exactly one one- or two-character wire
/// code; there is no composition.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Use the image as stored. Wire code `1`.
    Default,
    /// Rotate 90° clockwise. Wire code `r`.
    RotateRight,
    /// Rotate 90° counter-clockwise. Wire code `l`.
    RotateLeft,
    /// Mirror across the vertical axis. Wire code `h`.
    FlipHorizontal,
    /// Mirror across the horizontal axis. Wire code `v`.
    FlipVertical,
    /// Rotate 180°. Wire code `hv`.
    UpsideDown,
    /// Mirror then rotate left. Wire code `5`.
    MirrorLeft,
    /// Mirror then rotate right. Wire code `7`.
    MirrorRight,
}

impl Orientation {
    /// The wire code for this orientation.
    pub fn code(self) -> &'static str {
        match self {
            Self::Default => "1",
            Self::RotateRight => "r",
            Self::RotateLeft => "l",
            Self::FlipHorizontal => "h",
            Self::FlipVertical => "v",
            Self::UpsideDown => "hv",
            Self::MirrorLeft => "5",
            Self::MirrorRight => "7",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_lookup_table() {
        let table = [
            (Orientation::Default, "1"),
            (Orientation::RotateRight, "r"),
            (Orientation::RotateLeft, "l"),
            (Orientation::FlipHorizontal, "h"),
            (Orientation::FlipVertical, "v"),
            (Orientation::UpsideDown, "hv"),
            (Orientation::MirrorLeft, "5"),
            (Orientation::MirrorRight, "7"),
        ];
        for (orientation, code) in table {
            assert_eq!(orientation.code(), code);
        }
    }
}
