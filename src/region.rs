//! Crop and canvas region descriptors, and per-edge value sets.

use alloc::format;
use alloc::string::String;

use crate::dimension::Dimension;

/// Region descriptor for the `crop` and `canvas` parameters.
///
/// Every structured variant has a wire form built from its dimensions;
/// [`Raw`](Self::Raw) passes a value the caller already formatted straight
/// through. `Smart` requests content-aware cropping and only exists for
/// `crop` — as a `canvas` value it contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    /// Sub-region of the given size, anchored by the service default.
    /// Wire form `w,h`.
    Size {
        width: Dimension,
        height: Dimension,
    },
    /// Sub-region anchored at absolute coordinates. Wire form `w,h,x{x},y{y}`.
    Coord {
        width: Dimension,
        height: Dimension,
        x: Dimension,
        y: Dimension,
    },
    /// Sub-region positioned by percentage offsets.
    /// Wire form `w,h,offset-x{xo},offset-y{yo}`.
    Offset {
        width: Dimension,
        height: Dimension,
        /// Horizontal offset, percentage.
        x_offset: Dimension,
        /// Vertical offset, percentage.
        y_offset: Dimension,
    },
    /// Aspect ratio rather than absolute size. Wire form `w:h`.
    AspectRatio {
        width: Dimension,
        height: Dimension,
    },
    /// Aspect ratio with percentage offsets.
    /// Wire form `w:h,offset-x{xo},offset-y{yo}`.
    AspectRatioOffset {
        width: Dimension,
        height: Dimension,
        x_offset: Dimension,
        y_offset: Dimension,
    },
    /// Content-aware crop of the given size. Wire form `w,h,smart`.
    /// Crop only.
    Smart {
        width: Dimension,
        height: Dimension,
    },
    /// Raw wire value, forwarded unchanged.
    Raw(String),
}

impl Region {
    /// Wire value for the `crop` parameter.
    pub(crate) fn crop_value(&self) -> String {
        match self {
            Self::Size { width, height } => format!("{width},{height}"),
            Self::Coord {
                width,
                height,
                x,
                y,
            } => format!("{width},{height},x{x},y{y}"),
            Self::Offset {
                width,
                height,
                x_offset,
                y_offset,
            } => format!("{width},{height},offset-x{x_offset},offset-y{y_offset}"),
            Self::AspectRatio { width, height } => format!("{width}:{height}"),
            Self::AspectRatioOffset {
                width,
                height,
                x_offset,
                y_offset,
            } => format!("{width}:{height},offset-x{x_offset},offset-y{y_offset}"),
            Self::Smart { width, height } => format!("{width},{height},smart"),
            Self::Raw(s) => s.clone(),
        }
    }

    /// Wire value for the `canvas` parameter. The canvas has no smart mode,
    /// so `Smart` degrades to absence rather than an error.
    pub(crate) fn canvas_value(&self) -> Option<String> {
        match self {
            Self::Smart { .. } => None,
            other => Some(other.crop_value()),
        }
    }
}

impl From<&str> for Region {
    fn from(s: &str) -> Self {
        Self::Raw(String::from(s))
    }
}

impl From<String> for Region {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

/// Values for the four edges of an image, used by `trim` and `pad`.
///
/// Wire form `top,right,bottom,left`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edges {
    /// One value per edge, clockwise from the top.
    Values {
        top: Dimension,
        right: Dimension,
        bottom: Dimension,
        left: Dimension,
    },
    /// Raw wire value, forwarded unchanged.
    Raw(String),
}

impl Edges {
    /// Per-edge values, clockwise from the top.
    pub fn new(
        top: impl Into<Dimension>,
        right: impl Into<Dimension>,
        bottom: impl Into<Dimension>,
        left: impl Into<Dimension>,
    ) -> Self {
        Self::Values {
            top: top.into(),
            right: right.into(),
            bottom: bottom.into(),
            left: left.into(),
        }
    }

    pub(crate) fn value(&self) -> String {
        match self {
            Self::Values {
                top,
                right,
                bottom,
                left,
            } => format!("{top},{right},{bottom},{left}"),
            Self::Raw(s) => s.clone(),
        }
    }
}

impl From<&str> for Edges {
    fn from(s: &str) -> Self {
        Self::Raw(String::from(s))
    }
}

impl From<String> for Edges {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(n: u32) -> Dimension {
        Dimension::Pixels(n)
    }

    #[test]
    fn size() {
        let r = Region::Size {
            width: px(1600),
            height: px(900),
        };
        assert_eq!(r.crop_value(), "1600,900");
    }

    #[test]
    fn coord_mixes_pixels_and_percent() {
        let r = Region::Coord {
            width: px(1600),
            height: px(900),
            x: px(100),
            y: Dimension::Percent(50),
        };
        assert_eq!(r.crop_value(), "1600,900,x100,y50p");
    }

    #[test]
    fn offset() {
        let r = Region::Offset {
            width: px(1600),
            height: px(900),
            x_offset: Dimension::Percent(100),
            y_offset: Dimension::Percent(50),
        };
        assert_eq!(r.crop_value(), "1600,900,offset-x100p,offset-y50p");
    }

    #[test]
    fn aspect_ratio() {
        let r = Region::AspectRatio {
            width: px(16),
            height: px(9),
        };
        assert_eq!(r.crop_value(), "16:9");
    }

    #[test]
    fn aspect_ratio_offset() {
        let r = Region::AspectRatioOffset {
            width: px(16),
            height: px(9),
            x_offset: Dimension::Percent(100),
            y_offset: Dimension::Percent(50),
        };
        assert_eq!(r.crop_value(), "16:9,offset-x100p,offset-y50p");
    }

    #[test]
    fn smart() {
        let r = Region::Smart {
            width: px(1600),
            height: px(900),
        };
        assert_eq!(r.crop_value(), "1600,900,smart");
    }

    #[test]
    fn smart_is_absent_for_canvas() {
        let r = Region::Smart {
            width: px(1600),
            height: px(900),
        };
        assert_eq!(r.canvas_value(), None);
    }

    #[test]
    fn other_variants_shared_with_canvas() {
        let r = Region::AspectRatio {
            width: px(16),
            height: px(9),
        };
        assert_eq!(r.canvas_value().as_deref(), Some("16:9"));
    }

    #[test]
    fn raw_passthrough() {
        assert_eq!(Region::from("foo").crop_value(), "foo");
    }

    #[test]
    fn edges_clockwise_from_top() {
        let e = Edges::new(100, "50p", 200, "25p");
        assert_eq!(e.value(), "100,50p,200,25p");
    }

    #[test]
    fn edges_raw_passthrough() {
        assert_eq!(Edges::from("foo").value(), "foo");
    }
}
