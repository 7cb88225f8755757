//! The parameter bundle: every transformation option for one translation call.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::color::Color;
use crate::dimension::Dimension;
use crate::orientation::Orientation;
use crate::region::{Edges, Region};

/// How to fit the image into the target dimensions (`fit`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Fit {
    /// Fit within the target box, preserving aspect ratio.
    Bounds,
    /// Fill the target box, preserving aspect ratio.
    Cover,
    /// Fill the target box, cropping overflow.
    Crop,
}

impl Fit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bounds => "bounds",
            Self::Cover => "cover",
            Self::Crop => "crop",
        }
    }
}

/// Output encoding (`format`).
///
/// Transcodes the source image; sources may be JPEG, PNG, GIF, or WebP.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    Gif,
    Png,
    Png8,
    Jpg,
    Pjpg,
    Webp,
    /// Lossless WebP. Wire token `webpll`.
    #[cfg_attr(feature = "serde", serde(rename = "webpll"))]
    WebpLossless,
    /// Lossy WebP. Wire token `webply`.
    #[cfg_attr(feature = "serde", serde(rename = "webply"))]
    WebpLossy,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gif => "gif",
            Self::Png => "png",
            Self::Png8 => "png8",
            Self::Jpg => "jpg",
            Self::Pjpg => "pjpg",
            Self::Webp => "webp",
            Self::WebpLossless => "webpll",
            Self::WebpLossy => "webply",
        }
    }
}

/// Resampling filter (`resize-filter`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ResizeFilter {
    /// Natural pixelation; suits pixel art.
    Nearest,
    /// Natural smoothing; suits enlargement.
    Bilinear,
    /// Natural sharpening; suits reduction.
    Bicubic,
    /// Best overall quality.
    Lanczos,
    Lanczos2,
}

impl ResizeFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
            Self::Bicubic => "bicubic",
            Self::Lanczos => "lanczos",
            Self::Lanczos2 => "lanczos2",
        }
    }
}

/// Unsharp-mask settings (`sharpen`). Wire form `a{amount},r{radius},t{threshold}`.
///
/// Advisory ranges: amount 0–10, radius 1–1000, threshold 0–255. The engine
/// does not enforce them.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sharpen {
    pub amount: f64,
    pub radius: f64,
    pub threshold: f64,
}

impl Sharpen {
    pub fn new(amount: f64, radius: f64, threshold: f64) -> Self {
        Self {
            amount,
            radius,
            threshold,
        }
    }

    pub(crate) fn value(&self) -> String {
        format!("a{},r{},t{}", self.amount, self.radius, self.threshold)
    }
}

/// Output quality for lossy formats (`quality`), 1–100 advisory.
///
/// When the service's auto-format negotiation is enabled, a second value
/// supplies the quality used for `accept: image/webp` requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quality {
    /// A single quality value.
    Value(u32),
    /// Base quality plus auto-format quality. Serializes only when exactly
    /// two values are present; any other length drops the option silently.
    Values(Vec<u32>),
}

impl Quality {
    pub(crate) fn value(&self) -> Option<String> {
        match self {
            Self::Value(n) => Some(n.to_string()),
            Self::Values(v) if v.len() == 2 => Some(format!("{},{}", v[0], v[1])),
            Self::Values(_) => None,
        }
    }
}

impl From<u32> for Quality {
    fn from(n: u32) -> Self {
        Self::Value(n)
    }
}

impl From<Vec<u32>> for Quality {
    fn from(v: Vec<u32>) -> Self {
        Self::Values(v)
    }
}

impl From<[u32; 2]> for Quality {
    fn from([base, auto]: [u32; 2]) -> Self {
        Self::Values(alloc::vec![base, auto])
    }
}

/// Every transformation option for one translation call.
///
/// All fields are optional; absent fields never reach the wire. Several
/// options carry two accepted names — a short alias and a canonical name —
/// and the alias wins whenever both are set (see
/// [`translate`](crate::translate) for the full precedence rule).
///
/// Fields are public, with chained setters for convenience:
///
/// ```
/// use imgquery::Params;
///
/// let params = Params::new().width(200).auto(true);
/// assert_eq!(
///     imgquery::translate("https://example.com/image.jpg", &params),
///     "https://example.com/image.jpg?auto=webp&width=200",
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[non_exhaustive]
pub struct Params {
    /// Target width in pixels or percent.
    pub width: Option<Dimension>,
    /// Target height in pixels or percent.
    pub height: Option<Dimension>,
    /// Device pixel ratio. Alias for `device_pixel_ratio`.
    pub dpr: Option<f64>,
    pub device_pixel_ratio: Option<f64>,
    /// Fit mode.
    pub fit: Option<Fit>,
    /// Crop region. Supports the `Smart` variant.
    pub crop: Option<Region>,
    /// Edge amounts to trim from the source.
    pub trim: Option<Edges>,
    /// Edge amounts to pad. Alias for `padding`. The service ignores
    /// padding when `canvas` is also supplied.
    pub pad: Option<Edges>,
    pub padding: Option<Edges>,
    /// Canvas region grown around the image. No `Smart` support.
    pub canvas: Option<Region>,
    /// Background color. Alias for `background_color`.
    pub bg_color: Option<Color>,
    pub background_color: Option<Color>,
    /// Orientation. Alias for `orientation`.
    pub orient: Option<Orientation>,
    pub orientation: Option<Orientation>,
    /// Brightness, -100 to 100 advisory. Alias for `brightness`.
    pub bright: Option<f64>,
    pub brightness: Option<f64>,
    /// Contrast, -100 to 100 advisory. Alias for `contrast`.
    pub con: Option<f64>,
    pub contrast: Option<f64>,
    /// Saturation, -100 to 100 advisory. Alias for `saturation`.
    pub sat: Option<f64>,
    pub saturation: Option<f64>,
    /// Unsharp mask.
    pub sharpen: Option<Sharpen>,
    /// Blur radius, 1–1000 advisory.
    pub blur: Option<u32>,
    /// Output encoding.
    pub format: Option<Format>,
    /// Extract the first frame of an animated source. `false` is the same
    /// as absent on the wire.
    pub frame: Option<bool>,
    /// Output quality.
    pub quality: Option<Quality>,
    /// Automatic optimization (`auto=webp`). Overrides `format` in browsers
    /// that support WebP. `false` is the same as absent.
    pub auto: Option<bool>,
    /// Enable upscaling (`enable=upscale`). `false` is the same as absent.
    pub upscaling: Option<bool>,
    /// Resampling filter. Alias for `resize_filter`.
    pub res_fil: Option<ResizeFilter>,
    pub resize_filter: Option<ResizeFilter>,
}

impl Params {
    /// An empty bundle: nothing reaches the wire.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn dpr(mut self, dpr: f64) -> Self {
        self.dpr = Some(dpr);
        self
    }

    pub fn device_pixel_ratio(mut self, dpr: f64) -> Self {
        self.device_pixel_ratio = Some(dpr);
        self
    }

    pub fn fit(mut self, fit: Fit) -> Self {
        self.fit = Some(fit);
        self
    }

    pub fn crop(mut self, crop: impl Into<Region>) -> Self {
        self.crop = Some(crop.into());
        self
    }

    pub fn trim(mut self, trim: impl Into<Edges>) -> Self {
        self.trim = Some(trim.into());
        self
    }

    pub fn pad(mut self, pad: impl Into<Edges>) -> Self {
        self.pad = Some(pad.into());
        self
    }

    pub fn padding(mut self, padding: impl Into<Edges>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn canvas(mut self, canvas: impl Into<Region>) -> Self {
        self.canvas = Some(canvas.into());
        self
    }

    pub fn bg_color(mut self, color: impl Into<Color>) -> Self {
        self.bg_color = Some(color.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<Color>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn orient(mut self, orientation: Orientation) -> Self {
        self.orient = Some(orientation);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn bright(mut self, brightness: f64) -> Self {
        self.bright = Some(brightness);
        self
    }

    pub fn brightness(mut self, brightness: f64) -> Self {
        self.brightness = Some(brightness);
        self
    }

    pub fn con(mut self, contrast: f64) -> Self {
        self.con = Some(contrast);
        self
    }

    pub fn contrast(mut self, contrast: f64) -> Self {
        self.contrast = Some(contrast);
        self
    }

    pub fn sat(mut self, saturation: f64) -> Self {
        self.sat = Some(saturation);
        self
    }

    pub fn saturation(mut self, saturation: f64) -> Self {
        self.saturation = Some(saturation);
        self
    }

    pub fn sharpen(mut self, sharpen: Sharpen) -> Self {
        self.sharpen = Some(sharpen);
        self
    }

    pub fn blur(mut self, blur: u32) -> Self {
        self.blur = Some(blur);
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn frame(mut self, frame: bool) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn quality(mut self, quality: impl Into<Quality>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    pub fn auto(mut self, auto: bool) -> Self {
        self.auto = Some(auto);
        self
    }

    pub fn upscaling(mut self, upscaling: bool) -> Self {
        self.upscaling = Some(upscaling);
        self
    }

    pub fn res_fil(mut self, filter: ResizeFilter) -> Self {
        self.res_fil = Some(filter);
        self
    }

    pub fn resize_filter(mut self, filter: ResizeFilter) -> Self {
        self.resize_filter = Some(filter);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sharpen_fixed_field_order() {
        assert_eq!(Sharpen::new(5.0, 500.0, 156.0).value(), "a5,r500,t156");
    }

    #[test]
    fn sharpen_fractional_amount() {
        assert_eq!(Sharpen::new(1.5, 10.0, 0.0).value(), "a1.5,r10,t0");
    }

    #[test]
    fn quality_single() {
        assert_eq!(Quality::Value(50).value().as_deref(), Some("50"));
    }

    #[test]
    fn quality_pair() {
        assert_eq!(
            Quality::from([50, 75]).value().as_deref(),
            Some("50,75")
        );
    }

    #[test]
    fn quality_wrong_lengths_drop() {
        assert_eq!(Quality::Values(alloc::vec![]).value(), None);
        assert_eq!(Quality::Values(alloc::vec![1, 2, 3]).value(), None);
    }

    #[test]
    fn setters_fill_fields() {
        let p = Params::new().width("50p").blur(500).frame(false);
        assert_eq!(p.width, Some(Dimension::Percent(50)));
        assert_eq!(p.blur, Some(500));
        assert_eq!(p.frame, Some(false));
    }
}
