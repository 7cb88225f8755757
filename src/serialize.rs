//! Per-option wire translation and alias resolution.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::params::Params;

/// Translate a bundle into its flat wire-parameter map.
///
/// Aliases resolve first (the alias field wins whenever present), then each
/// resolved option runs through its serializer. Absent options and options
/// whose serializer degrades to absence (canvas `Smart`, wrong-length
/// quality, boolean `false`) never enter the map. The `BTreeMap` keys give
/// the ascending emission order the composer relies on.
pub(crate) fn wire_params(params: &Params) -> BTreeMap<&'static str, String> {
    // Alias-first precedence, applied uniformly to every aliased option.
    let dpr = params.dpr.or(params.device_pixel_ratio);
    let pad = params.pad.as_ref().or(params.padding.as_ref());
    let bg_color = params.bg_color.as_ref().or(params.background_color.as_ref());
    let orient = params.orient.or(params.orientation);
    let brightness = params.bright.or(params.brightness);
    let contrast = params.con.or(params.contrast);
    let saturation = params.sat.or(params.saturation);
    let resize_filter = params.res_fil.or(params.resize_filter);

    let mut map = BTreeMap::new();

    if let Some(width) = &params.width {
        map.insert("width", width.to_string());
    }
    if let Some(height) = &params.height {
        map.insert("height", height.to_string());
    }
    if let Some(dpr) = dpr {
        map.insert("dpr", dpr.to_string());
    }
    if let Some(fit) = params.fit {
        map.insert("fit", String::from(fit.as_str()));
    }
    if let Some(crop) = &params.crop {
        map.insert("crop", crop.crop_value());
    }
    if let Some(trim) = &params.trim {
        map.insert("trim", trim.value());
    }
    if let Some(pad) = pad {
        map.insert("pad", pad.value());
    }
    if let Some(canvas) = &params.canvas {
        if let Some(value) = canvas.canvas_value() {
            map.insert("canvas", value);
        }
    }
    if let Some(color) = bg_color {
        map.insert("bg-color", color.value());
    }
    if let Some(orient) = orient {
        map.insert("orient", String::from(orient.code()));
    }
    if let Some(brightness) = brightness {
        map.insert("brightness", brightness.to_string());
    }
    if let Some(contrast) = contrast {
        map.insert("contrast", contrast.to_string());
    }
    if let Some(saturation) = saturation {
        map.insert("saturation", saturation.to_string());
    }
    if let Some(sharpen) = &params.sharpen {
        map.insert("sharpen", sharpen.value());
    }
    if let Some(blur) = params.blur {
        map.insert("blur", blur.to_string());
    }
    if let Some(format) = params.format {
        map.insert("format", String::from(format.as_str()));
    }
    // Boolean options: true emits a fixed token, false is indistinguishable
    // from absent on the wire.
    if params.frame == Some(true) {
        map.insert("frame", String::from("1"));
    }
    if let Some(quality) = &params.quality {
        if let Some(value) = quality.value() {
            map.insert("quality", value);
        }
    }
    if params.auto == Some(true) {
        map.insert("auto", String::from("webp"));
    }
    if params.upscaling == Some(true) {
        map.insert("enable", String::from("upscale"));
    }
    if let Some(filter) = resize_filter {
        map.insert("resize-filter", String::from(filter.as_str()));
    }

    map
}
