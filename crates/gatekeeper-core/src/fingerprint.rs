//! Canvas fingerprint: a fixed drawing rendered by the host, folded to a short hash.
//!
//! The fold is the classic `h * 31 + c` string hash over UTF-16 code units with
//! 32-bit wrap-around, so the same rendered data URL yields the same
//! fingerprint as any other client using this scheme.

/// A deterministic drawing the host renders onto an offscreen canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasScene {
    pub width: u32,
    pub height: u32,
    pub text_baseline: &'static str,
    pub font: &'static str,
    pub background: &'static str,
    pub text_color: &'static str,
    pub text: &'static str,
    /// Text origin (x, y).
    pub text_origin: (f64, f64),
    pub stroke_color: &'static str,
    /// Half-arc centre (x, y), radius, start and end angle in radians.
    pub arc: (f64, f64, f64, f64, f64),
}

impl CanvasScene {
    pub const STANDARD: Self = Self {
        width: 200,
        height: 50,
        text_baseline: "top",
        font: "16px 'Arial'",
        background: "#f60",
        text_color: "#069",
        text: "gatekeeper::canvas",
        text_origin: (2.0, 2.0),
        stroke_color: "#ff0",
        arc: (100.0, 25.0, 20.0, 0.0, std::f64::consts::PI),
    };
}

/// Fold a string into a signed 32-bit hash.
pub fn fold_hash(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    })
}

/// Fingerprint string for a rendered canvas data URL: `c_<|hash|>`.
pub fn canvas_fingerprint(data_url: &str) -> String {
    format!("c_{}", fold_hash(data_url).unsigned_abs())
}
