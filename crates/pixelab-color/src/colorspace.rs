//! RGB <-> HSV conversion
//!
//! 8-bit HSV with hue stored as half-degrees: h in [0, 179], s and v in
//! [0, 255]. Conversions to HSV are transient - they are used inside a
//! single transform (channel decomposition, V-channel LUT routing) and
//! the result is always converted back to RGB before returning.

/// 8-bit HSV triple.
///
/// Hue correspondence: 0 red, 30 yellow, 60 green, 90 cyan, 120 blue,
/// 150 magenta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

/// Convert an RGB triple to 8-bit HSV.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let rf = r as f32;
    let gf = g as f32;
    let bf = b as f32;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 {
        0.0
    } else {
        255.0 * delta / max
    };

    let h_deg = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * (gf - bf) / delta
    } else if max == gf {
        120.0 + 60.0 * (bf - rf) / delta
    } else {
        240.0 + 60.0 * (rf - gf) / delta
    };
    let h_deg = if h_deg < 0.0 { h_deg + 360.0 } else { h_deg };

    Hsv {
        h: ((h_deg / 2.0).round() as u32 % 180) as u8,
        s: (s + 0.5) as u8,
        v: v as u8,
    }
}

/// Convert an 8-bit HSV triple back to RGB.
pub fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
    let Hsv { h, s, v } = hsv;
    if s == 0 {
        return (v, v, v);
    }

    let h_deg = h as f32 * 2.0;
    let sector = (h_deg / 60.0).floor();
    let f = h_deg / 60.0 - sector;
    let vf = v as f32;
    let sf = s as f32 / 255.0;

    let p = (vf * (1.0 - sf)).round();
    let q = (vf * (1.0 - sf * f)).round();
    let t = (vf * (1.0 - sf * (1.0 - f))).round();
    let vf = vf.round();

    let (r, g, b) = match sector as i32 {
        0 => (vf, t, p),
        1 => (q, vf, p),
        2 => (p, vf, t),
        3 => (p, q, vf),
        4 => (t, p, vf),
        _ => (vf, p, q),
    };
    (r as u8, g as u8, b as u8)
}
