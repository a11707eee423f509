use crate::Float;

// The BT.709 luma coefficients, applied directly to the gamma-encoded
// components.
const LUMINANCE_WEIGHTS: [Float; 3] = [0.2126, 0.7152, 0.0722];

/// Convert RGB to HSV.
///
/// All components are in the unit range. Hue is a fraction of a full turn and
/// always less than 1, with red at 0. Grays have hue 0 and saturation 0, and
/// black also has value 0.
pub fn rgb_to_hsv(rgb: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let value = max;

    if min == max {
        return [0.0, 0.0, value];
    }

    let delta = max - min;
    let saturation = delta / max;

    let rc = (max - r) / delta;
    let gc = (max - g) / delta;
    let bc = (max - b) / delta;

    let hue = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    let mut hue = (hue / 6.0).rem_euclid(1.0);
    if 1.0 <= hue {
        // rem_euclid may round a tiny negative hue up to exactly 1.
        hue = 0.0;
    }

    [hue, saturation, value]
}

/// Convert HSV to RGB.
///
/// Hue is interpreted as a fraction of a full turn, so 0 and 1 both denote red.
pub fn hsv_to_rgb(hsv: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *hsv;
    if s == 0.0 {
        return [v, v, v];
    }

    let h6 = (h * 6.0).rem_euclid(6.0);
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector as u8 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Quantize unit-range RGB components to 8 bits each.
///
/// Components are rounded to the nearest level, after clamping to the unit
/// range.
pub fn to_24bit(rgb: &[Float; 3]) -> [u8; 3] {
    let quantize = |c: Float| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [quantize(rgb[0]), quantize(rgb[1]), quantize(rgb[2])]
}

/// Scale 8-bit RGB components to the unit range.
pub fn from_24bit(rgb: [u8; 3]) -> [Float; 3] {
    rgb.map(|c| c as Float / 255.0)
}

/// Compute the relative luminance of the RGB components.
///
/// This is the BT.709-weighted sum of the red, green, and blue components as
/// given, i.e., without first linearizing them.
pub fn relative_luminance(rgb: &[Float; 3]) -> Float {
    LUMINANCE_WEIGHTS[0] * rgb[0] + LUMINANCE_WEIGHTS[1] * rgb[1] + LUMINANCE_WEIGHTS[2] * rgb[2]
}

// ====================================================================================================================
