use crate::color::Color;

/// HSL view of a [`Color`], rounded for display.
///
/// `h` is in whole degrees (0–360), `s`/`l` in whole percent (0–100).  Alpha
/// is carried through unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: u16,
    pub s: u8,
    pub l: u8,
    pub a: f64,
}

impl Hsla {
    /// `hsl(h, s%, l%)`.
    pub fn to_hsl_string(self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }

    /// `hsla(h, s%, l%, a)` with alpha to two decimal places.
    pub fn to_hsla_string(self) -> String {
        format!("hsla({}, {}%, {}%, {:.2})", self.h, self.s, self.l, self.a)
    }
}

impl Color {
    /// Unrounded HSL: hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
    ///
    /// Achromatic colors (`max == min`) report hue and saturation 0.
    pub fn hsl_components(self) -> (f64, f64, f64) {
        let (r, g, b) = self.unit_rgb();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h / 6.0 * 360.0, s, l)
    }

    /// HSLA rounded to whole degrees / percent.
    pub fn to_hsla(self) -> Hsla {
        let (h, s, l) = self.hsl_components();
        Hsla {
            h: h.round() as u16,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
            a: self.a,
        }
    }

    /// Build a color from HSL (hue in degrees, `s`/`l` in `[0, 1]`) and alpha.
    ///
    /// Hue wraps; `s` and `l` are clamped.  Channels round to the nearest byte.
    pub fn from_hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);
        let to_byte = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;

        if s == 0.0 {
            let v = to_byte(l);
            return Color::rgba(v, v, v, a);
        }

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 { t += 1.0; }
            if t > 1.0 { t -= 1.0; }
            if t < 1.0 / 6.0 { return p + (q - p) * 6.0 * t; }
            if t < 0.5 { return q; }
            if t < 2.0 / 3.0 { return p + (q - p) * (2.0 / 3.0 - t) * 6.0; }
            p
        }

        let hn = h.rem_euclid(360.0) / 360.0;
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Color::rgba(
            to_byte(hue_to_rgb(p, q, hn + 1.0 / 3.0)),
            to_byte(hue_to_rgb(p, q, hn)),
            to_byte(hue_to_rgb(p, q, hn - 1.0 / 3.0)),
            a,
        )
    }
}
