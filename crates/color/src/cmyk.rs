use crate::color::Color;
use std::fmt;

/// Subtractive CMYK view of a [`Color`], each component in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl Color {
    /// Convert to CMYK percentages.  Alpha is ignored.
    ///
    /// Pure black is special-cased to `{0, 0, 0, 100}`: with `k == 1` the
    /// chromatic rescale would divide by zero.
    pub fn to_cmyk(self) -> Cmyk {
        if self.r == 0 && self.g == 0 && self.b == 0 {
            return Cmyk { c: 0, m: 0, y: 0, k: 100 };
        }

        let (r, g, b) = self.unit_rgb();
        let (c, m, y) = (1.0 - r, 1.0 - g, 1.0 - b);
        let k = c.min(m).min(y);
        let scale = |v: f64| ((v - k) / (1.0 - k) * 100.0).round() as u8;

        Cmyk {
            c: scale(c),
            m: scale(m),
            y: scale(y),
            k: (k * 100.0).round() as u8,
        }
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({}%, {}%, {}%, {}%)", self.c, self.m, self.y, self.k)
    }
}
