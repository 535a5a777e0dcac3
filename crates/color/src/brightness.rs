use crate::color::Color;
use std::fmt;

/// Perceived-brightness bucket, ordered darkest to lightest.
///
/// The seven tiers and their luma thresholds are fixed: presentation code
/// maps each one to a `brightness-*` utility class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BrightnessTier {
    B0,
    B50,
    B75,
    B100,
    B125,
    B150,
    B200,
}

impl BrightnessTier {
    /// All tiers, ascending.
    pub const ALL: [Self; 7] = [
        Self::B0,
        Self::B50,
        Self::B75,
        Self::B100,
        Self::B125,
        Self::B150,
        Self::B200,
    ];

    /// Classify a BT.601 luma value (`0.0..=255.0`).
    ///
    /// Thresholds are strict: a luma of exactly 40 is still [`Self::B0`].
    pub fn from_luma(luma: f64) -> Self {
        if luma > 240.0 {
            Self::B200
        } else if luma > 200.0 {
            Self::B150
        } else if luma > 160.0 {
            Self::B125
        } else if luma > 120.0 {
            Self::B100
        } else if luma > 80.0 {
            Self::B75
        } else if luma > 40.0 {
            Self::B50
        } else {
            Self::B0
        }
    }

    /// Position in [`Self::ALL`] (0 = darkest).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The utility-class name, e.g. `brightness-125`.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::B0   => "brightness-0",
            Self::B50  => "brightness-50",
            Self::B75  => "brightness-75",
            Self::B100 => "brightness-100",
            Self::B125 => "brightness-125",
            Self::B150 => "brightness-150",
            Self::B200 => "brightness-200",
        }
    }

    /// `true` when dark foreground text reads better on this tier.
    #[inline]
    pub fn is_light(self) -> bool {
        self >= Self::B125
    }
}

impl fmt::Display for BrightnessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl Color {
    /// Perceived brightness using ITU-R BT.601 luma weights (`0.0..=255.0`).
    #[inline]
    pub fn luma(self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    /// Brightness tier of this color.  Alpha is ignored.
    #[inline]
    pub fn brightness(self) -> BrightnessTier {
        BrightnessTier::from_luma(self.luma())
    }
}
