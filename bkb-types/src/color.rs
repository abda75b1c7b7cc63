//! Colors for per-key indicators.

/// A color in the 8-bit HSV space used by the RGB matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

/// A color ready to be pushed to a LED driver.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    /// Same color at another brightness
    pub const fn with_value(self, v: u8) -> Self {
        Self { v, ..self }
    }

    /// Fixed-point HSV to RGB conversion.
    ///
    /// The hue circle is split into six regions of ~42.5 steps, which is the conversion RGB
    /// matrix drivers expect. Unsaturated colors are plain grey.
    pub const fn to_rgb(self) -> Rgb {
        if self.s == 0 {
            return Rgb {
                r: self.v,
                g: self.v,
                b: self.v,
            };
        }

        let h = self.h as u16;
        let s = self.s as u16;
        let v = self.v as u16;

        let region = h * 6 / 255;
        let remainder = ((h * 2 - region * 85) * 3) as u8 as u16;

        let p = ((v * (255 - s)) >> 8) as u8;
        let q = ((v * (255 - ((s * remainder) >> 8))) >> 8) as u8;
        let t = ((v * (255 - ((s * (255 - remainder)) >> 8))) >> 8) as u8;
        let v = v as u8;

        let (r, g, b) = match region {
            0 | 6 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Rgb { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grey_when_unsaturated() {
        assert_eq!(Hsv::new(0, 0, 0).to_rgb(), Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(Hsv::new(77, 0, 120).to_rgb(), Rgb { r: 120, g: 120, b: 120 });
    }

    #[test]
    fn test_primary_colors() {
        assert_eq!(Hsv::new(0, 255, 255).to_rgb(), Rgb { r: 255, g: 0, b: 0 });
        // Region 6 wraps to red
        assert_eq!(Hsv::new(255, 255, 255).to_rgb(), Rgb { r: 255, g: 0, b: 0 });
        // Region 3, just past the cyan boundary
        assert_eq!(Hsv::new(128, 255, 255).to_rgb(), Rgb { r: 0, g: 252, b: 255 });
    }

    #[test]
    fn test_value_scales_output() {
        let bright = Hsv::new(20, 208, 255).to_rgb();
        let dim = Hsv::new(20, 208, 255).with_value(64).to_rgb();
        assert!(dim.r < bright.r);
        assert_eq!(bright.r, 255);
        assert_eq!(dim.r, 64);
    }
}
