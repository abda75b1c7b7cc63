//! Per-layer RGB matrix indicators.
//!
//! Each keyboard provides a color map with the shape of its keymap. On every refresh the
//! keys of the highest active layer are painted with their color.

use strum::FromRepr;

use crate::color::Hsv;
use crate::host::RgbMatrixHost;

/// Palette of the LED color maps.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    #[default]
    Off = 0,
    Purple,
    Pink,
    Cyan,
    Torq,
    LightRed,
    Blue,
    Orange,
    Red,
}

impl Color {
    pub const fn hsv(self) -> Hsv {
        match self {
            Color::Off => Hsv::new(0, 0, 0),
            Color::Purple => Hsv::new(205, 255, 255),
            Color::Pink => Hsv::new(251, 223, 255),
            Color::Cyan => Hsv::new(128, 255, 255),
            Color::Torq => Hsv::new(120, 255, 204),
            Color::LightRed => Hsv::new(255, 239, 255),
            Color::Blue => Hsv::new(170, 215, 221),
            Color::Orange => Hsv::new(20, 208, 255),
            Color::Red => Hsv::new(0, 255, 255),
        }
    }
}

/// Paint the LEDs in `led_min..=led_max` with the color map of the highest active layer.
///
/// Saturated colors use the global brightness of the matrix. Always returns `false`, so the
/// keyboard level indicators still run.
pub fn rgb_matrix_indicators_advanced_user<H: RgbMatrixHost, const ROW: usize, const COL: usize>(
    ledmap: &[[[Color; COL]; ROW]],
    host: &mut H,
    led_min: u8,
    led_max: u8,
) -> bool {
    let layer = host.layer_state().highest_layer() as usize;
    let Some(colors) = ledmap.get(layer) else {
        warn!("No LED map for layer {}", layer);
        return false;
    };

    let brightness = host.brightness();
    for (row, row_colors) in colors.iter().enumerate() {
        for (col, color) in row_colors.iter().enumerate() {
            let Some(index) = host.led_index(row, col) else {
                continue;
            };
            if index < led_min || index > led_max {
                continue;
            }
            let mut hsv = color.hsv();
            if hsv.s > 0 {
                hsv = hsv.with_value(brightness);
            }
            host.set_color(index, hsv.to_rgb());
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette() {
        assert_eq!(Color::default().hsv(), Hsv::new(0, 0, 0));
        assert_eq!(Color::from_repr(3), Some(Color::Cyan));
        assert_eq!(Color::from_repr(8), Some(Color::Red));
        assert_eq!(Color::from_repr(9), None);
        assert_eq!(Color::Torq.hsv().v, 204);
    }
}
