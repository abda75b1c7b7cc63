use strum::FromRepr;

/// Layers shared by every keymap in this crate.
///
/// The discriminant is the index of the layer in the keymap tables.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Base = 0,
    Function = 1,
    Navigation = 2,
    Pointer = 3,
    Numeral = 4,
    Symbols = 5,
}

/// Number of layers in every keymap
pub const NUM_LAYERS: usize = 6;

impl Layer {
    pub const ALL: [Layer; NUM_LAYERS] = [
        Layer::Base,
        Layer::Function,
        Layer::Navigation,
        Layer::Pointer,
        Layer::Numeral,
        Layer::Symbols,
    ];

    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> Self {
        layer.index()
    }
}

/// Bitmask of the enabled layers, as reported by the host.
///
/// Bit `n` set means layer `n` is on. Hosts usually report `layer_state | default_layer_state`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// State with only the given layer enabled
    pub const fn only(layer: u8) -> Self {
        Self::new(0).with(layer)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Enable a layer. Layers above 31 cannot be represented and are ignored.
    pub const fn with(self, layer: u8) -> Self {
        if layer >= 32 {
            return self;
        }
        Self(self.0 | (1 << layer))
    }

    pub const fn without(self, layer: u8) -> Self {
        if layer >= 32 {
            return self;
        }
        Self(self.0 & !(1 << layer))
    }

    pub const fn contains(self, layer: u8) -> bool {
        layer < 32 && self.0 & (1 << layer) != 0
    }

    /// Highest enabled layer, 0 when nothing is enabled
    pub const fn highest_layer(self) -> u8 {
        if self.0 == 0 {
            0
        } else {
            (31 - self.0.leading_zeros()) as u8
        }
    }

    /// Enabled layers, highest first
    pub fn iter_active(self) -> impl Iterator<Item = u8> {
        (0..32u8).rev().filter(move |l| self.contains(*l))
    }
}

impl From<Layer> for LayerState {
    fn from(layer: Layer) -> Self {
        LayerState::only(layer.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_layer() {
        assert_eq!(LayerState::default().highest_layer(), 0);
        assert_eq!(LayerState::only(0).highest_layer(), 0);
        let state = LayerState::only(Layer::Base.index())
            .with(Layer::Navigation.index())
            .with(Layer::Numeral.index());
        assert_eq!(state.highest_layer(), Layer::Numeral.index());
        assert_eq!(state.without(4).highest_layer(), Layer::Navigation.index());
    }

    #[test]
    fn test_contains() {
        let state = LayerState::from(Layer::Pointer);
        assert!(state.contains(3));
        assert!(!state.contains(2));
        assert!(!state.contains(40));
        assert_eq!(state.with(40), state);
    }

    #[test]
    fn test_iter_active_is_highest_first() {
        let state = LayerState::new(0b10_0101);
        let mut layers = state.iter_active();
        assert_eq!(layers.next(), Some(5));
        assert_eq!(layers.next(), Some(2));
        assert_eq!(layers.next(), Some(0));
        assert_eq!(layers.next(), None);
    }

    #[test]
    fn test_layer_from_repr() {
        for layer in Layer::ALL {
            assert_eq!(Layer::from_repr(layer.index()), Some(layer));
        }
        assert_eq!(Layer::from_repr(NUM_LAYERS as u8), None);
    }
}
