//! The fixed four-color palette used for trip tagging and swatch selection.

use egui::Color32;

/// One of the four named colors a trip can be tagged with.
///
/// The palette is fixed and not user-extensible; [`PaletteColor::ALL`] lists
/// the colors in the order the add-trip swatch row displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteColor {
    Turquoise,
    LightBlue,
    TealGreen,
    DuckBlue,
}

impl PaletteColor {
    /// Swatch display order.
    pub const ALL: [Self; 4] = [
        Self::Turquoise,
        Self::LightBlue,
        Self::TealGreen,
        Self::DuckBlue,
    ];

    pub const fn color32(self) -> Color32 {
        match self {
            Self::Turquoise => Color32::from_rgb(64, 224, 208),
            Self::LightBlue => Color32::from_rgb(173, 216, 230),
            Self::TealGreen => Color32::from_rgb(0, 128, 128),
            Self::DuckBlue => Color32::from_rgb(0, 105, 148),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Turquoise => "Turquoise",
            Self::LightBlue => "Light Blue",
            Self::TealGreen => "Teal Green",
            Self::DuckBlue => "Duck Blue",
        }
    }
}

impl Default for PaletteColor {
    /// The first swatch, preselected in a fresh add-trip draft.
    fn default() -> Self {
        Self::Turquoise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_order_is_fixed() {
        assert_eq!(
            PaletteColor::ALL,
            [
                PaletteColor::Turquoise,
                PaletteColor::LightBlue,
                PaletteColor::TealGreen,
                PaletteColor::DuckBlue,
            ]
        );
        assert_eq!(PaletteColor::default(), PaletteColor::ALL[0]);
    }

    #[test]
    fn rgb_values() {
        assert_eq!(
            PaletteColor::Turquoise.color32(),
            Color32::from_rgb(64, 224, 208)
        );
        assert_eq!(
            PaletteColor::LightBlue.color32(),
            Color32::from_rgb(173, 216, 230)
        );
        assert_eq!(
            PaletteColor::TealGreen.color32(),
            Color32::from_rgb(0, 128, 128)
        );
        assert_eq!(
            PaletteColor::DuckBlue.color32(),
            Color32::from_rgb(0, 105, 148)
        );
    }
}
