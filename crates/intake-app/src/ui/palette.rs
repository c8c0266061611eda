use eframe::egui::{Color32, Visuals};

/// Accent colors shared by both tracker screens.
///
/// Kept apart from `egui::Visuals` so the purple accent survives theme
/// switches while text colors still follow the active theme.
#[derive(Debug, Clone)]
pub(crate) struct Palette {
    pub(crate) accent: Color32,
    pub(crate) button: Color32,
    pub(crate) button_selected: Color32,
    pub(crate) on_accent: Color32,
    pub(crate) muted_text: Color32,
    pub(crate) destructive: Color32,
}

impl Palette {
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            accent: Color32::from_rgb(0xC1, 0x7C, 0xEB),
            button: Color32::from_rgb(0xC1, 0x87, 0xE5),
            button_selected: Color32::from_rgb(0x9B, 0x63, 0xD1),
            on_accent: Color32::WHITE,
            muted_text: visuals.weak_text_color(),
            destructive: visuals.error_fg_color,
        }
    }
}
