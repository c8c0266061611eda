pub(crate) const ARROW_BACK: &str = "⬅";
pub(crate) const BACKSPACE: &str = "⏴";
pub(crate) const CHECK: &str = "✔";
pub(crate) const PLUS: &str = "➕";

#[cfg(test)]
mod tests {
    use eframe::egui::{Context, FontId, RawInput};

    use super::{ARROW_BACK, BACKSPACE, CHECK, PLUS};

    #[test]
    fn default_fonts_cover_every_icon() {
        let ctx = Context::default();
        let _ = ctx.run(RawInput::default(), |_| {});
        for icon in [ARROW_BACK, BACKSPACE, CHECK, PLUS] {
            for c in icon.chars() {
                let found = ctx.fonts_mut(|fonts| fonts.has_glyph(&FontId::default(), c));
                assert!(found, "missing glyph {c:?} (U+{:04X})", u32::from(c));
            }
        }
    }
}
