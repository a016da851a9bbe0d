// src/ui/css.rs - stylesheet embedding

/// Stylesheet compiled into the binary so desktop and web builds render
/// identically. Served from a `style` element by [`crate::ui::App`].
pub const STYLE_SHEET: &str = include_str!("../../public/styles.css");
