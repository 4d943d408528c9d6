use gtk::prelude::*;
use gtk4 as gtk;
use mecanum::Theme;
use mecanum::surface::Color;

/// Follows the desktop's foreground and background so the diagram stays
/// legible under dark themes. Signal and marker colours are fixed.
pub fn from_context(context: &gtk::StyleContext) -> Theme {
    let fallback = Theme::default();
    Theme {
        background: lookup_color(context, "theme_base_color", fallback.background),
        ink: lookup_color(context, "theme_fg_color", fallback.ink),
        ..fallback
    }
}

fn lookup_color(context: &gtk::StyleContext, name: &str, fallback: Color) -> Color {
    context
        .lookup_color(name)
        .map(|c| {
            Color::new(
                c.red() as f64,
                c.green() as f64,
                c.blue() as f64,
                c.alpha() as f64,
            )
        })
        .unwrap_or(fallback)
}
