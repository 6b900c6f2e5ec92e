use racketbook::config::ConfigWarning;

use crate::ui::text::ColoredText;
use crate::ui::theme::Icon;

pub fn render_config_warning(warning: &ConfigWarning, color: bool, unicode: bool) -> String {
    format!(
        "{} {}\n",
        ColoredText::warning(Icon::Warning.glyph(unicode)).render(color),
        ColoredText::warning(warning.to_string()).render(color)
    )
}

pub fn render_error(message: &str, color: bool, unicode: bool) -> String {
    format!(
        "{} {}\n",
        ColoredText::error(Icon::Error.glyph(unicode)).render(color),
        ColoredText::error(message).render(color)
    )
}

pub fn render_notice(message: &str, color: bool) -> String {
    format!("{}\n", ColoredText::dim(message).render(color))
}
