use racketbook::{EquipmentSet, Playstyle};

use crate::ui::text::ColoredText;
use crate::ui::theme::Icon;

/// Catalog entries grouped by playstyle, numbered the way `suggest --pick`
/// counts them.
pub fn render_catalog<'a, I>(groups: I, color: bool, unicode: bool) -> String
where
    I: IntoIterator<Item = (Playstyle, &'a [EquipmentSet])>,
{
    let mut out = String::new();
    for (style, sets) in groups {
        out.push_str(&format!(
            "{} {}\n",
            ColoredText::info(style.display_name()).bold().render(color),
            ColoredText::dim(format!("({})", style.key())).render(color)
        ));
        for (i, set) in sets.iter().enumerate() {
            out.push_str(&format!(
                "  {} {}. {} + {} / {}\n",
                Icon::Bullet.glyph(unicode),
                i + 1,
                set.racket,
                set.front,
                set.back
            ));
        }
    }
    out
}
