use std::path::Path;

use chrono::Local;

use racketbook::{Combination, Suggestion};

use crate::ui::text::ColoredText;
use crate::ui::theme::Icon;

fn saved_at_local(combination: &Combination) -> String {
    combination
        .saved_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

fn rubbers(front: &str, back: &str) -> String {
    if back.is_empty() {
        front.to_string()
    } else {
        format!("{} / {}", front, back)
    }
}

pub fn render_suggestion(suggestion: &Suggestion, color: bool, unicode: bool) -> String {
    let eq = &suggestion.equipment;
    format!(
        "{} {} ({})\n  Racket:  {}\n  Rubbers: {}\n  {} {}\n",
        Icon::Bullet.glyph(unicode),
        ColoredText::info(format!("Suggestion for {}", suggestion.playstyle))
            .bold()
            .render(color),
        suggestion.resolved,
        eq.racket,
        rubbers(&eq.front, &eq.back),
        Icon::Arrow.glyph(unicode),
        ColoredText::dim(&suggestion.label).render(color),
    )
}

/// One-line confirmation after a write, e.g. `✓ Saved #3 Attacker: ...`.
pub fn render_written(verb: &str, combination: &Combination, color: bool, unicode: bool) -> String {
    format!(
        "{} {} {}\n",
        ColoredText::success(Icon::Success.glyph(unicode)).render(color),
        ColoredText::success(format!("{} #{}", verb, combination.id)).render(color),
        combination.summary()
    )
}

pub struct RecentListView<'a> {
    combinations: &'a [Combination],
    location: &'a Path,
}

impl<'a> RecentListView<'a> {
    pub fn new(combinations: &'a [Combination], location: &'a Path) -> Self {
        Self {
            combinations,
            location,
        }
    }

    pub fn render(&self, color: bool, unicode: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} {}\n\n",
            ColoredText::info("Saved combinations").bold().render(color),
            ColoredText::dim(format!("({})", self.location.display())).render(color)
        ));

        if self.combinations.is_empty() {
            out.push_str(&format!(
                "{}\n",
                ColoredText::dim("Nothing saved yet. Try `racketbook suggest attacker --save`.")
                    .render(color)
            ));
            return out;
        }

        for c in self.combinations {
            out.push_str(&format!(
                "{} {} {}  {}\n",
                Icon::Bullet.glyph(unicode),
                ColoredText::plain(format!("#{:<4}", c.id)).bold().render(color),
                ColoredText::dim(saved_at_local(c)).render(color),
                c.playstyle
            ));
            out.push_str(&format!(
                "    {} + {}\n",
                c.racket,
                rubbers(&c.rubber_front, &c.rubber_back)
            ));
            if !c.notes.is_empty() {
                out.push_str(&format!("    {}\n", ColoredText::dim(&c.notes).render(color)));
            }
        }
        out
    }
}

pub fn render_classification(
    racket: &str,
    front: &str,
    back: &str,
    label: &str,
    color: bool,
) -> String {
    format!(
        "{} + {}\n{}\n",
        racket,
        rubbers(front, back),
        ColoredText::info(label).bold().render(color)
    )
}
