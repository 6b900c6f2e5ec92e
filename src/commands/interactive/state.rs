//! Form state for the interactive session

use racketbook::{Combination, Playstyle, Suggestion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Suggest,
    Enter,
    ShowRecent,
    Delete,
    Duplicate,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Suggest,
        MenuAction::Enter,
        MenuAction::ShowRecent,
        MenuAction::Delete,
        MenuAction::Duplicate,
        MenuAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Suggest => "Suggest equipment for a playstyle",
            MenuAction::Enter => "Enter my own combination",
            MenuAction::ShowRecent => "Show recent combinations",
            MenuAction::Delete => "Delete a saved combination",
            MenuAction::Duplicate => "Duplicate a saved combination",
            MenuAction::Quit => "Quit",
        }
    }

    /// Actions that need at least one saved combination are hidden otherwise.
    pub fn available(has_saved: bool) -> Vec<MenuAction> {
        Self::ALL
            .into_iter()
            .filter(|action| has_saved || !matches!(action, MenuAction::Delete | MenuAction::Duplicate))
            .collect()
    }
}

/// What the form remembers between menu rounds.
#[derive(Debug, Default)]
pub struct FormState {
    /// Last suggestion shown and not yet saved or discarded.
    pub pending: Option<Suggestion>,
}

impl FormState {
    pub fn take_pending(&mut self) -> Option<Suggestion> {
        self.pending.take()
    }
}

/// Playstyle text saved from the form, whether suggested or typed in.
pub fn saved_playstyle(style: Playstyle) -> &'static str {
    style.display_name()
}

/// One line per saved combination for a selection prompt.
pub fn choice_labels(combinations: &[Combination]) -> Vec<String> {
    combinations
        .iter()
        .map(|c| format!("#{} {}", c.id, c.summary()))
        .collect()
}
