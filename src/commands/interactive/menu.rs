//! Interactive prompts

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

use racketbook::{CombinationDraft, CombinationService, Pick, Playstyle, ServiceError};

use crate::ui::context::UiContext;
use crate::ui::views::combinations::{
    render_classification, render_suggestion, render_written, RecentListView,
};
use crate::ui::views::messages::{render_error, render_notice};

use super::state::{choice_labels, saved_playstyle, FormState};

pub fn select_playstyle() -> Result<Playstyle> {
    let items: Vec<&str> = Playstyle::ALL.iter().map(|s| s.display_name()).collect();
    let selection = Select::new()
        .with_prompt("Playstyle")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Playstyle::ALL[selection])
}

pub fn suggest(
    service: &CombinationService,
    state: &mut FormState,
    ui: &UiContext,
) -> Result<()> {
    let style = select_playstyle()?;

    loop {
        let suggestion = service.suggest(saved_playstyle(style), Pick::Random)?;
        print!("{}", render_suggestion(&suggestion, ui.color, ui.unicode));
        state.pending = Some(suggestion);

        let items = ["Save it", "Suggest another", "Back to menu"];
        let choice = Select::new()
            .with_prompt("What now?")
            .items(&items)
            .default(0)
            .interact()?;

        match choice {
            0 => return save_pending(service, state, ui),
            1 => continue,
            _ => {
                state.pending = None;
                return Ok(());
            }
        }
    }
}

fn save_pending(service: &CombinationService, state: &mut FormState, ui: &UiContext) -> Result<()> {
    let Some(suggestion) = state.take_pending() else {
        return Ok(());
    };
    let notes: String = Input::new()
        .with_prompt("Notes (optional)")
        .allow_empty(true)
        .interact_text()?;

    let saved = service.save(suggestion.to_draft(notes))?;
    print!("{}", render_written("Saved", &saved, ui.color, ui.unicode));
    Ok(())
}

/// Free-form entry; validation errors are shown and the menu continues.
pub fn enter(service: &CombinationService, ui: &UiContext) -> Result<()> {
    let style = select_playstyle()?;
    let racket = prompt_text("Racket", false)?;
    let front = prompt_text("Forehand rubber", false)?;
    let back = prompt_text("Backhand rubber", true)?;

    print!(
        "{}",
        render_classification(
            &racket,
            &front,
            &back,
            &service.classify(&racket, &front, &back),
            ui.color
        )
    );

    if !Confirm::new()
        .with_prompt("Save this combination?")
        .default(true)
        .interact()?
    {
        return Ok(());
    }

    let notes = prompt_text("Notes (optional)", true)?;
    let draft = CombinationDraft::new(saved_playstyle(style), racket, front)
        .with_rubber_back(back)
        .with_notes(notes);

    match service.save(draft) {
        Ok(saved) => print!("{}", render_written("Saved", &saved, ui.color, ui.unicode)),
        Err(ServiceError::Validation(e)) => {
            eprint!("{}", render_error(&e.to_string(), ui.color, ui.unicode))
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

pub fn show_recent(service: &CombinationService, limit: usize, ui: &UiContext) {
    let recent = service.list_recent(limit);
    print!(
        "{}",
        RecentListView::new(&recent, service.store().location()).render(ui.color, ui.unicode)
    );
}

pub fn delete(service: &CombinationService, limit: usize, ui: &UiContext) -> Result<()> {
    let recent = service.list_recent(limit);
    if recent.is_empty() {
        print!("{}", render_notice("Nothing saved yet.", ui.color));
        return Ok(());
    }

    let labels = choice_labels(&recent);
    let Some(selection) = Select::new()
        .with_prompt("Delete which combination?")
        .items(&labels)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };

    let target = &recent[selection];
    if !Confirm::new()
        .with_prompt(format!("Delete #{}?", target.id))
        .default(false)
        .interact()?
    {
        return Ok(());
    }

    if service.delete(target.id)? {
        println!("Deleted #{}", target.id);
    } else {
        print!("{}", render_notice("It was already gone.", ui.color));
    }
    Ok(())
}

pub fn duplicate(service: &CombinationService, limit: usize, ui: &UiContext) -> Result<()> {
    let recent = service.list_recent(limit);
    if recent.is_empty() {
        print!("{}", render_notice("Nothing saved yet.", ui.color));
        return Ok(());
    }

    let labels = choice_labels(&recent);
    let Some(selection) = Select::new()
        .with_prompt("Duplicate which combination?")
        .items(&labels)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };

    let copy = service.duplicate(recent[selection].id)?;
    print!("{}", render_written("Duplicated as", &copy, ui.color, ui.unicode));
    Ok(())
}

fn prompt_text(prompt: &str, allow_empty: bool) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .interact_text()?;
    Ok(value.trim().to_string())
}
