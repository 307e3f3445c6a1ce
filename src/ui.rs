// UI layer: the interactive main menu and one handler per action. The
// handlers are small and synchronous; API failures have already been shown
// by the client, so a `None` from it just ends the action.

use crate::api::TournamentApi;
use crate::form::collect_tournament;
use crate::model::TournamentSummary;
use crate::output;
use crate::prompt::Prompter;
use anyhow::Result;
use log::info;

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Add,
    Update,
    Delete,
    Quit,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::List,
        Action::Add,
        Action::Update,
        Action::Delete,
        Action::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::List => "List all tournaments",
            Action::Add => "Add a new tournament",
            Action::Update => "Update a tournament",
            Action::Delete => "Delete a tournament",
            Action::Quit => "Quit",
        }
    }
}

/// Main interactive menu. Runs until the user picks "Quit" or backs out
/// of the menu itself.
///
/// Note: the menu is keyboard-driven: arrow keys and Enter choose an
/// option, Esc leaves.
pub fn main_menu<A: TournamentApi, P: Prompter>(api: &A, prompter: &mut P) -> Result<()> {
    let items: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
    loop {
        output::print_separator();
        let action = prompter
            .select("What do you want to do?", &items, 0)?
            .map_or(Action::Quit, |i| Action::ALL[i]);
        info!("menu action: {:?}", action);
        match action {
            Action::List => list_tournaments(api),
            Action::Add => add_tournament(api, prompter)?,
            Action::Update => update_tournament(api, prompter)?,
            Action::Delete => delete_tournament(api, prompter)?,
            Action::Quit => break,
        }
    }
    output::print_goodbye();
    Ok(())
}

/// Fetch everything and print it as a table. An empty collection still
/// prints the (empty) table.
pub fn list_tournaments<A: TournamentApi>(api: &A) {
    if let Some(tournaments) = api.list() {
        output::print_tournament_table(&tournaments);
    }
}

/// Collect a new record and POST it.
pub fn add_tournament<A: TournamentApi, P: Prompter>(api: &A, prompter: &mut P) -> Result<()> {
    let Some(data) = collect_tournament(prompter, None)? else {
        return Ok(());
    };
    if let Some(created) = api.create(&data) {
        output::print_success(&format!("Tournament created with ID: {}", created.id));
    }
    Ok(())
}

/// Pick a tournament, re-fetch it, edit it with the current values as
/// defaults and PUT the whole record back.
pub fn update_tournament<A: TournamentApi, P: Prompter>(api: &A, prompter: &mut P) -> Result<()> {
    let Some(chosen) = choose_tournament(api, prompter, "update")? else {
        return Ok(());
    };
    output::print_info(&format!("Fetching details for tournament #{}...", chosen.id));

    let Some(details) = api.get(chosen.id) else {
        return Ok(());
    };
    let Some(data) = collect_tournament(prompter, Some(&details))? else {
        return Ok(());
    };
    if api.update(chosen.id, &data).is_some() {
        output::print_success("Tournament updated.");
    }
    Ok(())
}

/// Pick a tournament and delete it after an explicit confirmation.
pub fn delete_tournament<A: TournamentApi, P: Prompter>(api: &A, prompter: &mut P) -> Result<()> {
    let Some(chosen) = choose_tournament(api, prompter, "delete")? else {
        return Ok(());
    };
    let question = format!(
        "Are you sure you want to delete tournament #{}? This cannot be undone.",
        chosen.id
    );
    if prompter.confirm(&question, false)? != Some(true) {
        return Ok(());
    }
    if api.delete(chosen.id).is_some() {
        output::print_success("Tournament deleted.");
    }
    Ok(())
}

/// Show "<id>: <date> - <flavor>" for every tournament and return the
/// record behind the chosen line. The index maps straight back to the
/// record, so the label is never parsed.
fn choose_tournament<A: TournamentApi, P: Prompter>(
    api: &A,
    prompter: &mut P,
    verb: &str,
) -> Result<Option<TournamentSummary>> {
    let Some(mut tournaments) = api.list() else {
        return Ok(None);
    };
    if tournaments.is_empty() {
        output::print_warning(&format!("No tournaments found to {verb}."));
        return Ok(None);
    }
    let labels: Vec<String> = tournaments.iter().map(TournamentSummary::choice_label).collect();
    let prompt = format!("Which tournament do you want to {verb}?");
    Ok(prompter
        .select(&prompt, &labels, 0)?
        .filter(|&i| i < tournaments.len())
        .map(|i| tournaments.swap_remove(i)))
}
