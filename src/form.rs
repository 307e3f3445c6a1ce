// Tournament form: walks the user through every field of a record. When
// editing, the fetched record provides the defaults for each question.

use crate::model::{Placements, Rank, Tournament, TournamentType};
use crate::output;
use crate::prompt::Prompter;
use anyhow::Result;

/// Ask for a complete tournament record.
///
/// Returns `Ok(None)` when the user aborts any prompt or ends up with no
/// participants; in both cases nothing should be sent to the API. A
/// returned record always has at least one participant.
pub fn collect_tournament<P: Prompter>(
    prompter: &mut P,
    existing: Option<&Tournament>,
) -> Result<Option<Tournament>> {
    output::print_info("\nEnter Tournament Details:");

    let Some(date) = prompter.text("Date (YYYY-MM-DD):", existing.map(|t| t.date.as_str()))? else {
        return Ok(None);
    };

    let types: Vec<String> = TournamentType::ALL.iter().map(|t| t.to_string()).collect();
    let default_type = existing
        .and_then(|t| TournamentType::ALL.iter().position(|k| *k == t.kind))
        .unwrap_or(0);
    let Some(type_idx) = prompter.select("Tournament Type:", &types, default_type)? else {
        return Ok(None);
    };
    let kind = TournamentType::ALL[type_idx];

    let Some(flavor) = prompter.text("Flavor Text:", existing.map(|t| t.flavor.as_str()))? else {
        return Ok(None);
    };

    let Some(participants) = collect_participants(prompter, existing)? else {
        return Ok(None);
    };
    if participants.is_empty() {
        output::print_warning("A tournament must have participants.");
        return Ok(None);
    }

    let Some(placements) =
        collect_placements(prompter, &participants, existing.map(|t| &t.placements))?
    else {
        return Ok(None);
    };

    Ok(Some(Tournament {
        date,
        kind,
        flavor,
        participants,
        placements,
    }))
}

/// Reuse the existing list if the user declines to re-enter it, otherwise
/// ask for names one at a time until a blank answer. `Ok(None)` means the
/// user aborted; an empty list is returned as-is for the caller to reject.
fn collect_participants<P: Prompter>(
    prompter: &mut P,
    existing: Option<&Tournament>,
) -> Result<Option<Vec<String>>> {
    if let Some(current) = existing.map(|t| &t.participants).filter(|p| !p.is_empty()) {
        output::print_info(&format!("Current Participants: {}", current.join(", ")));
        match prompter.confirm("Do you want to re-enter all participants?", false)? {
            None => return Ok(None),
            Some(false) => return Ok(Some(current.clone())),
            Some(true) => {}
        }
    }

    let mut participants: Vec<String> = Vec::new();
    loop {
        let prompt = format!(
            "Add participant #{} (or press Enter to finish):",
            participants.len() + 1
        );
        let Some(answer) = prompter.text(&prompt, None)? else {
            return Ok(None);
        };
        let name = answer.trim();
        if name.is_empty() {
            break;
        }
        if participants.iter().any(|p| p == name) {
            output::print_warning(&format!("{name} is already in the list."));
            continue;
        }
        participants.push(name.to_string());
    }
    Ok(Some(participants))
}

/// One multi-select per rank over the final participant list.
fn collect_placements<P: Prompter>(
    prompter: &mut P,
    participants: &[String],
    previous: Option<&Placements>,
) -> Result<Option<Placements>> {
    let mut placements = Placements::default();
    for rank in Rank::ALL {
        let prior = previous.map(|p| p.get(rank)).unwrap_or_default();
        let checked = preselection(participants, prior);
        let prompt = format!("Select {} Place winner(s):", rank.label());
        let Some(picked) = prompter.multi_select(&prompt, participants, &checked)? else {
            return Ok(None);
        };
        let names = picked
            .into_iter()
            .filter_map(|i| participants.get(i).cloned())
            .collect();
        placements.set(rank, names);
    }
    Ok(Some(placements))
}

/// One flag per participant: set when that name was previously placed on
/// the rank. Names that are no longer participants are ignored, and an
/// empty prior selection simply yields no flags set.
pub fn preselection(participants: &[String], prior: &[String]) -> Vec<bool> {
    participants
        .iter()
        .map(|name| prior.iter().any(|p| p == name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::script::{text, Answer, ScriptedPrompter};

    fn finals() -> Tournament {
        Tournament {
            date: "2024-05-01".into(),
            kind: TournamentType::Team,
            flavor: "Finals".into(),
            participants: vec!["Ann".into(), "Bo".into(), "Cy".into()],
            placements: Placements {
                first_place: vec!["Bo".into()],
                second_place: vec!["Ann".into(), "Gone".into()],
                third_place: vec![],
            },
        }
    }

    #[test]
    fn new_record_collects_every_field() {
        let mut p = ScriptedPrompter::new([
            text("2024-07-04"),
            Answer::Pick(1),
            text("Summer"),
            text("Ann"),
            text("  Bo "),
            Answer::Enter,
            Answer::Picks(vec![1]),
            Answer::Picks(vec![0]),
            Answer::Picks(vec![]),
        ]);
        let t = collect_tournament(&mut p, None).unwrap().unwrap();
        assert_eq!(t.date, "2024-07-04");
        assert_eq!(t.kind, TournamentType::Team);
        assert_eq!(t.flavor, "Summer");
        assert_eq!(t.participants, ["Ann", "Bo"]);
        assert_eq!(t.placements.first_place, ["Bo"]);
        assert_eq!(t.placements.second_place, ["Ann"]);
        assert!(t.placements.third_place.is_empty());
        assert_eq!(p.checked, vec![vec![false, false]; 3]);
        assert_eq!(p.remaining(), 0);
    }

    #[test]
    fn no_participants_yields_no_record() {
        let mut p = ScriptedPrompter::new([
            text("2024-07-04"),
            Answer::Enter,
            text("Empty"),
            Answer::Enter,
        ]);
        assert_eq!(collect_tournament(&mut p, None).unwrap(), None);
        assert_eq!(p.remaining(), 0);
    }

    #[test]
    fn duplicate_names_are_skipped() {
        let mut p = ScriptedPrompter::new([
            text("d"),
            Answer::Enter,
            text("f"),
            text("Ann"),
            text("Ann"),
            text("Bo"),
            Answer::Enter,
            Answer::Enter,
            Answer::Enter,
            Answer::Enter,
        ]);
        let t = collect_tournament(&mut p, None).unwrap().unwrap();
        assert_eq!(t.participants, ["Ann", "Bo"]);
        // The rejected duplicate does not advance the counter.
        let numbered: Vec<&String> = p.asked.iter().filter(|q| q.starts_with("Add participant")).collect();
        assert_eq!(numbered.len(), 4);
        assert!(numbered[2].starts_with("Add participant #2 "));
        assert!(numbered[3].starts_with("Add participant #3 "));
    }

    #[test]
    fn editing_keeps_participants_and_order_when_declined() {
        let existing = finals();
        let mut p = ScriptedPrompter::new([
            Answer::Enter,
            Answer::Enter,
            Answer::Enter,
            Answer::No,
            Answer::Enter,
            Answer::Enter,
            Answer::Enter,
        ]);
        let t = collect_tournament(&mut p, Some(&existing)).unwrap().unwrap();
        assert_eq!(t.participants, existing.participants);
        assert_eq!(t.date, existing.date);
        assert_eq!(t.kind, existing.kind);
        assert_eq!(t.flavor, existing.flavor);
        assert_eq!(
            p.text_defaults[..2],
            [Some("2024-05-01".to_string()), Some("Finals".to_string())]
        );
    }

    #[test]
    fn editing_preselects_prior_placements_still_present() {
        let existing = finals();
        let mut p = ScriptedPrompter::new([
            Answer::Enter,
            Answer::Enter,
            Answer::Enter,
            Answer::No,
            Answer::Enter,
            Answer::Enter,
            Answer::Enter,
        ]);
        let t = collect_tournament(&mut p, Some(&existing)).unwrap().unwrap();
        assert_eq!(
            p.checked,
            [
                vec![false, true, false],
                vec![true, false, false],
                vec![false, false, false],
            ]
        );
        // "Gone" is not a participant any more, so it drops out.
        assert_eq!(t.placements.second_place, ["Ann"]);
    }

    #[test]
    fn re_entering_participants_replaces_the_list() {
        let existing = finals();
        let mut p = ScriptedPrompter::new([
            Answer::Enter,
            Answer::Enter,
            Answer::Enter,
            Answer::Yes,
            text("Bo"),
            text("Dee"),
            Answer::Enter,
            Answer::Enter,
            Answer::Enter,
            Answer::Enter,
        ]);
        let t = collect_tournament(&mut p, Some(&existing)).unwrap().unwrap();
        assert_eq!(t.participants, ["Bo", "Dee"]);
        assert_eq!(p.checked[0], [true, false]);
        assert_eq!(t.placements.first_place, ["Bo"]);
    }

    #[test]
    fn abort_anywhere_stops_the_form() {
        for at in 0..4 {
            let mut answers = vec![text("d"), Answer::Pick(0), text("f"), text("Ann")];
            answers.truncate(at);
            answers.push(Answer::Abort);
            let mut p = ScriptedPrompter::new(answers);
            assert_eq!(collect_tournament(&mut p, None).unwrap(), None, "abort at {at}");
        }
    }

    #[test]
    fn abort_on_placement_stops_the_form() {
        let mut p = ScriptedPrompter::new([
            text("d"),
            Answer::Pick(0),
            text("f"),
            text("Ann"),
            Answer::Enter,
            Answer::Picks(vec![0]),
            Answer::Abort,
        ]);
        assert_eq!(collect_tournament(&mut p, None).unwrap(), None);
    }

    #[test]
    fn preselection_with_empty_prior_is_all_unchecked() {
        let names = vec!["a".to_string(), "b".to_string()];
        assert_eq!(preselection(&names, &[]), [false, false]);
    }
}
