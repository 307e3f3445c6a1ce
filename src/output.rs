// Console output helpers: coloured status lines and the tournament table.
// Styling is cosmetic; the text itself is what the user relies on.

use crate::model::TournamentSummary;
use crossterm::style::Stylize;

/// Prints a success message with a green "Success!" prefix.
pub fn print_success(message: &str) {
    println!("\n{} {}", "Success!".green().bold(), message);
}

/// Prints a warning in yellow.
pub fn print_warning(message: &str) {
    println!("{}", message.yellow().bold());
}

pub fn print_info(message: &str) {
    println!("{}", message);
}

/// Prints an error to stderr with a red label, e.g. `API Error: 404 Not Found`.
pub fn print_error(label: &str, message: &str) {
    eprintln!("{} {}", format!("{label}:").red().bold(), message);
}

pub fn print_goodbye() {
    println!("{}", "Goodbye!".blue().bold());
}

pub fn print_separator() {
    println!("\n{}", "=".repeat(30));
}

const TABLE_HEADERS: [&str; 5] = ["ID", "Date", "Type", "Flavor", "Participants"];

/// Lays out the list view as plain text. Columns are as wide as their
/// widest cell; an empty slice still yields the title and header rows.
pub fn render_tournament_table(tournaments: &[TournamentSummary]) -> String {
    let rows: Vec<[String; 5]> = tournaments
        .iter()
        .map(|t| {
            [
                t.id.to_string(),
                t.date.clone(),
                t.kind.clone(),
                t.flavor.clone(),
                t.participants_cell(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(c, w)| format!("{:<w$}", c, w = w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let header: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();
    let rule_width = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);

    let mut out = String::new();
    out.push_str("All Tournaments\n");
    out.push_str(&line(&header));
    out.push('\n');
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');
    for row in &rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

pub fn print_tournament_table(tournaments: &[TournamentSummary]) {
    let table = render_tournament_table(tournaments);
    let mut lines = table.lines();
    if let Some(title) = lines.next() {
        println!("\n{}", title.italic());
    }
    if let Some(header) = lines.next() {
        println!("{}", header.bold());
    }
    for l in lines {
        println!("{}", l);
    }
}
