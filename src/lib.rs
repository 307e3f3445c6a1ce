// Library root
// -----------
// This crate exposes the pieces of the tournament manager so the binary
// (`main.rs`) stays a thin startup wrapper and the flows can be tested.
//
// Module responsibilities:
// - `model`: tournament record types as the API sends and expects them.
// - `config`: API URL and credentials, prompting for anything missing.
// - `api`: authenticated HTTP calls, error reporting, `TournamentApi`.
// - `prompt`: the `Prompter` seam over terminal prompts.
// - `form`: the interactive record form used by add and update.
// - `ui`: the main menu loop and its per-action handlers.
// - `output`: coloured status lines and the tournament table.
pub mod api;
pub mod config;
pub mod form;
pub mod model;
pub mod output;
pub mod prompt;
pub mod ui;
