// Prompt layer: every question the CLI asks goes through the `Prompter`
// trait so the form and menu flows can be driven by a script in tests.
// `DialoguerPrompter` is the real terminal implementation.

use anyhow::{Context, Result};
use dialoguer::{Confirm, Input, MultiSelect, Password, Select};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

static INTERRUPTS: AtomicUsize = AtomicUsize::new(0);

/// Catch SIGINT for the whole process. The terminal layer raises SIGINT
/// when it reads Ctrl-C and only then returns an interrupted read; without
/// a handler the default action would end the process before any prompt
/// could report the abort. The handler itself only restores the cursor.
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        INTERRUPTS.fetch_add(1, Ordering::SeqCst);
        show_cursor();
    })
    .context("Failed to install Ctrl-C handler")
}

/// Number of SIGINTs caught since the handler was installed.
pub fn interrupts_seen() -> usize {
    INTERRUPTS.load(Ordering::SeqCst)
}

// dialoguer hides the cursor while a list is open and does not restore it
// when the read is interrupted.
fn show_cursor() {
    if let Err(e) = crossterm::execute!(io::stderr(), crossterm::cursor::Show) {
        log::debug!("could not restore cursor: {}", e);
    }
}

/// Interactive questions. Every method returns `Ok(None)` when the user
/// aborts the prompt (Esc, `q`, or Ctrl-C); callers treat that as "stop
/// the current flow" rather than as an error.
pub trait Prompter {
    /// Free text. When `default` is set, pressing Enter accepts it.
    fn text(&mut self, prompt: &str, default: Option<&str>) -> Result<Option<String>>;

    /// Masked input.
    fn password(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Single choice, returns the index into `items`.
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>>;

    /// Any number of choices. `checked` has one flag per item; all `false`
    /// means nothing is pre-selected.
    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[String],
        checked: &[bool],
    ) -> Result<Option<Vec<usize>>>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>>;
}

/// Terminal prompts backed by `dialoguer`.
#[derive(Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn text(&mut self, prompt: &str, default: Option<&str>) -> Result<Option<String>> {
        let mut input = Input::<String>::new();
        input.with_prompt(prompt).allow_empty(true);
        if let Some(d) = default.filter(|d| !d.is_empty()) {
            input.default(d.to_string());
        }
        abortable(input.interact_text().map(Some))
    }

    fn password(&mut self, prompt: &str) -> Result<Option<String>> {
        let res = Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact();
        abortable(res.map(Some))
    }

    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>> {
        let res = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt();
        abortable(res)
    }

    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[String],
        checked: &[bool],
    ) -> Result<Option<Vec<usize>>> {
        let res = MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .defaults(checked)
            .interact_opt();
        abortable(res)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>> {
        let res = Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact_opt();
        abortable(res)
    }
}

/// Ctrl-C reaches us as an interrupted read from the terminal layer; fold
/// it into the same "no answer" value as Esc. Any other I/O failure is real.
fn abortable<T>(res: io::Result<Option<T>>) -> Result<Option<T>> {
    match res {
        Ok(answer) => Ok(answer),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => {
            show_cursor();
            log::debug!("prompt aborted by user");
            Ok(None)
        }
        Err(e) => Err(e).context("Failed to read from terminal"),
    }
}


#[cfg(test)]
pub(crate) mod script {
    //! A `Prompter` that replays canned answers, for driving flows in tests.

    use super::Prompter;
    use anyhow::Result;
    use std::collections::VecDeque;

    #[derive(Debug, Clone)]
    pub enum Answer {
        Text(String),
        /// Accept the offered default (empty string when there is none).
        Enter,
        Pick(usize),
        Picks(Vec<usize>),
        Yes,
        No,
        Abort,
    }

    pub fn text(s: &str) -> Answer {
        Answer::Text(s.to_string())
    }

    #[derive(Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<Answer>,
        /// Every prompt string, in the order asked.
        pub asked: Vec<String>,
        /// Pre-selection masks passed to `multi_select`, in order.
        pub checked: Vec<Vec<bool>>,
        /// Items offered to each `select`, in order.
        pub offered: Vec<Vec<String>>,
        /// Defaults offered to each `text`, in order.
        pub text_defaults: Vec<Option<String>>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
            ScriptedPrompter {
                answers: answers.into_iter().collect(),
                ..Default::default()
            }
        }

        pub fn remaining(&self) -> usize {
            self.answers.len()
        }

        fn next(&mut self, prompt: &str) -> Answer {
            self.asked.push(prompt.to_string());
            self.answers
                .pop_front()
                .unwrap_or_else(|| panic!("script ran out of answers at {prompt:?}"))
        }
    }

    impl Prompter for ScriptedPrompter {
        fn text(&mut self, prompt: &str, default: Option<&str>) -> Result<Option<String>> {
            self.text_defaults.push(default.map(str::to_string));
            Ok(match self.next(prompt) {
                Answer::Text(s) => Some(s),
                Answer::Enter => Some(default.unwrap_or_default().to_string()),
                Answer::Abort => None,
                other => panic!("text prompt {prompt:?} got {other:?}"),
            })
        }

        fn password(&mut self, prompt: &str) -> Result<Option<String>> {
            Ok(match self.next(prompt) {
                Answer::Text(s) => Some(s),
                Answer::Enter => Some(String::new()),
                Answer::Abort => None,
                other => panic!("password prompt {prompt:?} got {other:?}"),
            })
        }

        fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>> {
            self.offered.push(items.to_vec());
            Ok(match self.next(prompt) {
                Answer::Pick(i) => Some(i),
                Answer::Enter => Some(default),
                Answer::Abort => None,
                other => panic!("select prompt {prompt:?} got {other:?}"),
            })
        }

        fn multi_select(
            &mut self,
            prompt: &str,
            items: &[String],
            checked: &[bool],
        ) -> Result<Option<Vec<usize>>> {
            assert_eq!(items.len(), checked.len(), "one flag per item");
            self.checked.push(checked.to_vec());
            Ok(match self.next(prompt) {
                Answer::Picks(p) => Some(p),
                Answer::Enter => Some(
                    checked
                        .iter()
                        .enumerate()
                        .filter_map(|(i, c)| c.then_some(i))
                        .collect(),
                ),
                Answer::Abort => None,
                other => panic!("multi-select prompt {prompt:?} got {other:?}"),
            })
        }

        fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>> {
            Ok(match self.next(prompt) {
                Answer::Yes => Some(true),
                Answer::No => Some(false),
                Answer::Enter => Some(default),
                Answer::Abort => None,
                other => panic!("confirm prompt {prompt:?} got {other:?}"),
            })
        }
    }
}
