//! Terminal implementation of the core [`Prompter`] port.
//!
//! With the `interactive` feature and a TTY on stdin, questions are asked
//! with `dialoguer` widgets. Otherwise they fall back to plain lines on
//! stderr answered from stdin, which keeps piped and scripted runs working.

use std::io::{self, BufRead, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use tracing::debug;

use zipbuild_core::{
    application::{ApplicationError, ports::Prompter},
    error::ZipbuildResult,
};

pub struct TerminalPrompter {
    colored: bool,
    quiet: bool,
    #[cfg_attr(not(feature = "interactive"), allow(dead_code))]
    interactive: bool,
    out: Term,
    err: Term,
}

impl TerminalPrompter {
    pub fn new(colored: bool, quiet: bool) -> Self {
        let interactive = cfg!(feature = "interactive") && io::stdin().is_terminal();
        debug!(interactive, "Prompter ready");
        Self {
            colored,
            quiet,
            interactive,
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }

    fn ask_line(&self, question: &str) -> ZipbuildResult<String> {
        let question = if self.colored {
            format!("{} {} ", "?".green().bold(), question.bold())
        } else {
            format!("? {question} ")
        };
        self.err.write_str(&question).map_err(failed)?;
        self.err.flush().map_err(failed)?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line).map_err(failed)?;
        if read == 0 {
            return Err(ApplicationError::PromptFailed {
                reason: "input closed before an answer was given".into(),
            }
            .into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn line_confirm(&self, message: &str, default: bool) -> ZipbuildResult<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        let answer = self.ask_line(&format!("{message} {hint}"))?;
        Ok(parse_confirm(&answer).unwrap_or(default))
    }

    fn line_select(&self, message: &str, choices: &[&'static str]) -> ZipbuildResult<usize> {
        let mut question = message.to_string();
        for (i, choice) in choices.iter().enumerate() {
            question.push_str(&format!("\n  {}) {}", i + 1, choice));
        }
        question.push_str("\n  Answer:");

        let answer = self.ask_line(&question)?;
        parse_choice(&answer, choices.len()).ok_or_else(|| {
            ApplicationError::PromptFailed {
                reason: format!("'{}' is not one of 1-{}", answer.trim(), choices.len()),
            }
            .into()
        })
    }
}

#[cfg(feature = "interactive")]
impl TerminalPrompter {
    fn theme(&self) -> Box<dyn dialoguer::theme::Theme> {
        if self.colored {
            Box::new(dialoguer::theme::ColorfulTheme::default())
        } else {
            Box::new(dialoguer::theme::SimpleTheme)
        }
    }

    fn widget_confirm(&self, message: &str, default: bool) -> ZipbuildResult<bool> {
        let theme = self.theme();
        dialoguer::Confirm::with_theme(theme.as_ref())
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(dialog_failed)
    }

    fn widget_input(&self, message: &str) -> ZipbuildResult<String> {
        let theme = self.theme();
        dialoguer::Input::<String>::with_theme(theme.as_ref())
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(dialog_failed)
    }

    fn widget_select(&self, message: &str, choices: &[&'static str]) -> ZipbuildResult<usize> {
        let theme = self.theme();
        dialoguer::Select::with_theme(theme.as_ref())
            .with_prompt(message)
            .items(choices)
            .default(0)
            .interact()
            .map_err(dialog_failed)
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str, default: bool) -> ZipbuildResult<bool> {
        #[cfg(feature = "interactive")]
        if self.interactive {
            return self.widget_confirm(message, default);
        }
        self.line_confirm(message, default)
    }

    fn input(&self, message: &str) -> ZipbuildResult<String> {
        #[cfg(feature = "interactive")]
        if self.interactive {
            return self.widget_input(message);
        }
        self.ask_line(message)
    }

    fn select(&self, message: &str, choices: &[&'static str]) -> ZipbuildResult<usize> {
        #[cfg(feature = "interactive")]
        if self.interactive {
            return self.widget_select(message, choices);
        }
        self.line_select(message, choices)
    }

    fn notify(&self, message: &str) -> ZipbuildResult<()> {
        if self.quiet {
            return Ok(());
        }
        self.out.write_line(message).map_err(failed)
    }
}

/// `y`/`yes`/`n`/`no`, case-insensitive; anything else means "use the default".
fn parse_confirm(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// 1-based menu number to 0-based index.
fn parse_choice(answer: &str, len: usize) -> Option<usize> {
    let n: usize = answer.trim().parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}

fn failed(e: io::Error) -> zipbuild_core::error::ZipbuildError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
    .into()
}

#[cfg(feature = "interactive")]
fn dialog_failed(e: dialoguer::Error) -> zipbuild_core::error::ZipbuildError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_answers() {
        assert_eq!(parse_confirm("y"), Some(true));
        assert_eq!(parse_confirm(" YES \n"), Some(true));
        assert_eq!(parse_confirm("n"), Some(false));
        assert_eq!(parse_confirm(""), None);
        assert_eq!(parse_confirm("maybe"), None);
    }

    #[test]
    fn choices_are_one_based() {
        assert_eq!(parse_choice("1", 4), Some(0));
        assert_eq!(parse_choice("4\n", 4), Some(3));
        assert_eq!(parse_choice("0", 4), None);
        assert_eq!(parse_choice("5", 4), None);
        assert_eq!(parse_choice("exit", 4), None);
    }
}
