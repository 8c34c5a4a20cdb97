//! Prompter that replays canned answers.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use zipbuild_core::{
    application::{ApplicationError, ports::Prompter},
    error::ZipbuildResult,
};

/// A canned answer for the next question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Confirm(bool),
    Input(String),
    Select(usize),
}

#[derive(Debug, Default)]
struct Transcript {
    answers: VecDeque<Answer>,
    questions: Vec<String>,
    notices: Vec<String>,
}

/// Test double for [`Prompter`].
///
/// Answers are consumed in order. A question whose kind does not match the
/// next answer, or a question asked after the script ran out, fails with
/// [`ApplicationError::PromptFailed`]. Clones share the transcript.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    inner: Arc<Mutex<Transcript>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Transcript {
                answers: answers.into_iter().collect(),
                ..Transcript::default()
            })),
        }
    }

    /// Every question asked so far, in order.
    pub fn questions(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|t| t.questions.clone())
            .unwrap_or_default()
    }

    /// Every notice shown so far, in order.
    pub fn notices(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|t| t.notices.clone())
            .unwrap_or_default()
    }

    /// Answers left unconsumed.
    pub fn remaining(&self) -> usize {
        self.inner.lock().map(|t| t.answers.len()).unwrap_or(0)
    }

    fn next(&self, message: &str) -> ZipbuildResult<Answer> {
        let mut transcript = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::StateLockError)?;
        transcript.questions.push(message.to_string());
        transcript.answers.pop_front().ok_or_else(|| {
            ApplicationError::PromptFailed {
                reason: format!("no scripted answer for '{message}'"),
            }
            .into()
        })
    }
}

fn mismatch(message: &str, expected: &str, got: &Answer) -> ApplicationError {
    ApplicationError::PromptFailed {
        reason: format!("'{message}' expects {expected}, script has {got:?}"),
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str, _default: bool) -> ZipbuildResult<bool> {
        match self.next(message)? {
            Answer::Confirm(yes) => Ok(yes),
            other => Err(mismatch(message, "a confirmation", &other).into()),
        }
    }

    fn input(&self, message: &str) -> ZipbuildResult<String> {
        match self.next(message)? {
            Answer::Input(text) => Ok(text),
            other => Err(mismatch(message, "text input", &other).into()),
        }
    }

    fn select(&self, message: &str, _choices: &[&'static str]) -> ZipbuildResult<usize> {
        match self.next(message)? {
            Answer::Select(index) => Ok(index),
            other => Err(mismatch(message, "a selection", &other).into()),
        }
    }

    fn notify(&self, message: &str) -> ZipbuildResult<()> {
        self.inner
            .lock()
            .map_err(|_| ApplicationError::StateLockError)?
            .notices
            .push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order() {
        let prompter = ScriptedPrompter::new([
            Answer::Confirm(true),
            Answer::Select(2),
            Answer::Input("backup".into()),
        ]);

        assert!(prompter.confirm("create?", true).unwrap());
        assert_eq!(prompter.select("what now?", &["a", "b", "c"]).unwrap(), 2);
        assert_eq!(prompter.input("name?").unwrap(), "backup");
        assert_eq!(prompter.questions(), ["create?", "what now?", "name?"]);
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn kind_mismatch_fails() {
        let prompter = ScriptedPrompter::new([Answer::Input("x".into())]);
        assert!(prompter.confirm("create?", true).is_err());
    }

    #[test]
    fn exhausted_script_fails() {
        let prompter = ScriptedPrompter::new([]);
        let err = prompter.input("name?").unwrap_err();
        assert!(err.to_string().contains("no scripted answer"));
    }

    #[test]
    fn notices_do_not_consume_answers() {
        let prompter = ScriptedPrompter::new([Answer::Confirm(false)]);
        prompter.notify("Done!").unwrap();
        assert_eq!(prompter.notices(), ["Done!"]);
        assert_eq!(prompter.remaining(), 1);
    }
}
