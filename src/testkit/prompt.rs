//! Scripted answers for [`Prompter`].

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::adapter::inbound::cli::prompt::Prompter;
use crate::error::{Error, Result};

/// One scripted answer.
#[derive(Debug, Clone)]
pub enum Answer {
    /// Select the first item whose label contains this text.
    Choose(&'static str),
    Text(&'static str),
}

/// Replays answers in order; running out is a dialog error.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            prompts: RefCell::default(),
        }
    }

    /// Prompts asked so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str) -> Result<Answer> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::Dialog(format!("no scripted answer for `{prompt}`")))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, prompt: &str, items: &[String], _default: usize) -> Result<usize> {
        match self.next(prompt)? {
            Answer::Choose(label) => items
                .iter()
                .position(|item| item.contains(label))
                .ok_or_else(|| Error::Dialog(format!("no item matching `{label}` in {items:?}"))),
            Answer::Text(text) => Err(Error::Dialog(format!("expected a choice, got `{text}`"))),
        }
    }

    fn input(&self, prompt: &str, _initial: &str) -> Result<String> {
        match self.next(prompt)? {
            Answer::Text(text) => Ok(text.to_string()),
            Answer::Choose(label) => Err(Error::Dialog(format!("expected text, got `{label}`"))),
        }
    }

    fn password(&self, prompt: &str) -> Result<String> {
        self.input(prompt, "")
    }
}
