//! Interactive answers: the input seam and the accepted tokens.
//!
//! Every prompt reads one line, trims it and lower-cases it before matching.
//! The terminal implementation lives in the binary; tests script answers.

use crate::error::PromptError;

/// Source of answers to interactive questions.
pub trait Prompter {
    /// Ask `question` and return the raw answer line.
    fn ask(&mut self, question: &str) -> Result<String, PromptError>;
}

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

fn is_yes(answer: &str) -> bool {
    matches!(answer, "y" | "yes")
}

/// Answer to "Delete all low-resolution images? [y/N]".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteAnswer {
    Proceed,
    Cancel,
    /// Anything else; the question is asked again
    Unrecognized,
}

impl DeleteAnswer {
    pub fn parse(answer: &str) -> Self {
        match normalize(answer).as_str() {
            a if is_yes(a) => DeleteAnswer::Proceed,
            "n" | "no" | "" => DeleteAnswer::Cancel,
            _ => DeleteAnswer::Unrecognized,
        }
    }
}

/// `y`/`yes` accepts; everything else, empty included, declines.
pub fn parse_yes(answer: &str) -> bool {
    is_yes(&normalize(answer))
}

/// Answer to a same-name conflict in the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteChoice {
    /// Overwrite this file only
    Yes,
    /// Overwrite this file and every later conflict without asking
    All,
    /// Leave both files where they are
    Skip,
}

impl OverwriteChoice {
    pub fn parse(answer: &str) -> Self {
        match normalize(answer).as_str() {
            "a" => OverwriteChoice::All,
            a if is_yes(a) => OverwriteChoice::Yes,
            _ => OverwriteChoice::Skip,
        }
    }

    pub fn overwrites(self) -> bool {
        !matches!(self, OverwriteChoice::Skip)
    }
}

/// Replays a fixed list of answers. Running out reads as a closed input.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    /// Questions asked so far, in order
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        self.asked.push(question.to_string());
        self.answers.pop_front().ok_or(PromptError::Closed)
    }
}
