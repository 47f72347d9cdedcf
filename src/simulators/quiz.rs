//! The quiz engine
//!
//! A scored knowledge check over a fixed, ordered question bank. The first
//! answer to a question is final: selecting an option locks further input
//! and schedules the advance to the next question, so the learner sees the
//! correction before moving on. The only way out of the completed state is
//! a full reset.

use super::DeferredAction;

/// A quiz question with its ordered options and the correct option index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The question prompt
    pub prompt: &'static str,
    /// Answer options in display order
    pub options: &'static [&'static str],
    /// Index into `options` of the correct answer
    pub correct_index: usize,
}

/// The fixed question bank
pub const QUESTION_BANK: &[Question] = &[
    Question {
        prompt: "Logging in with a password is an example of...",
        options: &["Authorization", "Authentication", "Accounting"],
        correct_index: 1,
    },
    Question {
        prompt: "An Admin deleting a user from the database is an example of...",
        options: &["Authentication", "Encryption", "Authorization"],
        correct_index: 2,
    },
    Question {
        prompt: "Which strategy allows for more fine-grained, dynamic control based on time \
                 or location?",
        options: &["RBAC (Role Based)", "ABAC (Attribute Based)", "MAC (Mandatory Access)"],
        correct_index: 1,
    },
];

/// How an option should be presented once an answer is locked in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMarking {
    /// No answer selected yet
    Open,
    /// This is the correct option
    Correct,
    /// This option was selected and is wrong
    WrongSelection,
    /// Neither selected nor correct
    Dimmed,
}

/// State machine for the quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSimulator {
    current_index: usize,
    score: usize,
    selected: Option<usize>,
    completed: bool,
}

impl QuizSimulator {
    /// Create a fresh quiz at the first question
    pub fn new() -> Self {
        Self { current_index: 0, score: 0, selected: None, completed: false }
    }

    /// Index of the current question
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of questions in the bank
    pub fn total_questions(&self) -> usize {
        QUESTION_BANK.len()
    }

    /// Current score
    pub fn score(&self) -> usize {
        self.score
    }

    /// The currently selected option, if an answer is locked in
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the quiz has been completed
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// The current question, or `None` once completed
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.completed {
            None
        } else {
            QUESTION_BANK.get(self.current_index)
        }
    }

    /// Fraction of the quiz already behind the learner, for the progress bar
    pub fn progress(&self) -> f64 {
        if self.completed {
            1.0
        } else {
            self.current_index as f64 / QUESTION_BANK.len() as f64
        }
    }

    /// Whether the locked-in answer is correct, once one exists
    pub fn selection_correct(&self) -> Option<bool> {
        let question = QUESTION_BANK.get(self.current_index)?;
        self.selected.map(|idx| idx == question.correct_index)
    }

    /// Presentation marking for an option of the current question
    pub fn marking(&self, option_index: usize) -> OptionMarking {
        let Some(question) = self.current_question() else {
            return OptionMarking::Dimmed;
        };
        let Some(selected) = self.selected else {
            return OptionMarking::Open;
        };

        if option_index == question.correct_index {
            OptionMarking::Correct
        } else if option_index == selected {
            OptionMarking::WrongSelection
        } else {
            OptionMarking::Dimmed
        }
    }

    /// Lock in an answer for the current question
    ///
    /// The first answer is final: a second selection, a selection after
    /// completion, and an out-of-range index are all ignored. Scoring
    /// happens here; the advance is deferred so the learner sees the
    /// correction first.
    pub fn select_option(&mut self, option_index: usize) -> Option<DeferredAction> {
        if self.completed || self.selected.is_some() {
            return None;
        }
        let question = QUESTION_BANK.get(self.current_index)?;
        if option_index >= question.options.len() {
            return None;
        }

        self.selected = Some(option_index);
        if option_index == question.correct_index {
            self.score += 1;
        }
        Some(DeferredAction::AdvanceQuestion)
    }

    /// Apply the deferred advance to the next question or to completion
    pub fn advance(&mut self) {
        if self.completed || self.selected.is_none() {
            return;
        }

        let next = self.current_index + 1;
        if next < QUESTION_BANK.len() {
            self.current_index = next;
            self.selected = None;
        } else {
            self.completed = true;
        }
    }

    /// Return to the first question with a zero score
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for QuizSimulator {
    fn default() -> Self {
        Self::new()
    }
}
