use std::collections::HashMap;

use qaboard_core::api::{EntityId, Question, QuestionId, VoteKind};

use crate::common::LatestTask;

/// A row in the list: a question, or one of its answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub question: usize,
    pub answer: Option<usize>,
}

impl Selection {
    pub fn question(question: usize) -> Self {
        Self {
            question,
            answer: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct BoardState {
    /// Latest snapshot from `GET /questions`, in server order.
    pub questions: Vec<Question>,
    /// In-progress answer text, keyed by question.
    pub drafts: HashMap<QuestionId, String>,
    pub selection: Option<Selection>,
    /// The refresh whose result will be applied.
    pub refresh: LatestTask,
    /// False until the first snapshot arrives.
    pub loaded: bool,
}

impl BoardState {
    /// Replaces the list wholesale.
    ///
    /// Drafts of questions missing from `questions` are dropped. The selected
    /// question and answer are followed by id when they survive, and clamped
    /// into the new list otherwise.
    pub fn replace_questions(&mut self, questions: Vec<Question>) {
        let selected_id = self.selected_question().map(|q| q.id.clone());
        let selected_answer = self.selection.and_then(|selection| {
            let answers = self.questions.get(selection.question)?.answers.as_ref()?;
            Some(answers.get(selection.answer?)?.id.clone())
        });
        let previous = self.selection;

        self.questions = questions;
        self.loaded = true;
        let questions = &self.questions;
        self.drafts
            .retain(|id, _| questions.iter().any(|question| &question.id == id));

        if self.questions.is_empty() {
            self.selection = None;
            return;
        }

        let question = selected_id
            .and_then(|id| self.questions.iter().position(|q| q.id == id))
            .or_else(|| previous.map(|s| s.question.min(self.questions.len() - 1)))
            .unwrap_or(0);
        let answers = self
            .questions
            .get(question)
            .and_then(|q| q.answers.as_deref())
            .unwrap_or_default();
        let answer = previous.and_then(|s| s.answer).and_then(|index| {
            selected_answer
                .and_then(|id| answers.iter().position(|a| a.id == id))
                .or_else(|| (!answers.is_empty()).then(|| index.min(answers.len() - 1)))
        });
        self.selection = Some(Selection { question, answer });
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.questions.iter().any(|question| &question.id == id)
    }

    fn answer_count(&self, question: usize) -> usize {
        self.questions
            .get(question)
            .and_then(|q| q.answers.as_ref())
            .map_or(0, Vec::len)
    }

    /// Every selectable row, top to bottom.
    fn rows(&self) -> Vec<Selection> {
        let mut rows = Vec::new();
        for (index, _) in self.questions.iter().enumerate() {
            rows.push(Selection::question(index));
            rows.extend((0..self.answer_count(index)).map(|answer| Selection {
                question: index,
                answer: Some(answer),
            }));
        }
        rows
    }

    pub fn select_next(&mut self) {
        self.step(1);
    }

    pub fn select_prev(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        let rows = self.rows();
        if rows.is_empty() {
            self.selection = None;
            return;
        }
        let current = self
            .selection
            .and_then(|selection| rows.iter().position(|row| *row == selection));
        let next = match current {
            None => 0,
            Some(index) => index.saturating_add_signed(delta).min(rows.len() - 1),
        };
        self.selection = Some(rows[next]);
    }

    pub fn selected_question(&self) -> Option<&Question> {
        self.selection
            .and_then(|selection| self.questions.get(selection.question))
    }

    /// What an upvote would target right now.
    pub fn selected_target(&self) -> Option<(VoteKind, EntityId)> {
        let selection = self.selection?;
        let question = self.questions.get(selection.question)?;
        match selection.answer {
            None => Some((VoteKind::Question, question.id.0.clone())),
            Some(index) => {
                let answer = question.answers.as_ref()?.get(index)?;
                Some((VoteKind::Answer, answer.id.0.clone()))
            }
        }
    }

    pub fn draft(&self, id: &QuestionId) -> &str {
        self.drafts.get(id).map_or("", String::as_str)
    }

    pub fn draft_mut(&mut self, id: &QuestionId) -> &mut String {
        self.drafts.entry(id.clone()).or_default()
    }

    pub fn clear_draft(&mut self, id: &QuestionId) {
        self.drafts.remove(id);
    }
}
