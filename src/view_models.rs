// src/view_models.rs

use crate::app::QuestionnaireApp;
use crate::model::{Answer, Question, QuestionKind, RATING_MAX, RATING_MIN};

pub const TEXT_PLACEHOLDER: &str = "Type your answer here";

/// Control de entrada para la pregunta en pantalla.
#[derive(Clone, Debug, PartialEq)]
pub enum InputControl {
    Choice {
        options: Vec<String>,
        selected: Option<String>,
    },
    Text {
        value: String,
    },
    Rating {
        value: u8,
        min: u8,
        max: u8,
    },
}

impl InputControl {
    pub fn kind(&self) -> QuestionKind {
        match self {
            InputControl::Choice { .. } => QuestionKind::MultipleChoice,
            InputControl::Text { .. } => QuestionKind::ShortAnswer,
            InputControl::Rating { .. } => QuestionKind::Rating,
        }
    }
}

/// Todo lo que la vista necesita para pintar una pregunta.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionView {
    pub index: usize,
    pub heading: String,
    pub prompt: String,
    pub control: InputControl,
    pub can_go_back: bool,
    pub next_label: &'static str,
    pub next_enabled: bool,
}

impl QuestionView {
    pub fn build(index: usize, total: usize, question: &Question, answer: Option<&Answer>) -> Self {
        let control = match question.kind {
            QuestionKind::MultipleChoice => InputControl::Choice {
                options: question.options.clone(),
                selected: answer.and_then(Answer::as_str).map(str::to_owned),
            },
            QuestionKind::ShortAnswer => InputControl::Text {
                value: answer
                    .and_then(Answer::as_str)
                    .map(str::to_owned)
                    .unwrap_or_default(),
            },
            // Sin respuesta se muestra el mínimo, pero no cuenta como respondida
            QuestionKind::Rating => InputControl::Rating {
                value: answer.and_then(Answer::as_rating).unwrap_or(RATING_MIN),
                min: RATING_MIN,
                max: RATING_MAX,
            },
        };

        let is_last = index + 1 == total;
        Self {
            index,
            heading: format!("Question {}", index + 1),
            prompt: question.prompt.clone(),
            control,
            can_go_back: index > 0,
            next_label: if is_last { "Finish" } else { "Next" },
            next_enabled: !is_last,
        }
    }
}

impl QuestionnaireApp {
    pub fn question_view(&self) -> QuestionView {
        QuestionView::build(
            self.current_index(),
            self.len(),
            self.current_question(),
            self.current_answer(),
        )
    }

    /// Vista de cualquier pregunta; la usa la transición para pintar la que sale.
    pub fn question_view_at(&self, index: usize) -> Option<QuestionView> {
        let question = self.questions().get(index)?;
        Some(QuestionView::build(index, self.len(), question, self.answer(index)))
    }
}
