use super::*;
use crate::model::{QuestionKind, RATING_MAX, RATING_MIN};
use thiserror::Error;

/// Valores que romperían el invariante del mapa de respuestas.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnswerError {
    #[error("question {index} expects a {expected:?} answer, got {got:?}")]
    KindMismatch {
        index: usize,
        expected: QuestionKind,
        got: QuestionKind,
    },

    #[error("{option:?} is not an option of question {index}")]
    UnknownOption { index: usize, option: String },

    #[error("rating {value} is outside 1..=5")]
    RatingOutOfRange { value: u8 },
}

impl QuestionnaireApp {
    /// Registra `value` para la pregunta actual, sobrescribiendo la anterior.
    /// Las demás respuestas no se tocan.
    pub fn record_answer(&mut self, value: Answer) -> Result<(), AnswerError> {
        let index = self.current;
        let question = &self.questions[index];

        if value.kind() != question.kind {
            return Err(AnswerError::KindMismatch {
                index,
                expected: question.kind,
                got: value.kind(),
            });
        }
        match &value {
            Answer::Choice(option) if !question.options.contains(option) => {
                return Err(AnswerError::UnknownOption {
                    index,
                    option: option.clone(),
                });
            }
            Answer::Rating(v) if !(RATING_MIN..=RATING_MAX).contains(v) => {
                return Err(AnswerError::RatingOutOfRange { value: *v });
            }
            _ => {}
        }

        log::debug!("Respuesta {index}: {value}");
        self.answers.insert(index, value);
        Ok(())
    }

    pub fn answer(&self, index: usize) -> Option<&Answer> {
        self.answers.get(&index)
    }

    pub fn current_answer(&self) -> Option<&Answer> {
        self.answer(self.current)
    }

    pub fn answers(&self) -> &BTreeMap<usize, Answer> {
        &self.answers
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.answers.contains_key(&index)
    }
}
