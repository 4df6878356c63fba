use crate::data::{CatalogError, read_questionnaire_embedded, validate};
use crate::effects::Confetti;
use crate::model::{Answer, Question, Questionnaire};
use crate::notifications::Toasts;
use crate::ui::transition::CardAnimations;
use std::collections::BTreeMap;

// Submódulos
pub mod answers;
pub mod completion;
pub mod navigation;
pub mod progress;

pub use answers::AnswerError;
pub use completion::CompletionLatch;
pub use navigation::NavigationError;
pub use progress::progress_fraction;

/// Estado completo del widget. Vive lo que dura la vista; nada se guarda.
pub struct QuestionnaireApp {
    pub title: String,
    questions: Vec<Question>,
    current: usize,
    answers: BTreeMap<usize, Answer>,
    completion: CompletionLatch,
    pub toasts: Toasts,
    pub confetti: Confetti,
    pub(crate) animations: CardAnimations,
}

impl QuestionnaireApp {
    /// Construye el widget con el banco de preguntas embebido.
    pub fn new() -> Result<Self, CatalogError> {
        // El catálogo embebido ya sale validado de `parse_questionnaire`
        Ok(Self::with_catalog(read_questionnaire_embedded()?))
    }

    /// Construye el widget con un catálogo propio, validándolo antes.
    pub fn from_questionnaire(questionnaire: Questionnaire) -> Result<Self, CatalogError> {
        validate(&questionnaire)?;
        Ok(Self::with_catalog(questionnaire))
    }

    fn with_catalog(questionnaire: Questionnaire) -> Self {
        Self {
            title: questionnaire.title,
            questions: questionnaire.questions,
            current: 0,
            answers: BTreeMap::new(),
            completion: CompletionLatch::default(),
            toasts: Toasts::default(),
            confetti: Confetti::default(),
            animations: CardAnimations::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn app() -> QuestionnaireApp {
        QuestionnaireApp::new().expect("embedded questionnaire")
    }
}
