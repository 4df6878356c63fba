use super::*;
use crate::notifications::Toast;
use thiserror::Error;

pub const UNANSWERED_TITLE: &str = "Please answer the question";
pub const UNANSWERED_DESCRIPTION: &str =
    "You need to provide an answer before moving to the next question.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("question {index} has no answer yet")]
    Unanswered { index: usize },
}

impl QuestionnaireApp {
    /// Avanza a la siguiente pregunta si la actual tiene respuesta.
    ///
    /// Sin respuesta no cambia nada: se muestra un toast y se devuelve
    /// [`NavigationError::Unanswered`]. En la última pregunta no hace nada.
    pub fn go_next(&mut self) -> Result<(), NavigationError> {
        if !self.is_answered(self.current) {
            self.toasts
                .push(Toast::new(UNANSWERED_TITLE, UNANSWERED_DESCRIPTION));
            return Err(NavigationError::Unanswered {
                index: self.current,
            });
        }
        if !self.is_last() {
            self.current += 1;
            log::debug!("Pregunta {} de {}", self.current + 1, self.len());
        }
        Ok(())
    }

    /// Retrocede una pregunta; en la primera no hace nada.
    pub fn go_back(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            log::debug!("Pregunta {} de {}", self.current + 1, self.len());
        }
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.len()
    }
}
