use serde::{Deserialize, Serialize};

/// Valor mínimo de la escala de valoración.
pub const RATING_MIN: u8 = 1;
/// Valor máximo de la escala de valoración.
pub const RATING_MAX: u8 = 5;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice,
    ShortAnswer,
    Rating,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub prompt: String,
    // Solo para multiple-choice
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// Banco de preguntas completo tal y como viene del YAML embebido.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Questionnaire {
    pub title: String,
    pub questions: Vec<Question>,
}

/// Respuesta registrada para una pregunta. La variante depende del tipo de pregunta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Texto de la opción elegida
    Choice(String),
    /// Texto libre (puede quedar vacío si el usuario lo borra)
    Text(String),
    /// Valor entre `RATING_MIN` y `RATING_MAX`
    Rating(u8),
}

impl Answer {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Answer::Choice(_) => QuestionKind::MultipleChoice,
            Answer::Text(_) => QuestionKind::ShortAnswer,
            Answer::Rating(_) => QuestionKind::Rating,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Answer::Choice(s) | Answer::Text(s) => Some(s),
            Answer::Rating(_) => None,
        }
    }

    pub fn as_rating(&self) -> Option<u8> {
        match self {
            Answer::Rating(v) => Some(*v),
            _ => None,
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Choice(s) | Answer::Text(s) => f.write_str(s),
            Answer::Rating(v) => write!(f, "{v}/{RATING_MAX}"),
        }
    }
}
