// src/data.rs

use crate::model::{QuestionKind, Questionnaire};
use std::collections::HashSet;
use thiserror::Error;

/// Errores al cargar el banco de preguntas.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not parse questionnaire YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("questionnaire has no questions")]
    Empty,

    #[error("question {index} has a blank prompt")]
    BlankPrompt { index: usize },

    #[error("multiple-choice question {index} has no options")]
    MissingOptions { index: usize },

    #[error("question {index} is not multiple-choice but lists options")]
    UnexpectedOptions { index: usize },

    #[error("question {index} lists option {option:?} more than once")]
    DuplicateOption { index: usize, option: String },
}

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questionnaire_embedded() -> Result<Questionnaire, CatalogError> {
    let file_content = include_str!("data/questionnaire.yaml");
    parse_questionnaire(file_content)
}

/// Parsea y valida un cuestionario. Los índices de error son 0-based.
pub fn parse_questionnaire(source: &str) -> Result<Questionnaire, CatalogError> {
    let questionnaire: Questionnaire = serde_yaml::from_str(source)?;
    validate(&questionnaire)?;
    log::info!(
        "Cuestionario \"{}\" cargado con {} preguntas",
        questionnaire.title,
        questionnaire.questions.len()
    );
    Ok(questionnaire)
}

pub(crate) fn validate(questionnaire: &Questionnaire) -> Result<(), CatalogError> {
    if questionnaire.questions.is_empty() {
        return Err(CatalogError::Empty);
    }

    for (index, q) in questionnaire.questions.iter().enumerate() {
        if q.prompt.trim().is_empty() {
            return Err(CatalogError::BlankPrompt { index });
        }
        match q.kind {
            QuestionKind::MultipleChoice => {
                if q.options.is_empty() {
                    return Err(CatalogError::MissingOptions { index });
                }
                let mut seen = HashSet::new();
                for option in &q.options {
                    if !seen.insert(option.as_str()) {
                        return Err(CatalogError::DuplicateOption {
                            index,
                            option: option.clone(),
                        });
                    }
                }
            }
            QuestionKind::ShortAnswer | QuestionKind::Rating => {
                if !q.options.is_empty() {
                    return Err(CatalogError::UnexpectedOptions { index });
                }
            }
        }
    }
    Ok(())
}
