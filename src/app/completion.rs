use super::*;

/// Detecta el paso a "cuestionario completo" y dispara una sola vez.
/// Se rearma cuando la condición deja de cumplirse (p. ej. al volver atrás).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionLatch {
    fired: bool,
}

impl CompletionLatch {
    /// Devuelve `true` solo en el flanco de subida de `complete`.
    pub fn observe(&mut self, complete: bool) -> bool {
        let rising = complete && !self.fired;
        self.fired = complete;
        rising
    }
}

impl QuestionnaireApp {
    /// Última pregunta en pantalla y todas las preguntas respondidas.
    pub fn is_complete(&self) -> bool {
        self.is_last() && (0..self.len()).all(|i| self.is_answered(i))
    }

    /// Comprueba la condición de fin; `true` si hay que lanzar el efecto ahora.
    pub fn check_completion(&mut self) -> bool {
        let complete = self.is_complete();
        let fire = self.completion.observe(complete);
        if fire {
            log::info!("Cuestionario completado: {} respuestas", self.answers.len());
        }
        fire
    }
}
