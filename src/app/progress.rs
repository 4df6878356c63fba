use super::*;

/// Fracción completada al estar en `index` (0-based) de `total` preguntas.
pub fn progress_fraction(index: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (index + 1) as f32 / total as f32
}

impl QuestionnaireApp {
    pub fn progress(&self) -> f32 {
        progress_fraction(self.current, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use super::*;

    #[test]
    fn fraction_is_exact() {
        assert_eq!(progress_fraction(0, 3), 1.0 / 3.0);
        assert_eq!(progress_fraction(1, 3), 2.0 / 3.0);
        assert_eq!(progress_fraction(2, 3), 1.0);
        assert_eq!(progress_fraction(0, 0), 0.0);
    }

    #[test]
    fn progress_follows_navigation() {
        let mut app = app();
        assert_eq!(app.progress(), 1.0 / 3.0);
        app.record_answer(Answer::Choice("Never".into())).unwrap();
        app.go_next().unwrap();
        assert_eq!(app.progress(), 2.0 / 3.0);
        app.go_back();
        assert_eq!(app.progress(), 1.0 / 3.0);
    }
}
