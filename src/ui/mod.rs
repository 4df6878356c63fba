pub mod layout;
pub mod transition;
pub mod views;

use crate::app::QuestionnaireApp;
use crate::effects::BurstOptions;
use eframe::{App, Frame};
use egui::Context;
use layout::bottom_panel;
use views::questionnaire::CardResponse;

impl QuestionnaireApp {
    /// Pinta un frame completo: tarjeta, comprobación de fin y capas superiores.
    pub fn show(&mut self, ctx: &Context) -> CardResponse {
        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        let response = views::questionnaire::ui_questionnaire(self, ctx);

        if self.check_completion() {
            self.confetti
                .burst(&BurstOptions::default(), ctx.screen_rect(), &mut rand::thread_rng());
        }

        // Capas superiores: confeti y toasts
        self.confetti.show(ctx);
        self.toasts.show(ctx);
        response
    }
}

impl App for QuestionnaireApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app;
    use crate::model::Answer;
    use egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect, vec2};

    /// Contexto sin ventana que avanza el reloj 0.1 s por frame.
    struct Headless {
        ctx: Context,
        app: QuestionnaireApp,
        time: f64,
        last: Option<CardResponse>,
    }

    impl Headless {
        fn new(app: QuestionnaireApp) -> Self {
            let mut h = Self {
                ctx: Context::default(),
                app,
                time: 0.0,
                last: None,
            };
            h.frame(vec![]);
            h
        }

        fn frame(&mut self, events: Vec<Event>) {
            self.time += 0.1;
            let input = RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1280.0, 1024.0))),
                time: Some(self.time),
                events,
                ..Default::default()
            };
            let app = &mut self.app;
            let mut last = None;
            let _ = self.ctx.run(input, |ctx| last = Some(app.show(ctx)));
            self.last = last;
        }

        /// Deja terminar las animaciones para que las capas queden sin transformar.
        fn settle(&mut self) {
            self.frame(vec![]);
            self.time += 2.0;
            self.frame(vec![]);
            self.frame(vec![]);
        }

        fn click(&mut self, pos: Pos2) {
            let button = |pressed| Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                modifiers: Modifiers::NONE,
            };
            self.frame(vec![Event::PointerMoved(pos), button(true)]);
            self.frame(vec![button(false)]);
        }

        fn card(&self) -> &CardResponse {
            self.last.as_ref().expect("a frame was run")
        }
    }

    #[test]
    fn clicks_drive_radio_and_navigation() {
        let mut h = Headless::new(app());
        h.settle();

        let next = h.card().next.rect.center();
        h.click(next);
        assert_eq!(h.app.current_index(), 0);
        assert!(!h.app.toasts.is_empty());

        let often = h.app.current_question().options.iter().position(|o| o == "Often");
        let often = h.card().controls[often.expect("Often option")].rect.center();
        h.click(often);
        assert_eq!(h.app.answer(0), Some(&Answer::Choice("Often".into())));

        h.click(next);
        assert_eq!(h.app.current_index(), 1);
        assert_eq!(h.app.answers().len(), 1);
    }

    #[test]
    fn slider_click_at_minimum_records_rating_and_fires_confetti() {
        let mut app = app();
        app.record_answer(Answer::Choice("Often".into())).unwrap();
        app.go_next().unwrap();
        app.record_answer(Answer::Text("deadlines".into())).unwrap();
        app.go_next().unwrap();

        let mut h = Headless::new(app);
        h.settle();
        assert!(!h.app.is_answered(2));
        assert!(h.app.confetti.is_empty());

        // inicio del carril: el valor sigue en 1
        let rail = h.card().controls[0].rect;
        h.click(rail.left_center() + vec2(2.0, 0.0));
        assert_eq!(h.app.answer(2), Some(&Answer::Rating(1)));
        assert_eq!(h.app.confetti.len(), 100);
    }

    #[test]
    fn back_button_returns_to_previous_question() {
        let mut h = Headless::new(app());
        h.settle();
        assert!(!h.card().back.enabled());

        h.app.record_answer(Answer::Choice("Never".into())).unwrap();
        let next = h.card().next.rect.center();
        h.click(next);
        assert_eq!(h.app.current_index(), 1);

        h.settle();
        let back = h.card().back.rect.center();
        h.click(back);
        assert_eq!(h.app.current_index(), 0);
        assert_eq!(h.app.answer(0), Some(&Answer::Choice("Never".into())));
    }
}
