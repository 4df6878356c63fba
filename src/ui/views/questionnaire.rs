use crate::QuestionnaireApp;
use crate::model::Answer;
use crate::ui::layout::{card_layer, gradient_card_panel, two_button_row};
use crate::view_models::{InputControl, TEXT_PLACEHOLDER};
use egui::emath::TSTransform;
use egui::{
    Color32, Context, Id, LayerId, Order, ProgressBar, Response, RichText, Slider, TextEdit, Ui,
    UiBuilder, vec2,
};

/// Respuestas de los widgets pintados en el frame.
pub struct CardResponse {
    /// Una por opción (radio), o el campo de texto, o el slider.
    pub controls: Vec<Response>,
    pub back: Response,
    pub next: Response,
}

pub fn ui_questionnaire(app: &mut QuestionnaireApp, ctx: &Context) -> CardResponse {
    let now = ctx.input(|i| i.time);
    let current = app.question_view();
    let progress = app.progress();
    let anim = app.animations.frame(now, current.index, progress);
    // Mientras sale, se pinta la pregunta anterior
    let shown = if anim.leaving {
        app.question_view_at(anim.shown).unwrap_or_else(|| current.clone())
    } else {
        current.clone()
    };

    let response = gradient_card_panel(ctx, 360.0, 640.0, anim.scale, |ui, card| {
        ui.multiply_opacity(anim.opacity);

        ui.label(
            RichText::new(&app.title)
                .size(30.0)
                .strong()
                .color(Color32::WHITE),
        );
        ui.add_space(8.0);
        ui.add(
            ProgressBar::new(anim.progress)
                .desired_height(12.0)
                .fill(Color32::WHITE),
        );
        ui.add_space(16.0);

        // La pregunta va en su propia capa para poder desplazarla
        let layer = LayerId::new(Order::Middle, Id::new("question_slide"));
        ctx.set_sublayer(card_layer(), layer);
        ctx.set_transform_layer(
            layer,
            card * TSTransform::from_translation(vec2(anim.slide_x, 0.0)),
        );
        let (controls, written) = ui
            .scope_builder(UiBuilder::new().layer_id(layer), |ui| {
                ui.set_opacity(anim.opacity * anim.slide_opacity);
                ui.label(
                    RichText::new(&shown.heading)
                        .size(22.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.add_space(6.0);
                ui.label(RichText::new(&shown.prompt).size(18.0).color(Color32::WHITE));
                ui.add_space(12.0);
                render_control(ui, &shown.control)
            })
            .inner;

        // La pregunta saliente es solo de lectura
        if let Some(answer) = written.filter(|_| !anim.leaving) {
            if let Err(e) = app.record_answer(answer) {
                log::warn!("Respuesta descartada: {e}");
            }
        }

        ui.add_space(20.0);
        let (back, next) = two_button_row(
            ui,
            ("Back", current.can_go_back),
            (current.next_label, current.next_enabled),
        );
        if back.clicked() {
            app.go_back();
        }
        if next.clicked() {
            // Sin respuesta, el toast ya avisa al usuario
            let _ = app.go_next();
        }
        CardResponse {
            controls,
            back,
            next,
        }
    });

    if anim.animating {
        ctx.request_repaint();
    }
    response
}

/// Pinta el control del tipo de pregunta. Devuelve las respuestas de sus
/// widgets y lo que haya escrito el usuario en este frame.
fn render_control(ui: &mut Ui, control: &InputControl) -> (Vec<Response>, Option<Answer>) {
    match control {
        InputControl::Choice { options, selected } => {
            let mut picked = None;
            let mut responses = Vec::with_capacity(options.len());
            for option in options {
                let is_selected = selected.as_deref() == Some(option.as_str());
                let label = RichText::new(option).color(Color32::WHITE);
                let response = ui.radio(is_selected, label);
                if response.clicked() {
                    picked = Some(Answer::Choice(option.clone()));
                }
                responses.push(response);
            }
            (responses, picked)
        }
        InputControl::Text { value } => {
            let mut buf = value.clone();
            let response = ui.add(
                TextEdit::singleline(&mut buf)
                    .hint_text(TEXT_PLACEHOLDER)
                    .desired_width(f32::INFINITY),
            );
            let written = response.changed().then(|| Answer::Text(buf));
            (vec![response], written)
        }
        InputControl::Rating { value, min, max } => {
            let mut v = *value;
            ui.spacing_mut().slider_width = 300.0;
            let response = ui.add(Slider::new(&mut v, *min..=*max).step_by(1.0));
            // Un clic o soltar el arrastre también cuenta, aunque el valor siga en el mínimo
            let written = (response.changed() || response.clicked() || response.drag_stopped())
                .then_some(Answer::Rating(v));
            (vec![response], written)
        }
    }
}
