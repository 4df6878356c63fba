use egui::emath::TSTransform;
use egui::{
    Align, Button, CentralPanel, Color32, Context, Frame, Id, LayerId, Layout, Margin, Mesh, Order,
    Pos2, Rect, Response, RichText, Shape, Ui, UiBuilder, Visuals,
};

// Degradado de fondo (morado → rosa → rojo)
const PURPLE: Color32 = Color32::from_rgb(0xc0, 0x84, 0xfc);
const PINK: Color32 = Color32::from_rgb(0xec, 0x48, 0x99);
const RED: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
const ACCENT: Color32 = Color32::from_rgb(0x93, 0x33, 0xea);

pub const CARD_FILL: Color32 = Color32::from_rgba_premultiplied(77, 77, 77, 77);

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Pinta un degradado diagonal que cubre `rect`.
pub fn paint_gradient(ui: &Ui, rect: Rect) {
    let mut mesh = Mesh::default();
    let corners: [(Pos2, Color32); 4] = [
        (rect.left_top(), PURPLE),
        (rect.right_top(), PINK),
        (rect.right_bottom(), RED),
        (rect.left_bottom(), PINK),
    ];
    for (pos, color) in corners {
        mesh.colored_vertex(pos, color);
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    ui.painter().add(Shape::mesh(mesh));
}

/// Capa propia de la tarjeta, para poder escalarla en la entrada.
pub fn card_layer() -> LayerId {
    LayerId::new(Order::Middle, Id::new("questionnaire_card"))
}

/// Escala `scale` alrededor de `pivot`.
pub fn scale_about(pivot: Pos2, scale: f32) -> TSTransform {
    TSTransform::new(pivot.to_vec2() * (1.0 - scale), scale)
}

/// Panel central con fondo degradado y una tarjeta centrada de ancho máximo `max_width`.
///
/// La tarjeta se pinta en [`card_layer`] escalada por `scale` desde el centro
/// del panel; `inner` recibe esa transformación para componer capas hijas.
pub fn gradient_card_panel<R>(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    scale: f32,
    inner: impl FnOnce(&mut Ui, TSTransform) -> R,
) -> R {
    CentralPanel::default()
        .frame(Frame::NONE)
        .show(ctx, |ui| {
            paint_gradient(ui, ui.max_rect());

            let transform = scale_about(ui.max_rect().center(), scale);
            ctx.set_transform_layer(card_layer(), transform);
            ui.scope_builder(UiBuilder::new().layer_id(card_layer()), |ui| {
                // Espacio vertical para centrar
                let extra = ((ui.available_height() - est_height) / 2.0).max(16.0);
                ui.add_space(extra);
                ui.vertical_centered(|ui| {
                    Frame::default()
                        .fill(CARD_FILL)
                        .corner_radius(12)
                        .inner_margin(Margin::same(24))
                        .show(ui, |ui| {
                            let w = (ui.available_width() - 32.0).min(max_width);
                            ui.set_width(w);
                            inner(ui, transform)
                        })
                        .inner
                })
                .inner
            })
            .inner
        })
        .inner
}

/// Dibuja dos botones del mismo tamaño en una fila, separados a los extremos.
/// Devuelve las respuestas (izquierdo, derecho).
pub fn two_button_row(
    ui: &mut Ui,
    left: (&str, bool),
    right: (&str, bool),
) -> (Response, Response) {
    let size = [110.0, 36.0];
    ui.horizontal(|ui| {
        let left = ui.add_enabled(left.1, Button::new(left.0).min_size(size.into()));
        let right = ui
            .with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.add_enabled(
                    right.1,
                    Button::new(RichText::new(right.0).color(ACCENT))
                        .fill(Color32::WHITE)
                        .min_size(size.into()),
                )
            })
            .inner;
        (left, right)
    })
    .inner
}
