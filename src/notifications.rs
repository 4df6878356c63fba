use egui::{Align2, Color32, Context, Frame, Id, Margin, Order, RichText, Sense, vec2};

/// Segundos que un toast permanece visible.
pub const TOAST_LIFETIME: f32 = 5.0;
/// Toasts visibles a la vez; el más nuevo reemplaza a los anteriores.
pub const TOAST_LIMIT: usize = 1;
const DESTRUCTIVE_FILL: Color32 = Color32::from_rgb(220, 38, 38);

/// Aviso destructivo (fondo rojo) con título y descripción.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    remaining: f32,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            remaining: TOAST_LIFETIME,
        }
    }
}

/// Superficie de notificaciones no bloqueantes.
#[derive(Default, Debug)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, toast: Toast) {
        self.items.push(toast);
        if self.items.len() > TOAST_LIMIT {
            let overflow = self.items.len() - TOAST_LIMIT;
            self.items.drain(..overflow);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn dismiss(&mut self, idx: usize) {
        if idx < self.items.len() {
            self.items.remove(idx);
        }
    }

    /// Descuenta `dt` segundos y elimina los toasts caducados.
    pub fn tick(&mut self, dt: f32) {
        for t in &mut self.items {
            t.remaining -= dt;
        }
        self.items.retain(|t| t.remaining > 0.0);
    }

    pub fn show(&mut self, ctx: &Context) {
        if self.items.is_empty() {
            return;
        }
        self.tick(ctx.input(|i| i.stable_dt));

        let mut dismissed = None;
        egui::Area::new(Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, vec2(-16.0, -48.0))
            .order(Order::Foreground)
            .show(ctx, |ui| {
                for (idx, toast) in self.items.iter().enumerate() {
                    let response = Frame::popup(ui.style())
                        .fill(DESTRUCTIVE_FILL)
                        .inner_margin(Margin::symmetric(16, 12))
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.label(RichText::new(&toast.title).strong().color(Color32::WHITE));
                            ui.label(RichText::new(&toast.description).color(Color32::WHITE));
                        })
                        .response
                        .interact(Sense::click());
                    if response.clicked() {
                        dismissed = Some(idx);
                    }
                }
            });

        if let Some(idx) = dismissed {
            self.dismiss(idx);
        }
        // Mantener el reloj corriendo mientras haya toasts
        if !self.items.is_empty() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_toast_replaces_older_ones() {
        let mut toasts = Toasts::default();
        toasts.push(Toast::new("a", "first"));
        toasts.push(Toast::new("b", "second"));
        let titles: Vec<&str> = toasts.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["b"]);
    }

    #[test]
    fn toasts_expire_after_lifetime() {
        let mut toasts = Toasts::default();
        toasts.push(Toast::new("a", "x"));
        toasts.tick(TOAST_LIFETIME - 1.0);
        assert!(!toasts.is_empty());
        toasts.tick(1.5);
        assert!(toasts.is_empty());
    }

    #[test]
    fn dismiss_out_of_range_is_ignored() {
        let mut toasts = Toasts::default();
        toasts.push(Toast::new("a", "x"));
        toasts.dismiss(3);
        assert!(!toasts.is_empty());
        toasts.dismiss(0);
        assert!(toasts.is_empty());
    }
}
