//! Animaciones de la tarjeta: entrada, barra de progreso y cambio de pregunta.

pub const INTRO_SECS: f64 = 0.5;
pub const PROGRESS_SECS: f64 = 0.5;
pub const SLIDE_SECS: f64 = 0.35;
pub const SLIDE_DISTANCE: f32 = 300.0;
pub const CARD_SCALE_FROM: f32 = 0.9;

pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Desplazamiento horizontal de la pregunta entrante tras `elapsed` segundos.
pub fn slide_offset(elapsed: f64, duration: f64, distance: f32) -> f32 {
    if duration <= 0.0 {
        return 0.0;
    }
    let t = (elapsed / duration) as f32;
    distance * (1.0 - ease_out_cubic(t))
}

/// Desplazamiento de la pregunta saliente: de 0 a `-distance`.
pub fn slide_out_offset(elapsed: f64, duration: f64, distance: f32) -> f32 {
    if duration <= 0.0 {
        return -distance;
    }
    let t = (elapsed / duration) as f32;
    -distance * ease_out_cubic(t)
}

/// Interpolación de `from` a `to` que empieza en `started_at` (segundos de egui).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: f64,
    duration: f64,
}

impl Tween {
    pub fn new(from: f32, to: f32, started_at: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    pub fn value(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ((now - self.started_at) / self.duration) as f32;
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    pub fn is_active(&self, now: f64) -> bool {
        now - self.started_at < self.duration
    }

    /// Cambia de destino partiendo del valor que se ve ahora.
    pub fn retarget(&mut self, to: f32, now: f64) {
        if to != self.to {
            *self = Self::new(self.value(now), to, now, self.duration);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardFrame {
    pub opacity: f32,
    /// Escala de la tarjeta, de [`CARD_SCALE_FROM`] a 1.
    pub scale: f32,
    pub progress: f32,
    /// Pregunta que hay que pintar: la saliente mientras dura su salida.
    pub shown: usize,
    /// `true` mientras `shown` es la pregunta que se va.
    pub leaving: bool,
    pub slide_x: f32,
    pub slide_opacity: f32,
    pub animating: bool,
}

/// Cambio de pregunta: primero sale `outgoing` hacia la izquierda y luego
/// entra `incoming` por la derecha.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Slide {
    outgoing: Option<usize>,
    incoming: usize,
    started_at: f64,
}

impl Slide {
    fn elapsed(&self, now: f64) -> f64 {
        now - self.started_at
    }

    fn is_leaving(&self, now: f64) -> bool {
        self.outgoing.is_some() && self.elapsed(now) < SLIDE_SECS
    }

    fn shown(&self, now: f64) -> usize {
        match self.outgoing {
            Some(out) if self.is_leaving(now) => out,
            _ => self.incoming,
        }
    }

    fn is_active(&self, now: f64) -> bool {
        self.outgoing.is_some() && self.elapsed(now) < 2.0 * SLIDE_SECS
    }

    /// (desplazamiento, opacidad) de la pregunta visible.
    fn offset(&self, now: f64) -> (f32, f32) {
        let elapsed = self.elapsed(now);
        match self.outgoing {
            None => (0.0, 1.0),
            Some(_) if elapsed < SLIDE_SECS => {
                let x = slide_out_offset(elapsed, SLIDE_SECS, SLIDE_DISTANCE);
                (x, 1.0 + x / SLIDE_DISTANCE)
            }
            Some(_) => {
                let x = slide_offset(elapsed - SLIDE_SECS, SLIDE_SECS, SLIDE_DISTANCE);
                (x, 1.0 - x / SLIDE_DISTANCE)
            }
        }
    }
}

/// Estado de animación de la tarjeta; se inicializa en el primer frame.
#[derive(Default, Debug)]
pub struct CardAnimations {
    intro: Option<Tween>,
    progress: Option<Tween>,
    slide: Option<Slide>,
}

impl CardAnimations {
    /// Calcula los valores del frame para la pregunta `index` y el progreso `progress`.
    pub fn frame(&mut self, now: f64, index: usize, progress: f32) -> CardFrame {
        let intro = *self
            .intro
            .get_or_insert_with(|| Tween::new(0.0, 1.0, now, INTRO_SECS));

        let bar = self
            .progress
            .get_or_insert_with(|| Tween::new(0.0, progress, now, PROGRESS_SECS));
        bar.retarget(progress, now);
        let bar = *bar;

        // La primera pregunta entra con la tarjeta, sin deslizarse
        let slide = match self.slide {
            Some(slide) if slide.incoming == index => slide,
            Some(slide) => Slide {
                outgoing: Some(slide.shown(now)),
                incoming: index,
                started_at: now,
            },
            None => Slide {
                outgoing: None,
                incoming: index,
                started_at: now,
            },
        };
        self.slide = Some(slide);
        let (slide_x, slide_opacity) = slide.offset(now);

        let opacity = intro.value(now);
        CardFrame {
            opacity,
            scale: CARD_SCALE_FROM + (1.0 - CARD_SCALE_FROM) * opacity,
            progress: bar.value(now),
            shown: slide.shown(now),
            leaving: slide.is_leaving(now),
            slide_x,
            slide_opacity,
            animating: intro.is_active(now) || bar.is_active(now) || slide.is_active(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_offset_endpoints() {
        assert_eq!(slide_offset(0.0, SLIDE_SECS, SLIDE_DISTANCE), SLIDE_DISTANCE);
        assert_eq!(slide_offset(SLIDE_SECS, SLIDE_SECS, SLIDE_DISTANCE), 0.0);
        assert_eq!(slide_offset(10.0, SLIDE_SECS, SLIDE_DISTANCE), 0.0);
        let mid = slide_offset(SLIDE_SECS / 2.0, SLIDE_SECS, SLIDE_DISTANCE);
        assert!(mid > 0.0 && mid < SLIDE_DISTANCE / 2.0);
    }

    #[test]
    fn tween_retarget_starts_from_visible_value() {
        let mut tw = Tween::new(0.0, 1.0, 0.0, 1.0);
        let seen = tw.value(0.5);
        tw.retarget(0.5, 0.5);
        assert_eq!(tw.value(0.5), seen);
        assert_eq!(tw.value(2.0), 0.5);
        assert!(!tw.is_active(2.0));
    }

    #[test]
    fn slide_out_offset_endpoints() {
        assert_eq!(slide_out_offset(0.0, SLIDE_SECS, SLIDE_DISTANCE), 0.0);
        assert_eq!(slide_out_offset(SLIDE_SECS, SLIDE_SECS, SLIDE_DISTANCE), -SLIDE_DISTANCE);
        assert_eq!(slide_out_offset(1.0, 0.0, SLIDE_DISTANCE), -SLIDE_DISTANCE);
    }

    #[test]
    fn card_intro_fades_and_scales_in() {
        let mut anim = CardAnimations::default();
        let f = anim.frame(10.0, 0, 1.0 / 3.0);
        assert_eq!(f.opacity, 0.0);
        assert_eq!(f.scale, CARD_SCALE_FROM);
        assert_eq!(f.progress, 0.0);
        assert_eq!(f.slide_x, 0.0);
        assert_eq!(f.shown, 0);
        assert!(!f.leaving);
        assert!(f.animating);

        let mid = anim.frame(10.0 + INTRO_SECS / 2.0, 0, 1.0 / 3.0);
        assert!(mid.scale > CARD_SCALE_FROM && mid.scale < 1.0);

        let f = anim.frame(11.0, 0, 1.0 / 3.0);
        assert_eq!(f.opacity, 1.0);
        assert_eq!(f.scale, 1.0);
        assert_eq!(f.progress, 1.0 / 3.0);
        assert!(!f.animating);
    }

    #[test]
    fn changing_question_waits_for_the_old_one_to_leave() {
        let mut anim = CardAnimations::default();
        anim.frame(0.0, 0, 0.5);
        anim.frame(5.0, 0, 0.5);

        // sale la anterior hacia la izquierda
        let f = anim.frame(6.0, 1, 1.0);
        assert_eq!(f.shown, 0);
        assert!(f.leaving);
        assert_eq!(f.slide_x, 0.0);
        assert_eq!(f.slide_opacity, 1.0);
        assert!(f.animating);
        let f = anim.frame(6.0 + SLIDE_SECS * 0.99, 1, 1.0);
        assert_eq!(f.shown, 0);
        assert!(f.slide_x < -SLIDE_DISTANCE / 2.0);

        // y entra la nueva por la derecha
        let f = anim.frame(6.0 + SLIDE_SECS + 0.001, 1, 1.0);
        assert_eq!(f.shown, 1);
        assert!(!f.leaving);
        assert!(f.slide_x > SLIDE_DISTANCE * 0.9);
        assert!(f.slide_opacity < 0.1);

        let f = anim.frame(7.0, 1, 1.0);
        assert_eq!(f.shown, 1);
        assert_eq!(f.slide_x, 0.0);
        assert_eq!(f.slide_opacity, 1.0);
        assert_eq!(f.progress, 1.0);
        assert!(!f.animating);
    }

    #[test]
    fn new_target_mid_exit_keeps_leaving_question() {
        let mut anim = CardAnimations::default();
        anim.frame(0.0, 0, 0.5);
        anim.frame(5.0, 1, 1.0);
        let f = anim.frame(5.1, 0, 0.5);
        assert_eq!(f.shown, 0);
        assert!(f.leaving);
        assert_eq!(f.slide_x, 0.0);
    }
}
