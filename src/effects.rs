//! Confeti de celebración al completar el cuestionario.

use egui::{Color32, Context, Id, LayerId, Order, Pos2, Rect, Shape, Stroke, Vec2, pos2, vec2};
use rand::Rng;

const GRAVITY: f32 = 900.0; // px/s²
const DRAG: f32 = 0.9; // fracción de velocidad conservada por segundo
const PALETTE: [Color32; 7] = [
    Color32::from_rgb(0x26, 0xcc, 0xff),
    Color32::from_rgb(0xa2, 0x5a, 0xfd),
    Color32::from_rgb(0xff, 0x5e, 0x7e),
    Color32::from_rgb(0x88, 0xff, 0x5a),
    Color32::from_rgb(0xfc, 0xff, 0x42),
    Color32::from_rgb(0xff, 0xa6, 0x2d),
    Color32::from_rgb(0xff, 0x36, 0xff),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstOptions {
    pub particle_count: usize,
    /// Apertura del cono en grados
    pub spread: f32,
    /// Origen relativo a la pantalla (0..1 en cada eje)
    pub origin: Vec2,
    pub start_velocity: f32,
    /// Vida de cada partícula en segundos
    pub ticks: f32,
}

impl Default for BurstOptions {
    fn default() -> Self {
        Self {
            particle_count: 100,
            spread: 70.0,
            origin: vec2(0.5, 0.6),
            start_velocity: 900.0,
            ticks: 3.0,
        }
    }
}

#[derive(Clone, Debug)]
struct Particle {
    pos: Pos2,
    vel: Vec2,
    angle: f32,
    spin: f32,
    size: f32,
    color: Color32,
    age: f32,
    life: f32,
}

impl Particle {
    fn alpha(&self) -> f32 {
        (1.0 - self.age / self.life).clamp(0.0, 1.0)
    }
}

#[derive(Default, Debug)]
pub struct Confetti {
    particles: Vec<Particle>,
}

impl Confetti {
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Lanza una ráfaga dentro de `screen`. Se suma a las partículas que sigan vivas.
    pub fn burst(&mut self, opts: &BurstOptions, screen: Rect, rng: &mut impl Rng) {
        let origin = pos2(
            screen.min.x + screen.width() * opts.origin.x,
            screen.min.y + screen.height() * opts.origin.y,
        );
        let half = (opts.spread / 2.0).to_radians();
        // Hacia arriba: -90° en coordenadas de pantalla
        let up = -std::f32::consts::FRAC_PI_2;

        self.particles.reserve(opts.particle_count);
        for _ in 0..opts.particle_count {
            let dir = up + rng.gen_range(-half..=half);
            let speed = opts.start_velocity * rng.gen_range(0.5..=1.0);
            self.particles.push(Particle {
                pos: origin,
                vel: vec2(dir.cos(), dir.sin()) * speed,
                angle: rng.gen_range(0.0..std::f32::consts::TAU),
                spin: rng.gen_range(-8.0..=8.0),
                size: rng.gen_range(5.0..=9.0),
                color: PALETTE[rng.gen_range(0..PALETTE.len())],
                age: 0.0,
                life: opts.ticks * rng.gen_range(0.7..=1.0),
            });
        }
        log::debug!("Confeti: {} partículas en {:?}", opts.particle_count, origin);
    }

    /// Avanza la simulación `dt` segundos y descarta las partículas agotadas.
    pub fn step(&mut self, dt: f32) {
        let drag = DRAG.powf(dt);
        for p in &mut self.particles {
            p.vel.y += GRAVITY * dt;
            p.vel *= drag;
            p.pos += p.vel * dt;
            p.angle += p.spin * dt;
            p.age += dt;
        }
        self.particles.retain(|p| p.age < p.life);
    }

    pub fn show(&mut self, ctx: &Context) {
        if self.particles.is_empty() {
            return;
        }
        self.step(ctx.input(|i| i.stable_dt));

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("confetti")));
        for p in &self.particles {
            let (sin, cos) = p.angle.sin_cos();
            let hx = vec2(cos, sin) * p.size;
            let hy = vec2(-sin, cos) * p.size * 0.5;
            let points = vec![p.pos - hx - hy, p.pos + hx - hy, p.pos + hx + hy, p.pos - hx + hy];
            painter.add(Shape::convex_polygon(
                points,
                p.color.gamma_multiply(p.alpha()),
                Stroke::NONE,
            ));
        }
        ctx.request_repaint();
    }
}
