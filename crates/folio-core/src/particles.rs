use crate::constants::*;
use crate::surface::{Animation, Rgba, Surface};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

#[derive(Clone, Debug)]
pub struct ParticleParams {
    pub spacing_px: f32,
    pub radius: (f32, f32),
    pub speed_max: f32,
    pub alpha: (f32, f32),
    pub link_distance: f32,
    pub link_alpha_max: f32,
    pub rgb: [u8; 3],
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            spacing_px: PARTICLE_SPACING_PX,
            radius: (PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_MAX),
            speed_max: PARTICLE_SPEED_MAX,
            alpha: (PARTICLE_ALPHA_MIN, PARTICLE_ALPHA_MAX),
            link_distance: LINK_DISTANCE_PX,
            link_alpha_max: LINK_ALPHA_MAX,
            rgb: PARTICLE_RGB,
        }
    }
}

/// A connecting line between two particles closer than the link distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub alpha: f32,
}

pub struct ParticleField {
    pub params: ParticleParams,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: ParticleParams, rng: StdRng) -> Self {
        Self {
            params,
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(ParticleParams::default(), StdRng::seed_from_u64(seed))
    }

    /// Regenerate the whole field for a viewport; nothing from the old set survives.
    pub fn initialize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let (w, h) = (self.width, self.height);
        let count = particle_count(w, self.params.spacing_px);
        let p = &self.params;
        let rng = &mut self.rng;
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let pos = Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h);
            let radius = between(rng, p.radius.0, p.radius.1);
            let vel = Vec2::new(
                between(rng, -p.speed_max, p.speed_max),
                between(rng, -p.speed_max, p.speed_max),
            );
            let alpha = between(rng, p.alpha.0, p.alpha.1);
            particles.push(Particle {
                pos,
                vel,
                radius,
                alpha,
            });
        }
        self.particles = particles;
        log::debug!(
            "[particles] init {} particles for {:.0}x{:.0}",
            self.particles.len(),
            self.width,
            self.height
        );
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.initialize(width, height);
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access for callers that place particles explicitly.
    pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }

    /// Integrate one frame of motion with wraparound at the edges.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.pos += p.vel;
            p.pos.x = wrap(p.pos.x, w);
            p.pos.y = wrap(p.pos.y, h);
        }
    }

    /// Pairs close enough to be joined, with the alpha they are drawn at.
    pub fn links(&self) -> Vec<Link> {
        let mut out = Vec::new();
        let max_d = self.params.link_distance;
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let distance = self.particles[i].pos.distance(self.particles[j].pos);
                if distance < max_d {
                    out.push(Link {
                        a: i,
                        b: j,
                        distance,
                        alpha: link_alpha(distance, max_d, self.params.link_alpha_max),
                    });
                }
            }
        }
        out
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        let rgb = self.params.rgb;
        for p in &self.particles {
            surface.fill_circle(p.pos, p.radius, Rgba::rgb(rgb, p.alpha));
        }
        for link in self.links() {
            surface.stroke_line(
                self.particles[link.a].pos,
                self.particles[link.b].pos,
                LINK_WIDTH_PX,
                Rgba::rgb(rgb, link.alpha),
            );
        }
    }

    /// One animation frame: clear, move, draw.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) {
        surface.clear(self.width, self.height);
        self.step();
        self.draw(surface);
    }
}

impl Animation for ParticleField {
    fn draw_frame<S: Surface>(&mut self, surface: &mut S) {
        self.tick(surface);
    }
}

#[inline]
pub fn particle_count(width: f32, spacing_px: f32) -> usize {
    if width <= 0.0 || spacing_px <= 0.0 {
        return 0;
    }
    (width / spacing_px).floor() as usize
}

/// Line opacity for a pair at `distance`; 0 at or beyond `max_distance`.
#[inline]
pub fn link_alpha(distance: f32, max_distance: f32, alpha_max: f32) -> f32 {
    if distance >= max_distance {
        0.0
    } else {
        alpha_max * (1.0 - distance / max_distance)
    }
}

// Exact reset to the opposite bound, not reflection.
#[inline]
fn wrap(v: f32, max: f32) -> f32 {
    if v < 0.0 {
        max
    } else if v > max {
        0.0
    } else {
        v
    }
}

#[inline]
fn between<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}
