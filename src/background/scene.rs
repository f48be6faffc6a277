use rand::Rng;
use serde::Serialize;

use crate::interact::theme::Theme;

/// Half-extents of the box the particles bounce around in.
pub const BOUNDS: Vec3 = Vec3 { x: 50.0, y: 50.0, z: 25.0 };
pub const CLOUD_SPIN: f32 = 0.0002;
pub const MAX_SPEED: f32 = 0.01;
pub const BOB_AMPLITUDE: f32 = 0.01;
/// Camera y travel over a full page scroll.
pub const SCROLL_TRAVEL: f32 = 10.0;

pub const PARTICLE_DARK: u32 = 0x818cf8;
pub const PARTICLE_LIGHT: u32 = 0x6366f1;

pub fn particle_color(theme: Theme) -> u32 {
    match theme {
        Theme::Dark => PARTICLE_DARK,
        Theme::Light => PARTICLE_LIGHT,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleSet {
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    pub rotation_y: f32,
    pub color: u32,
    pub size: f32,
    pub opacity: f32,
}

impl ParticleSet {
    pub fn random<R: Rng>(count: usize, color: u32, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec3::new(
                rng.gen_range(-BOUNDS.x..BOUNDS.x),
                rng.gen_range(-BOUNDS.y..BOUNDS.y),
                rng.gen_range(-BOUNDS.z..BOUNDS.z),
            ));
            velocities.push(Vec3::new(
                rng.gen_range(-MAX_SPEED..MAX_SPEED),
                rng.gen_range(-MAX_SPEED..MAX_SPEED),
                rng.gen_range(-MAX_SPEED..MAX_SPEED),
            ));
        }
        ParticleSet { positions, velocities, rotation_y: 0.0, color, size: 2.0, opacity: 0.6 }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Move every particle, then turn around any that left the box while still
    /// heading outward.
    pub fn step(&mut self) {
        for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            p.x += v.x;
            p.y += v.y;
            p.z += v.z;
            reflect(p.x, &mut v.x, BOUNDS.x);
            reflect(p.y, &mut v.y, BOUNDS.y);
            reflect(p.z, &mut v.z, BOUNDS.z);
        }
        self.rotation_y += CLOUD_SPIN;
    }
}

fn reflect(pos: f32, vel: &mut f32, bound: f32) {
    if (pos > bound && *vel > 0.0) || (pos < -bound && *vel < 0.0) {
        *vel = -*vel;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeKind {
    Torus { radius: f32, tube: f32 },
    Octahedron { radius: f32 },
    Tetrahedron { radius: f32 },
}

#[derive(Debug, Clone, Serialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: u32,
    pub opacity: f32,
    pub wireframe: bool,
    pub position: Vec3,
    pub rotation: Vec3,
    pub rotation_speed: Vec3,
}

impl Shape {
    /// Rotate by the per-axis speed and bob vertically with wall-clock time.
    pub fn step(&mut self, time_secs: f64) {
        self.rotation.x += self.rotation_speed.x;
        self.rotation.y += self.rotation_speed.y;
        self.rotation.z += self.rotation_speed.z;
        let phase = time_secs + f64::from(self.position.x);
        self.position.y += phase.sin() as f32 * BOB_AMPLITUDE;
    }
}

/// Torus, octahedron, tetrahedron spread along x behind the particle cloud.
pub fn default_shapes<R: Rng>(rng: &mut R) -> Vec<Shape> {
    let kinds = [
        (ShapeKind::Torus { radius: 3.0, tube: 1.0 }, 0x667eea),
        (ShapeKind::Octahedron { radius: 2.0 }, 0x764ba2),
        (ShapeKind::Tetrahedron { radius: 2.5 }, 0x8b5cf6),
    ];
    kinds
        .iter()
        .enumerate()
        .map(|(i, (kind, color))| {
            let i = i as f32;
            Shape {
                kind: *kind,
                color: *color,
                opacity: 0.15,
                wireframe: true,
                position: Vec3::new((i - 1.0) * 20.0, i.sin() * 10.0, -20.0),
                rotation: Vec3::default(),
                rotation_speed: Vec3::new(
                    rng.gen_range(0.0..MAX_SPEED),
                    rng.gen_range(0.0..MAX_SPEED),
                    rng.gen_range(0.0..MAX_SPEED),
                ),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct Camera {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

/// Output surface size plus the page scroll state the camera follows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub scroll_y: f64,
    pub scroll_height: f64,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Viewport { width, height, scroll_y: 0.0, scroll_height: f64::from(height) }
    }

    fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// 0 at the top, 1 at the bottom; 0 when the page doesn't scroll.
    pub fn scroll_fraction(&self) -> f32 {
        let range = self.scroll_height - f64::from(self.height);
        if range <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / range).clamp(0.0, 1.0) as f32
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub particles: ParticleSet,
    pub shapes: Vec<Shape>,
    pub camera: Camera,
    pub viewport: Viewport,
    pub frames: u64,
}

impl Scene {
    pub fn new<R: Rng>(particle_count: usize, theme: Theme, viewport: Viewport, rng: &mut R) -> Self {
        let particles = ParticleSet::random(particle_count, particle_color(theme), rng);
        let shapes = default_shapes(rng);
        let camera = Camera {
            fov: 75.0,
            aspect: viewport.aspect(),
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 30.0),
        };
        Scene { particles, shapes, camera, viewport, frames: 0 }
    }

    /// One display frame.
    pub fn step(&mut self, time_secs: f64) {
        self.particles.step();
        for shape in &mut self.shapes {
            shape.step(time_secs);
        }
        self.camera.position.y = self.viewport.scroll_fraction() * SCROLL_TRAVEL;
        self.frames += 1;
    }

    /// Only the particle color follows the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.particles.color = particle_color(theme);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport.width = width;
        self.viewport.height = height;
        self.camera.aspect = self.viewport.aspect();
    }

    pub fn scroll(&mut self, scroll_y: f64, scroll_height: f64) {
        self.viewport.scroll_y = scroll_y;
        self.viewport.scroll_height = scroll_height;
    }
}
