use crate::config::GrainConfig;
use glam::Vec2;
use rand::Rng;

/// Number of specks for a canvas, `floor(W * H * density)`.
#[inline]
pub fn grain_count(size: Vec2, density: f32) -> usize {
    (size.x.max(0.0) * size.y.max(0.0) * density).floor() as usize
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Speck {
    pub pos: Vec2,
    pub size: f32,
}

/// Fresh uniformly placed specks; nothing carries over between frames.
pub fn scatter<'a, R: Rng + ?Sized>(
    size: Vec2,
    cfg: &'a GrainConfig,
    rng: &'a mut R,
) -> impl Iterator<Item = Speck> + 'a {
    (0..grain_count(size, cfg.density)).map(move |_| Speck {
        pos: Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y),
        size: rng.gen::<f32>() * cfg.max_size,
    })
}
