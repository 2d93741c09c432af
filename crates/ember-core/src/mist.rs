//! Connecting-line "mist": drifting nodes joined by distance-faded lines.

use crate::blobs::wrap;
use crate::config::MistConfig;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct MistNode {
    pub pos: Vec2,
    pub vel: Vec2,
}

#[inline]
pub fn node_count(area: f32, cfg: &MistConfig) -> usize {
    let by_area = (area.max(0.0) / cfg.area_per_node).floor() as usize;
    by_area.min(cfg.cap).max(cfg.floor)
}

/// `max_alpha * (1 - d / link_distance)` inside the link distance, else 0.
#[inline]
pub fn link_alpha(distance: f32, cfg: &MistConfig) -> f32 {
    if distance >= cfg.link_distance {
        0.0
    } else {
        cfg.max_alpha * (1.0 - distance / cfg.link_distance)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

#[derive(Clone, Debug, Default)]
pub struct MistField {
    nodes: Vec<MistNode>,
    size: Vec2,
}

impl MistField {
    pub fn new<R: Rng + ?Sized>(size: Vec2, cfg: &MistConfig, rng: &mut R) -> Self {
        let nodes = (0..node_count(size.x * size.y, cfg))
            .map(|_| MistNode {
                pos: Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y),
                vel: Vec2::from_angle(rng.gen::<f32>() * TAU)
                    * cfg.speed
                    * (0.4 + 0.6 * rng.gen::<f32>()),
            })
            .collect();
        Self { nodes, size }
    }

    #[inline]
    pub fn nodes(&self) -> &[MistNode] {
        &self.nodes
    }

    pub fn step(&mut self, dt_sec: f32) {
        for n in &mut self.nodes {
            n.pos = wrap(n.pos + n.vel * dt_sec, 0.0, self.size);
        }
    }

    pub fn links<'a>(&'a self, cfg: &'a MistConfig) -> impl Iterator<Item = Link> + 'a {
        self.nodes.iter().enumerate().flat_map(move |(i, a)| {
            self.nodes[i + 1..].iter().filter_map(move |b| {
                let alpha = link_alpha(a.pos.distance(b.pos), cfg);
                (alpha > 0.0).then_some(Link {
                    from: a.pos,
                    to: b.pos,
                    alpha,
                })
            })
        })
    }
}
