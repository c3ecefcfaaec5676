use super::constants::{PARTICLE_COUNT, PARTICLE_DISTANCE_PX, PARTICLE_LIFETIME_MS};
use glam::Vec2;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// One burst particle: spawn position (card-local px) and outward displacement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub origin: Vec2,
    pub offset: Vec2,
    /// The element is removed once its CSS animation has played out.
    pub remove_after_ms: u32,
}

pub type Burst = SmallVec<[Particle; PARTICLE_COUNT]>;

/// Evenly spaced particles around the center of a card of the given size.
pub fn burst(card_size: Vec2) -> Burst {
    let origin = card_size * 0.5;
    (0..PARTICLE_COUNT)
        .map(|i| {
            let angle = i as f32 / PARTICLE_COUNT as f32 * TAU;
            Particle {
                origin,
                offset: Vec2::new(angle.cos(), angle.sin()) * PARTICLE_DISTANCE_PX,
                remove_after_ms: PARTICLE_LIFETIME_MS,
            }
        })
        .collect()
}

/// Per-card arm state; the persisted attribute value seeds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurstGuard {
    Armed,
    Spent,
}

impl BurstGuard {
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("true") => BurstGuard::Spent,
            _ => BurstGuard::Armed,
        }
    }

    /// Returns true exactly once: on the first hover of an armed card.
    pub fn fire(&mut self) -> bool {
        match self {
            BurstGuard::Armed => {
                *self = BurstGuard::Spent;
                true
            }
            BurstGuard::Spent => false,
        }
    }
}

impl Particle {
    pub fn styles(&self) -> [(&'static str, String); 4] {
        [
            ("left", format!("{}px", self.origin.x)),
            ("top", format!("{}px", self.origin.y)),
            ("--tx", format!("{}px", self.offset.x)),
            ("--ty", format!("{}px", self.offset.y)),
        ]
    }
}
