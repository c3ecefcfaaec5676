// Host-side tests for the particle burst.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use fx::constants::*;
use fx::particles::*;
use glam::Vec2;

#[test]
fn burst_has_eight_particles_at_card_center() {
    let particles = burst(Vec2::new(240.0, 160.0));
    assert_eq!(particles.len(), 8);
    assert!(!particles.spilled());
    for p in &particles {
        assert_eq!(p.origin, Vec2::new(120.0, 80.0));
        assert!((p.offset.length() - PARTICLE_DISTANCE_PX).abs() < 1e-3);
    }
}

#[test]
fn burst_angles_are_evenly_spaced() {
    let particles = burst(Vec2::new(100.0, 100.0));
    let expected = [
        Vec2::new(60.0, 0.0),
        Vec2::new(0.0, 60.0),
        Vec2::new(-60.0, 0.0),
        Vec2::new(0.0, -60.0),
    ];
    for (k, e) in expected.iter().enumerate() {
        let p = particles[k * 2];
        assert!((p.offset - *e).length() < 1e-3, "particle {} at {:?}", k * 2, p.offset);
    }
    let step = std::f32::consts::TAU / 8.0;
    for pair in particles.windows(2) {
        let a = pair[0].offset.y.atan2(pair[0].offset.x);
        let b = pair[1].offset.y.atan2(pair[1].offset.x);
        let mut d = b - a;
        if d < 0.0 {
            d += std::f32::consts::TAU;
        }
        assert!((d - step).abs() < 1e-4);
    }
}

#[test]
fn first_particle_styles() {
    let particles = burst(Vec2::new(100.0, 60.0));
    let styles = particles[0].styles();
    assert_eq!(styles[0], ("left", "50px".to_string()));
    assert_eq!(styles[1], ("top", "30px".to_string()));
    assert_eq!(styles[2], ("--tx", "60px".to_string()));
    assert_eq!(styles[3], ("--ty", "0px".to_string()));
}

#[test]
fn guard_fires_only_on_first_hover() {
    let mut guard = BurstGuard::from_attribute(None);
    assert_eq!(guard, BurstGuard::Armed);
    assert!(guard.fire());
    assert!(!guard.fire());
    assert!(!guard.fire());
    assert_eq!(guard, BurstGuard::Spent);
}

#[test]
fn persisted_attribute_disarms_card() {
    assert_eq!(BurstGuard::from_attribute(Some("true")), BurstGuard::Spent);
    assert_eq!(BurstGuard::from_attribute(Some("false")), BurstGuard::Armed);
    let mut guard = BurstGuard::from_attribute(Some("true"));
    assert!(!guard.fire());
}

#[test]
fn every_particle_is_removed_after_800ms() {
    let particles = burst(Vec2::new(180.0, 120.0));
    assert_eq!(particles.len(), PARTICLE_COUNT);
    assert!(particles.iter().all(|p| p.remove_after_ms == 800));
}
