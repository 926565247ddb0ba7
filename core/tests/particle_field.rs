use kazari_core::particles::{
    spawn_count, ParticleField, LIFE_MAX, PALETTE, RADIUS_MAX, RADIUS_MIN, VELOCITY_LIMIT,
};

fn field_1000x600() -> ParticleField {
    ParticleField::new(1000.0, 600.0, 0x5EED)
}

#[test]
fn spawn_count_scales_with_viewport_width() {
    assert_eq!(spawn_count(1000.0), 50);
    assert_eq!(spawn_count(400.0), 20);
    assert_eq!(spawn_count(399.0), 19);
    assert_eq!(spawn_count(10.0), 0);
    assert_eq!(spawn_count(4000.0), 50);
}

#[test]
fn population_is_invariant_across_frames() {
    let mut field = field_1000x600();
    let population = field.len();
    assert_eq!(population, 50);
    // Initial life tops out at 150 frames, so every particle dies and
    // respawns at least once over this run.
    for _ in 0..400 {
        field.frame();
        assert_eq!(field.len(), population);
    }
}

#[test]
fn positions_stay_within_bounds() {
    let mut field = field_1000x600();
    for _ in 0..400 {
        field.frame();
        for particle in field.particles() {
            assert!(particle.x >= 0.0 && particle.x <= field.width());
            assert!(particle.y >= 0.0 && particle.y <= field.height());
        }
    }
}

#[test]
fn spawn_parameters_stay_in_range() {
    let mut field = field_1000x600();
    for _ in 0..400 {
        field.frame();
        for particle in field.particles() {
            assert!(particle.life > 0.0 && particle.life <= LIFE_MAX);
            assert!(particle.radius >= RADIUS_MIN && particle.radius <= RADIUS_MAX);
            assert!(particle.vx.abs() <= VELOCITY_LIMIT);
            assert!(particle.vy.abs() <= VELOCITY_LIMIT);
            assert!(PALETTE.contains(&particle.color));
        }
    }
}

#[test]
fn alpha_clamps_to_fully_opaque() {
    let field = field_1000x600();
    for particle in field.particles() {
        let alpha = particle.alpha();
        assert!(alpha > 0.0 && alpha <= 1.0);
    }
}

#[test]
fn same_seed_is_deterministic() {
    let mut a = ParticleField::new(800.0, 500.0, 77);
    let mut b = ParticleField::new(800.0, 500.0, 77);
    for _ in 0..100 {
        a.frame();
        b.frame();
    }
    for (left, right) in a.particles().iter().zip(b.particles()) {
        assert_eq!(left.x, right.x);
        assert_eq!(left.y, right.y);
        assert_eq!(left.life, right.life);
    }
}

#[test]
fn resize_keeps_particle_state() {
    let mut field = field_1000x600();
    for _ in 0..10 {
        field.frame();
    }
    let before: Vec<(f32, f32, f32)> = field
        .particles()
        .iter()
        .map(|particle| (particle.x, particle.y, particle.life))
        .collect();
    field.resize(1400.0, 900.0);
    let after: Vec<(f32, f32, f32)> = field
        .particles()
        .iter()
        .map(|particle| (particle.x, particle.y, particle.life))
        .collect();
    assert_eq!(before, after);
    assert_eq!(field.width(), 1400.0);
    assert_eq!(field.height(), 900.0);
}
