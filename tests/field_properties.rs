//! Property tests for pheromone fields, sensing and movement

use proptest::prelude::*;

use stigmergy_sim::core::rng::create_rng;
use stigmergy_sim::core::types::Vec2;
use stigmergy_sim::simulation::{sense, Agent, Kinematics, PheromoneField, MAX_INTENSITY};

const W: usize = 32;
const H: usize = 24;

fn deposits() -> impl Strategy<Value = Vec<(f32, f32, f32)>> {
    prop::collection::vec(
        (0.0..W as f32, 0.0..H as f32, 0.0f32..300.0),
        0..64,
    )
}

proptest! {
    #[test]
    fn test_decay_scales_every_cell(deposits in deposits(), factor in 0.01f32..0.999) {
        let mut field = PheromoneField::new(W, H);
        for (x, y, amount) in deposits {
            field.deposit(x, y, amount);
        }
        let before = field.cells().to_vec();

        field.decay(factor);

        for (after, before) in field.cells().iter().zip(before) {
            prop_assert_eq!(*after, before * factor);
            prop_assert!(*after <= before);
            prop_assert!(*after >= 0.0);
        }
    }

    #[test]
    fn test_deposits_never_exceed_ceiling(amounts in prop::collection::vec(0.0f32..1000.0, 1..50)) {
        let mut field = PheromoneField::new(4, 4);
        for amount in amounts {
            field.deposit(2.0, 2.0, amount);
            prop_assert!(field.sample(2, 2) <= MAX_INTENSITY);
        }
    }

    #[test]
    fn test_sense_outside_reads_zero(
        ox in -1000.0f32..1000.0,
        oy in -1000.0f32..1000.0,
        heading in -10.0f32..10.0,
        offset in -1.0f32..1.0,
        distance in 0.0f32..500.0,
    ) {
        let mut field = PheromoneField::new(W, H);
        for y in 0..H {
            for x in 0..W {
                field.deposit(x as f32, y as f32, 1.0);
            }
        }

        let origin = Vec2::new(ox, oy);
        let value = sense(&field, origin, heading, offset, distance);

        let (x, y) = (origin + Vec2::from_angle(heading + offset) * distance).truncate();
        let inside = x >= 0 && y >= 0 && (x as usize) < W && (y as usize) < H;
        prop_assert_eq!(value, if inside { 1.0 } else { 0.0 });
    }

    #[test]
    fn test_movement_stays_in_bounds(
        x in 0.0f32..(W - 1) as f32,
        y in 0.0f32..(H - 1) as f32,
        heading in -10.0f32..10.0,
        speed in 0.0f32..20.0,
        seed in any::<u64>(),
    ) {
        let field = PheromoneField::new(W, H);
        let kinematics = Kinematics { speed, ..Kinematics::default() };
        let mut rng = create_rng(seed);
        let mut agent = Agent::new(Vec2::new(x, y), heading);

        for _ in 0..20 {
            agent.advance(&field, &kinematics, &mut rng);
            prop_assert!((0.0..=(W - 1) as f32).contains(&agent.position.x));
            prop_assert!((0.0..=(H - 1) as f32).contains(&agent.position.y));
        }
    }
}
