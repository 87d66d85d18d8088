#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::commands::PlayerCommand;
    use crate::entities::{Enemy, ObjectId, ObjectIdAllocator, Player};
    use crate::enums::*;
    use crate::position::{
        distance_between, quadrant_distance, sector_distance, GridPoint, UniversePosition,
    };
    use crate::range::RangedValue;

    fn pos(qx: i32, qy: i32, sx: i32, sy: i32) -> UniversePosition {
        UniversePosition::new(GridPoint::new(qx, qy), GridPoint::new(sx, sy))
    }

    // ---- RangedValue ----

    #[test]
    fn test_ranged_value_clamps_above_max() {
        let mut v = RangedValue::full(100.0);
        v.apply_delta(50.0);
        assert_eq!(v.current, 100.0);
    }

    #[test]
    fn test_ranged_value_clamps_below_min() {
        let mut v = RangedValue::full(100.0);
        v.apply_delta(-250.0);
        assert_eq!(v.current, 0.0);
    }

    #[test]
    fn test_ranged_value_respects_nonzero_min() {
        let mut v = RangedValue::new(7.0, 10.0, 1.0);
        v.set(0.0);
        assert_eq!(v.current, 1.0);
        v.set(99.0);
        assert_eq!(v.current, 10.0);
    }

    #[test]
    fn test_ranged_value_fraction_and_percentage() {
        let v = RangedValue::new(50.0, 200.0, 0.0);
        assert!((v.fraction() - 0.25).abs() < 1e-12);
        assert!((v.percentage() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_gauge_color_tiers() {
        // 10% of 1000 is critical.
        let v = RangedValue::new(100.0, 1000.0, 0.0);
        assert_eq!(v.color(), GaugeColor::Critical);
        // 50% but under 30 absolute units is a warning.
        let v = RangedValue::new(25.0, 50.0, 0.0);
        assert_eq!(v.color(), GaugeColor::Warning);
        // Healthy on both axes.
        let v = RangedValue::new(800.0, 1000.0, 0.0);
        assert_eq!(v.color(), GaugeColor::Nominal);
    }

    proptest! {
        /// After any sequence of clamped mutations, min <= current <= max.
        #[test]
        fn prop_clamped_mutations_hold_invariant(deltas in prop::collection::vec(-500.0f64..500.0, 0..32)) {
            let mut v = RangedValue::new(150.0, 300.0, 0.0);
            for delta in deltas {
                v.apply_delta(delta);
                prop_assert!(v.current >= v.min && v.current <= v.max);
            }
        }
    }

    // ---- Positions and distances ----

    #[test]
    fn test_position_validity() {
        assert!(pos(0, 0, 7, 7).is_valid());
        assert!(!pos(8, 0, 0, 0).is_valid());
        assert!(!pos(0, -1, 0, 0).is_valid());
        assert!(!pos(3, 3, 0, 8).is_valid());
    }

    #[test]
    fn test_quadrant_distance_is_euclidean() {
        let a = pos(0, 0, 0, 0);
        let b = pos(3, 4, 0, 0);
        assert!((quadrant_distance(&a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_sector_distance_normalizes_to_grid_span() {
        // Crossing the full sector grid on one axis is exactly one unit.
        let a = pos(2, 2, 0, 3);
        let b = pos(2, 2, 7, 3);
        assert!((sector_distance(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_between_sums_both_components() {
        let a = pos(0, 0, 0, 0);
        let b = pos(3, 4, 7, 0);
        assert!((distance_between(&a, &b) - 6.0).abs() < 1e-12);
    }

    // ---- Entities ----

    #[test]
    fn test_id_allocator_is_sequential() {
        let mut ids = ObjectIdAllocator::default();
        assert_eq!(ids.allocate(), ObjectId(0));
        assert_eq!(ids.allocate(), ObjectId(1));
        assert_eq!(ids.allocate(), ObjectId(2));
    }

    #[test]
    fn test_enemy_class_stats() {
        let mut ids = ObjectIdAllocator::default();
        let scout = Enemy::new(ids.allocate(), EnemyClass::Scout, pos(0, 0, 0, 0));
        assert_eq!(scout.attributes.hull.max, 100.0);
        assert_eq!(scout.attributes.torpedoes.max, 0.0);
        assert_eq!(scout.attributes.max_phaser_power, 150.0);

        let cube = Enemy::new(ids.allocate(), EnemyClass::Cube, pos(0, 0, 0, 0));
        assert_eq!(cube.attributes.hull.max, 800.0);
        assert_eq!(cube.attributes.shields.max, 1500.0);
        assert_eq!(cube.attributes.max_phaser_power, 700.0);
    }

    #[test]
    fn test_player_targets_own_quadrant_initially() {
        let mut ids = ObjectIdAllocator::default();
        let player = Player::new(ids.allocate(), pos(5, 2, 3, 3));
        assert_eq!(player.attributes.target_quadrant, GridPoint::new(5, 2));
        assert!(!player.is_destroyed());
    }

    // ---- Serde ----

    #[test]
    fn test_turn_state_serde() {
        for v in [TurnState::PlayerTurn, TurnState::EnemyTurn] {
            let json = serde_json::to_string(&v).unwrap();
            let back: TurnState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_firing_action_serde() {
        for v in [
            FiringAction::Phasers,
            FiringAction::Torpedoes,
            FiringAction::Destroyed,
        ] {
            let json = serde_json::to_string(&v).unwrap();
            let back: FiringAction = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_system_id_serde() {
        for v in SystemId::ALL {
            let json = serde_json::to_string(&v).unwrap();
            let back: SystemId = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::MoveTo {
                sector: GridPoint::new(4, 5),
            },
            PlayerCommand::FirePhasers,
            PlayerCommand::NextFiringStep,
            PlayerCommand::AddTarget {
                target: ObjectId(7),
                count: 2,
            },
            PlayerCommand::TransferEnergyToShield {
                facing: ShieldFacing::Aft,
            },
            PlayerCommand::SetWarpSpeed { speed: 4.0 },
            PlayerCommand::ToggleRepairPriority {
                system: SystemId::WarpEngines,
            },
            PlayerCommand::Repair { days: 2.5 },
            PlayerCommand::EndTurn,
            PlayerCommand::AdvanceEnemyTurn,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// RangedValue is plain data: derived quantities survive a round-trip
    /// without any rehydration pass.
    #[test]
    fn test_ranged_value_serde_keeps_behavior() {
        let v = RangedValue::new(45.0, 300.0, 0.0);
        let json = serde_json::to_string(&v).unwrap();
        let back: RangedValue = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
        assert_eq!(v.fraction(), back.fraction());
        assert_eq!(v.color(), back.color());
    }
}
