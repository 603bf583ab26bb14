//! Integration tests for the catalog, rolling and grid planning through the
//! public API.

use std::collections::HashSet;

use dice_core::{all_dice, find, format_result, GridMetrics, RollDisplay, RollResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

// =============================================================================
// CATALOG
// =============================================================================

#[test]
fn test_catalog_is_stable() {
    for _ in 0..3 {
        let faces: Vec<u32> = all_dice().iter().map(|d| d.faces()).collect();
        assert_eq!(faces, vec![4, 6, 8, 10, 12, 20, 100]);
    }
    assert_eq!(all_dice().len(), 7);
}

#[test]
fn test_catalog_labels() {
    let labels: Vec<String> = all_dice().iter().map(|d| d.label()).collect();
    assert_eq!(
        labels,
        vec![
            "4-sided", "6-sided", "8-sided", "10-sided", "12-sided", "20-sided", "100-sided"
        ]
    );
}

// =============================================================================
// ROLLING
// =============================================================================

#[test]
fn test_every_roll_in_range() {
    let mut rng = StdRng::seed_from_u64(2023);
    for die in all_dice() {
        for _ in 0..1000 {
            let value = die.roll_with(&mut rng).value();
            assert!(
                (1..=die.faces()).contains(&value),
                "{value} out of range for {die}"
            );
        }
    }
}

#[test]
fn test_every_d4_face_reachable() {
    let d4 = find(4).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let seen: HashSet<u32> = (0..1000).map(|_| d4.roll_with(&mut rng).value()).collect();
    assert_eq!(seen, (1..=4).collect::<HashSet<u32>>());
}

#[test]
fn test_unseeded_rolls_in_range() {
    let d20 = find(20).unwrap();
    for _ in 0..1000 {
        let value = d20.roll().value();
        assert!((1..=20).contains(&value));
    }
}

#[test]
fn test_format_result_exact() {
    let result = RollResult::new(find(20).unwrap(), 7).unwrap();
    assert_eq!(format_result(&result), "You rolled a 7 on a 20-sided dice");
}

#[test]
fn test_seeded_display_is_reproducible() {
    let mut a = RollDisplay::with_source(StdRng::seed_from_u64(5));
    let mut b = RollDisplay::with_source(StdRng::seed_from_u64(5));
    for die in all_dice() {
        a.roll(*die);
        b.roll(*die);
        assert_eq!(a.message(), b.message());
    }
}

// =============================================================================
// GRID PLANNING
// =============================================================================

#[test]
fn test_phone_layout() {
    let plan = GridMetrics::default().plan(430.0, 7);
    assert_eq!(plan.items_per_row, 3);
    assert_eq!(plan.overflow_count, 1);
}

#[test]
fn test_zero_width_layout() {
    let plan = GridMetrics::default().plan(0.0, 7);
    assert_eq!(plan.overflow_count, 7);
}

#[test]
fn test_partition_invariant_across_widths() {
    let metrics = GridMetrics::default();
    let dice = all_dice();
    let mut width = 0.0;
    while width <= 1200.0 {
        let plan = metrics.plan(width, dice.len());
        assert!(plan.overflow_count <= dice.len());

        let (grid, trailing) = plan.split(dice);
        assert_eq!(grid.len() + trailing.len(), dice.len());
        assert_eq!(trailing.len(), plan.overflow_count);

        let joined: Vec<_> = grid.iter().chain(trailing).copied().collect();
        assert_eq!(joined, dice);

        if plan.items_per_row > 0 {
            assert!(grid.len() % plan.items_per_row == 0);
            for row in plan.grid_rows(dice) {
                assert_eq!(row.len(), plan.items_per_row);
            }
        }
        width += 7.5;
    }
}
