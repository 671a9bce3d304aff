//! Starting rack
//!
//! Fifteen object balls form a five-row triangle toward the far end of the
//! table, apex pointing at the cue ball. Rows advance by 1.1 diameters and
//! balls within a row are 1.1 diameters apart.

use glam::Vec2;

use super::state::BallType;
use super::table::Table;

/// Gap multiplier between neighbouring balls in the rack
const RACK_SPACING: f32 = 1.1;
/// Rack apex, as a fraction of felt width from the left edge
const RACK_APEX: f32 = 0.6;
/// Cue spot, as a fraction of felt width from the left edge
const CUE_SPOT: f32 = 0.15;

/// Rack slot (row, position in row) for each object ball; `None` for the cue
pub fn rack_slot(ball: BallType) -> Option<(u32, u32)> {
    use BallType::*;
    let slot = match ball {
        Cue => return None,

        Yellow => (0, 0),

        RedStripe => (1, 0),
        Red => (1, 1),

        Green => (2, 0),
        Black => (2, 1),
        GreenStripe => (2, 2),

        OrangeStripe => (3, 0),
        MaroonStripe => (3, 1),
        Purple => (3, 2),
        YellowStripe => (3, 3),

        Maroon => (4, 0),
        Blue => (4, 1),
        BlueStripe => (4, 2),
        Orange => (4, 3),
        PurpleStripe => (4, 4),
    };
    Some(slot)
}

/// Center of a rack slot
pub fn rack_position(table: &Table, row: u32, slot: u32) -> Vec2 {
    let d = table.ball_diameter;
    let row = row as f32;

    let x = table.felt_left + RACK_APEX * table.felt_width + row * (RACK_SPACING * d);

    // Rows are centred by half a diameter per ball, then spread at 1.1 d
    let base_y = table.felt_top + table.felt_height / 2.0 - row / 2.0 * d;
    let y = base_y + RACK_SPACING * d * slot as f32;

    Vec2::new(x, y)
}

/// Cue ball spot, vertically centred near the left end
pub fn cue_position(table: &Table) -> Vec2 {
    Vec2::new(
        table.felt_left + table.felt_width * CUE_SPOT,
        table.felt_top + table.felt_height / 2.0,
    )
}

/// Starting position of every ball, in `BallType::ALL` order
pub fn starting_positions(table: &Table) -> [(BallType, Vec2); BallType::COUNT] {
    BallType::ALL.map(|ball| {
        let pos = match rack_slot(ball) {
            Some((row, slot)) => rack_position(table, row, slot),
            None => cue_position(table),
        };
        (ball, pos)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cue_spot() {
        let table = Table::STANDARD;
        assert_eq!(cue_position(&table), Vec2::new(220.0, 300.0));
        let positions = starting_positions(&table);
        assert_eq!(positions[0], (BallType::Cue, Vec2::new(220.0, 300.0)));
    }

    #[test]
    fn test_apex_and_back_row() {
        let table = Table::STANDARD;
        assert_eq!(rack_position(&table, 0, 0), Vec2::new(580.0, 300.0));

        let back = rack_position(&table, 4, 0);
        assert!((back.x - 734.0).abs() < 1e-3);
        assert!((back.y - 230.0).abs() < 1e-3);
    }

    #[test]
    fn test_slots_are_unique_and_complete() {
        let slots: HashSet<_> = BallType::ALL.iter().filter_map(|&b| rack_slot(b)).collect();
        assert_eq!(slots.len(), 15);
        for row in 0..5 {
            for slot in 0..=row {
                assert!(slots.contains(&(row, slot)));
            }
        }
    }

    #[test]
    fn test_balls_start_apart_and_on_felt() {
        let table = Table::STANDARD;
        let positions = starting_positions(&table);
        for (i, (_, a)) in positions.iter().enumerate() {
            assert!(table.contains_ball(*a));
            for (_, b) in &positions[i + 1..] {
                assert!(a.distance(*b) > table.ball_diameter);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let table = Table::STANDARD;
        assert_eq!(starting_positions(&table), starting_positions(&table));
    }
}
