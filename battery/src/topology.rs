//! Splits a building's floors across its columns.
//!
//! With basements, the first column (`A`) serves the basements and the
//! lobby, the others share the above-ground floors in contiguous blocks.
//! Any floors left over by the integer split go to the last column.

use shared_resources::config::BuildingConfig;
use shared_resources::floor::{Floor, LOBBY};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub id: u32,
    pub name: char,
    pub min_floor: Floor,
    pub max_floor: Floor,
    /// Floors the column stops at, the lobby included.
    pub served_floors: u32,
}

/// `A` for the first column, `B` for the second, ...
pub fn column_name(index: u32) -> char {
    char::from_u32('A' as u32 + index).unwrap_or('?')
}

/// Expects a validated building.
pub fn compute_layout(building: &BuildingConfig) -> Vec<ColumnSpec> {
    let above = building.above_ground_floors();
    let basements = building.basements;

    if building.columns <= 1 {
        let min_floor = if building.has_basements() { -basements } else { LOBBY };
        return vec![ColumnSpec {
            id: 1,
            name: column_name(0),
            min_floor,
            max_floor: above,
            served_floors: building.total_floors.max(0) as u32,
        }];
    }

    let mut layout = Vec::with_capacity(building.columns as usize);
    if building.has_basements() {
        layout.push(ColumnSpec {
            id: 1,
            name: column_name(0),
            min_floor: -basements,
            max_floor: LOBBY,
            served_floors: basements as u32 + 1,
        });
    }

    let shared = building.above_ground_columns() as i32;
    let floors_per_column = above / shared;
    let remainder = above % shared;
    let mut min_floor = LOBBY;
    for block in 0..shared {
        let mut max_floor = min_floor + floors_per_column - 1;
        // every block but the first adds the lobby to its count
        let mut served_floors = if block == 0 { floors_per_column } else { floors_per_column + 1 };
        if block == shared - 1 {
            max_floor += remainder;
            served_floors += remainder;
        }
        let index = layout.len() as u32;
        layout.push(ColumnSpec {
            id: index + 1,
            name: column_name(index),
            min_floor,
            max_floor,
            served_floors: served_floors as u32,
        });
        min_floor = max_floor + 1;
    }
    layout
}
