use crate::model::vocab::{Direction, Movement, VehicleClass};

/// Parsed contents of one volume breakdown grid.
///
/// The hierarchy mirrors the relational fact tables: direction blocks own
/// movement columns, which own per-vehicle-class counts. A direction block
/// with no movement columns is preserved; it still yields a study-direction
/// row on load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VolumeBreakdown {
    pub directions: Vec<DirectionBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectionBlock {
    pub direction: Direction,
    pub movements: Vec<MovementColumn>,
}

impl DirectionBlock {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            movements: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovementColumn {
    pub movement: Movement,
    /// Non-missing counts only; a blank cell is omitted, a zero is kept.
    pub counts: Vec<(VehicleClass, i32)>,
}
