//! Sea-ORM entities for the crossflow relational schema.
//!
//! The schema is a strict hierarchy: a study owns its observed directions,
//! a direction owns its movements, and a movement owns its per-vehicle-class
//! counts. The three `*_type` tables are vocabulary dimensions seeded once
//! per load run and referenced only by surrogate id afterwards.

pub mod direction_movement;
pub mod direction_type;
pub mod movement_type;
pub mod movement_vehicle_class;
pub mod prelude;
pub mod study;
pub mod study_direction;
pub mod vehicle_type;
