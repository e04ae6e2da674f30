//! Data access layer repositories.
//!
//! Repositories wrap the insert and lookup statements for each relation.
//! They are generic over [`sea_orm::ConnectionTrait`] so the same code runs
//! against a plain connection (vocabulary seeding) or a per-file transaction
//! (study and fact inserts).

pub mod direction_movement;
pub mod movement_vehicle_class;
pub mod study;
pub mod study_direction;
pub mod vocabulary;
