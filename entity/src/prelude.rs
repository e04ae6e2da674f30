pub use super::direction_movement::Entity as DirectionMovement;
pub use super::direction_type::Entity as DirectionType;
pub use super::movement_type::Entity as MovementType;
pub use super::movement_vehicle_class::Entity as MovementVehicleClass;
pub use super::study::Entity as Study;
pub use super::study_direction::Entity as StudyDirection;
pub use super::vehicle_type::Entity as VehicleType;
