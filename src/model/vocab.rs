//! Closed vocabulary enumerations for the three dimension tables.
//!
//! The canonical name strings are an external contract: downstream query
//! consumers match against these exact literals, so they must stay stable.
//! Each enum carries an `ALL` array used both for seeding the dimension
//! tables and for exact-match classification of spreadsheet labels.

/// Eight-point compass approach directions, in compass order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Northbound,
    Northeastbound,
    Eastbound,
    Southeastbound,
    Southbound,
    Southwestbound,
    Westbound,
    Northwestbound,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Northbound,
        Direction::Northeastbound,
        Direction::Eastbound,
        Direction::Southeastbound,
        Direction::Southbound,
        Direction::Southwestbound,
        Direction::Westbound,
        Direction::Northwestbound,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Direction::Northbound => "Northbound",
            Direction::Northeastbound => "Northeastbound",
            Direction::Eastbound => "Eastbound",
            Direction::Southeastbound => "Southeastbound",
            Direction::Southbound => "Southbound",
            Direction::Southwestbound => "Southwestbound",
            Direction::Westbound => "Westbound",
            Direction::Northwestbound => "Northwestbound",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.name() == label)
    }
}

/// Turning, through, and pedestrian movements observed within a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    Peds,
    Right,
    PedsCw,
    HardRight,
    PedsCcw,
    BearRight,
    BearLeft,
    HardLeft,
    UTurn,
    Left,
    Thru,
}

impl Movement {
    pub const ALL: [Movement; 11] = [
        Movement::Peds,
        Movement::Right,
        Movement::PedsCw,
        Movement::HardRight,
        Movement::PedsCcw,
        Movement::BearRight,
        Movement::BearLeft,
        Movement::HardLeft,
        Movement::UTurn,
        Movement::Left,
        Movement::Thru,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Movement::Peds => "Peds",
            Movement::Right => "Right",
            Movement::PedsCw => "Peds CW",
            Movement::HardRight => "Hard right",
            Movement::PedsCcw => "Peds CCW",
            Movement::BearRight => "Bear right",
            Movement::BearLeft => "Bear left",
            Movement::HardLeft => "Hard left",
            Movement::UTurn => "U-Turn",
            Movement::Left => "Left",
            Movement::Thru => "Thru",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.name() == label)
    }

    /// Classify a movement-header cell.
    ///
    /// Returns `None` for subtotal/grand-total columns, which carry no
    /// movement-level facts. Any other unrecognized label (including a
    /// blank cell) is one of the source format's many through-movement
    /// variants and resolves to [`Movement::Thru`].
    pub fn classify(label: &str) -> Option<Self> {
        if let Some(movement) = Self::from_label(label) {
            return Some(movement);
        }

        if label.contains("Total") {
            return None;
        }

        Some(Movement::Thru)
    }
}

/// Vehicle/mode classification categories counted within a movement.
///
/// Includes both granular classes and the named aggregate categories some
/// source files use instead of the granular ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleClass {
    Cars,
    ArticulatedTrucksAndSingleUnitTrucks,
    Buses,
    Pedestrians,
    LightGoodsVehicles,
    Heavy,
    BicyclesOnRoad,
    BicyclesOnCrosswalk,
    Motorcycles,
    Lights,
    ArticulatedTrucks,
    BusesAndSingleUnitTrucks,
    Bicycles,
    SingleUnitTrucks,
    LightsAndMotorcycles,
    Vehicles,
    TramsAndRoadTrains,
    HeavyAndLights,
    EScooters,
    EScootersRoad,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 20] = [
        VehicleClass::Cars,
        VehicleClass::ArticulatedTrucksAndSingleUnitTrucks,
        VehicleClass::Buses,
        VehicleClass::Pedestrians,
        VehicleClass::LightGoodsVehicles,
        VehicleClass::Heavy,
        VehicleClass::BicyclesOnRoad,
        VehicleClass::BicyclesOnCrosswalk,
        VehicleClass::Motorcycles,
        VehicleClass::Lights,
        VehicleClass::ArticulatedTrucks,
        VehicleClass::BusesAndSingleUnitTrucks,
        VehicleClass::Bicycles,
        VehicleClass::SingleUnitTrucks,
        VehicleClass::LightsAndMotorcycles,
        VehicleClass::Vehicles,
        VehicleClass::TramsAndRoadTrains,
        VehicleClass::HeavyAndLights,
        VehicleClass::EScooters,
        VehicleClass::EScootersRoad,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VehicleClass::Cars => "Cars",
            VehicleClass::ArticulatedTrucksAndSingleUnitTrucks => {
                "Articulated Trucks and Single-Unit Trucks"
            }
            VehicleClass::Buses => "Buses",
            VehicleClass::Pedestrians => "Pedestrians",
            VehicleClass::LightGoodsVehicles => "Light Goods Vehicles",
            VehicleClass::Heavy => "Heavy",
            VehicleClass::BicyclesOnRoad => "Bicycles on Road",
            VehicleClass::BicyclesOnCrosswalk => "Bicycles on Crosswalk",
            VehicleClass::Motorcycles => "Motorcycles",
            VehicleClass::Lights => "Lights",
            VehicleClass::ArticulatedTrucks => "Articulated Trucks",
            VehicleClass::BusesAndSingleUnitTrucks => "Buses and Single-Unit Trucks",
            VehicleClass::Bicycles => "Bicycles",
            VehicleClass::SingleUnitTrucks => "Single-Unit Trucks",
            VehicleClass::LightsAndMotorcycles => "Lights and Motorcycles",
            VehicleClass::Vehicles => "Vehicles",
            VehicleClass::TramsAndRoadTrains => "Trams and Road Trains",
            VehicleClass::HeavyAndLights => "Heavy and Lights",
            VehicleClass::EScooters => "E-Scooters",
            VehicleClass::EScootersRoad => "e-Scooters (Road)",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.name() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_labels_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_label(direction.name()), Some(direction));
        }
        assert_eq!(Direction::from_label("North"), None);
    }

    #[test]
    fn movement_labels_round_trip() {
        for movement in Movement::ALL {
            assert_eq!(Movement::from_label(movement.name()), Some(movement));
        }
    }

    #[test]
    fn vehicle_class_labels_round_trip() {
        for vehicle in VehicleClass::ALL {
            assert_eq!(VehicleClass::from_label(vehicle.name()), Some(vehicle));
        }
        // Casing matters: the two e-scooter categories are distinct.
        assert_eq!(
            VehicleClass::from_label("e-Scooters (Road)"),
            Some(VehicleClass::EScootersRoad)
        );
        assert_eq!(
            VehicleClass::from_label("E-Scooters"),
            Some(VehicleClass::EScooters)
        );
    }

    #[test]
    fn classify_known_movement() {
        assert_eq!(Movement::classify("Left"), Some(Movement::Left));
        assert_eq!(Movement::classify("Peds CCW"), Some(Movement::PedsCcw));
    }

    #[test]
    fn classify_total_columns_are_skipped() {
        assert_eq!(Movement::classify("App Total"), None);
        assert_eq!(Movement::classify("Grand Total"), None);
        assert_eq!(Movement::classify("Int Total"), None);
    }

    #[test]
    fn classify_unknown_labels_fall_back_to_thru() {
        assert_eq!(Movement::classify("Through Traffic"), Some(Movement::Thru));
        assert_eq!(Movement::classify(""), Some(Movement::Thru));
    }
}
