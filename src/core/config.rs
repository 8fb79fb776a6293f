use super::ship::ShipType;

/// Side length of the square grid.
pub const BOARD_SIZE: usize = 6;

pub const NUM_SHIPS: usize = 7;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Cruiser", 3),
    ShipType::new("Destroyer", 2),
    ShipType::new("Destroyer", 2),
    ShipType::new("Patrol boat", 1),
    ShipType::new("Patrol boat", 1),
    ShipType::new("Patrol boat", 1),
    ShipType::new("Patrol boat", 1),
];

/// Placement attempts allowed for a whole fleet before the board is discarded.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Fresh boards tried before fleet placement gives up.
pub const MAX_BOARD_RESTARTS: usize = 1000;
