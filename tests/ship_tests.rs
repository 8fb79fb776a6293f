use sea_battle::{BoardError, Coordinate, Orientation, ShipType, Vessel};

#[test]
fn test_cells_follow_orientation() {
    let def = ShipType::new("Cruiser", 3);
    let across = Vessel::new(def, Coordinate::new(1, 2), Orientation::Horizontal).unwrap();
    let cells: Vec<_> = across.cells().collect();
    assert_eq!(
        cells,
        vec![Coordinate::new(1, 2), Coordinate::new(1, 3), Coordinate::new(1, 4)]
    );

    let down = Vessel::new(def, Coordinate::new(1, 2), Orientation::Vertical).unwrap();
    let cells: Vec<_> = down.cells().collect();
    assert_eq!(
        cells,
        vec![Coordinate::new(1, 2), Coordinate::new(2, 2), Coordinate::new(3, 2)]
    );
}

#[test]
fn test_contains() {
    let def = ShipType::new("Destroyer", 2);
    let ship = Vessel::new(def, Coordinate::new(0, 0), Orientation::Vertical).unwrap();
    assert!(ship.contains(Coordinate::new(1, 0)));
    assert!(!ship.contains(Coordinate::new(0, 1)));
    assert!(!ship.contains(Coordinate::new(2, 0)));
}

#[test]
fn test_new_vessel_is_at_full_health() {
    let def = ShipType::new("Cruiser", 3);
    let ship = Vessel::new(def, Coordinate::new(4, 4), Orientation::Horizontal).unwrap();
    assert_eq!(ship.remaining_health(), 3);
    assert_eq!(ship.length(), 3);
    assert_eq!(ship.bow(), Coordinate::new(4, 4));
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert_eq!(ship.ship_type().name(), "Cruiser");
    assert!(!ship.is_destroyed());
}

#[test]
fn test_coordinate_equality_is_structural() {
    assert_eq!(Coordinate::new(3, 1), Coordinate::from((3, 1)));
    assert_ne!(Coordinate::new(3, 1), Coordinate::new(1, 3));
}

#[test]
fn test_length_beyond_grid_range_is_rejected() {
    let def = ShipType::new("Leviathan", usize::MAX);
    let err = Vessel::new(def, Coordinate::new(0, 0), Orientation::Horizontal).unwrap_err();
    assert_eq!(err, BoardError::InvalidLength);

    let def = ShipType::new("Raft", 0);
    assert!(Vessel::new(def, Coordinate::new(0, 0), Orientation::Vertical).is_err());
}
