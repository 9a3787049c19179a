use skirmish::{GameError, Orientation, Ship, ShipType};

#[test]
fn test_new_and_mask() -> Result<(), GameError> {
    const N: usize = 5;
    let def = ShipType::new("Test", 3);
    let ship = Ship::<u32, N>::new(def, Orientation::Horizontal, 2, 1)?;
    for c in 1..4 {
        assert!(ship.mask().get(2, c)?);
    }
    assert_eq!(ship.mask().count_ones(), 3);
    assert_eq!(ship.origin(), (2, 1));
    Ok(())
}

#[test]
fn test_contains_and_cells() -> Result<(), GameError> {
    const N: usize = 5;
    let def = ShipType::new("Test", 4);
    let ship = Ship::<u32, N>::new(def, Orientation::Vertical, 0, 0)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    for (r, c) in cells {
        assert!(ship.contains(r, c));
    }
    assert!(!ship.contains(4, 0));
    Ok(())
}

#[test]
fn test_out_of_bounds_placement() {
    const N: usize = 5;
    let def = ShipType::new("Test", 3);
    for (orientation, row, col) in [
        (Orientation::Horizontal, 0, 3),
        (Orientation::Vertical, 3, 0),
        (Orientation::Horizontal, 5, 0),
        (Orientation::Vertical, 0, usize::MAX),
    ] {
        assert_eq!(
            Ship::<u32, N>::new(def, orientation, row, col).unwrap_err(),
            GameError::ShipOutOfBounds
        );
    }
}

#[test]
fn test_register_hit_and_sunk() -> Result<(), GameError> {
    const N: usize = 4;
    let def = ShipType::new("Test", 2);
    let mut ship = Ship::<u32, N>::new(def, Orientation::Horizontal, 1, 1)?;
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(1, 1));
    // same segment twice still counts once
    assert!(ship.register_hit(1, 1));
    assert_eq!(ship.hits(), 1);
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(1, 2));
    assert!(ship.is_sunk());
    assert!(!ship.register_hit(0, 0));
    assert_eq!(ship.hits(), 2);
    Ok(())
}
