use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use sea_battle::{
    random_fleet, Board, BoardError, Coord, Mark, PlacementConfig, Ship, ShotResult, BOARD_SIZE,
};

fn marks(board: &Board) -> Vec<Mark> {
    (0..BOARD_SIZE * BOARD_SIZE)
        .map(|i| board.cell_at(Coord::new(i % BOARD_SIZE, i / BOARD_SIZE)).unwrap())
        .collect()
}

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = random_fleet(&mut rng, PlacementConfig::default()).unwrap();
    let shots = rng.random_range(0..BOARD_SIZE * 2);
    for _ in 0..shots {
        let x = rng.random_range(0..BOARD_SIZE);
        let y = rng.random_range(0..BOARD_SIZE);
        let _ = board.fire_at(Coord::new(x, y));
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn straight_short_ships_construct(
        x in 0..BOARD_SIZE,
        y in 0..BOARD_SIZE,
        len in 1usize..=3,
        vertical in any::<bool>(),
    ) {
        let end = if vertical {
            Coord::new(x, y + len - 1)
        } else {
            Coord::new(x + len - 1, y)
        };
        let ship = Ship::new(Coord::new(x, y), Some(end)).unwrap();
        prop_assert_eq!(ship.length(), len);
        prop_assert_eq!(ship.occupied_cells().count(), len);
        prop_assert_eq!(ship.lives(), len);
    }

    #[test]
    fn bent_or_long_ships_rejected(
        x1 in 0..10usize, y1 in 0..10usize,
        x2 in 0..10usize, y2 in 0..10usize,
    ) {
        let bent = x1 != x2 && y1 != y2;
        let long = x1.abs_diff(x2).max(y1.abs_diff(y2)) >= 3;
        prop_assume!(bent || long);
        let err = Ship::new(Coord::new(x1, y1), Some(Coord::new(x2, y2))).unwrap_err();
        prop_assert_eq!(err, BoardError::InvalidShipShape);
    }

    #[test]
    fn rejected_placement_leaves_board_unchanged(
        seed in any::<u64>(),
        x in 0..BOARD_SIZE,
        y in 0..BOARD_SIZE,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        let first = Ship::new(Coord::new(x, y), None).unwrap();
        board.place_ship(first).unwrap();
        let before = marks(&board);

        // any cell of the surrounding ring is adjacent
        let ring: Vec<Coord> = Coord::new(x, y).ring().collect();
        let neighbour = ring[rng.random_range(0..ring.len())];
        let err = board.place_ship(Ship::new(neighbour, None).unwrap()).unwrap_err();
        prop_assert_eq!(err, BoardError::AdjacentShipConflict);
        prop_assert_eq!(marks(&board), before);
        prop_assert_eq!(board.ship_count(), 1);
    }

    #[test]
    fn second_shot_is_rejected(
        seed in any::<u64>(),
        x in 0..BOARD_SIZE,
        y in 0..BOARD_SIZE,
    ) {
        let mut board = random_board(seed);
        let target = Coord::new(x, y);
        let first = board.fire_at(target);
        let after_first = marks(&board);
        let lives = board.total_lives();
        let second = board.fire_at(target);
        prop_assert_eq!(second, Err(BoardError::AlreadyFired));
        prop_assert_eq!(marks(&board), after_first);
        prop_assert_eq!(board.total_lives(), lives);
        // the first shot either landed now or had already been taken
        prop_assert!(first.is_ok() || first == Err(BoardError::AlreadyFired));
    }

    #[test]
    fn sinking_costs_exactly_the_ship_length(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let afloat = board
            .ships()
            .find(|(_, s)| !s.is_sunk())
            .map(|(id, s)| (id, *s));
        prop_assume!(afloat.is_some());
        let (id, ship) = afloat.unwrap();

        let start = board.total_lives();
        let mut last = None;
        for cell in ship.occupied_cells() {
            match board.fire_at(cell) {
                Ok(r) => last = Some(r),
                Err(e) => prop_assert_eq!(e, BoardError::AlreadyFired),
            }
        }
        prop_assert_eq!(start - board.total_lives(), ship.lives());
        prop_assert_eq!(last, Some(ShotResult::Sunk(id)));
    }

    #[test]
    fn clearing_contour_keeps_lives(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let lives = board.total_lives();
        board.clear_contours();
        prop_assert_eq!(board.total_lives(), lives);
        prop_assert!(!marks(&board).contains(&Mark::Contour));
    }
}
