use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    random_fleet, Board, BoardError, Coord, GameEngine, GameStatus, PlacementConfig, Ship,
    ShotResult, Side, TargetingEngine,
};

fn fleets(seed: u64) -> (Board, Board, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let player = random_fleet(&mut rng, PlacementConfig::default()).unwrap();
    let computer = random_fleet(&mut rng, PlacementConfig::default()).unwrap();
    (player, computer, rng)
}

/// A cell of `board` that holds no ship.
fn water(board: &Board) -> Coord {
    (0..36)
        .map(|i| Coord::new(i % 6, i / 6))
        .find(|c| board.ships().all(|(_, s)| !s.contains(*c)))
        .unwrap()
}

#[test]
fn test_incomplete_fleet_rejected() {
    let (player, _, _) = fleets(1);
    let mut partial = Board::new();
    partial.place_ship(Ship::new(Coord::new(0, 0), None).unwrap()).unwrap();
    assert_eq!(
        GameEngine::new(player, partial).unwrap_err(),
        BoardError::FleetIncomplete
    );
}

#[test]
fn test_turn_passes_only_on_miss() {
    let (player, computer, _) = fleets(2);
    let target_ship = *computer.ship(0).unwrap();
    let miss = water(&computer);
    let mut game = GameEngine::new(player, computer).unwrap();
    assert_eq!(game.turn(), Side::Player);

    let first = target_ship.begin();
    let result = game.fire(Side::Player, first).unwrap();
    assert_ne!(result, ShotResult::Miss);
    assert_eq!(game.turn(), Side::Player);

    // repeated shot fails and keeps the turn
    assert_eq!(
        game.fire(Side::Player, first).unwrap_err(),
        BoardError::AlreadyFired
    );
    assert_eq!(game.turn(), Side::Player);
    assert_eq!(game.shots_fired(Side::Player), 1);

    assert_eq!(game.fire(Side::Player, miss).unwrap(), ShotResult::Miss);
    assert_eq!(game.turn(), Side::Computer);
    assert_eq!(
        game.fire(Side::Player, miss).unwrap_err(),
        BoardError::NotYourTurn
    );
}

#[test]
fn test_player_wins_by_sinking_everything() {
    let (player, computer, _) = fleets(3);
    let targets: Vec<Coord> = computer
        .ships()
        .flat_map(|(_, s)| s.occupied_cells().collect::<Vec<_>>())
        .collect();
    let mut game = GameEngine::new(player, computer).unwrap();
    for t in targets {
        assert_ne!(game.fire(Side::Player, t).unwrap(), ShotResult::Miss);
    }
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.board(Side::Computer).total_lives(), 0);
    assert_eq!(
        game.fire(Side::Player, Coord::new(0, 0)).unwrap_err(),
        BoardError::GameOver
    );
}

#[test]
fn test_engine_vs_engine_game_finishes() {
    let (player, computer, mut rng) = fleets(123);
    let mut game = GameEngine::new(player, computer).unwrap();
    let mut engines = [TargetingEngine::new(), TargetingEngine::new()];

    let mut volleys = 0;
    while game.status() == GameStatus::InProgress {
        volleys += 1;
        if volleys > 10_000 {
            panic!("game took too many volleys");
        }
        let side = game.turn();
        let engine = match side {
            Side::Player => &mut engines[0],
            Side::Computer => &mut engines[1],
        };
        let turn = game.volley(engine, &mut rng).unwrap();
        if !turn.continues {
            assert_eq!(game.turn(), side.opponent());
        }
    }
    assert!(matches!(game.status(), GameStatus::Won | GameStatus::Lost));
    assert!(game.shots_fired(Side::Player) <= 36);
    assert!(game.shots_fired(Side::Computer) <= 36);
}
