#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;
    use std::time::Duration;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use sea_battle::cli::{
        coord_to_string, glyph, parse_coord, parse_ship, render_pair, simulate, Console,
        SessionConfig,
    };
    use sea_battle::{random_fleet, Board, Coord, GameStatus, Mark, PlacementConfig, Ship};

    fn quiet_config() -> SessionConfig {
        SessionConfig {
            delay: Duration::ZERO,
            ..SessionConfig::default()
        }
    }

    #[test]
    fn test_parse_coord_round_trip_corners() {
        assert_eq!(parse_coord("A1").unwrap(), Coord::new(0, 0));
        assert_eq!(parse_coord("f6").unwrap(), Coord::new(5, 5));
        assert_eq!(parse_coord(" c2 ").unwrap(), Coord::new(2, 1));
        assert_eq!(coord_to_string(Coord::new(5, 0)), "F1");
    }

    #[test]
    fn test_parse_coord_errors() {
        assert!(parse_coord("").is_err());
        assert!(parse_coord("A").is_err());
        assert!(parse_coord("G1").is_err());
        assert!(parse_coord("A0").is_err());
        assert!(parse_coord("A7").is_err());
        assert!(parse_coord("1A").is_err());
        assert!(parse_coord("Ax").is_err());
    }

    #[test]
    fn test_parse_ship_forms() {
        assert_eq!(
            parse_ship("A1 A3").unwrap(),
            (Coord::new(0, 0), Some(Coord::new(0, 2)))
        );
        assert_eq!(
            parse_ship("b2-c2").unwrap(),
            (Coord::new(1, 1), Some(Coord::new(2, 1)))
        );
        assert_eq!(parse_ship("E5").unwrap(), (Coord::new(4, 4), None));
        assert!(parse_ship("A1 A2 A3").is_err());
        assert!(parse_ship("   ").is_err());
    }

    #[test]
    fn test_hidden_board_conceals_ships() {
        assert_eq!(glyph(Mark::Ship, true), glyph(Mark::Empty, true));
        assert_ne!(glyph(Mark::Ship, false), glyph(Mark::Empty, false));
        assert_eq!(glyph(Mark::Burn, true), glyph(Mark::Burn, false));

        let mut rng = SmallRng::seed_from_u64(4);
        let mine = random_fleet(&mut rng, PlacementConfig::default()).unwrap();
        let theirs = random_fleet(&mut rng, PlacementConfig::default())
            .unwrap()
            .with_hidden(true);
        let text = render_pair("Mine", &mine, "Theirs", &theirs);
        let ship = glyph(Mark::Ship, false);
        for line in text.lines().skip(2).take(6) {
            let (_, right) = line.split_at(line.char_indices().nth(20).unwrap().0);
            assert!(!right.contains(ship), "hidden ship leaked: {}", line);
        }
        assert_eq!(text.matches(ship).count(), 11 + 1);
    }

    #[test]
    fn test_manual_setup_retries_until_valid() {
        let script = "\
help
A1 B2
A1 A3
A2
B1
C1 D1
C6 D6
F1
F3
F5
A6
";
        let mut console = Console::new(Cursor::new(script), Vec::new(), quiet_config());
        let mut rng = SmallRng::seed_from_u64(1);
        let board: Board = console.setup_fleet(&mut rng).unwrap();
        assert!(board.is_fleet_complete());
        assert_eq!(board.cell_at(Coord::new(1, 1)).unwrap(), Mark::Empty);
        assert_eq!(
            board.ship(0).copied(),
            Some(Ship::new(Coord::new(0, 0), Some(Coord::new(0, 2))).unwrap())
        );

        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("✗"));
        assert!(out.contains("too close"));
    }

    #[test]
    fn test_random_completes_partly_typed_fleet() {
        let script = "A1 A3\nC1 D1\nrandom\n";
        let mut console = Console::new(Cursor::new(script), Vec::new(), quiet_config());
        let mut rng = SmallRng::seed_from_u64(5);
        let board = console.setup_fleet(&mut rng).unwrap();
        assert!(board.is_fleet_complete());
        assert_eq!(
            board.ship(0).copied(),
            Some(Ship::new(Coord::new(0, 0), Some(Coord::new(0, 2))).unwrap())
        );
        assert_eq!(
            board.ship(1).copied(),
            Some(Ship::new(Coord::new(2, 0), Some(Coord::new(3, 0))).unwrap())
        );

        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("Remaining ships placed at random."));
    }

    #[test]
    fn test_setup_fails_when_input_runs_out() {
        let mut console = Console::new(Cursor::new("A1 A3\n"), Vec::new(), quiet_config());
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(console.setup_fleet(&mut rng).is_err());
    }

    #[test]
    fn test_scripted_round_against_computer() {
        // Random fleet for the player, then sweep the board row by row; the
        // game ends before the script does.
        let mut script = String::new();
        for y in 1..=6 {
            for x in ['A', 'B', 'C', 'D', 'E', 'F'] {
                script.push_str(&format!("{}{}\n", x, y));
            }
        }
        let config = SessionConfig {
            random_fleet: true,
            ..quiet_config()
        };
        let mut console = Console::new(Cursor::new(script), Vec::new(), config);
        let mut rng = SmallRng::seed_from_u64(99);
        let status = console.play_round(&mut rng).unwrap();
        assert!(matches!(status, GameStatus::Won | GameStatus::Lost));
    }

    #[test]
    fn test_simulation_report() {
        let mut rng = SmallRng::seed_from_u64(2024);
        let report = simulate(&mut rng, 10, PlacementConfig::default()).unwrap();
        assert_eq!(report.games, 10);
        assert_eq!(report.first_wins + report.second_wins, 10);
        assert!(report.average_shots() >= 11.0);
        assert!(report.average_shots() <= 36.0);
    }
}
