#[cfg(feature = "std")]
mod ui_tests {
    use seabattle::ui::{cell_symbol, outcome_message, render_board, ConsoleReporter};
    use seabattle::{
        AiPlayer, Board, BoardError, CellState, Coordinate, Game, GameEvent, Orientation, Ship,
        ShotOutcome, Side,
    };

    fn two_computer_game() -> Game {
        let mut user_board = Board::new(3).unwrap();
        user_board
            .place_ship(Ship::new(Coordinate::new(0, 0), 1, Orientation::Horizontal).unwrap())
            .unwrap();
        let mut computer_board = Board::new(3).unwrap();
        computer_board
            .place_ship(Ship::new(Coordinate::new(2, 2), 1, Orientation::Horizontal).unwrap())
            .unwrap();
        Game::new(
            Box::new(AiPlayer::named("Computer 1")),
            user_board,
            Box::new(AiPlayer::named("Computer 2")),
            computer_board,
        )
    }

    #[test]
    fn test_render_small_board() {
        let mut board = Board::new(3).unwrap();
        board
            .place_ship(Ship::new(Coordinate::new(0, 0), 1, Orientation::Horizontal).unwrap())
            .unwrap();
        board
            .place_ship(Ship::new(Coordinate::new(2, 2), 1, Orientation::Horizontal).unwrap())
            .unwrap();
        board.shoot(Coordinate::new(2, 0)).unwrap();
        board.shoot(Coordinate::new(0, 0)).unwrap();

        let expected = " | 1 | 2 | 3 |\n1 | X | . | O |\n2 | . | . | O |\n3 | . | O | ■ |";
        assert_eq!(render_board(&board.snapshot()), expected);

        board.set_hidden(true);
        let hidden = " | 1 | 2 | 3 |\n1 | X | . | O |\n2 | . | . | O |\n3 | . | O | O |";
        assert_eq!(render_board(&board.snapshot()), hidden);
    }

    #[test]
    fn test_render_pads_two_digit_sizes() {
        let board = Board::new(10).unwrap();
        let text = render_board(&board.snapshot());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("   |  1 |"));
        assert!(lines[0].ends_with(" 10 |"));
        assert!(lines[10].starts_with("10 |  O |"));
    }

    #[test]
    fn test_symbols_and_messages() {
        assert_eq!(cell_symbol(CellState::Empty), 'O');
        assert_eq!(cell_symbol(CellState::Hit), 'X');
        assert_eq!(cell_symbol(CellState::Contour), '.');
        assert_eq!(outcome_message(ShotOutcome::Destroyed), "Ship destroyed!");
        assert_eq!(outcome_message(ShotOutcome::Miss), "Miss!");
    }

    #[test]
    fn test_spectator_names_both_players() {
        let game = two_computer_game();
        let reporter = ConsoleReporter::spectator(&game);

        let turn = reporter.describe(&GameEvent::TurnStarted {
            side: Side::User,
            turn: 0,
        });
        assert_eq!(turn[1], "Computer 1's move!");

        let shot = reporter.describe(&GameEvent::ShotFired {
            side: Side::User,
            target: Coordinate::new(2, 2),
            outcome: ShotOutcome::Destroyed,
        });
        assert_eq!(shot, vec!["Computer 1 fires at: 3 3", "Ship destroyed!"]);

        let rejected = reporter.describe(&GameEvent::ShotRejected {
            side: Side::User,
            target: Coordinate::new(2, 2),
            reason: BoardError::AlreadyTargeted(Coordinate::new(2, 2)),
        });
        assert!(rejected.is_empty());

        let over = reporter.describe(&GameEvent::GameOver {
            winner: Side::Computer,
        });
        assert_eq!(over[1], "Computer 2 wins!");
    }

    #[test]
    fn test_interactive_addresses_the_user() {
        let game = two_computer_game();
        let reporter = ConsoleReporter::interactive(&game);

        let turn = reporter.describe(&GameEvent::TurnStarted {
            side: Side::User,
            turn: 0,
        });
        assert_eq!(turn[1], "Your move!");
        let turn = reporter.describe(&GameEvent::TurnStarted {
            side: Side::Computer,
            turn: 1,
        });
        assert_eq!(turn[1], "Computer 2's move!");

        // the user's own shots are not echoed, only their result
        let shot = reporter.describe(&GameEvent::ShotFired {
            side: Side::User,
            target: Coordinate::new(1, 1),
            outcome: ShotOutcome::Miss,
        });
        assert_eq!(shot, vec!["Miss!"]);

        let rejected = reporter.describe(&GameEvent::ShotRejected {
            side: Side::User,
            target: Coordinate::new(6, 0),
            reason: BoardError::OutOfBounds(Coordinate::new(6, 0)),
        });
        assert_eq!(rejected, vec!["You are trying to shoot off the board!"]);
        let ignored = reporter.describe(&GameEvent::ShotRejected {
            side: Side::Computer,
            target: Coordinate::new(0, 0),
            reason: BoardError::AlreadyTargeted(Coordinate::new(0, 0)),
        });
        assert!(ignored.is_empty());

        let over = reporter.describe(&GameEvent::GameOver { winner: Side::User });
        assert_eq!(over[1], "You win!");
    }
}
