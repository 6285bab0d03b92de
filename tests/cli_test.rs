#[cfg(feature = "std")]
mod cli_tests {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use seabattle::{parse_move, Board, Coordinate, HumanPlayer, MoveParseError, Player};

    #[test]
    fn test_parse_move_converts_to_zero_based() {
        assert_eq!(parse_move("1 1"), Ok(Coordinate::new(0, 0)));
        assert_eq!(parse_move("  6\t3 \n"), Ok(Coordinate::new(5, 2)));
        // off-board values are left for the board to reject
        assert_eq!(parse_move("0 7"), Ok(Coordinate::new(-1, 6)));
    }

    #[test]
    fn test_parse_move_rejects_malformed_input() {
        assert_eq!(parse_move(""), Err(MoveParseError::WrongCount(0)));
        assert_eq!(parse_move("3"), Err(MoveParseError::WrongCount(1)));
        assert_eq!(parse_move("1 2 3"), Err(MoveParseError::WrongCount(3)));
        assert_eq!(
            parse_move("a 2"),
            Err(MoveParseError::NotANumber("a".to_string()))
        );
        assert_eq!(
            parse_move("-1 2"),
            Err(MoveParseError::NotANumber("-1".to_string()))
        );
        assert_eq!(
            parse_move("1 +2"),
            Err(MoveParseError::NotANumber("+2".to_string()))
        );
        assert!(parse_move("1 99999999999").is_err());
    }

    #[test]
    fn test_human_player_reprompts_until_valid() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let enemy = Board::new(6).unwrap();
        let input = Cursor::new(&b"hello\n4 x\n4 5\n"[..]);
        let mut player = HumanPlayer::new(input, Vec::new());

        let target = player.choose_target(&mut rng, &enemy).unwrap();
        assert_eq!(target, Coordinate::new(3, 4));

        let output = String::from_utf8(player.into_output()).unwrap();
        assert_eq!(output.matches("Your move: ").count(), 3);
        assert!(output.contains("Enter two coordinates!"));
        assert!(output.contains("Enter numbers!"));
    }

    #[test]
    fn test_human_player_fails_on_closed_input() {
        let mut rng = SmallRng::seed_from_u64(1);
        let enemy = Board::new(6).unwrap();
        let mut player = HumanPlayer::new(Cursor::new(&b"oops\n"[..]), std::io::sink());
        assert!(player.choose_target(&mut rng, &enemy).is_err());
        assert_eq!(player.name(), "User");
    }
}
