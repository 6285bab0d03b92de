use std::collections::VecDeque;
use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    AiPlayer, Board, BoardError, Coordinate, Game, GameConfig, GameError, GameEvent, GamePhase,
    HumanPlayer, Orientation, Player, Ship, ShotOutcome, Side,
};

/// Plays a fixed list of moves and fails once they run out.
struct ScriptedPlayer {
    moves: VecDeque<Coordinate>,
}

impl ScriptedPlayer {
    fn boxed(moves: &[(i32, i32)]) -> Box<dyn Player> {
        Box::new(Self {
            moves: moves.iter().map(|&m| Coordinate::from(m)).collect(),
        })
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        "Script"
    }

    fn choose_target(&mut self, _rng: &mut SmallRng, _enemy: &Board) -> anyhow::Result<Coordinate> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }
}

fn board_with(ships: &[(i32, i32, usize, Orientation)]) -> Board {
    let mut board = Board::new(6).unwrap();
    for &(r, c, len, o) in ships {
        board
            .place_ship(Ship::new(Coordinate::new(r, c), len, o).unwrap())
            .unwrap();
    }
    board
}

fn at(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn test_hit_grants_follow_up_and_rejections_retry() {
    let user_board = board_with(&[(5, 5, 1, Orientation::Horizontal)]);
    let computer_board = board_with(&[(0, 0, 2, Orientation::Horizontal)]);
    let mut game = Game::new(
        ScriptedPlayer::boxed(&[(0, 0), (0, 0), (9, 9), (0, 1)]),
        user_board,
        ScriptedPlayer::boxed(&[]),
        computer_board,
    );
    let mut rng = SmallRng::seed_from_u64(0);
    let mut events: Vec<GameEvent> = Vec::new();

    assert_eq!(game.phase(), GamePhase::UserTurn);
    assert_eq!(game.step(&mut rng, &mut events).unwrap(), GamePhase::UserTurn);
    assert_eq!(game.step(&mut rng, &mut events).unwrap(), GamePhase::Over(Side::User));

    assert_eq!(
        events,
        vec![
            GameEvent::TurnStarted { side: Side::User, turn: 0 },
            GameEvent::ShotFired { side: Side::User, target: at(0, 0), outcome: ShotOutcome::Hit },
            GameEvent::TurnStarted { side: Side::User, turn: 0 },
            GameEvent::ShotRejected {
                side: Side::User,
                target: at(0, 0),
                reason: BoardError::AlreadyTargeted(at(0, 0)),
            },
            GameEvent::ShotRejected {
                side: Side::User,
                target: at(9, 9),
                reason: BoardError::OutOfBounds(at(9, 9)),
            },
            GameEvent::ShotFired {
                side: Side::User,
                target: at(0, 1),
                outcome: ShotOutcome::Destroyed,
            },
            GameEvent::GameOver { winner: Side::User },
        ]
    );
    assert_eq!(game.shots(Side::User), 2);
    assert_eq!(game.winner(), Some(Side::User));
    assert!(matches!(
        game.step(&mut rng, &mut ()),
        Err(GameError::GameOver(Side::User))
    ));
}

#[test]
fn test_miss_passes_turn_and_computer_can_win() {
    let user_board = board_with(&[(0, 0, 1, Orientation::Vertical)]);
    let computer_board = board_with(&[(3, 3, 1, Orientation::Vertical)]);
    let mut game = Game::new(
        ScriptedPlayer::boxed(&[(5, 5)]),
        user_board,
        ScriptedPlayer::boxed(&[(0, 0)]),
        computer_board,
    );
    let mut rng = SmallRng::seed_from_u64(0);

    assert_eq!(game.step(&mut rng, &mut ()).unwrap(), GamePhase::ComputerTurn);
    assert_eq!(game.active_side(), Side::Computer);
    assert_eq!(game.turn(), 1);
    let winner = game.run(&mut rng, &mut ()).unwrap();
    assert_eq!(winner, Side::Computer);
    assert!(game.board(Side::User).is_defeated());
    assert!(!game.board(Side::Computer).is_defeated());
}

#[test]
fn test_destroying_a_ship_passes_turn() {
    let user_board = board_with(&[(5, 5, 1, Orientation::Vertical)]);
    let computer_board = board_with(&[
        (0, 0, 1, Orientation::Vertical),
        (3, 3, 1, Orientation::Vertical),
    ]);
    let mut game = Game::new(
        ScriptedPlayer::boxed(&[(0, 0)]),
        user_board,
        ScriptedPlayer::boxed(&[(2, 2)]),
        computer_board,
    );
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(game.step(&mut rng, &mut ()).unwrap(), GamePhase::ComputerTurn);
    assert_eq!(game.step(&mut rng, &mut ()).unwrap(), GamePhase::UserTurn);
}

#[test]
fn test_player_failure_stops_game() {
    let mut game = Game::new(
        ScriptedPlayer::boxed(&[]),
        board_with(&[(0, 0, 1, Orientation::Vertical)]),
        ScriptedPlayer::boxed(&[]),
        board_with(&[(0, 0, 1, Orientation::Vertical)]),
    );
    let mut rng = SmallRng::seed_from_u64(0);
    let err = game.run(&mut rng, &mut ()).unwrap_err();
    assert!(matches!(err, GameError::Player(_)));
    assert_eq!(game.winner(), None);
}

#[test]
fn test_empty_fleet_is_already_lost() {
    let mut game = Game::new(
        ScriptedPlayer::boxed(&[]),
        board_with(&[(0, 0, 1, Orientation::Vertical)]),
        ScriptedPlayer::boxed(&[]),
        board_with(&[]),
    );
    assert_eq!(game.phase(), GamePhase::Over(Side::User));
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(game.run(&mut rng, &mut ()).unwrap(), Side::User);
}

#[test]
fn test_winner_is_opponent_of_defeated_side() {
    let game = Game::new(
        ScriptedPlayer::boxed(&[]),
        board_with(&[]),
        ScriptedPlayer::boxed(&[]),
        board_with(&[(0, 0, 1, Orientation::Vertical)]),
    );
    assert_eq!(game.winner(), Some(Side::Computer));
    assert_eq!(game.phase(), GamePhase::Over(Side::User.opponent()));

    // with both fleets gone the computer's board is checked first
    let game = Game::new(
        ScriptedPlayer::boxed(&[]),
        board_with(&[]),
        ScriptedPlayer::boxed(&[]),
        board_with(&[]),
    );
    assert_eq!(game.winner(), Some(Side::User));
}

#[test]
fn test_setup_hides_computer_board() {
    let mut rng = SmallRng::seed_from_u64(5);
    let game = Game::setup(
        &mut rng,
        &GameConfig::default(),
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
    )
    .unwrap();
    assert!(!game.board(Side::User).is_hidden());
    assert!(game.board(Side::Computer).is_hidden());
    assert_eq!(game.player_name(Side::Computer), "Computer");
    assert_eq!(game.phase(), GamePhase::UserTurn);
}

#[test]
fn test_ai_vs_ai_game() {
    for seed in [1u64, 2, 3, 123] {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::setup(
            &mut rng,
            &GameConfig::default(),
            Box::new(AiPlayer::new()),
            Box::new(AiPlayer::new()),
        )
        .unwrap();
        let mut events: Vec<GameEvent> = Vec::new();
        let winner = game.run(&mut rng, &mut events).unwrap();

        let loser = winner.opponent();
        assert!(game.board(loser).is_defeated());
        assert!(!game.board(winner).is_defeated());
        assert_eq!(events.last(), Some(&GameEvent::GameOver { winner }));

        // a turn after a plain hit belongs to the same side; otherwise it flips
        let mut last_shot: Option<(Side, ShotOutcome)> = None;
        for event in &events {
            match event {
                GameEvent::TurnStarted { side, turn } => {
                    if let Some((prev, outcome)) = last_shot {
                        let expected = if outcome.grants_follow_up() { prev } else { prev.opponent() };
                        assert_eq!(*side, expected);
                    }
                    assert_eq!(*side == Side::User, turn % 2 == 0);
                }
                GameEvent::ShotFired { side, outcome, .. } => last_shot = Some((*side, *outcome)),
                _ => {}
            }
        }

        let fired = events
            .iter()
            .filter(|e| matches!(e, GameEvent::ShotFired { .. }))
            .count() as u32;
        assert_eq!(fired, game.shots(Side::User) + game.shots(Side::Computer));
    }
}

#[test]
fn test_human_player_over_text_input() {
    let user_board = board_with(&[(5, 5, 1, Orientation::Vertical)]);
    let computer_board = board_with(&[(1, 1, 2, Orientation::Vertical)]);
    let input = Cursor::new(&b"2 2\n2 2\nthree 2\n3 2\n"[..]);
    let mut game = Game::new(
        Box::new(HumanPlayer::new(input, std::io::sink())),
        user_board,
        ScriptedPlayer::boxed(&[]),
        computer_board,
    );
    let mut rng = SmallRng::seed_from_u64(0);
    let mut events: Vec<GameEvent> = Vec::new();
    assert_eq!(game.run(&mut rng, &mut events).unwrap(), Side::User);
    let rejected = events
        .iter()
        .filter(|e| matches!(e, GameEvent::ShotRejected { .. }))
        .count();
    assert_eq!(rejected, 1);
}
