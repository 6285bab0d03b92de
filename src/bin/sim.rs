use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{random_board, AiPlayer, Game, GameConfig, GameEvent, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    // seed1 lays out the user fleet, seed2 the computer fleet; shots draw
    // from a generator split off the first.
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let config = GameConfig::default();

    let user_board = random_board(&mut rng1, &config)?;
    let computer_board = random_board(&mut rng2, &config)?;
    let mut play_rng = SmallRng::from_rng(&mut rng1);

    let mut game = Game::new(
        Box::new(AiPlayer::named("Computer 1")),
        user_board,
        Box::new(AiPlayer::named("Computer 2")),
        computer_board,
    );
    let mut events: Vec<GameEvent> = Vec::new();
    let winner = game.run(&mut play_rng, &mut events)?;

    let rejected = events
        .iter()
        .filter(|e| matches!(e, GameEvent::ShotRejected { .. }))
        .count();

    let result = json!({
        "seeds": [seed1, seed2],
        "winner": winner,
        "turns": game.turn(),
        "rejected_targets": rejected,
        "user": {
            "shots": game.shots(Side::User),
            "ships_lost": game.board(Side::User).destroyed_count(),
            "board": game.board(Side::User).snapshot(),
        },
        "computer": {
            "shots": game.shots(Side::Computer),
            "ships_lost": game.board(Side::Computer).destroyed_count(),
            "board": game.board(Side::Computer).snapshot(),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
