use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::SmallRng;

use seabattle::ui::{print_game_view, print_greeting, ConsoleReporter};
use seabattle::{
    init_logging, random_board, rng_from_seed, AiPlayer, Game, GameConfig, HumanPlayer, Side,
    BOARD_SIZE, MAX_BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Debug)]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        default_value_t = BOARD_SIZE,
        value_parser = parse_size,
        help = "Board side length"
    )]
    size: usize,
}

impl Default for GameArgs {
    fn default() -> Self {
        Self {
            seed: None,
            size: BOARD_SIZE,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer (default).
    Play(GameArgs),
    /// Watch the computer play against itself with both fleets visible.
    Watch(GameArgs),
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (1..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!("size must be between 1 and {}", MAX_BOARD_SIZE))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play(GameArgs::default())) {
        Commands::Play(args) => {
            init_logging(LevelFilter::Warn);
            let mut rng = rng_from_seed(args.seed);
            let config = GameConfig::with_board_size(args.size);
            let mut game = Game::setup(
                &mut rng,
                &config,
                Box::new(HumanPlayer::stdio()),
                Box::new(AiPlayer::new()),
            )?;
            print_greeting();
            let mut reporter = ConsoleReporter::interactive(&game);
            play(&mut game, &mut rng, &mut reporter)?;
        }
        Commands::Watch(args) => {
            init_logging(LevelFilter::Info);
            if let Some(s) = args.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = rng_from_seed(args.seed);
            let config = GameConfig::with_board_size(args.size);
            let user_board = random_board(&mut rng, &config)?;
            let computer_board = random_board(&mut rng, &config)?;
            let mut game = Game::new(
                Box::new(AiPlayer::named("Computer 1")),
                user_board,
                Box::new(AiPlayer::named("Computer 2")),
                computer_board,
            );
            let mut reporter = ConsoleReporter::spectator(&game);
            play(&mut game, &mut rng, &mut reporter)?;
            println!(
                "Shots fired: {} {}, {} {}",
                game.player_name(Side::User),
                game.shots(Side::User),
                game.player_name(Side::Computer),
                game.shots(Side::Computer)
            );
        }
    }
    Ok(())
}

fn play(game: &mut Game, rng: &mut SmallRng, reporter: &mut ConsoleReporter) -> anyhow::Result<()> {
    while game.winner().is_none() {
        print_game_view(game);
        game.step(rng, reporter)?;
    }
    print_game_view(game);
    Ok(())
}
