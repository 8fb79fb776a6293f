#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::{
    init_logging, random_board, ui, Combatant, ConsoleMoveSource, Game, MoveSource,
    RandomMoveSource, StandardBoard, BOARD_SIZE, SHIPS,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Sea battle against the computer on a 6×6 grid.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Let the computer play both sides")]
    auto: bool,
    #[arg(long, help = "Show the computer's ships")]
    reveal: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let player_board: StandardBoard = random_board(&mut rng, &SHIPS)?;
    let mut computer_board: StandardBoard = random_board(&mut rng, &SHIPS)?;
    computer_board.set_hidden(!cli.reveal);

    let player_source: Box<dyn MoveSource<BOARD_SIZE>> = if cli.auto {
        Box::new(RandomMoveSource::new())
    } else {
        Box::new(ConsoleMoveSource::stdio())
    };
    let mut game = Game::new(
        Combatant::new("Player", player_board, player_source),
        Combatant::new("Computer", computer_board, Box::new(RandomMoveSource::new())),
    );

    ui::print_greeting();
    ui::print_boards(&game);
    println!("\n{} moves first.", game.combatant(sea_battle::Side::Player1).name());

    let winner = game.run(&mut rng, |game, report| {
        println!("{}", ui::describe_turn(game, report));
        if let sea_battle::GameStatus::AwaitingMove(next) = report.status {
            ui::print_boards(game);
            println!("\n{} to move.", game.combatant(next).name());
        }
    })?;

    ui::print_boards(&game);
    ui::print_winner(&game, winner);
    Ok(())
}
