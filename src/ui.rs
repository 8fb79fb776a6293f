#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::core::{Board, Cell, ShotOutcome};
use crate::game::{Game, Side, TurnReport};

fn glyph(cell: Cell, hidden: bool) -> char {
    match cell {
        Cell::Empty => 'O',
        Cell::Occupied if hidden => 'O',
        Cell::Occupied => '■',
        Cell::Hit => 'X',
        Cell::Miss => '·',
    }
}

/// Render a board as a grid with 1-indexed row and column labels.
///
/// Vessels are drawn only when the board is not hidden.
pub fn render_board<const N: usize>(board: &Board<N>) -> String {
    let mut out = String::new();
    out.push_str("    │");
    for c in 0..N {
        let _ = write!(out, " {} │", c + 1);
    }
    out.push('\n');
    out.push_str("────┼");
    for _ in 0..N {
        out.push_str("───┼");
    }
    out.push('\n');
    for (r, row) in board.cells().iter().enumerate() {
        let _ = write!(out, " {:>2} │", r + 1);
        for &cell in row {
            let _ = write!(out, " {} │", glyph(cell, board.is_hidden()));
        }
        out.push('\n');
    }
    out
}

/// Print both boards, the human's first.
pub fn print_boards<const N: usize>(game: &Game<N>) {
    for side in [Side::Player1, Side::Player2] {
        let combatant = game.combatant(side);
        std::println!("{}", "─".repeat(24));
        std::println!(
            "{}'s board ({} of {} ships destroyed):",
            combatant.name(),
            combatant.board().destroyed_count(),
            combatant.board().vessel_count()
        );
        std::print!("{}", render_board(combatant.board()));
    }
}

/// Describe one shot for the log of play.
pub fn describe_turn<const N: usize>(game: &Game<N>, report: &TurnReport) -> String {
    let mover = game.combatant(report.mover);
    let mut out = String::new();
    if !mover.is_interactive() {
        let _ = writeln!(out, "{} fires at {}", mover.name(), report.target);
    }
    match report.outcome {
        ShotOutcome::Miss => out.push_str("💧 Miss!"),
        ShotOutcome::Hit => out.push_str("🎯 Hit! Shoot again."),
        ShotOutcome::Destroyed(name) => {
            let _ = write!(out, "💥 {} destroyed! Shoot again.", name);
        }
    }
    out
}

pub fn print_greeting() {
    std::println!("╔══════════════════════════════╗");
    std::println!("║          SEA BATTLE          ║");
    std::println!("╠══════════════════════════════╣");
    std::println!("║ Move format: <row> <col>     ║");
    std::println!("║   row - row number (1-6)     ║");
    std::println!("║   col - column number (1-6)  ║");
    std::println!("║ Example: 3 4                 ║");
    std::println!("║                              ║");
    std::println!("║ ■ ship  X hit  · miss        ║");
    std::println!("║ O unknown water              ║");
    std::println!("║ A hit earns another shot.    ║");
    std::println!("╚══════════════════════════════╝");
}

pub fn print_winner<const N: usize>(game: &Game<N>, winner: Side) {
    let loser = game.combatant(winner.other());
    std::println!("{}", "─".repeat(24));
    std::println!(
        "🎉 {} wins! Every ship of {} has been sunk.",
        game.combatant(winner).name(),
        loser.name()
    );
}
