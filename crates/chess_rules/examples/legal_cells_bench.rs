//! Legality filter benchmark for profiling with cargo-flamegraph.
//!
//! Runs `legal_cells_into` for every piece of a set of positions many times,
//! so the simulate/probe/restore loop dominates the profile.
//!
//! Usage:
//!   cargo flamegraph --example legal_cells_bench -p chess_rules

use chess_rules::{ChessBoard, Color, legal_cells_into};
use std::time::Instant;

/// Piece placements covering different game phases
const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Start", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
    ("e4", "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"),
    ("Sicilian", "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R"),
    ("Kiwipete", "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R"),
    ("Complex", "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1"),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8"),
    ("Double check", "r1bqkb1r/pppp1Npp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K2R"),
    ("Pinned pieces", "r1bqkbnr/ppp2ppp/2np4/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R"),
];

const ITERATIONS: usize = 20_000;

fn main() {
    println!("=== Legal Cells Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut buf = Vec::with_capacity(32);
    let mut total_cells = 0usize;
    let mut total_time = std::time::Duration::ZERO;

    for (name, placement) in TEST_POSITIONS {
        let mut board = match ChessBoard::from_placement(placement) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };
        let pieces: Vec<_> = [Color::White, Color::Black]
            .into_iter()
            .flat_map(|color| board.pieces(color))
            .collect();

        print!("{name:.<20}");

        let start = Instant::now();
        let mut cells = 0usize;

        for _ in 0..ITERATIONS {
            for piece in &pieces {
                if let Err(e) = legal_cells_into(&mut board, piece, &mut buf) {
                    eprintln!("{name}: {e}");
                    return;
                }
                cells += buf.len();
            }
        }

        let elapsed = start.elapsed();
        total_cells += cells;
        total_time += elapsed;

        let per_pos = cells as f64 / ITERATIONS as f64;
        let pps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {per_pos:>5.1} cells/pos, {pps:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    let avg = if total_time.as_secs_f64() > 0.0 {
        (ITERATIONS * TEST_POSITIONS.len()) as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_cells} cells in {total_time:.3?} ({avg:.0} positions/sec)");
}
