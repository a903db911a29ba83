//! Randomized checks of the legality filter against independently played moves.
//!
//! Every seed builds a position with both kings and a handful of other
//! pieces, then verifies for each piece that
//! - legal cells are a subset of reachable cells,
//! - each legal cell really leaves the mover's king safe and each rejected
//!   one really does not,
//! - the board is untouched afterwards and a second query agrees.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use chess_rules::{Board, Cell, ChessBoard, Color, Piece, PieceKind, legal_cells, reachable_cells};

const SEEDS: u64 = 400;

fn random_position(seed: u64) -> ChessBoard {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut b = ChessBoard::empty();

    let free_cell = |rng: &mut StdRng, b: &ChessBoard| loop {
        let cell = Cell::new(rng.gen_range(0..8), rng.gen_range(0..8));
        if b.get_piece_at(cell).is_none() {
            return cell;
        }
    };

    for color in [Color::White, Color::Black] {
        let cell = free_cell(&mut rng, &b);
        b.place(PieceKind::King, color, cell).unwrap();
    }

    let extras = rng.gen_range(2..14);
    let kinds = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
    ];
    for _ in 0..extras {
        let kind = kinds[rng.gen_range(0..kinds.len())];
        let color = if rng.gen_bool(0.5) {
            Color::White
        } else {
            Color::Black
        };
        let cell = free_cell(&mut rng, &b);
        b.place(kind, color, cell).unwrap();
    }
    b
}

/// Play the move on a private copy and ask the copy about check.
fn independently_safe(b: &ChessBoard, piece: &Piece, to: Cell) -> bool {
    let mut copy = b.clone();
    copy.set_piece_at(piece.cell.unwrap(), None).unwrap();
    copy.set_piece_at(to, Some(*piece)).unwrap();
    !copy.is_king_in_check(piece.color).unwrap()
}

fn check_position(seed: u64) {
    let mut b = random_position(seed);
    let before = b.clone();

    for piece in before.occupied() {
        let reach = reachable_cells(&b, &piece).unwrap();
        let legal = legal_cells(&mut b, &piece).unwrap();
        assert_eq!(b, before, "seed {seed}: board changed by query for {piece:?}");

        let reach_set: HashSet<Cell> = reach.iter().copied().collect();
        let legal_set: HashSet<Cell> = legal.iter().copied().collect();
        assert!(
            legal_set.is_subset(&reach_set),
            "seed {seed}: {piece:?} legal {legal:?} not within reachable {reach:?}"
        );

        for &to in &reach {
            assert_eq!(
                legal_set.contains(&to),
                independently_safe(&before, &piece, to),
                "seed {seed}: {piece:?} -> {to} disagrees\n{before}"
            );
        }

        let again = legal_cells(&mut b, &piece).unwrap();
        assert_eq!(legal, again, "seed {seed}: second query differs");
        assert_eq!(b, before);
    }
}

#[test]
fn random_positions_obey_legality_properties() {
    (0..SEEDS).into_par_iter().for_each(check_position);
}

#[test]
fn reachable_cells_stay_on_board() {
    (0..SEEDS).into_par_iter().for_each(|seed| {
        let b = random_position(seed);
        for piece in b.occupied() {
            for to in reachable_cells(&b, &piece).unwrap() {
                assert!(to.is_on_board(), "seed {seed}: {piece:?} reaches {to}");
                assert_ne!(Some(to), piece.cell);
                if let Some(target) = b.get_piece_at(to) {
                    assert_ne!(target.color, piece.color);
                }
            }
        }
    });
}
