//! Per-piece pseudo-legal destination generation.
//!
//! Removed squares behave like occupied squares for blocking, but they can
//! never be entered or captured. That rule applies to every piece type,
//! including the king's single steps and its castling path.

use super::castling::{CastlingRights, CastlingSide};
use super::check::{is_in_check, is_square_attacked};
use super::{Board, Color, Piece, PieceType, Position, RemovalLedger};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

fn directions(piece_type: PieceType) -> &'static [(i8, i8)] {
    match piece_type {
        PieceType::Rook => &ROOK_DIRECTIONS,
        PieceType::Bishop => &BISHOP_DIRECTIONS,
        PieceType::Queen => &KING_OFFSETS,
        _ => &[],
    }
}

/// Destinations for the piece on `from`, ignoring whether the mover's king
/// ends up in check. Empty if `from` holds no piece.
pub fn pseudo_legal_destinations(
    board: &Board,
    removed: &RemovalLedger,
    castling: &CastlingRights,
    from: Position,
) -> Vec<Position> {
    let Some(piece) = board.get_piece(from) else {
        return Vec::new();
    };

    match piece.piece_type {
        PieceType::Pawn => pawn_moves(board, removed, piece.color, from),
        PieceType::Knight => step_moves(board, removed, piece.color, from, &KNIGHT_OFFSETS),
        PieceType::King => {
            let mut moves = step_moves(board, removed, piece.color, from, &KING_OFFSETS);
            moves.extend(castling_moves(board, removed, castling, piece.color, from));
            moves
        }
        slider => ray_moves(board, removed, piece.color, from, directions(slider)),
    }
}

/// Squares the piece on `from` attacks, independent of whose turn it is.
///
/// Pawns attack diagonally only. The first blocker on a ray is included
/// whatever its color, since a defended piece is still attacked. Removed
/// squares are never attacked.
pub fn attacked_squares(board: &Board, removed: &RemovalLedger, from: Position) -> Vec<Position> {
    let Some(piece) = board.get_piece(from) else {
        return Vec::new();
    };

    let open = |pos: &Position| !removed.is_removed(*pos);

    match piece.piece_type {
        PieceType::Pawn => [-1, 1]
            .into_iter()
            .filter_map(|dc| from.offset(piece.color.pawn_direction(), dc))
            .filter(open)
            .collect(),
        PieceType::Knight => KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .filter(open)
            .collect(),
        PieceType::King => KING_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .filter(open)
            .collect(),
        slider => {
            let mut squares = Vec::new();
            for &(dr, dc) in directions(slider) {
                let mut current = from;
                while let Some(next) = current.offset(dr, dc) {
                    if removed.is_removed(next) {
                        break;
                    }
                    squares.push(next);
                    if !board.is_empty(next) {
                        break;
                    }
                    current = next;
                }
            }
            squares
        }
    }
}

/// Whether a piece of `color` may land on `pos`: present, and empty or enemy-held
fn can_land(board: &Board, removed: &RemovalLedger, color: Color, pos: Position) -> bool {
    if removed.is_removed(pos) {
        return false;
    }
    match board.get_piece(pos) {
        Some(Piece { color: other, .. }) => other != color,
        None => true,
    }
}

fn is_open(board: &Board, removed: &RemovalLedger, pos: Position) -> bool {
    !removed.is_removed(pos) && board.is_empty(pos)
}

fn pawn_moves(board: &Board, removed: &RemovalLedger, color: Color, from: Position) -> Vec<Position> {
    let mut moves = Vec::new();
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if is_open(board, removed, one) {
            moves.push(one);

            if from.row == color.pawn_row() {
                if let Some(two) = one.offset(dir, 0) {
                    if is_open(board, removed, two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(target) = from.offset(dir, dc) {
            if removed.is_removed(target) {
                continue;
            }
            if matches!(board.get_piece(target), Some(p) if p.color != color) {
                moves.push(target);
            }
        }
    }

    moves
}

fn step_moves(
    board: &Board,
    removed: &RemovalLedger,
    color: Color,
    from: Position,
    offsets: &[(i8, i8)],
) -> Vec<Position> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&pos| can_land(board, removed, color, pos))
        .collect()
}

fn ray_moves(
    board: &Board,
    removed: &RemovalLedger,
    color: Color,
    from: Position,
    dirs: &[(i8, i8)],
) -> Vec<Position> {
    let mut moves = Vec::new();

    for &(dr, dc) in dirs {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            if removed.is_removed(next) {
                break;
            }
            match board.get_piece(next) {
                None => moves.push(next),
                Some(piece) => {
                    if piece.color != color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }

    moves
}

/// King destinations for castling that satisfy every castling condition
pub(crate) fn castling_moves(
    board: &Board,
    removed: &RemovalLedger,
    castling: &CastlingRights,
    color: Color,
    from: Position,
) -> Vec<Position> {
    let mut moves = Vec::new();

    if from != CastlingSide::KingSide.king_from(color) {
        return moves;
    }
    if !CastlingSide::ALL
        .iter()
        .any(|&side| castling.is_available(color, side))
    {
        return moves;
    }
    if is_in_check(board, color, removed) {
        return moves;
    }

    for side in CastlingSide::ALL {
        if !castling.is_available(color, side) {
            continue;
        }
        if board.get_piece(side.rook_from(color)) != Some(Piece::new(PieceType::Rook, color)) {
            continue;
        }
        if !side
            .between(color)
            .into_iter()
            .all(|pos| is_open(board, removed, pos))
        {
            continue;
        }
        if side
            .king_path(color)
            .iter()
            .any(|&pos| is_square_attacked(board, removed, pos, color.opposite()))
        {
            continue;
        }
        moves.push(side.king_to(color));
    }

    moves
}
