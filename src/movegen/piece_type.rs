use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::movegen::MoveList;
use crate::piece::PROMOTION_PIECES;
use crate::position::Position;

/// Unit steps along ranks and files.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Unit steps along diagonals.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Movement pattern of one kind of piece.
///
/// Implementations push every pseudo-legal move for the piece of `color` standing on `src`:
/// the pattern and the occupancy are respected, but nothing stops the move from leaving the
/// mover's own king in check.
pub trait PieceMoveGenerator {
    fn pseudo_legals(board: &Board, src: Position, color: Color, movelist: &mut MoveList);
}

pub struct PawnType;
pub struct BishopType;
pub struct KnightType;
pub struct RookType;
pub struct QueenType;
pub struct KingType;

/// Walk each direction until the edge, a friendly piece (excluded) or an enemy piece (included).
fn slide(
    board: &Board,
    src: Position,
    color: Color,
    directions: &[(i8, i8)],
    movelist: &mut MoveList,
) {
    for &(d_row, d_column) in directions {
        let mut current = src;
        while let Some(dest) = current.offset(d_row, d_column) {
            match board.piece_at(dest) {
                None => movelist.push(ChessMove::new(src, dest, None)),
                Some(occupant) => {
                    if occupant.color() != color {
                        movelist.push(ChessMove::new(src, dest, None));
                    }
                    break;
                }
            }
            current = dest;
        }
    }
}

/// Jump to each fixed offset that is on the board and not held by a friendly piece.
fn step(
    board: &Board,
    src: Position,
    color: Color,
    offsets: &[(i8, i8)],
    movelist: &mut MoveList,
) {
    for &(d_row, d_column) in offsets {
        if let Some(dest) = src.offset(d_row, d_column) {
            match board.piece_at(dest) {
                Some(occupant) if occupant.color() == color => {}
                _ => movelist.push(ChessMove::new(src, dest, None)),
            }
        }
    }
}

impl PawnType {
    /// Push a pawn move, fanned out into all four promotions when it reaches the last row.
    fn push(src: Position, dest: Position, color: Color, movelist: &mut MoveList) {
        if dest.row() == color.promotion_row() {
            for promotion in PROMOTION_PIECES {
                movelist.push(ChessMove::new(src, dest, Some(promotion)));
            }
        } else {
            movelist.push(ChessMove::new(src, dest, None));
        }
    }
}

impl PieceMoveGenerator for PawnType {
    fn pseudo_legals(board: &Board, src: Position, color: Color, movelist: &mut MoveList) {
        let forward = color.pawn_direction();

        if let Some(one) = src.offset(forward, 0) {
            if board.piece_at(one).is_none() {
                PawnType::push(src, one, color, movelist);

                if src.row() == color.pawn_row() {
                    if let Some(two) = one.offset(forward, 0) {
                        if board.piece_at(two).is_none() {
                            movelist.push(ChessMove::new(src, two, None));
                        }
                    }
                }
            }
        }

        for d_column in [-1, 1] {
            if let Some(dest) = src.offset(forward, d_column) {
                if let Some(occupant) = board.piece_at(dest) {
                    if occupant.color() != color {
                        PawnType::push(src, dest, color, movelist);
                    }
                }
            }
        }
    }
}

impl PieceMoveGenerator for BishopType {
    fn pseudo_legals(board: &Board, src: Position, color: Color, movelist: &mut MoveList) {
        slide(board, src, color, &BISHOP_DIRECTIONS, movelist);
    }
}

impl PieceMoveGenerator for KnightType {
    fn pseudo_legals(board: &Board, src: Position, color: Color, movelist: &mut MoveList) {
        step(board, src, color, &KNIGHT_OFFSETS, movelist);
    }
}

impl PieceMoveGenerator for RookType {
    fn pseudo_legals(board: &Board, src: Position, color: Color, movelist: &mut MoveList) {
        slide(board, src, color, &ROOK_DIRECTIONS, movelist);
    }
}

impl PieceMoveGenerator for QueenType {
    fn pseudo_legals(board: &Board, src: Position, color: Color, movelist: &mut MoveList) {
        slide(board, src, color, &ROOK_DIRECTIONS, movelist);
        slide(board, src, color, &BISHOP_DIRECTIONS, movelist);
    }
}

impl PieceMoveGenerator for KingType {
    fn pseudo_legals(board: &Board, src: Position, color: Color, movelist: &mut MoveList) {
        step(board, src, color, &KING_OFFSETS, movelist);
    }
}
