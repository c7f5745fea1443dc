mod movegen;
pub use self::movegen::*;

mod piece_type;
pub use self::piece_type::{
    BishopType, KingType, KnightType, PawnType, PieceMoveGenerator, QueenType, RookType,
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};
