//! Chess rules adapter over shakmaty.
//!
//! Everything the generator needs to know about chess goes through
//! [`GameBoard`]: legal moves, board lookups, check and game-over predicates,
//! SAN/UCI rendering and FEN serialization. The board also keeps the position
//! history needed for the repetition rule, which shakmaty leaves to callers.

use std::collections::HashMap;

use shakmaty::{
    fen::Fen, san::SanPlus, uci::UciMove, zobrist::Zobrist64, Bitboard, CastlingMode,
    CastlingSide, Chess, Color, EnPassantMode, File, Move, MoveList, Piece, Position, Square,
};

use crate::error::GameError;

/// Half-move clock at which the seventy-five-move rule ends the game.
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Occurrences of one position that end the game by repetition.
const FIVEFOLD: u32 = 5;

/// A live game position plus its repetition history.
#[derive(Clone, Debug)]
pub struct GameBoard {
    pos: Chess,
    seen: HashMap<Zobrist64, u32>,
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::from_position(Chess::default())
    }
}

impl GameBoard {
    /// Standard starting position.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_position(pos: Chess) -> Self {
        let mut seen = HashMap::new();
        seen.insert(pos.zobrist_hash::<Zobrist64>(EnPassantMode::Legal), 1);
        Self { pos, seen }
    }

    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let parsed: Fen = fen
            .parse()
            .map_err(|e| GameError::InvalidFen(format!("{fen}: {e}")))?;
        let pos: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| GameError::InvalidFen(format!("{fen}: {e}")))?;
        Ok(Self::from_position(pos))
    }

    /// Legal moves in shakmaty's generation order, which is stable for a
    /// given position.
    pub fn legal_moves(&self) -> MoveList {
        self.pos.legal_moves()
    }

    pub fn is_legal(&self, m: Move) -> bool {
        self.pos.is_legal(m)
    }

    /// Resolve a square-pair string ("e2e4", "e7e8q") against the live
    /// position. A string that does not parse is an error; a well-formed move
    /// that is illegal here yields `Ok(None)`.
    pub fn resolve_uci(&self, uci: &str) -> Result<Option<Move>, GameError> {
        let parsed: UciMove = uci.parse().map_err(|e| GameError::MalformedMove {
            uci: uci.to_string(),
            reason: format!("{e}"),
        })?;
        Ok(parsed.to_move(&self.pos).ok())
    }

    /// Play a move in place, advancing turn, counters and history.
    pub fn apply(&mut self, m: Move) {
        debug_assert!(self.is_legal(m), "illegal move {m:?}");
        self.pos.play_unchecked(m);
        let key = self.pos.zobrist_hash::<Zobrist64>(EnPassantMode::Legal);
        *self.seen.entry(key).or_insert(0) += 1;
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.pos.board().piece_at(sq)
    }

    /// Any pawn of either colour on the file.
    pub fn has_pawn_on_file(&self, file: File) -> bool {
        (self.pos.board().pawns() & Bitboard::from_file(file)).any()
    }

    /// The piece making the move.
    pub fn mover(&self, m: Move) -> Option<Piece> {
        m.from().and_then(|from| self.piece_at(from))
    }

    /// The piece standing on the destination square. `None` for en passant,
    /// where the captured pawn is elsewhere.
    pub fn captured(&self, m: Move) -> Option<Piece> {
        if m.is_castle() {
            return None;
        }
        self.piece_at(m.to())
    }

    pub fn is_capture(&self, m: Move) -> bool {
        m.is_capture()
    }

    pub fn gives_check(&self, m: Move) -> bool {
        let mut after = self.pos.clone();
        after.play_unchecked(m);
        after.is_check()
    }

    pub fn is_castling(&self, m: Move) -> bool {
        m.is_castle()
    }

    pub fn is_checkmate(&self) -> bool {
        self.pos.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.pos.is_stalemate()
    }

    pub fn is_insufficient_material(&self) -> bool {
        self.pos.is_insufficient_material()
    }

    pub fn is_seventy_five_moves(&self) -> bool {
        self.pos.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES
    }

    pub fn is_fivefold_repetition(&self) -> bool {
        let key = self.pos.zobrist_hash::<Zobrist64>(EnPassantMode::Legal);
        self.seen.get(&key).copied().unwrap_or(0) >= FIVEFOLD
    }

    /// Checkmate, stalemate, insufficient material, seventy-five-move rule or
    /// fivefold repetition.
    pub fn is_game_over(&self) -> bool {
        self.is_checkmate()
            || self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_seventy_five_moves()
            || self.is_fivefold_repetition()
    }

    pub fn turn(&self) -> Color {
        self.pos.turn()
    }

    pub fn fullmoves(&self) -> u32 {
        self.pos.fullmoves().get()
    }

    /// SAN including the `+`/`#` suffix.
    pub fn san(&self, m: Move) -> String {
        SanPlus::from_move(self.pos.clone(), m).to_string()
    }

    /// Square-pair notation; castling is rendered king-to-target (`e1g1`).
    pub fn uci(&self, m: Move) -> String {
        UciMove::from_move(m, CastlingMode::Standard).to_string()
    }

    pub fn fen(&self) -> String {
        Fen::from_position(&self.pos, EnPassantMode::Legal).to_string()
    }
}

/// Where the moving piece lands. shakmaty encodes castling as king-takes-rook,
/// so castling resolves to the king's target square instead.
pub fn destination(m: Move) -> Square {
    match m {
        Move::Castle { king, .. } => {
            let file = match m.castling_side() {
                Some(CastlingSide::QueenSide) => File::C,
                _ => File::G,
            };
            Square::from_coords(file, king.rank())
        }
        _ => m.to(),
    }
}
