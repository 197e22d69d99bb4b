//! Move selection: a flat additive heuristic plus random top-N sampling.
//!
//! This is not a search engine. Each legal move gets a score from a handful of
//! independent bonuses, and the move played is drawn uniformly from the best
//! few, which keeps games varied while still looking like plausible amateur
//! play. Beginner level skips the heuristic and plays any legal move.

use shakmaty::{Move, Role, Square};

use crate::game_data::Level;
use crate::rng::TutorRng;
use crate::rules::{destination, GameBoard};

pub const CENTER: [Square; 4] = [Square::D4, Square::D5, Square::E4, Square::E5];

pub const EXTENDED_CENTER: [Square; 12] = [
    Square::D4,
    Square::D5,
    Square::E4,
    Square::E5,
    Square::C3,
    Square::C4,
    Square::C5,
    Square::C6,
    Square::F3,
    Square::F4,
    Square::F5,
    Square::F6,
];

/// Full-move number before which minor-piece moves earn a development bonus.
const DEVELOPMENT_UNTIL: u32 = 12;

/// Full-move number before which queen moves count as an early sortie.
pub const EARLY_QUEEN_UNTIL: u32 = 8;

pub fn piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 1,
        Role::Knight => 3,
        Role::Bishop => 3,
        Role::Rook => 5,
        Role::Queen => 9,
        Role::King => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Material swing plus a flat bonus for captures. En passant has no piece on
/// the destination square and gets the fallback bonus.
pub fn capture_bonus(board: &GameBoard, m: Move) -> i32 {
    if !board.is_capture(m) {
        return 0;
    }
    match (board.mover(m), board.captured(m)) {
        (Some(mover), Some(captured)) => piece_value(captured.role) - piece_value(mover.role) + 5,
        _ => 3,
    }
}

pub fn score_move(board: &GameBoard, m: Move, level: Level) -> i32 {
    let advanced = level == Level::Advanced;
    let fullmoves = board.fullmoves();
    let role = board.mover(m).map(|p| p.role);

    let mut score = capture_bonus(board, m);

    if board.gives_check(m) {
        score += if advanced { 3 } else { 2 };
    }
    if CENTER.contains(&destination(m)) {
        score += 2;
    }
    if matches!(role, Some(Role::Knight | Role::Bishop)) && fullmoves < DEVELOPMENT_UNTIL {
        score += if advanced { 2 } else { 1 };
    }
    if role == Some(Role::Queen) && fullmoves < EARLY_QUEEN_UNTIL {
        score -= 3;
    }
    if board.is_castling(m) {
        score += 5;
    }

    score
}

/// All legal moves scored and sorted best first. The sort is stable, so ties
/// keep legal-move generation order.
pub fn rank_moves(board: &GameBoard, level: Level) -> Vec<ScoredMove> {
    let mut scored: Vec<ScoredMove> = board
        .legal_moves()
        .into_iter()
        .map(|mv| ScoredMove {
            mv,
            score: score_move(board, mv, level),
        })
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Size of the candidate pool the move is drawn from.
pub fn top_n(level: Level, candidates: usize) -> usize {
    let divisor = if level == Level::Advanced { 5 } else { 3 };
    (candidates / divisor).max(2)
}

/// Choose the next move, or `None` when there is no legal move.
pub fn pick_move(board: &GameBoard, level: Level, rng: &mut TutorRng) -> Option<Move> {
    if level == Level::Beginner {
        let legal = board.legal_moves();
        return rng.choose(&legal).copied();
    }

    let ranked = rank_moves(board, level);
    let pool = top_n(level, ranked.len()).min(ranked.len());
    rng.choose(&ranked[..pool]).map(|scored| scored.mv)
}
