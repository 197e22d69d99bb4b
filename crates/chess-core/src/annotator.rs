//! French teaching comments for individual moves.
//!
//! A move is first classified into exactly one [`MoveKind`] (castling wins
//! over capture, capture over pawn move, and so on down to the fallback), then
//! rendered from that case alone. Check is orthogonal and appended afterwards.
//! Beginner and intermediate levels may also get a suggested alternative.

use shakmaty::{CastlingSide, File, Move, Role, Square};

use crate::game_data::Level;
use crate::rng::TutorRng;
use crate::rules::{destination, GameBoard};
use crate::scorer::{piece_value, CENTER, EARLY_QUEEN_UNTIL, EXTENDED_CENTER};

const CHECK_TEXT: &str = "Echec au roi !";

/// Legal moves (in generation order) the alternative is drawn from.
const ALTERNATIVE_POOL: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub comment: String,
    pub incident: Option<String>,
    pub alternative: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    Favorable,
    Equal,
    Unfavorable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Castling(CastlingSide),
    /// `exchange` is `None` when either piece is unknown (en passant).
    Capture {
        mover: Option<Role>,
        captured: Option<Role>,
        to: Square,
        exchange: Option<Exchange>,
    },
    PawnAdvance {
        to: Square,
        central: bool,
        promotion: Option<Role>,
    },
    MinorPiece {
        role: Role,
        to: Square,
        central: bool,
    },
    QueenMove {
        to: Square,
        early: bool,
    },
    RookMove {
        to: Square,
        open_file: Option<File>,
    },
    Other {
        role: Option<Role>,
        to: Square,
    },
}

fn piece_name(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Pawn) => "pion",
        Some(Role::Knight) => "cavalier",
        Some(Role::Bishop) => "fou",
        Some(Role::Rook) => "tour",
        Some(Role::Queen) => "dame",
        Some(Role::King) => "roi",
        None => "piece",
    }
}

/// Classify `m`, played from `board` (the position before the move).
pub fn classify(board: &GameBoard, m: Move) -> MoveKind {
    if let Some(side) = m.castling_side() {
        return MoveKind::Castling(side);
    }

    let role = board.mover(m).map(|p| p.role);
    let to = destination(m);

    if board.is_capture(m) {
        let captured = board.captured(m).map(|p| p.role);
        let exchange = match (role, captured) {
            (Some(mover), Some(taken)) => {
                let (ours, theirs) = (piece_value(mover), piece_value(taken));
                Some(if theirs > ours {
                    Exchange::Favorable
                } else if theirs < ours {
                    Exchange::Unfavorable
                } else {
                    Exchange::Equal
                })
            }
            _ => None,
        };
        return MoveKind::Capture {
            mover: role,
            captured,
            to,
            exchange,
        };
    }

    match role {
        Some(Role::Pawn) => MoveKind::PawnAdvance {
            to,
            central: CENTER.contains(&to),
            promotion: m.promotion(),
        },
        Some(minor @ (Role::Knight | Role::Bishop)) => MoveKind::MinorPiece {
            role: minor,
            to,
            central: EXTENDED_CENTER.contains(&to),
        },
        Some(Role::Queen) => MoveKind::QueenMove {
            to,
            early: board.fullmoves() < EARLY_QUEEN_UNTIL,
        },
        Some(Role::Rook) => MoveKind::RookMove {
            to,
            open_file: (!board.has_pawn_on_file(to.file())).then(|| to.file()),
        },
        _ => MoveKind::Other { role, to },
    }
}

impl MoveKind {
    /// Comment sentences and optional incident for this case.
    pub fn render(self) -> (Vec<String>, Option<String>) {
        let mut parts = Vec::new();
        let mut incident = None;

        match self {
            MoveKind::Castling(side) => {
                let name = match side {
                    CastlingSide::KingSide => "Petit",
                    CastlingSide::QueenSide => "Grand",
                };
                parts.push(format!(
                    "{name} roque. Le roi se met en securite et la tour entre en jeu."
                ));
            }
            MoveKind::Capture {
                mover,
                captured,
                to,
                exchange,
            } => {
                parts.push(format!(
                    "Le {} capture le {} en {to}.",
                    piece_name(mover),
                    piece_name(captured)
                ));
                match exchange {
                    Some(Exchange::Favorable) => {
                        parts.push("Echange favorable : gain de materiel.".to_string())
                    }
                    Some(Exchange::Equal) => parts.push("Echange egal.".to_string()),
                    Some(Exchange::Unfavorable) => {
                        incident = Some("Echange defavorable : perte de materiel.".to_string())
                    }
                    None => {}
                }
            }
            MoveKind::PawnAdvance {
                to,
                central,
                promotion,
            } => {
                if central {
                    parts.push(format!("Le pion avance en {to}, occupant le centre."));
                } else if let Some(promoted) = promotion {
                    parts.push(format!(
                        "Promotion du pion en {} ! Coup decisif.",
                        piece_name(Some(promoted))
                    ));
                } else {
                    parts.push(format!("Le pion avance en {to}."));
                }
            }
            MoveKind::MinorPiece { role, to, central } => {
                let name = piece_name(Some(role));
                if central {
                    parts.push(format!(
                        "Le {name} se developpe en {to}, controlant des cases centrales."
                    ));
                } else {
                    parts.push(format!("Le {name} se deplace en {to}."));
                }
            }
            MoveKind::QueenMove { to, early } => {
                parts.push(format!("La dame se place en {to}."));
                if early {
                    incident =
                        Some("Sortie precoce de la dame. Elle risque d'etre harcelee.".to_string());
                }
            }
            MoveKind::RookMove { to, open_file } => match open_file {
                Some(file) => parts.push(format!(
                    "La tour s'installe sur la colonne ouverte {}.",
                    file.char()
                )),
                None => parts.push(format!("La tour se deplace en {to}.")),
            },
            MoveKind::Other { role, to } => {
                parts.push(format!("Le {} se deplace en {to}.", piece_name(role)));
            }
        }

        (parts, incident)
    }
}

/// Annotate `m`. `board` must be the position *before* the move.
pub fn annotate(board: &GameBoard, m: Move, level: Level, rng: &mut TutorRng) -> Annotation {
    let (mut parts, incident) = classify(board, m).render();
    if board.gives_check(m) {
        parts.push(CHECK_TEXT.to_string());
    }

    Annotation {
        comment: parts.join(" "),
        incident,
        alternative: suggest_alternative(board, m, level, rng),
    }
}

fn suggest_alternative(
    board: &GameBoard,
    m: Move,
    level: Level,
    rng: &mut TutorRng,
) -> Option<String> {
    let (probability, prefix) = match level {
        Level::Beginner => (0.35, "Alternative possible"),
        Level::Intermediate => (0.2, "A considerer"),
        Level::Advanced => return None,
    };

    let others: Vec<Move> = board
        .legal_moves()
        .into_iter()
        .filter(|other| *other != m)
        .collect();
    if others.is_empty() || !rng.gen_bool(probability) {
        return None;
    }

    let pool = &others[..others.len().min(ALTERNATIVE_POOL)];
    rng.choose(pool)
        .map(|alt| format!("{prefix} : {}", board.san(*alt)))
}
