//! Catalog of named opening lines used to seed generated games.
//!
//! Lines are plain square-pair strings; they are checked against the live
//! position only when a game replays them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningLine {
    pub name: &'static str,
    pub moves: &'static [&'static str],
}

pub const OPENINGS: &[OpeningLine] = &[
    OpeningLine {
        name: "italienne",
        moves: &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5"],
    },
    OpeningLine {
        name: "espagnole",
        moves: &["e2e4", "e7e5", "g1f3", "b8c6", "f1b5"],
    },
    OpeningLine {
        name: "sicilienne",
        moves: &["e2e4", "c7c5", "g1f3", "d7d6", "d2d4", "c5d4", "f3d4"],
    },
    OpeningLine {
        name: "francaise",
        moves: &["e2e4", "e7e6", "d2d4", "d7d5"],
    },
    OpeningLine {
        name: "caro_kann",
        moves: &["e2e4", "c7c6", "d2d4", "d7d5"],
    },
    OpeningLine {
        name: "dame",
        moves: &["d2d4", "d7d5", "c2c4", "e7e6", "b1c3", "g8f6"],
    },
    OpeningLine {
        name: "anglaise",
        moves: &["c2c4", "e7e5", "b1c3", "g8f6"],
    },
    OpeningLine {
        name: "pirc",
        moves: &["e2e4", "d7d6", "d2d4", "g8f6", "b1c3"],
    },
];

/// Catalog names in catalog order.
pub fn names() -> impl Iterator<Item = &'static str> {
    OPENINGS.iter().map(|line| line.name)
}

pub fn line_for(name: &str) -> Option<&'static OpeningLine> {
    OPENINGS.iter().find(|line| line.name == name)
}

/// "caro_kann" -> "Caro Kann"
pub fn display_name(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
