use std::collections::HashMap;
use std::fmt;

use crate::movegen::legal_moves;
use crate::types::*;

/// Number of times a position (by canonical key) may occur before the game
/// is drawn by repetition.
pub const REPETITION_LIMIT: u32 = 4;
/// Plies without a capture before the game is drawn.
pub const HALFMOVE_LIMIT: u32 = 40;

/// Full game state: piece placement plus everything needed for terminal
/// detection. A plain value type; clone before speculative moves.
#[derive(Clone, Debug)]
pub struct Board {
    pub board: [Option<Piece>; NUM_SQUARES as usize],
    pub side_to_move: Color,
    /// Plies since the last capture.
    pub halfmove_clock: u32,
    /// Set at most once; no further moves are accepted afterwards.
    pub outcome: Option<Outcome>,
    /// Occurrence count per canonical position key, for repetition detection.
    pub position_history: HashMap<String, u32>,
}

impl Board {
    /// Fresh game in the variant's starting layout, white to move.
    /// White occupies rank 1 (empty, rook, king, bishop, empty), black
    /// mirrors on rank 5. The starting position is recorded once.
    pub fn start() -> Self {
        let mut b = Board {
            board: [None; NUM_SQUARES as usize],
            side_to_move: Color::White,
            halfmove_clock: 0,
            outcome: None,
            position_history: HashMap::new(),
        };

        let back = [
            None,
            Some(PieceKind::Rook),
            Some(PieceKind::King),
            Some(PieceKind::Bishop),
            None,
        ];
        for (f, kind) in back.iter().enumerate() {
            if let Some(kind) = *kind {
                b.board[f] = Some(Piece {
                    color: Color::White,
                    kind,
                });
                b.board[20 + f] = Some(Piece {
                    color: Color::Black,
                    kind,
                });
            }
        }

        b.record_position();
        b
    }

    /// FEN-style parser for tests and driver setup: five ranks listed from
    /// rank 5 down to rank 1 (`K/R/B` white, `k/r/b` black, digits for empty
    /// runs), side to move, then an optional halfmove clock.
    ///
    /// Example: `Board::from_fen("1rkb1/5/5/5/1RKB1 w 0")` is the start
    /// position. Panics on malformed input.
    pub fn from_fen(fen: &str) -> Self {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        assert!(parts.len() >= 2, "Invalid FEN: expected at least 2 fields");

        let mut board = [None; NUM_SQUARES as usize];
        let ranks: Vec<&str> = parts[0].split('/').collect();
        assert!(
            ranks.len() == BOARD_SIZE as usize,
            "Invalid FEN board section"
        );

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = (BOARD_SIZE as i8 - 1) - rank_idx as i8; // top rank listed first
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let piece = Piece::from_char(ch)
                        .unwrap_or_else(|| panic!("Invalid piece char in FEN: {}", ch));
                    let s = sq(file, rank).expect("Square out of bounds while parsing FEN");
                    board[s as usize] = Some(piece);
                    file += 1;
                }
                assert!(file <= BOARD_SIZE as i8, "Too many files in FEN rank");
            }
            assert!(file == BOARD_SIZE as i8, "Not enough files in FEN rank");
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => panic!("Invalid side to move in FEN: {}", other),
        };

        let halfmove_clock: u32 = parts
            .get(2)
            .copied()
            .unwrap_or("0")
            .parse()
            .expect("Invalid halfmove clock in FEN");

        let mut b = Board {
            board,
            side_to_move,
            halfmove_clock,
            outcome: None,
            position_history: HashMap::new(),
        };
        b.record_position();
        b
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        for i in 0..NUM_SQUARES {
            if let Some(pc) = self.piece_at(i) {
                if pc.color == c && pc.kind == PieceKind::King {
                    return Some(i);
                }
            }
        }
        None
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Canonical encoding of piece placement plus side to move. Two
    /// structurally equal boards always produce the same key, so it doubles
    /// as the repetition-history key and the Q-table state index.
    pub fn position_key(&self) -> String {
        let mut key = String::with_capacity(NUM_SQUARES as usize + 1);
        for i in 0..NUM_SQUARES {
            key.push(match self.piece_at(i) {
                Some(pc) => pc.to_char(),
                None => '.',
            });
        }
        key.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });
        key
    }

    fn record_position(&mut self) -> u32 {
        let key = self.position_key();
        let count = self.position_history.entry(key).or_insert(0);
        *count += 1;
        *count
    }

    /// Geometric validity for the side to move: bounds, piece ownership,
    /// destination, and piece movement rules. Deliberately does not test
    /// whether the move leaves the mover's own king in check; that filter
    /// belongs to legal-move enumeration.
    pub fn is_valid_move(&self, from: u8, to: u8) -> bool {
        if from >= NUM_SQUARES || to >= NUM_SQUARES {
            return false;
        }
        let piece = match self.piece_at(from) {
            Some(p) => p,
            None => return false,
        };
        if piece.color != self.side_to_move {
            return false;
        }
        self.piece_move_ok(from, to)
    }

    /// Movement geometry for the piece on `from`, independent of whose turn
    /// it is. Check detection uses this directly, since the attacker there
    /// is not the side to move.
    fn piece_move_ok(&self, from: u8, to: u8) -> bool {
        let piece = match self.piece_at(from) {
            Some(p) => p,
            None => return false,
        };
        if let Some(target) = self.piece_at(to) {
            if target.color == piece.color {
                return false;
            }
        }

        let dx = file_of(to) - file_of(from);
        let dy = rank_of(to) - rank_of(from);
        match piece.kind {
            PieceKind::King => dx.abs().max(dy.abs()) == 1,
            PieceKind::Bishop => dx.abs() == dy.abs() && self.path_clear(from, to),
            PieceKind::Rook => ((dx == 0) != (dy == 0)) && self.path_clear(from, to),
        }
    }

    /// True when every square strictly between `from` and `to` along the
    /// line is empty. Steps by the sign of the deltas.
    fn path_clear(&self, from: u8, to: u8) -> bool {
        let step_x = (file_of(to) - file_of(from)).signum();
        let step_y = (rank_of(to) - rank_of(from)).signum();
        let mut x = file_of(from) + step_x;
        let mut y = rank_of(from) + step_y;
        while (x, y) != (file_of(to), rank_of(to)) {
            match sq(x, y) {
                Some(s) => {
                    if self.piece_at(s).is_some() {
                        return false;
                    }
                }
                None => return false,
            }
            x += step_x;
            y += step_y;
        }
        true
    }

    /// True when `color`'s king is attacked. A missing king reports "not in
    /// check": terminal detection ends the game before a king can actually
    /// disappear, so this path is a fallback for ill-formed positions.
    pub fn in_check(&self, color: Color) -> bool {
        let ksq = match self.king_sq(color) {
            Some(s) => s,
            None => return false,
        };
        for from in 0..NUM_SQUARES {
            if let Some(pc) = self.piece_at(from) {
                if pc.color == color.other() && self.piece_move_ok(from, ksq) {
                    return true;
                }
            }
        }
        false
    }

    /// True when the move would leave the mover's own king in check,
    /// tested on a scratch copy.
    pub(crate) fn leaves_king_exposed(&self, mv: Move) -> bool {
        let mut scratch = self.clone();
        let moved = scratch.piece_at(mv.from);
        scratch.set_piece(mv.to, moved);
        scratch.set_piece(mv.from, None);
        scratch.in_check(self.side_to_move)
    }

    /// Material from which neither side can deliver mate: bare kings, or a
    /// lone bishop beside them. Any rook keeps mate possible.
    fn is_dead_position(&self) -> bool {
        let mut bishops = 0u32;
        for i in 0..NUM_SQUARES {
            match self.piece_at(i).map(|pc| pc.kind) {
                Some(PieceKind::Rook) => return false,
                Some(PieceKind::Bishop) => bishops += 1,
                _ => {}
            }
        }
        bishops <= 1
    }

    /// Plays `mv` if it is legal, mutating the board in place and resolving
    /// any resulting terminal state. Returns false (leaving the board
    /// untouched) for anything else: a finished game, a geometrically
    /// invalid move, a move that exposes the mover's own king, or a king
    /// capture slipping past upstream filtering.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        if !self.is_valid_move(mv.from, mv.to) {
            return false;
        }
        // Re-validate legality rather than trusting the caller.
        if self.leaves_king_exposed(mv) {
            return false;
        }

        let moved = match self.piece_at(mv.from) {
            Some(p) => p,
            None => return false,
        };
        let captured = self.piece_at(mv.to);
        if let Some(target) = captured {
            // Unreachable with correct legality filtering upstream: a side
            // whose king can be taken already had no legal position.
            if target.kind == PieceKind::King {
                return false;
            }
        }

        self.set_piece(mv.to, Some(moved));
        self.set_piece(mv.from, None);

        self.halfmove_clock = if captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };

        self.side_to_move = self.side_to_move.other();

        // Terminal resolution, in precedence order.
        let repeats = self.record_position();
        if repeats >= REPETITION_LIMIT {
            self.outcome = Some(Outcome::Draw);
            return true;
        }

        if self.halfmove_clock >= HALFMOVE_LIMIT {
            self.outcome = Some(Outcome::Draw);
            return true;
        }

        if self.is_dead_position() {
            self.outcome = Some(Outcome::Draw);
            return true;
        }

        if legal_moves(self).is_empty() {
            self.outcome = Some(if self.in_check(self.side_to_move) {
                Outcome::Winner(self.side_to_move.other())
            } else {
                Outcome::Draw
            });
        }

        true
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_SIZE as i8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..BOARD_SIZE as i8 {
                let s = sq(file, rank).expect("in-range square");
                let c = match self.piece_at(s) {
                    Some(pc) => pc.to_char(),
                    None => '.',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e")?;
        write!(
            f,
            "turn: {} | halfmove clock: {}",
            match self.side_to_move {
                Color::White => 'w',
                Color::Black => 'b',
            },
            self.halfmove_clock
        )?;
        if let Some(outcome) = self.outcome {
            write!(f, " | over: {:?}", outcome)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
