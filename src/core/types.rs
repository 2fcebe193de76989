// Ficheiro: src/core/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do jogo de damas.

use std::fmt;

/// Lado do tabuleiro de 8x8.
pub const BOARD_SIZE: u8 = 8;

/// Pontuação usada pela busca e pelos avaliadores.
pub type Score = i32;

// Enum para representar a cor de uma peça.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

impl Color {
    /// Linha onde uma pedra desta cor é promovida a dama.
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::Dark => BOARD_SIZE - 1,
            Color::Light => 0,
        }
    }
}

/// Jogador a mover num nó da árvore: o motor maximiza, o adversário minimiza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Ai,
    Human,
}

impl std::ops::Not for Player {
    type Output = Player;

    fn not(self) -> Self::Output {
        match self {
            Player::Ai => Player::Human,
            Player::Human => Player::Ai,
        }
    }
}

impl Player {
    /// O motor joga sempre com as escuras.
    pub fn color(self) -> Color {
        match self {
            Player::Ai => Color::Dark,
            Player::Human => Color::Light,
        }
    }

    pub fn is_maximizing(self) -> bool {
        self == Player::Ai
    }
}

// Casa do tabuleiro (linha, coluna), ambas em 0..8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    /// Só as casas escuras recebem peças.
    pub fn is_playable(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE && (self.row + self.col) % 2 == 1
    }

    /// Desloca a casa; `None` se sair do tabuleiro.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Casa equivalente com o tabuleiro rodado 180 graus.
    pub fn flipped(&self) -> Square {
        Square::new(BOARD_SIZE - 1 - self.row, BOARD_SIZE - 1 - self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

// Struct para representar uma peça: cor, posição atual e se já é dama.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub square: Square,
    pub king: bool,
}

impl Piece {
    pub fn man(color: Color, square: Square) -> Self {
        Piece { color, square, king: false }
    }

    pub fn king(color: Color, square: Square) -> Self {
        Piece { color, square, king: true }
    }

    /// Caractere usado no layout textual do tabuleiro.
    pub fn to_char(&self) -> char {
        match (self.color, self.king) {
            (Color::Dark, false) => 'd',
            (Color::Dark, true) => 'D',
            (Color::Light, false) => 'l',
            (Color::Light, true) => 'L',
        }
    }

    /// Mesma peça vista do lado oposto (cor trocada, casa rodada).
    pub fn flipped(&self) -> Piece {
        Piece {
            color: !self.color,
            square: self.square.flipped(),
            king: self.king,
        }
    }
}

// Struct para representar um lance: origem, destino e a peça capturada, se houver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

impl Move {
    pub fn step(from: Square, to: Square) -> Self {
        Move { from, to, captured: None }
    }

    pub fn jump(from: Square, to: Square, captured: Piece) -> Self {
        Move { from, to, captured: Some(captured) }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn flipped(&self) -> Move {
        Move {
            from: self.from.flipped(),
            to: self.to.flipped(),
            captured: self.captured.map(|p| p.flipped()),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_and_color_are_opposites() {
        assert_eq!(!Player::Ai, Player::Human);
        assert_eq!(!Color::Dark, Color::Light);
        assert_eq!(Player::Ai.color(), Color::Dark);
        assert_eq!((!Player::Ai).color(), !Player::Ai.color());
        assert!(Player::Ai.is_maximizing());
        assert!(!Player::Human.is_maximizing());
    }

    #[test]
    fn test_square_offset_stays_on_board() {
        let corner = Square::new(0, 1);
        assert_eq!(corner.offset(1, 1), Some(Square::new(1, 2)));
        assert_eq!(corner.offset(-1, 1), None);
        assert_eq!(Square::new(7, 6).offset(1, -1), None);
    }

    #[test]
    fn test_playable_squares() {
        assert!(Square::new(0, 1).is_playable());
        assert!(!Square::new(0, 0).is_playable());
        assert!(Square::new(7, 0).is_playable());
        assert!(!Square::new(8, 1).is_playable());
    }

    #[test]
    fn test_flip_keeps_playable_squares() {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let sq = Square::new(row, col);
                assert_eq!(sq.is_playable(), sq.flipped().is_playable());
                assert_eq!(sq.flipped().flipped(), sq);
            }
        }
    }

    #[test]
    fn test_move_display() {
        let step = Move::step(Square::new(2, 1), Square::new(3, 2));
        assert_eq!(step.to_string(), "2,1-3,2");

        let victim = Piece::man(Color::Light, Square::new(3, 2));
        let jump = Move::jump(Square::new(2, 1), Square::new(4, 3), victim);
        assert_eq!(jump.to_string(), "2,1x4,3");
        assert!(jump.is_capture());
    }
}
