// Ficheiro: src/moves/jump.rs
// Descrição: Lógica para gerar os saltos (capturas simples).

use super::directions;
use crate::core::{Board, Color, Move};

/// Gera todos os saltos sobre uma peça adversária adjacente para uma casa vazia.
pub fn generate_jumps(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();

    for piece in board.pieces_of(color) {
        for &(d_row, d_col) in directions(&piece) {
            let Some(over) = piece.square.offset(d_row, d_col) else { continue };
            let Some(victim) = board.piece_at(over) else { continue };
            if victim.color == color {
                continue;
            }
            if let Some(to) = over.offset(d_row, d_col) {
                if board.piece_at(to).is_none() {
                    moves.push(Move::jump(piece.square, to, victim));
                }
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Square;

    #[test]
    fn test_jump_records_captured_piece() {
        let board = Board::from_layout("......../......../......../......../...d..../....l.../......../........").unwrap();
        let jumps = generate_jumps(&board, Color::Light);
        assert_eq!(jumps.len(), 1);
        assert_eq!(jumps[0].from, Square::new(5, 4));
        assert_eq!(jumps[0].to, Square::new(3, 2));
        assert_eq!(jumps[0].captured.map(|p| p.square), Some(Square::new(4, 3)));
    }

    #[test]
    fn test_no_jump_over_own_piece_or_off_board() {
        let board = Board::from_layout("......../......../......../......../......../......../.d....../d.d.....").unwrap();
        assert!(generate_jumps(&board, Color::Dark).is_empty());
    }

    #[test]
    fn test_landing_square_must_be_empty() {
        let board = Board::from_layout("......../......../.d....../..l...../...l..../......../......../........").unwrap();
        assert!(generate_jumps(&board, Color::Dark).is_empty());
    }
}
