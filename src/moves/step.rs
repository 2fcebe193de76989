// Ficheiro: src/moves/step.rs
// Descrição: Lógica para gerar os lances simples (sem captura).

use super::directions;
use crate::core::{Board, Color, Move};

/// Gera todos os lances de um passo na diagonal para as peças de uma cor.
pub fn generate_steps(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(16); // Pre-aloca para reduzir realocações

    for piece in board.pieces_of(color) {
        for &(d_row, d_col) in directions(&piece) {
            if let Some(to) = piece.square.offset(d_row, d_col) {
                if board.piece_at(to).is_none() {
                    moves.push(Move::step(piece.square, to));
                }
            }
        }
    }
    moves
}
