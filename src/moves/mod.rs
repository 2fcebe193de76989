// Ficheiro: src/moves/mod.rs
// Descrição: Declara os submódulos para a geração de lances e junta o resultado.

pub mod jump;
pub mod step;

use crate::core::{Board, Color, Move, Piece};

/// Direções diagonais que uma peça pode seguir: pedras só avançam, damas vão para todos os lados.
pub(crate) fn directions(piece: &Piece) -> &'static [(i8, i8)] {
    const DARK_MAN: [(i8, i8); 2] = [(1, -1), (1, 1)];
    const LIGHT_MAN: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
    const KING: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

    match (piece.king, piece.color) {
        (true, _) => &KING,
        (false, Color::Dark) => &DARK_MAN,
        (false, Color::Light) => &LIGHT_MAN,
    }
}

/// Gera os lances legais de uma cor: primeiro os saltos, depois os passos.
///
/// Com captura obrigatória, se existir algum salto só os saltos são devolvidos.
/// Cadeias de saltos não são geradas, cada lance captura no máximo uma peça.
pub fn generate_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = jump::generate_jumps(board, color);
    if moves.is_empty() || !board.forced_capture() {
        moves.extend(step::generate_steps(board, color));
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, Square};

    #[test]
    fn test_initial_position_move_counts() {
        let board = Board::new();
        assert_eq!(generate_moves(&board, Color::Dark).len(), 7);
        assert_eq!(generate_moves(&board, Color::Light).len(), 7);
        assert_eq!(board.available_moves(Player::Ai).len(), 7);
    }

    #[test]
    fn test_capture_is_mandatory() {
        // Escura em (2,1) pode avançar para (3,0) ou saltar a clara em (3,2).
        let board = Board::from_layout("......../......../.d....../..l...../......../......../......../........").unwrap();
        let moves = generate_moves(&board, Color::Dark);
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_capture());
        assert_eq!(moves[0].to, Square::new(4, 3));
    }

    #[test]
    fn test_optional_capture_keeps_steps() {
        let board = Board::from_layout("......../......../.d....../..l...../......../......../......../........")
            .unwrap()
            .with_forced_capture(false);
        let moves = generate_moves(&board, Color::Dark);
        assert_eq!(moves.len(), 2);
        assert!(moves[0].is_capture());
        assert_eq!(moves[1], Move::step(Square::new(2, 1), Square::new(3, 0)));
    }

    #[test]
    fn test_enumeration_order_is_stable() {
        let board = Board::new();
        let first = generate_moves(&board, Color::Dark);
        let second = generate_moves(&board, Color::Dark);
        assert_eq!(first, second);
        assert_eq!(first[0], Move::step(Square::new(2, 1), Square::new(3, 0)));
    }

    #[test]
    fn test_no_pieces_no_moves() {
        let board = Board::from_layout("......../......../......../......../......../......../.l....../........").unwrap();
        assert!(generate_moves(&board, Color::Dark).is_empty());
        assert_eq!(generate_moves(&board, Color::Light).len(), 2);
    }
}
