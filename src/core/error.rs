//! Tipos de erro da leitura do tabuleiro e da busca de lances

use super::types::Square;

/// Erros ao montar ou voltar a encher um tabuleiro
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// O layout não tem oito linhas
    #[error("Invalid layout: expected 8 rows, got {0}")]
    RowCount(usize),

    /// Uma linha do layout não tem oito casas
    #[error("Invalid layout: row {row} has {len} cells")]
    RowLength { row: usize, len: usize },

    /// Caractere de casa desconhecido
    #[error("Invalid piece: {0}")]
    InvalidPiece(char),

    /// Peça numa casa clara ou fora do tabuleiro
    #[error("Piece on unplayable square {0}")]
    UnplayableSquare(Square),

    /// Casa de origem do lance vazia
    #[error("No piece on {0}")]
    EmptySquare(Square),

    /// Duas peças na mesma casa
    #[error("Square {0} is already occupied")]
    Occupied(Square),
}

/// Erros do seletor de lances
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// O motor não tem lances legais na raiz: o jogo acabou para ele
    #[error("No legal moves available")]
    NoLegalMoves,
}

/// Erros nas partidas do motor contra si próprio
#[derive(thiserror::Error, Debug)]
pub enum ArenaError {
    /// Um lance do motor não pôde ser jogado
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Não foi possível criar o pool de threads
    #[error(transparent)]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Resultado das operações do tabuleiro
pub type BoardResult<T> = Result<T, BoardError>;
