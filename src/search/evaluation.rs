use crate::core::*;

/// Avaliação estática de uma posição, do ponto de vista de quem maximiza.
///
/// Tem de ser determinística e sem efeitos: a validade dos cortes alpha-beta depende disso.
pub trait Evaluator<B> {
    fn evaluate(&self, board: &B) -> Score;
}

impl<B, F> Evaluator<B> for F
where
    F: Fn(&B) -> Score,
{
    fn evaluate(&self, board: &B) -> Score {
        self(board)
    }
}

/// Diferença simples de número de peças (escuras menos claras).
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceCountEvaluator;

impl Evaluator<Board> for PieceCountEvaluator {
    fn evaluate(&self, board: &Board) -> Score {
        board.heuristics()
    }
}

/// Material com pesos diferentes para pedras e damas
#[derive(Debug, Clone, Copy)]
pub struct MaterialEvaluator {
    pub man: Score,
    pub king: Score,
}

impl MaterialEvaluator {
    pub fn new(man: Score, king: Score) -> Self {
        Self { man, king }
    }

    fn value(&self, piece: &Piece) -> Score {
        if piece.king { self.king } else { self.man }
    }
}

impl Default for MaterialEvaluator {
    fn default() -> Self {
        Self::new(2, 3)
    }
}

impl Evaluator<Board> for MaterialEvaluator {
    fn evaluate(&self, board: &Board) -> Score {
        board.pieces().fold(0, |score, p| match p.color {
            Color::Dark => score + self.value(&p),
            Color::Light => score - self.value(&p),
        })
    }
}

/// Avaliador escolhido pela configuração
#[derive(Debug, Clone, Copy)]
pub enum BoardEvaluator {
    PieceCount(PieceCountEvaluator),
    Material(MaterialEvaluator),
}

impl Evaluator<Board> for BoardEvaluator {
    fn evaluate(&self, board: &Board) -> Score {
        match self {
            BoardEvaluator::PieceCount(e) => e.evaluate(board),
            BoardEvaluator::Material(e) => e.evaluate(board),
        }
    }
}
