use super::evaluation::{BoardEvaluator, MaterialEvaluator, PieceCountEvaluator};
use super::minimax::BoundsUpdate;
use crate::core::Score;

/// Configuração do jogador automático
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Atualização de alpha/beta depois de cada filho
    pub bounds_update: BoundsUpdate,
    /// Semente do gerador usado pela dificuldade 0; `None` usa entropia do sistema
    pub seed: Option<u64>,
    /// Peso de uma dama contra uma pedra (peso 2). `None` conta só peças.
    pub king_weight: Option<Score>,
}

impl SearchConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_bounds_update(mut self, bounds_update: BoundsUpdate) -> Self {
        self.bounds_update = bounds_update;
        self
    }

    pub fn with_king_weight(mut self, king_weight: Score) -> Self {
        self.king_weight = Some(king_weight);
        self
    }

    /// Avaliador do tabuleiro de damas para esta configuração.
    pub fn evaluator(&self) -> BoardEvaluator {
        match self.king_weight {
            Some(king) => BoardEvaluator::Material(MaterialEvaluator::new(MaterialEvaluator::default().man, king)),
            None => BoardEvaluator::PieceCount(PieceCountEvaluator),
        }
    }
}
