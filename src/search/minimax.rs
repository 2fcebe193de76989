use super::evaluation::Evaluator;
use super::position::SearchBoard;
use super::rollback::SpeculativeMove;
use crate::core::{Player, Score};

/// Limites da janela completa.
pub const SCORE_MIN: Score = Score::MIN;
pub const SCORE_MAX: Score = Score::MAX;

/// Contadores de uma busca, repostos a zero em cada invocação
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchCounters {
    /// Avaliações estáticas (folhas e nós sem lances)
    pub static_evaluations: u64,
    /// Lances tentados em nós internos
    pub dynamic_evaluations: u64,
    /// Cortes alpha-beta
    pub prunings: u64,
}

/// Lance da raiz com a pontuação minimax da posição a que leva
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMove<M> {
    pub mv: M,
    pub score: Score,
}

/// Como alpha/beta são atualizados depois de cada filho.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsUpdate {
    /// `alpha = max(alpha, best)` / `beta = min(beta, best)`.
    #[default]
    Canonical,
    /// `alpha = max(child, best)` / `beta = min(child, best)`: ignora o limite
    /// herdado. Dá o mesmo valor na raiz, com menos cortes.
    Legacy,
}

/// Resultado de uma busca completa a partir da raiz
#[derive(Debug, Clone)]
pub struct SearchOutcome<M> {
    pub score: Score,
    pub successors: Vec<ScoredMove<M>>,
    pub counters: SearchCounters,
}

impl<M> SearchOutcome<M> {
    /// Primeiro lance com a pontuação máxima, na ordem de enumeração.
    pub fn best(&self) -> Option<&ScoredMove<M>> {
        let mut best: Option<&ScoredMove<M>> = None;
        for scored in &self.successors {
            if best.map_or(true, |b| scored.score > b.score) {
                best = Some(scored);
            }
        }
        best
    }
}

/// Estado de uma única busca minimax com cortes alpha-beta.
///
/// Os contadores e as pontuações da raiz vivem aqui e não no controlador,
/// por isso cada busca começa do zero.
pub struct SearchSession<'e, B: SearchBoard, E> {
    evaluator: &'e E,
    max_depth: u32,
    bounds: BoundsUpdate,
    counters: SearchCounters,
    successors: Vec<ScoredMove<B::Move>>,
}

impl<'e, B, E> SearchSession<'e, B, E>
where
    B: SearchBoard,
    E: Evaluator<B>,
{
    pub fn new(evaluator: &'e E, max_depth: u32, bounds: BoundsUpdate) -> Self {
        Self {
            evaluator,
            max_depth,
            bounds,
            counters: SearchCounters::default(),
            successors: Vec::new(),
        }
    }

    /// Busca a partir da raiz com o motor a jogar e a janela completa.
    pub fn run(mut self, board: &mut B) -> SearchOutcome<B::Move> {
        let score = self.minimax(board, 0, Player::Ai, SCORE_MIN, SCORE_MAX);
        SearchOutcome {
            score,
            successors: self.successors,
            counters: self.counters,
        }
    }

    pub fn counters(&self) -> SearchCounters {
        self.counters
    }

    /// Minimax com cortes alpha-beta sobre o tabuleiro partilhado.
    ///
    /// Cada lance é aplicado como teste e desfeito antes de passar ao irmão
    /// seguinte; na profundidade 0 guarda a pontuação de cada lance da raiz.
    pub fn minimax(&mut self, board: &mut B, depth: u32, player: Player, mut alpha: Score, mut beta: Score) -> Score {
        if depth > self.max_depth {
            self.counters.static_evaluations += 1;
            return self.evaluator.evaluate(board);
        }

        let moves = board.available_moves(player);
        if moves.is_empty() {
            // Sem lances: posição neutra, não é vitória nem derrota
            self.counters.static_evaluations += 1;
            return 0;
        }

        let mut best_score = if player.is_maximizing() { SCORE_MIN } else { SCORE_MAX };

        for mv in moves {
            self.counters.dynamic_evaluations += 1;

            let score = {
                let mut trial = SpeculativeMove::apply(&mut *board, mv.clone());
                self.minimax(&mut trial, depth + 1, !player, alpha, beta)
            };

            match player {
                Player::Ai => {
                    best_score = best_score.max(score);
                    alpha = match self.bounds {
                        BoundsUpdate::Canonical => alpha.max(best_score),
                        BoundsUpdate::Legacy => score.max(best_score),
                    };
                    if depth == 0 {
                        self.successors.push(ScoredMove { mv, score });
                    }
                }
                Player::Human => {
                    best_score = best_score.min(score);
                    beta = match self.bounds {
                        BoundsUpdate::Canonical => beta.min(best_score),
                        BoundsUpdate::Legacy => score.min(best_score),
                    };
                }
            }

            // Na raiz todos os lances são pontuados, mesmo com a janela fechada
            if depth > 0 && alpha >= beta {
                self.counters.prunings += 1;
                break;
            }
        }

        best_score
    }
}
