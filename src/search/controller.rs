// Ficheiro: src/search/controller.rs
// Descrição: Escolha do lance do jogador automático (busca ou lance aleatório).

use super::config::SearchConfig;
use super::evaluation::Evaluator;
use super::minimax::{SearchCounters, SearchOutcome, SearchSession};
use super::position::SearchBoard;
use crate::core::{Player, SearchError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Controla a geração dos lances do motor.
///
/// A dificuldade é a profundidade da busca em lances; 0 joga ao acaso.
/// Uma busca bloqueia o tabuleiro até terminar e deixa-o como o encontrou.
pub struct AiController<E, R = StdRng> {
    evaluator: E,
    config: SearchConfig,
    rng: R,
    last_counters: SearchCounters,
}

impl<E> AiController<E, StdRng> {
    pub fn new(evaluator: E, config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(evaluator, config, rng)
    }
}

impl<E, R: Rng> AiController<E, R> {
    pub fn with_rng(evaluator: E, config: SearchConfig, rng: R) -> Self {
        Self {
            evaluator,
            config,
            rng,
            last_counters: SearchCounters::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Contadores da última busca (zeros depois de um lance aleatório).
    pub fn last_counters(&self) -> SearchCounters {
        self.last_counters
    }

    /// Lance do motor para a dificuldade pedida.
    pub fn get_move<B>(&mut self, board: &mut B, difficulty: u32) -> Result<B::Move, SearchError>
    where
        B: SearchBoard,
        E: Evaluator<B>,
    {
        if difficulty == 0 {
            return self.random_move(board);
        }
        self.best_move(board, difficulty)
    }

    /// Lance uniforme entre os lances legais do motor.
    pub fn random_move<B: SearchBoard>(&mut self, board: &B) -> Result<B::Move, SearchError> {
        self.last_counters = SearchCounters::default();
        let moves = board.available_moves(Player::Ai);
        moves.choose(&mut self.rng).cloned().ok_or(SearchError::NoLegalMoves)
    }

    /// Primeiro lance com a melhor pontuação minimax.
    pub fn best_move<B>(&mut self, board: &mut B, depth: u32) -> Result<B::Move, SearchError>
    where
        B: SearchBoard,
        E: Evaluator<B>,
    {
        let outcome = self.search(board, depth);
        outcome
            .best()
            .map(|scored| scored.mv.clone())
            .ok_or(SearchError::NoLegalMoves)
    }

    /// Busca completa a partir da raiz; expõe as pontuações de todos os lances.
    pub fn search<B>(&mut self, board: &mut B, depth: u32) -> SearchOutcome<B::Move>
    where
        B: SearchBoard,
        E: Evaluator<B>,
    {
        let session = SearchSession::new(&self.evaluator, depth, self.config.bounds_update);
        let outcome = session.run(board);
        self.last_counters = outcome.counters;

        for (i, scored) in outcome.successors.iter().enumerate() {
            log::trace!("root move {} scored {}", i, scored.score);
        }
        log::debug!(
            "search depth {} score {} static {} dynamic {} prunings {}",
            depth,
            outcome.score,
            outcome.counters.static_evaluations,
            outcome.counters.dynamic_evaluations,
            outcome.counters.prunings
        );

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Move, Score, Square};
    use crate::search::PieceCountEvaluator;

    fn controller() -> AiController<PieceCountEvaluator> {
        AiController::new(PieceCountEvaluator, SearchConfig::default().with_seed(17))
    }

    #[test]
    fn test_depth_one_prefers_the_capture() {
        // Sem captura obrigatória a escura em (2,1) pode saltar a clara em (3,2)
        // ou avançar para (3,0). A clara em (7,6) só serve para ter resposta.
        let layout = "......../......../.d....../..l...../......../......../......../......l.";
        let mut board = Board::from_layout(layout).unwrap().with_forced_capture(false);
        let before = board.clone();
        assert_eq!(Board::available_moves(&board, Player::Ai).len(), 2);

        let mv = controller().get_move(&mut board, 1).unwrap();

        assert!(mv.is_capture());
        assert_eq!(mv.to, Square::new(4, 3));
        assert_eq!(board, before);
    }

    #[test]
    fn test_depth_one_avoids_exposing_a_piece() {
        // Avançar para (3,2) deixa a clara em (4,3) capturar; (3,0) é seguro.
        let layout = "......../......../.d....../......../...l..../......../......../........";
        let mut board = Board::from_layout(layout).unwrap();

        let mv = controller().get_move(&mut board, 1).unwrap();

        assert_eq!(mv, Move::step(Square::new(2, 1), Square::new(3, 0)));
    }

    #[test]
    fn test_random_move_with_single_option() {
        let mut board = Board::from_layout(".d....../l......./......../......../......../......../......../........").unwrap();
        let only = Board::available_moves(&board, Player::Ai);
        assert_eq!(only.len(), 1);

        let mut ai = controller();
        for _ in 0..100 {
            assert_eq!(ai.get_move(&mut board, 0).unwrap(), only[0]);
        }
        assert_eq!(ai.last_counters(), SearchCounters::default());
    }

    #[test]
    fn test_random_move_is_not_stuck_on_first() {
        let mut board = Board::new();
        let moves = Board::available_moves(&board, Player::Ai);
        let mut ai = controller();
        let picked: std::collections::HashSet<Move> = (0..200).map(|_| ai.get_move(&mut board, 0).unwrap()).collect();
        assert!(picked.len() > 1);
        assert!(picked.iter().all(|m| moves.contains(m)));
    }

    #[test]
    fn test_same_seed_same_random_moves() {
        let mut board = Board::new();
        let mut a = controller();
        let mut b = controller();
        for _ in 0..20 {
            assert_eq!(a.get_move(&mut board, 0), b.get_move(&mut board, 0));
        }
    }

    #[test]
    fn test_no_legal_moves_at_root() {
        let mut board = Board::from_layout("......../......../......../......../......../......../.l....../........").unwrap();
        let mut ai = controller();
        assert_eq!(ai.get_move(&mut board, 0), Err(SearchError::NoLegalMoves));
        assert_eq!(ai.get_move(&mut board, 3), Err(SearchError::NoLegalMoves));
    }

    #[test]
    fn test_search_is_idempotent() {
        let mut board = Board::new();
        let before = board.clone();
        let mut ai = controller();

        let first = ai.get_move(&mut board, 4).unwrap();
        let first_counters = ai.last_counters();
        let second = ai.get_move(&mut board, 4).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_counters, ai.last_counters());
        assert!(first_counters.dynamic_evaluations > 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_scored_moves_match_root_moves() {
        let mut board = Board::new();
        let root = Board::available_moves(&board, Player::Ai);
        let outcome = controller().search(&mut board, 3);
        let scored: Vec<Move> = outcome.successors.iter().map(|s| s.mv).collect();
        assert_eq!(scored, root);
    }

    #[test]
    fn test_dominant_move_triggers_pruning() {
        // A captura vem primeiro e a primeira resposta ao passo já a refuta.
        let layout = "......../......../.d....../..l...../......../......../......../......l.";
        let mut board = Board::from_layout(layout).unwrap().with_forced_capture(false);
        let mut ai = controller();
        ai.get_move(&mut board, 1).unwrap();
        assert!(ai.last_counters().prunings > 0);
    }

    #[test]
    fn test_maximal_scores_keep_every_root_move() {
        let mut board = Board::new();
        let root = Board::available_moves(&board, Player::Ai);
        let mut ai = AiController::new(|_: &Board| Score::MAX, SearchConfig::default());
        let outcome = ai.search(&mut board, 1);
        let scored: Vec<Move> = outcome.successors.iter().map(|s| s.mv).collect();
        assert_eq!(scored, root);
        assert!(outcome.successors.iter().all(|s| s.score == Score::MAX));
        assert_eq!(ai.best_move(&mut board, 1).unwrap(), root[0]);
    }

    #[test]
    fn test_single_ply_search_never_prunes() {
        let mut board = Board::new();
        let mut ai = controller();
        ai.search(&mut board, 0);
        assert_eq!(ai.last_counters().prunings, 0);
        assert_eq!(ai.last_counters().static_evaluations, 7);
    }
}
