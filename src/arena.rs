// Ficheiro: src/arena.rs
// Descrição: Partidas do motor contra si próprio, várias em paralelo.

use crate::core::*;
use crate::search::{AiController, BoardEvaluator, SearchConfig};
use rayon::prelude::*;

/// Definições de um encontro entre duas dificuldades.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub dark_difficulty: u32,
    pub light_difficulty: u32,
    /// Lances (de ambos os lados) antes de declarar empate
    pub max_plies: usize,
    pub forced_capture: bool,
    pub search: SearchConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            dark_difficulty: 2,
            light_difficulty: 2,
            max_plies: 200,
            forced_capture: true,
            search: SearchConfig::default(),
        }
    }
}

/// Resultado de uma partida
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// `None` quando se chega ao limite de lances
    pub winner: Option<Color>,
    pub moves: Vec<Move>,
    pub final_layout: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub dark_wins: usize,
    pub light_wins: usize,
    pub draws: usize,
}

impl MatchSummary {
    fn record(mut self, game: &GameRecord) -> Self {
        match game.winner {
            Some(Color::Dark) => self.dark_wins += 1,
            Some(Color::Light) => self.light_wins += 1,
            None => self.draws += 1,
        }
        self
    }

    pub fn games(&self) -> usize {
        self.dark_wins + self.light_wins + self.draws
    }
}

/// Joga uma partida completa a partir da posição inicial.
///
/// O motor joga sempre com as escuras, por isso o lado claro procura no
/// tabuleiro invertido e o lance é invertido de volta antes de ser jogado.
pub fn play_game(config: &MatchConfig, seed: Option<u64>) -> BoardResult<GameRecord> {
    let search = SearchConfig { seed, ..config.search.clone() };
    let evaluator: BoardEvaluator = search.evaluator();
    let light_search = SearchConfig { seed: seed.map(|s| s ^ 0x9e37_79b9), ..search.clone() };
    let mut dark = AiController::new(evaluator, search);
    let mut light = AiController::new(evaluator, light_search);

    let mut board = Board::new().with_forced_capture(config.forced_capture);
    let mut to_move = Color::Dark;

    while board.history().len() < config.max_plies {
        let choice = match to_move {
            Color::Dark => dark.get_move(&mut board, config.dark_difficulty),
            Color::Light => {
                let mut view = board.flipped();
                light.get_move(&mut view, config.light_difficulty).map(|mv| mv.flipped())
            }
        };

        let mv = match choice {
            Ok(mv) => mv,
            Err(SearchError::NoLegalMoves) => {
                log::debug!("{:?} has no moves after {} plies", to_move, board.history().len());
                return Ok(finish(&board, Some(!to_move)));
            }
        };

        board.make_move(&mv, false)?;
        to_move = !to_move;
    }

    Ok(finish(&board, None))
}

fn finish(board: &Board, winner: Option<Color>) -> GameRecord {
    GameRecord {
        winner,
        moves: board.history().to_vec(),
        final_layout: board.to_layout(),
    }
}

/// Joga `games` partidas independentes numa pool de `threads` threads.
///
/// Cada partida tem o seu próprio tabuleiro; a busca dentro de cada uma continua sequencial.
pub fn run_match(config: &MatchConfig, games: usize, threads: usize) -> Result<MatchSummary, ArenaError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.clamp(1, num_cpus::get().max(1)))
        .build()?;

    let records: Vec<GameRecord> = pool.install(|| {
        (0..games)
            .into_par_iter()
            .map(|i| play_game(config, config.search.seed.map(|s| s.wrapping_add(i as u64))))
            .collect::<BoardResult<Vec<_>>>()
    })?;

    let summary = records.iter().fold(MatchSummary::default(), |acc, game| acc.record(game));
    log::info!(
        "match {} games: dark {} light {} draws {}",
        summary.games(),
        summary.dark_wins,
        summary.light_wins,
        summary.draws
    );
    Ok(summary)
}
