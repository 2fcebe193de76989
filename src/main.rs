// Jogador automático de damas - linha de comandos

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use damas::arena::{self, MatchConfig};
use damas::search::{AiController, BoundsUpdate, SearchConfig};
use damas::*;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Seed for the random player (difficulty 0)
    #[arg(long)]
    seed: Option<u64>,

    /// King weight for the material evaluator (a man weighs 2); omit to count pieces
    #[arg(long)]
    king_weight: Option<Score>,

    /// Alpha/beta update rule
    #[arg(long, value_enum, default_value_t = Bounds::Canonical)]
    bounds: Bounds,

    /// Disable the mandatory capture rule
    #[arg(long)]
    optional_capture: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Bounds {
    Canonical,
    Legacy,
}

impl From<Bounds> for BoundsUpdate {
    fn from(bounds: Bounds) -> Self {
        match bounds {
            Bounds::Canonical => BoundsUpdate::Canonical,
            Bounds::Legacy => BoundsUpdate::Legacy,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the engine move (dark side) for a position
    Move {
        /// Search depth in plies; 0 plays a random legal move
        #[arg(short = 'l', long, default_value_t = 3)]
        difficulty: u32,

        /// Board layout, eight `/`-separated rows starting at row 0
        #[arg(long)]
        layout: Option<String>,
    },
    /// Play one game between two difficulties and print every move
    Play {
        #[arg(long, default_value_t = 3)]
        dark: u32,
        #[arg(long, default_value_t = 1)]
        light: u32,
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
    },
    /// Play many independent games in parallel
    Arena {
        #[arg(long, default_value_t = 3)]
        dark: u32,
        #[arg(long, default_value_t = 1)]
        light: u32,
        #[arg(long, default_value_t = 32)]
        games: usize,
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
        /// Worker threads (defaults to the number of CPUs)
        #[arg(long)]
        threads: Option<usize>,
    },
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(args) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut search = SearchConfig::default().with_bounds_update(args.bounds.into());
    search.seed = args.seed;
    search.king_weight = args.king_weight;

    match args.command {
        Command::Move { difficulty, layout } => {
            let board = match layout {
                Some(layout) => Board::from_layout(&layout).context("invalid --layout")?,
                None => Board::new(),
            };
            let board = board.with_forced_capture(!args.optional_capture);
            show_move(board, difficulty, search)
        }
        Command::Play { dark, light, max_plies } => {
            let config = MatchConfig {
                dark_difficulty: dark,
                light_difficulty: light,
                max_plies,
                forced_capture: !args.optional_capture,
                search: search.clone(),
            };
            let record = arena::play_game(&config, search.seed)?;
            for (ply, mv) in record.moves.iter().enumerate() {
                let side = if ply % 2 == 0 { "escuras" } else { "claras" };
                println!("{:>4}. {:<8} {}", ply + 1, side, mv);
            }
            match record.winner {
                Some(color) => println!("🏆 Vencedor: {:?} em {} lances", color, record.moves.len()),
                None => println!("🤝 Empate por limite de {} lances", max_plies),
            }
            println!("Posição final: {}", record.final_layout);
            Ok(())
        }
        Command::Arena { dark, light, games, max_plies, threads } => {
            let config = MatchConfig {
                dark_difficulty: dark,
                light_difficulty: light,
                max_plies,
                forced_capture: !args.optional_capture,
                search,
            };
            let start = Instant::now();
            let summary = arena::run_match(&config, games, threads.unwrap_or_else(num_cpus::get))?;
            println!(
                "escuras (d{}) {} | claras (d{}) {} | empates {} | {:.2}s",
                dark,
                summary.dark_wins,
                light,
                summary.light_wins,
                summary.draws,
                start.elapsed().as_secs_f64()
            );
            Ok(())
        }
    }
}

fn show_move(mut board: Board, difficulty: u32, search: SearchConfig) -> Result<()> {
    let evaluator = search.evaluator();
    let mut ai = AiController::new(evaluator, search);

    println!("📋 {}", board.to_layout());
    let start = Instant::now();
    let mv = ai.get_move(&mut board, difficulty)?;
    let elapsed = start.elapsed();
    let counters = ai.last_counters();

    println!("✅ Melhor lance: {}", mv);
    println!("   Dificuldade: {}", difficulty);
    println!("   Avaliações estáticas: {}", counters.static_evaluations);
    println!("   Avaliações dinâmicas: {}", counters.dynamic_evaluations);
    println!("   Cortes: {}", counters.prunings);
    println!("   Tempo: {:.2}ms", elapsed.as_secs_f64() * 1000.0);
    Ok(())
}
