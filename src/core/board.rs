// Ficheiro: src/core/board.rs
// Descrição: Módulo que contém a struct Board e os seus métodos principais.

use super::error::{BoardError, BoardResult};
use super::types::*;
use crate::moves;

// O tabuleiro: grelha 8x8 de casas e o histórico dos lances reais.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],

    // Só lances reais entram aqui; lances de teste da busca não.
    history: Vec<Move>,

    // Regra da captura obrigatória (ligada por omissão).
    forced_capture: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Tabuleiro sem peças.
    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            history: Vec::new(),
            forced_capture: true,
        }
    }

    /// Posição inicial padrão: escuras nas linhas 0..=2, claras nas linhas 5..=7.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for row in 0..BOARD_SIZE {
            let color = match row {
                0..=2 => Color::Dark,
                5..=7 => Color::Light,
                _ => continue,
            };
            for col in 0..BOARD_SIZE {
                let sq = Square::new(row, col);
                if sq.is_playable() {
                    board.cells[row as usize][col as usize] = Some(Piece::man(color, sq));
                }
            }
        }
        board
    }

    /// Cria um tabuleiro a partir de um layout textual.
    ///
    /// Oito linhas separadas por `/`, a primeira é a linha 0. Cada casa é
    /// `.` (vazia), `d`/`D` (pedra/dama escura) ou `l`/`L` (pedra/dama clara).
    pub fn from_layout(layout: &str) -> BoardResult<Self> {
        let rows: Vec<&str> = layout.trim().split('/').map(str::trim).collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(BoardError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, cells) in rows.iter().enumerate() {
            let len = cells.chars().count();
            if len != BOARD_SIZE as usize {
                return Err(BoardError::RowLength { row, len });
            }

            for (col, ch) in cells.chars().enumerate() {
                let sq = Square::new(row as u8, col as u8);
                let piece = match ch {
                    '.' => continue,
                    'd' => Piece::man(Color::Dark, sq),
                    'D' => Piece::king(Color::Dark, sq),
                    'l' => Piece::man(Color::Light, sq),
                    'L' => Piece::king(Color::Light, sq),
                    _ => return Err(BoardError::InvalidPiece(ch)),
                };
                board.place(piece)?;
            }
        }

        Ok(board)
    }

    /// Inverso de `from_layout`.
    pub fn to_layout(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', |p| p.to_char()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Liga ou desliga a captura obrigatória.
    pub fn with_forced_capture(mut self, forced: bool) -> Self {
        self.forced_capture = forced;
        self
    }

    pub fn forced_capture(&self) -> bool {
        self.forced_capture
    }

    /// Coloca uma peça na sua casa.
    pub fn place(&mut self, piece: Piece) -> BoardResult<()> {
        let sq = piece.square;
        if !sq.is_playable() {
            return Err(BoardError::UnplayableSquare(sq));
        }
        let cell = &mut self.cells[sq.row as usize][sq.col as usize];
        if cell.is_some() {
            return Err(BoardError::Occupied(sq));
        }
        *cell = Some(piece);
        Ok(())
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if sq.row >= BOARD_SIZE || sq.col >= BOARD_SIZE {
            return None;
        }
        self.cells[sq.row as usize][sq.col as usize]
    }

    /// Todas as peças, por linha e depois por coluna.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flat_map(|row| row.iter().flatten().copied())
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    /// Lances reais jogados até agora.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Executa um lance, atualizando o estado do tabuleiro.
    ///
    /// Remove a peça capturada e promove a pedra que chega à última linha.
    /// Lances de teste (`speculative`) não entram no histórico.
    pub fn make_move(&mut self, mv: &Move, speculative: bool) -> BoardResult<()> {
        for sq in [mv.from, mv.to] {
            if !sq.is_playable() {
                return Err(BoardError::UnplayableSquare(sq));
            }
        }

        let Some(mut piece) = self.cells[mv.from.row as usize][mv.from.col as usize].take() else {
            return Err(BoardError::EmptySquare(mv.from));
        };
        if self.piece_at(mv.to).is_some() {
            self.cells[mv.from.row as usize][mv.from.col as usize] = Some(piece);
            return Err(BoardError::Occupied(mv.to));
        }

        if let Some(captured) = mv.captured {
            self.empty_tile(captured.square);
        }

        piece.square = mv.to;
        if mv.to.row == piece.color.promotion_row() {
            piece.king = true;
        }
        self.cells[mv.to.row as usize][mv.to.col as usize] = Some(piece);

        if !speculative {
            log::info!("{:?} plays {}", piece.color, mv);
            self.history.push(*mv);
        }
        Ok(())
    }

    /// Cópia de todas as peças, usada para repor o tabuleiro depois de um lance de teste.
    pub fn clone_pieces(&self) -> Vec<Piece> {
        self.pieces().collect()
    }

    /// Esvazia todas as casas (o histórico fica).
    pub fn clear(&mut self) {
        self.cells = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    }

    /// Volta a encher o tabuleiro com peças previamente copiadas.
    pub fn fill_with_existing(&mut self, pieces: &[Piece]) -> BoardResult<()> {
        for &piece in pieces {
            self.place(piece)?;
        }
        Ok(())
    }

    pub fn empty_tile(&mut self, sq: Square) {
        if sq.row < BOARD_SIZE && sq.col < BOARD_SIZE {
            self.cells[sq.row as usize][sq.col as usize] = None;
        }
    }

    /// Acerta a ocupação de uma casa com o que a cópia diz: a peça copiada ou vazia.
    pub fn reconcile_tile(&mut self, sq: Square, pieces: &[Piece]) {
        match pieces.iter().find(|p| p.square == sq) {
            Some(&piece) => self.cells[sq.row as usize][sq.col as usize] = Some(piece),
            None => self.empty_tile(sq),
        }
    }

    /// Lances legais para o jogador indicado.
    pub fn available_moves(&self, player: Player) -> Vec<Move> {
        moves::generate_moves(self, player.color())
    }

    /// Diferença de material: peças escuras menos peças claras.
    pub fn heuristics(&self) -> Score {
        self.count(Color::Dark) as Score - self.count(Color::Light) as Score
    }

    /// O mesmo tabuleiro visto pelo outro lado: cores trocadas, rodado 180 graus.
    pub fn flipped(&self) -> Board {
        let mut board = Board::empty().with_forced_capture(self.forced_capture);
        for piece in self.pieces() {
            let p = piece.flipped();
            board.cells[p.square.row as usize][p.square.col as usize] = Some(p);
        }
        board
    }
}
