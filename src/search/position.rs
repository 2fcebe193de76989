// Ficheiro: src/search/position.rs
// Descrição: Contrato entre a busca e o tabuleiro partilhado.

use crate::core::{Board, Move, Piece, Player};

/// O que a busca precisa do tabuleiro.
///
/// A busca nunca guarda uma cópia própria da posição: aplica lances de teste
/// na instância partilhada e repõe-na a partir de uma cópia das peças.
/// Aplicar um lance e depois repor a cópia tem de devolver uma posição
/// observavelmente igual (mesmas peças, cores e casas).
pub trait SearchBoard {
    type Move: Clone;
    type Snapshot;

    /// Lances legais do jogador, numa ordem determinística.
    fn available_moves(&self, player: Player) -> Vec<Self::Move>;

    /// Aplica o lance. `speculative` marca lances de teste da busca.
    fn apply_move(&mut self, mv: &Self::Move, speculative: bool);

    /// Cópia de todas as peças.
    fn snapshot_pieces(&self) -> Self::Snapshot;

    /// Esvazia o tabuleiro, volta a enchê-lo com a cópia e acerta as casas
    /// tocadas pelo lance desfeito.
    fn restore_pieces(&mut self, snapshot: &Self::Snapshot, undone: &Self::Move);
}

impl SearchBoard for Board {
    type Move = Move;
    type Snapshot = Vec<Piece>;

    fn available_moves(&self, player: Player) -> Vec<Move> {
        Board::available_moves(self, player)
    }

    /// # Panics
    ///
    /// Se o lance não vier da enumeração deste tabuleiro (casa de origem vazia
    /// ou destino ocupado). A busca não pode continuar com a posição corrompida.
    fn apply_move(&mut self, mv: &Move, speculative: bool) {
        if let Err(e) = self.make_move(mv, speculative) {
            panic!("illegal move {} applied during search: {}", mv, e);
        }
    }

    fn snapshot_pieces(&self) -> Vec<Piece> {
        self.clone_pieces()
    }

    /// # Panics
    ///
    /// Se a cópia não couber num tabuleiro vazio (duas peças na mesma casa).
    fn restore_pieces(&mut self, snapshot: &Vec<Piece>, undone: &Move) {
        self.clear();
        if let Err(e) = self.fill_with_existing(snapshot) {
            panic!("board snapshot could not be restored: {}", e);
        }
        // A cópia é a fonte de verdade, incluindo a casa da peça capturada.
        if let Some(captured) = undone.captured {
            self.reconcile_tile(captured.square, snapshot);
        }
    }
}
