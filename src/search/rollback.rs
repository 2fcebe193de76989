// Ficheiro: src/search/rollback.rs
// Descrição: Lance de teste com reposição garantida do tabuleiro.

use super::position::SearchBoard;
use std::ops::{Deref, DerefMut};

/// Lance aplicado ao tabuleiro partilhado enquanto este valor viver.
///
/// Guarda a cópia das peças antes de aplicar o lance e repõe-na no `Drop`,
/// por isso o tabuleiro volta ao estado anterior em qualquer saída,
/// incluindo um `panic` a meio da recursão.
pub struct SpeculativeMove<'a, B: SearchBoard> {
    board: &'a mut B,
    snapshot: B::Snapshot,
    mv: B::Move,
}

impl<'a, B: SearchBoard> SpeculativeMove<'a, B> {
    pub fn apply(board: &'a mut B, mv: B::Move) -> Self {
        let snapshot = board.snapshot_pieces();
        board.apply_move(&mv, true);
        SpeculativeMove { board, snapshot, mv }
    }

    pub fn mv(&self) -> &B::Move {
        &self.mv
    }
}

impl<B: SearchBoard> Deref for SpeculativeMove<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        &*self.board
    }
}

impl<B: SearchBoard> DerefMut for SpeculativeMove<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        &mut *self.board
    }
}

impl<B: SearchBoard> Drop for SpeculativeMove<'_, B> {
    fn drop(&mut self) {
        self.board.restore_pieces(&self.snapshot, &self.mv);
    }
}
