//! Background search worker.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::core::{PlayerId, SearchError, SessionError};
use crate::minimax::MinimaxSearch;
use crate::rules::SearchableGame;

/// An outstanding search running on its own thread.
///
/// The worker owns a copy of the game, so the live game stays free to
/// change while it runs. The result arrives exactly once.
pub struct SearchHandle<M> {
    mover: PlayerId,
    receiver: Receiver<Result<M, SearchError>>,
    worker: Option<JoinHandle<()>>,
}

impl<M: Send + 'static> SearchHandle<M> {
    /// Start searching `game` on a new thread.
    pub fn spawn<G>(game: G, mut search: MinimaxSearch) -> Self
    where
        G: SearchableGame<Move = M> + 'static,
    {
        let mover = game.next_player();
        let (sender, receiver) = mpsc::channel();

        let worker = thread::spawn(move || {
            let result = search.find_best_move(&game);
            // The session may have been reset and dropped the receiver.
            if sender.send(result).is_err() {
                debug!("search result dropped, nobody is waiting");
            }
        });

        Self {
            mover,
            receiver,
            worker: Some(worker),
        }
    }

    /// The player this search is choosing a move for.
    #[must_use]
    pub fn mover(&self) -> PlayerId {
        self.mover
    }

    /// The result, if the worker has finished.
    pub fn try_result(&mut self) -> Option<Result<M, SessionError>> {
        match self.receiver.try_recv() {
            Ok(result) => {
                self.join();
                Some(result.map_err(SessionError::from))
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.join();
                Some(Err(SessionError::WorkerLost))
            }
        }
    }

    /// Block until the worker delivers its result.
    pub fn wait(mut self) -> Result<M, SessionError> {
        let result = self.receiver.recv().map_err(|_| SessionError::WorkerLost);
        self.join();
        result?.map_err(SessionError::from)
    }

    fn join(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                debug!("search worker panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, TicTacToeGame};
    use crate::minimax::SearchConfig;

    fn search() -> MinimaxSearch {
        MinimaxSearch::new(SearchConfig::default().unlimited().with_seed(4))
    }

    #[test]
    fn test_wait_delivers_move() {
        let game = TicTacToeGame::from_rows(&[vec![1, 1, 0], vec![2, 2, 0], vec![0, 0, 0]]);
        let handle = SearchHandle::spawn(game, search());

        assert_eq!(handle.mover(), PlayerId::One);
        assert_eq!(handle.wait().unwrap(), Move::new(PlayerId::One, 0, 2));
    }

    #[test]
    fn test_try_result_eventually_ready() {
        let game = TicTacToeGame::from_rows(&[vec![1, 1, 0], vec![2, 2, 0], vec![0, 0, 0]]);
        let mut handle = SearchHandle::spawn(game, search());

        let result = loop {
            if let Some(result) = handle.try_result() {
                break result;
            }
            thread::yield_now();
        };
        assert_eq!(result.unwrap(), Move::new(PlayerId::One, 0, 2));
    }

    #[test]
    fn test_search_error_is_forwarded() {
        let mut game = TicTacToeGame::new();
        game.reset(1).unwrap();
        for (player, row, column) in [
            (PlayerId::One, 0, 0),
            (PlayerId::Two, 1, 0),
            (PlayerId::One, 0, 1),
            (PlayerId::Two, 1, 1),
            (PlayerId::One, 0, 2),
        ] {
            game.make_move(Move::new(player, row, column)).unwrap();
        }

        let handle = SearchHandle::spawn(game, search());
        assert_eq!(
            handle.wait(),
            Err(SessionError::Search(SearchError::NoAvailableMoves))
        );
    }
}
