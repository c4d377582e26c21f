//! Concrete games implementing `SearchableGame`.

pub mod tictactoe;
