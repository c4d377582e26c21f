//! Move outcomes and best-outcome selection.

use crate::core::{GameRng, PlayerId};

/// Value of a move as far as the search could see.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// The given player wins with best play.
    Win(PlayerId),
    /// Best play ends in a draw.
    Draw,
    /// Search was cut off; heuristic value from the perspective of the
    /// player who made the move at the cutoff.
    Unknown(f64),
}

/// Index of the best outcome for `actor`, or `None` for an empty slice.
///
/// Preference: wins for `actor` > highest heuristic value > draws >
/// losses. Ties inside the winning bucket are broken uniformly at random.
/// A single outcome is returned without drawing from `rng`.
///
/// ```
/// use game_ai::core::{GameRng, PlayerId};
/// use game_ai::minimax::{select_best, MoveOutcome};
///
/// let outcomes = [
///     MoveOutcome::Draw,
///     MoveOutcome::Win(PlayerId::Two),
///     MoveOutcome::Win(PlayerId::One),
/// ];
/// let mut rng = GameRng::new(0);
/// assert_eq!(select_best(&outcomes, PlayerId::One, &mut rng), Some(2));
/// assert_eq!(select_best(&outcomes, PlayerId::Two, &mut rng), Some(1));
/// ```
pub fn select_best(outcomes: &[MoveOutcome], actor: PlayerId, rng: &mut GameRng) -> Option<usize> {
    if outcomes.len() <= 1 {
        return if outcomes.is_empty() { None } else { Some(0) };
    }

    let mut wins = Vec::new();
    let mut draws = Vec::new();
    let mut losses = Vec::new();
    let mut high_values = Vec::new();
    let mut highest: Option<f64> = None;

    for (idx, outcome) in outcomes.iter().enumerate() {
        match *outcome {
            MoveOutcome::Win(player) if player == actor => wins.push(idx),
            MoveOutcome::Win(_) => losses.push(idx),
            MoveOutcome::Draw => draws.push(idx),
            MoveOutcome::Unknown(value) => match highest {
                Some(best) if value == best => high_values.push(idx),
                Some(best) if value < best || value.is_nan() => {}
                _ => {
                    highest = Some(value);
                    high_values.clear();
                    high_values.push(idx);
                }
            },
        }
    }

    let best = [wins, high_values, draws, losses]
        .into_iter()
        .find(|bucket| !bucket.is_empty())?;

    if best.len() == 1 {
        Some(best[0])
    } else {
        rng.choose(&best).copied()
    }
}
