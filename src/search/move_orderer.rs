use crate::board::action::Action;
use crate::board::rules::legal_actions;
use crate::board::Grid;

/// Returns the legal actions of `grid` in visiting order: ascending by row, then by
/// column. Ties between equally good actions are broken by this order, so it must stay
/// deterministic.
pub fn ordered_actions(grid: &Grid) -> Vec<Action> {
    let mut actions: Vec<Action> = legal_actions(grid).into_iter().collect();
    actions.sort_unstable();
    actions
}
