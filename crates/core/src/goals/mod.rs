//! Goals module - savings goals and their progress derivations.

mod goals_model;
mod goals_progress;

pub use goals_model::{parse_deadline, FinancialGoal, NewGoal};
pub use goals_progress::{
    goal_progress, monthly_contribution, months_remaining, progress_percent, GoalProgress,
    MonthlyContribution,
};
