//! Pure progress derivations over a goal. Nothing here is persisted.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::goals_model::FinancialGoal;
use crate::constants::{CONTRIBUTION_DECIMAL_PLACES, MAX_PROGRESS_PERCENT};
use crate::utils::round_to;

/// What the owner needs to set aside each month to hit a goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "amount", rename_all = "camelCase")]
pub enum MonthlyContribution {
    /// The deadline falls in the current calendar month or earlier.
    DeadlinePassed,
    /// Nothing is left to save.
    GoalReached,
    /// Remaining amount spread over the remaining months.
    PerMonth(f64),
}

impl fmt::Display for MonthlyContribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthlyContribution::DeadlinePassed => write!(f, "Deadline passed"),
            MonthlyContribution::GoalReached => write!(f, "Goal reached!"),
            MonthlyContribution::PerMonth(amount) => write!(f, "${:.2}/month", amount),
        }
    }
}

/// Progress view of a goal as of a given day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub percent: i64,
    pub months_remaining: i32,
    pub contribution: MonthlyContribution,
}

/// Rounded completion percentage, capped at 100. There is no lower bound.
///
/// A zero target counts as fully reached.
pub fn progress_percent(current_amount: f64, target_amount: f64) -> i64 {
    if target_amount == 0.0 {
        return MAX_PROGRESS_PERCENT;
    }
    let percent = (current_amount / target_amount * 100.0).round() as i64;
    percent.min(MAX_PROGRESS_PERCENT)
}

/// Calendar-month difference between `deadline` and `today`, ignoring the day of month.
pub fn months_remaining(deadline: NaiveDate, today: NaiveDate) -> i32 {
    let deadline_index = deadline.year() * 12 + deadline.month0() as i32;
    let today_index = today.year() * 12 + today.month0() as i32;
    deadline_index - today_index
}

pub fn monthly_contribution(goal: &FinancialGoal, today: NaiveDate) -> MonthlyContribution {
    let months = months_remaining(goal.deadline, today);
    if months <= 0 {
        return MonthlyContribution::DeadlinePassed;
    }

    let amount_remaining = goal.target_amount - goal.current_amount;
    if amount_remaining <= 0.0 {
        return MonthlyContribution::GoalReached;
    }

    MonthlyContribution::PerMonth(round_to(
        amount_remaining / months as f64,
        CONTRIBUTION_DECIMAL_PLACES,
    ))
}

pub fn goal_progress(goal: &FinancialGoal, today: NaiveDate) -> GoalProgress {
    GoalProgress {
        percent: progress_percent(goal.current_amount, goal.target_amount),
        months_remaining: months_remaining(goal.deadline, today),
        contribution: monthly_contribution(goal, today),
    }
}

impl FinancialGoal {
    pub fn progress_percent(&self) -> i64 {
        progress_percent(self.current_amount, self.target_amount)
    }

    pub fn progress_on(&self, today: NaiveDate) -> GoalProgress {
        goal_progress(self, today)
    }
}
