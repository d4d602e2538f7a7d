//! Built-in financial tips, shown on their own and used by the simulated adviser.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinancialTip {
    pub title: &'static str,
    pub content: &'static str,
}

pub const FINANCIAL_TIPS: &[FinancialTip] = &[
    FinancialTip {
        title: "Emergency Fund",
        content: "Aim to save 3-6 months of living expenses in an easily accessible account for emergencies.",
    },
    FinancialTip {
        title: "Debt Repayment",
        content: "Consider using either the avalanche method (highest interest first) or snowball method (smallest balance first) for debt repayment.",
    },
    FinancialTip {
        title: "401(k) Match",
        content: "If your employer offers a 401(k) match, contribute at least enough to get the full match. It is essentially free money.",
    },
    FinancialTip {
        title: "Asset Allocation",
        content: "A common rule of thumb is to subtract your age from 110 to determine what percentage of your portfolio should be in stocks.",
    },
    FinancialTip {
        title: "Taxes & Retirement",
        content: "Consider using tax-advantaged accounts like IRAs and HSAs to reduce your tax burden while saving for the future.",
    },
];
