//! Transaction categories
//!
//! Expense and income each have their own closed set of categories. The
//! first entry of each set is the default the dialog resets to.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::transaction_type::TransactionType;

/// A spending or income category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    // Expense
    Groceries,
    Dining,
    Transport,
    Housing,
    Utilities,
    Shopping,
    Entertainment,
    Health,
    Travel,
    Education,
    OtherExpense,

    // Income
    SalaryFullTime,
    SalaryPartTime,
    CasualWages,
    Bonus,
    Investment,
    GovernmentBenefit,
    OtherIncome,
}

const EXPENSE_CATEGORIES: &[Category] = &[
    Category::Groceries,
    Category::Dining,
    Category::Transport,
    Category::Housing,
    Category::Utilities,
    Category::Shopping,
    Category::Entertainment,
    Category::Health,
    Category::Travel,
    Category::Education,
    Category::OtherExpense,
];

const INCOME_CATEGORIES: &[Category] = &[
    Category::SalaryFullTime,
    Category::SalaryPartTime,
    Category::CasualWages,
    Category::Bonus,
    Category::Investment,
    Category::GovernmentBenefit,
    Category::OtherIncome,
];

impl Category {
    /// All categories offered for a transaction type, in display order
    pub fn for_type(kind: TransactionType) -> &'static [Category] {
        match kind {
            TransactionType::Expense => EXPENSE_CATEGORIES,
            TransactionType::Income => INCOME_CATEGORIES,
        }
    }

    /// The category a fresh draft starts with
    pub fn default_for(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Expense => Self::Groceries,
            TransactionType::Income => Self::SalaryFullTime,
        }
    }

    /// Which set this category belongs to
    pub fn transaction_type(self) -> TransactionType {
        if INCOME_CATEGORIES.contains(&self) {
            TransactionType::Income
        } else {
            TransactionType::Expense
        }
    }

    /// Position within its own set
    pub fn index(self) -> usize {
        Self::for_type(self.transaction_type())
            .iter()
            .position(|c| *c == self)
            .unwrap_or(0)
    }

    /// Next category in the same set, wrapping around
    pub fn next(self) -> Self {
        let set = Self::for_type(self.transaction_type());
        set[(self.index() + 1) % set.len()]
    }

    /// Previous category in the same set, wrapping around
    pub fn prev(self) -> Self {
        let set = Self::for_type(self.transaction_type());
        set[(self.index() + set.len() - 1) % set.len()]
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Dining => "Dining Out",
            Self::Transport => "Transport",
            Self::Housing => "Rent & Housing",
            Self::Utilities => "Utilities",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Education => "Education",
            Self::OtherExpense => "Other",
            Self::SalaryFullTime => "Salary (Full-time)",
            Self::SalaryPartTime => "Salary (Part-time)",
            Self::CasualWages => "Casual Wages",
            Self::Bonus => "Bonus",
            Self::Investment => "Investment",
            Self::GovernmentBenefit => "Government Benefit",
            Self::OtherIncome => "Other Income",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_belong_to_their_set() {
        for kind in [TransactionType::Expense, TransactionType::Income] {
            let default = Category::default_for(kind);
            assert_eq!(default.transaction_type(), kind);
            assert_eq!(Category::for_type(kind)[0], default);
        }
    }

    #[test]
    fn test_sets_are_disjoint() {
        for cat in Category::for_type(TransactionType::Expense) {
            assert!(!Category::for_type(TransactionType::Income).contains(cat));
        }
    }

    #[test]
    fn test_cycling_wraps_within_set() {
        assert_eq!(Category::Groceries.prev(), Category::OtherExpense);
        assert_eq!(Category::OtherExpense.next(), Category::Groceries);
        assert_eq!(Category::OtherIncome.next(), Category::SalaryFullTime);
        assert_eq!(Category::SalaryFullTime.next(), Category::SalaryPartTime);
    }
}
