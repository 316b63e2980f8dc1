//! Financial ledger aggregation.
//!
//! The derived view of a project's financial state: internal allocations plus
//! external fundings form the budget, approved transactions form the spend,
//! and the difference is the headline remaining balance. The computation is a
//! pure function over the latest snapshot of the three collections and is
//! recomputed whenever any one of them changes - never incrementally mutated.

use crate::entities::{allocation, funding, transaction};

/// Wire values for the transaction status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    /// Recorded but not yet counted towards spend
    Pending,
    /// Counted towards spend; the default at creation
    Approved,
    /// Explicitly excluded from spend
    Rejected,
}

impl TransactionStatus {
    /// The string stored in the status column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a stored status string, returning None for unknown values.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Expenditure categories with mutually exclusive detail fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendCategory {
    /// Staff salary payment (`staff_id` + `staff_name`)
    Salaries,
    /// Procurement spend (`procurement_type` + `procurement_details`)
    Procurement,
}

impl SpendCategory {
    /// The string stored in the category column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Salaries => "salaries",
            Self::Procurement => "procurement",
        }
    }
}

/// Derived financial state of one project at a consistent snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectStats {
    /// Sum of internal budget allocations
    pub allocated_budget: f64,
    /// Sum of external fundings
    pub total_funding: f64,
    /// `allocated_budget + total_funding`
    pub budget: f64,
    /// Sum of approved transaction amounts
    pub spent: f64,
    /// `budget - spent`; the headline financial health number
    pub remaining: f64,
}

/// How the budget headline should be presented. A zero budget is a distinct
/// state from an exhausted one; callers branch on this, never on `remaining`
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetState {
    /// No allocation or funding recorded yet
    Unallocated,
    /// Budget exists and money remains
    Available,
    /// Budget exists and is fully spent or overspent
    Exhausted,
}

impl ProjectStats {
    /// Classifies the snapshot for presentation.
    #[must_use]
    pub fn state(&self) -> BudgetState {
        if self.budget == 0.0 {
            BudgetState::Unallocated
        } else if self.remaining <= 0.0 {
            BudgetState::Exhausted
        } else {
            BudgetState::Available
        }
    }

    /// Budget usage as a percentage, clamped to [0, 100] for display.
    /// Zero-budget projects report 0 rather than dividing by zero.
    #[must_use]
    pub fn usage_percent(&self) -> f64 {
        if self.budget <= 0.0 {
            return 0.0;
        }
        ((self.spent / self.budget) * 100.0).clamp(0.0, 100.0)
    }
}

/// Computes the derived financial state from the latest snapshot of the three
/// collections. Pure: no side effects, no memoization, identical output for
/// identical snapshots. Pending and rejected transactions never count towards
/// spend.
#[must_use]
pub fn compute_stats(
    allocations: &[allocation::Model],
    fundings: &[funding::Model],
    transactions: &[transaction::Model],
) -> ProjectStats {
    let allocated_budget: f64 = allocations.iter().map(|a| a.amount).sum();
    let total_funding: f64 = fundings.iter().map(|f| f.amount).sum();
    let spent: f64 = transactions
        .iter()
        .filter(|t| t.status == TransactionStatus::Approved.as_str())
        .map(|t| t.amount)
        .sum();

    let budget = allocated_budget + total_funding;
    let remaining = budget - spent;

    ProjectStats {
        allocated_budget,
        total_funding,
        budget,
        spent,
        remaining,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{allocation_snapshot, funding_snapshot, transaction_snapshot};

    #[test]
    fn stats_sum_allocations_fundings_and_approved_spend() {
        let allocations = allocation_snapshot(&[1000.0]);
        let fundings = funding_snapshot(&[500.0]);
        let transactions =
            transaction_snapshot(&[(300.0, "approved"), (9999.0, "rejected")]);

        let stats = compute_stats(&allocations, &fundings, &transactions);

        assert_eq!(stats.allocated_budget, 1000.0);
        assert_eq!(stats.total_funding, 500.0);
        assert_eq!(stats.budget, 1500.0);
        assert_eq!(stats.spent, 300.0);
        assert_eq!(stats.remaining, 1200.0);
    }

    #[test]
    fn pending_transactions_do_not_count_towards_spend() {
        let transactions = transaction_snapshot(&[
            (100.0, "approved"),
            (50.0, "pending"),
            (75.0, "rejected"),
        ]);
        let stats = compute_stats(&[], &[], &transactions);
        assert_eq!(stats.spent, 100.0);
    }

    #[test]
    fn empty_snapshots_yield_zeroed_stats() {
        let stats = compute_stats(&[], &[], &[]);
        assert_eq!(stats.budget, 0.0);
        assert_eq!(stats.spent, 0.0);
        assert_eq!(stats.remaining, 0.0);
        assert_eq!(stats.state(), BudgetState::Unallocated);
    }

    #[test]
    fn zero_budget_is_distinct_from_exhausted_budget() {
        // Zero budget with spend recorded: still "unallocated", not "exhausted".
        let spent_without_budget =
            compute_stats(&[], &[], &transaction_snapshot(&[(10.0, "approved")]));
        assert_eq!(spent_without_budget.state(), BudgetState::Unallocated);

        // Positive budget fully consumed: "exhausted".
        let exhausted = compute_stats(
            &allocation_snapshot(&[100.0]),
            &[],
            &transaction_snapshot(&[(150.0, "approved")]),
        );
        assert_eq!(exhausted.state(), BudgetState::Exhausted);
        assert!(exhausted.remaining < 0.0);

        let available = compute_stats(&allocation_snapshot(&[100.0]), &[], &[]);
        assert_eq!(available.state(), BudgetState::Available);
    }

    #[test]
    fn compute_stats_is_idempotent() {
        let allocations = allocation_snapshot(&[250.0, 750.0]);
        let fundings = funding_snapshot(&[100.0]);
        let transactions = transaction_snapshot(&[(400.0, "approved")]);

        let first = compute_stats(&allocations, &fundings, &transactions);
        let second = compute_stats(&allocations, &fundings, &transactions);
        assert_eq!(first, second);
    }

    #[test]
    fn usage_percent_clamps_and_handles_zero_budget() {
        let over = compute_stats(
            &allocation_snapshot(&[100.0]),
            &[],
            &transaction_snapshot(&[(250.0, "approved")]),
        );
        assert_eq!(over.usage_percent(), 100.0);

        let none = compute_stats(&[], &[], &[]);
        assert_eq!(none.usage_percent(), 0.0);

        let half = compute_stats(
            &allocation_snapshot(&[100.0]),
            &[],
            &transaction_snapshot(&[(50.0, "approved")]),
        );
        assert_eq!(half.usage_percent(), 50.0);
    }

    #[test]
    fn status_round_trips_known_values_only() {
        assert_eq!(
            TransactionStatus::parse("approved"),
            Some(TransactionStatus::Approved)
        );
        assert_eq!(
            TransactionStatus::parse("pending"),
            Some(TransactionStatus::Pending)
        );
        assert_eq!(
            TransactionStatus::parse("rejected"),
            Some(TransactionStatus::Rejected)
        );
        assert_eq!(TransactionStatus::parse("archived"), None);
    }
}
