//! Ranking rules and the ordering seam.

use std::cmp::Ordering;

use super::types::Employee;

/// A total order over records, supplied per query.
///
/// Implementors must produce a total order: every pair of values
/// compares, and the result is consistent across calls. Sorted
/// traversals and maximum queries both go through this seam, so a rule
/// that is not total would make their results disagree.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use payrank::roster::RankOrder;
///
/// struct ByLen;
///
/// impl RankOrder<String> for ByLen {
///     fn name(&self) -> &str { "ByLen" }
///     fn compare(&self, a: &String, b: &String) -> Ordering {
///         a.len().cmp(&b.len())
///     }
/// }
/// ```
pub trait RankOrder<T> {
    /// Returns the name of this ordering.
    fn name(&self) -> &str;

    /// Compares two records under this ordering.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Built-in ranking rules for [`Employee`] records.
///
/// Each rule selects a primary key; ties on the primary key break by
/// last name, lexically. The rule is a plain value handed to each
/// query, never stored on the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankRule {
    /// Single-period payout, ascending. `f64::total_cmp` keeps the
    /// order total even for pathological rates.
    ByPayout,

    /// Compensation scheme, in ordinal order.
    ByKind,

    /// First name, lexically.
    ByName,
}

impl RankRule {
    fn primary(&self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            RankRule::ByPayout => a.payout(1).total_cmp(&b.payout(1)),
            RankRule::ByKind => a.kind().cmp(&b.kind()),
            RankRule::ByName => a.first_name().cmp(b.first_name()),
        }
    }
}

impl RankOrder<Employee> for RankRule {
    fn name(&self) -> &str {
        match self {
            RankRule::ByPayout => "ByPayout",
            RankRule::ByKind => "ByKind",
            RankRule::ByName => "ByName",
        }
    }

    fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        self.primary(a, b)
            .then_with(|| a.last_name().cmp(b.last_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_payout_orders_numerically() {
        let low = Employee::commission("Peter", "Griffin", 15_000.0);
        let high = Employee::salaried("Glenn", "Quagmire", 50_000.0);
        assert_eq!(RankRule::ByPayout.compare(&low, &high), Ordering::Less);
        assert_eq!(RankRule::ByPayout.compare(&high, &low), Ordering::Greater);
    }

    #[test]
    fn by_payout_compares_effective_payout_not_raw_rate() {
        // 850/day over 20 working days out-earns a 15000 commission
        let daily = Employee::daily_wage("Joe", "Swanson", 850.0);
        let commission = Employee::commission("Peter", "Griffin", 15_000.0);
        assert_eq!(
            RankRule::ByPayout.compare(&commission, &daily),
            Ordering::Less
        );
    }

    #[test]
    fn equal_payout_breaks_tie_by_last_name() {
        let stinson = Employee::commission("Barney", "Stinson", 40_000.0);
        let anderson = Employee::commission("Thomas", "Anderson", 40_000.0);
        assert_eq!(
            RankRule::ByPayout.compare(&anderson, &stinson),
            Ordering::Less
        );
        assert_eq!(
            RankRule::ByPayout.compare(&stinson, &anderson),
            Ordering::Greater
        );
    }

    #[test]
    fn by_kind_follows_ordinal_order() {
        let s = Employee::salaried("A", "A", 1.0);
        let c = Employee::commission("B", "B", 1.0);
        let d = Employee::daily_wage("C", "C", 1.0);
        assert_eq!(RankRule::ByKind.compare(&s, &c), Ordering::Less);
        assert_eq!(RankRule::ByKind.compare(&c, &d), Ordering::Less);
    }

    #[test]
    fn by_kind_ties_break_by_last_name() {
        let a = Employee::salaried("Zed", "Adams", 90_000.0);
        let b = Employee::salaried("Amy", "Zhou", 10_000.0);
        assert_eq!(RankRule::ByKind.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn by_name_uses_first_name_then_last_name() {
        let a = Employee::salaried("Glenn", "Quagmire", 1.0);
        let b = Employee::commission("Peter", "Griffin", 1.0);
        assert_eq!(RankRule::ByName.compare(&a, &b), Ordering::Less);

        let g1 = Employee::salaried("Glenn", "Adams", 1.0);
        let g2 = Employee::salaried("Glenn", "Quagmire", 1.0);
        assert_eq!(RankRule::ByName.compare(&g1, &g2), Ordering::Less);
    }

    #[test]
    fn identical_records_compare_equal() {
        let a = Employee::commission("Barney", "Stinson", 40_000.0);
        let b = a.clone();
        assert_eq!(RankRule::ByPayout.compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn rule_names() {
        assert_eq!(RankRule::ByPayout.name(), "ByPayout");
        assert_eq!(RankRule::ByKind.name(), "ByKind");
        assert_eq!(RankRule::ByName.name(), "ByName");
    }
}
