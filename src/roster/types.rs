//! Payroll record types.

/// How an employee's pay is computed, with the variant-specific rate.
///
/// A closed sum type: adding a compensation scheme means adding a
/// variant here and handling it in [`Employee::payout`], which the
/// compiler enforces exhaustively.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PayBasis {
    /// Fixed monthly salary.
    Salaried {
        /// Salary per period.
        monthly_rate: f64,
    },

    /// Commission-based pay.
    Commission {
        /// Commission earnings per period.
        rate: f64,
    },

    /// Paid per working day.
    DailyWage {
        /// Earnings per working day.
        daily_rate: f64,
    },
}

/// The compensation scheme tag, kept as a directly comparable value.
///
/// The derived `Ord` follows declaration order, which is the ordinal
/// order used by kind-based ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmployeeKind {
    Salaried,
    Commission,
    DailyWage,
}

/// An immutable payroll record.
///
/// Built fully at construction time; no field can be reassigned
/// afterwards. Reads go through accessors.
///
/// # Examples
///
/// ```
/// use payrank::roster::{Employee, EmployeeKind};
///
/// let e = Employee::daily_wage("Joe", "Swanson", 850.0);
/// assert_eq!(e.kind(), EmployeeKind::DailyWage);
/// assert_eq!(e.payout(1), 17_000.0); // 20 working days per period
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Employee {
    first_name: String,
    last_name: String,
    basis: PayBasis,
}

impl Employee {
    /// Creates a record with an explicit pay basis.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, basis: PayBasis) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            basis,
        }
    }

    /// Creates a salaried record.
    pub fn salaried(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        monthly_rate: f64,
    ) -> Self {
        Self::new(first_name, last_name, PayBasis::Salaried { monthly_rate })
    }

    /// Creates a commission-based record.
    pub fn commission(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        rate: f64,
    ) -> Self {
        Self::new(first_name, last_name, PayBasis::Commission { rate })
    }

    /// Creates a daily-wage record.
    pub fn daily_wage(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        daily_rate: f64,
    ) -> Self {
        Self::new(first_name, last_name, PayBasis::DailyWage { daily_rate })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the pay basis, rate included.
    pub fn basis(&self) -> PayBasis {
        self.basis
    }

    /// Returns the compensation scheme tag.
    pub fn kind(&self) -> EmployeeKind {
        match self.basis {
            PayBasis::Salaried { .. } => EmployeeKind::Salaried,
            PayBasis::Commission { .. } => EmployeeKind::Commission,
            PayBasis::DailyWage { .. } => EmployeeKind::DailyWage,
        }
    }

    /// Computes total pay over `periods` pay periods.
    ///
    /// Pure function of the record and the period count:
    ///
    /// - Salaried: `monthly_rate * periods`
    /// - Commission: `rate * periods`
    /// - DailyWage: `daily_rate * periods * 20` (a period is assumed to
    ///   contain 20 working days)
    pub fn payout(&self, periods: u32) -> f64 {
        let periods = periods as f64;
        match self.basis {
            PayBasis::Salaried { monthly_rate } => monthly_rate * periods,
            PayBasis::Commission { rate } => rate * periods,
            PayBasis::DailyWage { daily_rate } => daily_rate * periods * 20.0,
        }
    }
}
