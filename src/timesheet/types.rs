//! Contract and commission types.

/// How logged work converts into pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContractKind {
    /// No contract terms; the monthly rate is paid as-is.
    #[default]
    Uncontracted,

    /// Paid per rendered hour, at `monthly_rate / 20 / 8`.
    Hourly,

    /// Paid per whole rendered day (8 hours), at `monthly_rate / 20`.
    Daily,

    /// Paid the full monthly rate once 20 whole days are rendered,
    /// nothing before that.
    Monthly,

    /// Paid the sum of logged commissions; hours are ignored.
    PerCommission,
}

/// A single completed commission.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommissionEntry {
    name: String,
    rate: f64,
}

impl CommissionEntry {
    pub fn new(name: impl Into<String>, rate: f64) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}
