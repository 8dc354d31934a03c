//! Work accumulation and settlement.

use super::types::{CommissionEntry, ContractKind};

/// A working month: 20 days of 8 hours.
const DAYS_PER_MONTH: f64 = 20.0;
const HOURS_PER_DAY: u32 = 8;

/// Accumulates rendered work against a monthly rate and settles it
/// according to the contract.
///
/// Hours and commissions only accumulate; there is no way to un-log
/// work. [`payout`](WorkLedger::payout) is a pure read and can be
/// called at any point mid-accumulation.
///
/// # Examples
///
/// ```
/// use payrank::timesheet::{ContractKind, WorkLedger};
///
/// // A full week at an hourly contract derived from a 30000 monthly rate.
/// let mut ledger = WorkLedger::new(ContractKind::Hourly, 30_000.0);
/// for _ in 0..5 {
///     ledger.log_day();
/// }
/// assert_eq!(ledger.payout(), 7_500.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkLedger {
    contract: ContractKind,
    monthly_rate: f64,
    hours_rendered: u32,
    commissions: Vec<CommissionEntry>,
}

impl WorkLedger {
    /// Creates an empty ledger for the given contract and monthly rate.
    pub fn new(contract: ContractKind, monthly_rate: f64) -> Self {
        Self {
            contract,
            monthly_rate,
            hours_rendered: 0,
            commissions: Vec::new(),
        }
    }

    pub fn contract(&self) -> ContractKind {
        self.contract
    }

    pub fn monthly_rate(&self) -> f64 {
        self.monthly_rate
    }

    /// Total hours logged so far.
    pub fn hours_rendered(&self) -> u32 {
        self.hours_rendered
    }

    /// Whole days logged so far; partial days do not count.
    pub fn days_rendered(&self) -> u32 {
        self.hours_rendered / HOURS_PER_DAY
    }

    /// Commissions logged so far, in log order.
    pub fn commissions(&self) -> &[CommissionEntry] {
        &self.commissions
    }

    /// Logs rendered hours.
    pub fn log_hours(&mut self, hours: u32) {
        self.hours_rendered += hours;
    }

    /// Logs one standard 8-hour day.
    pub fn log_day(&mut self) {
        self.log_hours(HOURS_PER_DAY);
    }

    /// Logs a completed commission.
    pub fn log_commission(&mut self, entry: CommissionEntry) {
        self.commissions.push(entry);
    }

    /// Settles the ledger under its contract terms.
    pub fn payout(&self) -> f64 {
        match self.contract {
            ContractKind::Uncontracted => self.monthly_rate,
            ContractKind::Hourly => {
                let hourly_rate = self.monthly_rate / DAYS_PER_MONTH / HOURS_PER_DAY as f64;
                self.hours_rendered as f64 * hourly_rate
            }
            ContractKind::Daily => {
                let daily_rate = self.monthly_rate / DAYS_PER_MONTH;
                self.days_rendered() as f64 * daily_rate
            }
            ContractKind::Monthly => {
                if self.days_rendered() as f64 >= DAYS_PER_MONTH {
                    self.monthly_rate
                } else {
                    0.0
                }
            }
            ContractKind::PerCommission => self.commissions.iter().map(|c| c.rate()).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_contract_pays_per_hour() {
        // 30000 / 20 / 8 = 187.50 per hour
        let mut ledger = WorkLedger::new(ContractKind::Hourly, 30_000.0);
        for _ in 0..5 {
            ledger.log_day();
        }
        assert_eq!(ledger.hours_rendered(), 40);
        assert_eq!(ledger.payout(), 7_500.0);
    }

    #[test]
    fn daily_contract_pays_whole_days_only() {
        let mut ledger = WorkLedger::new(ContractKind::Daily, 25_000.0);
        ledger.log_day();
        ledger.log_day();
        assert_eq!(ledger.payout(), 2_500.0);

        // A partial third day earns nothing until completed
        ledger.log_hours(3);
        assert_eq!(ledger.days_rendered(), 2);
        assert_eq!(ledger.payout(), 2_500.0);
        ledger.log_hours(5);
        assert_eq!(ledger.payout(), 3_750.0);
    }

    #[test]
    fn monthly_contract_withholds_until_full_month() {
        let mut ledger = WorkLedger::new(ContractKind::Monthly, 20_000.0);
        ledger.log_day();
        ledger.log_day();
        assert_eq!(ledger.payout(), 0.0);

        for _ in 0..18 {
            ledger.log_day();
        }
        assert_eq!(ledger.days_rendered(), 20);
        assert_eq!(ledger.payout(), 20_000.0);
    }

    #[test]
    fn commission_contract_sums_entries_and_ignores_hours() {
        let mut ledger = WorkLedger::new(ContractKind::PerCommission, 15_000.0);
        ledger.log_commission(CommissionEntry::new("First Commission", 20_000.0));
        ledger.log_commission(CommissionEntry::new("Second Commission", 1_000.0));
        ledger.log_commission(CommissionEntry::new("Third Commission", 5_000.0));
        ledger.log_day();
        assert_eq!(ledger.payout(), 26_000.0);
    }

    #[test]
    fn commission_contract_with_no_entries_pays_nothing() {
        let ledger = WorkLedger::new(ContractKind::PerCommission, 15_000.0);
        assert_eq!(ledger.payout(), 0.0);
    }

    #[test]
    fn uncontracted_pays_the_monthly_rate_as_is() {
        let mut ledger = WorkLedger::new(ContractKind::Uncontracted, 12_345.0);
        assert_eq!(ledger.payout(), 12_345.0);
        ledger.log_day();
        assert_eq!(ledger.payout(), 12_345.0);
    }

    #[test]
    fn fresh_ledger_has_no_work() {
        let ledger = WorkLedger::new(ContractKind::Hourly, 30_000.0);
        assert_eq!(ledger.hours_rendered(), 0);
        assert_eq!(ledger.days_rendered(), 0);
        assert!(ledger.commissions().is_empty());
        assert_eq!(ledger.payout(), 0.0);
    }
}
