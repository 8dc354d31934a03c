//! Contract-based payout over logged work.
//!
//! A [`WorkLedger`] accumulates rendered hours and commission entries
//! against a single monthly rate, then settles pay according to the
//! contract: hourly and daily contracts derive their rates from the
//! monthly one (a month is 20 working days of 8 hours), a monthly
//! contract pays only once a full month has been rendered, and a
//! commission contract ignores hours entirely.

mod ledger;
mod types;

pub use ledger::WorkLedger;
pub use types::{CommissionEntry, ContractKind};
