//! Insertion-ordered payroll rosters with pluggable on-demand orderings.
//!
//! Provides a small set of pure in-memory payroll primitives:
//!
//! - **Roster**: An insertion-ordered container of records that can be
//!   traversed in the order records were added, or in any of several
//!   total orders computed fresh at query time from a pluggable
//!   ranking rule.
//! - **Ranking rules**: First-class rule values (by payout, by employee
//!   kind, by name) with a deterministic last-name tie-break, composed
//!   through the generic [`RankOrder`](roster::RankOrder) seam.
//! - **Timesheet**: Contract-based payout over logged work — hourly,
//!   daily, monthly, and per-commission contracts derived from a single
//!   monthly rate.
//!
//! # Architecture
//!
//! Everything here is synchronous, single-threaded, and free of I/O.
//! Records are immutable after construction; orderings are computed on
//! demand and never cached, so every traversal reflects the roster's
//! then-current contents.

pub mod roster;
pub mod timesheet;
