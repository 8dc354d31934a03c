//! The insertion-ordered roster.

use super::rank::RankOrder;

/// Error returned when a maximum is requested from an empty roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("roster is empty: no maximal record exists")]
pub struct EmptyRosterError;

/// An insertion-ordered container with on-demand sorted traversals.
///
/// Records are appended with [`add`](Roster::add) and traversed either
/// in insertion order ([`iter`](Roster::iter)) or sorted under a
/// ranking rule ([`iter_by`](Roster::iter_by)). Sorted traversals are
/// computed from the current contents at call time and never cached:
/// each call is a fresh, independent pass that reflects any records
/// added since the previous one.
///
/// Duplicates are allowed. The roster imposes no constraints on its
/// records beyond what the ordering passed to a query requires.
///
/// # Examples
///
/// ```
/// use payrank::roster::{Employee, RankRule, Roster};
///
/// let mut roster = Roster::new();
/// roster.add(Employee::salaried("Glenn", "Quagmire", 50_000.0));
/// roster.add(Employee::commission("Peter", "Griffin", 15_000.0));
/// roster.add(Employee::daily_wage("Joe", "Swanson", 850.0));
///
/// let by_payout: Vec<_> = roster
///     .iter_by(&RankRule::ByPayout)
///     .map(|e| e.first_name())
///     .collect();
/// assert_eq!(by_payout, ["Peter", "Joe", "Glenn"]);
///
/// let top = roster.top_by(&RankRule::ByPayout)?;
/// assert_eq!(top.first_name(), "Glenn");
/// # Ok::<(), payrank::roster::EmptyRosterError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Roster<T> {
    entries: Vec<T>,
}

impl<T> Roster<T> {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a record. Duplicates are allowed; cannot fail.
    pub fn add(&mut self, record: T) {
        self.entries.push(record);
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no records have been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Traverses records in insertion order.
    ///
    /// Each call starts a fresh traversal over the then-current
    /// contents; two calls without an intervening [`add`](Roster::add)
    /// yield identical sequences.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Traverses records sorted ascending under `order`.
    ///
    /// The ordering is computed at call time from the current contents,
    /// not cached. The sort is stable, so records that still compare
    /// equal after the rule's tie-break keep their insertion order.
    pub fn iter_by<'a, O: RankOrder<T>>(&'a self, order: &O) -> impl Iterator<Item = &'a T> {
        let mut sorted: Vec<&T> = self.entries.iter().collect();
        sorted.sort_by(|a, b| order.compare(a, b));
        sorted.into_iter()
    }

    /// Returns the maximal record under `order` — the record that
    /// [`iter_by`](Roster::iter_by) would yield last.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyRosterError`] if the roster holds no records.
    pub fn top_by<O: RankOrder<T>>(&self, order: &O) -> Result<&T, EmptyRosterError> {
        self.entries
            .iter()
            .max_by(|a, b| order.compare(a, b))
            .ok_or(EmptyRosterError)
    }
}

impl<'a, T> IntoIterator for &'a Roster<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    /// Insertion-order traversal, same as [`Roster::iter`].
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Roster<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
