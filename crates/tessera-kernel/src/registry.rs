//! Ordered trigger registry.
//!
//! A [`TriggerRegistry`] stores an ordered list of triggers and walks it for
//! an input under a [`ReturnPolicy`]. It knows nothing about rendering: the
//! pipeline is a thin contract layer that delegates to it one-to-one.

use crate::error::ArgumentError;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// How [`TriggerRegistry::execute`] treats matches.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ReturnPolicy {
    /// Stop at the first non-empty result, in registration order.
    #[default]
    First,

    /// Scan every entry; a later non-empty result overrides an earlier one.
    #[serde(alias = "all")]
    Last,
}

impl std::fmt::Display for ReturnPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Last => write!(f, "last"),
        }
    }
}

impl std::str::FromStr for ReturnPolicy {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(Self::First),
            "last" | "all" => Ok(Self::Last),
            _ => Err(ArgumentError::UnknownPolicy(s.to_string())),
        }
    }
}

/// A single entry of a [`TriggerRegistry`].
pub trait Trigger<I: ?Sized> {
    type Output;
    type Error;

    /// Run against `input`. `Ok(None)` means "does not apply".
    fn fire(&self, input: &I) -> Result<Option<Self::Output>, Self::Error>;

    /// Identity comparison used by [`TriggerRegistry::remove_entry`].
    fn same(&self, other: &Self) -> bool;

    /// Name used in diagnostics.
    fn label(&self) -> &str {
        "anonymous"
    }
}

/// Ordered list of triggers plus a return policy.
#[derive(Debug, Clone)]
pub struct TriggerRegistry<T> {
    entries: Vec<T>,
    return_policy: ReturnPolicy,
}

impl<T> Default for TriggerRegistry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            return_policy: ReturnPolicy::default(),
        }
    }
}

impl<T> TriggerRegistry<T> {
    pub fn new(return_policy: ReturnPolicy) -> Self {
        Self {
            entries: Vec::new(),
            return_policy,
        }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn return_policy(&self) -> ReturnPolicy {
        self.return_policy
    }

    pub fn set_return_policy(&mut self, policy: ReturnPolicy) {
        self.return_policy = policy;
    }

    /// Insert at `position`, or append when `None`.
    ///
    /// A position past the end is rejected and the list is left unchanged.
    pub fn add_entry(&mut self, entry: T, position: Option<usize>) -> Result<bool, ArgumentError> {
        match position {
            None => self.entries.push(entry),
            Some(index) if index <= self.entries.len() => self.entries.insert(index, entry),
            Some(index) => {
                return Err(ArgumentError::PositionOutOfRange {
                    position: index,
                    len: self.entries.len(),
                });
            }
        }
        Ok(true)
    }

    /// Replace the whole list, keeping the given order.
    pub fn set_entries(&mut self, entries: impl IntoIterator<Item = T>) {
        self.entries = entries.into_iter().collect();
    }

    /// Empty the list, but only when `confirm` is true.
    pub fn clear_entries(&mut self, confirm: bool) -> bool {
        if confirm {
            self.entries.clear();
        }
        confirm
    }

    /// Remove the first entry that is `same` as `entry`.
    pub fn remove_entry<I: ?Sized>(&mut self, entry: &T) -> bool
    where
        T: Trigger<I>,
    {
        match self.entries.iter().position(|e| e.same(entry)) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Walk the entries in order under the current return policy.
    ///
    /// Errors from an entry abort the walk and are returned unchanged.
    pub fn execute<I: ?Sized>(&self, input: &I) -> Result<Option<T::Output>, T::Error>
    where
        T: Trigger<I>,
    {
        let mut result = None;
        for (index, entry) in self.entries.iter().enumerate() {
            let Some(output) = entry.fire(input)? else {
                trace!(index, trigger = entry.label(), "no match");
                continue;
            };
            trace!(index, trigger = entry.label(), "matched");
            result = Some(output);
            if self.return_policy == ReturnPolicy::First {
                break;
            }
        }
        Ok(result)
    }
}
