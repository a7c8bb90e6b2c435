//! Typed entity identifiers and their generators.
//!
//! Every node, connection and segment carries an [`Id`] tagged with its
//! entity type, so a [`NodeId`] can never be passed where a [`SegmentId`] is
//! expected. Ids are allocated by an [`IdGenerator`] injected into the model,
//! which keeps entity creation deterministic in tests.
//!
//! Ids render as `<prefix>-<number>` (for example `node-3`) and parse back
//! from the same form, which is how hosts refer to entities in their events.

use std::{fmt, marker::PhantomData, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Marker trait for the entity kinds that own an id space.
pub trait EntityTag {
    /// Prefix used in the textual form of the id.
    const PREFIX: &'static str;
}

/// A stable identifier for one entity kind.
///
/// # Examples
///
/// ```
/// use netsketch_core::identifier::{NodeId, SegmentId};
///
/// let node = NodeId::from_raw(7);
/// assert_eq!(node.to_string(), "node-7");
/// assert_eq!("node-7".parse::<NodeId>().unwrap(), node);
/// assert!("segment-7".parse::<NodeId>().is_err());
/// # let _ = SegmentId::from_raw(1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Wraps a raw id value.
    pub fn from_raw(value: u64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Returns the raw id value.
    pub fn raw(self) -> u64 {
        self.value
    }
}

impl<T: EntityTag> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", T::PREFIX, self.value)
    }
}

impl<T: EntityTag> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(T::PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .ok_or_else(|| IdError::WrongPrefix {
                input: s.to_string(),
                expected: T::PREFIX,
            })?;
        let value = rest.parse::<u64>().map_err(|_| IdError::NotANumber {
            input: s.to_string(),
        })?;
        Ok(Self::from_raw(value))
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::from_raw)
    }
}

/// Errors produced when parsing the textual form of an id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("id `{input}` does not start with `{expected}-`")]
    WrongPrefix {
        input: String,
        expected: &'static str,
    },

    #[error("id `{input}` does not end with a number")]
    NotANumber { input: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeTag {}
impl EntityTag for NodeTag {
    const PREFIX: &'static str = "node";
}
pub type NodeId = Id<NodeTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConnectionTag {}
impl EntityTag for ConnectionTag {
    const PREFIX: &'static str = "connection";
}
pub type ConnectionId = Id<ConnectionTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SegmentTag {}
impl EntityTag for SegmentTag {
    const PREFIX: &'static str = "segment";
}
pub type SegmentId = Id<SegmentTag>;

/// Source of fresh raw id values.
///
/// Implementations must never hand out the same value twice during the
/// lifetime of the generator. Values are shared across all entity kinds.
pub trait IdGenerator: fmt::Debug {
    /// Returns the next unused raw value.
    fn next_raw(&mut self) -> u64;
}

/// Monotonic counter starting at 1.
///
/// # Examples
///
/// ```
/// use netsketch_core::identifier::{IdGenerator, SequentialIds};
///
/// let mut ids = SequentialIds::default();
/// assert_eq!(ids.next_raw(), 1);
/// assert_eq!(ids.next_raw(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Creates a generator whose first value is `start`.
    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_raw(&mut self) -> u64 {
        let value = self.next;
        self.next = self.next.saturating_add(1);
        value
    }
}
