//! Kind registry: builds sensors and actuators from a type identifier and a
//! positional argument list.
//!
//! Every kind registers one builder per arity it supports under a stable
//! string key. Resolution picks the builder whose arity equals the number of
//! supplied arguments; a builder returns `None` when the argument *types* do
//! not fit its signature. Unknown identifiers, unmatched arities and
//! mismatching types all resolve to `Ok(None)`: callers probing an
//! unsupported kind get a negative answer, not an error.
//!
//! The registry is filled once at startup and only read afterwards, so a
//! shared reference can be used from any number of threads.

use std::collections::HashMap;
use std::fmt;

use crate::error::HearthError;

/// Minimum number of positional arguments any builder accepts.
pub const MIN_ARGS: usize = 4;

/// A kind-specific constructor.
///
/// Returns `None` when `args` do not have the types the kind expects, and
/// `Some(Err(_))` when they do but the kind's own validation fails.
pub type BuildFn<T, A> = fn(&[A]) -> Option<Result<T, HearthError>>;

struct Builder<T, A> {
    arity: usize,
    build: BuildFn<T, A>,
}

/// Mapping from type identifier to arity-specific builders producing `T` from `A` arguments.
pub struct Registry<T, A> {
    builders: HashMap<String, Vec<Builder<T, A>>>,
}

impl<T, A> Default for Registry<T, A> {
    fn default() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }
}

impl<T, A> fmt::Debug for Registry<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (type_id, builders) in &self.builders {
            let arities: Vec<usize> = builders.iter().map(|b| b.arity).collect();
            map.entry(type_id, &arities);
        }
        map.finish()
    }
}

impl<T, A> Registry<T, A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `build` for `type_id` when called with exactly `arity` arguments.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::DuplicateBuilder`] if `(type_id, arity)` is
    /// already taken, and [`HearthError::InvalidArgumentCount`] if `arity` is
    /// below [`MIN_ARGS`].
    pub fn register(
        &mut self,
        type_id: impl Into<String>,
        arity: usize,
        build: BuildFn<T, A>,
    ) -> Result<(), HearthError> {
        if arity < MIN_ARGS {
            return Err(HearthError::InvalidArgumentCount { min: MIN_ARGS });
        }
        let type_id = type_id.into();
        let builders = self.builders.entry(type_id.clone()).or_default();
        if builders.iter().any(|b| b.arity == arity) {
            return Err(HearthError::DuplicateBuilder { type_id, arity });
        }
        builders.push(Builder { arity, build });
        Ok(())
    }

    /// Build a kind instance.
    ///
    /// Returns `Ok(None)` when `type_id` is unknown, or no builder matches the
    /// number or types of `args`.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::InvalidArgumentCount`] when fewer than
    /// [`MIN_ARGS`] arguments are supplied, whatever the identifier. Errors
    /// raised by the matching builder's validation are passed through.
    pub fn build(&self, type_id: &str, args: &[A]) -> Result<Option<T>, HearthError> {
        if args.len() < MIN_ARGS {
            return Err(HearthError::InvalidArgumentCount { min: MIN_ARGS });
        }
        let Some(builder) = self
            .builders
            .get(type_id)
            .and_then(|builders| builders.iter().find(|b| b.arity == args.len()))
        else {
            return Ok(None);
        };
        (builder.build)(args).transpose()
    }

    /// Whether any builder is registered under `type_id`.
    #[must_use]
    pub fn contains(&self, type_id: &str) -> bool {
        self.builders.contains_key(type_id)
    }

    /// Registered identifiers, sorted.
    #[must_use]
    pub fn type_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.builders.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Arities registered for `type_id`, sorted; empty if unknown.
    #[must_use]
    pub fn arities(&self, type_id: &str) -> Vec<usize> {
        let mut arities: Vec<usize> = self
            .builders
            .get(type_id)
            .map(|builders| builders.iter().map(|b| b.arity).collect())
            .unwrap_or_default();
        arities.sort_unstable();
        arities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}
