// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use type_map::TypeMap;

use crate::{Container, Resolvable, Result, TypeKey};

type ProviderFn<T> = Box<dyn Fn(&Container) -> Result<Box<T>>>;

/// Produces instances of a bound type.
pub struct Provider<T: ?Sized> {
    produce: ProviderFn<T>,
}

impl<T: ?Sized + Resolvable> Provider<T> {
    pub(crate) fn new(produce: impl Fn(&Container) -> Result<Box<T>> + 'static) -> Self {
        Self {
            produce: Box::new(produce),
        }
    }

    /// Runs the provider.
    ///
    /// # Errors
    ///
    /// Propagates whatever the provider reports.
    pub fn provide(&self, container: &Container) -> Result<Box<T>> {
        (self.produce)(container)
    }
}

impl<T: ?Sized + Resolvable> fmt::Debug for Provider<T> {
    #[cfg_attr(test, mutants::skip)] // Diagnostic output only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Provider").field(&TypeKey::of::<T>()).finish()
    }
}

/// The bindings of a [`Container`], one provider per requested type.
///
/// Lookups are keyed by the provider's own type, so a hit is already typed.
pub struct Registry {
    providers: TypeMap,
    keys: Vec<TypeKey>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            providers: TypeMap::new(),
            keys: Vec::new(),
        }
    }

    /// Stores `provider` for `T`, replacing any earlier binding. Returns whether one was replaced.
    pub(crate) fn insert<T: ?Sized + Resolvable>(&mut self, provider: Provider<T>) -> bool {
        let replaced = self.providers.insert(provider).is_some();
        if !replaced {
            self.keys.push(TypeKey::of::<T>());
        }
        replaced
    }

    /// The provider bound to `T`, or `None` when `T` falls back to default construction.
    #[must_use]
    pub fn lookup<T: ?Sized + Resolvable>(&self) -> Option<&Provider<T>> {
        self.providers.get::<Provider<T>>()
    }

    /// Whether a provider is bound to `T`.
    #[must_use]
    pub fn contains<T: ?Sized + Resolvable>(&self) -> bool {
        self.providers.contains::<Provider<T>>()
    }

    /// The bound types, in order of first registration.
    pub fn keys(&self) -> impl Iterator<Item = TypeKey> + '_ {
        self.keys.iter().copied()
    }

    /// The number of bound types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no type is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(&self.keys).finish()
    }
}
