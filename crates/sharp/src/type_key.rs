// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::Resolvable;

/// Whether a type can be constructed directly or only reached through a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// An interface, expressed as a `dyn Trait` type. Has no constructor of its own.
    Abstract,

    /// A sized type with a no-argument construction path.
    Concrete,
}

/// Identifies a requestable type within the running process.
///
/// Two keys are equal when they refer to the same declared type; the name and kind are carried along
/// for diagnostics and binding validation only.
///
/// # Examples
///
/// ```
/// use sharp::{TypeKey, TypeKind};
///
/// trait Greeter {}
/// sharp::interface!(dyn Greeter);
///
/// let key = TypeKey::of::<dyn Greeter>();
/// assert_eq!(key.kind(), TypeKind::Abstract);
/// assert!(key.name().ends_with("Greeter"));
/// ```
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
    kind: TypeKind,
}

impl TypeKey {
    /// Returns the key of `T`.
    #[must_use]
    pub fn of<T: ?Sized + Resolvable>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            kind: T::KIND,
        }
    }

    /// The process-unique identifier of the type.
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The declared name of the type, as reported by [`std::any::type_name`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the type is an interface or a concrete type.
    #[must_use]
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Shorthand for `kind() == TypeKind::Abstract`.
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.kind == TypeKind::Abstract
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeKey").field("name", &self.name).field("kind", &self.kind).finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
