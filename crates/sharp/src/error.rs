// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

use crate::TypeKey;

/// A boxed error produced by user code, such as a failing constructor.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Any failure reported by a [`Container`](crate::Container).
///
/// Every variant aborts the registration or resolution that raised it and leaves the container's
/// bindings as they were.
///
/// # Thread safety
///
/// This type is thread-safe.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A binding was registered from something other than an interface, or to something other than a
    /// concrete type.
    #[error("cannot bind `{interface}` to `{implementation}`: expected an interface and its implementation respectively")]
    InvalidBinding {
        /// The requested side of the binding.
        interface: TypeKey,
        /// The providing side of the binding.
        implementation: TypeKey,
    },

    /// A type could not be constructed through its no-argument construction path.
    #[error("cannot instantiate `{ty}`")]
    Instantiation {
        /// The type that failed to construct.
        ty: TypeKey,
        /// What the construction path reported.
        #[source]
        source: BoxError,
    },

    /// A marked setter does not take exactly one parameter.
    #[error("set method {method}() of `{ty}` expected to have only 1 parameter, found {arity}")]
    InvalidInjectionPoint {
        /// The type declaring the setter.
        ty: TypeKey,
        /// The name of the setter.
        method: &'static str,
        /// The number of parameters the setter takes after its receiver.
        arity: usize,
    },
}

impl Error {
    /// Reports that an interface was resolved without a binding.
    #[must_use]
    pub fn abstract_type(ty: TypeKey) -> Self {
        Self::Instantiation {
            ty,
            source: "interfaces have no constructor; bind an implementation first".into(),
        }
    }

    /// The type the failing operation was working on.
    ///
    /// For [`Error::InvalidBinding`] this is the interface side.
    #[must_use]
    pub fn type_key(&self) -> TypeKey {
        match self {
            Self::InvalidBinding { interface, .. } => *interface,
            Self::Instantiation { ty, .. } | Self::InvalidInjectionPoint { ty, .. } => *ty,
        }
    }
}

/// A specialized `Result` for container operations.
pub type Result<T> = std::result::Result<T, Error>;
