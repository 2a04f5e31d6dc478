// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{Container, Result, TypeKind};

/// A type that can be requested from a [`Container`].
///
/// Interfaces (`dyn Trait` types) implement this through [`interface!`](crate::interface), concrete
/// types through `#[derive(Injectable)]` or [`concrete!`](crate::concrete). Implementing it by hand is
/// possible but rarely needed.
pub trait Resolvable: 'static {
    /// Whether the type is an interface or a constructible type.
    const KIND: TypeKind;

    /// Produces an instance when no provider is bound for the type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Instantiation`](crate::Error::Instantiation) when the type has no usable
    /// no-argument construction path, and propagates any failure from injecting the new instance.
    fn instantiate(container: &Container) -> Result<Box<Self>>;
}

/// Converts a boxed implementation into the boxed interface it satisfies.
///
/// Every type implements `Implements<Self>`. Implementations of an interface are declared with
/// [`interface!`](crate::interface).
pub trait Implements<I: ?Sized> {
    /// Performs the conversion.
    fn upcast(self: Box<Self>) -> Box<I>;
}

impl<T: ?Sized> Implements<T> for T {
    fn upcast(self: Box<Self>) -> Box<T> {
        self
    }
}

/// Declares `dyn Trait` types as interfaces, optionally listing their implementations.
///
/// An interface has no constructor: resolving one without a binding fails with
/// [`Error::Instantiation`](crate::Error::Instantiation).
///
/// # Examples
///
/// ```
/// use sharp::{Container, Injectable};
///
/// trait Greeter {
///     fn greet(&self) -> String;
/// }
///
/// #[derive(Default, Injectable)]
/// struct English;
///
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         "hello".to_string()
///     }
/// }
///
/// sharp::interface!(dyn Greeter = [English]);
///
/// let mut container = Container::new();
/// container.bind::<dyn Greeter, English>()?;
/// assert_eq!(container.resolve::<dyn Greeter>()?.greet(), "hello");
/// # Ok::<(), sharp::Error>(())
/// ```
#[macro_export]
macro_rules! interface {
    ($iface:ty $(= [$($implementation:ty),* $(,)?])?) => {
        impl $crate::Resolvable for $iface {
            const KIND: $crate::TypeKind = $crate::TypeKind::Abstract;

            fn instantiate(_container: &$crate::Container) -> $crate::Result<::std::boxed::Box<Self>> {
                ::std::result::Result::Err($crate::Error::abstract_type($crate::TypeKey::of::<Self>()))
            }
        }

        $($(
            impl $crate::Implements<$iface> for $implementation {
                fn upcast(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<$iface> {
                    self
                }
            }
        )*)?
    };
}

/// Implements [`Resolvable`] for types with a hand-written [`Injectable`](crate::Injectable) impl.
///
/// `#[derive(Injectable)]` already does this; use the macro when writing the descriptor table by hand.
#[macro_export]
macro_rules! concrete {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Resolvable for $ty {
                const KIND: $crate::TypeKind = $crate::TypeKind::Concrete;

                fn instantiate(container: &$crate::Container) -> $crate::Result<::std::boxed::Box<Self>> {
                    container.create::<Self>().map(::std::boxed::Box::new)
                }
            }
        )+
    };
}
