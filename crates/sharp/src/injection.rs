// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use crate::{BoxError, Container, Resolvable, Result, TypeKey};

type Injector<T> = Box<dyn Fn(&mut T, &Container) -> Result<()>>;

/// A concrete type the container can construct and wire.
///
/// Usually derived:
///
/// ```
/// use sharp::{Container, Injectable};
///
/// #[derive(Default, Injectable)]
/// struct Clock;
///
/// #[derive(Default, Injectable)]
/// struct Scheduler {
///     #[inject]
///     pub clock: Option<Box<Clock>>,
/// }
///
/// let scheduler = Container::new().resolve::<Scheduler>()?;
/// assert!(scheduler.clock.is_some());
/// # Ok::<(), sharp::Error>(())
/// ```
///
/// Written by hand, the descriptor table lists the same members explicitly:
///
/// ```
/// use sharp::{BoxError, Container, Injectable, InjectionPoints};
///
/// #[derive(Default, Injectable)]
/// struct Clock;
///
/// #[derive(Default)]
/// struct Scheduler {
///     pub clock: Option<Box<Clock>>,
/// }
///
/// impl Injectable for Scheduler {
///     fn construct() -> Result<Self, BoxError> {
///         Ok(Self::default())
///     }
///
///     fn injection_points() -> InjectionPoints<Self> {
///         InjectionPoints::new().field("clock", |s: &mut Self, clock: Box<Clock>| s.clock = Some(clock))
///     }
/// }
///
/// sharp::concrete!(Scheduler);
///
/// let scheduler = Container::new().resolve::<Scheduler>()?;
/// assert!(scheduler.clock.is_some());
/// # Ok::<(), sharp::Error>(())
/// ```
pub trait Injectable: Resolvable + Sized {
    /// The no-argument construction path.
    ///
    /// # Errors
    ///
    /// Any error returned here is reported as [`Error::Instantiation`](crate::Error::Instantiation).
    fn construct() -> std::result::Result<Self, BoxError>;

    /// The marked members of the type, in declaration order.
    ///
    /// Called once per constructed instance.
    fn injection_points() -> InjectionPoints<Self> {
        InjectionPoints::new()
    }
}

/// Accessibility of an injected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Assigned directly by the container.
    Public,

    /// Cannot be assigned directly; reach it through a setter instead.
    Private,
}

/// A marked field.
pub struct FieldPoint<T> {
    name: &'static str,
    declared: TypeKey,
    visibility: Visibility,
    assign: Option<Injector<T>>,
}

impl<T> FieldPoint<T> {
    /// The field name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The type resolved to fill the field.
    #[must_use]
    pub fn declared_type(&self) -> TypeKey {
        self.declared
    }

    /// Whether the container may assign the field.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub(crate) fn assign(&self) -> Option<&Injector<T>> {
        self.assign.as_ref()
    }
}

impl<T> fmt::Debug for FieldPoint<T> {
    #[cfg_attr(test, mutants::skip)] // Diagnostic output only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldPoint")
            .field("name", &self.name)
            .field("declared", &self.declared)
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}

/// A marked method.
pub struct MethodPoint<T> {
    name: &'static str,
    parameters: Vec<&'static str>,
    invoke: Option<Injector<T>>,
}

impl<T> MethodPoint<T> {
    /// The method name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the name follows the `set` prefix convention.
    #[must_use]
    pub fn is_setter(&self) -> bool {
        self.name.starts_with("set")
    }

    /// The type names of the parameters after the receiver, as reported by [`std::any::type_name`].
    #[must_use]
    pub fn parameters(&self) -> &[&'static str] {
        &self.parameters
    }

    /// The number of parameters after the receiver.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// `None` unless the method takes a single boxed resolvable parameter.
    pub(crate) fn invoke(&self) -> Option<&Injector<T>> {
        self.invoke.as_ref()
    }
}

impl<T> fmt::Debug for MethodPoint<T> {
    #[cfg_attr(test, mutants::skip)] // Diagnostic output only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodPoint")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// The descriptor table of a concrete type: every member the container must fill.
///
/// Members absent from the table are not touched.
pub struct InjectionPoints<T> {
    fields: Vec<FieldPoint<T>>,
    methods: Vec<MethodPoint<T>>,
}

impl<T: 'static> InjectionPoints<T> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Marks a public field holding a value of type `A`.
    #[must_use]
    pub fn field<A>(mut self, name: &'static str, assign: impl Fn(&mut T, Box<A>) + 'static) -> Self
    where
        A: ?Sized + Resolvable,
    {
        self.fields.push(FieldPoint {
            name,
            declared: TypeKey::of::<A>(),
            visibility: Visibility::Public,
            assign: Some(Box::new(move |target, container| {
                assign(target, container.resolve::<A>()?);
                Ok(())
            })),
        });
        self
    }

    /// Marks a non-public field holding a value of type `A`.
    ///
    /// The container reports such fields and leaves them untouched.
    #[must_use]
    pub fn private_field<A>(mut self, name: &'static str) -> Self
    where
        A: ?Sized + Resolvable,
    {
        self.fields.push(FieldPoint {
            name,
            declared: TypeKey::of::<A>(),
            visibility: Visibility::Private,
            assign: None,
        });
        self
    }

    /// Marks a method taking `&mut T` followed by any parameters.
    ///
    /// Only methods named `set*` are injected, and those must take exactly one parameter of type
    /// `Box<A>` with `A` resolvable. Marked `set*` methods of any other arity fail the resolution.
    #[must_use]
    pub fn method<Args, S>(mut self, name: &'static str, setter: S) -> Self
    where
        S: Setter<T, Args>,
    {
        self.methods.push(MethodPoint {
            name,
            parameters: S::parameter_names(),
            invoke: setter.into_injector(),
        });
        self
    }

    /// The marked fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldPoint<T>] {
        &self.fields
    }

    /// The marked methods, in declaration order.
    #[must_use]
    pub fn methods(&self) -> &[MethodPoint<T>] {
        &self.methods
    }
}

impl<T: 'static> Default for InjectionPoints<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for InjectionPoints<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectionPoints")
            .field("fields", &self.fields)
            .field("methods", &self.methods)
            .finish()
    }
}

/// A function usable as a marked method on `T`.
///
/// Implemented for `Fn(&mut T, Box<A>)` with `A` resolvable, which the container can inject, and for
/// `Fn(&mut T, ...)` with zero or two to eight parameters of any type, which it reports as invalid
/// injection points. `Args` is the tuple of parameter types and only serves to tell the
/// implementations apart.
pub trait Setter<T, Args>: Sized + 'static {
    /// The type names of the parameters after the receiver.
    fn parameter_names() -> Vec<&'static str>;

    /// Wraps the function so the container can resolve its parameter and call it.
    ///
    /// Returns `None` for functions the container cannot inject.
    fn into_injector(self) -> Option<Injector<T>>;
}

impl<T, F, A> Setter<T, (Box<A>,)> for F
where
    T: 'static,
    F: Fn(&mut T, Box<A>) + 'static,
    A: ?Sized + Resolvable,
{
    fn parameter_names() -> Vec<&'static str> {
        vec![std::any::type_name::<Box<A>>()]
    }

    fn into_injector(self) -> Option<Injector<T>> {
        Some(Box::new(move |target, container| {
            self(target, container.resolve::<A>()?);
            Ok(())
        }))
    }
}

macro_rules! impl_uninjectable_setter {
    ($head:ident, $($tail:ident,)+) => {
        impl<T, Func, $head, $($tail),+> Setter<T, ($head, $($tail),+)> for Func
        where
            T: 'static,
            Func: Fn(&mut T, $head, $($tail),+) + 'static,
        {
            fn parameter_names() -> Vec<&'static str> {
                vec![std::any::type_name::<$head>(), $(std::any::type_name::<$tail>()),+]
            }

            fn into_injector(self) -> Option<Injector<T>> {
                None
            }
        }

        impl_uninjectable_setter!($($tail,)+);
    };
    ($last:ident,) => {};
}

impl<T, Func> Setter<T, ()> for Func
where
    T: 'static,
    Func: Fn(&mut T) + 'static,
{
    fn parameter_names() -> Vec<&'static str> {
        Vec::new()
    }

    fn into_injector(self) -> Option<Injector<T>> {
        None
    }
}

impl_uninjectable_setter!(P1, P2, P3, P4, P5, P6, P7, P8,);
