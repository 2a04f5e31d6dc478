// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use tracing::Level;

use crate::registry::{Provider, Registry};
use crate::{Error, Implements, Injectable, InjectionPoints, Resolvable, Result, TypeKey, Visibility};

/// Resolves requested types into fully wired instances.
///
/// A request is served by the provider bound to the type if there is one. Otherwise the type is
/// constructed through its no-argument construction path, then every marked public field and every
/// marked `set*` method receives a value resolved the same way.
///
/// The container keeps no instances: each resolution without a custom provider yields a new object
/// owned by the caller.
///
/// # Examples
///
/// ```
/// use sharp::{Container, Injectable};
///
/// trait Handler {
///     fn handle(&self, input: &str) -> String;
/// }
///
/// #[derive(Default, Injectable)]
/// struct Echo;
///
/// impl Handler for Echo {
///     fn handle(&self, input: &str) -> String {
///         input.to_string()
///     }
/// }
///
/// sharp::interface!(dyn Handler = [Echo]);
///
/// let mut container = Container::new();
/// container.bind::<dyn Handler, Echo>()?;
///
/// let handler = container.resolve::<dyn Handler>()?;
/// assert_eq!(handler.handle("test"), "test");
/// # Ok::<(), sharp::Error>(())
/// ```
///
/// # Thread safety
///
/// Providers need not be thread-safe, so neither is the container. Registration takes `&mut self`
/// and resolution `&self`, which keeps the two apart.
///
/// # Cycles
///
/// Types that inject each other without a provider breaking the chain recurse until the stack is
/// exhausted.
#[derive(Debug, Default)]
pub struct Container {
    registry: Registry,
}

impl Container {
    /// Creates a container with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the interface `I` to the implementation `C`.
    ///
    /// Resolving `I` afterwards resolves `C`, including any provider bound to `C` and the injection of
    /// its members, and upcasts the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBinding`] when `I` is not an interface or `C` is not a concrete type.
    /// Nothing is registered in that case.
    pub fn bind<I, C>(&mut self) -> Result<()>
    where
        I: ?Sized + Resolvable,
        C: ?Sized + Resolvable + Implements<I>,
    {
        let interface = TypeKey::of::<I>();
        let implementation = TypeKey::of::<C>();

        if !interface.is_abstract() || implementation.is_abstract() {
            tracing::event!(
                name: "sharp.bind.rejected",
                Level::WARN,
                sharp.interface = interface.name(),
                sharp.implementation = implementation.name(),
                "rejected binding"
            );
            return Err(Error::InvalidBinding { interface, implementation });
        }

        self.insert(Provider::<I>::new(|container| container.resolve::<C>().map(<C as Implements<I>>::upcast)));
        Ok(())
    }

    /// Binds `T` to a custom provider.
    ///
    /// The provider's product is returned as is; the container does not inject its members.
    pub fn register<T>(&mut self, provider: impl Fn() -> Box<T> + 'static)
    where
        T: ?Sized + Resolvable,
    {
        self.insert(Provider::<T>::new(move |_| Ok(provider())));
    }

    /// Binds `T` to a fallible provider that may resolve its own collaborators.
    ///
    /// Like [`register`](Self::register), the product is not injected.
    pub fn register_with<T>(&mut self, provider: impl Fn(&Self) -> Result<Box<T>> + 'static)
    where
        T: ?Sized + Resolvable,
    {
        self.insert(Provider::<T>::new(provider));
    }

    /// Produces a fully wired instance of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Instantiation`] when a type in the graph cannot be constructed and
    /// [`Error::InvalidInjectionPoint`] when a marked setter does not take exactly one parameter.
    /// Errors from custom providers are passed through.
    pub fn resolve<T>(&self) -> Result<Box<T>>
    where
        T: ?Sized + Resolvable,
    {
        let key = TypeKey::of::<T>();
        tracing::event!(name: "sharp.resolve", Level::DEBUG, sharp.type_name = key.name(), "resolving type");

        match self.registry.lookup::<T>() {
            Some(provider) => provider.provide(self),
            None => T::instantiate(self),
        }
    }

    /// Constructs `T` and injects its members, ignoring any provider bound to `T` itself.
    ///
    /// Members are still resolved through [`resolve`](Self::resolve).
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn create<T: Injectable>(&self) -> Result<T> {
        let key = TypeKey::of::<T>();
        let mut instance = T::construct().map_err(|source| Error::Instantiation { ty: key, source })?;
        self.inject(&mut instance)?;
        Ok(instance)
    }

    /// The bindings registered so far.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Whether a provider is bound to `T`.
    #[must_use]
    pub fn is_bound<T: ?Sized + Resolvable>(&self) -> bool {
        self.registry.contains::<T>()
    }

    /// The number of bound types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether no type is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    fn insert<T: ?Sized + Resolvable>(&mut self, provider: Provider<T>) {
        if self.registry.insert(provider) {
            tracing::event!(
                name: "sharp.register",
                Level::DEBUG,
                sharp.type_name = std::any::type_name::<T>(),
                "replaced binding"
            );
        }
    }

    fn inject<T: Injectable>(&self, instance: &mut T) -> Result<()> {
        let points = T::injection_points();
        self.inject_fields(instance, &points)?;
        self.inject_setters(instance, &points)
    }

    fn inject_fields<T: Injectable>(&self, instance: &mut T, points: &InjectionPoints<T>) -> Result<()> {
        for field in points.fields() {
            tracing::event!(name: "sharp.inject.field", Level::DEBUG, sharp.field = field.name(), "analyzing field");

            match (field.visibility(), field.assign()) {
                (Visibility::Public, Some(assign)) => {
                    tracing::event!(
                        name: "sharp.inject.field",
                        Level::INFO,
                        sharp.field = field.name(),
                        sharp.type_name = field.declared_type().name(),
                        "injecting public field"
                    );
                    assign(instance, self)?;
                }
                _ => {
                    tracing::event!(
                        name: "sharp.inject.field",
                        Level::WARN,
                        sharp.field = field.name(),
                        sharp.owner = std::any::type_name::<T>(),
                        "injected field {} is not public",
                        field.name()
                    );
                }
            }
        }

        Ok(())
    }

    fn inject_setters<T: Injectable>(&self, instance: &mut T, points: &InjectionPoints<T>) -> Result<()> {
        for method in points.methods() {
            if !method.is_setter() {
                tracing::event!(
                    name: "sharp.inject.setter",
                    Level::DEBUG,
                    sharp.method = method.name(),
                    "skipping marked method without set prefix"
                );
                continue;
            }

            tracing::event!(name: "sharp.inject.setter", Level::DEBUG, sharp.method = method.name(), "analyzing setter");

            let invoke = match method.invoke() {
                Some(invoke) if method.arity() == 1 => invoke,
                _ => {
                    return Err(Error::InvalidInjectionPoint {
                        ty: TypeKey::of::<T>(),
                        method: method.name(),
                        arity: method.arity(),
                    });
                }
            };

            tracing::event!(name: "sharp.inject.setter", Level::INFO, sharp.method = method.name(), "injecting setter");
            invoke(instance, self)?;
        }

        Ok(())
    }
}
