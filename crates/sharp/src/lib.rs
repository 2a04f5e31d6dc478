// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A minimal dependency-resolution container.
//!
//! Given a requested type, a [`Container`] produces a fully constructed instance and injects the
//! instance's own dependencies, resolving them the same way, transitively. Callers ask for an
//! interface (a `dyn Trait` type) and the container decides which concrete type satisfies it.
//!
//! # Resolution
//!
//! [`Container::resolve`] first looks for a provider bound to the requested type:
//!
//! - [`Container::bind`] binds an interface to an implementation. The implementation is itself
//!   resolved, so it receives injection too.
//! - [`Container::register`] binds any type to a custom zero-argument provider. Its product is
//!   returned untouched.
//!
//! Without a binding, the type is built through its no-argument construction path and its marked
//! members are injected: public fields first, then `set*` methods taking exactly one parameter.
//! Interfaces have no construction path and must be bound.
//!
//! # Marking injection points
//!
//! Rust has no runtime reflection, so each concrete type describes its injection points in a table
//! returned by [`Injectable::injection_points`]. The table is usually derived:
//!
//! ```
//! use sharp::{Container, Injectable};
//!
//! #[derive(Default, Injectable)]
//! struct SimpleBean;
//!
//! #[derive(Default, Injectable)]
//! #[injectable(setters(set_private_object))]
//! struct BeanWithInjectedFields {
//!     #[inject]
//!     pub public_object: Option<Box<SimpleBean>>,
//!     private_object: Option<Box<SimpleBean>>,
//! }
//!
//! impl BeanWithInjectedFields {
//!     fn set_private_object(&mut self, bean: Box<SimpleBean>) {
//!         self.private_object = Some(bean);
//!     }
//! }
//!
//! let bean = Container::new().resolve::<BeanWithInjectedFields>()?;
//! assert!(bean.public_object.is_some());
//! assert!(bean.private_object.is_some());
//! # Ok::<(), sharp::Error>(())
//! ```
//!
//! Marked fields that are not `pub` are reported through `tracing` and left alone. Marked setters
//! with any other number of parameters fail the whole resolution with
//! [`Error::InvalidInjectionPoint`].
//!
//! # Interfaces
//!
//! [`interface!`] declares a `dyn Trait` type as an interface and lists its implementations:
//!
//! ```
//! use sharp::{Container, Injectable};
//!
//! trait ISimple {
//!     fn handle(&self, input: &str) -> String;
//! }
//!
//! #[derive(Default, Injectable)]
//! struct BeanImplementsInterface;
//!
//! impl ISimple for BeanImplementsInterface {
//!     fn handle(&self, input: &str) -> String {
//!         input.to_string()
//!     }
//! }
//!
//! sharp::interface!(dyn ISimple = [BeanImplementsInterface]);
//!
//! let mut container = Container::new();
//! container.bind::<dyn ISimple, BeanImplementsInterface>()?;
//! assert_eq!(container.resolve::<dyn ISimple>()?.handle("test"), "test");
//!
//! // The binding must go from an interface to a concrete type.
//! assert!(container.bind::<BeanImplementsInterface, BeanImplementsInterface>().is_err());
//! # Ok::<(), sharp::Error>(())
//! ```
//!
//! # Feature Flags
//!
//! * **`derive`** *(default)* – Re-exports `#[derive(Injectable)]` from the companion `sharp_macros`
//!   crate. Without it, implement [`Injectable`] by hand and call [`concrete!`].
//!
//! # Logging
//!
//! The container emits `tracing` events under the `sharp.*` names: `DEBUG` while walking the graph,
//! `INFO` for each injection, `WARN` for skipped private fields and rejected bindings. It never
//! installs a subscriber.

mod container;
mod error;
mod injection;
mod registry;
mod resolvable;
mod type_key;

pub use container::Container;
pub use error::{BoxError, Error, Result};
pub use injection::{FieldPoint, Injectable, InjectionPoints, MethodPoint, Setter, Visibility};
pub use registry::{Provider, Registry};
pub use resolvable::{Implements, Resolvable};
#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use sharp_macros::Injectable;
pub use type_key::{TypeKey, TypeKind};
