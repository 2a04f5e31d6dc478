// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Macros for the [`sharp`](https://docs.rs/sharp) crate.
//!
//! # Provided Derives
//!
//! * `#[derive(Injectable)]` – Implements `sharp::Injectable` and `sharp::Resolvable`, listing the
//!   struct's marked fields and setters as injection points.

use proc_macro::TokenStream;
use syn::{Path, parse_quote};

/// Derive macro implementing `Injectable` and `Resolvable` for structs.
///
/// The struct is constructed through `Default` unless a constructor is named, and the container
/// then fills its marked members.
///
/// # Supported Items
/// * Structs without generic parameters (named, tuple, or unit)
///
/// Enums and unions produce a compile error, as does `#[inject]` on a tuple field.
///
/// # Attributes
/// * `#[inject]` on a field of type `Box<T>` or `Option<Box<T>>` – Marks the field. `pub` fields are
///   assigned a resolved `T`; other fields are reported at resolution time and left alone.
/// * `#[injectable(setters(set_a, set_b))]` on the struct – Marks methods taking `&mut self` and up to
///   eight more parameters. Only names starting with `set` are injected. Those must take exactly one
///   `Box<T>` with `T` resolvable; any other arity fails the resolution.
/// * `#[injectable(constructor = path)]` on the struct – Constructs through
///   `path() -> Result<Self, E>` instead of `Default`.
///
/// # Example
/// ```rust,ignore
/// use sharp::{Container, Injectable};
///
/// #[derive(Default, Injectable)]
/// struct Clock;
///
/// #[derive(Injectable)]
/// #[injectable(constructor = Self::try_new, setters(set_backup))]
/// struct Scheduler {
///     #[inject]
///     pub clock: Option<Box<Clock>>,
///     backup: Option<Box<Clock>>,
///     workers: usize,
/// }
///
/// impl Scheduler {
///     fn try_new() -> Result<Self, std::num::ParseIntError> {
///         Ok(Self {
///             clock: None,
///             backup: None,
///             workers: "4".parse()?,
///         })
///     }
///
///     fn set_backup(&mut self, clock: Box<Clock>) {
///         self.backup = Some(clock);
///     }
/// }
///
/// let scheduler = Container::new().resolve::<Scheduler>()?;
/// assert!(scheduler.clock.is_some());
/// assert!(scheduler.backup.is_some());
/// assert_eq!(scheduler.workers, 4);
/// # Ok::<(), sharp::Error>(())
/// ```
#[proc_macro_derive(Injectable, attributes(inject, injectable))]
#[cfg_attr(test, mutants::skip)]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let root_path: Path = parse_quote!(::sharp);
    sharp_macros_impl::derive_injectable(input.into(), &root_path).into()
}
