//! # Stores, Bindings, and Case Paths
//!
//! Segue models navigation state as ordinary application data: an
//! `Option<Route>` (or an enum of routes) owned by the caller. This crate
//! provides the reactive plumbing that turns such state into something a
//! navigation control can drive:
//!
//! - `Store<T>` — observable cell holding the source of truth.
//! - `Binding<T>` — two-way getter/setter pair, composable into derived
//!   bindings with no hidden registration.
//! - presence/unwrapping projections over `Binding<Option<T>>`.
//! - `CasePath` — explicit extract/embed pair narrowing one enum case.
//!
//! ## Stores and bindings
//!
//! ```rust
//! use segue_core::*;
//!
//! let count = store(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//!
//! let binding = count.binding();
//! binding.set(5);
//! assert_eq!(count.get(), 5);
//! ```
//!
//! ## Driving presentation from optional state
//!
//! The presence projection reads `true` while the source holds a value.
//! Toggling it to `true` fires the activation callback, which is responsible
//! for populating the source; toggling it to `false` clears the source:
//!
//! ```rust
//! use segue_core::*;
//!
//! let route = store(None::<u32>);
//! let binding = route.binding();
//!
//! let presence = binding.is_present_with({
//!     let binding = binding.clone();
//!     move |active| {
//!         if active {
//!             binding.set(Some(42));
//!         }
//!     }
//! });
//!
//! presence.set(true);
//! assert_eq!(route.get(), Some(42));
//!
//! let detail = binding.unwrapping().unwrap();
//! detail.set(43);
//! assert_eq!(route.get(), Some(43));
//!
//! presence.set(false);
//! assert_eq!(route.get(), None);
//! ```
//!
//! ## Enum-shaped state
//!
//! A `CasePath` narrows an optional enum source to one of its cases; a
//! different case reads the same as no value at all:
//!
//! ```rust
//! use segue_core::*;
//!
//! #[derive(Clone)]
//! enum Route {
//!     Detail(u32),
//!     Search(String),
//! }
//!
//! let route = store(Some(Route::Detail(7)));
//! let narrowed = route.binding().case(case_path!(Route::Detail));
//!
//! assert_eq!(narrowed.get(), Some(7));
//! narrowed.set(Some(9));
//! assert!(matches!(route.get(), Some(Route::Detail(9))));
//! ```
//!
//! All types here are `Rc`-based and single-threaded; handles must stay on
//! the thread that created them, which is how the UI-thread contract is
//! expressed at the API boundary.

pub mod binding;
pub mod case;
pub mod optional;
pub mod store;
pub mod tests;

pub use binding::*;
pub use case::*;
pub use store::*;
