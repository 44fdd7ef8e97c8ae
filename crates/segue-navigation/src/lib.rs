//! # State-driven navigation links
//!
//! A navigation control is usually driven by a boolean "is the destination
//! showing" flag. This crate drives it from application state instead: an
//! `Option<Route>` or one case of a route enum. The link derives a
//! non-optional binding for the destination content, and edits made through
//! that binding flow straight back to the source of truth.
//!
//! ```rust
//! use segue_core::*;
//! use segue_navigation::*;
//!
//! let route = store(None::<u32>);
//! let binding = route.binding();
//!
//! let link = NavLink(
//!     binding.clone(),
//!     {
//!         let binding = binding.clone();
//!         move |active| {
//!             if active {
//!                 binding.set(Some(1));
//!             }
//!         }
//!     },
//!     |detail| format!("viewing item {}", detail.get()),
//!     || "open item".to_string(),
//! );
//!
//! assert!(link.destination().is_none());
//! link.activate();
//! assert_eq!(route.get(), Some(1));
//! ```
//!
//! A `Link` is a snapshot for one composition pass: the host rebuilds it
//! every time it re-renders, exactly like any other derived view state. When
//! the source is emptied by anyone — the dismissal gesture writing the
//! presence binding, or an unrelated writer — the next pass observes an empty
//! source, builds a `Link` without a destination, and the presentation goes
//! away with it. There is no dangling presentation state to clean up.

#![allow(non_snake_case)]

use segue_core::{Binding, CasePath};

/// One navigation link, resolved against the current state.
///
/// `V` is whatever the host renders: a view value, a widget description, a
/// string in tests. This crate never looks inside it.
pub struct Link<V> {
    label: V,
    destination: Option<V>,
    presence: Binding<bool>,
}

impl<V> Link<V> {
    pub fn label(&self) -> &V {
        &self.label
    }

    /// Destination content, present iff the source held a value when this
    /// link was built.
    pub fn destination(&self) -> Option<&V> {
        self.destination.as_ref()
    }

    /// The live presence binding. Reads consult the source, not this
    /// snapshot, so an external dismissal is visible here immediately.
    pub fn presence(&self) -> Binding<bool> {
        self.presence.clone()
    }

    pub fn is_active(&self) -> bool {
        self.presence.get()
    }

    /// User tapped the link: routes through the activation callback, which
    /// populates the source.
    pub fn activate(&self) {
        log::debug!("nav link activated");
        self.presence.set(true);
    }

    /// Dismissal gesture: clears the source and notifies the activation
    /// callback with `false`.
    pub fn dismiss(&self) {
        log::debug!("nav link dismissed");
        self.presence.set(false);
    }
}

/// Builds a link driven by an optional source.
///
/// `destination` runs only when the source currently holds a value, and
/// receives the derived non-optional binding; writes through that binding
/// land in the source as `Some(new_value)`. `label` always runs.
/// `on_activate` is the activation callback: invoked with `true` when the
/// link is activated (it must populate the source) and with `false` after a
/// dismissal clears it. Consecutive identical activation states are
/// deduplicated before it is called.
pub fn NavLink<T, V>(
    source: Binding<Option<T>>,
    on_activate: impl Fn(bool) + 'static,
    destination: impl FnOnce(Binding<T>) -> V,
    label: impl FnOnce() -> V,
) -> Link<V>
where
    T: Clone + 'static,
{
    let presence = source.is_present_with(on_activate);
    let destination = source.unwrapping().map(destination);
    Link {
        label: label(),
        destination,
        presence,
    }
}

/// Builds a link driven by one case of an enum-shaped source.
///
/// The source is narrowed through `path` first: a different case behaves
/// exactly like no value at all. Writes through the destination binding are
/// re-wrapped into the same case; dismissal clears the whole source.
pub fn NavLinkCase<Root, Value, V>(
    source: Binding<Option<Root>>,
    path: CasePath<Root, Value>,
    on_activate: impl Fn(bool) + 'static,
    destination: impl FnOnce(Binding<Value>) -> V,
    label: impl FnOnce() -> V,
) -> Link<V>
where
    Root: Clone + 'static,
    Value: Clone + 'static,
{
    NavLink(source.case(path), on_activate, destination, label)
}
