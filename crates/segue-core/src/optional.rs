use std::cell::RefCell;
use std::rc::Rc;

use crate::binding::Binding;

impl<T: Clone + 'static> Binding<Option<T>> {
    /// Boolean presence projection: `true` iff the source currently holds a
    /// value. Writing `false` clears the source. Writing `true` cannot
    /// conjure a value, so it is a no-op here; activation that populates the
    /// source goes through [`Binding::is_present_with`].
    pub fn is_present(&self) -> Binding<bool> {
        let source = self.clone();
        let get = {
            let source = source.clone();
            move || source.get().is_some()
        };
        let set = move |active: bool| {
            if active {
                if source.get().is_none() {
                    log::warn!(
                        "presence set to true on an empty source with no activation \
                         callback; nothing can populate the value. Ignoring."
                    );
                }
            } else {
                source.set(None);
            }
        };
        Binding::new(get, set)
    }

    /// Presence projection with an activation callback.
    ///
    /// Transitions:
    /// - inactive -> active: `on_toggle(true)` is invoked; the callback must
    ///   write a value into the source. The projection itself writes nothing.
    /// - active -> inactive: the source is cleared, then `on_toggle(false)`
    ///   is invoked exactly once.
    ///
    /// Writes that match the source's current presence are dropped before the
    /// callback, so repeated `true` while active (or `false` while inactive,
    /// including after an external write emptied the source) never re-fires
    /// `on_toggle`.
    pub fn is_present_with(&self, on_toggle: impl Fn(bool) + 'static) -> Binding<bool> {
        let source = self.clone();
        let get = {
            let source = source.clone();
            move || source.get().is_some()
        };
        let set = move |active: bool| {
            let was_active = source.get().is_some();
            if active == was_active {
                return;
            }
            if !active {
                source.set(None);
            }
            on_toggle(active);
        };
        Binding::new(get, set)
    }

    /// Non-optional projection over the payload.
    ///
    /// Returns `None` when the source is currently empty, so the unwrapped
    /// binding can only be constructed while a value exists. Reads return the
    /// source's payload; writes store `Some(new_value)` back. If another
    /// writer empties the source after construction, reads fall back to the
    /// last payload this binding observed (and warn), rather than panicking
    /// or inventing a default.
    pub fn unwrapping(&self) -> Option<Binding<T>> {
        let initial = self.get()?;
        let last_seen = Rc::new(RefCell::new(initial));
        let source = self.clone();
        let get = {
            let source = source.clone();
            let last_seen = last_seen.clone();
            move || match source.get() {
                Some(value) => {
                    *last_seen.borrow_mut() = value.clone();
                    value
                }
                None => {
                    log::warn!("unwrapped binding read while source is empty; returning last seen value");
                    last_seen.borrow().clone()
                }
            }
        };
        let set = move |value: T| source.set(Some(value));
        Some(Binding::new(get, set))
    }
}
