use std::rc::Rc;

use crate::store::Store;

/// Two-way reference: a getter/setter pair composed over a [`Store`] or over
/// another `Binding`. Derived bindings are plain function composition; there
/// is no hidden registration and no caching between the pair and its parent.
pub struct Binding<T> {
    get: Rc<dyn Fn() -> T>,
    set: Rc<dyn Fn(T)>,
}

impl<T: 'static> Binding<T> {
    pub fn new(get: impl Fn() -> T + 'static, set: impl Fn(T) + 'static) -> Self {
        Self {
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    /// Reads a fixed value; writes are ignored.
    pub fn constant(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move || value.clone(), |_| {})
    }

    pub fn get(&self) -> T {
        (self.get)()
    }

    pub fn set(&self, value: T) {
        (self.set)(value)
    }

    /// Derived binding over one component of the value. Reads go through
    /// `read`; writes re-read the parent, apply `write`, and store the whole
    /// value back (read-modify-write, synchronous).
    pub fn project<U: 'static>(
        &self,
        read: impl Fn(&T) -> U + 'static,
        write: impl Fn(&mut T, U) + 'static,
    ) -> Binding<U> {
        let parent = self.clone();
        let get = {
            let parent = parent.clone();
            move || read(&parent.get())
        };
        let set = move |component: U| {
            let mut value = parent.get();
            write(&mut value, component);
            parent.set(value);
        };
        Binding::new(get, set)
    }

    /// Forwards a write only when the new value differs from the current one.
    pub fn deduped(&self) -> Binding<T>
    where
        T: PartialEq,
    {
        let parent = self.clone();
        let get = {
            let parent = parent.clone();
            move || parent.get()
        };
        let set = move |value: T| {
            if parent.get() != value {
                parent.set(value);
            }
        };
        Binding::new(get, set)
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            get: self.get.clone(),
            set: self.set.clone(),
        }
    }
}

impl<T: Clone + 'static> Store<T> {
    /// The canonical two-way binding over this cell.
    pub fn binding(&self) -> Binding<T> {
        let read = self.clone();
        let write = self.clone();
        Binding::new(move || read.get(), move |value| write.set(value))
    }
}
