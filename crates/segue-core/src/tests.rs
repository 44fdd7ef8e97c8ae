#[cfg(test)]
mod tests {
    use crate::binding::Binding;
    use crate::case_path;
    use crate::store::store;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_store_basic() {
        let cell = store(42);
        assert_eq!(cell.get(), 42);

        cell.set(100);
        assert_eq!(cell.get(), 100);

        cell.update(|v| *v += 1);
        assert_eq!(cell.get(), 101);
    }

    #[test]
    fn test_store_subscription() {
        let cell = store(0);
        let calls = Rc::new(RefCell::new(0));

        let calls_clone = calls.clone();
        let id = cell.subscribe(move || *calls_clone.borrow_mut() += 1);

        cell.set(1);
        cell.update(|v| *v += 1);
        assert_eq!(*calls.borrow(), 2);

        cell.unsubscribe(id);
        cell.set(3);
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn test_store_hook_may_write_reentrantly() {
        let cell = store(0);
        let clamped = cell.clone();
        cell.subscribe(move || {
            if clamped.get() > 10 {
                clamped.set(10);
            }
        });

        cell.set(99);
        assert_eq!(cell.get(), 10);
    }

    #[test]
    fn test_binding_over_store() {
        let cell = store(1);
        let binding = cell.binding();

        assert_eq!(binding.get(), 1);
        binding.set(2);
        assert_eq!(cell.get(), 2);

        // writes through the store are visible through the binding, no caching
        cell.set(3);
        assert_eq!(binding.get(), 3);
    }

    #[test]
    fn test_binding_constant_ignores_writes() {
        let binding = Binding::constant(7);
        binding.set(100);
        assert_eq!(binding.get(), 7);
    }

    #[test]
    fn test_binding_project() {
        let cell = store((1, "a".to_string()));
        let first = cell.binding().project(|v| v.0, |v, n| v.0 = n);

        assert_eq!(first.get(), 1);
        first.set(5);
        assert_eq!(cell.get(), (5, "a".to_string()));
    }

    #[test]
    fn test_binding_deduped() {
        let cell = store(0);
        let writes = Rc::new(RefCell::new(0));
        let writes_clone = writes.clone();
        cell.subscribe(move || *writes_clone.borrow_mut() += 1);

        let binding = cell.binding().deduped();
        binding.set(0);
        assert_eq!(*writes.borrow(), 0);
        binding.set(1);
        binding.set(1);
        assert_eq!(*writes.borrow(), 1);
    }

    #[test]
    fn test_presence_tracks_source_without_staleness() {
        let cell = store(None::<u32>);
        let presence = cell.binding().is_present();

        assert!(!presence.get());
        cell.set(Some(1));
        assert!(presence.get());
        cell.set(None);
        assert!(!presence.get());
        cell.set(Some(2));
        assert!(presence.get());
    }

    #[test]
    fn test_presence_write_false_clears_source() {
        let cell = store(Some(5));
        let presence = cell.binding().is_present();

        presence.set(false);
        assert_eq!(cell.get(), None);
    }

    #[test]
    fn test_presence_write_true_cannot_populate() {
        let cell = store(None::<u32>);
        let presence = cell.binding().is_present();

        presence.set(true);
        assert_eq!(cell.get(), None);
        assert!(!presence.get());
    }

    #[test]
    fn test_dismissal_fires_callback_once() {
        let cell = store(Some(5));
        let toggles = Rc::new(RefCell::new(Vec::new()));

        let toggles_clone = toggles.clone();
        let presence = cell
            .binding()
            .is_present_with(move |active| toggles_clone.borrow_mut().push(active));

        presence.set(false);
        assert_eq!(cell.get(), None);
        assert_eq!(*toggles.borrow(), vec![false]);

        // already inactive, nothing more to do
        presence.set(false);
        assert_eq!(*toggles.borrow(), vec![false]);
    }

    #[test]
    fn test_repeated_activation_is_deduplicated() {
        let cell = store(Some(5));
        let toggles = Rc::new(RefCell::new(Vec::new()));

        let toggles_clone = toggles.clone();
        let presence = cell
            .binding()
            .is_present_with(move |active| toggles_clone.borrow_mut().push(active));

        presence.set(true);
        presence.set(true);
        assert!(toggles.borrow().is_empty());
        assert_eq!(cell.get(), Some(5));
    }

    #[test]
    fn test_activation_lifecycle() {
        // source empty, user activates, callback populates, user reads,
        // external writer dismisses
        let cell = store(None::<u32>);
        let binding = cell.binding();

        let presence = binding.is_present_with({
            let binding = binding.clone();
            move |active| {
                if active {
                    binding.set(Some(42));
                }
            }
        });

        presence.set(true);
        assert_eq!(cell.get(), Some(42));

        let detail = binding.unwrapping().unwrap();
        assert_eq!(detail.get(), 42);

        cell.set(None);
        assert!(!presence.get());
    }

    #[test]
    fn test_unwrapping_requires_value() {
        let cell = store(None::<u32>);
        assert!(cell.binding().unwrapping().is_none());
    }

    #[test]
    fn test_unwrapping_write_through() {
        let cell = store(Some(1));
        let unwrapped = cell.binding().unwrapping().unwrap();

        unwrapped.set(2);
        assert_eq!(cell.get(), Some(2));
        assert_eq!(unwrapped.get(), 2);
    }

    #[test]
    fn test_unwrapping_falls_back_to_last_seen() {
        let cell = store(Some(1));
        let unwrapped = cell.binding().unwrapping().unwrap();

        cell.set(Some(2));
        assert_eq!(unwrapped.get(), 2);

        cell.set(None);
        assert_eq!(unwrapped.get(), 2);
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Route {
        A(i32),
        B(String),
    }

    #[test]
    fn test_case_narrowing() {
        let cell = store(None::<Route>);
        let narrowed = cell.binding().case(case_path!(Route::A));

        assert_eq!(narrowed.get(), None);
        assert!(!narrowed.is_present().get());

        cell.set(Some(Route::B("x".into())));
        assert_eq!(narrowed.get(), None);
        assert!(!narrowed.is_present().get());

        cell.set(Some(Route::A(7)));
        assert!(narrowed.is_present().get());
        assert_eq!(narrowed.unwrapping().unwrap().get(), 7);
    }

    #[test]
    fn test_case_write_rewraps() {
        let cell = store(Some(Route::A(7)));
        let narrowed = cell.binding().case(case_path!(Route::A));

        narrowed.unwrapping().unwrap().set(9);
        assert_eq!(cell.get(), Some(Route::A(9)));
    }

    #[test]
    fn test_case_dismissal_clears_source() {
        let cell = store(Some(Route::A(7)));
        let narrowed = cell.binding().case(case_path!(Route::A));

        narrowed.is_present().set(false);
        assert_eq!(cell.get(), None);
    }
}
