use std::rc::Rc;

use crate::binding::Binding;

/// One case of a sum type, described by a pair of pure functions: `extract`
/// narrows a root value into the case's payload, `embed` rebuilds the root
/// from a payload. No runtime introspection is involved.
pub struct CasePath<Root, Value> {
    extract: Rc<dyn Fn(&Root) -> Option<Value>>,
    embed: Rc<dyn Fn(Value) -> Root>,
}

impl<Root: 'static, Value: 'static> CasePath<Root, Value> {
    pub fn new(
        extract: impl Fn(&Root) -> Option<Value> + 'static,
        embed: impl Fn(Value) -> Root + 'static,
    ) -> Self {
        Self {
            extract: Rc::new(extract),
            embed: Rc::new(embed),
        }
    }

    pub fn extract(&self, root: &Root) -> Option<Value> {
        (self.extract)(root)
    }

    pub fn embed(&self, value: Value) -> Root {
        (self.embed)(value)
    }
}

impl<Root, Value> Clone for CasePath<Root, Value> {
    fn clone(&self) -> Self {
        Self {
            extract: self.extract.clone(),
            embed: self.embed.clone(),
        }
    }
}

impl<Root: Clone + 'static> Binding<Option<Root>> {
    /// Narrows an optional enum-shaped source to one case. "No value" and
    /// "different case" both read as `None`. Writing `Some(payload)` re-wraps
    /// it through the case and stores it; writing `None` clears the source.
    pub fn case<Value: Clone + 'static>(
        &self,
        path: CasePath<Root, Value>,
    ) -> Binding<Option<Value>> {
        let source = self.clone();
        let get = {
            let source = source.clone();
            let path = path.clone();
            move || source.get().as_ref().and_then(|root| path.extract(root))
        };
        let set = move |value: Option<Value>| match value {
            Some(payload) => source.set(Some(path.embed(payload))),
            None => source.set(None),
        };
        Binding::new(get, set)
    }
}

/// Builds a [`CasePath`] for a single-payload tuple variant:
///
/// ```rust
/// use segue_core::*;
///
/// #[derive(Clone)]
/// enum Route {
///     Detail(u32),
///     Search(String),
/// }
///
/// let detail = case_path!(Route::Detail);
/// assert_eq!(detail.extract(&Route::Detail(7)), Some(7));
/// assert!(detail.extract(&Route::Search("x".into())).is_none());
/// ```
#[macro_export]
macro_rules! case_path {
    ($Root:ident :: $Variant:ident) => {
        $crate::CasePath::new(
            |root: &$Root| match root {
                $Root::$Variant(value) => Some(value.clone()),
                _ => None,
            },
            $Root::$Variant,
        )
    };
}
