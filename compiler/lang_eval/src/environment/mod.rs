//! Lexical environments.
//!
//! An [`Environment`] is a handle to one scope in a chain of scopes. Cloning
//! the handle shares the scope, which is how closures capture their defining
//! environment by reference. Lookups walk outward through the chain; writes
//! always land in the innermost scope, so a name bound in an inner scope
//! shadows the outer binding instead of replacing it.
//!
//! A closure stored in the scope it captured forms a reference cycle that is
//! never reclaimed. Interpreter sessions are short-lived, so this is accepted.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use lang_ir::Name;
use rustc_hash::FxHashMap;

use crate::Value;

/// Single-threaded shared scope storage.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

/// Bindings of one scope plus the link to its enclosing scope.
#[derive(Default)]
struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
}

/// Handle to a scope chain.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A root environment with no bindings and no parent.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::default()),
        }
    }

    /// A fresh empty scope whose parent is `self`.
    pub fn child(&self) -> Self {
        Environment {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                parent: Some(self.scope.clone()),
            }),
        }
    }

    /// Value bound to `name` in the nearest scope that has it.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut current = self.scope.clone();
        loop {
            let parent = {
                let scope = current.borrow();
                if let Some(value) = scope.bindings.get(name) {
                    return Some(value.clone());
                }
                scope.parent.clone()
            };
            current = parent?;
        }
    }

    /// Bind `name` in the innermost scope, replacing any binding it already
    /// has there. Outer scopes are never touched.
    pub fn set(&self, name: impl Into<Name>, value: Value) {
        self.scope.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Whether `name` is bound in the innermost scope itself.
    pub fn contains_local(&self, name: &str) -> bool {
        self.scope.borrow().bindings.contains_key(name)
    }

    /// Names bound in the innermost scope, sorted.
    pub fn local_names(&self) -> Vec<Name> {
        let mut names: Vec<Name> = self.scope.borrow().bindings.keys().cloned().collect();
        names.sort();
        names
    }

    /// Enclosing environment, if any.
    pub fn parent(&self) -> Option<Environment> {
        self.scope
            .borrow()
            .parent
            .clone()
            .map(|scope| Environment { scope })
    }

    /// Whether both handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    // Only local names: values can hold closures that point back here.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("locals", &self.local_names())
            .field("has_parent", &self.scope.borrow().parent.is_some())
            .finish()
    }
}
