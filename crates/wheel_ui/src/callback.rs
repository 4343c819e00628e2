//! Callback cell for interaction handlers
//!
//! Widgets hold their handlers in a `Callback<T, M>` instead of spelling out
//! `Option<Box<dyn Fn(T) -> M>>`. The cell is a plain mutable field: the host
//! replaces the handler whenever it changes, and every call sees the latest one.
//!
//! # Examples
//!
//! ```
//! use wheel_ui::Callback;
//!
//! let mut on_move: Callback<f32, String> = Callback::none();
//! assert_eq!(on_move.call(1.0), None);
//!
//! on_move.set(|value| format!("moved to {value}"));
//! assert_eq!(on_move.call(0.5).as_deref(), Some("moved to 0.5"));
//! ```

use std::fmt;

/// An optional event handler mapping an input `T` to a message `M`.
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Replace the handler. Later calls go to `f`.
    pub fn set<F>(&mut self, f: F)
    where
        F: Fn(T) -> M + 'static,
    {
        self.f = Some(Box::new(f));
    }

    /// Remove the handler.
    pub fn clear(&mut self) {
        self.f = None;
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `Some(message)` if the callback is set, or `None` if no callback is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}
