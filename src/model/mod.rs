//! Observable models for data-bound widgets
//!
//! A model fires a property change after every structural mutation so that
//! bound widgets can refresh their views.

pub mod event;
pub mod hooks;
pub mod list;

pub use event::{ChangeSupport, ListenerId, PropertyChangeEvent, CHILDREN_PROPERTY};
pub use hooks::{ElementHooks, FnHooks, NoHooks};
pub use list::ModelList;
