//! xul-model - observable list models and widget contracts
//!
//! The core is [`model::ModelList`], an ordered collection that fires a
//! `children` property change after every structural mutation so data-bound
//! widgets stay in sync with their model. [`widget::Listbox`] describes the
//! selectable list control such models usually back.

// Include the log module first so the log! macro works everywhere
#[macro_use]
pub mod log;

pub mod domain;
pub mod model;
pub mod shared;
pub mod widget;

pub use domain::{ModelError, ModelResult};
pub use model::{ElementHooks, FnHooks, ListenerId, ModelList, NoHooks, PropertyChangeEvent};
pub use shared::Config;
pub use widget::{Listbox, MemoryListbox, SelectionMode, WidgetState};
