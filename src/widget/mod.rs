//! Widget contracts for markup-driven UIs
//!
//! Widgets here are capability contracts; platform toolkits provide the
//! concrete controls. The headless implementations exist so binding layers
//! and tests can drive the contracts without a toolkit.

pub mod listbox;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::ModelError;

pub use listbox::{Listbox, MemoryListbox};

/// Interaction state a binding layer reflects onto the platform control
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidgetState {
    #[default]
    Normal,
    Disabled,
}

impl WidgetState {
    /// State for a widget whose markup `disabled` attribute is `disabled`
    pub fn from_disabled(disabled: bool) -> Self {
        if disabled {
            WidgetState::Disabled
        } else {
            WidgetState::Normal
        }
    }

    /// Whether the control accepts selection input
    pub fn is_interactive(&self) -> bool {
        matches!(self, WidgetState::Normal)
    }
}

/// Whether a list widget permits one or many selected items
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Multiple,
}

impl SelectionMode {
    /// Markup attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Single => "single",
            SelectionMode::Multiple => "multiple",
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, SelectionMode::Multiple)
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(SelectionMode::Single),
            "multiple" => Ok(SelectionMode::Multiple),
            _ => Err(ModelError::InvalidSelectionMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_mode_parse() {
        assert_eq!("single".parse(), Ok(SelectionMode::Single));
        assert_eq!(" Multiple ".parse(), Ok(SelectionMode::Multiple));
        assert_eq!(
            "cell".parse::<SelectionMode>(),
            Err(ModelError::InvalidSelectionMode("cell".to_string()))
        );
    }

    #[test]
    fn test_selection_mode_display() {
        assert_eq!(SelectionMode::Single.to_string(), "single");
        assert_eq!(SelectionMode::Multiple.to_string(), "multiple");
        assert_eq!(SelectionMode::default(), SelectionMode::Single);
        assert!(SelectionMode::Multiple.is_multiple());
    }

    #[test]
    fn test_widget_state_from_disabled() {
        assert_eq!(WidgetState::from_disabled(false), WidgetState::Normal);
        assert_eq!(WidgetState::from_disabled(true), WidgetState::Disabled);
        assert!(WidgetState::default().is_interactive());
        assert!(!WidgetState::Disabled.is_interactive());
    }
}
