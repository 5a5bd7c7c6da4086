//! # Edit Mode
//!
//! Whether a resource form is creating a new record or editing an existing one.

use crate::types::RecordId;

/// Form mode for screens that both create and update records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Creating,
    Editing(RecordId),
}

impl EditMode {
    /// The record under edit, if any.
    pub fn editing_id(&self) -> Option<&RecordId> {
        match self {
            EditMode::Creating => None,
            EditMode::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditMode::Editing(_))
    }

    /// Submit button label for a form about `noun` ("Product", "Customer").
    pub fn submit_label(&self, noun: &str) -> String {
        match self {
            EditMode::Creating => format!("Add {noun}"),
            EditMode::Editing(_) => format!("Update {noun}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_creating() {
        let mode = EditMode::default();
        assert!(!mode.is_editing());
        assert_eq!(mode.editing_id(), None);
        assert_eq!(mode.submit_label("Product"), "Add Product");
    }

    #[test]
    fn test_editing() {
        let mode = EditMode::Editing(RecordId::Number(4));
        assert!(mode.is_editing());
        assert_eq!(mode.editing_id(), Some(&RecordId::Number(4)));
        assert_eq!(mode.submit_label("Customer"), "Update Customer");
    }
}
