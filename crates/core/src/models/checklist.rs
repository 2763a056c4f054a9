use serde::{Deserialize, Serialize};

/// A single learning-plan task the user can tick off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Stable key used in the checked set (e.g. "eth-basics")
    pub id: String,
    pub text: String,
}

/// A titled group of checklist items with an optional time horizon tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSection {
    /// e.g. "IMMEDIATE (2 weeks)"; `None` for untimed sections
    pub horizon: Option<String>,
    pub title: String,
    /// Optional prompt shown above the items
    pub prompt: Option<String>,
    pub items: Vec<ChecklistItem>,
}

impl ChecklistSection {
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}

/// Completion count for a section (or the whole plan).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistProgress {
    pub title: String,
    pub completed: usize,
    pub total: usize,
}

impl ChecklistProgress {
    /// Completion in percent; an empty section counts as 0%.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}
