use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub id: String,
    /// Unique among all classes
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert data; the repository assigns ID and timestamps
#[derive(Debug, Clone)]
pub struct NewClass {
    pub name: String,
    pub description: Option<String>,
}

/// Partial update. `description: Some(None)` clears the description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl ClassPatch {
    pub fn apply_to(&self, class: &mut Class) {
        if let Some(name) = &self.name {
            class.name = name.clone();
        }
        if let Some(description) = &self.description {
            class.description = description.clone();
        }
    }
}
