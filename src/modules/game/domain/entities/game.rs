use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// A catalog game. The id stays `None` until the store accepts the first
/// save; an entity coming back from a save without an id is a failed
/// persist. Associations are kept as id sets, the developer/editor side
/// is resolved by query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    pub id: Option<Uuid>,
    pub title: String,
    pub release_date: NaiveDate,
    pub developers: BTreeSet<Uuid>,
    pub editors: BTreeSet<Uuid>,
}

impl Game {
    pub fn new(title: String, release_date: NaiveDate) -> Self {
        Self {
            id: None,
            title,
            release_date,
            developers: BTreeSet::new(),
            editors: BTreeSet::new(),
        }
    }

    /// Link a developer. Returns false when the developer was already
    /// linked; the set never holds duplicates.
    pub fn add_developer(&mut self, developer_id: Uuid) -> bool {
        self.developers.insert(developer_id)
    }

    /// Link an editor. Same set semantics as [`Game::add_developer`].
    pub fn add_editor(&mut self, editor_id: Uuid) -> bool {
        self.editors.insert(editor_id)
    }

    pub fn has_developer(&self, developer_id: &Uuid) -> bool {
        self.developers.contains(developer_id)
    }

    pub fn has_editor(&self, editor_id: &Uuid) -> bool {
        self.editors.contains(editor_id)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
