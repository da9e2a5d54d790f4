use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A game development company. `owner` holds the id of the editor that
/// owns the studio, if any; the games it developed are the inverse side
/// of `Game::developers` and are resolved by query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Developer {
    pub id: Option<Uuid>,
    pub name: String,
    pub owner: Option<Uuid>,
}

impl Developer {
    pub fn new(name: String) -> Self {
        Self {
            id: None,
            name,
            owner: None,
        }
    }

    pub fn with_owner(mut self, editor_id: Uuid) -> Self {
        self.owner = Some(editor_id);
        self
    }

    /// Assign the owning editor, replacing any previous owner.
    pub fn set_owner(&mut self, editor_id: Uuid) {
        self.owner = Some(editor_id);
    }
}

impl fmt::Display for Developer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigning_an_owner_replaces_the_previous_one() {
        let mut developer = Developer::new("Studio A".to_string());
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        developer.set_owner(first);
        developer.set_owner(second);

        assert_eq!(developer.owner, Some(second));
    }
}
