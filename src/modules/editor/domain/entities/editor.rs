use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A game edition company. The games it edited and the studios it owns
/// are inverse views, resolved by query rather than stored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Editor {
    pub id: Option<Uuid>,
    pub name: String,
}

impl Editor {
    pub fn new(name: String) -> Self {
        Self { id: None, name }
    }
}

impl fmt::Display for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
