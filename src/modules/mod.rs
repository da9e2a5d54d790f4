pub mod developer;
pub mod editor;
pub mod game;
pub mod relations;
