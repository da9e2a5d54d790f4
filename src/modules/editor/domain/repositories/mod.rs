pub mod editor_repository;
