pub mod developer;
