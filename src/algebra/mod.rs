pub mod field;
pub mod group;
pub mod ring;
