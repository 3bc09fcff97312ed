pub mod matrix;
pub mod stats;
pub mod verify;
