pub mod detector;
pub mod remover;

pub use detector::DuplicateDetector;
pub use remover::remove_duplicates;
