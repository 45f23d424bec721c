pub mod export;
pub mod extraction;
pub mod settlement;
