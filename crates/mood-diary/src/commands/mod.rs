pub mod analyze;
pub mod delete;
pub mod list;
pub mod mood;
pub mod playlist;
pub mod trend;
pub mod version;
pub mod write;
