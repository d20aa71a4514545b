// Service exports
pub mod directory;
pub mod store;

pub use directory::{CollegeDirectory, DirectoryError};
pub use store::{PropertyStore, StoreError};
