pub mod activities_repo;
pub mod activity_store;

pub use activity_store::ActivityStore;
