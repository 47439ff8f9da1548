/// Storage layer
///
/// Posts live only in process memory; see `PostStore`.
pub mod post_repo;

pub use post_repo::PostStore;
