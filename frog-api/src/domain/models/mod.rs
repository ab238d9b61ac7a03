mod activity;
mod entry;
mod ids;
mod summary;

pub use activity::*;
pub use entry::*;
pub use ids::*;
pub use summary::*;
