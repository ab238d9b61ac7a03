mod forms;
mod responses;

pub use forms::*;
pub use responses::*;
