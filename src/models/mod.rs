pub mod activity;
pub mod responses;

pub use activity::{Activity, ActivityDirectoryView};
pub use responses::{ErrorResponse, MessageResponse};
