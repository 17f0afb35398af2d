pub mod contact;
pub mod coverage;
pub mod dispatch;
pub mod estimate;
pub mod schema;
pub mod shared;
