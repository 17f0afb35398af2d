mod app_context;
mod env_warnings;

pub use app_context::AppContext;
pub use env_warnings::warn_misnamed_env;
