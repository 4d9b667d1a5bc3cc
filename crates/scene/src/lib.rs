pub mod config;
pub mod coordinator;
pub mod profile;
pub mod route;
pub mod session;
pub mod view;

pub use config::*;
pub use coordinator::*;
pub use profile::*;
pub use route::*;
pub use session::*;
pub use view::*;
