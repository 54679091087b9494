pub use credentials::*;
pub use session::*;
pub use state::*;

mod credentials;
mod session;
mod state;
