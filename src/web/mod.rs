pub mod forms;
pub mod handlers;
pub mod helpers;
pub mod middleware;
pub mod routes;
pub mod samples;
pub mod state;
pub mod templates;
