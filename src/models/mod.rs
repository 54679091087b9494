pub use analytics::*;
pub use brochure::*;
pub use lead::*;
pub use portfolio::*;
pub use product::*;
pub use seo::*;
pub use session::*;

mod analytics;
mod brochure;
mod lead;
mod portfolio;
mod product;
mod seo;
mod session;
