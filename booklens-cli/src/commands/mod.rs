//! CLI command implementations

mod batch;
mod browse;
mod info;
mod normalize;
mod output;
mod search;

pub use batch::batch;
pub use browse::browse;
pub use info::info;
pub use normalize::normalize;
pub use search::{author, category, search};
