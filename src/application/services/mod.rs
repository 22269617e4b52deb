mod resolve_service;
mod shorten_service;

pub use resolve_service::ResolveService;
pub use shorten_service::{ShortenOutcome, ShortenService};
