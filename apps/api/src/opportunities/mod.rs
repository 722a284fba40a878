// Opportunity matching & filtering.
// Match scores are derived per profile at query time, never stored.

pub mod filters;
pub mod handlers;
pub mod matcher;
