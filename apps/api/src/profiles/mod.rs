// Profile proxy — thin read/upsert passthrough to the external datastore.

pub mod handlers;
