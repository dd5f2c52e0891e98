//! # Blogger Testkit
//!
//! Synthetic post fixtures and the store-level halves of the seed/verify cycle.

pub mod fixtures;
pub mod seed;

pub use fixtures::{DEFAULT_SEED_SIZE, generate_post, generate_seed_batch};
pub use seed::{seed_posts, tear_down_store};
