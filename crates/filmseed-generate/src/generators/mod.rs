//! One generation routine per fixture table.
//!
//! Every routine assigns 1-based sequential ids and draws the remaining
//! fields from the table's [`FakeSource`](crate::faker_rs::FakeSource).

mod actors;
mod links;
mod movies;
mod users;

pub use actors::generate_actors;
pub use links::generate_links;
pub use movies::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS, generate_movies};
pub use users::generate_users;
