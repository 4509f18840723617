use filmseed_core::{Actor, Gender};

use crate::errors::GenerationError;
use crate::faker_rs::FakeSource;

pub fn generate_actors(
    count: u64,
    source: &mut FakeSource,
) -> impl Iterator<Item = Result<Actor, GenerationError>> {
    (1..=count).map(move |id| {
        Ok(Actor {
            id,
            first_name: source.first_name(),
            last_name: source.last_name(),
            gender: source.choice(&Gender::ALL),
            birth_date: source.date_of_birth()?,
        })
    })
}
