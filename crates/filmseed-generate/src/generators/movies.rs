use rand::Rng;

use filmseed_core::{MAX_RATING, MIN_RATING, Movie};

use crate::errors::GenerationError;
use crate::faker_rs::FakeSource;

pub const TITLE_MAX_CHARS: usize = 20;
pub const DESCRIPTION_MAX_CHARS: usize = 80;

pub fn generate_movies(
    count: u64,
    source: &mut FakeSource,
) -> impl Iterator<Item = Result<Movie, GenerationError>> {
    (1..=count).map(move |id| {
        let title = source.text(TITLE_MAX_CHARS)?;
        let description = source.text(DESCRIPTION_MAX_CHARS)?;
        let release_date = source.date_this_decade()?;
        let rating = source.rng().random_range(MIN_RATING..=MAX_RATING);
        Ok(Movie::new(id, title, description, release_date, rating)?)
    })
}
