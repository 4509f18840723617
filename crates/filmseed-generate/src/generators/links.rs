use rand::Rng;

use filmseed_core::MovieActorLink;

use crate::errors::GenerationError;

/// Draw `count` links with references uniform over `[1, movies]` and
/// `[1, actors]`. The same pair may appear more than once.
pub fn generate_links<R: Rng + ?Sized>(
    count: u64,
    movies: u64,
    actors: u64,
    rng: &mut R,
) -> Result<impl Iterator<Item = MovieActorLink>, GenerationError> {
    if count > 0 && (movies == 0 || actors == 0) {
        return Err(GenerationError::InvalidOptions(format!(
            "cannot link {count} rows with movies={movies} and actors={actors}"
        )));
    }

    Ok((1..=count).map(move |id| MovieActorLink {
        id,
        movie_id: rng.random_range(1..=movies),
        actor_id: rng.random_range(1..=actors),
    }))
}
