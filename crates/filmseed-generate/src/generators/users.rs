use filmseed_core::{Role, User};

use crate::errors::GenerationError;
use crate::faker_rs::FakeSource;
use crate::unique::UniqueValues;

/// Lazily produce `count` users. Emails stay unique for the whole table.
pub fn generate_users(
    count: u64,
    source: &mut FakeSource,
    max_unique_attempts: u32,
) -> impl Iterator<Item = Result<User, GenerationError>> {
    let mut emails = UniqueValues::new("email", max_unique_attempts);

    (1..=count).map(move |id| {
        let email = emails.draw(|| source.email())?;
        let password = source.password();
        let role = source.choice(&Role::ALL);
        Ok(User {
            id,
            email,
            password,
            role,
        })
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::faker_rs::LocaleKey;

    #[test]
    fn huge_counts_are_produced_lazily() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap_or_default();
        let mut source =
            FakeSource::new(LocaleKey::EnUs, reference, ChaCha8Rng::seed_from_u64(2));

        let users: Vec<User> = generate_users(u64::MAX, &mut source, 1000)
            .take(3)
            .collect::<Result<_, _>>()
            .expect("first users");

        let ids: Vec<u64> = users.iter().map(|user| user.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
