use std::collections::HashSet;

use crate::errors::GenerationError;

/// Tracks values already emitted for a column that must stay unique.
#[derive(Debug)]
pub struct UniqueValues {
    field: &'static str,
    max_attempts: u32,
    seen: HashSet<String>,
}

impl UniqueValues {
    pub fn new(field: &'static str, max_attempts: u32) -> Self {
        Self {
            field,
            max_attempts,
            seen: HashSet::new(),
        }
    }

    /// Draw from `next` until it yields an unseen value.
    pub fn draw<F>(&mut self, mut next: F) -> Result<String, GenerationError>
    where
        F: FnMut() -> String,
    {
        for _ in 0..self.max_attempts {
            let value = next();
            if self.seen.insert(value.clone()) {
                return Ok(value);
            }
        }
        Err(GenerationError::UniqueExhausted {
            field: self.field,
            attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_source_fails() {
        let mut unique = UniqueValues::new("email", 5);
        unique.draw(|| "same@example.org".to_string()).expect("first draw");
        let err = unique
            .draw(|| "same@example.org".to_string())
            .expect_err("second draw must fail");
        assert!(matches!(
            err,
            GenerationError::UniqueExhausted {
                field: "email",
                attempts: 5
            }
        ));
        assert_eq!(unique.seen.len(), 1);
    }

    #[test]
    fn retries_until_unseen() {
        let mut unique = UniqueValues::new("email", 10);
        let mut values = ["a", "a", "a", "b"].into_iter();
        unique.draw(|| "a".to_string()).expect("a");
        let value = unique
            .draw(|| values.next().unwrap_or("z").to_string())
            .expect("b after retries");
        assert_eq!(value, "b");
    }
}
