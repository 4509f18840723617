use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::TableKind;
use crate::types::{Gender, Role};
use crate::{DATE_FORMAT, MAX_RATING, MIN_RATING};

/// A row of one of the fixture tables.
pub trait Record {
    /// Table the record belongs to.
    fn table(&self) -> TableKind;
    /// 1-based sequential identifier.
    fn id(&self) -> u64;
    /// Field values in the table's column order.
    fn fields(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub rating: u8,
}

impl Movie {
    /// Build a movie, rejecting ratings outside the allowed range.
    pub fn new(
        id: u64,
        title: String,
        description: String,
        release_date: NaiveDate,
        rating: u8,
    ) -> Result<Self> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(Error::InvalidRecord(format!(
                "movie {id}: rating {rating} outside [{MIN_RATING}, {MAX_RATING}]"
            )));
        }
        Ok(Self {
            id,
            title,
            description,
            release_date,
            rating,
        })
    }
}

/// Association between a movie and an actor. References are not enforced by
/// any database, so the generator keeps them inside the generated id ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieActorLink {
    pub id: u64,
    pub movie_id: u64,
    pub actor_id: u64,
}

impl Record for User {
    fn table(&self) -> TableKind {
        TableKind::Users
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.email.clone(),
            self.password.clone(),
            self.role.to_string(),
        ]
    }
}

impl Record for Actor {
    fn table(&self) -> TableKind {
        TableKind::Actors
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.gender.to_string(),
            self.birth_date.format(DATE_FORMAT).to_string(),
        ]
    }
}

impl Record for Movie {
    fn table(&self) -> TableKind {
        TableKind::Movies
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.description.clone(),
            self.release_date.format(DATE_FORMAT).to_string(),
            self.rating.to_string(),
        ]
    }
}

impl Record for MovieActorLink {
    fn table(&self) -> TableKind {
        TableKind::MovieActorLinks
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.movie_id.to_string(),
            self.actor_id.to_string(),
        ]
    }
}
