use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One of the four fixture tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Users,
    Actors,
    Movies,
    MovieActorLinks,
}

impl TableKind {
    /// Tables in generation order.
    pub fn all() -> [TableKind; 4] {
        [
            TableKind::Users,
            TableKind::Actors,
            TableKind::Movies,
            TableKind::MovieActorLinks,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            TableKind::Users => "users",
            TableKind::Actors => "actors",
            TableKind::Movies => "movies",
            TableKind::MovieActorLinks => "movie_actor_links",
        }
    }

    /// File name of the table inside the output directory.
    pub fn file_name(self) -> String {
        format!("{}.csv", self.name())
    }

    /// Column order of the table. Files carry no header line.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            TableKind::Users => &["id", "email", "password", "role"],
            TableKind::Actors => &["id", "first_name", "last_name", "gender", "birth_date"],
            TableKind::Movies => &["id", "title", "description", "release_date", "rating"],
            TableKind::MovieActorLinks => &["id", "movie_id", "actor_id"],
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        TableKind::all()
            .into_iter()
            .find(|table| table.name() == value)
            .ok_or_else(|| Error::UnknownTable(value.to_string()))
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
