//! Genre vocabulary and the genre filter type.

use std::fmt::{Display, Formatter};

/// Reserved filter value meaning "match any genre".
pub const ALL_GENRES_SENTINEL: &str = "All";

/// Filter choices offered on the browse page, sentinel first.
pub const BROWSE_GENRES: &[&str] = &[
    ALL_GENRES_SENTINEL,
    "Drama",
    "Comedy",
    "Horror",
    "Documentary",
    "Sci-Fi",
    "Action",
    "Thriller",
    "Romance",
    "Animation",
];

/// Genres accepted by the project submission form.
pub const SUBMISSION_GENRES: &[&str] = &[
    "Drama",
    "Comedy",
    "Horror",
    "Documentary",
    "Sci-Fi",
    "Action",
    "Thriller",
    "Romance",
    "Animation",
    "Fantasy",
    "Crime",
    "Adventure",
];

/// Genre filter applied by the query pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenreFilter {
    /// No filtering.
    #[default]
    Any,
    /// Case-sensitive exact match against `Project::genre`.
    Exact(String),
}

impl GenreFilter {
    /// Parses a UI value. The sentinel `All` maps to `Any`; every other
    /// string (including unknown genres) becomes an exact filter.
    pub fn parse(value: &str) -> Self {
        if value == ALL_GENRES_SENTINEL {
            Self::Any
        } else {
            Self::Exact(value.to_string())
        }
    }

    pub fn matches(&self, genre: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => expected == genre,
        }
    }
}

impl Display for GenreFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => f.write_str(ALL_GENRES_SENTINEL),
            Self::Exact(genre) => f.write_str(genre),
        }
    }
}

/// Returns whether `genre` is one the submission form accepts.
pub fn is_submission_genre(genre: &str) -> bool {
    SUBMISSION_GENRES.contains(&genre)
}
