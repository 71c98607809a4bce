use serde::Serialize;

use super::error::CatalogError;
use super::parser::CsvParser;

/// Release marker for games without an announced year.
pub const TBA: &str = "TBA";

/// Number of top-level fields on every data line.
pub const COLUMN_COUNT: usize = 5;

/// Position of each field on a data line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Title = 0,
    Released = 1,
    Developers = 2,
    Publishers = 3,
    Genres = 4,
}

impl Column {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Header name used by the source file and the report writers.
    pub fn header(self) -> &'static str {
        match self {
            Column::Title => "title",
            Column::Released => "released",
            Column::Developers => "developers",
            Column::Publishers => "publishers",
            Column::Genres => "genres",
        }
    }
}

/// One parsed catalog line. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    title: String,
    released: String,
    developers: Vec<String>,
    publishers: Vec<String>,
    genres: Vec<String>,
}

impl GameRecord {
    /// Parses one data line. Fails unless the line splits into exactly
    /// [`COLUMN_COUNT`] fields; title and release are kept as-is.
    pub fn parse_line(line: &str) -> Result<Self, CatalogError> {
        let mut fields = CsvParser::split_line(line);
        if fields.len() != COLUMN_COUNT {
            return Err(CatalogError::malformed(fields.len()));
        }

        let mut take = |col: Column| std::mem::take(&mut fields[col.index()]);
        let title = take(Column::Title);
        let released = take(Column::Released);
        let developers = CsvParser::parse_column(&take(Column::Developers));
        let publishers = CsvParser::parse_column(&take(Column::Publishers));
        let genres = CsvParser::parse_column(&take(Column::Genres));

        Ok(Self {
            title,
            released,
            developers,
            publishers,
            genres,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn released(&self) -> &str {
        &self.released
    }

    pub fn developers(&self) -> &[String] {
        &self.developers
    }

    pub fn publishers(&self) -> &[String] {
        &self.publishers
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn is_tba(&self) -> bool {
        self.released == TBA
    }

    /// The release year, or `None` for TBA and anything that is not a year.
    pub fn release_year(&self) -> Option<u16> {
        if self.is_tba() {
            return None;
        }
        self.released.trim().parse().ok()
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}
