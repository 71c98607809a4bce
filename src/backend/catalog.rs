use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::io::BufRead;
use std::path::Path;

use super::error::CatalogError;
use super::loader;
use super::record::GameRecord;

/// Genre queried by `simulator_games`.
pub const SIMULATOR_GENRE: &str = "Simulator";

/// Orders two records by release year, TBA (and any non-year) last.
pub fn by_release(a: &GameRecord, b: &GameRecord) -> Ordering {
    release_key(a).cmp(&release_key(b))
}

fn release_key(record: &GameRecord) -> u32 {
    record.release_year().map_or(u32::MAX, u32::from)
}

/// Reads one line without its `\n` or `\r\n` terminator. Bytes that are not
/// valid UTF-8 are replaced rather than failing the load.
fn next_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<Option<String>, CatalogError> {
    buf.clear();
    let read = reader
        .read_until(b'\n', buf)
        .map_err(CatalogError::SourceUnavailable)?;
    if read == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// In-memory set of game records in file order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    games: Vec<GameRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a single line source.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.load(reader)?;
        Ok(catalog)
    }

    /// Opens `path` and loads it into a fresh catalog.
    pub fn load_path(path: &Path) -> Result<Self, CatalogError> {
        let reader = loader::open_source(path)?;
        Self::from_reader(reader)
    }

    /// Reads a header line followed by data lines and appends the parsed records.
    ///
    /// Loading is all-or-nothing: records are staged and only appended once
    /// every line has parsed, so a failed load leaves the catalog as it was.
    /// Calling `load` again on a loaded catalog appends the new records.
    /// Returns the number of records added.
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<usize, CatalogError> {
        let result = Self::read_records(reader);
        match result {
            Ok(staged) => {
                let added = staged.len();
                self.games.extend(staged);
                log::debug!("Loaded {} records ({} total)", added, self.games.len());
                Ok(added)
            }
            Err(e) => {
                log::warn!("Catalog load failed: {e}");
                Err(e)
            }
        }
    }

    fn read_records<R: BufRead>(mut reader: R) -> Result<Vec<GameRecord>, CatalogError> {
        let mut buf = Vec::new();

        match next_line(&mut reader, &mut buf)? {
            Some(header) if !header.is_empty() => {}
            _ => return Err(CatalogError::EmptySource),
        }

        let mut staged = Vec::new();
        // Line 1 is the header.
        let mut line_number = 1;
        while let Some(line) = next_line(&mut reader, &mut buf)? {
            line_number += 1;
            if line.is_empty() {
                log::debug!("Skipping blank line {line_number}");
                continue;
            }
            let record = GameRecord::parse_line(&line).map_err(|e| e.at_line(line_number))?;
            staged.push(record);
        }

        Ok(staged)
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Every distinct genre, ascending.
    pub fn all_genres(&self) -> Vec<String> {
        let genres: BTreeSet<&str> = self
            .games
            .iter()
            .flat_map(|g| g.genres())
            .map(String::as_str)
            .collect();
        genres.into_iter().map(str::to_string).collect()
    }

    /// Records tagged with `genre`, oldest release first, TBA last.
    /// Equal releases keep catalog order.
    pub fn games_by_genre(&self, genre: &str) -> Vec<&GameRecord> {
        let mut matching: Vec<&GameRecord> =
            self.games.iter().filter(|g| g.has_genre(genre)).collect();
        for game in matching.iter().filter(|g| !g.is_tba() && g.release_year().is_none()) {
            log::warn!(
                "Release '{}' of '{}' is not a year, sorting it with TBA",
                game.released(),
                game.title()
            );
        }
        // sort_by is stable
        matching.sort_by(|a, b| by_release(a, b));
        matching
    }

    pub fn simulator_games(&self) -> Vec<&GameRecord> {
        self.games_by_genre(SIMULATOR_GENRE)
    }

    /// Occurrences of each publisher across all records, highest count first.
    /// Equal counts keep the order in which publishers first appear.
    pub fn publisher_counts(&self) -> Vec<(String, usize)> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, usize)> = Vec::new();

        for publisher in self.games.iter().flat_map(|g| g.publishers()) {
            match positions.get(publisher.as_str()) {
                Some(&pos) => counts[pos].1 += 1,
                None => {
                    positions.insert(publisher.as_str(), counts.len());
                    counts.push((publisher.as_str(), 1));
                }
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect()
    }
}
