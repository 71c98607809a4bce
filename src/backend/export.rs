use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::catalog::Catalog;
use super::error::CatalogError;
use super::parser::DELIMITER;
use super::record::{Column, GameRecord};
use super::settings::Settings;

/// Header of the count column in the publisher report.
pub const GAME_COUNT_HEADER: &str = "game_count";

/// Writes every genre on one comma-separated line, without a trailing newline.
pub fn write_genres<W: Write>(catalog: &Catalog, mut writer: W) -> Result<(), CatalogError> {
    let separator = DELIMITER.to_string();
    let line = catalog.all_genres().join(separator.as_str());
    writer.write_all(line.as_bytes()).map_err(io_error)?;
    writer.flush().map_err(io_error)?;
    Ok(())
}

/// Writes `released,title` rows for `genre` in release order.
pub fn write_genre_games<W: Write>(
    catalog: &Catalog,
    genre: &str,
    writer: W,
) -> Result<(), CatalogError> {
    write_release_rows(&catalog.games_by_genre(genre), writer)
}

/// Writes a `released,title` header and one row per game, in the given order.
pub fn write_release_rows<W: Write>(games: &[&GameRecord], writer: W) -> Result<(), CatalogError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([Column::Released.header(), Column::Title.header()])?;
    for game in games {
        csv.write_record([game.released(), game.title()])?;
    }
    csv.flush().map_err(io_error)?;
    Ok(())
}

/// Writes `publishers,game_count` rows, most prolific publisher first.
pub fn write_publisher_counts<W: Write>(catalog: &Catalog, writer: W) -> Result<(), CatalogError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([Column::Publishers.header(), GAME_COUNT_HEADER])?;
    for (publisher, count) in catalog.publisher_counts() {
        csv.write_record([publisher, count.to_string()])?;
    }
    csv.flush().map_err(io_error)?;
    Ok(())
}

/// Writes the whole catalog as a JSON array of records.
pub fn write_json<W: Write>(catalog: &Catalog, writer: W) -> Result<(), CatalogError> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, catalog.games())?;
    writer.flush().map_err(io_error)?;
    Ok(())
}

/// Writes the genre, genre-games and publisher reports into `out_dir`
/// and returns the paths written.
pub fn export_all(
    catalog: &Catalog,
    settings: &Settings,
    genre: &str,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, CatalogError> {
    let genres_path = out_dir.join(&settings.genres_file);
    write_genres(catalog, create(&genres_path)?)?;

    let games_path = out_dir.join(genre_games_file_name(genre));
    write_genre_games(catalog, genre, create(&games_path)?)?;

    let publishers_path = out_dir.join(&settings.publishers_file);
    write_publisher_counts(catalog, create(&publishers_path)?)?;

    log::info!("Wrote reports to {:?}", out_dir);
    Ok(vec![genres_path, games_path, publishers_path])
}

/// Report file for a genre, e.g. `simulator_games.csv` for `Simulator`.
/// Characters other than ASCII letters and digits become `_`.
pub fn genre_games_file_name(genre: &str) -> String {
    let slug: String = genre
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{slug}_games.csv")
}

pub fn create(path: &Path) -> Result<BufWriter<File>, CatalogError> {
    let file = File::create(path).map_err(|source| CatalogError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

fn io_error(e: std::io::Error) -> CatalogError {
    CatalogError::Write(e)
}
