use gamecat::backend::export;
use gamecat::{Catalog, CatalogError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADER: &str = "title,released,developers,publishers,genres";

fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    fs::write(&path, content).unwrap();
    path
}

fn happy(dir: &Path) -> PathBuf {
    write_csv(
        dir,
        "happy.csv",
        &[
            "Mount & Blade: Warband,2010,TaleWorlds Entertainment,\"Paradox Interactive, TaleWorlds Entertainment\",\"Role-playing (RPG), Simulator, Strategy, Tactical\"",
            "Fallout Tactics: Brotherhood of Steel,2001,Micro Forte,\"14 Degrees East, Interplay Entertainment\",\"Role-playing (RPG), Strategy, Tactical, Turn-based strategy (TBS)\"",
            "",
            "Hades,2020,Supergiant Games,Supergiant Games,\"Adventure, Hack and slash/Beat em up, Indie, Role-playing (RPG)\"",
        ],
    )
}

#[test]
fn loads_every_data_row() {
    let tmp = TempDir::new().unwrap();
    let catalog = Catalog::load_path(&happy(tmp.path())).unwrap();
    assert_eq!(catalog.len(), 3);
}

#[test]
fn lists_genres_alphabetically() {
    let tmp = TempDir::new().unwrap();
    let catalog = Catalog::load_path(&happy(tmp.path())).unwrap();

    assert_eq!(
        catalog.all_genres(),
        [
            "Adventure",
            "Hack and slash/Beat em up",
            "Indie",
            "Role-playing (RPG)",
            "Simulator",
            "Strategy",
            "Tactical",
            "Turn-based strategy (TBS)",
        ]
    );
}

#[test]
fn orders_strategy_games_by_release() {
    let tmp = TempDir::new().unwrap();
    let catalog = Catalog::load_path(&happy(tmp.path())).unwrap();

    let strategy = catalog.games_by_genre("Strategy");
    assert_eq!(strategy[0].title(), "Fallout Tactics: Brotherhood of Steel");
    assert_eq!(strategy[1].title(), "Mount & Blade: Warband");
}

#[test]
fn tba_simulators_come_last() {
    let tmp = TempDir::new().unwrap();
    let path = write_csv(
        tmp.path(),
        "tba.csv",
        &[
            "KnightOut,TBA,Mad Bit Games,Mad Bit Games,\"Indie, Simulator\"",
            "Mount & Blade: Warband,2010,TaleWorlds Entertainment,\"Paradox Interactive, TaleWorlds Entertainment\",\"Role-playing (RPG), Simulator, Strategy\"",
        ],
    );
    let catalog = Catalog::load_path(&path).unwrap();

    let simulators = catalog.simulator_games();
    assert_eq!(simulators[0].title(), "Mount & Blade: Warband");
    assert_eq!(simulators[1].title(), "KnightOut");
}

#[test]
fn ranks_publishers_by_game_count() {
    let tmp = TempDir::new().unwrap();
    let path = write_csv(
        tmp.path(),
        "publishers.csv",
        &[
            "Fallout,1997,Interplay Entertainment,Interplay Entertainment,Role-playing (RPG)",
            "Fallout 2,1998,Black Isle Studios,Interplay Entertainment,Role-playing (RPG)",
            "Baldur's Gate,1998,BioWare,\"Interplay Entertainment, Black Isle Studios\",Role-playing (RPG)",
            "Planescape: Torment,1999,Black Isle Studios,Interplay Entertainment,Role-playing (RPG)",
            "Icewind Dale,2000,Black Isle Studios,\"Interplay Entertainment, Black Isle Studios\",Role-playing (RPG)",
            "Divinity: Original Sin,2014,Larian Studios,Larian Studios,Role-playing (RPG)",
        ],
    );
    let catalog = Catalog::load_path(&path).unwrap();

    let counts = catalog.publisher_counts();
    assert_eq!(counts[0], ("Interplay Entertainment".to_string(), 5));
    assert_eq!(counts[1], ("Black Isle Studios".to_string(), 2));
    assert_eq!(counts[2], ("Larian Studios".to_string(), 1));
}

#[test]
fn nonexistent_file_is_unavailable() {
    let tmp = TempDir::new().unwrap();
    let err = Catalog::load_path(&tmp.path().join("nonexistent.csv")).unwrap_err();
    assert!(matches!(err, CatalogError::SourceUnavailable(_)));
}

#[test]
fn empty_file_is_empty_source() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("empty.csv");
    fs::write(&path, "").unwrap();

    let err = Catalog::load_path(&path).unwrap_err();
    assert!(matches!(err, CatalogError::EmptySource));
}

#[test]
fn short_row_is_malformed() {
    let tmp = TempDir::new().unwrap();
    let path = write_csv(
        tmp.path(),
        "invalid.csv",
        &["Hades,2020,Supergiant Games,Supergiant Games"],
    );

    let err = Catalog::load_path(&path).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::MalformedRecord {
            line: Some(2),
            found: 4
        }
    ));
}

#[test]
fn header_only_file_is_empty_catalog() {
    let tmp = TempDir::new().unwrap();
    let path = write_csv(tmp.path(), "onlyheaders.csv", &[]);

    let catalog = Catalog::load_path(&path).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn exports_reports_from_loaded_file() {
    let tmp = TempDir::new().unwrap();
    let catalog = Catalog::load_path(&happy(tmp.path())).unwrap();
    let out = tmp.path().join("out");
    fs::create_dir(&out).unwrap();

    let settings = gamecat::backend::settings::Settings::default();
    export::export_all(&catalog, &settings, "Simulator", &out).unwrap();

    let genres = fs::read_to_string(out.join("genres.txt")).unwrap();
    assert!(genres.starts_with("Adventure,Hack and slash/Beat em up,"));
    assert!(!genres.ends_with('\n'));

    let sims = fs::read_to_string(out.join("simulator_games.csv")).unwrap();
    assert_eq!(sims, "released,title\n2010,Mount & Blade: Warband\n");

    let publishers = fs::read_to_string(out.join("game_publishers.csv")).unwrap();
    assert!(publishers.starts_with("publishers,game_count\n"));
}
