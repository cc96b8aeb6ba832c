use std::fs;
use std::path::Path;

use godzina::config::load_config_from_file;
use godzina::lexicon::loader::{export_builtin, load_builtin, MINUTES_FILE, OFFICIAL_HOURS_LOCATIVE_FILE};
use godzina::lexicon::{load, LexiconSource};
use godzina::{describe, GodzinaError, OutputFormat, TimeOfDay};

fn exported_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    export_builtin(dir.path()).unwrap();
    dir
}

#[test]
fn exported_lists_load_back_identically() {
    let dir = exported_dir();
    let from_dir = load(&LexiconSource::Directory(dir.path().to_path_buf())).unwrap();
    assert_eq!(from_dir, load_builtin().unwrap());
}

#[test]
fn truncated_file_fails_to_load() {
    let dir = exported_dir();
    let path = dir.path().join(OFFICIAL_HOURS_LOCATIVE_FILE);
    let content = fs::read_to_string(&path).unwrap();
    let shortened: Vec<&str> = content.lines().take(20).collect();
    fs::write(&path, shortened.join("\n")).unwrap();

    let err = load(&LexiconSource::Directory(dir.path().to_path_buf())).unwrap_err();
    match err {
        GodzinaError::LexiconTruncated { resource, expected, found } => {
            assert_eq!(resource, OFFICIAL_HOURS_LOCATIVE_FILE);
            assert_eq!(expected, 24);
            assert_eq!(found, 20);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_utf8_file_fails_to_load() {
    let dir = exported_dir();
    let mut bytes = fs::read(dir.path().join(MINUTES_FILE)).unwrap();
    // Latin-2 'ę' instead of the UTF-8 sequence.
    bytes.extend_from_slice(&[0xEA, b'\n']);
    fs::write(dir.path().join(MINUTES_FILE), bytes).unwrap();

    let err = load(&LexiconSource::Directory(dir.path().to_path_buf())).unwrap_err();
    assert!(matches!(err, GodzinaError::LexiconEncoding { .. }));
}

#[test]
fn missing_file_names_its_path() {
    let dir = exported_dir();
    fs::remove_file(dir.path().join(MINUTES_FILE)).unwrap();

    let err = load(&LexiconSource::Directory(dir.path().to_path_buf())).unwrap_err();
    match err {
        GodzinaError::LexiconIo { path, .. } => assert!(path.ends_with(MINUTES_FILE)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn edited_lists_change_the_output() {
    let dir = exported_dir();
    let path = dir.path().join(MINUTES_FILE);
    let content = fs::read_to_string(&path).unwrap();
    fs::write(&path, content.replace("pietnaście", "piętnaście")).unwrap();

    let report = describe("7:15", &LexiconSource::Directory(dir.path().to_path_buf())).unwrap();
    assert_eq!(report.official.declarative, "jest siódma piętnaście");
    assert_eq!(report.unofficial.declarative, "jest kwadrans po siódmej");
}

#[test]
fn describe_rejects_bad_time_before_loading() {
    let missing = LexiconSource::Directory(Path::new("/nonexistent/godzina").to_path_buf());
    let err = describe("25:00", &missing).unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(err, GodzinaError::HourOutOfRange(25)));
}

#[test]
fn describe_builds_full_report() {
    let report = describe("17:55", &LexiconSource::Builtin).unwrap();
    assert_eq!(report.time, TimeOfDay::new(17, 55).unwrap());
    assert_eq!(
        report.to_string(),
        "17:55\n\
         oficjalnie: jest siedemnasta pięćdziesiąt pięć, o siedemnastej pięćdziesiąt pięć\n\
         nieoficjalnie: jest za pięć szósta, za pięć szósta\n"
    );
}

#[test]
fn config_file_points_at_lexicon_dir() {
    let dir = exported_dir();
    let config_path = dir.path().join("godzina.toml");
    fs::write(
        &config_path,
        format!(
            "lexicon_dir = {:?}\nformat = \"json\"\n",
            dir.path().display().to_string()
        ),
    )
    .unwrap();

    let config = load_config_from_file(&config_path).unwrap();
    assert_eq!(config.format, Some(OutputFormat::Json));
    assert_eq!(
        config.lexicon_source(),
        LexiconSource::Directory(dir.path().to_path_buf())
    );
    assert!(load(&config.lexicon_source()).is_ok());
}
