use std::fs;
use std::path::PathBuf;

use placematch::{
    load_idf_table, load_stopwords, ConfigLoadError, MatchOutcome, PlaceMatchConfig,
    ResourceError, ResourcePaths, ResourceStore, ResourceWarning, StopwordSet,
};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write resource");
    path
}

#[test]
fn missing_stopword_file_falls_back_to_builtin_list() {
    let dir = TempDir::new().unwrap();
    let paths = ResourcePaths {
        stopwords: Some(dir.path().join("absent.txt")),
        idf: None,
    };

    let loaded = ResourceStore::load(&paths);
    assert_eq!(loaded.warnings.len(), 1);
    assert!(matches!(
        &loaded.warnings[0],
        ResourceWarning::StopwordsUnavailable { path, .. } if path.ends_with("absent.txt")
    ));

    let fallback = StopwordSet::fallback();
    assert_eq!(loaded.store.stopwords.len(), fallback.len());

    // The fallback list still strips the common suffixes.
    let matcher = loaded.store.matcher();
    assert_eq!(matcher.match_degree("西湖风景名胜区", "西湖"), 1.0);
}

#[test]
fn missing_idf_file_leaves_an_empty_table() {
    let dir = TempDir::new().unwrap();
    let paths = ResourcePaths {
        stopwords: None,
        idf: Some(dir.path().join("absent_idf.txt")),
    };

    let loaded = ResourceStore::load(&paths);
    assert!(loaded.store.idf.is_empty());
    assert!(matches!(
        loaded.warnings.as_slice(),
        [ResourceWarning::IdfUnavailable { .. }]
    ));

    // Scoring still works with every token at the default IDF.
    let matcher = loaded.store.matcher();
    let score = matcher.match_degree("杭州西湖公园", "杭州西湖");
    assert!(score > 0.0 && score < 1.0);
}

#[test]
fn malformed_idf_lines_are_skipped_and_reported() {
    let dir = TempDir::new().unwrap();
    let idf = write(
        &dir,
        "idf.txt",
        "# comment\n西湖=5.8\nno separator\n=3.0\n断桥=abc\n雷峰塔=-1\n黄山 = 6.1\n\n",
    );

    let (table, report) = load_idf_table(&idf).expect("file exists");
    assert_eq!(report.accepted, 2);
    assert_eq!(report.skipped, 4);
    assert_eq!(table.get("西湖"), Some(5.8));
    assert_eq!(table.get("黄山"), Some(6.1));
    assert_eq!(table.get("断桥"), None);

    let loaded = ResourceStore::load(&ResourcePaths {
        stopwords: None,
        idf: Some(idf.clone()),
    });
    assert_eq!(
        loaded.warnings,
        vec![ResourceWarning::MalformedIdfLines {
            path: idf,
            skipped: 4
        }]
    );
    assert_eq!(loaded.store.idf.len(), 2);
}

#[test]
fn custom_stopword_file_is_used() {
    let dir = TempDir::new().unwrap();
    let stopwords = write(&dir, "stop.txt", "  公园  \n\n广场\n公园\n");

    let set = load_stopwords(&stopwords).expect("file exists");
    assert_eq!(set.len(), 2);

    let loaded = ResourceStore::load(&ResourcePaths {
        stopwords: Some(stopwords),
        idf: None,
    });
    assert!(loaded.warnings.is_empty());
    let matcher = loaded.store.matcher();
    assert_eq!(matcher.normalize("人民广场"), "人民");
    // Not in the custom list any more.
    assert_eq!(matcher.normalize("西湖景区"), "西湖景区");
}

#[test]
fn fallible_loaders_report_the_path() {
    let err = load_stopwords("/definitely/not/here.txt").expect_err("missing");
    let ResourceError::Read { path, .. } = &err;
    assert_eq!(path, &PathBuf::from("/definitely/not/here.txt"));
    assert!(err.to_string().contains("/definitely/not/here.txt"));

    assert!(load_idf_table("/definitely/not/here.txt").is_err());
}

#[test]
fn comparisons_never_fail_on_odd_input() {
    let matcher = ResourceStore::bundled().matcher();
    let odd = [
        "",
        " ",
        "\u{0}",
        "\u{200b}",
        "🏔️🏔️",
        "ｱｲｳ",
        "a\u{301}",
        "路路路",
        "国家重点",
        "\t\n",
    ];
    for a in odd {
        for b in odd {
            let result = matcher.is_same_place(a, b);
            assert!(result.score.is_finite());
            assert!((0.0..=1.0 + 1e-9).contains(&result.score));
            if a.trim().is_empty() || b.trim().is_empty() {
                assert_eq!(result.outcome, MatchOutcome::EmptyName);
            }
        }
    }
}

#[test]
fn config_file_errors_surface_as_typed_errors() {
    let dir = TempDir::new().unwrap();

    let err = PlaceMatchConfig::from_file(dir.path().join("absent.yaml")).expect_err("missing");
    assert!(matches!(err, ConfigLoadError::FileRead(_)));

    let bad_yaml = write(&dir, "bad.yaml", "version: [unterminated\n");
    let err = PlaceMatchConfig::from_file(&bad_yaml).expect_err("bad yaml");
    assert!(matches!(err, ConfigLoadError::YamlParse(_)));

    let bad_weights = write(
        &dir,
        "weights.yaml",
        "version: \"1.0\"\nmatcher:\n  weights:\n    surface: -1.0\n    token: 0.5\n    phonetic: 0.5\n",
    );
    let err = PlaceMatchConfig::from_file(&bad_weights).expect_err("negative weight");
    assert!(matches!(err, ConfigLoadError::Validation(_)));
}

#[test]
fn config_with_missing_resources_still_builds() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "config.yaml",
        "version: \"1.0\"\nresources:\n  stopwords: nope.txt\n  idf: nope_idf.txt\n",
    );

    let matcher = PlaceMatchConfig::from_file(&config)
        .expect("valid config")
        .build_matcher()
        .expect("missing resources only warn");
    assert_eq!(matcher.match_degree("黄山风景名胜区", "黄山"), 1.0);
    assert!(matcher.idf_table().is_empty());
}
