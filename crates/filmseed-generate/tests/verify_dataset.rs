use std::fs;
use std::path::PathBuf;

use filmseed_core::TableKind;
use filmseed_generate::{RowCounts, VerifyOptions, verify_dataset};

fn temp_dataset_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("filmseed_verify_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dataset dir");
    dir
}

fn options() -> VerifyOptions {
    VerifyOptions {
        rows: RowCounts {
            users: 2,
            actors: 2,
            movies: 2,
            movie_actor_links: 3,
        },
        ..VerifyOptions::default()
    }
}

fn write_valid_dataset(dir: &PathBuf) {
    fs::write(
        dir.join("users.csv"),
        "1;ana@example.org;aB3$xY9!kq;user\n2;rui@example.com;Zz1(pp8_Qw;admin\n",
    )
    .expect("write users");
    fs::write(
        dir.join("actors.csv"),
        "1;Ana;Lima;f;1981-03-09\n2;Rui;Costa;m;1975-11-30\n",
    )
    .expect("write actors");
    fs::write(
        dir.join("movies.csv"),
        "1;Lorem ipsum.;Dolor sit amet.;2021-05-01;0\n2;Sed do.;Eiusmod tempor.;2023-02-14;10\n",
    )
    .expect("write movies");
    fs::write(dir.join("movie_actor_links.csv"), "1;1;2\n2;2;2\n3;2;2\n")
        .expect("write links");
}

#[test]
fn valid_dataset_is_clean() {
    let dir = temp_dataset_dir("clean");
    write_valid_dataset(&dir);

    let report = verify_dataset(&dir, &options()).expect("verify");
    assert!(report.is_clean(), "{:?}", report.violations);
    assert_eq!(report.rows_checked.get(&TableKind::MovieActorLinks), Some(&3));
}

#[test]
fn broken_rows_are_reported() {
    let dir = temp_dataset_dir("broken");
    write_valid_dataset(&dir);
    fs::write(
        dir.join("users.csv"),
        "1;ana@example.org;aB3$xY9!kq;user\n3;ana@example.org;Zz1(pp8_Qw;owner\n",
    )
    .expect("write users");
    fs::write(
        dir.join("movies.csv"),
        "1;Lorem ipsum.;Dolor sit amet.;2021-13-01;0\n2;Sed do.;Eiusmod tempor.;2023-02-14;11\n",
    )
    .expect("write movies");
    fs::write(dir.join("movie_actor_links.csv"), "1;3;2\n2;2;0\n").expect("write links");

    let report = verify_dataset(&dir, &options()).expect("verify");
    for code in [
        "id_sequence",
        "duplicate_email",
        "unknown_role",
        "invalid_date",
        "rating_out_of_range",
        "movie_ref_out_of_range",
        "actor_ref_out_of_range",
        "row_count",
    ] {
        assert_eq!(
            report.violations_with_code(code).count(),
            1,
            "{code}: {:?}",
            report.violations
        );
    }

    let row_count = report
        .violations_with_code("row_count")
        .next()
        .expect("row_count violation");
    assert_eq!(row_count.table, TableKind::MovieActorLinks);
    assert_eq!(row_count.line, None);
}

#[test]
fn missing_files_and_short_rows() {
    let dir = temp_dataset_dir("missing");
    write_valid_dataset(&dir);
    fs::remove_file(dir.join("actors.csv")).expect("remove actors");
    fs::write(dir.join("movie_actor_links.csv"), "1;1;2\n2;2\n3;1;1\n").expect("write links");

    let report = verify_dataset(&dir, &options()).expect("verify");
    let missing: Vec<_> = report.violations_with_code("missing_file").collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].table, TableKind::Actors);

    let short: Vec<_> = report.violations_with_code("column_count").collect();
    assert_eq!(short.len(), 1);
    assert_eq!(short[0].line, Some(2));
}
