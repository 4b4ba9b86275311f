//! Record against a real repository, then replay without one.

mod common;

use std::path::Path;
use std::process::Command;

use revdate::context::ServiceContext;
use revdate::RepositoryInspector;

fn dates_for(ctx: ServiceContext) -> (String, String) {
    let inspector = RepositoryInspector::new(ctx);
    let tracked = inspector.revision_date(Path::new("docs/index.md"), "en").unwrap();
    let untracked = inspector.revision_date(Path::new("docs/draft.md"), "en").unwrap();
    (tracked.iso_datetime, untracked.iso_datetime)
}

#[test]
fn replay_reproduces_recorded_dates() {
    let repo = tempfile::tempdir().unwrap();
    common::docs_repo(repo.path());
    let cassette_dir = tempfile::tempdir().unwrap();
    let cassette = cassette_dir.path().join("docs.cassette.yaml");

    let recorded = dates_for(ServiceContext::recording(repo.path(), &cassette).unwrap());
    assert_eq!(recorded.0, "2024-02-01 00:00:00");
    assert!(cassette.exists());

    // The repository is gone; the cassette alone answers the same questions.
    drop(repo);
    let first = dates_for(ServiceContext::replaying(&cassette).unwrap());
    let second = dates_for(ServiceContext::replaying(&cassette).unwrap());
    assert_eq!(first, recorded);
    assert_eq!(second, recorded);
}

#[test]
fn cli_replays_a_cassette() {
    let repo = tempfile::tempdir().unwrap();
    common::docs_repo(repo.path());
    let cassette_dir = tempfile::tempdir().unwrap();
    let cassette = cassette_dir.path().join("cli.cassette.yaml");

    let record = Command::new(env!("CARGO_BIN_EXE_revdate"))
        .arg("--repo")
        .arg(repo.path())
        .args(["date", "docs/guide.md"])
        .env("REVDATE_RECORD", &cassette)
        .env_remove("REVDATE_REPLAY")
        .output()
        .unwrap();
    assert!(record.status.success());

    let replay = Command::new(env!("CARGO_BIN_EXE_revdate"))
        .args(["date", "docs/guide.md"])
        .env("REVDATE_REPLAY", &cassette)
        .output()
        .unwrap();
    assert!(replay.status.success());
    assert_eq!(record.stdout, replay.stdout);
}

#[test]
fn replaying_files_in_another_order_fails_instead_of_swapping_dates() {
    let repo = tempfile::tempdir().unwrap();
    common::docs_repo(repo.path());
    let cassette_dir = tempfile::tempdir().unwrap();
    let cassette = cassette_dir.path().join("order.cassette.yaml");

    {
        let inspector =
            RepositoryInspector::new(ServiceContext::recording(repo.path(), &cassette).unwrap());
        inspector.last_modified(Path::new("docs/index.md")).unwrap();
        inspector.last_modified(Path::new("docs/guide.md")).unwrap();
    }

    let inspector = RepositoryInspector::new(ServiceContext::replaying(&cassette).unwrap());
    let err = inspector.last_modified(Path::new("docs/guide.md")).unwrap_err();
    assert!(matches!(err, revdate::Error::Cassette(_)));
}
