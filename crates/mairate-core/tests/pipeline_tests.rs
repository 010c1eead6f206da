//! End-to-end pipeline tests: master CSV files on disk through to a
//! ranked leaderboard.

use std::fs;
use std::path::PathBuf;

use mairate_core::{CatalogPair, Pool, aggregate, export, resolve_all, score};

const CURRENT_MASTER: &str = "\
曲名,難易度,STDORDX,譜面定数,レベル,画像ファイル名
Ether Star,MAS,DX,13.7,13+,ether_star.png
Valsqotch,MAS,DX,13.9,13+,valsqotch.png
Regulus,EXP,DX,12.4,12+,
";

const LEGACY_MASTER: &str = "\
曲名,難易度,STDORDX,譜面定数,レベル,画像ファイル名
Oshama Scramble!,MAS,STD,13.0,13,oshama.png
Garakuta Doll Play,MAS,DX,13.9,13+,garakuta.png
";

const SCORES: &str = "\
曲名,難易度,STDORDX,スコア
Ether Star,MAS,DX,1004321
Valsqotch,MAS,DX,997500
Oshama Scramble!,MAS,STD,1010000
Garakuta Doll Play,MAS,DX,985000
Unknown Song,MAS,DX,1000000
Regulus,EXP,DX,bad-score
";

struct Fixture {
    dir: tempfile::TempDir,
    current: PathBuf,
    legacy: PathBuf,
    scores: PathBuf,
}

fn write_fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let current = dir.path().join("new_song_master.csv");
    let legacy = dir.path().join("old_song_master.csv");
    let scores = dir.path().join("scores.csv");

    // Master files carry a UTF-8 BOM like the upstream exports
    let mut current_bytes = vec![0xEF, 0xBB, 0xBF];
    current_bytes.extend_from_slice(CURRENT_MASTER.as_bytes());
    fs::write(&current, current_bytes).unwrap();
    fs::write(&legacy, LEGACY_MASTER).unwrap();
    fs::write(&scores, SCORES).unwrap();

    Fixture {
        dir,
        current,
        legacy,
        scores,
    }
}

#[test]
fn test_full_pipeline() {
    let fixture = write_fixture();

    let catalogs = CatalogPair::load(&fixture.current, &fixture.legacy);
    assert_eq!(catalogs.current.len(), 3);
    assert_eq!(catalogs.legacy.len(), 2);

    // The bad-score row is dropped at import time
    let entries = score::load(&fixture.scores).unwrap();
    assert_eq!(entries.len(), 5);

    let records = resolve_all(entries, &catalogs);
    assert_eq!(records.len(), 5);
    assert_eq!(
        records
            .iter()
            .filter(|r| r.pool == Pool::Unresolved)
            .count(),
        1
    );

    let board = aggregate(&records, 15, 35);
    assert_eq!(board.current.len(), 2);
    assert_eq!(board.legacy.len(), 2);

    // Ether Star: 100.4321% is below both 100.50 and 100.4999, so
    // coefficient 21.6: 13.7 * 1.004321 * 21.6 = 297.198... -> 297
    assert_eq!(board.current[0].record.entry.title, "Ether Star");
    assert_eq!(board.current[0].rating, 297);

    // Oshama clamps at 100.50: 13.0 * 1.0050 * 22.4 = 292.656 -> 292
    assert_eq!(board.legacy[0].record.entry.title, "Oshama Scramble!");
    assert_eq!(board.legacy[0].rating, 292);

    assert_eq!(board.total, board.current_subtotal + board.legacy_subtotal);
}

#[test]
fn test_missing_current_catalog_degrades_to_legacy_only() {
    let fixture = write_fixture();

    let catalogs = CatalogPair::load("/nonexistent/new.csv", &fixture.legacy);
    assert!(catalogs.current.is_empty());
    assert_eq!(catalogs.legacy.len(), 2);

    let entries = score::load(&fixture.scores).unwrap();
    let records = resolve_all(entries, &catalogs);
    let board = aggregate(&records, 15, 35);

    assert!(board.current.is_empty());
    assert_eq!(board.current_subtotal, 0);
    assert_eq!(board.legacy.len(), 2);
    assert_eq!(board.total, board.legacy_subtotal);
}

#[test]
fn test_broken_catalog_does_not_block_the_other() {
    let fixture = write_fixture();
    let broken = fixture.dir.path().join("broken_master.csv");
    fs::write(&broken, "曲名,難易度,譜面定数\nSong,MAS,13.0\n").unwrap();

    // The variant column is missing in `broken`; the legacy catalog must
    // still build
    let catalogs = CatalogPair::load(&broken, &fixture.legacy);
    assert!(catalogs.current.is_empty());
    assert_eq!(catalogs.legacy.len(), 2);
}

#[test]
fn test_exports_agree_on_totals() {
    let fixture = write_fixture();
    let catalogs = CatalogPair::load(&fixture.current, &fixture.legacy);
    let entries = score::load(&fixture.scores).unwrap();
    let records = resolve_all(entries, &catalogs);
    let board = aggregate(&records, 15, 35);

    let tsv = export::format_tsv(&board);
    assert_eq!(tsv.lines().count(), 1 + 4); // header + 4 ranked records
    assert!(!tsv.contains("Unknown Song"));

    let json = export::format_json(&board).unwrap();
    assert!(json.contains(&format!("\"total\": {}", board.total)));
}
