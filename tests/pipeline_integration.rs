//! Library-level checks of the record stream.

use std::fs;

use tempfile::tempdir;
use zipblobs::blob::Blob;
use zipblobs::common::Constraints;
use zipblobs::diagnostics::{LtsvReporter, Silent};
use zipblobs::pipeline;

mod support;
use support::{manifest, write_filler, write_zip};

fn blobs(out: &[u8]) -> Vec<Blob> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn identity_payload_round_trips_byte_for_byte() {
    let dir = tempdir().unwrap();
    let binary: Vec<u8> = (0..=255u8).cycle().take(3000).collect();
    let zip = write_zip(
        dir.path(),
        "bin.zip",
        &[("all-bytes.bin", binary.as_slice()), ("empty", b""), ("text.txt", "héllo\n".as_bytes())],
    );
    let constraints =
        Constraints::new(1 << 20, 1 << 17, "application/octet-stream", "identical").unwrap();

    let mut out = Vec::new();
    pipeline::run(manifest(&[&zip]).as_bytes(), &constraints, &mut out, Silent).unwrap();

    let recs = blobs(&out);
    assert_eq!(recs.len(), 3);
    assert_eq!(recs[0].payload().unwrap(), binary);
    assert_eq!(recs[1].payload().unwrap(), b"");
    assert_eq!(recs[2].payload().unwrap(), "héllo\n".as_bytes());
    for rec in &recs {
        assert_eq!(rec.content_encoding, "identical");
        assert_eq!(rec.content_length, rec.payload().unwrap().len() as u64);
    }
}

#[test]
fn every_record_respects_both_ceilings_and_the_type() {
    let dir = tempdir().unwrap();
    let small = write_zip(dir.path(), "small.zip", &[("a", &[1u8; 10]), ("b", &[2u8; 100])]);
    let noise: Vec<u8> = (0..4000u32).map(|i| (i.wrapping_mul(2654435761) >> 13) as u8).collect();
    let large = write_zip(dir.path(), "large.zip", &[("c", &noise)]);
    let zip_size_max = fs::metadata(&small).unwrap().len();
    assert!(fs::metadata(&large).unwrap().len() > zip_size_max);

    let constraints = Constraints::new(zip_size_max, 50, "application/x-test", "identity").unwrap();
    let mut out = Vec::new();
    let stats =
        pipeline::run(manifest(&[&small, &large]).as_bytes(), &constraints, &mut out, Silent).unwrap();

    let recs = blobs(&out);
    assert_eq!(recs.len(), 1);
    for rec in &recs {
        assert!(rec.content_length <= 50);
        assert_eq!(rec.content_type, "application/x-test");
        assert_eq!(rec.metadata.zip_name, small.display().to_string());
    }
    assert_eq!(stats.archives_seen, 2);
    assert_eq!(stats.archives_skipped, 1);
    assert_eq!(stats.items_skipped, 1);
}

#[test]
fn one_diagnostic_per_skip_decision() {
    let dir = tempdir().unwrap();
    let big = write_filler(dir.path(), "big.zip", 4096);
    let junk = dir.path().join("junk.zip");
    fs::write(&junk, b"not a zip at all").unwrap();
    let ok = write_zip(dir.path(), "ok.zip", &[("keep", b"k"), ("drop", &[0u8; 32])]);

    let constraints = Constraints::new(2048, 16, "application/octet-stream", "identity").unwrap();
    let mut reporter = LtsvReporter::new(Vec::new());
    let mut out = Vec::new();
    pipeline::run(
        manifest(&[&big, &junk, &ok]).as_bytes(),
        &constraints,
        &mut out,
        &mut reporter,
    )
    .unwrap();

    let diag = String::from_utf8(reporter.into_inner()).unwrap();
    let lines: Vec<&str> = diag.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("status:zip_skipped\treason:size_limit_exceeded"));
    assert!(lines[1].contains("status:zip_skipped\treason:corrupt"));
    assert!(lines[2].contains("status:item_skipped\treason:size_limit_exceeded"));
    assert!(lines[2].contains("item:drop"));
    assert!(lines[3].contains("status:run_complete"));
    assert_eq!(blobs(&out).len(), 1);
}
