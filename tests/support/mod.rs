//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writes a zip with the given `(name, body)` entries and returns its path.
pub fn write_zip(dir: &Path, file_name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in entries {
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        writer.start_file(*name, options).unwrap();
        writer.write_all(body).unwrap();
    }
    let bytes = writer.finish().unwrap().into_inner();
    let path = dir.join(file_name);
    fs::write(&path, bytes).unwrap();
    path
}

/// Writes a file of `len` zero bytes, far larger than any zip fixture.
pub fn write_filler(dir: &Path, file_name: &str, len: usize) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, vec![0u8; len]).unwrap();
    path
}

/// One path per line, newline terminated.
pub fn manifest<P: AsRef<Path>>(paths: &[P]) -> String {
    paths
        .iter()
        .map(|p| format!("{}\n", p.as_ref().display()))
        .collect()
}

pub fn parse_lines(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8(stdout.to_vec())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}
