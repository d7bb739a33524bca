//! Fixture helpers shared by unit tests.

use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// One entry to place in a test archive.
pub struct ZipItem<'a> {
    pub name: &'a str,
    pub body: &'a [u8],
    pub method: CompressionMethod,
    pub dir: bool,
}

impl<'a> ZipItem<'a> {
    pub fn file(name: &'a str, body: &'a [u8]) -> Self {
        Self { name, body, method: CompressionMethod::Stored, dir: false }
    }

    pub fn deflated(name: &'a str, body: &'a [u8]) -> Self {
        Self { name, body, method: CompressionMethod::Deflated, dir: false }
    }

    pub fn dir(name: &'a str) -> Self {
        Self { name, body: &[], method: CompressionMethod::Stored, dir: true }
    }
}

/// Builds an in-memory zip. Every entry is stamped 2024-03-05T06:07:08.
pub fn build_zip(items: &[ZipItem<'_>]) -> Vec<u8> {
    let stamp = DateTime::from_date_and_time(2024, 3, 5, 6, 7, 8).unwrap();
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for item in items {
        let options = FileOptions::default()
            .compression_method(item.method)
            .last_modified_time(stamp);
        if item.dir {
            writer.add_directory(item.name, options).unwrap();
        } else {
            writer.start_file(item.name, options).unwrap();
            writer.write_all(item.body).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

/// Builds a one-entry stored zip whose headers claim `declared` bytes of
/// uncompressed data while the real payload is `body`.
///
/// Only the uncompressed size fields are rewritten, so the stored stream
/// and its CRC stay valid.
pub fn build_zip_with_declared_size(name: &str, body: &[u8], declared: u32) -> Vec<u8> {
    const LOCAL_SIG: &[u8] = b"PK\x03\x04";
    const CENTRAL_SIG: &[u8] = b"PK\x01\x02";

    let mut bytes = build_zip(&[ZipItem::file(name, body)]);
    let patch = |bytes: &mut Vec<u8>, sig: &[u8], offset: usize| {
        let at = bytes
            .windows(sig.len())
            .position(|w| w == sig)
            .expect("header signature present");
        bytes[at + offset..at + offset + 4].copy_from_slice(&declared.to_le_bytes());
    };
    patch(&mut bytes, LOCAL_SIG, 22);
    patch(&mut bytes, CENTRAL_SIG, 24);
    bytes
}
