#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use postindex::document::Document;

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// A moment after every fixture post and before nothing else.
pub fn now() -> DateTime<Utc> {
    at(2013, 1, 1)
}

/// Front matter source for a published post. `extra` is appended to the header.
pub fn post(title: &str, published_on: &str, extra: &str) -> String {
    format!(
        "---\ntitle: {title}\npublished: true\npublishedon: {published_on}\n{extra}---\n\n{title} body.\n"
    )
}

pub fn doc(source: &str) -> Document {
    Document::ingest("inline.md", source.as_bytes().to_vec()).unwrap()
}

pub fn write(dir: &Path, file: &str, contents: &str) {
    let path = dir.join(file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}
