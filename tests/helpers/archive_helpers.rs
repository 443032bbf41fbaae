//! Helpers for building and inspecting Ariane files on disk.

use std::fs::{self, File};
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// Write a `.tml` archive holding `payload` as `Data.xml`.
pub fn write_tml(dir: &Path, file_name: &str, payload: &str) -> PathBuf {
    write_zip(dir, file_name, &[("Data.xml", payload)])
}

/// Write a zip archive with arbitrary entries.
pub fn write_zip(dir: &Path, file_name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        zip.start_file(*name, SimpleFileOptions::default())
            .expect("start zip entry");
        zip.write_all(content.as_bytes()).expect("write zip entry");
    }
    let bytes = zip.finish().expect("finish zip").into_inner();

    let path = dir.join(file_name);
    fs::write(&path, bytes).expect("write archive");
    path
}

/// Write a bare XML `.tmlu` file.
pub fn write_tmlu(dir: &Path, file_name: &str, payload: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, payload).expect("write tmlu");
    path
}

/// Names of every entry of the archive at `path`, in archive order.
pub fn entry_names(path: &Path) -> Vec<String> {
    let archive = ZipArchive::new(File::open(path).expect("open archive")).expect("read archive");
    archive.file_names().map(str::to_string).collect()
}

/// Contents of `entry` in the archive at `path`.
pub fn read_entry(path: &Path, entry: &str) -> String {
    let mut archive =
        ZipArchive::new(File::open(path).expect("open archive")).expect("read archive");
    let mut file = archive.by_name(entry).expect("entry present");
    let mut content = String::new();
    file.read_to_string(&mut content).expect("read entry");
    content
}
