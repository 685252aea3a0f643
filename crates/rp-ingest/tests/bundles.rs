//! Bundle preparation against real archives built on the fly.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use rp_config::{IngestConfig, LimitsConfig};
use rp_ingest::{IngestError, discover_files, prepare_bundle};
use zip::write::SimpleFileOptions;

const ENTRIES: &[(&str, &str)] = &[
    ("Pengumpulan/Dosen X/AB12345_X_Dosen Pembimbing.docx", "supervisor"),
    ("Pengumpulan/Dosen Y/AB12345_Y_Dosen Reviewer.docx", "reviewer"),
    ("__MACOSX/Pengumpulan/Dosen X/._AB12345_X_Dosen Pembimbing.docx", "resource fork"),
];

fn write_zip(path: &Path) {
    let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
    writer
        .add_directory("Pengumpulan/", SimpleFileOptions::default())
        .unwrap();
    for (name, body) in ENTRIES {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(body.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

fn write_tar_gz(path: &Path) {
    let encoder = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (name, body) in ENTRIES {
        let mut header = tar::Header::new_gnu();
        header.set_size(body.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, name, body.as_bytes()).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap();
}

fn relative_paths(root: &Path) -> Vec<String> {
    discover_files(root)
        .unwrap()
        .iter()
        .map(rp_core::entities::DiscoveredFile::relative_path)
        .collect()
}

fn expected_paths() -> Vec<String> {
    vec![
        "Pengumpulan/Dosen X/AB12345_X_Dosen Pembimbing.docx".to_string(),
        "Pengumpulan/Dosen Y/AB12345_Y_Dosen Reviewer.docx".to_string(),
        "__MACOSX/Pengumpulan/Dosen X/._AB12345_X_Dosen Pembimbing.docx".to_string(),
    ]
}

#[test]
fn zip_bundle_is_extracted_and_cleaned_up() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("Pengumpulan.zip");
    write_zip(&archive);

    let bundle = prepare_bundle(&archive, &IngestConfig::default(), &LimitsConfig::default())
        .unwrap();
    assert!(bundle.root().is_dir());
    assert_eq!(relative_paths(bundle.root()), expected_paths());

    let root: PathBuf = bundle.root().to_path_buf();
    drop(bundle);
    assert!(!root.exists());
}

#[test]
fn tar_gz_bundle_is_extracted() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("Pengumpulan.tar.gz");
    write_tar_gz(&archive);

    let bundle = prepare_bundle(&archive, &IngestConfig::default(), &LimitsConfig::default())
        .unwrap();
    assert!(bundle.root().is_dir());
    assert_eq!(relative_paths(bundle.root()), expected_paths());
}

#[test]
fn directory_bundle_is_used_in_place() {
    let tmp = tempfile::tempdir().unwrap();
    let folder = tmp.path().join("Dosen X");
    fs::create_dir_all(&folder).unwrap();
    fs::write(folder.join("AB12345_X_Dosen Pembimbing.docx"), "x").unwrap();

    let bundle =
        prepare_bundle(tmp.path(), &IngestConfig::default(), &LimitsConfig::default()).unwrap();
    assert_eq!(bundle.root(), tmp.path());

    drop(bundle);
    assert!(folder.exists());
}

#[test]
fn configured_extract_dir_keeps_files() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("Pengumpulan.zip");
    write_zip(&archive);
    let ingest = IngestConfig {
        extract_dir: tmp.path().join("extracted").to_string_lossy().into_owned(),
    };

    let bundle = prepare_bundle(&archive, &ingest, &LimitsConfig::default()).unwrap();
    let root = bundle.root().to_path_buf();
    drop(bundle);

    assert!(root.starts_with(tmp.path().join("extracted")));
    assert!(root.join("Pengumpulan/Dosen X").is_dir());
}

#[test]
fn corrupt_zip_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("broken.zip");
    fs::write(&archive, b"this is not a zip archive").unwrap();

    let err = prepare_bundle(&archive, &IngestConfig::default(), &LimitsConfig::default())
        .unwrap_err();
    assert!(matches!(err, IngestError::CorruptArchive { .. }));
}

#[test]
fn oversized_archive_is_rejected_before_extraction() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("Pengumpulan.zip");
    write_zip(&archive);
    let limits = LimitsConfig { max_upload_mb: 0 };

    let err = prepare_bundle(&archive, &IngestConfig::default(), &limits).unwrap_err();
    match err {
        IngestError::TooLarge {
            size_mb, limit_mb, ..
        } => {
            assert_eq!(size_mb, 1);
            assert_eq!(limit_mb, 0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_bundle_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let err = prepare_bundle(
        &tmp.path().join("absent.zip"),
        &IngestConfig::default(),
        &LimitsConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, IngestError::NotFound { .. }));
}

fn escaping_ingest(tmp: &Path) -> IngestConfig {
    IngestConfig {
        extract_dir: tmp.join("extracted").to_string_lossy().into_owned(),
    }
}

fn assert_nothing_escaped(tmp: &Path) {
    assert!(!tmp.join("escape.txt").exists());
    assert!(!tmp.join("extracted/escape.txt").exists());
}

#[test]
fn zip_entry_escaping_the_root_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("Pengumpulan.zip");
    let mut writer = zip::ZipWriter::new(File::create(&archive).unwrap());
    writer
        .start_file("Pengumpulan/ok.txt", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"ok").unwrap();
    writer
        .start_file("../escape.txt", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"escaped").unwrap();
    writer.finish().unwrap();

    let err = prepare_bundle(&archive, &escaping_ingest(tmp.path()), &LimitsConfig::default())
        .unwrap_err();
    assert!(matches!(err, IngestError::CorruptArchive { .. }));
    assert!(err.to_string().contains("outside the archive root"));
    assert_nothing_escaped(tmp.path());
}

#[test]
fn tar_entry_escaping_the_root_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("Pengumpulan.tar.gz");
    let body = b"escaped";
    let name = b"../escape.txt";

    // `append_data` refuses `..`, so the name goes into the header directly.
    let encoder = GzEncoder::new(File::create(&archive).unwrap(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    let mut header = tar::Header::new_old();
    header.as_old_mut().name[..name.len()].copy_from_slice(name);
    header.set_size(body.len() as u64);
    header.set_mode(0o644);
    header.set_entry_type(tar::EntryType::Regular);
    header.set_cksum();
    builder.append(&header, &body[..]).unwrap();
    builder.into_inner().unwrap().finish().unwrap();

    let err = prepare_bundle(&archive, &escaping_ingest(tmp.path()), &LimitsConfig::default())
        .unwrap_err();
    assert!(matches!(err, IngestError::CorruptArchive { .. }));
    assert!(err.to_string().contains("../escape.txt"));
    assert_nothing_escaped(tmp.path());
}
