//! Integration tests for archive assembly.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use haz_archive::{ArchiveError, write_archive};
use haz_model::{AssetMapping, MappingEntry};

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "haz-archive-test-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn mapping_for(sources: &[(&str, &str, &str)], dir: &std::path::Path) -> AssetMapping {
    let mut mapping = AssetMapping::new();
    for (file_name, content, member) in sources {
        let path = dir.join(file_name);
        std::fs::write(&path, content).unwrap();
        mapping.push(MappingEntry {
            access_copy_location: path.to_string_lossy().into_owned(),
            output_filename: (*member).to_string(),
        });
    }
    mapping
}

#[test]
fn archive_has_one_member_per_entry_in_mapping_order() {
    let dir = temp_dir();
    let mapping = mapping_for(
        &[
            ("001.jpg", "first", "photo1.jpg"),
            ("002.jpg", "second", "photo2.jpg"),
            ("003.jpg", "third", "photo3.jpg"),
        ],
        &dir,
    );
    let dest = dir.join("out.zip");
    let members = write_archive(&mapping, &dest).unwrap();
    assert_eq!(members, 3);

    let mut archive = zip::ZipArchive::new(File::open(&dest).unwrap()).unwrap();
    assert_eq!(archive.len(), 3);
    let expected = ["photo1.jpg", "photo2.jpg", "photo3.jpg"];
    let contents = ["first", "second", "third"];
    for idx in 0..archive.len() {
        let mut member = archive.by_index(idx).unwrap();
        assert_eq!(member.name(), expected[idx]);
        let mut body = String::new();
        member.read_to_string(&mut body).unwrap();
        assert_eq!(body, contents[idx]);
    }
}

#[test]
fn rerun_produces_an_identical_member_list() {
    let dir = temp_dir();
    let mapping = mapping_for(
        &[
            ("001.jpg", "first", "photo1.jpg"),
            ("002.jpg", "second", "photo2.jpg"),
        ],
        &dir,
    );
    let dest_a = dir.join("a.zip");
    let dest_b = dir.join("b.zip");
    write_archive(&mapping, &dest_a).unwrap();
    write_archive(&mapping, &dest_b).unwrap();

    let names = |path: &std::path::Path| -> Vec<String> {
        let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
        (0..archive.len())
            .map(|idx| archive.by_index(idx).unwrap().name().to_string())
            .collect()
    };
    assert_eq!(names(&dest_a), names(&dest_b));
    // Fixed member timestamps make reruns byte-identical for stable sources.
    assert_eq!(
        std::fs::read(&dest_a).unwrap(),
        std::fs::read(&dest_b).unwrap()
    );
}

#[test]
fn missing_source_aborts_and_names_the_path() {
    let dir = temp_dir();
    let mut mapping = mapping_for(&[("001.jpg", "first", "photo1.jpg")], &dir);
    let ghost = dir.join("ghost.jpg");
    mapping.push(MappingEntry {
        access_copy_location: ghost.to_string_lossy().into_owned(),
        output_filename: "photo2.jpg".to_string(),
    });

    let dest = dir.join("out.zip");
    let error = write_archive(&mapping, &dest).unwrap_err();
    match error {
        ArchiveError::SourceNotFound { path } => assert_eq!(path, ghost),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_mapping_yields_an_empty_archive() {
    let dir = temp_dir();
    let dest = dir.join("out.zip");
    let members = write_archive(&AssetMapping::new(), &dest).unwrap();
    assert_eq!(members, 0);
    let archive = zip::ZipArchive::new(File::open(&dest).unwrap()).unwrap();
    assert_eq!(archive.len(), 0);
}
