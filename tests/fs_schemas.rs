//! File and directory shapes read from a temporary directory.

use std::fs;

use file_graph::error::FsError;
use file_graph::schemas::{
	Dirent, DirentResult, File, FileEncoding, FileMetadata, FileType, read_dir,
};
use serde_json::json;
use tempfile::TempDir;

fn fixture() -> TempDir {
	let dir = TempDir::new().unwrap();
	fs::write(dir.path().join("notes.txt"), "hello graph").unwrap();
	fs::write(dir.path().join("blob.bin"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
	fs::create_dir(dir.path().join("nested")).unwrap();
	dir
}

#[test]
fn read_dir_lists_every_entry() {
	let dir = fixture();
	let mut entries: Vec<_> = read_dir(dir.path())
		.unwrap()
		.into_iter()
		.map(|r| {
			assert!(r.error.is_none());
			r.data.unwrap()
		})
		.collect();
	entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));

	let names: Vec<_> = entries.iter().map(|e| e.file_name.as_str()).collect();
	assert_eq!(names, ["blob.bin", "nested", "notes.txt"]);

	let nested = &entries[1];
	assert_eq!(
		nested.metadata.as_ref().unwrap().file_type,
		FileType::Directory
	);
	assert!(nested.path.ends_with("nested"));
	assert_eq!(
		entries[2].metadata.as_ref().unwrap().file_type,
		FileType::File
	);
}

#[test]
fn read_dir_on_a_file_fails() {
	let dir = fixture();
	let err = read_dir(dir.path().join("notes.txt")).unwrap_err();
	assert!(matches!(err, FsError::ReadDir { .. }));
}

#[test]
fn read_text_file() {
	let dir = fixture();
	let file = File::read(dir.path().join("notes.txt")).unwrap();
	assert_eq!(file.contents, "hello graph");
	assert_eq!(file.file_name, "notes.txt");
	assert_eq!(file.encoding, FileEncoding::Utf8);
	assert_eq!(file.metadata.unwrap().size_kb, 0);

	let json = serde_json::to_value(File::read(dir.path().join("notes.txt")).unwrap()).unwrap();
	assert_eq!(json["fileName"], "notes.txt");
	assert_eq!(json["encoding"], "utf8");
	assert_eq!(json["metadata"]["fileType"], "FILE");
}

#[test]
fn read_binary_file_as_base64() {
	let dir = fixture();
	let file = File::read(dir.path().join("blob.bin")).unwrap();
	assert_eq!(file.encoding, FileEncoding::Base64);
	assert_eq!(file.contents, "__4AgA==");
}

#[test]
fn read_resolves_relative_segments() {
	let dir = fixture();
	let file = File::read(dir.path().join("nested").join("..").join("notes.txt")).unwrap();
	assert!(!file.path.contains(".."));
	assert_eq!(file.file_name, "notes.txt");
}

#[test]
fn dirent_result_wire_shape() {
	let entry = DirentResult {
		data: Some(Dirent {
			path: "/tmp/graph/notes.txt".into(),
			metadata: Some(FileMetadata {
				file_type: FileType::File,
				size_kb: 2,
				read_only: true,
				modified: Some(10.0),
				accessed: Some(20.0),
				created: None,
			}),
			file_name: "notes.txt".into(),
		}),
		error: None,
	};
	assert_eq!(
		serde_json::to_value(&entry).unwrap(),
		json!({
			"data": {
				"path": "/tmp/graph/notes.txt",
				"metadata": {
					"fileType": "FILE",
					"size_kb": 2,
					"readOnly": true,
					"modified": 10.0,
					"accessed": 20.0,
					"created": null
				},
				"fileName": "notes.txt"
			},
			"error": null
		})
	);

	let failed = DirentResult::from(std::io::Error::other("entry vanished"));
	assert_eq!(
		serde_json::to_value(&failed).unwrap(),
		json!({"data": null, "error": "entry vanished"})
	);
}

#[test]
fn listed_dirent_serializes_with_camel_case_keys() {
	let dir = fixture();
	let listed = read_dir(dir.path()).unwrap();
	let nested = listed
		.iter()
		.find(|r| r.data.as_ref().is_some_and(|d| d.file_name == "nested"))
		.unwrap();

	let value = serde_json::to_value(nested).unwrap();
	assert_eq!(value["error"], serde_json::Value::Null);
	assert_eq!(value["data"]["fileName"], "nested");
	assert_eq!(value["data"]["metadata"]["fileType"], "DIRECTORY");
	assert!(value["data"]["path"].as_str().unwrap().ends_with("nested"));
}

#[cfg(unix)]
#[test]
fn symlink_entry_is_not_followed() {
	let dir = fixture();
	std::os::unix::fs::symlink(dir.path().join("notes.txt"), dir.path().join("link.txt"))
		.unwrap();

	let link = read_dir(dir.path())
		.unwrap()
		.into_iter()
		.filter_map(|r| r.data)
		.find(|d| d.file_name == "link.txt")
		.unwrap();
	assert_eq!(link.metadata.unwrap().file_type, FileType::Symlink);

	// reading through the link resolves to the target
	let file = File::read(dir.path().join("link.txt")).unwrap();
	assert_eq!(file.file_name, "notes.txt");
	assert_eq!(file.contents, "hello graph");
}
