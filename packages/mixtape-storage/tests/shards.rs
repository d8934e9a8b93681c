use std::fs;

use mixtape_engine::{Error as EngineError, ShardSource};
use mixtape_storage::{FsShardSource, load_playlists};
use mixtape_testkit::{TestDir, playlist, write_shard};

#[test]
fn enumeration_lists_json_stems_sorted() {
	let dir = TestDir::new().expect("Scratch dir must be created.");

	write_shard(dir.path(), "mpd.slice.1000-1999", &[]).expect("Fixture must be written.");
	write_shard(dir.path(), "mpd.slice.0-999", &[]).expect("Fixture must be written.");
	fs::write(dir.join("notes.txt"), "not a shard").expect("Fixture must be written.");

	let source = FsShardSource::new(dir.path());

	assert_eq!(
		source.shard_ids().expect("Enumeration must succeed."),
		vec!["mpd.slice.0-999".to_string(), "mpd.slice.1000-1999".to_string()]
	);
}

#[test]
fn load_parses_records_and_maps_the_name_sentinel() {
	let dir = TestDir::new().expect("Scratch dir must be created.");
	let named = playlist(1, Some("beach day"), &["t1", "t2"]);
	let sentinel = playlist(2, Some("No Name"), &["t3"]);

	write_shard(dir.path(), "slice", &[named.clone(), sentinel]).expect("Fixture must be written.");

	let records =
		FsShardSource::new(dir.path()).load("slice").expect("Load must succeed.");

	assert_eq!(records.len(), 2);
	assert_eq!(records[0].name.as_deref(), Some("beach day"));
	assert_eq!(records[0].track_uris, named.track_uris);
	assert_eq!(records[1].name, None);
}

#[test]
fn record_missing_required_fields_is_skipped_not_fatal() {
	let dir = TestDir::new().expect("Scratch dir must be created.");
	let document = r#"{
		"playlists": [
			{ "pid": 1, "tracks": [ { "track_uri": "t1", "artist_uri": "a1", "album_uri": "b1" } ] },
			{ "name": "no pid", "tracks": [] },
			{ "pid": 3, "tracks": [ { "track_uri": "t3" } ] },
			{ "pid": 4, "tracks": [] }
		]
	}"#;

	fs::write(dir.join("slice.json"), document).expect("Fixture must be written.");

	let records = load_playlists(&dir.join("slice.json")).expect("Document must load.");
	let ids = records.iter().map(|record| record.id).collect::<Vec<_>>();

	// Missing pid and a track missing artist/album uris drop those records
	// only; an empty track list is valid.
	assert_eq!(ids, vec![1, 4]);
}

#[test]
fn malformed_document_fails_the_whole_shard() {
	let dir = TestDir::new().expect("Scratch dir must be created.");

	fs::write(dir.join("bad.json"), "[1, 2").expect("Fixture must be written.");

	match FsShardSource::new(dir.path()).load("bad") {
		Err(EngineError::Shard { shard_id, .. }) => assert_eq!(shard_id, "bad"),
		other => panic!("Expected a shard error, got {other:?}."),
	}
}

#[test]
fn missing_shard_file_is_an_error() {
	let dir = TestDir::new().expect("Scratch dir must be created.");

	assert!(FsShardSource::new(dir.path()).load("nope").is_err());
}
