use std::fs;

use mixtape_config::{Config, Corpus, Job, Ranking, Runtime};
use mixtape_testkit::{TestDir, playlist, write_shard};
use mixtape_worker::run_job;

fn job_config(dir: &TestDir) -> Config {
	Config {
		corpus: Corpus { shard_dir: dir.join("shards") },
		job: Job {
			query_file: dir.join("queries.json"),
			output_file: dir.join("submission.csv"),
			checkpoint_dir: dir.join("checkpoints"),
		},
		ranking: Ranking { top_k: 10, recommendations: 3 },
		runtime: Runtime { workers: 2, log_level: "info".to_string() },
	}
}

fn seed_fixtures(dir: &TestDir) {
	let shard_dir = dir.join("shards");

	fs::create_dir_all(&shard_dir).expect("Shard dir must be created.");
	write_shard(&shard_dir, "mpd.slice.0-999", &[playlist(10, None, &["a", "c", "d"])])
		.expect("Shard fixture must be written.");
	write_shard(&shard_dir, "mpd.slice.1000-1999", &[playlist(11, None, &["e"])])
		.expect("Shard fixture must be written.");

	let queries = mixtape_testkit::shard_document(&[
		playlist(1, Some("road trip"), &["a", "b"]),
		playlist(2, None, &["e"]),
	]);

	fs::write(dir.join("queries.json"), queries).expect("Query fixture must be written.");
}

#[tokio::test]
async fn job_writes_one_sorted_row_per_query() {
	let dir = TestDir::new().expect("Scratch dir must be created.");

	seed_fixtures(&dir);

	let config = job_config(&dir);
	let report = run_job(&config).await.expect("Job must succeed.");

	assert_eq!(report.completed, 2);
	assert!(report.failed.is_empty());

	let output = fs::read_to_string(config.job.output_file).expect("Report must exist.");

	// Query 1 seeds {a,b}: playlist 10 outranks 11, contributing c,d then e.
	// Query 2 seeds {e}: playlist 11 ranks first but only holds the seed.
	assert_eq!(output, "1,c,d,e\n2,a,c,d\n");

	dir.cleanup().expect("Cleanup must succeed.");
}

#[tokio::test]
async fn rerunning_a_finished_job_reproduces_the_report() {
	let dir = TestDir::new().expect("Scratch dir must be created.");

	seed_fixtures(&dir);

	let config = job_config(&dir);

	run_job(&config).await.expect("First run must succeed.");

	let first = fs::read_to_string(&config.job.output_file).expect("Report must exist.");

	// Second run resumes fully-processed checkpoints and rescans nothing.
	run_job(&config).await.expect("Second run must succeed.");

	let second = fs::read_to_string(&config.job.output_file).expect("Report must exist.");

	assert_eq!(first, second);

	dir.cleanup().expect("Cleanup must succeed.");
}

#[tokio::test]
async fn corrupt_checkpoint_fails_only_its_own_query() {
	let dir = TestDir::new().expect("Scratch dir must be created.");

	seed_fixtures(&dir);

	let config = job_config(&dir);

	fs::create_dir_all(&config.job.checkpoint_dir).expect("Checkpoint dir must be created.");
	fs::write(config.job.checkpoint_dir.join("query_1.json"), "{broken")
		.expect("Corrupt fixture must be written.");

	let report = run_job(&config).await.expect("Job itself must not abort.");

	assert_eq!(report.completed, 1);
	assert_eq!(report.failed.len(), 1);
	assert_eq!(report.failed[0].0, 1);

	let output = fs::read_to_string(config.job.output_file).expect("Report must exist.");

	assert_eq!(output, "2,a,c,d\n");

	dir.cleanup().expect("Cleanup must succeed.");
}

#[tokio::test]
async fn missing_query_file_fails_the_job() {
	let dir = TestDir::new().expect("Scratch dir must be created.");
	let config = job_config(&dir);

	assert!(run_job(&config).await.is_err());
}
