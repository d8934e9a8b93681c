use toml::Value;

use mixtape_config::{Config, Error, validate};

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

fn sample_toml() -> String {
	SAMPLE_CONFIG_TEMPLATE_TOML.to_string()
}

fn sample_toml_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");
	let table = root
		.get_mut(section)
		.and_then(Value::as_table_mut)
		.expect("Template config must contain the section.");

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Mutated template must re-serialize.")
}

fn parse(raw: &str) -> Config {
	toml::from_str(raw).expect("Config must parse.")
}

#[test]
fn sample_config_parses_with_reference_values() {
	let cfg = parse(&sample_toml());

	assert_eq!(cfg.ranking.top_k, 100);
	assert_eq!(cfg.ranking.recommendations, 500);
	assert_eq!(cfg.runtime.log_level, "info");
}

#[test]
fn ranking_and_runtime_sections_are_optional() {
	let cfg = parse(
		r#"
		[corpus]
		shard_dir = "/data/shards"

		[job]
		query_file = "/data/queries.json"
		output_file = "/data/out.csv"
		checkpoint_dir = "/data/checkpoints"
		"#,
	);

	assert_eq!(cfg.ranking.top_k, 100);
	assert_eq!(cfg.ranking.recommendations, 500);
	assert_eq!(cfg.runtime.workers, 0);
}

#[test]
fn zero_top_k_is_rejected() {
	let cfg = parse(&sample_toml_with("ranking", "top_k", Value::Integer(0)));

	assert!(matches!(validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn zero_recommendations_is_rejected() {
	let cfg = parse(&sample_toml_with("ranking", "recommendations", Value::Integer(0)));

	assert!(matches!(validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn empty_shard_dir_is_rejected() {
	let cfg = parse(&sample_toml_with("corpus", "shard_dir", Value::String(String::new())));

	assert!(matches!(validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn empty_log_level_is_rejected() {
	let cfg = parse(&sample_toml_with("runtime", "log_level", Value::String("  ".to_string())));

	assert!(matches!(validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn load_resolves_auto_workers() {
	// Validation runs after normalization, so workers = 0 in the file must
	// come back as at least one worker.
	let dir = std::env::temp_dir().join(format!("mixtape_config_test_{}", std::process::id()));

	std::fs::create_dir_all(&dir).expect("Scratch dir must be created.");

	let path = dir.join("config.toml");

	std::fs::write(&path, sample_toml_with("runtime", "workers", Value::Integer(0)))
		.expect("Config fixture must be written.");

	let cfg = mixtape_config::load(&path).expect("Load must succeed.");

	assert!(cfg.runtime.workers >= 1);

	std::fs::remove_dir_all(&dir).expect("Cleanup must succeed.");
}

#[test]
fn missing_config_file_is_a_read_error() {
	let missing = std::path::Path::new("/nonexistent/mixtape/config.toml");

	assert!(matches!(mixtape_config::load(missing), Err(Error::ReadConfig { .. })));
}
