use std::{fs, path::Path};

use crate::error::{Error, Result};

/// Recommendations for one query: `query_id,uri_1,…,uri_n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
	pub query_id: u64,
	pub track_uris: Vec<String>,
}

/// Renders rows as CSV. Spotify uris contain no commas or quotes, so no
/// escaping is needed.
pub fn format_rows(rows: &[ReportRow]) -> String {
	let mut out = String::new();

	for row in rows {
		out.push_str(&row.query_id.to_string());

		for uri in &row.track_uris {
			out.push(',');
			out.push_str(uri);
		}

		out.push('\n');
	}

	out
}

pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<()> {
	fs::write(path, format_rows(rows))
		.map_err(|err| Error::WriteReport { path: path.to_path_buf(), source: err })
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rows_render_one_line_each() {
		let rows = vec![
			ReportRow { query_id: 7, track_uris: vec!["t1".to_string(), "t2".to_string()] },
			ReportRow { query_id: 8, track_uris: Vec::new() },
		];

		assert_eq!(format_rows(&rows), "7,t1,t2\n8\n");
	}
}
