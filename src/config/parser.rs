/// Assemble the logical lines of a config file's content.
///
/// A physical line whose first character is `#` is dropped entirely, even
/// in the middle of a continuation run. Trailing whitespace is stripped
/// from each physical line; a line then ending in `\` has the backslash
/// removed and the next physical line concatenated onto it. A file ending
/// mid-continuation still flushes the accumulated text as a final line.
pub fn logical_lines(content: &str) -> Vec<String> {
	let mut lines = Vec::new();
	let mut full = String::new();

	for line in content.lines() {
		if line.starts_with('#') {
			continue;
		}

		let line = line.trim_end();
		if let Some(stripped) = line.strip_suffix('\\') {
			full.push_str(stripped);
			continue;
		}

		full.push_str(line);
		lines.push(std::mem::take(&mut full).trim_end().to_string());
	}

	if !full.is_empty() {
		lines.push(full.trim_end().to_string());
	}

	lines
}

/// Split a logical line into a `NAME=VALUE` assignment on the first `=`.
///
/// Returns `None` for lines without `=`; the caller ignores those. Name
/// and value are taken verbatim around the separator, so whitespace next
/// to the `=` stays where it was.
pub fn split_assignment(line: &str) -> Option<(&str, &str)> {
	line.split_once('=')
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_plain_lines() {
		let lines = logical_lines("A=1\nB=2\n");
		assert_eq!(lines, ["A=1", "B=2"]);
	}

	#[test]
	fn test_comment_lines_dropped() {
		let lines = logical_lines("# leading comment\nA=1\n#B=2\n");
		assert_eq!(lines, ["A=1"]);
	}

	#[test]
	fn test_continuation_joins_lines() {
		let lines = logical_lines("K=a\\\nb\n");
		assert_eq!(lines, ["K=ab"]);
	}

	#[test]
	fn test_continuation_across_multiple_lines() {
		let lines = logical_lines("K=a\\\nb\\\nc\n");
		assert_eq!(lines, ["K=abc"]);
	}

	#[test]
	fn test_comment_inside_continuation_is_skipped() {
		// The comment contributes nothing; accumulation resumes after it.
		let lines = logical_lines("K=a\\\n# interruption\nb\n");
		assert_eq!(lines, ["K=ab"]);
	}

	#[test]
	fn test_trailing_whitespace_stripped_before_continuation_check() {
		// The backslash is last after stripping, so this still continues.
		let lines = logical_lines("K=a\\   \nb\n");
		assert_eq!(lines, ["K=ab"]);
	}

	#[test]
	fn test_eof_mid_continuation_flushes() {
		let lines = logical_lines("K=a\\");
		assert_eq!(lines, ["K=a"]);
	}

	#[test]
	fn test_empty_physical_lines_yield_empty_logical_lines() {
		let lines = logical_lines("\nA=1\n\n");
		assert_eq!(lines, ["", "A=1", ""]);
	}

	#[test]
	fn test_split_assignment_on_first_equals() {
		assert_eq!(split_assignment("A=b=c"), Some(("A", "b=c")));
	}

	#[test]
	fn test_split_assignment_empty_value() {
		assert_eq!(split_assignment("KEY="), Some(("KEY", "")));
	}

	#[test]
	fn test_split_assignment_keeps_whitespace_verbatim() {
		assert_eq!(split_assignment(" A = b"), Some((" A ", " b")));
	}

	#[test]
	fn test_split_assignment_ignores_non_assignments() {
		assert_eq!(split_assignment("not an assignment"), None);
		assert_eq!(split_assignment(""), None);
	}
}
