use crate::paths::segment::Segment;

/// Reorder a PATH value so every sbin directory comes after its bin
/// sibling when both are present.
///
/// For each segment containing an `sbin` component, the hypothetical
/// sibling is formed by replacing the first `sbin` with `bin`; the first
/// structurally equal segment further right is swapped in front. Single
/// forward pass: a position created by a swap is not re-examined, but
/// lookups do see the already-mutated sequence.
pub fn rearrange_bin_sbin(path: &str) -> String {
	let mut segments: Vec<Segment> = path.split(':').map(Segment::parse).collect();

	for i in 0..segments.len() {
		let Some(index) = segments[i].find_component("sbin") else {
			continue;
		};

		let sibling = segments[i].with_component(index, "bin");
		if let Some(offset) = segments[i + 1..].iter().position(|s| *s == sibling) {
			segments.swap(i, i + 1 + offset);
		}
	}

	segments
		.iter()
		.map(Segment::to_string)
		.collect::<Vec<_>>()
		.join(":")
}
