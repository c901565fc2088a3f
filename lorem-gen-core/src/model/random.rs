use rand::Rng;

/// Integer sampling used by every generation step.
///
/// Word selection, sentence lengths and comma placement all draw through
/// this trait, so tests can substitute a scripted source and obtain
/// reproducible output.
///
/// Any `rand::Rng` is a `RandomSource`. Generation uses `rand::rng()`, a
/// cryptographically secure thread-local generator seeded by the OS.
pub trait RandomSource {
	/// Returns a value uniformly drawn from `[0, bound)`.
	///
	/// Implementations must stay below `bound`; return `0` when `bound` is `0`.
	fn next_below(&mut self, bound: usize) -> usize;

	/// Returns a value uniformly drawn from `[from, to)`.
	///
	/// Returns `from` when the range is empty (`to <= from`).
	fn next_between(&mut self, from: usize, to: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
	fn next_below(&mut self, bound: usize) -> usize {
		self.next_between(0, bound)
	}

	fn next_between(&mut self, from: usize, to: usize) -> usize {
		if to <= from {
			return from;
		}
		self.random_range(from..to)
	}
}
