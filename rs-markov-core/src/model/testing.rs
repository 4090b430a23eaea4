use rand::RngCore;

/// Random source returning the same word forever.
///
/// `f64` draws from rand keep the top 53 bits of `next_u64`, so the word
/// fully determines the value of `r` seen by the sampler.
pub(crate) struct ConstRng(u64);

impl ConstRng {
	/// Always draws `r = 0.0`.
	pub(crate) fn zero() -> Self {
		Self(0)
	}

	/// Always draws the largest `r` below 1.0.
	pub(crate) fn max() -> Self {
		Self(u64::MAX)
	}

	/// Always draws `r` (must be in `[0, 1)`).
	pub(crate) fn for_draw(r: f64) -> Self {
		Self(((r * (1u64 << 53) as f64) as u64) << 11)
	}
}

impl RngCore for ConstRng {
	fn next_u32(&mut self) -> u32 {
		(self.0 >> 32) as u32
	}

	fn next_u64(&mut self) -> u64 {
		self.0
	}

	fn fill_bytes(&mut self, dst: &mut [u8]) {
		for chunk in dst.chunks_mut(8) {
			let bytes = self.0.to_le_bytes();
			chunk.copy_from_slice(&bytes[..chunk.len()]);
		}
	}
}
