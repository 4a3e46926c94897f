use std::time::Instant;

/// Owned handle for a delayed search.
///
/// At most one deadline is armed; arming replaces any pending deadline and
/// firing consumes it, so a superseded schedule can never fire.
#[derive(Debug, Default)]
pub(crate) struct Debounce {
	deadline: Option<Instant>,
}

impl Debounce {
	pub(crate) fn arm(&mut self, deadline: Instant) {
		self.cancel();
		self.deadline = Some(deadline);
	}

	/// Drop the pending deadline. Returns whether one was armed.
	pub(crate) fn cancel(&mut self) -> bool {
		self.deadline.take().is_some()
	}

	pub(crate) fn is_armed(&self) -> bool {
		self.deadline.is_some()
	}

	/// Consume the deadline if it has passed at `now`.
	pub(crate) fn fire(&mut self, now: Instant) -> bool {
		match self.deadline {
			Some(deadline) if now >= deadline => {
				self.deadline = None;
				true
			}
			_ => false,
		}
	}
}
