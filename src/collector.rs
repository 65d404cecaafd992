//! Declaration collection.
//!
//! [`DeclarationStack`] accumulates declarations of one kind in the order
//! they are made. Declarations land in batches (one batch per builder
//! call); flattening preserves declaration order. Interior mutability via
//! [`parking_lot::RwLock`] lets definitions built in `Lazy` statics stay
//! shareable across threads.

use parking_lot::RwLock;

/// Ordered accumulator for declarations of one kind.
pub struct DeclarationStack<T> {
	batches: RwLock<Vec<Vec<T>>>,
}

impl<T> DeclarationStack<T> {
	pub fn new() -> Self {
		Self {
			batches: RwLock::new(Vec::new()),
		}
	}

	/// Append a batch of declarations.
	pub fn add<I>(&self, batch: I)
	where
		I: IntoIterator<Item = T>,
	{
		let batch: Vec<T> = batch.into_iter().collect();
		if !batch.is_empty() {
			self.batches.write().push(batch);
		}
	}

	/// Append a single declaration.
	pub fn add_one(&self, item: T) {
		self.batches.write().push(vec![item]);
	}

	pub fn is_empty(&self) -> bool {
		self.batches.read().is_empty()
	}
}

impl<T: Clone> DeclarationStack<T> {
	/// All declarations, flattened in declaration order.
	pub fn own(&self) -> Vec<T> {
		self.batches.read().iter().flatten().cloned().collect()
	}

	/// The most recent declaration, if any. Used for last-wins kinds
	/// such as LIMIT and OFFSET.
	pub fn own_last(&self) -> Option<T> {
		self.batches
			.read()
			.iter()
			.flatten()
			.next_back()
			.cloned()
	}
}

impl<T> Default for DeclarationStack<T> {
	fn default() -> Self {
		Self::new()
	}
}
