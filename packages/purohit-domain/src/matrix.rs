use std::collections::{BTreeMap, BTreeSet};

use uuid::Uuid;

/// One review observation. Multiple observations may share a (provider, rater)
/// pair; they are kept as independent observations for the per-provider
/// aggregates and averaged into a single matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RatingRecord {
	pub rater_id: Uuid,
	pub provider_id: Uuid,
	pub rating: f32,
}

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
	sum: f32,
	count: u32,
}
impl Accumulator {
	fn push(&mut self, rating: f32) {
		self.sum += rating;
		self.count += 1;
	}

	fn mean(&self) -> Option<f32> {
		if self.count == 0 {
			return None;
		}

		Some(self.sum / self.count as f32)
	}
}

/// Provider-by-rater rating matrix with explicit presence: a missing cell is
/// distinguishable from a stored rating of zero. The zero-filled projection
/// exists only in [`RatingMatrix::row`], which is what the cosine computation
/// consumes.
#[derive(Debug, Default)]
pub struct RatingMatrix {
	providers: Vec<Uuid>,
	raters: Vec<Uuid>,
	cells: BTreeMap<(Uuid, Uuid), Accumulator>,
	observations: BTreeMap<Uuid, Accumulator>,
}
impl RatingMatrix {
	pub fn from_records(records: &[RatingRecord]) -> Self {
		let providers: BTreeSet<Uuid> = records.iter().map(|record| record.provider_id).collect();
		let raters: BTreeSet<Uuid> = records.iter().map(|record| record.rater_id).collect();
		let mut cells: BTreeMap<(Uuid, Uuid), Accumulator> = BTreeMap::new();
		let mut observations: BTreeMap<Uuid, Accumulator> = BTreeMap::new();

		for record in records {
			cells
				.entry((record.provider_id, record.rater_id))
				.or_default()
				.push(record.rating);
			observations.entry(record.provider_id).or_default().push(record.rating);
		}

		Self {
			providers: providers.into_iter().collect(),
			raters: raters.into_iter().collect(),
			cells,
			observations,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}

	pub fn providers(&self) -> &[Uuid] {
		&self.providers
	}

	pub fn raters(&self) -> &[Uuid] {
		&self.raters
	}

	pub fn provider_index(&self, provider_id: Uuid) -> Option<usize> {
		self.providers.binary_search(&provider_id).ok()
	}

	/// Aggregated cell value, or `None` when the rater never rated the
	/// provider. Duplicate observations collapse to their arithmetic mean.
	pub fn rating(&self, provider_id: Uuid, rater_id: Uuid) -> Option<f32> {
		self.cells.get(&(provider_id, rater_id)).and_then(Accumulator::mean)
	}

	/// The provider's rating vector over the full rater ordering, with absent
	/// cells projected to zero for the similarity computation.
	pub fn row(&self, index: usize) -> Vec<f32> {
		let Some(provider_id) = self.providers.get(index).copied() else {
			return Vec::new();
		};

		self.raters
			.iter()
			.map(|rater_id| self.rating(provider_id, *rater_id).unwrap_or(0.0))
			.collect()
	}

	/// Mean over the raw observations (duplicates count individually), or
	/// `None` when the provider has no observations in this subset.
	pub fn average_rating(&self, provider_id: Uuid) -> Option<f32> {
		self.observations.get(&provider_id).and_then(Accumulator::mean)
	}

	pub fn review_count(&self, provider_id: Uuid) -> u32 {
		self.observations.get(&provider_id).map(|acc| acc.count).unwrap_or(0)
	}
}
