use std::collections::BTreeSet;

use uuid::Uuid;

use crate::similarity::SimilarityMatrix;

/// Collects the top-`neighbor_k` similarity neighbors of every accepted
/// provider into one pool, then strips every id in the selected set and the
/// accepted set: recommendations are new suggestions, not echoes of the
/// inputs. An accepted provider absent from the similarity index has no
/// rating signal and is skipped.
///
/// The returned ids are deduplicated and sorted; the caller re-ranks them by
/// weighted score, so this order carries no meaning beyond determinism.
pub fn recommendation_pool(
	accepted: &[Uuid],
	selected: &[Uuid],
	similarity: &SimilarityMatrix,
	neighbor_k: usize,
) -> Vec<Uuid> {
	let mut pool: BTreeSet<Uuid> = BTreeSet::new();

	for provider_id in accepted {
		let Some(index) = similarity.provider_index(*provider_id) else {
			continue;
		};

		for neighbor in similarity.neighbors(index, neighbor_k) {
			pool.insert(similarity.providers()[neighbor]);
		}
	}

	for provider_id in accepted.iter().chain(selected) {
		pool.remove(provider_id);
	}

	pool.into_iter().collect()
}
