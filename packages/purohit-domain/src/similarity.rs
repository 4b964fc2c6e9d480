use uuid::Uuid;

use crate::matrix::RatingMatrix;

pub fn cosine_similarity(lhs: &[f32], rhs: &[f32]) -> Option<f32> {
	if lhs.is_empty() || lhs.len() != rhs.len() {
		return None;
	}

	let mut dot = 0.0_f32;
	let mut lhs_norm = 0.0_f32;
	let mut rhs_norm = 0.0_f32;

	for (l, r) in lhs.iter().zip(rhs.iter()) {
		dot += l * r;
		lhs_norm += l * l;
		rhs_norm += r * r;
	}

	if lhs_norm <= f32::EPSILON || rhs_norm <= f32::EPSILON {
		return None;
	}

	Some((dot / (lhs_norm.sqrt() * rhs_norm.sqrt())).clamp(-1.0, 1.0))
}

/// Pairwise cosine similarity over the rating matrix's provider ordering.
/// Square and symmetric; a pair involving an all-zero rating vector scores 0.
/// Quadratic in providers, which stays small (one booking's candidate set).
#[derive(Debug)]
pub struct SimilarityMatrix {
	providers: Vec<Uuid>,
	scores: Vec<f32>,
}
impl SimilarityMatrix {
	pub fn from_ratings(matrix: &RatingMatrix) -> Self {
		let providers = matrix.providers().to_vec();
		let n = providers.len();
		let rows: Vec<Vec<f32>> = (0..n).map(|index| matrix.row(index)).collect();
		let mut scores = vec![0.0_f32; n * n];

		for i in 0..n {
			for j in i..n {
				let score = cosine_similarity(&rows[i], &rows[j]).unwrap_or(0.0);

				scores[i * n + j] = score;
				scores[j * n + i] = score;
			}
		}

		Self { providers, scores }
	}

	pub fn len(&self) -> usize {
		self.providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}

	pub fn providers(&self) -> &[Uuid] {
		&self.providers
	}

	pub fn provider_index(&self, provider_id: Uuid) -> Option<usize> {
		self.providers.binary_search(&provider_id).ok()
	}

	pub fn score(&self, i: usize, j: usize) -> f32 {
		self.scores[i * self.providers.len() + j]
	}

	/// Indices of the `k` providers most similar to `index`, self excluded,
	/// descending by similarity with index order breaking ties.
	pub fn neighbors(&self, index: usize, k: usize) -> Vec<usize> {
		let mut others: Vec<usize> = (0..self.len()).filter(|other| *other != index).collect();

		others.sort_by(|&a, &b| {
			self.score(index, b)
				.partial_cmp(&self.score(index, a))
				.unwrap_or(std::cmp::Ordering::Equal)
				.then(a.cmp(&b))
		});
		others.truncate(k);

		others
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cosine_of_parallel_vectors_is_one() {
		let similarity = cosine_similarity(&[1.0, 2.0], &[2.0, 4.0]).expect("similarity");

		assert!((similarity - 1.0).abs() < 1e-6);
	}

	#[test]
	fn cosine_of_orthogonal_vectors_is_zero() {
		let similarity = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).expect("similarity");

		assert!(similarity.abs() < 1e-6);
	}

	#[test]
	fn cosine_is_undefined_for_zero_or_mismatched_vectors() {
		assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), None);
		assert_eq!(cosine_similarity(&[], &[]), None);
		assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), None);
	}
}
