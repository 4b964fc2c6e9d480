mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Postgres, Recommend, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}

	for (label, weight) in [
		("recommend.rating_weight", cfg.recommend.rating_weight),
		("recommend.review_weight", cfg.recommend.review_weight),
	] {
		if !weight.is_finite() {
			return Err(Error::Validation {
				message: format!("{label} must be a finite number."),
			});
		}
		if weight < 0.0 {
			return Err(Error::Validation {
				message: format!("{label} must be zero or greater."),
			});
		}
	}

	if cfg.recommend.neighbor_k == 0 {
		return Err(Error::Validation {
			message: "recommend.neighbor_k must be greater than zero.".to_string(),
		});
	}
	if !cfg.recommend.rating_min.is_finite() || !cfg.recommend.rating_max.is_finite() {
		return Err(Error::Validation {
			message: "recommend.rating_min and recommend.rating_max must be finite numbers."
				.to_string(),
		});
	}
	if cfg.recommend.rating_min <= 0.0 {
		return Err(Error::Validation {
			message: "recommend.rating_min must be greater than zero.".to_string(),
		});
	}
	if cfg.recommend.rating_min >= cfg.recommend.rating_max {
		return Err(Error::Validation {
			message: "recommend.rating_min must be less than recommend.rating_max.".to_string(),
		});
	}

	Ok(())
}
