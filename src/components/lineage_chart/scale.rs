//! Vertical time axis: founding years mapped onto decade bands.

/// Oldest year on the axis.
pub const MIN_YEAR: i32 = 1920;
/// Newest year on the axis.
pub const MAX_YEAR: i32 = 2025;
/// Vertical pixels per timeline "level"; the axis spans 12 levels.
pub const LEVEL_HEIGHT: f64 = 100.0;
/// Space above the newest decade line.
pub const TOP_MARGIN: f64 = 50.0;

/// Linear mapping from years (newest at the top margin) to canvas y,
/// banded by decade. The mapping is fixed for the session.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
	height: f64,
}

impl TimeScale {
	pub fn new() -> Self {
		Self { height: 12.0 * LEVEL_HEIGHT }
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Canvas height needed to show the full axis.
	pub fn canvas_height(&self) -> f64 {
		self.height + 2.0 * TOP_MARGIN
	}

	/// y coordinate of an exact year. Years outside the axis clamp to
	/// its ends.
	pub fn y_for_year(&self, year: i32) -> f64 {
		let year = year.clamp(MIN_YEAR, MAX_YEAR);
		let range = (MAX_YEAR - MIN_YEAR) as f64;
		((MAX_YEAR - year) as f64 / range) * self.height + TOP_MARGIN
	}

	/// The decade band a year falls in (1973 -> 1970).
	pub fn decade_of(year: i32) -> i32 {
		year.div_euclid(10) * 10
	}

	/// Vertical center of a decade band: midway between the decade's
	/// rule line and the next decade's.
	pub fn band_center(&self, decade: i32) -> f64 {
		(self.y_for_year(decade) + self.y_for_year(decade + 10)) / 2.0
	}

	/// Decade rule lines for the chrome, newest first: (year, y).
	pub fn decade_lines(&self) -> Vec<(i32, f64)> {
		let mut lines = Vec::new();
		let mut year = Self::decade_of(MAX_YEAR);
		while year >= MIN_YEAR {
			lines.push((year, self.y_for_year(year)));
			year -= 10;
		}
		lines
	}
}

impl Default for TimeScale {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn newer_years_sit_higher() {
		let scale = TimeScale::new();
		assert!(scale.y_for_year(2020) < scale.y_for_year(1920));
		assert_eq!(scale.y_for_year(MAX_YEAR), TOP_MARGIN);
	}

	#[test]
	fn out_of_range_years_clamp() {
		let scale = TimeScale::new();
		assert_eq!(scale.y_for_year(1800), scale.y_for_year(MIN_YEAR));
		assert_eq!(scale.y_for_year(2100), scale.y_for_year(MAX_YEAR));
	}

	#[test]
	fn decade_bands_share_a_center() {
		let scale = TimeScale::new();
		assert_eq!(TimeScale::decade_of(1973), 1970);
		assert_eq!(TimeScale::decade_of(1970), 1970);
		let center = scale.band_center(1970);
		assert!(center > scale.y_for_year(1980));
		assert!(center < scale.y_for_year(1970));
	}

	#[test]
	fn decade_lines_cover_the_axis() {
		let lines = TimeScale::new().decade_lines();
		assert_eq!(lines.first().map(|l| l.0), Some(2020));
		assert_eq!(lines.last().map(|l| l.0), Some(1920));
		assert_eq!(lines.len(), 11);
	}
}
