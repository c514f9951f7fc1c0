//! Anime season helpers for the `season` listing filter.
//!
//! The API accepts seasons as `{year}_{season}`, e.g. `2024_fall`.

use chrono::{Datelike, NaiveDate, Utc};

/// Broadcast season
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub fn as_str(&self) -> &str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        }
    }

    /// Season a calendar month (1-12) belongs to
    pub fn of_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }
}

/// Filter value for `season` in a given year
pub fn season_filter(year: i32, season: Season) -> String {
    format!("{}_{}", year, season.as_str())
}

/// Filter value for the season containing `date`.
///
/// December belongs to the winter season of the following year.
pub fn season_filter_for(date: NaiveDate) -> String {
    let season = Season::of_month(date.month());
    let year = if date.month() == 12 {
        date.year() + 1
    } else {
        date.year()
    };
    season_filter(year, season)
}

/// Filter value for the season airing now (UTC)
pub fn current_season_filter() -> String {
    season_filter_for(Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_of_month() {
        assert_eq!(Season::of_month(1), Season::Winter);
        assert_eq!(Season::of_month(3), Season::Spring);
        assert_eq!(Season::of_month(8), Season::Summer);
        assert_eq!(Season::of_month(11), Season::Fall);
        assert_eq!(Season::of_month(12), Season::Winter);
    }

    #[test]
    fn test_season_filter_for() {
        assert_eq!(season_filter_for(date(2024, 10, 5)), "2024_fall");
        assert_eq!(season_filter_for(date(2023, 7, 1)), "2023_summer");
        assert_eq!(season_filter_for(date(2024, 12, 20)), "2025_winter");
        assert_eq!(season_filter_for(date(2025, 2, 1)), "2025_winter");
    }

    #[test]
    fn test_current_season_filter_shape() {
        let filter = current_season_filter();
        let (year, season) = filter.split_once('_').unwrap();
        assert!(year.parse::<i32>().is_ok());
        assert!(["winter", "spring", "summer", "fall"].contains(&season));
    }
}
