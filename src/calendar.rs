use chrono::{Datelike, Duration, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub has_entry: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// Zero-based month, January = 0.
    pub month: u32,
    pub year: i32,
    /// Blank cells before day 1 in a week starting on Sunday.
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    pub fn days_in_month(&self) -> u32 {
        self.days.len() as u32
    }

    /// Cells grouped into weeks, `None` for padding.
    pub fn weeks(&self) -> Vec<[Option<DayCell>; 7]> {
        let mut cells: Vec<Option<DayCell>> = vec![None; self.leading_blanks as usize];
        cells.extend(self.days.iter().copied().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week.copy_from_slice(chunk);
                week
            })
            .collect()
    }
}

/// Months past December roll into the following years.
fn normalize(month: u32, year: i32) -> (u32, i32) {
    (month % 12, year + (month / 12) as i32)
}

pub fn first_of_month(month: u32, year: i32) -> Option<NaiveDate> {
    let (month, year) = normalize(month, year);
    NaiveDate::from_ymd_opt(year, month + 1, 1)
}

/// Last day of the month, found as the day before the first of the next one.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    let (month, year) = normalize(month, year);
    first_of_month(month + 1, year)
        .map(|next| (next - Duration::days(1)).day())
        .unwrap_or(0)
}

pub fn month_grid(month: u32, year: i32, entry_dates: &[NaiveDate], today: NaiveDate) -> MonthGrid {
    let (month, year) = normalize(month, year);
    let Some(first) = first_of_month(month, year) else {
        return MonthGrid {
            month,
            year,
            leading_blanks: 0,
            days: Vec::new(),
        };
    };

    let days = (1..=days_in_month(month, year))
        .map(|day| {
            let has_entry = entry_dates
                .iter()
                .any(|d| d.year() == year && d.month0() == month && d.day() == day);
            let is_today =
                today.year() == year && today.month0() == month && today.day() == day;
            DayCell {
                day,
                has_entry,
                is_today,
            }
        })
        .collect();

    MonthGrid {
        month,
        year,
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    }
}

/// Shifts a zero-based (month, year) pair by `delta` months.
pub fn shift_month(month: u32, year: i32, delta: i32) -> (u32, i32) {
    let total = year * 12 + month as i32 + delta;
    (total.rem_euclid(12) as u32, total.div_euclid(12))
}

pub const MONTH_NAMES: [&str; 12] = [
    "Ianuarie",
    "Februarie",
    "Martie",
    "Aprilie",
    "Mai",
    "Iunie",
    "Iulie",
    "August",
    "Septembrie",
    "Octombrie",
    "Noiembrie",
    "Decembrie",
];

pub const WEEKDAY_SHORT: [&str; 7] = ["Du", "Lu", "Ma", "Mi", "Jo", "Vi", "Sâ"];

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month % 12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_february() {
        assert_eq!(days_in_month(1, 2024), 29);
        assert_eq!(days_in_month(1, 2025), 28);
        assert_eq!(days_in_month(1, 1900), 28);
        assert_eq!(days_in_month(1, 2000), 29);
    }

    #[test]
    fn test_days_in_december_crosses_year() {
        assert_eq!(days_in_month(11, 2024), 31);
        assert_eq!(days_in_month(3, 2025), 30);
    }

    #[test]
    fn test_leading_blanks_for_wednesday_start() {
        // 1 January 2025 is a Wednesday.
        let grid = month_grid(0, 2025, &[], date(2025, 3, 1));
        assert_eq!(grid.leading_blanks, 3);
        assert_eq!(grid.days_in_month(), 31);
    }

    #[test]
    fn test_leading_blanks_for_sunday_start() {
        // 1 June 2025 is a Sunday.
        let grid = month_grid(5, 2025, &[], date(2025, 6, 10));
        assert_eq!(grid.leading_blanks, 0);
    }

    #[test]
    fn test_exactly_one_today_cell() {
        let today = date(2024, 2, 17);
        let grid = month_grid(1, 2024, &[], today);
        let todays: Vec<_> = grid.days.iter().filter(|c| c.is_today).collect();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].day, 17);

        let other = month_grid(2, 2024, &[], today);
        assert!(other.days.iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_entries_marked_only_in_matching_month() {
        let entries = [date(2024, 2, 3), date(2024, 2, 29), date(2024, 3, 3)];
        let grid = month_grid(1, 2024, &entries, date(2024, 1, 1));
        let marked: Vec<u32> = grid
            .days
            .iter()
            .filter(|c| c.has_entry)
            .map(|c| c.day)
            .collect();
        assert_eq!(marked, vec![3, 29]);
    }

    #[test]
    fn test_month_overflow_rolls_into_next_year() {
        let grid = month_grid(12, 2024, &[], date(2025, 1, 5));
        assert_eq!((grid.month, grid.year), (0, 2025));
        assert_eq!(grid.days.iter().filter(|c| c.is_today).count(), 1);
    }

    #[test]
    fn test_weeks_pad_to_full_rows() {
        let grid = month_grid(0, 2025, &[], date(2025, 1, 1));
        let weeks = grid.weeks();
        assert_eq!(weeks.len(), 5);
        assert!(weeks[0][..3].iter().all(|c| c.is_none()));
        assert_eq!(weeks[0][3].unwrap().day, 1);
        assert!(weeks[4][6].is_none());
    }

    #[test]
    fn test_shift_month() {
        assert_eq!(shift_month(0, 2025, -1), (11, 2024));
        assert_eq!(shift_month(11, 2024, 1), (0, 2025));
        assert_eq!(shift_month(5, 2025, 14), (7, 2026));
    }
}
