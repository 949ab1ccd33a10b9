use crate::content::AFFIRMATIONS;
use crate::models::JournalEntry;
use chrono::{Datelike, Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

pub const ENERGY_WINDOW_DAYS: i64 = 7;

/// Mean mood over the last week scaled to 0..=100.
pub fn energy_level(entries: &[JournalEntry], today: NaiveDate) -> Option<u8> {
    let window_start = today - Duration::days(ENERGY_WINDOW_DAYS - 1);
    let scores: Vec<u32> = entries
        .iter()
        .filter(|e| e.date >= window_start && e.date <= today)
        .map(|e| e.mood.score() as u32)
        .collect();
    if scores.is_empty() {
        return None;
    }
    let total: u32 = scores.iter().sum();
    let percent = (total * 100 + (scores.len() as u32 * 5) / 2) / (scores.len() as u32 * 5);
    Some(percent.min(100) as u8)
}

pub fn energy_label(percent: Option<u8>) -> &'static str {
    match percent {
        None => "Fără date încă",
        Some(0..=39) => "Energie scăzută",
        Some(40..=69) => "Energie moderată",
        Some(70..=89) => "Energie bună",
        Some(_) => "Plin(ă) de energie",
    }
}

/// Consecutive days with at least one entry, ending today or yesterday.
pub fn current_streak(entries: &[JournalEntry], today: NaiveDate) -> u32 {
    let dates: BTreeSet<NaiveDate> = entries.iter().map(|e| e.date).collect();
    let mut day = if dates.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };
    let mut streak = 0;
    while dates.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

pub fn entries_in_month(entries: &[JournalEntry], month: u32, year: i32) -> usize {
    entries
        .iter()
        .filter(|e| e.date.year() == year && e.date.month0() == month)
        .count()
}

pub fn pick_affirmation<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    AFFIRMATIONS.choose(rng).copied().unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub energy: Option<u8>,
    pub streak: u32,
    pub month_entries: usize,
    pub total_entries: usize,
}

impl DashboardStats {
    pub fn compute(entries: &[JournalEntry], today: NaiveDate) -> Self {
        Self {
            energy: energy_level(entries, today),
            streak: current_streak(entries, today),
            month_entries: entries_in_month(entries, today.month0(), today.year()),
            total_entries: entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entry(date: NaiveDate, mood: Mood) -> JournalEntry {
        JournalEntry {
            id: None,
            date,
            mood,
            note: String::new(),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_energy_level_uses_last_week_only() {
        let entries = vec![
            entry(day(1), Mood::Bad),
            entry(day(10), Mood::Great),
            entry(day(12), Mood::Okay),
        ];
        // Only the 10th and 12th fall in the window ending on the 14th.
        assert_eq!(energy_level(&entries, day(14)), Some(80));
        assert_eq!(energy_level(&entries, day(30)), None);
    }

    #[test]
    fn test_energy_level_bounds() {
        let all_great = vec![entry(day(5), Mood::Great), entry(day(6), Mood::Great)];
        assert_eq!(energy_level(&all_great, day(6)), Some(100));
        let all_bad = vec![entry(day(5), Mood::Bad)];
        assert_eq!(energy_level(&all_bad, day(6)), Some(20));
    }

    #[test]
    fn test_energy_label() {
        assert_eq!(energy_label(None), "Fără date încă");
        assert_eq!(energy_label(Some(20)), "Energie scăzută");
        assert_eq!(energy_label(Some(60)), "Energie moderată");
        assert_eq!(energy_label(Some(80)), "Energie bună");
        assert_eq!(energy_label(Some(100)), "Plin(ă) de energie");
    }

    #[test]
    fn test_streak_counts_back_from_today_or_yesterday() {
        let entries = vec![
            entry(day(7), Mood::Good),
            entry(day(8), Mood::Good),
            entry(day(8), Mood::Okay),
            entry(day(9), Mood::Low),
        ];
        assert_eq!(current_streak(&entries, day(9)), 3);
        assert_eq!(current_streak(&entries, day(10)), 3);
        assert_eq!(current_streak(&entries, day(11)), 0);
    }

    #[test]
    fn test_dashboard_stats() {
        let entries = vec![
            entry(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(), Mood::Good),
            entry(day(1), Mood::Good),
        ];
        let stats = DashboardStats::compute(&entries, day(1));
        assert_eq!(stats.month_entries, 1);
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.streak, 2);
        assert_eq!(stats.energy, Some(80));
    }

    #[test]
    fn test_affirmation_comes_from_content() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = pick_affirmation(&mut rng);
        assert!(AFFIRMATIONS.contains(&picked));
    }
}
