//! Cycle timeline: ovulation estimate, fertile window and a daily
//! conception-likelihood curve. Host-side display data; not used in scoring.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::defaults::{
    CONCEPTION_CURVE_SIGMA_DAYS, FERTILE_WINDOW_DAYS_AFTER, FERTILE_WINDOW_DAYS_BEFORE,
    OVULATION_CYCLE_FRACTION,
};
use crate::scoring::interp;

/// Menstrual cycle parameters supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleInfo {
    /// Cycle length in days (21-35)
    pub cycle_length_days: u32,
    /// First day of the last menstrual period
    pub last_menses: NaiveDate,
}

/// Estimated cycle landmarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleTimeline {
    pub cycle: CycleInfo,
    /// Cycle day (0-based from LMP) of estimated ovulation
    pub ovulation_day: u32,
    pub ovulation_date: NaiveDate,
    pub fertile_window_start: NaiveDate,
    pub fertile_window_end: NaiveDate,
    /// Relative conception likelihood per cycle day, peak = 1.0
    pub daily_likelihood: Vec<f64>,
}

impl CycleTimeline {
    pub fn compute(cycle: CycleInfo) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let ovulation_day = (f64::from(cycle.cycle_length_days) * OVULATION_CYCLE_FRACTION) as u32;
        let ovulation_date = cycle.last_menses + Duration::days(i64::from(ovulation_day));

        let raw: Vec<f64> = (0..cycle.cycle_length_days)
            .map(|day| {
                let z = (f64::from(day) - f64::from(ovulation_day)) / CONCEPTION_CURVE_SIGMA_DAYS;
                (-0.5 * z * z).exp()
            })
            .collect();
        let peak = raw.iter().copied().fold(0.0_f64, f64::max);
        let daily_likelihood = if peak > 0.0 {
            raw.into_iter().map(|p| p / peak).collect()
        } else {
            raw
        };

        Self {
            cycle,
            ovulation_day,
            ovulation_date,
            fertile_window_start: ovulation_date - Duration::days(FERTILE_WINDOW_DAYS_BEFORE),
            fertile_window_end: ovulation_date + Duration::days(FERTILE_WINDOW_DAYS_AFTER),
            daily_likelihood,
        }
    }

    /// Whether a calendar date falls inside the fertile window (inclusive).
    pub fn in_fertile_window(&self, date: NaiveDate) -> bool {
        date >= self.fertile_window_start && date <= self.fertile_window_end
    }

    /// Plain-text rendering: window summary plus one bar per cycle day.
    pub fn render_text(&self) -> String {
        let mut lines = vec![format!(
            "Estimated fertile window: {} → {} (ovulation around {})",
            self.fertile_window_start, self.fertile_window_end, self.ovulation_date
        )];
        for (day, p) in self.daily_likelihood.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let width = (p * 20.0).round() as usize;
            lines.push(format!("Day {:>2} | {}", day, "#".repeat(width)));
        }
        lines.join("\n")
    }
}

/// Relative endometrial thickness index from estradiol and FSH.
///
/// Rises with estradiol (5.5 at 10 pg/mL to 10.5 at 300 pg/mL) and is
/// reduced by up to 2.0 as FSH climbs from 1 to 20 IU/L.
pub fn endometrial_thickness_index(estradiol: f64, fsh: f64) -> f64 {
    interp(estradiol, (10.0, 300.0), (5.5, 10.5)) - interp(fsh, (1.0, 20.0), (0.0, 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(len: u32) -> CycleInfo {
        CycleInfo {
            cycle_length_days: len,
            last_menses: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
        }
    }

    #[test]
    fn twenty_eight_day_cycle() {
        let t = CycleTimeline::compute(cycle(28));
        assert_eq!(t.ovulation_day, 14);
        assert_eq!(t.ovulation_date, NaiveDate::from_ymd_opt(2026, 10, 15).unwrap());
        assert_eq!(t.fertile_window_start, NaiveDate::from_ymd_opt(2026, 10, 12).unwrap());
        assert_eq!(t.fertile_window_end, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(t.daily_likelihood.len(), 28);
        assert!((t.daily_likelihood[14] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn odd_cycle_length_floors_ovulation_day() {
        let t = CycleTimeline::compute(cycle(35));
        assert_eq!(t.ovulation_day, 17);
    }

    #[test]
    fn likelihood_is_symmetric_around_ovulation() {
        let t = CycleTimeline::compute(cycle(30));
        let ov = t.ovulation_day as usize;
        assert!((t.daily_likelihood[ov - 2] - t.daily_likelihood[ov + 2]).abs() < 1e-12);
        assert!(t.daily_likelihood[ov - 2] < 1.0);
    }

    #[test]
    fn fertile_window_membership() {
        let t = CycleTimeline::compute(cycle(28));
        assert!(t.in_fertile_window(NaiveDate::from_ymd_opt(2026, 10, 12).unwrap()));
        assert!(!t.in_fertile_window(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()));
    }

    #[test]
    fn render_has_one_line_per_day() {
        let t = CycleTimeline::compute(cycle(21));
        assert_eq!(t.render_text().lines().count(), 22);
    }

    #[test]
    fn thickness_index_range() {
        assert!((endometrial_thickness_index(300.0, 1.0) - 10.5).abs() < 1e-12);
        assert!((endometrial_thickness_index(10.0, 20.0) - 3.5).abs() < 1e-12);
    }
}
