use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const SPRINT_COUNT: usize = 3;
/// Tasks per sprint before moving on to the next one.
pub const SPRINT_BUCKET_SIZE: usize = 3;
pub const SPRINT_LENGTH_DAYS: i64 = 7;

pub const SPRINT_NAMES: [&str; SPRINT_COUNT] = [
    "Sprint 1: Foundation & Setup",
    "Sprint 2: Core Gameplay",
    "Sprint 3: Polish & Optimization",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// Three consecutive one-week windows starting at `now`.
pub fn sprint_plan(now: DateTime<Utc>) -> Vec<Sprint> {
    let length = Duration::days(SPRINT_LENGTH_DAYS);
    SPRINT_NAMES
        .iter()
        .zip(0i32..)
        .map(|(name, k)| {
            let starts_at = now + length * k;
            Sprint {
                name: (*name).to_string(),
                starts_at,
                ends_at: starts_at + length,
            }
        })
        .collect()
}

/// Sprint bucket for the task at `position`: `min(position / 3, sprint_count - 1)`.
///
/// Tasks past the last full bucket all land in the final sprint; nothing
/// spills into an extra sprint. Returns `None` only when there are no
/// sprints to bind to.
pub fn sprint_index(position: usize, sprint_count: usize) -> Option<usize> {
    if sprint_count == 0 {
        return None;
    }
    Some((position / SPRINT_BUCKET_SIZE).min(sprint_count - 1))
}

/// Sprint bucket for every position in a list of `task_count` tasks.
pub fn distribute(task_count: usize, sprint_count: usize) -> Vec<Option<usize>> {
    (0..task_count)
        .map(|i| sprint_index(i, sprint_count))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn seven_tasks_fill_three_sprints() {
        let got = distribute(7, SPRINT_COUNT);
        assert_eq!(
            got,
            vec![Some(0), Some(0), Some(0), Some(1), Some(1), Some(1), Some(2)]
        );
    }

    #[test]
    fn overflow_collapses_into_last_sprint() {
        let got = distribute(11, SPRINT_COUNT);
        assert_eq!(got[8], Some(2));
        assert_eq!(got[9], Some(2));
        assert_eq!(got[10], Some(2));
        assert_eq!(got.iter().filter(|s| **s == Some(2)).count(), 5);
    }

    #[test]
    fn index_matches_formula_for_many_sizes() {
        for n in 0..40 {
            for (i, s) in distribute(n, SPRINT_COUNT).into_iter().enumerate() {
                assert_eq!(s, Some((i / 3).min(2)), "n={n} i={i}");
            }
        }
    }

    #[test]
    fn no_sprints_means_no_binding() {
        assert_eq!(sprint_index(0, 0), None);
        assert_eq!(distribute(2, 0), vec![None, None]);
    }

    #[test]
    fn sprint_windows_are_contiguous_weeks() {
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 9, 30, 0).unwrap();
        let sprints = sprint_plan(now);
        assert_eq!(sprints.len(), 3);
        assert_eq!(sprints[0].starts_at, now);
        for pair in sprints.windows(2) {
            assert_eq!(pair[0].ends_at, pair[1].starts_at);
        }
        for s in &sprints {
            assert_eq!(s.ends_at - s.starts_at, Duration::days(7));
        }
        assert_eq!(sprints[2].ends_at, now + Duration::days(21));
        assert_eq!(sprints[1].name, "Sprint 2: Core Gameplay");
    }
}
