//! Public-site helpers: career filters, animated counters, the dashboard ticker.

use std::time::Duration;

use crate::models::{ContractType, ExperienceLevel, JobOffer};

/// How long each dashboard notification stays in the ticker.
pub const TICKER_PERIOD: Duration = Duration::from_secs(4);

/// Duration of the home page counters.
pub const COUNTER_DURATION: Duration = Duration::from_secs(2);

/// A headline figure of the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeStat {
    pub target: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const HOME_STATS: [HomeStat; 4] = [
    HomeStat {
        target: 150,
        suffix: "+",
        label: "Projets",
    },
    HomeStat {
        target: 85,
        suffix: "+",
        label: "Clients",
    },
    HomeStat {
        target: 96,
        suffix: "%",
        label: "Satisfaction",
    },
    HomeStat {
        target: 5,
        suffix: "+",
        label: "Ans d'expertise",
    },
];

/// Value shown by a counter `elapsed` into its animation.
///
/// Grows linearly and is floored, so it only reaches `target` once the
/// whole `duration` has passed.
pub fn counter_value(target: u64, elapsed: Duration, duration: Duration) -> u64 {
    if duration.is_zero() || elapsed >= duration {
        return target;
    }
    let progress = elapsed.as_secs_f64() / duration.as_secs_f64();
    ((progress * target as f64).floor() as u64).min(target)
}

/// Index of the notification shown `elapsed` after the ticker started.
pub fn ticker_index(elapsed: Duration, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let ticks = elapsed.as_millis() / TICKER_PERIOD.as_millis();
    (ticks % len as u128) as usize
}

/// Filter applied to the job board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CareerFilter {
    #[default]
    All,
    Department(String),
    Contract(ContractType),
    Experience(ExperienceLevel),
}

impl CareerFilter {
    pub fn matches(&self, job: &JobOffer) -> bool {
        match self {
            CareerFilter::All => true,
            CareerFilter::Department(department) => job.department == *department,
            CareerFilter::Contract(contract) => job.contract == *contract,
            CareerFilter::Experience(level) => job.experience == *level,
        }
    }

    pub fn label(&self) -> String {
        match self {
            CareerFilter::All => "Toutes les offres".to_string(),
            CareerFilter::Department(department) => department.clone(),
            CareerFilter::Contract(contract) => contract.label().to_string(),
            CareerFilter::Experience(level) => level.label().to_string(),
        }
    }
}

pub fn filter_jobs<'a>(jobs: &'a [JobOffer], filter: &CareerFilter) -> Vec<&'a JobOffer> {
    jobs.iter().filter(|job| filter.matches(job)).collect()
}

/// Distinct departments in order of first appearance.
pub fn departments(jobs: &[JobOffer]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for job in jobs {
        if !seen.contains(&job.department) {
            seen.push(job.department.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_counter_value_progression() {
        let duration = COUNTER_DURATION;
        assert_eq!(counter_value(150, Duration::ZERO, duration), 0);
        assert_eq!(counter_value(150, Duration::from_millis(1000), duration), 75);
        assert_eq!(counter_value(96, Duration::from_millis(1999), duration), 95);
        assert_eq!(counter_value(96, duration, duration), 96);
        assert_eq!(counter_value(5, Duration::from_secs(10), duration), 5);
        assert_eq!(counter_value(5, Duration::ZERO, Duration::ZERO), 5);
    }

    #[test]
    fn test_ticker_rotates_every_period() {
        assert_eq!(ticker_index(Duration::ZERO, 5), 0);
        assert_eq!(ticker_index(Duration::from_millis(3999), 5), 0);
        assert_eq!(ticker_index(Duration::from_secs(4), 5), 1);
        assert_eq!(ticker_index(Duration::from_secs(20), 5), 0);
        assert_eq!(ticker_index(Duration::from_secs(8), 0), 0);
    }

    #[test]
    fn test_career_filters() {
        let jobs = fixtures::job_offers();
        assert_eq!(filter_jobs(&jobs, &CareerFilter::All).len(), 3);
        assert_eq!(filter_jobs(&jobs, &CareerFilter::Contract(ContractType::Cdi)).len(), 2);
        assert_eq!(
            filter_jobs(&jobs, &CareerFilter::Experience(ExperienceLevel::Debutant))[0].department,
            "Analyse"
        );
        assert!(filter_jobs(&jobs, &CareerFilter::Department("Marketing".to_string())).is_empty());
        assert_eq!(departments(&jobs), vec!["R&D", "Développement", "Analyse"]);
    }
}
