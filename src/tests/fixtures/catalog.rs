// Shared test fixtures for activity seeds. Compiled into the crate only
// during tests via the cfg(test) tests module in src/lib.rs.

use crate::modules::activities::catalog::ActivitySeed;

pub struct ActivitySeedBuilder {
    inner: ActivitySeed,
}

impl Default for ActivitySeedBuilder {
    fn default() -> Self {
        Self::new("Chess Club")
    }
}

#[allow(dead_code)]
impl ActivitySeedBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: ActivitySeed {
                name: name.into(),
                description: "A test activity".to_string(),
                schedule: "Mondays, 3:30 PM - 4:30 PM".to_string(),
                max_participants: 12,
                participants: Vec::new(),
            },
        }
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn schedule(mut self, v: impl Into<String>) -> Self {
        self.inner.schedule = v.into();
        self
    }

    pub fn max_participants(mut self, v: usize) -> Self {
        self.inner.max_participants = v;
        self
    }

    pub fn participants(mut self, v: Vec<String>) -> Self {
        self.inner.participants = v;
        self
    }

    pub fn participant(mut self, v: impl Into<String>) -> Self {
        self.inner.participants.push(v.into());
        self
    }

    pub fn build(self) -> ActivitySeed {
        self.inner
    }
}

// Three activities covering the interesting states: one with a free slot,
// one already at capacity, one empty.
pub fn small_catalog() -> Vec<ActivitySeed> {
    vec![
        ActivitySeedBuilder::new("Chess Club")
            .description("Learn strategies and compete in chess tournaments")
            .schedule("Fridays, 3:30 PM - 5:00 PM")
            .max_participants(2)
            .participant("michael@mergington.edu")
            .build(),
        ActivitySeedBuilder::new("Art Club")
            .description("Explore your creativity through painting and drawing")
            .schedule("Thursdays, 3:30 PM - 5:00 PM")
            .max_participants(1)
            .participant("amelia@mergington.edu")
            .build(),
        ActivitySeedBuilder::new("Programming Class")
            .description("Learn programming fundamentals and build software projects")
            .schedule("Tuesdays and Thursdays, 3:30 PM - 4:30 PM")
            .max_participants(20)
            .build(),
    ]
}

#[cfg(test)]
mod activity_seed_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = ActivitySeedBuilder::default().build();
        assert_eq!(built.name, "Chess Club");
        assert_eq!(built.max_participants, 12);
        assert!(built.participants.is_empty());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = ActivitySeedBuilder::new("Robotics Lab")
            .description("Build and program robots")
            .schedule("Saturdays, 10:00 AM - 12:00 PM")
            .max_participants(6)
            .participants(vec!["a@mergington.edu".into()])
            .participant("b@mergington.edu")
            .build();

        assert_eq!(custom.name, "Robotics Lab");
        assert_eq!(custom.description, "Build and program robots");
        assert_eq!(custom.schedule, "Saturdays, 10:00 AM - 12:00 PM");
        assert_eq!(custom.max_participants, 6);
        assert_eq!(
            custom.participants,
            vec!["a@mergington.edu", "b@mergington.edu"]
        );
    }

    #[rstest]
    fn small_catalog_seeds_one_open_one_full_one_empty_activity() {
        let seeds = small_catalog();
        assert_eq!(seeds.len(), 3);
        assert!(seeds[0].participants.len() < seeds[0].max_participants);
        assert_eq!(seeds[1].participants.len(), seeds[1].max_participants);
        assert!(seeds[2].participants.is_empty());
    }
}
