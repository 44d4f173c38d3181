use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySeed {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    #[serde(default)]
    pub participants: Vec<String>,
}

fn seed(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: usize,
    participants: &[&str],
) -> ActivitySeed {
    ActivitySeed {
        name: name.to_owned(),
        description: description.to_owned(),
        schedule: schedule.to_owned(),
        max_participants,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }
}

pub fn default_catalog() -> Vec<ActivitySeed> {
    vec![
        seed(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        seed(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        seed(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        seed(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        seed(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        seed(
            "Tennis Club",
            "Practice serves, rallies, and friendly matches on the school courts",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            8,
            &["lucas@mergington.edu"],
        ),
        seed(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        seed(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        seed(
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        seed(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ]
}

pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<ActivitySeed>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading activity catalog from {}", path.display()))?;
    let seeds: Vec<ActivitySeed> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing activity catalog from {}", path.display()))?;
    Ok(seeds)
}
