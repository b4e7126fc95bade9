use crate::models::Activity;

/// Activities loaded at process start.
pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Basketball Team",
            "Join our competitive basketball team and compete in league games",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
            &["alex@mergington.edu"],
        ),
        Activity::new(
            "Tennis Club",
            "Learn tennis skills and participate in friendly matches",
            "Saturdays, 10:00 AM - 12:00 PM",
            16,
            &["jessica@mergington.edu"],
        ),
        Activity::new(
            "Art Studio",
            "Explore painting, drawing, and sculpture techniques",
            "Wednesdays, 3:30 PM - 5:00 PM",
            18,
            &["sarah@mergington.edu"],
        ),
        Activity::new(
            "Drama Club",
            "Perform in theatrical productions and develop acting skills",
            "Thursdays, 4:00 PM - 5:30 PM",
            25,
            &["marcus@mergington.edu", "lucas@mergington.edu"],
        ),
        Activity::new(
            "Debate Team",
            "Develop argumentation and public speaking skills through competitive debate",
            "Tuesdays, 3:30 PM - 5:00 PM",
            14,
            &["rachel@mergington.edu"],
        ),
        Activity::new(
            "Science Club",
            "Conduct experiments and explore scientific concepts through hands-on projects",
            "Fridays, 3:30 PM - 5:00 PM",
            20,
            &["noah@mergington.edu", "ava@mergington.edu"],
        ),
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    ]
}
