use super::ActivityId;

/// A named category an entry can reference, e.g. "Running".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
}

impl Activity {
    pub fn new(id: impl Into<ActivityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Read-only list of selectable activities.
#[derive(Debug, Clone)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn find(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }

    pub fn name_of(&self, id: ActivityId) -> Option<&str> {
        self.find(id).map(|activity| activity.name.as_str())
    }
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        Self::new(vec![
            Activity::new(1, "Basketball"),
            Activity::new(2, "Biking"),
            Activity::new(3, "Hiking"),
            Activity::new(4, "Kayaking"),
            Activity::new(5, "Pole Dancing"),
            Activity::new(6, "Running"),
            Activity::new(7, "Skiing"),
            Activity::new(8, "Swimming"),
            Activity::new(9, "Tennis"),
            Activity::new(10, "Walking"),
            Activity::new(11, "Weight Lifting"),
        ])
    }
}
