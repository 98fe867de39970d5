use crate::activity::Activity;
use crate::clock::timestamp_id;
use chrono::{DateTime, Local};

/// Activities logged or restored this session, in logging order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ActivityStore {
    activities: Vec<Activity>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, activity: Activity) {
        self.activities.push(activity);
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.id() == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn all(&self) -> &[Activity] {
        &self.activities
    }

    /// Hydration only: discards whatever was there.
    pub fn replace_all(&mut self, activities: Vec<Activity>) {
        self.activities = activities;
    }

    pub fn clear(&mut self) {
        self.activities.clear();
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// An id derived from `at` that no stored activity uses yet.
    pub fn unique_id_for(&self, at: &DateTime<Local>) -> String {
        timestamp_id(at, |id| self.contains_id(id))
    }
}
