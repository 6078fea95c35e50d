use chrono::Utc;
use shared_types::{ActivityEntry, ActivityType};
use uuid::Uuid;

use super::{AppState, Store};

/// Entries kept in the feed before the oldest are evicted
const ACTIVITY_CAP: usize = 100;

pub(crate) fn log_activity(state: &mut AppState, message: impl Into<String>, kind: ActivityType) {
    state.activities.push(ActivityEntry {
        id: Uuid::new_v4(),
        message: message.into(),
        activity_type: kind,
        timestamp: Utc::now(),
    });

    if state.activities.len() > ACTIVITY_CAP {
        let excess = state.activities.len() - ACTIVITY_CAP;
        state.activities.drain(..excess);
    }
}

impl Store {
    /// Recent activity, newest first
    pub fn list_activities(&self) -> Vec<ActivityEntry> {
        let state = self.read();
        let mut activities = state.activities.clone();
        activities.reverse();
        activities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testutil::test_store;

    #[test]
    fn test_feed_capped_at_100_oldest_evicted() {
        let (_dir, store) = test_store();

        {
            let mut state = store.write();
            for i in 0..130 {
                log_activity(&mut state, format!("event {i}"), ActivityType::Info);
            }
        }

        let activities = store.list_activities();
        assert_eq!(activities.len(), 100);
        // Newest first; the oldest surviving entry is number 30
        assert_eq!(activities[0].message, "event 129");
        assert_eq!(activities[99].message, "event 30");
    }
}
