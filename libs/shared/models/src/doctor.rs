use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub working_hours: WorkingHours,
    pub available_days: Vec<Weekday>,
    pub max_patients_per_day: i32,
}

impl DoctorProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Default for DoctorProfile {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            first_name: String::new(),
            last_name: String::new(),
            working_hours: WorkingHours::default(),
            available_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            max_patients_per_day: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Default for WorkingHours {
    fn default() -> Self {
        // 09:00-17:00 when a doctor has no configured hours
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        }
    }
}

/// A doctor reference as it arrives from the backing store: sometimes a bare
/// id, sometimes a populated profile. All consumers go through the resolver
/// methods instead of matching ad hoc.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DoctorRef {
    Id(Uuid),
    Populated(DoctorProfile),
}

impl DoctorRef {
    pub fn id(&self) -> Uuid {
        match self {
            DoctorRef::Id(id) => *id,
            DoctorRef::Populated(profile) => profile.id,
        }
    }

    /// Display name when available; an id carries no name.
    pub fn display_name(&self) -> Option<String> {
        match self {
            DoctorRef::Id(_) => None,
            DoctorRef::Populated(profile) => Some(profile.full_name()),
        }
    }
}
