use crate::models::user::BloodGroup;
use serde::Serialize;

/// A donation center listed in the static directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BloodBank {
    pub name: &'static str,
    /// Neighborhood the center is in
    pub area: &'static str,
    pub contact: &'static str,
    /// Groups the center keeps in stock
    pub blood_groups: &'static [BloodGroup],
}

impl BloodBank {
    pub fn stocks(&self, group: BloodGroup) -> bool {
        self.blood_groups.contains(&group)
    }

    pub fn is_in(&self, area: &str) -> bool {
        self.area.eq_ignore_ascii_case(area.trim())
    }
}
