use crate::domain::entities::{AccessLevel, Role, ScheduleEntry};

// Whether a guest with `role` may see an entry at `level`.
pub fn can_view(role: Role, level: AccessLevel) -> bool {
    match (level, role) {
        (AccessLevel::Public, _) => true,
        (AccessLevel::Vip, Role::Vip) => true,
        (AccessLevel::Vip, Role::Friend) => false,
    }
}

// Order-preserving view of the schedule for a role.
pub fn filter_schedule(role: Role, schedule: &[ScheduleEntry]) -> Vec<ScheduleEntry> {
    schedule
        .iter()
        .filter(|entry| can_view(role, entry.access_level))
        .cloned()
        .collect()
}
