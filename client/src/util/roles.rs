//! Role-derived dashboard composition.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard is the authenticated landing route; which sections it
//! shows is decided here, from the profile's role, so the page component
//! stays a pure renderer.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use crate::net::types::Role;

/// One dashboard section card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashSection {
    pub title: &'static str,
    pub blurb: &'static str,
}

const OVERVIEW: DashSection = DashSection {
    title: "Overview",
    blurb: "Activity across your projects at a glance.",
};
const SPRINT_PLANNING: DashSection = DashSection {
    title: "Sprint Planning",
    blurb: "Shape the next iteration and balance the backlog.",
};
const DELIVERY_REPORTS: DashSection = DashSection {
    title: "Delivery Reports",
    blurb: "Burndown and throughput for active projects.",
};
const MY_TASKS: DashSection = DashSection {
    title: "My Tasks",
    blurb: "Everything assigned to you, ordered by due date.",
};
const REVIEW_QUEUE: DashSection = DashSection {
    title: "Review Queue",
    blurb: "Work items waiting on verification.",
};

/// Sections shown on the authenticated landing page for a role.
///
/// Everyone gets the overview. Planning and reporting follow management
/// roles, work queues follow hands-on roles, and viewers stay read-only.
/// The admin team panel is rendered separately, gated on
/// [`Role::can_manage_roles`].
#[must_use]
pub fn sections_for(role: Role) -> Vec<DashSection> {
    match role {
        Role::Admin => vec![OVERVIEW, SPRINT_PLANNING, DELIVERY_REPORTS, MY_TASKS],
        Role::ProjectManager => vec![OVERVIEW, SPRINT_PLANNING, DELIVERY_REPORTS],
        Role::Developer => vec![OVERVIEW, MY_TASKS],
        Role::Tester => vec![OVERVIEW, MY_TASKS, REVIEW_QUEUE],
        Role::Viewer => vec![OVERVIEW],
    }
}
