use serde::{Deserialize, Serialize};

///
/// AccessLevel
///
/// Closed-set role used to derive a team member's default permissions
/// at creation time.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    Admin,
    Manager,
    #[default]
    Staff,
    Volunteer,
}

///
/// PermissionSet
///
/// The eight capability flags attached to a team member. Derived once
/// from the access level at creation; afterwards it is an independently
/// owned object, replaced wholesale by the permission override and
/// never re-derived when the access level changes.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PermissionSet {
    pub manage_events: bool,
    pub manage_vendors: bool,
    pub manage_services: bool,
    pub manage_team: bool,
    pub view_reports: bool,
    pub manage_billing: bool,
    pub send_notifications: bool,
    pub export_data: bool,
}

impl PermissionSet {
    /// Every flag granted. "Select all" helper.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            manage_events: true,
            manage_vendors: true,
            manage_services: true,
            manage_team: true,
            view_reports: true,
            manage_billing: true,
            send_notifications: true,
            export_data: true,
        }
    }

    /// Every flag withheld. "Clear all" helper.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            manage_events: false,
            manage_vendors: false,
            manage_services: false,
            manage_team: false,
            view_reports: false,
            manage_billing: false,
            send_notifications: false,
            export_data: false,
        }
    }

    /// Default capability set for an access level. Total over the enum.
    #[must_use]
    pub const fn for_level(level: AccessLevel) -> Self {
        match level {
            AccessLevel::Admin => Self::all(),
            AccessLevel::Manager => Self {
                manage_team: false,
                manage_billing: false,
                ..Self::all()
            },
            AccessLevel::Staff => Self {
                manage_events: true,
                ..Self::none()
            },
            AccessLevel::Volunteer => Self::none(),
        }
    }

    #[must_use]
    pub const fn granted_count(&self) -> usize {
        self.manage_events as usize
            + self.manage_vendors as usize
            + self.manage_services as usize
            + self.manage_team as usize
            + self.view_reports as usize
            + self.manage_billing as usize
            + self.send_notifications as usize
            + self.export_data as usize
    }
}

///
/// TESTS
///
