//! Static role permission table.
//!
//! Every role maps to one hardcoded [`PermissionSet`]. There is no
//! inheritance between roles and nothing here is mutable at runtime, so the
//! lookups are plain functions that can be called from anywhere.

use serde::Serialize;

use super::audit_type::AuditType;
use super::phase::AuditPhase;
use super::role::Role;

/// Boolean capability flags carried by every [`PermissionSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Capability {
    CreateAudit,
    EditAudit,
    ViewAudit,
    DeleteAudit,
    Sign,
    Approve,
    AdvancePhase,
    ViewAuditTrail,
    GenerateReports,
    ManageUsers,
}

impl Capability {
    pub const ALL: [Capability; 10] = [
        Capability::CreateAudit,
        Capability::EditAudit,
        Capability::ViewAudit,
        Capability::DeleteAudit,
        Capability::Sign,
        Capability::Approve,
        Capability::AdvancePhase,
        Capability::ViewAuditTrail,
        Capability::GenerateReports,
        Capability::ManageUsers,
    ];

    /// Flag name as used by the UI layer, e.g. `canCreateAudit`.
    pub fn flag_name(&self) -> &'static str {
        match self {
            Capability::CreateAudit => "canCreateAudit",
            Capability::EditAudit => "canEditAudit",
            Capability::ViewAudit => "canViewAudit",
            Capability::DeleteAudit => "canDeleteAudit",
            Capability::Sign => "canSign",
            Capability::Approve => "canApprove",
            Capability::AdvancePhase => "canAdvancePhase",
            Capability::ViewAuditTrail => "canViewAuditTrail",
            Capability::GenerateReports => "canGenerateReports",
            Capability::ManageUsers => "canManageUsers",
        }
    }

    pub fn from_flag_name(name: &str) -> Option<Capability> {
        Self::ALL.iter().copied().find(|c| c.flag_name() == name)
    }
}

/// Action a user attempts on a specific audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    View,
    Edit,
    Sign,
    Approve,
    Delete,
}

/// Capabilities and scopes granted to one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    pub can_create_audit: bool,
    pub can_edit_audit: bool,
    pub can_view_audit: bool,
    pub can_delete_audit: bool,
    pub can_sign: bool,
    pub can_approve: bool,
    pub can_advance_phase: bool,
    pub can_view_audit_trail: bool,
    pub can_generate_reports: bool,
    pub can_manage_users: bool,
    pub allowed_phases: &'static [AuditPhase],
    pub allowed_audit_types: &'static [AuditType],
}

impl PermissionSet {
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::CreateAudit => self.can_create_audit,
            Capability::EditAudit => self.can_edit_audit,
            Capability::ViewAudit => self.can_view_audit,
            Capability::DeleteAudit => self.can_delete_audit,
            Capability::Sign => self.can_sign,
            Capability::Approve => self.can_approve,
            Capability::AdvancePhase => self.can_advance_phase,
            Capability::ViewAuditTrail => self.can_view_audit_trail,
            Capability::GenerateReports => self.can_generate_reports,
            Capability::ManageUsers => self.can_manage_users,
        }
    }
}

const ALL_AUDIT_TYPES: &[AuditType] = &[
    AuditType::Iosa,
    AuditType::FaaIasa,
    AuditType::Case,
    AuditType::Aoc,
    AuditType::Custom,
];

const OPERATOR_PERMISSIONS: PermissionSet = PermissionSet {
    can_create_audit: false,
    can_edit_audit: true,
    can_view_audit: true,
    can_delete_audit: false,
    can_sign: true,
    can_approve: false,
    can_advance_phase: false,
    can_view_audit_trail: true,
    can_generate_reports: false,
    can_manage_users: false,
    allowed_phases: &[AuditPhase::SelfAssessment, AuditPhase::Action],
    // Operators never see AOC audits
    allowed_audit_types: &[
        AuditType::Iosa,
        AuditType::FaaIasa,
        AuditType::Case,
        AuditType::Custom,
    ],
};

const AUDITOR_PERMISSIONS: PermissionSet = PermissionSet {
    can_create_audit: true,
    can_edit_audit: true,
    can_view_audit: true,
    can_delete_audit: false,
    can_sign: true,
    can_approve: false,
    can_advance_phase: true,
    can_view_audit_trail: true,
    can_generate_reports: true,
    can_manage_users: false,
    allowed_phases: &[AuditPhase::Audit, AuditPhase::Analysis, AuditPhase::Validation],
    allowed_audit_types: ALL_AUDIT_TYPES,
};

const MANAGER_PERMISSIONS: PermissionSet = PermissionSet {
    can_create_audit: false,
    can_edit_audit: true,
    can_view_audit: true,
    can_delete_audit: false,
    can_sign: true,
    can_approve: true,
    can_advance_phase: true,
    can_view_audit_trail: true,
    can_generate_reports: true,
    can_manage_users: false,
    allowed_phases: &[
        AuditPhase::Preparation,
        AuditPhase::Analysis,
        AuditPhase::Action,
        AuditPhase::Validation,
    ],
    allowed_audit_types: ALL_AUDIT_TYPES,
};

const DIRECTOR_PERMISSIONS: PermissionSet = PermissionSet {
    can_create_audit: false,
    can_edit_audit: true,
    can_view_audit: true,
    can_delete_audit: false,
    can_sign: true,
    can_approve: true,
    can_advance_phase: true,
    can_view_audit_trail: true,
    can_generate_reports: true,
    can_manage_users: false,
    allowed_phases: &[
        AuditPhase::Analysis,
        AuditPhase::Action,
        AuditPhase::Validation,
        AuditPhase::Closed,
    ],
    allowed_audit_types: ALL_AUDIT_TYPES,
};

const ADMIN_PERMISSIONS: PermissionSet = PermissionSet {
    can_create_audit: true,
    can_edit_audit: true,
    can_view_audit: true,
    can_delete_audit: true,
    can_sign: true,
    can_approve: true,
    can_advance_phase: true,
    can_view_audit_trail: true,
    can_generate_reports: true,
    can_manage_users: true,
    allowed_phases: &AuditPhase::SEQUENCE,
    allowed_audit_types: ALL_AUDIT_TYPES,
};

/// Returns the permission record of a role.
pub fn permissions(role: Role) -> &'static PermissionSet {
    match role {
        Role::Operator => &OPERATOR_PERMISSIONS,
        Role::Auditor => &AUDITOR_PERMISSIONS,
        Role::Manager => &MANAGER_PERMISSIONS,
        Role::Director => &DIRECTOR_PERMISSIONS,
        Role::Admin => &ADMIN_PERMISSIONS,
    }
}

pub fn has_capability(role: Role, capability: Capability) -> bool {
    permissions(role).allows(capability)
}

/// Looks up a capability flag by its UI name.
///
/// Unknown flag names (including the non-boolean `allowedPhases` and
/// `allowedAuditTypes`) return `false`.
pub fn has_permission(role: Role, flag_name: &str) -> bool {
    Capability::from_flag_name(flag_name)
        .map(|capability| has_capability(role, capability))
        .unwrap_or(false)
}

pub fn is_phase_allowed(role: Role, phase: AuditPhase) -> bool {
    permissions(role).allowed_phases.contains(&phase)
}

pub fn is_audit_type_allowed(role: Role, audit_type: AuditType) -> bool {
    permissions(role).allowed_audit_types.contains(&audit_type)
}

pub fn accessible_phases(role: Role) -> &'static [AuditPhase] {
    permissions(role).allowed_phases
}

pub fn accessible_audit_types(role: Role) -> &'static [AuditType] {
    permissions(role).allowed_audit_types
}

/// Checks whether `role` may perform `action` on an audit sitting in `phase`.
///
/// View, edit, sign and approve combine the matching capability flag with the
/// role's phase scope. Delete ignores the phase and is restricted to
/// [`Role::Admin`] no matter what the table says for other roles.
pub fn can_access_audit(role: Role, phase: AuditPhase, action: AuditAction) -> bool {
    let permissions = permissions(role);

    match action {
        AuditAction::View => permissions.can_view_audit && is_phase_allowed(role, phase),
        AuditAction::Edit => permissions.can_edit_audit && is_phase_allowed(role, phase),
        AuditAction::Sign => permissions.can_sign && is_phase_allowed(role, phase),
        AuditAction::Approve => permissions.can_approve && is_phase_allowed(role, phase),
        AuditAction::Delete => permissions.can_delete_audit && role == Role::Admin,
    }
}
