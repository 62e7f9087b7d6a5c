//! ReplaceMembershipHandler - Command handler for editing a membership.
//!
//! Membership records are never patched; the edited form is assembled
//! into a complete record that replaces the stored one under the same id.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::selection::load_selection;
use crate::domain::foundation::{ErrorCode, MemberId, MembershipId, PackageId};
use crate::domain::membership::{Membership, MembershipError, PaymentForm, TaxPolicy};
use crate::ports::{MemberReader, MembershipSubmitter, PackageCatalog};

/// Command to replace an existing membership with an edited one.
#[derive(Debug, Clone)]
pub struct ReplaceMembershipCommand {
    pub membership_id: MembershipId,
    pub member_id: MemberId,
    pub package_id: PackageId,
    pub payment: PaymentForm,
    pub start_date: NaiveDate,
}

/// Result of a successful replacement.
pub type ReplaceMembershipResult = Membership;

/// Handler for replacing membership records.
pub struct ReplaceMembershipHandler {
    members: Arc<dyn MemberReader>,
    catalog: Arc<dyn PackageCatalog>,
    submitter: Arc<dyn MembershipSubmitter>,
    policy: TaxPolicy,
}

impl ReplaceMembershipHandler {
    pub fn new(
        members: Arc<dyn MemberReader>,
        catalog: Arc<dyn PackageCatalog>,
        submitter: Arc<dyn MembershipSubmitter>,
        policy: TaxPolicy,
    ) -> Self {
        Self {
            members,
            catalog,
            submitter,
            policy,
        }
    }

    pub async fn handle(
        &self,
        cmd: ReplaceMembershipCommand,
    ) -> Result<ReplaceMembershipResult, MembershipError> {
        let selection = load_selection(
            self.members.as_ref(),
            self.catalog.as_ref(),
            cmd.member_id,
            cmd.package_id,
        )
        .await?;

        let membership = Membership::create(
            cmd.membership_id,
            &selection.member,
            &selection.package,
            &cmd.payment,
            cmd.start_date,
            &self.policy,
        )?;

        self.submitter
            .replace(&cmd.membership_id, &membership)
            .await
            .map_err(|e| match e.code {
                ErrorCode::MembershipNotFound => {
                    MembershipError::membership_not_found(cmd.membership_id)
                }
                _ => MembershipError::from(e),
            })?;

        info!(
            membership_id = %membership.id,
            member_id = %membership.member_id,
            total = %membership.total_amount(),
            "Membership replaced"
        );

        Ok(membership)
    }
}
