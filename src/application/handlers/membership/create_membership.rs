//! CreateMembershipHandler - Command handler assembling and submitting a membership.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::selection::load_selection;
use crate::domain::foundation::{MemberId, MembershipId, PackageId};
use crate::domain::membership::{
    evaluate_eligibility, Eligibility, Membership, MembershipError, PaymentForm, TaxPolicy,
};
use crate::ports::{MemberReader, MembershipSubmitter, PackageCatalog};

/// Command to create a membership from the membership form.
#[derive(Debug, Clone)]
pub struct CreateMembershipCommand {
    pub member_id: MemberId,
    pub package_id: PackageId,
    pub payment: PaymentForm,
    pub start_date: NaiveDate,
}

/// Result of successful membership creation.
#[derive(Debug, Clone)]
pub struct CreateMembershipResult {
    pub membership: Membership,
    /// Complementary offer to show once the membership is saved.
    pub eligibility: Eligibility,
}

/// Handler for creating memberships.
pub struct CreateMembershipHandler {
    members: Arc<dyn MemberReader>,
    catalog: Arc<dyn PackageCatalog>,
    submitter: Arc<dyn MembershipSubmitter>,
    policy: TaxPolicy,
}

impl CreateMembershipHandler {
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
        cmd: CreateMembershipCommand,
    ) -> Result<CreateMembershipResult, MembershipError> {
        // 1. Load member and selected package
        let selection = load_selection(
            self.members.as_ref(),
            self.catalog.as_ref(),
            cmd.member_id,
            cmd.package_id,
        )
        .await?;

        // 2. Assemble the record (validates payment references)
        let membership = Membership::create(
            MembershipId::new(),
            &selection.member,
            &selection.package,
            &cmd.payment,
            cmd.start_date,
            &self.policy,
        )?;

        // 3. Submit
        self.submitter.submit(&membership).await?;

        info!(
            membership_id = %membership.id,
            member_id = %membership.member_id,
            package_id = %membership.package_id,
            payment_mode = %membership.payment.mode(),
            total = %membership.total_amount(),
            "Membership submitted"
        );

        // 4. Complementary offer for the follow-up prompt
        let eligibility =
            evaluate_eligibility(&selection.member, &selection.package, &selection.catalog);

        Ok(CreateMembershipResult {
            membership,
            eligibility,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryMemberDirectory, InMemoryMembershipLedger, InMemoryPackageCatalog};
    use crate::domain::foundation::{DomainError, ErrorCode, Money};
    use crate::domain::membership::{Member, Package, PackageType, PaymentMode};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    struct FailingSubmitter;

    #[async_trait]
    impl MembershipSubmitter for FailingSubmitter {
        async fn submit(&self, _membership: &Membership) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::RemoteApiError, "Simulated submit failure"))
        }

        async fn replace(&self, _id: &MembershipId, _membership: &Membership) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::RemoteApiError, "Simulated submit failure"))
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn catalog() -> InMemoryPackageCatalog {
        InMemoryPackageCatalog::new(vec![
            Package {
                id: PackageId::new(1).unwrap(),
                name: "Venue Annual".to_string(),
                basic_fees: Money::new(dec!(2000)),
                period_months: 12,
                package_type: PackageType::Venue,
                chapter_id: None,
            },
            Package {
                id: PackageId::new(2).unwrap(),
                name: "HO Annual".to_string(),
                basic_fees: Money::new(dec!(3000)),
                period_months: 12,
                package_type: PackageType::HeadOffice,
                chapter_id: None,
            },
        ])
    }

    fn member() -> Member {
        Member {
            state_name: Some("Maharashtra".to_string()),
            ..Member::new(MemberId::new(3).unwrap())
        }
    }

    fn command(payment: PaymentForm) -> CreateMembershipCommand {
        CreateMembershipCommand {
            member_id: MemberId::new(3).unwrap(),
            package_id: PackageId::new(1).unwrap(),
            payment,
            start_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
        }
    }

    fn handler_with(submitter: Arc<dyn MembershipSubmitter>) -> CreateMembershipHandler {
        CreateMembershipHandler::new(
            Arc::new(InMemoryMemberDirectory::with_members([member()])),
            Arc::new(catalog()),
            submitter,
            TaxPolicy::default(),
        )
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn creates_and_submits_membership() {
        let ledger = Arc::new(InMemoryMembershipLedger::new());
        let handler = handler_with(ledger.clone());

        let result = handler
            .handle(command(PaymentForm::new(PaymentMode::Cash)))
            .await
            .unwrap();

        assert_eq!(result.membership.amounts.total_amount, Money::new(dec!(2360)));
        assert_eq!(
            result.membership.end_date,
            NaiveDate::from_ymd_opt(2027, 6, 30).unwrap()
        );
        assert!(ledger.get(&result.membership.id).await.is_some());
    }

    #[tokio::test]
    async fn result_carries_complementary_offer() {
        let handler = handler_with(Arc::new(InMemoryMembershipLedger::new()));
        let result = handler
            .handle(command(PaymentForm::new(PaymentMode::Card)))
            .await
            .unwrap();

        assert!(result.eligibility.should_prompt);
        assert_eq!(result.eligibility.complementary_type, Some(PackageType::HeadOffice));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn invalid_payment_is_not_submitted() {
        let ledger = Arc::new(InMemoryMembershipLedger::new());
        let handler = handler_with(ledger.clone());

        let err = handler
            .handle(command(PaymentForm::new(PaymentMode::Upi)))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            MembershipError::ValidationFailed { ref field, .. } if field == "utr_reference"
        ));
        assert!(ledger.is_empty().await);
    }

    #[tokio::test]
    async fn submit_failure_is_infrastructure() {
        let handler = handler_with(Arc::new(FailingSubmitter));
        let err = handler
            .handle(command(PaymentForm::new(PaymentMode::Cash)))
            .await
            .unwrap_err();
        assert!(matches!(err, MembershipError::Infrastructure(_)));
    }
}
