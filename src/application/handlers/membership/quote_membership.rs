//! QuoteMembershipHandler - Query handler pricing a package for a member.
//!
//! Resolves the GST regime, computes tax lines and checks whether a
//! complementary package should be offered alongside the selection.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::selection::load_selection;
use crate::domain::foundation::{MemberId, PackageId};
use crate::domain::membership::{
    compute_amounts, evaluate_eligibility, Eligibility, FeeBreakdown, MembershipError, Package,
    TaxPolicy, TaxRates, TaxRegime,
};
use crate::ports::{MemberReader, PackageCatalog};

/// Query to price a package for a member.
#[derive(Debug, Clone)]
pub struct QuoteMembershipQuery {
    pub member_id: MemberId,
    pub package_id: PackageId,
}

/// Price breakdown and complementary offer for one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipQuote {
    pub member_id: MemberId,
    pub package: Package,
    pub tax_regime: TaxRegime,
    pub rates: TaxRates,
    pub amounts: FeeBreakdown,
    pub eligibility: Eligibility,
}

/// Result of a successful quote.
pub type QuoteMembershipResult = MembershipQuote;

/// Handler for pricing a membership before submission.
pub struct QuoteMembershipHandler {
    members: Arc<dyn MemberReader>,
    catalog: Arc<dyn PackageCatalog>,
    policy: TaxPolicy,
}

impl QuoteMembershipHandler {
    pub fn new(
        members: Arc<dyn MemberReader>,
        catalog: Arc<dyn PackageCatalog>,
        policy: TaxPolicy,
    ) -> Self {
        Self {
            members,
            catalog,
            policy,
        }
    }

    pub async fn handle(
        &self,
        query: QuoteMembershipQuery,
    ) -> Result<QuoteMembershipResult, MembershipError> {
        let selection = load_selection(
            self.members.as_ref(),
            self.catalog.as_ref(),
            query.member_id,
            query.package_id,
        )
        .await?;

        let tax_regime = self.policy.resolve(&selection.member);
        let rates = tax_regime.rates();
        let amounts = compute_amounts(selection.package.basic_fees, &rates);
        let eligibility =
            evaluate_eligibility(&selection.member, &selection.package, &selection.catalog);

        debug!(
            member_id = %query.member_id,
            package_id = %query.package_id,
            intra_state = tax_regime.is_intra_state(),
            total = %amounts.total_amount,
            prompt_complementary = eligibility.should_prompt,
            "Quoted membership"
        );

        Ok(MembershipQuote {
            member_id: query.member_id,
            package: selection.package,
            tax_regime,
            rates,
            amounts,
            eligibility,
        })
    }
}
