//! Complementary-package eligibility and catalog filtering.
//!
//! A member may hold a VENUE and a head-office membership independently.
//! When the package being sold covers only one side and the member lacks
//! the other, the matching packages of the other type are offered.

use serde::{Deserialize, Serialize};

use super::member::Member;
use super::package::{Package, PackageType};

/// Outcome of checking whether to offer a complementary package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    pub should_prompt: bool,
    pub candidate_packages: Vec<Package>,
    /// `None` when the member already covers the other side.
    pub complementary_type: Option<PackageType>,
}

impl Eligibility {
    fn none() -> Self {
        Self::default()
    }
}

/// Decides whether selecting `selected` should prompt a complementary offer.
///
/// Candidates are global packages or packages of the member's own chapter.
pub fn evaluate_eligibility(member: &Member, selected: &Package, catalog: &[Package]) -> Eligibility {
    let complementary = selected.package_type.complement();
    if member.coverage().holds(complementary) {
        return Eligibility::none();
    }

    let candidate_packages: Vec<Package> = catalog
        .iter()
        .filter(|p| p.package_type == complementary)
        .filter(|p| p.is_offered_to(member.chapter_id))
        .cloned()
        .collect();

    Eligibility {
        should_prompt: !candidate_packages.is_empty(),
        candidate_packages,
        complementary_type: Some(complementary),
    }
}

/// Packages the member may select in the package dropdown.
///
/// Chapter visibility applies first. Unless the member already holds both
/// types, types the member actively holds are removed.
pub fn filter_catalog_for_member(member: &Member, catalog: &[Package]) -> Vec<Package> {
    let coverage = member.coverage();

    catalog
        .iter()
        .filter(|p| p.is_visible_to(member.chapter_id))
        .filter(|p| coverage.holds_both() || !coverage.holds(p.package_type))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ChapterId, MemberId, Money, PackageId};
    use crate::domain::membership::HeldMembership;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn package(id: i64, kind: PackageType, chapter: Option<i64>) -> Package {
        Package {
            id: PackageId::new(id).unwrap(),
            name: format!("{} package {}", kind, id),
            basic_fees: Money::new(dec!(1000)),
            period_months: 12,
            package_type: kind,
            chapter_id: chapter.map(|c| ChapterId::new(c).unwrap()),
        }
    }

    fn member_holding(chapter: Option<i64>, held: &[(PackageType, bool)]) -> Member {
        let mut member = Member::new(MemberId::new(1).unwrap());
        member.chapter_id = chapter.map(|c| ChapterId::new(c).unwrap());
        member.active_memberships = held
            .iter()
            .enumerate()
            .map(|(i, (kind, active))| HeldMembership {
                active: *active,
                package: package(100 + i as i64, *kind, None),
            })
            .collect();
        member
    }

    fn catalog() -> Vec<Package> {
        vec![
            package(1, PackageType::Venue, None),
            package(2, PackageType::Venue, Some(5)),
            package(3, PackageType::Venue, Some(6)),
            package(4, PackageType::HeadOffice, None),
            package(5, PackageType::HeadOffice, Some(5)),
            package(6, PackageType::HeadOffice, Some(6)),
        ]
    }

    fn ids(packages: &[Package]) -> Vec<i64> {
        packages.iter().map(|p| p.id.value()).collect()
    }

    // evaluate_eligibility

    #[test]
    fn venue_selected_without_ho_prompts_for_ho() {
        let member = member_holding(Some(5), &[]);
        let selected = package(1, PackageType::Venue, None);

        let result = evaluate_eligibility(&member, &selected, &catalog());

        assert!(result.should_prompt);
        assert_eq!(result.complementary_type, Some(PackageType::HeadOffice));
        assert_eq!(ids(&result.candidate_packages), vec![4, 5]);
    }

    #[test]
    fn ho_selected_without_venue_prompts_for_venue() {
        let member = member_holding(Some(6), &[(PackageType::HeadOffice, true)]);
        let selected = package(4, PackageType::HeadOffice, None);

        let result = evaluate_eligibility(&member, &selected, &catalog());

        assert!(result.should_prompt);
        assert_eq!(result.complementary_type, Some(PackageType::Venue));
        assert_eq!(ids(&result.candidate_packages), vec![1, 3]);
    }

    #[test]
    fn ho_selected_with_active_venue_does_not_prompt() {
        let member = member_holding(Some(5), &[(PackageType::Venue, true)]);
        let selected = package(4, PackageType::HeadOffice, None);

        let result = evaluate_eligibility(&member, &selected, &catalog());

        assert!(!result.should_prompt);
        assert!(result.candidate_packages.is_empty());
        assert_eq!(result.complementary_type, None);
    }

    #[test]
    fn both_active_never_prompts() {
        let member = member_holding(
            Some(5),
            &[(PackageType::Venue, true), (PackageType::HeadOffice, true)],
        );
        for selected in catalog() {
            assert!(!evaluate_eligibility(&member, &selected, &catalog()).should_prompt);
        }
    }

    #[test]
    fn inactive_membership_does_not_count() {
        let member = member_holding(Some(5), &[(PackageType::HeadOffice, false)]);
        let selected = package(1, PackageType::Venue, None);

        let result = evaluate_eligibility(&member, &selected, &catalog());
        assert!(result.should_prompt);
        assert_eq!(result.complementary_type, Some(PackageType::HeadOffice));
    }

    #[test]
    fn no_candidates_means_no_prompt_but_type_is_reported() {
        let member = member_holding(Some(5), &[]);
        let selected = package(1, PackageType::Venue, None);
        let venue_only = vec![package(1, PackageType::Venue, None)];

        let result = evaluate_eligibility(&member, &selected, &venue_only);

        assert!(!result.should_prompt);
        assert_eq!(result.complementary_type, Some(PackageType::HeadOffice));
    }

    #[test]
    fn member_without_chapter_is_offered_only_global_candidates() {
        let member = member_holding(None, &[]);
        let selected = package(1, PackageType::Venue, None);

        let result = evaluate_eligibility(&member, &selected, &catalog());
        assert_eq!(ids(&result.candidate_packages), vec![4]);

        let scoped_only = vec![package(3, PackageType::HeadOffice, Some(5))];
        let result = evaluate_eligibility(&member, &selected, &scoped_only);
        assert!(!result.should_prompt);
        assert!(result.candidate_packages.is_empty());
    }

    // filter_catalog_for_member

    #[test]
    fn chapter_member_with_venue_sees_only_ho_in_scope() {
        let member = member_holding(Some(5), &[(PackageType::Venue, true)]);
        let visible = filter_catalog_for_member(&member, &catalog());
        assert_eq!(ids(&visible), vec![4, 5]);
    }

    #[test]
    fn member_with_ho_sees_only_venue_in_scope() {
        let member = member_holding(Some(6), &[(PackageType::HeadOffice, true)]);
        let visible = filter_catalog_for_member(&member, &catalog());
        assert_eq!(ids(&visible), vec![1, 3]);
    }

    #[test]
    fn member_with_both_sees_full_chapter_catalog() {
        let member = member_holding(
            Some(5),
            &[(PackageType::Venue, true), (PackageType::HeadOffice, true)],
        );
        let visible = filter_catalog_for_member(&member, &catalog());
        assert_eq!(ids(&visible), vec![1, 2, 4, 5]);
    }

    #[test]
    fn member_with_nothing_sees_chapter_catalog() {
        let member = member_holding(Some(6), &[]);
        let visible = filter_catalog_for_member(&member, &catalog());
        assert_eq!(ids(&visible), vec![1, 3, 4, 6]);
    }

    #[test]
    fn member_without_chapter_is_not_chapter_filtered() {
        let member = member_holding(None, &[(PackageType::Venue, true)]);
        let visible = filter_catalog_for_member(&member, &catalog());
        assert_eq!(ids(&visible), vec![4, 5, 6]);
    }

    #[test]
    fn empty_catalog_gives_empty_list() {
        let member = member_holding(Some(5), &[]);
        assert!(filter_catalog_for_member(&member, &[]).is_empty());
    }

    fn package_type() -> impl Strategy<Value = PackageType> {
        prop_oneof![Just(PackageType::Venue), Just(PackageType::HeadOffice)]
    }

    proptest! {
        #[test]
        fn eligibility_and_filter_are_idempotent(
            chapter in proptest::option::of(1i64..4),
            held in proptest::collection::vec((package_type(), any::<bool>()), 0..4),
            entries in proptest::collection::vec((package_type(), proptest::option::of(1i64..4)), 0..10),
            pick in 0usize..10,
        ) {
            let member = member_holding(chapter, &held);
            let catalog: Vec<Package> = entries
                .iter()
                .enumerate()
                .map(|(i, (kind, ch))| package(i as i64 + 1, *kind, *ch))
                .collect();

            prop_assert_eq!(
                filter_catalog_for_member(&member, &catalog),
                filter_catalog_for_member(&member, &catalog)
            );

            if let Some(selected) = catalog.get(pick) {
                let first = evaluate_eligibility(&member, selected, &catalog);
                prop_assert_eq!(&first, &evaluate_eligibility(&member, selected, &catalog));
                prop_assert_eq!(first.should_prompt, !first.candidate_packages.is_empty());
                for candidate in &first.candidate_packages {
                    prop_assert_ne!(candidate.package_type, selected.package_type);
                    prop_assert!(
                        candidate.chapter_id.is_none() || candidate.chapter_id == member.chapter_id
                    );
                }
            }
        }
    }
}
