//! GST regime resolution from a member's jurisdiction.
//!
//! Intra-state supplies attract CGST + SGST; inter-state supplies attract
//! IGST. Which one applies depends on where the member is registered.
//!
//! # Resolution order
//!
//! | Signal | Rule |
//! |--------|------|
//! | GST number (≥ 2 chars) | state code == home code → intra, else inter |
//! | State name | contains home name / city keyword → intra, else inter |
//! | Location texts | contains home name / city keyword → intra, else inter |
//! | nothing | inter |
//!
//! The first signal present decides; later ones are never consulted.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::member::Member;
use crate::domain::foundation::TaxRate;

/// The single tax regime that applies to a membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "regime", rename_all = "snake_case")]
pub enum TaxRegime {
    /// Home-jurisdiction supply: central and state GST.
    IntraState { cgst: TaxRate, sgst: TaxRate },

    /// Outside-jurisdiction supply: integrated GST.
    InterState { igst: TaxRate },
}

impl TaxRegime {
    /// Nullable rate triple; exactly one side is populated.
    pub fn rates(&self) -> TaxRates {
        match *self {
            TaxRegime::IntraState { cgst, sgst } => TaxRates {
                cgst_rate: Some(cgst),
                sgst_rate: Some(sgst),
                igst_rate: None,
            },
            TaxRegime::InterState { igst } => TaxRates {
                cgst_rate: None,
                sgst_rate: None,
                igst_rate: Some(igst),
            },
        }
    }

    pub fn is_intra_state(&self) -> bool {
        matches!(self, TaxRegime::IntraState { .. })
    }
}

/// Rate triple as stored on a membership record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxRates {
    pub cgst_rate: Option<TaxRate>,
    pub sgst_rate: Option<TaxRate>,
    pub igst_rate: Option<TaxRate>,
}

/// Jurisdiction and rate constants used to resolve a [`TaxRegime`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxPolicy {
    /// Two-character GST state code of the home jurisdiction.
    pub home_state_code: String,
    pub home_state_name: String,
    /// Lowercase city names that place free-text locations in the home state.
    pub home_city_keywords: Vec<String>,
    pub cgst: TaxRate,
    pub sgst: TaxRate,
    pub igst: TaxRate,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self {
            home_state_code: "27".to_string(),
            home_state_name: "Maharashtra".to_string(),
            home_city_keywords: [
                "mumbai",
                "navi mumbai",
                "thane",
                "pune",
                "nagpur",
                "nashik",
                "aurangabad",
                "solapur",
                "kolhapur",
                "amravati",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            cgst: TaxRate::percent(9),
            sgst: TaxRate::percent(9),
            igst: TaxRate::percent(18),
        }
    }
}

static DEFAULT_POLICY: Lazy<TaxPolicy> = Lazy::new(TaxPolicy::default);

impl TaxPolicy {
    pub fn home_regime(&self) -> TaxRegime {
        TaxRegime::IntraState {
            cgst: self.cgst,
            sgst: self.sgst,
        }
    }

    pub fn outside_regime(&self) -> TaxRegime {
        TaxRegime::InterState { igst: self.igst }
    }

    /// Resolves the regime for `member`. Always terminates with a regime.
    pub fn resolve(&self, member: &Member) -> TaxRegime {
        if let Some(code) = member.gst_number.as_deref().and_then(state_code) {
            return self.regime_for(code == self.home_state_code);
        }

        if let Some(state) = present(&member.state_name) {
            return self.regime_for(self.mentions_home(state));
        }

        let locations: Vec<&str> = [&member.location_text, &member.organization_location_text]
            .into_iter()
            .filter_map(present)
            .collect();
        if !locations.is_empty() {
            return self.regime_for(locations.iter().any(|text| self.mentions_home(text)));
        }

        self.outside_regime()
    }

    fn regime_for(&self, home: bool) -> TaxRegime {
        if home {
            self.home_regime()
        } else {
            self.outside_regime()
        }
    }

    fn mentions_home(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        text.contains(&self.home_state_name.to_lowercase())
            || self
                .home_city_keywords
                .iter()
                .any(|keyword| text.contains(&keyword.to_lowercase()))
    }
}

/// Resolves the regime for `member` under the default home jurisdiction.
pub fn resolve_tax_regime(member: &Member) -> TaxRegime {
    DEFAULT_POLICY.resolve(member)
}

/// Leading two characters of a trimmed GST number, if it is long enough.
fn state_code(gst_number: &str) -> Option<String> {
    let trimmed = gst_number.trim();
    if trimmed.chars().count() < 2 {
        return None;
    }
    Some(trimmed.chars().take(2).collect())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::MemberId;
    use proptest::prelude::*;

    fn member() -> Member {
        Member::new(MemberId::new(1).unwrap())
    }

    fn home() -> TaxRates {
        TaxRates {
            cgst_rate: Some(TaxRate::percent(9)),
            sgst_rate: Some(TaxRate::percent(9)),
            igst_rate: None,
        }
    }

    fn outside() -> TaxRates {
        TaxRates {
            cgst_rate: None,
            sgst_rate: None,
            igst_rate: Some(TaxRate::percent(18)),
        }
    }

    // GST number

    #[test]
    fn home_gst_code_gives_cgst_and_sgst() {
        let m = Member {
            gst_number: Some("27AAPFU0939F1ZV".to_string()),
            ..member()
        };
        assert_eq!(resolve_tax_regime(&m).rates(), home());
    }

    #[test]
    fn other_gst_code_gives_igst_even_with_home_state_name() {
        let m = Member {
            gst_number: Some("29AAPFU0939F1ZV".to_string()),
            state_name: Some("Maharashtra".to_string()),
            location_text: Some("Pune".to_string()),
            ..member()
        };
        assert_eq!(resolve_tax_regime(&m).rates(), outside());
    }

    #[test]
    fn whitespace_gst_number_is_ignored() {
        let m = Member {
            gst_number: Some("   ".to_string()),
            state_name: Some("maharashtra".to_string()),
            ..member()
        };
        assert_eq!(resolve_tax_regime(&m).rates(), home());
    }

    #[test]
    fn single_character_gst_number_is_ignored() {
        let m = Member {
            gst_number: Some(" 2 ".to_string()),
            state_name: Some("Karnataka".to_string()),
            ..member()
        };
        assert_eq!(resolve_tax_regime(&m).rates(), outside());
    }

    #[test]
    fn gst_number_is_trimmed_before_reading_code() {
        let m = Member {
            gst_number: Some("  27ABCDE".to_string()),
            ..member()
        };
        assert!(resolve_tax_regime(&m).is_intra_state());
    }

    // State name

    #[test]
    fn state_name_match_is_case_insensitive() {
        let m = Member {
            state_name: Some("MAHARASHTRA".to_string()),
            ..member()
        };
        assert_eq!(resolve_tax_regime(&m).rates(), home());
    }

    #[test]
    fn state_name_with_city_keyword_is_home() {
        let m = Member {
            state_name: Some("Navi Mumbai region".to_string()),
            ..member()
        };
        assert!(resolve_tax_regime(&m).is_intra_state());
    }

    #[test]
    fn foreign_state_name_short_circuits_location() {
        let m = Member {
            state_name: Some("Gujarat".to_string()),
            location_text: Some("Mumbai".to_string()),
            ..member()
        };
        assert_eq!(resolve_tax_regime(&m).rates(), outside());
    }

    // Location text

    #[test]
    fn location_text_keyword_is_home() {
        let m = Member {
            location_text: Some("Andheri East, Mumbai".to_string()),
            ..member()
        };
        assert_eq!(resolve_tax_regime(&m).rates(), home());
    }

    #[test]
    fn organization_location_keyword_is_home() {
        let m = Member {
            location_text: Some("Remote".to_string()),
            organization_location_text: Some("Hinjewadi, PUNE".to_string()),
            ..member()
        };
        assert!(resolve_tax_regime(&m).is_intra_state());
    }

    #[test]
    fn unmatched_location_is_outside() {
        let m = Member {
            location_text: Some("Bengaluru".to_string()),
            ..member()
        };
        assert_eq!(resolve_tax_regime(&m).rates(), outside());
    }

    #[test]
    fn no_signal_defaults_to_outside() {
        assert_eq!(resolve_tax_regime(&member()).rates(), outside());
    }

    // Policy

    #[test]
    fn custom_policy_uses_its_own_home_code() {
        let policy = TaxPolicy {
            home_state_code: "29".to_string(),
            home_state_name: "Karnataka".to_string(),
            home_city_keywords: vec!["bengaluru".to_string()],
            ..TaxPolicy::default()
        };
        let m = Member {
            gst_number: Some("29XYZ".to_string()),
            ..member()
        };
        assert!(policy.resolve(&m).is_intra_state());

        let m = Member {
            location_text: Some("Bengaluru".to_string()),
            ..member()
        };
        assert!(policy.resolve(&m).is_intra_state());
    }

    #[test]
    fn regime_serializes_with_tag() {
        let json = serde_json::to_value(TaxPolicy::default().outside_regime()).unwrap();
        assert_eq!(json["regime"], "inter_state");
        assert_eq!(json["igst"], "18");
    }

    proptest! {
        #[test]
        fn home_gst_prefix_always_home(suffix in "[A-Z0-9]{0,13}", state in ".{0,20}") {
            let m = Member {
                gst_number: Some(format!("27{}", suffix)),
                state_name: Some(state),
                ..member()
            };
            prop_assert_eq!(resolve_tax_regime(&m).rates(), home());
        }

        #[test]
        fn other_gst_prefix_always_outside(
            code in "[0-9]{2}".prop_filter("not home", |c| c != "27"),
            suffix in "[A-Z0-9]{0,13}",
            state in prop_oneof![Just("Maharashtra".to_string()), Just("Mumbai".to_string()), ".{0,20}"],
        ) {
            let m = Member {
                gst_number: Some(format!("{}{}", code, suffix)),
                state_name: Some(state),
                ..member()
            };
            prop_assert_eq!(resolve_tax_regime(&m).rates(), outside());
        }

        #[test]
        fn maharashtra_in_state_name_is_home(prefix in "[a-z ]{0,10}", upper in any::<bool>()) {
            let name = if upper { "MAHARASHTRA" } else { "maharashtra" };
            let m = Member {
                state_name: Some(format!("{}{}", prefix, name)),
                ..member()
            };
            prop_assert_eq!(resolve_tax_regime(&m).rates(), home());
        }

        #[test]
        fn resolution_is_idempotent(
            gst in proptest::option::of("[0-9A-Z ]{0,15}"),
            state in proptest::option::of("[A-Za-z ]{0,20}"),
            location in proptest::option::of("[A-Za-z ,]{0,30}"),
        ) {
            let m = Member {
                gst_number: gst,
                state_name: state,
                location_text: location,
                ..member()
            };
            prop_assert_eq!(resolve_tax_regime(&m), resolve_tax_regime(&m));
        }
    }
}
