//! Per-country import levy schedules.
//!
//! Each schedule lists the statutory charges a customs declaration attracts
//! on top of the customs duty, with the instrument that imposes them. A
//! missing component means the country does not levy it; the cascade
//! calculator supplies the documented defaults.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use afcfta_core::LevyRate;

/// Import levy schedule for one country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryLevies {
    /// Value-added tax on imports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<LevyRate>,
    /// Customs statistical or processing fee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistical_fee: Option<LevyRate>,
    /// Community solidarity levy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_levy: Option<LevyRate>,
    /// Regional-union levy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional_levy: Option<LevyRate>,
}

impl CountryLevies {
    /// Overlay `other` on top of `self`: components present in `other` win.
    pub fn merged_with(&self, other: &CountryLevies) -> CountryLevies {
        CountryLevies {
            vat: other.vat.clone().or_else(|| self.vat.clone()),
            statistical_fee: other
                .statistical_fee
                .clone()
                .or_else(|| self.statistical_fee.clone()),
            community_levy: other
                .community_levy
                .clone()
                .or_else(|| self.community_levy.clone()),
            regional_levy: other
                .regional_levy
                .clone()
                .or_else(|| self.regional_levy.clone()),
        }
    }

    /// All populated components, labelled.
    pub fn components(&self) -> Vec<(&'static str, &LevyRate)> {
        [
            ("vat", self.vat.as_ref()),
            ("statistical_fee", self.statistical_fee.as_ref()),
            ("community_levy", self.community_levy.as_ref()),
            ("regional_levy", self.regional_levy.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, rate)| rate.map(|r| (name, r)))
        .collect()
    }
}

const ECOWAS_LEVY: &str = "ECOWAS Protocol A/P1/7/96 relating to the Community Levy";
const WAEMU_RS: &str = "UEMOA Règlement n°02/97/CM, redevance statistique";
const WAEMU_PCS: &str = "UEMOA Acte additionnel n°04/96, prélèvement communautaire de solidarité";
const AU_LEVY: &str = "AU Assembly Decision 605 (XXVII), 0.2% import levy";

/// Built-in levy schedules, keyed by ISO 3166-1 alpha-3 code.
pub fn builtin_levies() -> Vec<(&'static str, CountryLevies)> {
    vec![
        (
            "NGA",
            CountryLevies {
                vat: Some(LevyRate::new(dec!(7.5), "Value Added Tax Act, s.4 (Finance Act 2019)")),
                statistical_fee: Some(LevyRate::new(
                    dec!(1),
                    "Comprehensive Import Supervision Scheme levy, Customs and Excise Tariff Act",
                )),
                community_levy: Some(LevyRate::new(dec!(0.5), ECOWAS_LEVY)),
                regional_levy: Some(LevyRate::new(dec!(0.2), AU_LEVY)),
            },
        ),
        (
            "GHA",
            CountryLevies {
                vat: Some(LevyRate::new(dec!(15), "Value Added Tax Act, 2013 (Act 870)")),
                statistical_fee: Some(LevyRate::new(dec!(1), "Customs Act, 2015 (Act 891), processing fee")),
                community_levy: Some(LevyRate::new(dec!(0.5), ECOWAS_LEVY)),
                regional_levy: Some(LevyRate::new(dec!(0.2), AU_LEVY)),
            },
        ),
        (
            "CIV",
            CountryLevies {
                vat: Some(LevyRate::new(dec!(18), "Code Général des Impôts, art. 359")),
                statistical_fee: Some(LevyRate::new(dec!(1), WAEMU_RS)),
                community_levy: Some(LevyRate::new(dec!(1), WAEMU_PCS)),
                regional_levy: Some(LevyRate::new(dec!(0.5), ECOWAS_LEVY)),
            },
        ),
        (
            "SEN",
            CountryLevies {
                vat: Some(LevyRate::new(dec!(18), "Code Général des Impôts, art. 369")),
                statistical_fee: Some(LevyRate::new(dec!(1), WAEMU_RS)),
                community_levy: Some(LevyRate::new(dec!(1), WAEMU_PCS)),
                regional_levy: Some(LevyRate::new(dec!(0.5), ECOWAS_LEVY)),
            },
        ),
        (
            "CMR",
            CountryLevies {
                vat: Some(LevyRate::new(dec!(19.25), "Code Général des Impôts, art. 142")),
                statistical_fee: None,
                community_levy: Some(LevyRate::new(
                    dec!(1),
                    "CEMAC Acte additionnel n°03/00, taxe communautaire d'intégration",
                )),
                regional_levy: Some(LevyRate::new(
                    dec!(0.4),
                    "CEEAC Décision n°03/CCEG/X/02, contribution communautaire d'intégration",
                )),
            },
        ),
        (
            "KEN",
            CountryLevies {
                vat: Some(LevyRate::new(dec!(16), "Value Added Tax Act, 2013, s.5")),
                statistical_fee: Some(LevyRate::new(
                    dec!(2.5),
                    "Miscellaneous Fees and Levies Act, 2016, s.7 (Import Declaration Fee)",
                )),
                community_levy: None,
                regional_levy: Some(LevyRate::new(
                    dec!(2),
                    "Miscellaneous Fees and Levies Act, 2016, s.8 (Railway Development Levy)",
                )),
            },
        ),
        (
            "TZA",
            CountryLevies {
                vat: Some(LevyRate::new(dec!(18), "Value Added Tax Act, 2014, s.5")),
                statistical_fee: Some(LevyRate::new(
                    dec!(0.6),
                    "Customs (Management and Tariff) Act, customs processing fee",
                )),
                community_levy: None,
                regional_levy: Some(LevyRate::new(
                    dec!(1.5),
                    "Finance Act, 2019, Railway Development Levy",
                )),
            },
        ),
        (
            "RWA",
            CountryLevies {
                vat: Some(LevyRate::new(dec!(18), "Law n°37/2012 establishing the value added tax")),
                statistical_fee: Some(LevyRate::new(dec!(1.5), "Infrastructure Development Levy")),
                community_levy: None,
                regional_levy: Some(LevyRate::new(dec!(0.2), AU_LEVY)),
            },
        ),
        (
            "ZAF",
            CountryLevies {
                vat: Some(LevyRate::new(dec!(15), "Value-Added Tax Act 89 of 1991, s.7(1)(b)")),
                ..CountryLevies::default()
            },
        ),
        (
            "EGY",
            CountryLevies {
                vat: Some(LevyRate::new(dec!(14), "Law No. 67 of 2016 on Value Added Tax")),
                ..CountryLevies::default()
            },
        ),
        (
            "MAR",
            CountryLevies {
                vat: Some(LevyRate::new(dec!(20), "Code Général des Impôts, art. 121")),
                statistical_fee: Some(LevyRate::new(dec!(0.25), "Taxe parafiscale à l'importation")),
                ..CountryLevies::default()
            },
        ),
        (
            "ETH",
            CountryLevies {
                vat: Some(LevyRate::new(dec!(15), "Value Added Tax Proclamation No. 1341/2024")),
                ..CountryLevies::default()
            },
        ),
    ]
}
