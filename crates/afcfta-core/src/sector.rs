//! # HS Sections and Sector Metadata
//!
//! The Harmonized System groups its 97 chapters into 21 sections. A
//! [`SectorInfo`] is one row of the chapter table: code, description, and
//! the section it belongs to.

use serde::{Deserialize, Serialize};

use crate::identity::SectorCode;

/// One of the 21 Harmonized System sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HsSection {
    /// I: chapters 01–05.
    LiveAnimals,
    /// II: chapters 06–14.
    VegetableProducts,
    /// III: chapter 15.
    FatsAndOils,
    /// IV: chapters 16–24.
    PreparedFoodstuffs,
    /// V: chapters 25–27.
    MineralProducts,
    /// VI: chapters 28–38.
    Chemicals,
    /// VII: chapters 39–40.
    PlasticsAndRubber,
    /// VIII: chapters 41–43.
    HidesAndLeather,
    /// IX: chapters 44–46.
    Wood,
    /// X: chapters 47–49.
    PulpAndPaper,
    /// XI: chapters 50–63.
    Textiles,
    /// XII: chapters 64–67.
    Footwear,
    /// XIII: chapters 68–70.
    StoneCeramicGlass,
    /// XIV: chapter 71.
    PreciousMetals,
    /// XV: chapters 72–83.
    BaseMetals,
    /// XVI: chapters 84–85.
    Machinery,
    /// XVII: chapters 86–89.
    Transport,
    /// XVIII: chapters 90–92.
    Instruments,
    /// XIX: chapter 93.
    Arms,
    /// XX: chapters 94–96.
    MiscellaneousManufactured,
    /// XXI: chapter 97.
    WorksOfArt,
}

impl HsSection {
    /// Section containing `chapter`, or `None` for chapters outside 1–97.
    ///
    /// Chapter 77 is reserved in the nomenclature but still falls inside
    /// section XV; whether it has a table row is the sector table's concern.
    pub fn for_chapter(chapter: u8) -> Option<Self> {
        let section = match chapter {
            1..=5 => Self::LiveAnimals,
            6..=14 => Self::VegetableProducts,
            15 => Self::FatsAndOils,
            16..=24 => Self::PreparedFoodstuffs,
            25..=27 => Self::MineralProducts,
            28..=38 => Self::Chemicals,
            39..=40 => Self::PlasticsAndRubber,
            41..=43 => Self::HidesAndLeather,
            44..=46 => Self::Wood,
            47..=49 => Self::PulpAndPaper,
            50..=63 => Self::Textiles,
            64..=67 => Self::Footwear,
            68..=70 => Self::StoneCeramicGlass,
            71 => Self::PreciousMetals,
            72..=83 => Self::BaseMetals,
            84..=85 => Self::Machinery,
            86..=89 => Self::Transport,
            90..=92 => Self::Instruments,
            93 => Self::Arms,
            94..=96 => Self::MiscellaneousManufactured,
            97 => Self::WorksOfArt,
            _ => return None,
        };
        Some(section)
    }

    /// Roman numeral used in the nomenclature.
    pub fn numeral(&self) -> &'static str {
        match self {
            Self::LiveAnimals => "I",
            Self::VegetableProducts => "II",
            Self::FatsAndOils => "III",
            Self::PreparedFoodstuffs => "IV",
            Self::MineralProducts => "V",
            Self::Chemicals => "VI",
            Self::PlasticsAndRubber => "VII",
            Self::HidesAndLeather => "VIII",
            Self::Wood => "IX",
            Self::PulpAndPaper => "X",
            Self::Textiles => "XI",
            Self::Footwear => "XII",
            Self::StoneCeramicGlass => "XIII",
            Self::PreciousMetals => "XIV",
            Self::BaseMetals => "XV",
            Self::Machinery => "XVI",
            Self::Transport => "XVII",
            Self::Instruments => "XVIII",
            Self::Arms => "XIX",
            Self::MiscellaneousManufactured => "XX",
            Self::WorksOfArt => "XXI",
        }
    }

    /// Short section title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::LiveAnimals => "Live animals; animal products",
            Self::VegetableProducts => "Vegetable products",
            Self::FatsAndOils => "Animal, vegetable or microbial fats and oils",
            Self::PreparedFoodstuffs => "Prepared foodstuffs; beverages; tobacco",
            Self::MineralProducts => "Mineral products",
            Self::Chemicals => "Products of the chemical or allied industries",
            Self::PlasticsAndRubber => "Plastics and rubber",
            Self::HidesAndLeather => "Raw hides, skins, leather and furskins",
            Self::Wood => "Wood, cork and basketware",
            Self::PulpAndPaper => "Pulp, paper and paperboard",
            Self::Textiles => "Textiles and textile articles",
            Self::Footwear => "Footwear, headgear and umbrellas",
            Self::StoneCeramicGlass => "Stone, ceramic and glass articles",
            Self::PreciousMetals => "Pearls, precious stones and metals",
            Self::BaseMetals => "Base metals and articles thereof",
            Self::Machinery => "Machinery and electrical equipment",
            Self::Transport => "Vehicles, aircraft and vessels",
            Self::Instruments => "Optical, medical and precision instruments",
            Self::Arms => "Arms and ammunition",
            Self::MiscellaneousManufactured => "Miscellaneous manufactured articles",
            Self::WorksOfArt => "Works of art and antiques",
        }
    }
}

impl std::fmt::Display for HsSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Section {}: {}", self.numeral(), self.title())
    }
}

/// A row of the HS chapter table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorInfo {
    /// Two-digit chapter.
    pub code: SectorCode,
    /// Chapter description.
    pub name: String,
    /// Section the chapter belongs to.
    pub section: HsSection,
}
