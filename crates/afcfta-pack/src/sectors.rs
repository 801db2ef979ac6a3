//! HS chapter table, Harmonized System nomenclature, 2022 edition.
//!
//! One row per chapter 01–97. Chapter 77 is reserved for future use in the
//! nomenclature and has no row, so codes starting `77` are unknown sectors.

use afcfta_core::{HsSection, SectorCode, SectorInfo};

/// Chapter number and description.
const CHAPTERS: &[(u8, &str)] = &[
    (1, "Live animals"),
    (2, "Meat and edible meat offal"),
    (3, "Fish and crustaceans, molluscs and other aquatic invertebrates"),
    (4, "Dairy produce; birds' eggs; natural honey"),
    (5, "Products of animal origin, not elsewhere specified"),
    (6, "Live trees and other plants; cut flowers"),
    (7, "Edible vegetables and certain roots and tubers"),
    (8, "Edible fruit and nuts; peel of citrus fruit or melons"),
    (9, "Coffee, tea, mate and spices"),
    (10, "Cereals"),
    (11, "Products of the milling industry; malt; starches"),
    (12, "Oil seeds and oleaginous fruits; industrial or medicinal plants"),
    (13, "Lac; gums, resins and other vegetable saps and extracts"),
    (14, "Vegetable plaiting materials"),
    (15, "Animal, vegetable or microbial fats and oils"),
    (16, "Preparations of meat, fish or crustaceans"),
    (17, "Sugars and sugar confectionery"),
    (18, "Cocoa and cocoa preparations"),
    (19, "Preparations of cereals, flour, starch or milk; pastrycooks' products"),
    (20, "Preparations of vegetables, fruit, nuts or other parts of plants"),
    (21, "Miscellaneous edible preparations"),
    (22, "Beverages, spirits and vinegar"),
    (23, "Residues and waste from the food industries; prepared animal fodder"),
    (24, "Tobacco and manufactured tobacco substitutes"),
    (25, "Salt; sulphur; earths and stone; plastering materials, lime and cement"),
    (26, "Ores, slag and ash"),
    (27, "Mineral fuels, mineral oils and products of their distillation"),
    (28, "Inorganic chemicals; compounds of precious metals"),
    (29, "Organic chemicals"),
    (30, "Pharmaceutical products"),
    (31, "Fertilisers"),
    (32, "Tanning or dyeing extracts; dyes, pigments, paints and varnishes"),
    (33, "Essential oils and resinoids; perfumery, cosmetic or toilet preparations"),
    (34, "Soap, washing preparations, lubricating preparations, waxes"),
    (35, "Albuminoidal substances; modified starches; glues; enzymes"),
    (36, "Explosives; pyrotechnic products; matches"),
    (37, "Photographic or cinematographic goods"),
    (38, "Miscellaneous chemical products"),
    (39, "Plastics and articles thereof"),
    (40, "Rubber and articles thereof"),
    (41, "Raw hides and skins (other than furskins) and leather"),
    (42, "Articles of leather; saddlery and harness; travel goods, handbags"),
    (43, "Furskins and artificial fur; manufactures thereof"),
    (44, "Wood and articles of wood; wood charcoal"),
    (45, "Cork and articles of cork"),
    (46, "Manufactures of straw, of esparto or of other plaiting materials"),
    (47, "Pulp of wood or of other fibrous cellulosic material"),
    (48, "Paper and paperboard; articles of paper pulp, paper or paperboard"),
    (49, "Printed books, newspapers, pictures and other printed matter"),
    (50, "Silk"),
    (51, "Wool, fine or coarse animal hair; horsehair yarn and woven fabric"),
    (52, "Cotton"),
    (53, "Other vegetable textile fibres; paper yarn"),
    (54, "Man-made filaments"),
    (55, "Man-made staple fibres"),
    (56, "Wadding, felt and nonwovens; special yarns; twine, cordage, ropes"),
    (57, "Carpets and other textile floor coverings"),
    (58, "Special woven fabrics; tufted textile fabrics; lace; tapestries"),
    (59, "Impregnated, coated, covered or laminated textile fabrics"),
    (60, "Knitted or crocheted fabrics"),
    (61, "Articles of apparel, knitted or crocheted"),
    (62, "Articles of apparel, not knitted or crocheted"),
    (63, "Other made up textile articles; worn clothing; rags"),
    (64, "Footwear, gaiters and the like"),
    (65, "Headgear and parts thereof"),
    (66, "Umbrellas, sun umbrellas, walking-sticks, whips"),
    (67, "Prepared feathers and down; artificial flowers; articles of human hair"),
    (68, "Articles of stone, plaster, cement, asbestos, mica"),
    (69, "Ceramic products"),
    (70, "Glass and glassware"),
    (71, "Natural or cultured pearls, precious stones, precious metals; jewellery"),
    (72, "Iron and steel"),
    (73, "Articles of iron or steel"),
    (74, "Copper and articles thereof"),
    (75, "Nickel and articles thereof"),
    (76, "Aluminium and articles thereof"),
    (78, "Lead and articles thereof"),
    (79, "Zinc and articles thereof"),
    (80, "Tin and articles thereof"),
    (81, "Other base metals; cermets; articles thereof"),
    (82, "Tools, implements, cutlery, spoons and forks, of base metal"),
    (83, "Miscellaneous articles of base metal"),
    (84, "Nuclear reactors, boilers, machinery and mechanical appliances"),
    (85, "Electrical machinery and equipment; sound and television apparatus"),
    (86, "Railway or tramway locomotives, rolling stock and track fixtures"),
    (87, "Vehicles other than railway or tramway rolling stock"),
    (88, "Aircraft, spacecraft, and parts thereof"),
    (89, "Ships, boats and floating structures"),
    (90, "Optical, photographic, measuring, medical or surgical instruments"),
    (91, "Clocks and watches and parts thereof"),
    (92, "Musical instruments; parts and accessories"),
    (93, "Arms and ammunition; parts and accessories thereof"),
    (94, "Furniture; bedding; lamps and lighting fittings; prefabricated buildings"),
    (95, "Toys, games and sports requisites"),
    (96, "Miscellaneous manufactured articles"),
    (97, "Works of art, collectors' pieces and antiques"),
];

/// Build the HS chapter table.
pub fn hs_sector_table() -> Vec<SectorInfo> {
    CHAPTERS
        .iter()
        .filter_map(|(chapter, name)| {
            let code = SectorCode::from_chapter(*chapter).ok()?;
            let section = HsSection::for_chapter(*chapter)?;
            Some(SectorInfo {
                code,
                name: (*name).to_string(),
                section,
            })
        })
        .collect()
}
