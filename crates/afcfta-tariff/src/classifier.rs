//! HS sector classifier: commodity code → chapter row.

use afcfta_core::{CommodityCode, EngineError, EngineResult, ReferenceDataProvider, SectorInfo};

/// Look up the chapter row for a validated commodity code.
///
/// # Errors
///
/// [`EngineError::UnknownSector`] when the two-digit prefix has no row in
/// the sector table (for example the reserved chapter 77, or 98/99).
pub fn classify<'a>(
    code: &CommodityCode,
    reference: &'a dyn ReferenceDataProvider,
) -> EngineResult<&'a SectorInfo> {
    let sector = code.sector();
    reference
        .sector_info(&sector)
        .ok_or_else(|| EngineError::UnknownSector {
            field: "hs_code",
            sector: sector.to_string(),
        })
}

/// Validate a raw code and classify it in one step.
pub fn classify_code<'a>(
    raw: &str,
    reference: &'a dyn ReferenceDataProvider,
) -> EngineResult<&'a SectorInfo> {
    let code = CommodityCode::new(raw)?;
    classify(&code, reference)
}
