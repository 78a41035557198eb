use crate::domain::ports::RegionDirectoryBox;
use crate::domain::region::{Region, RegionCode, RegionLevel};
use crate::error::{Result, TicketingError};

/// Dependent-state resetter for the province → regency → district → village
/// dropdowns on the reservation forms.
///
/// Selecting a region at level N clears every selection and option list below N
/// *before* the child fetch is awaited, so a slow or failing lookup can never
/// leave stale children under a new parent.
pub struct RegionCascade {
    directory: RegionDirectoryBox,
    provinces: Vec<Region>,
    regencies: Vec<Region>,
    districts: Vec<Region>,
    villages: Vec<Region>,
    province: Option<RegionCode>,
    regency: Option<RegionCode>,
    district: Option<RegionCode>,
    village: Option<RegionCode>,
}

impl RegionCascade {
    /// Loads the province list and starts with nothing selected.
    pub async fn load(directory: RegionDirectoryBox) -> Result<Self> {
        let provinces = directory.children(None).await?;
        Ok(Self {
            directory,
            provinces,
            regencies: Vec::new(),
            districts: Vec::new(),
            villages: Vec::new(),
            province: None,
            regency: None,
            district: None,
            village: None,
        })
    }

    pub async fn select_province(&mut self, code: RegionCode) -> Result<()> {
        Self::ensure_level(code, RegionLevel::Province)?;
        self.province = Some(code);
        // Children go first, fetch second: the invariant is "no stale children
        // under a new parent", even while the lookup is in flight.
        self.clear_below(RegionLevel::Province);
        self.regencies = self.directory.children(Some(code)).await?;
        Ok(())
    }

    pub async fn select_regency(&mut self, code: RegionCode) -> Result<()> {
        Self::ensure_level(code, RegionLevel::Regency)?;
        self.ensure_parent(code, self.province)?;
        self.regency = Some(code);
        self.clear_below(RegionLevel::Regency);
        self.districts = self.directory.children(Some(code)).await?;
        Ok(())
    }

    pub async fn select_district(&mut self, code: RegionCode) -> Result<()> {
        Self::ensure_level(code, RegionLevel::District)?;
        self.ensure_parent(code, self.regency)?;
        self.district = Some(code);
        self.clear_below(RegionLevel::District);
        self.villages = self.directory.children(Some(code)).await?;
        Ok(())
    }

    pub fn select_village(&mut self, code: RegionCode) -> Result<()> {
        Self::ensure_level(code, RegionLevel::Village)?;
        self.ensure_parent(code, self.district)?;
        self.village = Some(code);
        Ok(())
    }

    pub fn provinces(&self) -> &[Region] {
        &self.provinces
    }

    pub fn regencies(&self) -> &[Region] {
        &self.regencies
    }

    pub fn districts(&self) -> &[Region] {
        &self.districts
    }

    pub fn villages(&self) -> &[Region] {
        &self.villages
    }

    pub fn selected_province(&self) -> Option<RegionCode> {
        self.province
    }

    pub fn selected_regency(&self) -> Option<RegionCode> {
        self.regency
    }

    pub fn selected_district(&self) -> Option<RegionCode> {
        self.district
    }

    pub fn selected_village(&self) -> Option<RegionCode> {
        self.village
    }

    fn clear_below(&mut self, level: RegionLevel) {
        if level < RegionLevel::Regency {
            self.regency = None;
            self.regencies.clear();
        }
        if level < RegionLevel::District {
            self.district = None;
            self.districts.clear();
        }
        if level < RegionLevel::Village {
            self.village = None;
            self.villages.clear();
        }
    }

    fn ensure_level(code: RegionCode, expected: RegionLevel) -> Result<()> {
        if code.level() == expected {
            Ok(())
        } else {
            Err(TicketingError::ValidationError(format!(
                "Expected a {} code, got {} ({})",
                expected,
                code.level(),
                code
            )))
        }
    }

    fn ensure_parent(&self, code: RegionCode, selected_parent: Option<RegionCode>) -> Result<()> {
        match selected_parent {
            Some(parent) if code.is_child_of(&parent) => Ok(()),
            Some(parent) => Err(TicketingError::ValidationError(format!(
                "Region {} does not belong to the selected {}",
                code, parent
            ))),
            None => Err(TicketingError::ValidationError(format!(
                "No parent selected for region {}",
                code
            ))),
        }
    }
}
