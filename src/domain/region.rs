use crate::error::TicketingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four levels of the Indonesian administrative hierarchy used by the
/// reservation forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionLevel {
    Province,
    Regency,
    District,
    Village,
}

impl RegionLevel {
    pub fn child(self) -> Option<RegionLevel> {
        match self {
            RegionLevel::Province => Some(RegionLevel::Regency),
            RegionLevel::Regency => Some(RegionLevel::District),
            RegionLevel::District => Some(RegionLevel::Village),
            RegionLevel::Village => None,
        }
    }
}

impl fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegionLevel::Province => "province",
            RegionLevel::Regency => "regency",
            RegionLevel::District => "district",
            RegionLevel::Village => "village",
        };
        f.write_str(name)
    }
}

/// A structured administrative-region code.
///
/// Replaces the dotted-string codes (`"11.01.03.2001"`) the forms used to split at
/// every call site: the segments are typed fields, a child segment can only exist
/// under its parent, and the dotted form appears only at the parse/display boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionCode {
    province: u16,
    regency: Option<u16>,
    district: Option<u16>,
    village: Option<u32>,
}

impl RegionCode {
    pub fn province(province: u16) -> Self {
        Self {
            province,
            regency: None,
            district: None,
            village: None,
        }
    }

    /// Appends the next-level segment to this code. Segments too large for
    /// their level are rejected rather than wrapped.
    pub fn child(&self, segment: u32) -> Result<Self, TicketingError> {
        let narrow = |segment: u32| {
            u16::try_from(segment).map_err(|_| {
                TicketingError::ValidationError(format!(
                    "Region segment {} out of range",
                    segment
                ))
            })
        };
        let mut code = *self;
        match self.level() {
            RegionLevel::Province => code.regency = Some(narrow(segment)?),
            RegionLevel::Regency => code.district = Some(narrow(segment)?),
            RegionLevel::District => code.village = Some(segment),
            RegionLevel::Village => {
                return Err(TicketingError::ValidationError(
                    "Village codes have no children".to_string(),
                ));
            }
        }
        Ok(code)
    }

    pub fn level(&self) -> RegionLevel {
        if self.village.is_some() {
            RegionLevel::Village
        } else if self.district.is_some() {
            RegionLevel::District
        } else if self.regency.is_some() {
            RegionLevel::Regency
        } else {
            RegionLevel::Province
        }
    }

    pub fn parent(&self) -> Option<Self> {
        let mut code = *self;
        match self.level() {
            RegionLevel::Village => code.village = None,
            RegionLevel::District => code.district = None,
            RegionLevel::Regency => code.regency = None,
            RegionLevel::Province => return None,
        }
        Some(code)
    }

    pub fn is_child_of(&self, parent: &Self) -> bool {
        self.parent().as_ref() == Some(parent)
    }
}

impl FromStr for RegionCode {
    type Err = TicketingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid =
            || TicketingError::ValidationError(format!("Invalid region code: {:?}", s));

        let mut segments = s.split('.');
        let province = segments
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(invalid)?
            .parse::<u16>()
            .map_err(|_| invalid())?;

        let mut code = Self::province(province);
        for segment in segments {
            let segment = segment.parse::<u32>().map_err(|_| invalid())?;
            code = code.child(segment).map_err(|_| invalid())?;
        }
        Ok(code)
    }
}

impl TryFrom<String> for RegionCode {
    type Error = TicketingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RegionCode> for String {
    fn from(code: RegionCode) -> Self {
        code.to_string()
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.province)?;
        if let Some(regency) = self.regency {
            write!(f, ".{:02}", regency)?;
        }
        if let Some(district) = self.district {
            write!(f, ".{:02}", district)?;
        }
        if let Some(village) = self.village {
            write!(f, ".{:04}", village)?;
        }
        Ok(())
    }
}

/// One selectable entry in a region dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub code: RegionCode,
    pub name: String,
}
