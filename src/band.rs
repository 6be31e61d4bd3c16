use std::fmt;
use strum_macros::EnumIter;

use crate::{
    error::{LsstError, Result},
    observation::{self, BandObservation},
};

/// LSST photometric band
#[derive(EnumIter, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Band {
    U,
    G,
    R,
    I,
    Z,
    Y,
}
impl Band {
    /// Get a new `Band` chosen from "u", "g", "r", "i", "z" or "y"
    ///
    /// Purely alphabetic inputs are matched case-insensitively.
    pub fn new(band: &str) -> Result<Self> {
        use Band::*;
        let key = if !band.is_empty() && band.chars().all(char::is_alphabetic) {
            band.to_lowercase()
        } else {
            band.to_string()
        };
        match key.as_str() {
            "u" => Ok(U),
            "g" => Ok(G),
            "r" => Ok(R),
            "i" => Ok(I),
            "z" => Ok(Z),
            "y" => Ok(Y),
            _ => Err(LsstError::InvalidBand(band.into())),
        }
    }
    /// Observation template of the band for a 10 year survey
    pub fn observation(&self) -> BandObservation {
        use Band::*;
        match self {
            U => observation::U_BAND,
            G => observation::G_BAND,
            R => observation::R_BAND,
            I => observation::I_BAND,
            Z => observation::Z_BAND,
            Y => observation::Y_BAND,
        }
    }
}
impl Default for Band {
    fn default() -> Self {
        Band::G
    }
}
impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Band::*;
        match self {
            U => write!(f, "u"),
            G => write!(f, "g"),
            R => write!(f, "r"),
            I => write!(f, "i"),
            Z => write!(f, "z"),
            Y => write!(f, "y"),
        }
    }
}
impl TryFrom<&str> for Band {
    type Error = LsstError;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        Band::new(value)
    }
}

/// Point spread function model
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PsfType {
    #[default]
    Gaussian,
}
impl PsfType {
    /// Get a new `PsfType`, only "GAUSSIAN" is supported (case-sensitive)
    pub fn new(psf_type: &str) -> Result<Self> {
        match psf_type {
            "GAUSSIAN" => Ok(PsfType::Gaussian),
            _ => Err(LsstError::UnsupportedPsf(psf_type.into())),
        }
    }
}
impl fmt::Display for PsfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PsfType::Gaussian => write!(f, "GAUSSIAN"),
        }
    }
}

/// Number of survey years whose exposures are co-added, from 1 to 10
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct CoaddYears(u32);
impl CoaddYears {
    /// Survey duration the band templates are given for
    pub const FULL_SURVEY: CoaddYears = CoaddYears(10);

    pub fn new(coadd_years: i64) -> Result<Self> {
        match coadd_years {
            1..=10 => Ok(Self(coadd_years as u32)),
            _ => Err(LsstError::InvalidCoaddYears(coadd_years)),
        }
    }
    pub fn years(&self) -> u32 {
        self.0
    }
    /// Scales a 10 year exposure count down to the number of coadd years
    ///
    /// The result is truncated: `baseline * years / 10`
    pub fn scale(&self, baseline: u32) -> u32 {
        if *self == Self::FULL_SURVEY {
            baseline
        } else {
            (baseline as u64 * self.0 as u64 / Self::FULL_SURVEY.0 as u64) as u32
        }
    }
}
impl Default for CoaddYears {
    fn default() -> Self {
        Self::FULL_SURVEY
    }
}
impl fmt::Display for CoaddYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
