/*!
# LSST instrument and observational settings

Provisional LSST settings for the 6 photometric bands `u`, `g`, `r`, `i`, `z` and `y`
and for the LSST camera.
[Lsst] merges the camera and the band observation settings into the keyword arguments
of a single band image simulation.

```rust
use lsst_config::Lsst;

let lsst = Lsst::new("g", "GAUSSIAN", 5)?;
let kwargs = lsst.kwargs_single_band();
assert_eq!(kwargs["num_exposures"].as_u32(), Some(100));
# Ok::<(), lsst_config::LsstError>(())
```
*/

use std::{collections::BTreeMap, io::Write};

pub mod band;
pub mod camera;
pub mod error;
pub mod kwargs;
pub mod observation;

pub use band::{Band, CoaddYears, PsfType};
pub use camera::{Camera, LSST_CAMERA};
pub use error::{LsstError, Result};
pub use kwargs::{Kwargs, Value};
pub use observation::BandObservation;

/// Keys of the single band keyword arguments in the order of the CSV table columns
pub const KWARGS_KEYS: [&str; 9] = [
    "exposure_time",
    "sky_brightness",
    "magnitude_zero_point",
    "num_exposures",
    "seeing",
    "psf_type",
    "read_noise",
    "pixel_scale",
    "ccd_gain",
];

/// LSST instrument and observation configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Lsst {
    band: Band,
    coadd_years: CoaddYears,
    obs: BandObservation,
    camera: Camera,
}
impl Lsst {
    /// Creates a new configuration
    ///
    /// * `band`: "u", "g", "r", "i", "z" or "y"
    /// * `psf_type`: "GAUSSIAN"
    /// * `coadd_years`: number of years corresponding to the number of exposures, from 1 to 10
    pub fn new(band: &str, psf_type: &str, coadd_years: i64) -> Result<Self> {
        Ok(Self::from_parts(
            Band::new(band)?,
            PsfType::new(psf_type)?,
            CoaddYears::new(coadd_years)?,
        ))
    }
    /// Creates a new configuration from already validated inputs
    pub fn from_parts(band: Band, psf_type: PsfType, coadd_years: CoaddYears) -> Self {
        let mut obs = band.observation();
        obs.psf_type = psf_type;
        obs.num_exposures = coadd_years.scale(obs.num_exposures);
        log::debug!(
            "LSST {} band over {} year(s): {} exposures",
            band,
            coadd_years,
            obs.num_exposures
        );
        Self {
            band,
            coadd_years,
            obs,
            camera: LSST_CAMERA,
        }
    }
    /// Configurations of all the bands, in the `u`, `g`, `r`, `i`, `z`, `y` order
    pub fn all_bands(psf_type: &str, coadd_years: i64) -> Result<Vec<Self>> {
        use strum::IntoEnumIterator;
        let psf_type = PsfType::new(psf_type)?;
        let coadd_years = CoaddYears::new(coadd_years)?;
        Ok(Band::iter()
            .map(|band| Self::from_parts(band, psf_type, coadd_years))
            .collect())
    }
    pub fn band(&self) -> Band {
        self.band
    }
    pub fn coadd_years(&self) -> CoaddYears {
        self.coadd_years
    }
    pub fn observation(&self) -> &BandObservation {
        &self.obs
    }
    pub fn camera(&self) -> &Camera {
        &self.camera
    }
    /// Merged keyword arguments from the camera and the observation settings
    ///
    /// A new map is returned on each call, the observation settings take
    /// precedence over the camera settings
    pub fn kwargs_single_band(&self) -> Kwargs {
        kwargs::merge(&self.camera.to_kwargs(), &self.obs.to_kwargs())
    }
    /// Same as [Lsst::kwargs_single_band]
    pub fn combined_parameters(&self) -> Kwargs {
        self.kwargs_single_band()
    }
    /// Writes the keyword arguments in the Python pickle format
    pub fn to_pickle<W: Write>(&self, writer: &mut W) -> Result<()> {
        serde_pickle::to_writer(writer, &self.kwargs_single_band(), Default::default())?;
        Ok(())
    }
}
impl Default for Lsst {
    fn default() -> Self {
        Self::from_parts(Band::default(), PsfType::default(), CoaddYears::default())
    }
}

/// Writes the keyword arguments of each configuration in the Python pickle format
///
/// The pickled dictionary is keyed by band
pub fn write_pickle<W: Write>(configs: &[Lsst], writer: &mut W) -> Result<()> {
    let bands: BTreeMap<String, Kwargs> = configs
        .iter()
        .map(|config| (config.band().to_string(), config.kwargs_single_band()))
        .collect();
    serde_pickle::to_writer(writer, &bands, Default::default())?;
    Ok(())
}

/// Writes the keyword arguments of each configuration as a CSV table
///
/// The first column is the band followed by the [KWARGS_KEYS] columns
pub fn write_csv<W: Write>(configs: &[Lsst], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(std::iter::once("band").chain(KWARGS_KEYS))?;
    for config in configs {
        let kwargs = config.kwargs_single_band();
        let mut record = vec![config.band().to_string()];
        record.extend(KWARGS_KEYS.iter().map(|key| {
            kwargs
                .get(*key)
                .map(|value| value.to_string())
                .unwrap_or_default()
        }));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}
