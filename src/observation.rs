use crate::{
    band::PsfType,
    kwargs::{Kwargs, Value},
};

/// Observation conditions of a photometric band
///
/// Provisional LSST settings, the number of exposures is given for a 10 year survey
/// (baseline number of visits times 2 for the 2x15s exposures per visit)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandObservation {
    /// exposure time per image [s]
    pub exposure_time: f64,
    /// sky brightness [mag/arcsec^2]
    pub sky_brightness: f64,
    /// magnitude at which 1 count (e-) per second per square arcsecond is registered
    pub magnitude_zero_point: f64,
    /// number of exposures that are combined
    pub num_exposures: u32,
    /// PSF full-width-at-half-maximum [arcsec]
    pub seeing: f64,
    pub psf_type: PsfType,
}

pub const U_BAND: BandObservation = BandObservation {
    exposure_time: 15.,
    sky_brightness: 22.99,
    magnitude_zero_point: 26.5,
    num_exposures: 140,
    seeing: 0.81,
    psf_type: PsfType::Gaussian,
};
pub const G_BAND: BandObservation = BandObservation {
    exposure_time: 15.,
    sky_brightness: 22.26,
    magnitude_zero_point: 28.30,
    num_exposures: 200,
    seeing: 0.77,
    psf_type: PsfType::Gaussian,
};
pub const R_BAND: BandObservation = BandObservation {
    exposure_time: 15.,
    sky_brightness: 21.2,
    magnitude_zero_point: 28.13,
    num_exposures: 460,
    seeing: 0.73,
    psf_type: PsfType::Gaussian,
};
pub const I_BAND: BandObservation = BandObservation {
    exposure_time: 15.,
    sky_brightness: 20.48,
    magnitude_zero_point: 27.79,
    num_exposures: 460,
    seeing: 0.71,
    psf_type: PsfType::Gaussian,
};
pub const Z_BAND: BandObservation = BandObservation {
    exposure_time: 15.,
    sky_brightness: 19.6,
    magnitude_zero_point: 27.40,
    num_exposures: 400,
    seeing: 0.69,
    psf_type: PsfType::Gaussian,
};
pub const Y_BAND: BandObservation = BandObservation {
    exposure_time: 15.,
    sky_brightness: 18.61,
    magnitude_zero_point: 26.58,
    num_exposures: 400,
    seeing: 0.68,
    psf_type: PsfType::Gaussian,
};

impl BandObservation {
    pub fn to_kwargs(&self) -> Kwargs {
        Kwargs::from([
            ("exposure_time".to_string(), Value::from(self.exposure_time)),
            ("sky_brightness".to_string(), self.sky_brightness.into()),
            (
                "magnitude_zero_point".to_string(),
                self.magnitude_zero_point.into(),
            ),
            ("num_exposures".to_string(), self.num_exposures.into()),
            ("seeing".to_string(), self.seeing.into()),
            ("psf_type".to_string(), self.psf_type.to_string().into()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates() {
        let baselines: Vec<_> = [U_BAND, G_BAND, R_BAND, I_BAND, Z_BAND, Y_BAND]
            .iter()
            .map(|obs| obs.num_exposures)
            .collect();
        assert_eq!(baselines, vec![140, 200, 460, 460, 400, 400]);
        assert!([U_BAND, G_BAND, R_BAND, I_BAND, Z_BAND, Y_BAND]
            .iter()
            .all(|obs| obs.exposure_time == 15. && obs.psf_type == PsfType::Gaussian));
    }

    #[test]
    fn observation_kwargs() {
        let kwargs = Z_BAND.to_kwargs();
        assert_eq!(kwargs.len(), 6);
        assert_eq!(kwargs["sky_brightness"].as_f64(), Some(19.6));
        assert_eq!(kwargs["num_exposures"].as_u32(), Some(400));
        assert_eq!(kwargs["psf_type"].as_str(), Some("GAUSSIAN"));
    }
}
