use crate::kwargs::{Kwargs, Value};

/// Camera characteristics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// std of the read-out noise [e-]
    pub read_noise: u32,
    /// pixel scale [arcsec]
    pub pixel_scale: f64,
    /// gain [e-/ADU]
    pub ccd_gain: f64,
}
/// LSST camera, the read noise will be <10e-
pub const LSST_CAMERA: Camera = Camera {
    read_noise: 10,
    pixel_scale: 0.2,
    ccd_gain: 2.3,
};
impl Default for Camera {
    fn default() -> Self {
        LSST_CAMERA
    }
}
impl Camera {
    pub fn to_kwargs(&self) -> Kwargs {
        Kwargs::from([
            ("read_noise".to_string(), Value::from(self.read_noise)),
            ("pixel_scale".to_string(), self.pixel_scale.into()),
            ("ccd_gain".to_string(), self.ccd_gain.into()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_kwargs() {
        let kwargs = Camera::default().to_kwargs();
        assert_eq!(kwargs.len(), 3);
        assert_eq!(kwargs["read_noise"], Value::Integer(10));
        assert_eq!(kwargs["read_noise"].as_f64(), Some(10.));
        assert_eq!(kwargs["pixel_scale"].as_f64(), Some(0.2));
        assert_eq!(kwargs["ccd_gain"].as_f64(), Some(2.3));
    }
}
