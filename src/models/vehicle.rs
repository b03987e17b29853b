//! Vehicle model
//!
//! Describes the vehicle being appraised. Only `year`, `msrp` and `mileage`
//! take part in the valuation; the rest are identifying labels.

use serde::{Deserialize, Serialize};

use crate::error::{AppraisalError, AppraisalResult};

/// Earliest model year accepted from user input
pub const MIN_MODEL_YEAR: i32 = 1886;

/// Latest model year accepted from user input
pub const MAX_MODEL_YEAR: i32 = 2100;

/// A vehicle to appraise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Manufacturer (e.g., "Lexus")
    pub make: String,

    /// Model name (e.g., "RZ 450e")
    pub model: String,

    /// Model year
    pub year: i32,

    /// Trim level (e.g., "Luxury")
    #[serde(default)]
    pub trim: String,

    /// Original manufacturer suggested retail price
    pub msrp: f64,

    /// Current odometer reading
    pub mileage: f64,
}

impl VehicleRecord {
    /// Create a new vehicle record
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        trim: impl Into<String>,
        msrp: f64,
        mileage: f64,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            trim: trim.into(),
            msrp,
            mileage,
        }
    }

    /// Short identifying label, e.g. "2023 Lexus RZ 450e"
    pub fn label(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    /// Validate user-supplied fields
    ///
    /// The calculator accepts any values; this is for the input boundary.
    pub fn validate(&self) -> AppraisalResult<()> {
        if !(MIN_MODEL_YEAR..=MAX_MODEL_YEAR).contains(&self.year) {
            return Err(AppraisalError::invalid_field(
                "year",
                format!(
                    "{} is not between {} and {}",
                    self.year, MIN_MODEL_YEAR, MAX_MODEL_YEAR
                ),
            ));
        }

        if !self.msrp.is_finite() || self.msrp < 0.0 {
            return Err(AppraisalError::invalid_field(
                "msrp",
                "must be a non-negative number",
            ));
        }

        if !self.mileage.is_finite() || self.mileage < 0.0 {
            return Err(AppraisalError::invalid_field(
                "mileage",
                "must be a non-negative number",
            ));
        }

        Ok(())
    }
}

impl Default for VehicleRecord {
    /// The 2023 Lexus RZ 450e Luxury the tool ships configured for
    fn default() -> Self {
        Self::new("Lexus", "RZ 450e", 2023, "Luxury", 64_000.0, 12_500.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let vehicle = VehicleRecord::new("Toyota", "Prius", 2020, "XLE", 28_000.0, 50_000.0);
        assert_eq!(vehicle.label(), "2020 Toyota Prius");
    }

    #[test]
    fn test_default_vehicle() {
        let vehicle = VehicleRecord::default();
        assert_eq!(vehicle.label(), "2023 Lexus RZ 450e");
        assert_eq!(vehicle.trim, "Luxury");
        assert_eq!(vehicle.msrp, 64_000.0);
        assert_eq!(vehicle.mileage, 12_500.0);
        assert!(vehicle.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut vehicle = VehicleRecord::default();
        vehicle.year = 1700;
        assert!(vehicle.validate().unwrap_err().is_validation());

        let mut vehicle = VehicleRecord::default();
        vehicle.msrp = -1.0;
        assert!(vehicle.validate().is_err());

        let mut vehicle = VehicleRecord::default();
        vehicle.mileage = f64::NAN;
        assert!(vehicle.validate().is_err());
    }

    #[test]
    fn test_labels_are_free_text() {
        let vehicle = VehicleRecord::new("", "", 2020, "", 20_000.0, 0.0);
        assert!(vehicle.validate().is_ok());
    }

    #[test]
    fn test_trim_defaults_when_missing() {
        let json = r#"{"make":"Honda","model":"Civic","year":2019,"msrp":22000,"mileage":40000}"#;
        let vehicle: VehicleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(vehicle.trim, "");
        assert_eq!(vehicle.msrp, 22_000.0);
    }
}
