// ABOUTME: Clinical constants, rule weights, and physiological input bounds
// ABOUTME: Single canonical source for every threshold the screening pipeline uses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Clinical constants based on standard screening guidelines
//!
//! This module contains the canonical cutoffs and rule weights used throughout
//! the risk analysis pipeline. Band boundaries follow widely published
//! clinical guidance; a value sitting exactly on a boundary always belongs to
//! the lower-risk band (bands are half-open).

/// Fasting glucose cutoffs (mg/dL)
///
/// References:
/// - American Diabetes Association, Standards of Care in Diabetes (2024),
///   Section 2: Diagnosis and Classification of Diabetes
pub mod glucose {
    /// Below this value fasting glucose is considered normal
    pub const NORMAL_MAX_MGDL: f64 = 100.0;

    /// At or above this value fasting glucose indicates diabetes;
    /// the range `[NORMAL_MAX_MGDL, DIABETIC_MIN_MGDL)` is prediabetic
    pub const DIABETIC_MIN_MGDL: f64 = 126.0;
}

/// HbA1c cutoffs (percent)
///
/// Reference: ADA Standards of Care in Diabetes (2024), Table 2.2
pub mod hba1c {
    /// Below this value HbA1c is normal
    pub const NORMAL_MAX_PCT: f64 = 5.7;

    /// At or above this value HbA1c indicates diabetes
    pub const DIABETIC_MIN_PCT: f64 = 6.5;
}

/// Blood pressure cutoffs (mmHg)
///
/// Reference: 2017 ACC/AHA Guideline for the Prevention, Detection,
/// Evaluation, and Management of High Blood Pressure in Adults
pub mod blood_pressure {
    /// Upper bound of normal systolic pressure
    pub const NORMAL_SYSTOLIC_MAX: f64 = 120.0;

    /// Systolic at or above this is elevated / stage 1
    pub const ELEVATED_SYSTOLIC_MIN: f64 = 130.0;

    /// Systolic at or above this is stage 2 hypertension
    pub const STAGE2_SYSTOLIC_MIN: f64 = 140.0;

    /// Diastolic at or above this is elevated / stage 1
    pub const ELEVATED_DIASTOLIC_MIN: f64 = 85.0;

    /// Diastolic at or above this is stage 2 hypertension
    pub const STAGE2_DIASTOLIC_MIN: f64 = 90.0;
}

/// Total cholesterol cutoffs (mg/dL)
///
/// Reference: NCEP ATP III classification of total cholesterol
pub mod cholesterol {
    /// Below this value total cholesterol is desirable
    pub const DESIRABLE_MAX_MGDL: f64 = 200.0;

    /// At or above this value total cholesterol is high;
    /// `[DESIRABLE_MAX_MGDL, HIGH_MIN_MGDL)` is borderline-high
    pub const HIGH_MIN_MGDL: f64 = 240.0;
}

/// Body mass index cutoffs (kg/m²)
///
/// Reference: WHO BMI classification
pub mod bmi {
    /// Below this value BMI is underweight
    pub const UNDERWEIGHT_MAX: f64 = 18.5;

    /// At or above this value (and below `OBESE_MIN`) BMI is overweight
    pub const OVERWEIGHT_MIN: f64 = 25.0;

    /// At or above this value BMI is obese
    pub const OBESE_MIN: f64 = 30.0;
}

/// Sleep duration bands (hours per night)
///
/// Reference: National Sleep Foundation recommendations for adults (7-9h)
pub mod sleep {
    /// Severe sleep deficit threshold
    pub const SEVERE_DEFICIT_MAX_HOURS: f64 = 5.0;

    /// Mild sleep deficit threshold
    pub const MILD_DEFICIT_MAX_HOURS: f64 = 6.0;

    /// Lower bound of the recommended sleep window
    pub const RECOMMENDED_MIN_HOURS: f64 = 7.0;

    /// Upper bound of the recommended sleep window
    pub const RECOMMENDED_MAX_HOURS: f64 = 9.0;
}

/// Weekly exercise bands (minutes per week)
///
/// Reference: WHO physical activity guidelines (150 min/week moderate)
pub mod exercise {
    /// Sedentary threshold
    pub const SEDENTARY_MAX_MINS: f64 = 60.0;

    /// WHO-recommended weekly minimum
    pub const RECOMMENDED_MINS: f64 = 150.0;
}

/// Self-reported stress bands (0-10 scale)
pub mod stress {
    /// At or above this level stress is considered high
    pub const HIGH_MIN: f64 = 8.0;

    /// At or above this level (below `HIGH_MIN`) stress is moderate
    pub const MODERATE_MIN: f64 = 6.0;

    /// At or below this level stress is low
    pub const LOW_MAX: f64 = 3.0;
}

/// Canonical additive rule weights, one submodule per condition
///
/// The original product shipped two diverging weight tables (demo
/// calculator vs. backend rule CSV); this table is the canonical merge
/// documented in DESIGN.md. Each constant is the number of points a
/// matching band contributes before the total is clamped to [0,100].
pub mod risk_weights {
    /// Diabetes risk contributions
    pub mod diabetes {
        /// Age strictly above 45 years
        pub const AGE_OVER_45: f64 = 15.0;
        /// Age strictly above 35 years (and at most 45)
        pub const AGE_OVER_35: f64 = 8.0;
        /// Obese BMI (>= 30)
        pub const BMI_OBESE: f64 = 12.0;
        /// Overweight BMI (> 25, < 30)
        pub const BMI_OVERWEIGHT: f64 = 4.0;
        /// Diabetic fasting glucose (>= 126 mg/dL)
        pub const GLUCOSE_DIABETIC: f64 = 25.0;
        /// Prediabetic fasting glucose (100-125 mg/dL)
        pub const GLUCOSE_PREDIABETIC: f64 = 10.0;
        /// Diabetic HbA1c (>= 6.5%)
        pub const HBA1C_DIABETIC: f64 = 20.0;
        /// Prediabetic HbA1c (5.7-6.4%)
        pub const HBA1C_PREDIABETIC: f64 = 8.0;
        /// Severe sleep deficit (< 5h)
        pub const SLEEP_SEVERE_DEFICIT: f64 = 18.0;
        /// Mild sleep deficit (5-6h)
        pub const SLEEP_MILD_DEFICIT: f64 = 8.0;
        /// High stress (>= 8)
        pub const STRESS_HIGH: f64 = 7.0;
        /// Sedentary lifestyle (< 60 min/week)
        pub const EXERCISE_SEDENTARY: f64 = 6.0;
        /// Family history of diabetes
        pub const FAMILY_HISTORY: f64 = 25.0;
    }

    /// Heart disease risk contributions
    pub mod heart {
        /// Age strictly above 55 years
        pub const AGE_OVER_55: f64 = 20.0;
        /// Age strictly above 45 years (and at most 55)
        pub const AGE_OVER_45: f64 = 10.0;
        /// Stage 2 hypertension (>= 140/90)
        pub const BP_STAGE2: f64 = 25.0;
        /// Elevated / stage 1 blood pressure (>= 130/85)
        pub const BP_ELEVATED: f64 = 12.0;
        /// Above-normal systolic pressure (120-129)
        pub const BP_ABOVE_NORMAL: f64 = 5.0;
        /// High total cholesterol (>= 240 mg/dL)
        pub const CHOLESTEROL_HIGH: f64 = 20.0;
        /// Borderline-high total cholesterol (200-239 mg/dL)
        pub const CHOLESTEROL_BORDERLINE: f64 = 10.0;
        /// Obese BMI
        pub const BMI_OBESE: f64 = 10.0;
        /// Overweight BMI
        pub const BMI_OVERWEIGHT: f64 = 5.0;
        /// Sedentary lifestyle
        pub const EXERCISE_SEDENTARY: f64 = 10.0;
        /// Below-recommendation exercise (60-149 min/week)
        pub const EXERCISE_LOW: f64 = 4.0;
        /// High stress
        pub const STRESS_HIGH: f64 = 8.0;
        /// Diabetic-range fasting glucose is a cardiac risk factor
        pub const GLUCOSE_DIABETIC: f64 = 8.0;
        /// Family history of cardiovascular disease
        pub const FAMILY_HISTORY: f64 = 15.0;
    }

    /// Fatty liver risk contributions
    pub mod liver {
        /// Obese BMI is the dominant NAFLD factor
        pub const BMI_OBESE: f64 = 30.0;
        /// Overweight BMI
        pub const BMI_OVERWEIGHT: f64 = 15.0;
        /// High total cholesterol
        pub const CHOLESTEROL_HIGH: f64 = 15.0;
        /// Borderline-high total cholesterol
        pub const CHOLESTEROL_BORDERLINE: f64 = 8.0;
        /// Diabetic fasting glucose
        pub const GLUCOSE_DIABETIC: f64 = 15.0;
        /// Prediabetic fasting glucose (insulin resistance marker)
        pub const GLUCOSE_PREDIABETIC: f64 = 8.0;
        /// Diabetic HbA1c
        pub const HBA1C_DIABETIC: f64 = 10.0;
        /// Sedentary lifestyle
        pub const EXERCISE_SEDENTARY: f64 = 12.0;
        /// Age strictly above 50 years
        pub const AGE_OVER_50: f64 = 8.0;
    }

    /// Depression risk contributions
    pub mod depression {
        /// Severe sleep deficit (< 5h)
        pub const SLEEP_SEVERE_DEFICIT: f64 = 25.0;
        /// Mild sleep deficit (5-6h)
        pub const SLEEP_MILD_DEFICIT: f64 = 15.0;
        /// Oversleeping (> 9h)
        pub const SLEEP_EXCESS: f64 = 10.0;
        /// High stress (>= 8)
        pub const STRESS_HIGH: f64 = 30.0;
        /// Moderate stress (6-7)
        pub const STRESS_MODERATE: f64 = 15.0;
        /// Sedentary lifestyle
        pub const EXERCISE_SEDENTARY: f64 = 15.0;
        /// Below-recommendation exercise
        pub const EXERCISE_LOW: f64 = 5.0;
        /// Family history of mental illness
        pub const FAMILY_HISTORY: f64 = 10.0;
    }
}

/// Risk level thresholds and alert policy
pub mod risk_levels {
    /// At or above this percentage a risk is "medium"; advice and
    /// warning alerts start here
    pub const MEDIUM_THRESHOLD_PCT: f64 = 40.0;

    /// At or above this percentage a risk is "high"; alerts become critical
    pub const HIGH_THRESHOLD_PCT: f64 = 60.0;

    /// Minimum trend delta, in percentage points, that triggers a
    /// "risk increasing" / "risk improving" alert
    pub const TREND_DELTA_PCT: f64 = 10.0;

    /// Maximum number of alerts surfaced per request
    pub const MAX_ALERTS: usize = 5;
}

/// Contributor ranking bands: signed risk deltas per lifestyle factor
pub mod contributor_bands {
    /// Sleep below 5h
    pub const SLEEP_SEVERE_DEFICIT: f64 = 15.0;
    /// Sleep 5-6h
    pub const SLEEP_MILD_DEFICIT: f64 = 8.0;
    /// Sleep in the 7-9h recommended window (protective)
    pub const SLEEP_RECOMMENDED: f64 = -5.0;

    /// Cholesterol at or above 240 mg/dL
    pub const CHOLESTEROL_HIGH: f64 = 12.0;
    /// Cholesterol 200-239 mg/dL
    pub const CHOLESTEROL_BORDERLINE: f64 = 6.0;
    /// Cholesterol below 180 mg/dL (protective)
    pub const CHOLESTEROL_OPTIMAL: f64 = -3.0;

    /// Stress at or above 8
    pub const STRESS_HIGH: f64 = 12.0;
    /// Stress 6-7
    pub const STRESS_MODERATE: f64 = 6.0;
    /// Stress at or below 3 (protective)
    pub const STRESS_LOW: f64 = -3.0;

    /// Exercise below 30 min/week
    pub const EXERCISE_MINIMAL: f64 = 10.0;
    /// Exercise 30-89 min/week
    pub const EXERCISE_LOW: f64 = 5.0;
    /// Exercise 90-149 min/week
    pub const EXERCISE_NEAR_TARGET: f64 = 2.0;
    /// Exercise at or above 150 min/week (protective)
    pub const EXERCISE_RECOMMENDED: f64 = -6.0;

    /// Obese BMI
    pub const BMI_OBESE: f64 = 12.0;
    /// Overweight BMI
    pub const BMI_OVERWEIGHT: f64 = 6.0;
    /// Underweight BMI
    pub const BMI_UNDERWEIGHT: f64 = 3.0;
    /// Normal-range BMI (protective)
    pub const BMI_NORMAL: f64 = -4.0;

    /// Scale used to turn a contributor delta into a display bar width
    /// (percent of the widest bar)
    pub const BAR_WIDTH_FULL_SCALE: f64 = 15.0;

    /// Minimum rendered bar width so neutral factors stay visible
    pub const BAR_WIDTH_MIN_PCT: f64 = 8.0;
}

/// Physiological input bounds used for form validation and document clamping
pub mod bounds {
    /// Age bounds (years)
    pub const AGE: (f64, f64) = (0.0, 120.0);
    /// Height bounds (cm)
    pub const HEIGHT_CM: (f64, f64) = (50.0, 250.0);
    /// Weight bounds (kg)
    pub const WEIGHT_KG: (f64, f64) = (20.0, 400.0);
    /// Systolic blood pressure bounds (mmHg)
    pub const BP_SYSTOLIC: (f64, f64) = (60.0, 250.0);
    /// Diastolic blood pressure bounds (mmHg)
    pub const BP_DIASTOLIC: (f64, f64) = (40.0, 150.0);
    /// Fasting glucose bounds (mg/dL)
    pub const SUGAR_MGDL: (f64, f64) = (30.0, 600.0);
    /// HbA1c bounds (percent)
    pub const HBA1C_PCT: (f64, f64) = (3.0, 20.0);
    /// Total cholesterol bounds (mg/dL)
    pub const CHOLESTEROL_MGDL: (f64, f64) = (50.0, 500.0);
    /// Sleep bounds (hours per night)
    pub const SLEEP_HOURS: (f64, f64) = (0.0, 24.0);
    /// Exercise bounds (minutes per week)
    pub const EXERCISE_MINS: (f64, f64) = (0.0, 3000.0);
    /// Stress scale bounds
    pub const STRESS_LEVEL: (f64, f64) = (0.0, 10.0);
}

/// Documented defaults applied by the input normalizer when a field is
/// missing, non-numeric, or non-finite and no prior record supplies it
pub mod defaults {
    /// Default age (years)
    pub const AGE: f64 = 30.0;
    /// Default height (cm)
    pub const HEIGHT_CM: f64 = 170.0;
    /// Default weight (kg)
    pub const WEIGHT_KG: f64 = 70.0;
    /// Default systolic blood pressure (mmHg)
    pub const BP_SYSTOLIC: f64 = 120.0;
    /// Default diastolic blood pressure (mmHg)
    pub const BP_DIASTOLIC: f64 = 80.0;
    /// Default fasting glucose (mg/dL)
    pub const SUGAR_MGDL: f64 = 95.0;
    /// Default HbA1c (percent)
    pub const HBA1C_PCT: f64 = 5.2;
    /// Default total cholesterol (mg/dL)
    pub const CHOLESTEROL_MGDL: f64 = 180.0;
    /// Default sleep (hours per night)
    pub const SLEEP_HOURS: f64 = 7.0;
    /// Default exercise (minutes per week)
    pub const EXERCISE_MINS: f64 = 120.0;
    /// Default stress level (0-10)
    pub const STRESS_LEVEL: f64 = 5.0;
}

/// Unit conversion and plausibility policy for document-extracted values
pub mod extraction {
    /// mmol/L to mg/dL conversion factor for glucose
    pub const GLUCOSE_MMOL_TO_MGDL: f64 = 18.0;

    /// mmol/L to mg/dL conversion factor for cholesterol
    pub const CHOLESTEROL_MMOL_TO_MGDL: f64 = 38.67;

    /// Glucose values below this are assumed to be mmol/L
    pub const GLUCOSE_MMOL_SUSPECT_MAX: f64 = 30.0;

    /// Cholesterol values below this are assumed to be mmol/L
    pub const CHOLESTEROL_MMOL_SUSPECT_MAX: f64 = 15.0;

    /// Number of metrics the extractor targets (used for confidence)
    pub const TARGET_METRIC_COUNT: usize = 4;
}
