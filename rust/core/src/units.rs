// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unit conversion between raw world geometry (meters) and the
//! user-facing settings/output unit (feet).
//!
//! The linear constant is applied in exactly two places: converting
//! feet-denominated settings onto raw geometry, and converting plan
//! areas from m² to ft² at the output boundary.

/// Linear conversion constant, feet per meter.
pub const METERS_TO_FEET: f64 = 3.28084;

/// Convert meters to feet.
#[inline]
pub fn m_to_ft(meters: f64) -> f64 {
    meters * METERS_TO_FEET
}

/// Convert feet to meters.
#[inline]
pub fn ft_to_m(feet: f64) -> f64 {
    feet / METERS_TO_FEET
}

/// Convert square meters to square feet.
#[inline]
pub fn m2_to_ft2(sq_meters: f64) -> f64 {
    sq_meters * METERS_TO_FEET * METERS_TO_FEET
}
