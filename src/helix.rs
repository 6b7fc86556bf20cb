//! Parametric double helix geometry.
//!
//! Both strands share the angle θ(i) = i * angular_step and the height
//! z(i) = i * vertical_step. Strand B is strand A rotated by π around the
//! helix axis.
use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_RADIUS: f64 = 4.0;

/// Ten bases per full turn, close to B-DNA.
pub const DEFAULT_ANGULAR_STEP: f64 = TAU / 10.0;

/// Rise per radian of rotation used when only the angular step is chosen.
pub const VERTICAL_STRETCH: f64 = 4.0;

#[derive(Error, Debug, PartialEq)]
pub enum HelixError {
    #[error("Nothing to render, sequence is empty")]
    EmptySequence,
    #[error("Index {index} outside of helix with {total} base pairs")]
    IndexOutOfRange { index: usize, total: usize },
    #[error("Number of base pairs to render must be greater than 0")]
    InvalidBasePairs,
    #[error("Invalid helix config: {0}")]
    InvalidConfig(String),
    #[error("Only one of vertical_step and pitch may be set")]
    ConflictingRise,
}

/// Helix keys as written in a settings file or given as flags. Unset keys
/// fall back to the defaults when resolved, and an unset rise follows the
/// angular step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelixOptions {
    pub radius: Option<f64>,
    pub vertical_step: Option<f64>,
    pub angular_step: Option<f64>,
    /// Rise per full turn
    pub pitch: Option<f64>,
}

impl HelixOptions {
    /// Keys set in `other` replace ours. Setting either the vertical step or
    /// the pitch drops the other one.
    pub fn overridden_by(mut self, other: HelixOptions) -> Self {
        if other.vertical_step.is_some() || other.pitch.is_some() {
            self.vertical_step = other.vertical_step;
            self.pitch = other.pitch;
        }
        self.radius = other.radius.or(self.radius);
        self.angular_step = other.angular_step.or(self.angular_step);
        self
    }

    pub fn resolve(&self) -> Result<HelixConfig, HelixError> {
        let angular_step = self.angular_step.unwrap_or(DEFAULT_ANGULAR_STEP);
        let config = HelixConfig::default()
            .radius(self.radius.unwrap_or(DEFAULT_RADIUS))
            .angular_step(angular_step);
        let config = match (self.vertical_step, self.pitch) {
            (Some(_), Some(_)) => return Err(HelixError::ConflictingRise),
            (Some(vertical_step), None) => config.vertical_step(vertical_step),
            (None, Some(pitch)) => config.with_pitch(pitch),
            (None, None) => config.vertical_step(VERTICAL_STRETCH * angular_step.abs()),
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelixConfig {
    pub radius: f64,
    /// Rise along the helix axis per base
    pub vertical_step: f64,
    /// Rotation in radians per base
    pub angular_step: f64,
}

impl Default for HelixConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            vertical_step: VERTICAL_STRETCH * DEFAULT_ANGULAR_STEP,
            angular_step: DEFAULT_ANGULAR_STEP,
        }
    }
}

impl HelixConfig {
    pub fn new(radius: f64, vertical_step: f64, angular_step: f64) -> Self {
        Self {
            radius,
            vertical_step,
            angular_step,
        }
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn vertical_step(mut self, vertical_step: f64) -> Self {
        self.vertical_step = vertical_step;
        self
    }

    pub fn angular_step(mut self, angular_step: f64) -> Self {
        self.angular_step = angular_step;
        self
    }

    /// Set the rise per base from the rise per full turn.
    pub fn with_pitch(mut self, pitch: f64) -> Self {
        self.vertical_step = pitch * self.angular_step.abs() / TAU;
        self
    }

    /// Spread `turns` full turns evenly over `total` bases, first base at
    /// angle 0 and last base at angle `turns * 2π`.
    pub fn fit_turns(mut self, total: usize, turns: f64) -> Self {
        let steps = total.max(2) - 1;
        self.angular_step = turns * TAU / steps as f64;
        self.vertical_step = VERTICAL_STRETCH * self.angular_step.abs();
        self
    }

    /// Rise per full turn, infinite for a flat ladder.
    pub fn pitch(&self) -> f64 {
        self.vertical_step * TAU / self.angular_step.abs()
    }

    /// Reject configs that would put NaN or infinite values into coordinates
    /// or give a helix that does not rise.
    pub fn validate(&self) -> Result<(), HelixError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(HelixError::InvalidConfig(format!(
                "radius must be a positive number, got {}",
                self.radius
            )));
        }
        if !self.vertical_step.is_finite() || self.vertical_step <= 0.0 {
            return Err(HelixError::InvalidConfig(format!(
                "vertical step must be a positive number, got {}",
                self.vertical_step
            )));
        }
        if !self.angular_step.is_finite() {
            return Err(HelixError::InvalidConfig(format!(
                "angular step must be finite, got {}",
                self.angular_step
            )));
        }
        Ok(())
    }

    pub(crate) fn theta(&self, index: usize) -> f64 {
        index as f64 * self.angular_step
    }

    /// Strand coordinates at `index`, assumes the config has been validated.
    pub(crate) fn strands_at(&self, index: usize) -> (Coord, Coord) {
        let theta = self.theta(index);
        let z = index as f64 * self.vertical_step;
        let strand_a = Coord::on_circle(self.radius, theta, z);
        let strand_b = Coord::on_circle(self.radius, theta + PI, z);
        (strand_a, strand_b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn on_circle(radius: f64, theta: f64, z: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(radius * cos, radius * sin, z)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Angle around the helix axis in (-π, π]
    #[cfg(test)]
    pub(crate) fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

/// Coordinates of both backbone strands for the base at `index` of a helix
/// with `total_count` bases.
pub fn compute_helix_point(
    index: usize,
    total_count: usize,
    config: &HelixConfig,
) -> Result<(Coord, Coord), HelixError> {
    if total_count == 0 {
        return Err(HelixError::EmptySequence);
    }
    if index >= total_count {
        return Err(HelixError::IndexOutOfRange {
            index,
            total: total_count,
        });
    }
    config.validate()?;
    Ok(config.strands_at(index))
}
