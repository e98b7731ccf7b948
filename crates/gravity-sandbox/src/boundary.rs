//! Boundary policies applied to every body once per tick
//!
//! The world extent can follow the viewport: with zoom-follow enabled the
//! walls sit at `size / zoom` in world coordinates. The zoom is injected per
//! call rather than stored, since the camera belongs to the front-end.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::body::Body;

/// Lower bound used when dividing by the viewport zoom
const MIN_ZOOM: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// Elastic walls at 0 and the extent
    #[default]
    Reflect,
    /// No walls
    Unconstrained,
    /// Toroidal world: leaving one side re-enters on the other
    Wrap,
}

impl BoundaryMode {
    /// Next mode in the UI toggle cycle: Reflect, Unconstrained, Wrap
    pub fn next(self) -> Self {
        match self {
            BoundaryMode::Reflect => BoundaryMode::Unconstrained,
            BoundaryMode::Unconstrained => BoundaryMode::Wrap,
            BoundaryMode::Wrap => BoundaryMode::Reflect,
        }
    }

    /// Whether this mode has walls that zoom-follow can move
    pub fn is_constrained(self) -> bool {
        !matches!(self, BoundaryMode::Unconstrained)
    }
}

/// Boundary configuration: mode, base world size and the zoom-follow flag
///
/// # Examples
///
/// ```
/// use gravity_sandbox::boundary::{Bounds, BoundaryMode};
/// use nalgebra::Vector2;
///
/// let mut bounds = Bounds::new(BoundaryMode::Reflect, Vector2::new(800.0, 600.0));
/// assert_eq!(bounds.extent(2.0), Vector2::new(800.0, 600.0));
///
/// bounds.zoom_follow = true;
/// assert_eq!(bounds.extent(2.0), Vector2::new(400.0, 300.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub mode: BoundaryMode,
    /// World size at zoom 1
    pub size: Vector2<f64>,
    pub zoom_follow: bool,
}

impl Bounds {
    pub fn new(mode: BoundaryMode, size: Vector2<f64>) -> Self {
        Self {
            mode,
            size,
            zoom_follow: false,
        }
    }

    /// Effective `(max_x, max_y)` for the given viewport zoom
    pub fn extent(&self, zoom: f64) -> Vector2<f64> {
        if self.zoom_follow && self.mode.is_constrained() {
            self.size / zoom.max(MIN_ZOOM)
        } else {
            self.size
        }
    }

    /// Distance between consecutive trail points beyond which the trail is
    /// drawn as separate segments
    pub fn jump_threshold(&self, zoom: f64) -> f64 {
        let extent = self.extent(zoom);
        extent.x.max(extent.y) * 0.5
    }

    /// Applies the policy to one body's post-integration state
    pub fn apply(&self, body: &mut Body, zoom: f64) {
        let extent = self.extent(zoom);
        match self.mode {
            BoundaryMode::Unconstrained => {}
            BoundaryMode::Reflect => reflect(body, extent),
            BoundaryMode::Wrap => wrap(body, extent),
        }
    }
}

fn reflect(body: &mut Body, extent: Vector2<f64>) {
    for axis in 0..2 {
        let max = extent[axis];
        if body.position[axis] < 0.0 {
            body.position[axis] = 0.0;
            body.velocity[axis] = -body.velocity[axis];
        } else if body.position[axis] > max {
            body.position[axis] = max;
            body.velocity[axis] = -body.velocity[axis];
        }
    }
}

fn wrap(body: &mut Body, extent: Vector2<f64>) {
    for axis in 0..2 {
        let max = extent[axis];
        if max <= 0.0 {
            continue;
        }
        if body.position[axis] < 0.0 {
            body.position[axis] += max;
        } else if body.position[axis] > max {
            body.position[axis] -= max;
        }
    }
}
