//! Pointer-gesture state machine for drawing the crop box.
//!
//! ```text
//!           down              move (updates region)
//!   Idle ─────────▶ Drawing ◀───────┐
//!    ▲                 │ └──────────┘
//!    │ cancel/reset    │ up
//!    │                 ▼
//!    └──────────── Committed ──── down ──▶ Drawing
//! ```
//!
//! Crop *mode* is tracked separately from the phase: pointer-down only starts
//! a gesture while the mode is active, `cancel` leaves the mode, `reset`
//! keeps it.

use serde::{Deserialize, Serialize};

use super::aspect::CropAspect;
use crate::geometry::{Point, Rect};

/// Where the current crop gesture stands.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CropPhase {
    /// No region.
    #[default]
    Idle,
    /// Pointer is down; the region follows the pointer.
    Drawing { anchor: Point, region: Rect },
    /// Pointer was released; the region is frozen.
    Committed { anchor: Point, region: Rect },
}

impl CropPhase {
    pub fn region(&self) -> Option<Rect> {
        match self {
            CropPhase::Idle => None,
            CropPhase::Drawing { region, .. } | CropPhase::Committed { region, .. } => {
                Some(*region)
            }
        }
    }

    pub fn anchor(&self) -> Option<Point> {
        match self {
            CropPhase::Idle => None,
            CropPhase::Drawing { anchor, .. } | CropPhase::Committed { anchor, .. } => {
                Some(*anchor)
            }
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, CropPhase::Drawing { .. })
    }
}

/// Region plus gesture anchor, as reported to the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub start_x: f64,
    pub start_y: f64,
}

/// Crop mode, gesture phase, shape preset and the last applied region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CropTracker {
    active: bool,
    phase: CropPhase,
    aspect: CropAspect,
    applied: Option<Rect>,
}

impl CropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> CropPhase {
        self.phase
    }

    pub fn aspect(&self) -> CropAspect {
        self.aspect
    }

    /// Current region, whether still drawing or committed.
    pub fn region(&self) -> Option<Rect> {
        self.phase.region()
    }

    /// The region handed over by the last successful [`apply`](Self::apply).
    pub fn applied(&self) -> Option<Rect> {
        self.applied
    }

    pub fn crop_area(&self) -> Option<CropArea> {
        let region = self.phase.region()?;
        let anchor = self.phase.anchor()?;
        Some(CropArea {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            start_x: anchor.x,
            start_y: anchor.y,
        })
    }

    /// Enter crop mode. Any existing region is kept.
    pub fn start(&mut self) {
        tracing::debug!("crop mode entered");
        self.active = true;
    }

    /// Change the shape preset. An in-progress region is re-shaped on the
    /// next pointer move.
    pub fn set_aspect(&mut self, aspect: CropAspect) {
        self.aspect = aspect;
    }

    /// Begin a gesture at `point`. Ignored outside crop mode.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        if !self.active || !point.is_finite() {
            return false;
        }
        self.phase = CropPhase::Drawing {
            anchor: point,
            region: Rect::new(point.x, point.y, 0.0, 0.0),
        };
        true
    }

    /// Stretch the region toward `point`. Ignored unless drawing.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        if !self.active || !point.is_finite() {
            return false;
        }
        match self.phase {
            CropPhase::Drawing { anchor, .. } => {
                self.phase = CropPhase::Drawing {
                    anchor,
                    region: self.aspect.region(anchor, point),
                };
                true
            }
            _ => false,
        }
    }

    /// Freeze the region. Ignored unless drawing.
    pub fn pointer_up(&mut self) -> bool {
        match self.phase {
            CropPhase::Drawing { anchor, region } => {
                tracing::debug!(
                    x = region.x,
                    y = region.y,
                    width = region.width,
                    height = region.height,
                    "crop region committed"
                );
                self.phase = CropPhase::Committed { anchor, region };
                true
            }
            _ => false,
        }
    }

    /// Hand the region to the export step and leave crop mode.
    ///
    /// Returns `None` (and changes nothing) when there is no region.
    pub fn apply(&mut self) -> Option<Rect> {
        let (anchor, region) = match self.phase {
            CropPhase::Idle => return None,
            CropPhase::Drawing { anchor, region } | CropPhase::Committed { anchor, region } => {
                (anchor, region)
            }
        };
        self.phase = CropPhase::Committed { anchor, region };
        self.active = false;
        self.applied = Some(region);
        tracing::debug!(?region, "crop applied");
        Some(region)
    }

    /// Discard the region and leave crop mode.
    pub fn cancel(&mut self) {
        self.phase = CropPhase::Idle;
        self.applied = None;
        self.active = false;
    }

    /// Discard the region, staying in the current mode.
    pub fn reset(&mut self) {
        self.phase = CropPhase::Idle;
        self.applied = None;
    }
}
