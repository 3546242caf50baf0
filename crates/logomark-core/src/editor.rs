//! The editor session.
//!
//! [`Editor`] owns every piece of editor state and is the only thing a host
//! mutates. Controls hand it complete new values (a new [`LogoConfig`], a new
//! position); nothing is patched in place from the outside.
//!
//! # Upload ordering
//!
//! Decoding an upload finishes at some later point on the host side. Each
//! upload first takes a [`LoadTicket`]; completing with a ticket that has
//! since been superseded is ignored, so a slow decode of an older file can
//! never replace a newer image.

use thiserror::Error;

use crate::color::{ColorError, Rgba};
use crate::compositor::{place_background, BackgroundPlacement, LogoTransform};
use crate::config::{ConfigError, EditorConfig};
use crate::crop::{CropAspect, CropOverlay, CropTracker};
use crate::decode::{decode_image, DecodeError, RasterImage};
use crate::encode::{encode_raster, EncodeError};
use crate::fit::{displayed_dimensions, fit_with_ratio, zoom_percent};
use crate::geometry::{ImageDimensions, Point, Rect, Size, StageSize};
use crate::logo::LogoConfig;
use crate::render::{crop_raster, rasterize, Composition};
use crate::scene::{BackgroundLayer, DisplaySize, Scene};
use crate::view::{StageTracker, ZoomLevel};

/// Errors from exporting the composed image.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export before a background has loaded.
    #[error("No background image loaded")]
    NoBackground,

    #[error("Rendering failed: {0}")]
    Render(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Generation number of one upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(self) -> u64 {
        self.0
    }

    pub fn from_generation(generation: u64) -> Self {
        Self(generation)
    }
}

/// An image slot that only accepts the newest upload.
#[derive(Debug, Clone, Default)]
struct ImageSlot {
    generation: u64,
    image: Option<RasterImage>,
}

impl ImageSlot {
    fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    fn finish(&mut self, ticket: LoadTicket, image: RasterImage, slot: &'static str) -> bool {
        if !self.is_current(ticket) {
            tracing::warn!(
                slot,
                ticket = ticket.0,
                current = self.generation,
                "discarding superseded image load"
            );
            return false;
        }
        tracing::debug!(slot, width = image.width, height = image.height, "image loaded");
        self.image = Some(image);
        true
    }
}

/// One editing session: background, logo, view and crop state.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    stage: StageTracker,
    zoom: ZoomLevel,
    background: ImageSlot,
    logo: ImageSlot,
    logo_position: Point,
    logo_config: LogoConfig,
    canvas: Rgba,
    crop: CropTracker,
}

impl Editor {
    /// Start a session with `config`.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found by [`EditorConfig::validate`].
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let canvas = config.background_color()?;
        Ok(Self {
            stage: StageTracker::new(&config),
            zoom: ZoomLevel::new(&config),
            background: ImageSlot::default(),
            logo: ImageSlot::default(),
            logo_position: config.default_logo_position,
            logo_config: LogoConfig::default(),
            canvas,
            crop: CropTracker::new(),
            config,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // ---- stage and zoom ------------------------------------------------

    pub fn stage_size(&self) -> StageSize {
        self.stage.size()
    }

    /// Report a container measurement. Returns true if the stage changed.
    pub fn resize_stage(&mut self, measured: Size) -> bool {
        self.stage.observe(measured)
    }

    pub fn zoom(&self) -> f64 {
        self.zoom.value()
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.zoom = self.zoom.zoom_in();
        self.zoom.value()
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.zoom = self.zoom.zoom_out();
        self.zoom.value()
    }

    pub fn reset_zoom(&mut self) -> f64 {
        self.zoom = self.zoom.reset();
        self.zoom.value()
    }

    // ---- uploads -------------------------------------------------------

    pub fn begin_background_load(&mut self) -> LoadTicket {
        self.background.begin()
    }

    /// True while no newer background upload has begun since `ticket`.
    pub fn is_current_background_load(&self, ticket: LoadTicket) -> bool {
        self.background.is_current(ticket)
    }

    /// Install a decoded background if `ticket` is still the newest upload.
    pub fn finish_background_load(&mut self, ticket: LoadTicket, image: RasterImage) -> bool {
        self.background.finish(ticket, image, "background")
    }

    /// Decode and install a background in one step.
    pub fn load_background(&mut self, bytes: &[u8]) -> Result<ImageDimensions, DecodeError> {
        let ticket = self.begin_background_load();
        let image = decode_image(bytes)?;
        let dimensions = image.dimensions();
        self.finish_background_load(ticket, image);
        Ok(dimensions)
    }

    pub fn begin_logo_load(&mut self) -> LoadTicket {
        self.logo.begin()
    }

    pub fn is_current_logo_load(&self, ticket: LoadTicket) -> bool {
        self.logo.is_current(ticket)
    }

    /// Install a decoded logo if `ticket` is still the newest upload.
    pub fn finish_logo_load(&mut self, ticket: LoadTicket, image: RasterImage) -> bool {
        self.logo.finish(ticket, image, "logo")
    }

    /// Decode and install a logo in one step.
    pub fn load_logo(&mut self, bytes: &[u8]) -> Result<ImageDimensions, DecodeError> {
        let ticket = self.begin_logo_load();
        let image = decode_image(bytes)?;
        let dimensions = image.dimensions();
        self.finish_logo_load(ticket, image);
        Ok(dimensions)
    }

    /// Natural size of the current background, once loaded.
    pub fn image_dimensions(&self) -> Option<ImageDimensions> {
        self.background.image.as_ref().map(RasterImage::dimensions)
    }

    pub fn logo_dimensions(&self) -> Option<ImageDimensions> {
        self.logo.image.as_ref().map(RasterImage::dimensions)
    }

    // ---- background geometry ------------------------------------------

    /// Fitted size of the background; the stage size before any load.
    pub fn fitted_size(&self) -> Size {
        let natural = self.image_dimensions().unwrap_or_default();
        fit_with_ratio(natural, self.stage.size(), self.config.fit_ratio)
    }

    pub fn background_placement(&self) -> Option<BackgroundPlacement> {
        self.image_dimensions().map(|natural| {
            place_background(
                natural,
                self.stage.size(),
                self.zoom.value(),
                self.config.fit_ratio,
            )
        })
    }

    /// Natural size times zoom, rounded, for the size readout.
    pub fn displayed_dimensions(&self) -> Option<(u32, u32)> {
        self.image_dimensions()
            .map(|natural| displayed_dimensions(natural, self.zoom.value()))
    }

    // ---- logo -----------------------------------------------------------

    pub fn logo_position(&self) -> Point {
        self.logo_position
    }

    /// Record where a logo drag ended.
    pub fn end_logo_drag(&mut self, position: Point) {
        if !position.is_finite() {
            return;
        }
        self.logo_position = position;
    }

    pub fn logo_config(&self) -> LogoConfig {
        self.logo_config
    }

    /// Replace the whole logo config. Fields are re-clamped.
    pub fn set_logo_config(&mut self, config: LogoConfig) {
        self.logo_config = self
            .logo_config
            .with_scale(config.scale)
            .with_rotation(config.rotation)
            .with_opacity(config.opacity);
    }

    pub fn set_logo_scale(&mut self, scale: f64) -> LogoConfig {
        self.logo_config = self.logo_config.with_scale(scale);
        self.logo_config
    }

    pub fn set_logo_rotation(&mut self, rotation: f64) -> LogoConfig {
        self.logo_config = self.logo_config.with_rotation(rotation);
        self.logo_config
    }

    pub fn set_logo_opacity(&mut self, opacity: f64) -> LogoConfig {
        self.logo_config = self.logo_config.with_opacity(opacity);
        self.logo_config
    }

    /// Logo transform for drawing; `None` with no logo or while cropping.
    pub fn logo_transform(&self) -> Option<LogoTransform> {
        if self.crop.is_active() {
            return None;
        }
        let logo = self.logo.image.as_ref()?;
        Some(LogoTransform::new(
            self.logo_position,
            self.logo_config,
            logo.dimensions(),
        ))
    }

    // ---- canvas ---------------------------------------------------------

    pub fn canvas_background(&self) -> Rgba {
        self.canvas
    }

    pub fn set_canvas_background(&mut self, hex: &str) -> Result<Rgba, ColorError> {
        self.canvas = Rgba::parse_hex(hex)?;
        Ok(self.canvas)
    }

    // ---- crop -----------------------------------------------------------

    pub fn crop(&self) -> &CropTracker {
        &self.crop
    }

    pub fn start_crop(&mut self) {
        self.crop.start();
    }

    pub fn set_crop_aspect(&mut self, aspect: CropAspect) {
        self.crop.set_aspect(aspect);
    }

    pub fn crop_pointer_down(&mut self, point: Point) -> bool {
        self.crop.pointer_down(point)
    }

    pub fn crop_pointer_move(&mut self, point: Point) -> bool {
        self.crop.pointer_move(point)
    }

    pub fn crop_pointer_up(&mut self) -> bool {
        self.crop.pointer_up()
    }

    pub fn apply_crop(&mut self) -> Option<Rect> {
        self.crop.apply()
    }

    pub fn cancel_crop(&mut self) {
        self.crop.cancel();
    }

    pub fn reset_crop(&mut self) {
        self.crop.reset();
    }

    // ---- output ---------------------------------------------------------

    /// Snapshot for the rendering layer.
    pub fn scene(&self) -> Scene {
        let zoom = self.zoom.value();
        let background = self.background_placement().and_then(|placement| {
            let natural = self.image_dimensions()?;
            let (width, height) = displayed_dimensions(natural, zoom);
            Some(BackgroundLayer {
                placement,
                natural,
                displayed: DisplaySize { width, height },
            })
        });

        let crop_overlay = if self.crop.is_active() {
            self.crop
                .region()
                .map(|region| CropOverlay::new(region, self.stage.size(), &self.config))
        } else {
            None
        };

        Scene {
            stage: self.stage.size(),
            zoom,
            zoom_percent: zoom_percent(zoom),
            canvas_background: self.canvas.to_hex(),
            background,
            logo: self.logo_transform(),
            cropping: self.crop.is_active(),
            crop_overlay,
            crop_area: self.crop.crop_area(),
        }
    }

    /// Render the stage as it is shown, cut to the applied crop if any.
    ///
    /// The crop overlay is editor chrome and is never rendered.
    pub fn render(&self) -> Result<RasterImage, ExportError> {
        let background = self.background.image.as_ref().ok_or(ExportError::NoBackground)?;
        let placement = self.background_placement().ok_or(ExportError::NoBackground)?;

        let logo = match (self.logo.image.as_ref(), self.logo_transform()) {
            (Some(image), Some(transform)) => Some((image, transform)),
            _ => None,
        };

        let composition = Composition {
            stage: self.stage.size(),
            zoom: self.zoom.value(),
            canvas: self.canvas,
            background: Some((background, placement)),
            logo,
        };

        let mut raster = rasterize(&composition)?;
        if let Some(region) = self.crop.applied() {
            raster = crop_raster(&raster, region);
        }
        Ok(raster)
    }

    /// Render and encode as PNG.
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        let raster = self.render()?;
        let png = encode_raster(&raster)?;
        tracing::debug!(
            width = raster.width,
            height = raster.height,
            bytes = png.len(),
            "exported png"
        );
        Ok(png)
    }
}

impl Default for Editor {
    fn default() -> Self {
        let config = EditorConfig::default();
        Self {
            stage: StageTracker::new(&config),
            zoom: ZoomLevel::new(&config),
            background: ImageSlot::default(),
            logo: ImageSlot::default(),
            logo_position: config.default_logo_position,
            logo_config: LogoConfig::default(),
            canvas: Rgba::WHITE,
            crop: CropTracker::new(),
            config,
        }
    }
}
