//! Drawing session: the document, the interaction controller and file I/O.
//!
//! Every user action becomes a [`Command`] that [`Session::dispatch`] applies
//! synchronously. Pointer events go through the [`InputState`] controller
//! first, which turns finished gestures into `Append` commands.

mod command;

pub use command::{Command, Outcome};

use crate::config::Config;
use crate::draw::{Document, FontDescriptor, Shape, WHITE, render_background, render_shapes};
use crate::input::{InputState, MouseButton, PaintContext, TextPrompt};
use crate::raster::{self, RasterError, SaveTarget};
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// All state of one drawing window.
///
/// Owned and driven by a single thread; loads complete before the document
/// is touched, so a failed open leaves the drawing as it was.
pub struct Session {
    document: Document,
    /// Interaction controller holding the paint context
    pub input: InputState,
    font: FontDescriptor,
    save_target: SaveTarget,
    canvas_width: u32,
    canvas_height: u32,
    /// Whether the canvas needs to be repainted
    pub needs_redraw: bool,
}

impl Session {
    /// Creates an empty session.
    pub fn new(
        context: PaintContext,
        font: FontDescriptor,
        save_target: SaveTarget,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Self {
        Self {
            document: Document::new(),
            input: InputState::new(context),
            font,
            save_target,
            canvas_width,
            canvas_height,
            needs_redraw: true,
        }
    }

    /// Creates an empty session from user configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.paint_context(),
            config.font_descriptor(),
            config.save_target(),
            config.canvas.width,
            config.canvas.height,
        )
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        self.document.shapes()
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }

    /// Updates the canvas size after the drawing area was resized.
    ///
    /// Shapes keep their coordinates; only the saved image size changes.
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) != (self.canvas_width, self.canvas_height) {
            self.canvas_width = width;
            self.canvas_height = height;
            self.needs_redraw = true;
        }
    }

    /// Applies one command to the document.
    ///
    /// # Errors
    /// Only `Open` and `Save` can fail. The error is logged and returned; the
    /// document is left exactly as it was.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, RasterError> {
        debug!("Dispatching {}", command.name());

        let changed = match command {
            Command::Append(shape) => self.document.append(shape),
            Command::Undo => self.document.undo(),
            Command::Redo => self.document.redo(),
            Command::New => {
                self.input.cancel();
                self.document.clear()
            }
            Command::Open(path) => {
                let shape = self.load(&path).inspect_err(|err| {
                    error!("Open failed: {}", err);
                })?;
                self.document.replace_with_single(shape)
            }
            Command::Save { path, format } => {
                let saved = self.save(path.as_deref(), format).inspect_err(|err| {
                    error!("Save failed: {}", err);
                })?;
                return Ok(Outcome::Saved(saved));
            }
        };

        if changed {
            self.needs_redraw = true;
            Ok(Outcome::Changed)
        } else {
            Ok(Outcome::Unchanged)
        }
    }

    /// Forwards a button press to the interaction controller.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        self.input.on_mouse_press(button, x, y);
        self.sync_redraw();
    }

    /// Forwards pointer motion; sketch segments are appended immediately.
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        if let Some(command) = self.input.on_mouse_motion(x, y) {
            self.dispatch_infallible(command);
        }
        self.sync_redraw();
    }

    /// Forwards a button release, appending the finished shape if any.
    ///
    /// `prompt` is consulted only by the text tool.
    pub fn on_mouse_release(
        &mut self,
        button: MouseButton,
        x: i32,
        y: i32,
        prompt: &mut dyn TextPrompt,
    ) {
        if let Some(command) = self.input.on_mouse_release(button, x, y, prompt) {
            self.dispatch_infallible(command);
        }
        self.sync_redraw();
    }

    /// Paints the canvas for on-screen display.
    ///
    /// Draws the white background, the document, and the live preview of a
    /// gesture in progress on top.
    pub fn render(&self, ctx: &cairo::Context) {
        render_background(ctx, WHITE);
        render_shapes(ctx, self.document.shapes(), &self.font);
        if let Some(preview) = self.input.provisional_shape() {
            crate::draw::render_shape(ctx, &preview, &self.font);
        }
    }

    /// Clears the redraw flag, returning whether a repaint was pending.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn sync_redraw(&mut self) {
        if std::mem::take(&mut self.input.needs_redraw) {
            self.needs_redraw = true;
        }
    }

    /// Dispatches a command that cannot touch the file system.
    fn dispatch_infallible(&mut self, command: Command) {
        debug_assert!(matches!(command, Command::Append(_)));
        if let Err(err) = self.dispatch(command) {
            error!("Unexpected failure applying pointer command: {}", err);
        }
    }

    fn load(&self, path: &Path) -> Result<Shape, RasterError> {
        let bitmap = raster::load_bitmap(path)?;
        Ok(Shape::image(Rc::new(bitmap)))
    }

    fn save(
        &self,
        path: Option<&Path>,
        format: Option<raster::ImageFormat>,
    ) -> Result<PathBuf, RasterError> {
        let (path, format) = self.save_target.resolve(path, format)?;
        let image = raster::flatten(
            self.document.shapes(),
            self.canvas_width,
            self.canvas_height,
            &self.font,
        )?;
        raster::write_image(&image, &path, format)?;
        info!(
            "Saved {}x{} drawing to {}",
            self.canvas_width,
            self.canvas_height,
            path.display()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests;
