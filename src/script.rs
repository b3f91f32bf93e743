//! Replaying scripted drawing sessions.
//!
//! A script is a TOML file with one `[[step]]` table per user action. Each
//! step is fed through [`Session`] exactly as a front end would feed it, so a
//! script exercises the same controller and document code as interactive use.
//!
//! ```toml
//! [[step]]
//! action = "tool"
//! tool = "rectangle"
//!
//! [[step]]
//! action = "press"
//! x = 10
//! y = 10
//!
//! [[step]]
//! action = "release"
//! x = 50
//! y = 40
//!
//! [[step]]
//! action = "save"
//! path = "out.png"
//! ```

use crate::config::ColorSpec;
use crate::input::{MouseButton, Tool};
use crate::raster::ImageFormat;
use crate::session::{Command, Session};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A parsed script.
#[derive(Debug, Default, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// One scripted user action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    Tool {
        tool: Tool,
    },
    Color {
        color: ColorSpec,
    },
    BrushSize {
        size: u32,
    },
    Press {
        x: i32,
        y: i32,
        #[serde(default)]
        button: MouseButton,
    },
    /// Pointer motion with the button held
    Drag {
        x: i32,
        y: i32,
    },
    /// `text` answers the prompt shown by the text tool; omitted means cancelled
    Release {
        x: i32,
        y: i32,
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        button: MouseButton,
    },
    Undo,
    Redo,
    New,
    Open {
        path: PathBuf,
    },
    Save {
        #[serde(default)]
        path: Option<PathBuf>,
        #[serde(default)]
        format: Option<ImageFormat>,
    },
}

/// Summary of a script run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Steps executed
    pub steps: usize,
    /// Open or save steps that failed
    pub failures: usize,
}

impl Script {
    /// Parses a script from TOML text.
    pub fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse script")
    }

    /// Reads and parses a script file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("Invalid script {}", path.display()))
    }

    /// Runs every step against `session` in order.
    ///
    /// Failed file operations are logged and counted; the remaining steps
    /// still run.
    pub fn run(&self, session: &mut Session) -> RunReport {
        let mut report = RunReport::default();

        for (index, step) in self.steps.iter().enumerate() {
            debug!("Step {}: {:?}", index + 1, step);
            report.steps += 1;
            if !apply_step(session, step) {
                warn!("Step {} failed", index + 1);
                report.failures += 1;
            }
        }

        info!(
            "Script finished: {} steps, {} failed",
            report.steps, report.failures
        );
        report
    }
}

/// Applies one step, returning `false` if it failed.
fn apply_step(session: &mut Session, step: &Step) -> bool {
    match step {
        Step::Tool { tool } => session.input.context.set_tool(*tool),
        Step::Color { color } => session.input.context.set_color(color.to_color()),
        Step::BrushSize { size } => session.input.context.set_brush_size(*size),
        Step::Press { x, y, button } => session.on_mouse_press(*button, *x, *y),
        Step::Drag { x, y } => session.on_mouse_motion(*x, *y),
        Step::Release { x, y, text, button } => {
            let mut answer = text.clone();
            let mut prompt = |_: &str| answer.take();
            session.on_mouse_release(*button, *x, *y, &mut prompt);
        }
        Step::Undo => return session.dispatch(Command::Undo).is_ok(),
        Step::Redo => return session.dispatch(Command::Redo).is_ok(),
        Step::New => return session.dispatch(Command::New).is_ok(),
        Step::Open { path } => return session.dispatch(Command::Open(path.clone())).is_ok(),
        Step::Save { path, format } => {
            return session
                .dispatch(Command::Save {
                    path: path.clone(),
                    format: *format,
                })
                .is_ok();
        }
    }
    true
}
