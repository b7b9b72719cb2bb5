//! Scene files: the TOML representation of a board consumed by the CLI
//!
//! A scene holds the canvas size and the ordered item list. The layout core
//! never touches this module; collaborators (here, the CLI) load a scene,
//! hand the item list to the core, and write the returned list back out.
//!
//! ```toml
//! [canvas]
//! width = 48
//! height = 32
//!
//! [[items]]
//! id = "sunset"
//! kind = "image"
//! rect = { x = 2, y = 2, w = 6, h = 4 }
//! aspect = 1.5
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::grid::Item;

/// Canvas dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: i32,
    pub height: i32,
}

/// A complete board scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub canvas: Canvas,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Scene, BoardError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| BoardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Scene::from_toml(&content)
    }

    /// Parse a scene from TOML text and validate the canvas
    pub fn from_toml(content: &str) -> Result<Scene, BoardError> {
        let scene: Scene = toml::from_str(content)?;
        if scene.canvas.width <= 0 || scene.canvas.height <= 0 {
            return Err(BoardError::InvalidCanvas {
                w: scene.canvas.width,
                h: scene.canvas.height,
            });
        }
        Ok(scene)
    }

    /// Serialize the scene back to TOML
    pub fn to_toml(&self) -> Result<String, BoardError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Replace the item list, keeping the canvas
    pub fn with_items(&self, items: Vec<Item>) -> Scene {
        Scene {
            canvas: self.canvas,
            items,
        }
    }
}
