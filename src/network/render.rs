//! Render description for the presentation layer.
//!
//! The core never draws. It hands back points and line segments and lets the
//! caller plot them however it likes.

use super::{NetworkModel, Point};
use crate::core::Result;
use serde::{Deserialize, Serialize};

/// A straight hop between two nodes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Points for every node plus one segment per hop of the optional path.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub points: Vec<Point>,
    pub segments: Vec<Segment>,
}

impl Scene {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

pub fn render(model: &NetworkModel, path: Option<&[usize]>) -> Result<Scene> {
    let segments = match path {
        Some(path) => path
            .windows(2)
            .map(|hop| -> Result<Segment> {
                Ok(Segment {
                    from: *model.node(hop[0])?,
                    to: *model.node(hop[1])?,
                })
            })
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    Ok(Scene {
        points: model.nodes().to_vec(),
        segments,
    })
}
