use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{cluster, config::Config, palette, shape::Shape};

/// Caller-owned shape descriptor. Identity and the initial color are assigned before analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub color: String,
    #[serde(flatten)]
    pub shape: Shape,
}

impl Entry {
    pub fn new(id: impl Into<String>, color: impl Into<String>, shape: Shape) -> Entry {
        Entry { id: id.into(), color: color.into(), shape }
    }
}

/// Two or more shapes connected, directly or transitively, by overlaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub shape_ids: Vec<String>,
    pub color: String,
    pub size: usize,
}

/// Result of one overlap analysis: the input shapes, recolored by group, and the groups themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub shapes: Vec<Entry>,
    pub total_count: usize,
    #[serde(rename = "overlapGroups")]
    pub groups: Vec<Group>,
}

impl Scene {
    /// Single pass: pairwise overlaps → connected components → group colors.
    ///
    /// Shapes in a group of 2 or more take the group's color; isolated shapes keep theirs and are not reported
    /// as groups. `entries` is left untouched.
    pub fn new(entries: &[Entry], config: &Config) -> Scene {
        for id in entries.iter().map(|e| &e.id).duplicates() {
            warn!("Duplicate shape id: {}", id);
        }
        let shapes: Vec<Shape> = entries.iter().map(|e| e.shape.clone()).collect();
        let components = cluster::components(&shapes, config.parallel);
        let colored = palette::color_components(components, &config.palette);

        let mut out = entries.to_vec();
        let groups: Vec<Group> = colored
            .into_iter()
            .map(|palette::Colored { members, color }| {
                for &idx in &members {
                    out[idx].color = color.to_string();
                }
                Group {
                    shape_ids: members.iter().map(|&idx| entries[idx].id.clone()).collect(),
                    color: color.to_string(),
                    size: members.len(),
                }
            })
            .collect();
        debug!("{} shapes, {} overlap groups", out.len(), groups.len());
        Scene {
            total_count: out.len(),
            shapes: out,
            groups,
        }
    }

    pub fn group_of(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.shape_ids.iter().any(|s| s == id))
    }
}
