//! Per-move search statistics

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{GameError, Result};

/// Node counts, one entry per completed AI move in play order.
///
/// Random easy-tier moves record 0. The sequence only grows; it is emptied by a
/// session reset and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    node_counts: Vec<u64>,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, nodes: u64) {
        self.node_counts.push(nodes);
    }

    pub(crate) fn clear(&mut self) {
        self.node_counts.clear();
    }

    /// Read-only view for reporting and plotting.
    pub fn node_counts(&self) -> &[u64] {
        &self.node_counts
    }

    pub fn len(&self) -> usize {
        self.node_counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_counts.is_empty()
    }

    pub fn total_nodes(&self) -> u64 {
        self.node_counts.iter().sum()
    }

    /// Save statistics to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| GameError::io("write statistics", path, e))
    }

    /// Load statistics from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GameError::io("read statistics", path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report: one row per AI move.
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Node Evaluations per Move ===\n");
        report.push_str(&format!("{:>6} {:>12}\n", "Move", "Nodes"));
        report.push_str(&"-".repeat(19));
        report.push('\n');

        for (i, nodes) in self.node_counts.iter().enumerate() {
            report.push_str(&format!("{:>6} {:>12}\n", i + 1, nodes));
        }

        if !self.is_empty() {
            report.push_str(&"-".repeat(19));
            report.push('\n');
            report.push_str(&format!("{:>6} {:>12}\n", "Total", self.total_nodes()));
        }
        report
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;
