//! Inter-module dependency graph and publish ordering.
//!
//! Modules are published dependencies first so that a consumer never sees a
//! dependent on a repository before the modules it references. Uses
//! `petgraph` for cycle detection and topological sorting.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::BTreeMap;

use quay_util::errors::QuayError;

use crate::manifest::Manifest;
use crate::module::ModuleCoordinate;

/// Module graph of a workspace, with edges pointing from dependency to dependent.
#[derive(Debug)]
pub struct ModuleGraph {
    graph: DiGraph<String, ()>,
    indices: BTreeMap<String, NodeIndex>,
}

impl ModuleGraph {
    /// Build the graph from a manifest, rejecting unknown dependency names
    /// and self-dependencies.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self, QuayError> {
        let mut graph = DiGraph::new();
        let mut indices = BTreeMap::new();
        for name in manifest.modules.keys() {
            indices.insert(name.clone(), graph.add_node(name.clone()));
        }

        for (name, entry) in &manifest.modules {
            let dependent = indices[name];
            for dep in &entry.dependencies {
                if dep == name {
                    return Err(QuayError::configuration(format!(
                        "module '{name}' depends on itself"
                    )));
                }
                let Some(&dependency) = indices.get(dep) else {
                    return Err(QuayError::configuration(format!(
                        "module '{name}' depends on unknown module '{dep}'"
                    )));
                };
                graph.update_edge(dependency, dependent, ());
            }
        }

        Ok(Self { graph, indices })
    }

    /// Module names in publish order (dependencies first).
    ///
    /// Ties are broken by name so the order is stable across runs.
    pub fn publish_order(&self) -> Result<Vec<String>, QuayError> {
        toposort(&self.graph, None).map_err(|cycle| {
            QuayError::configuration(format!(
                "module dependency cycle involving '{}'",
                self.graph[cycle.node_id()]
            ))
        })?;

        // Kahn's algorithm over a sorted ready set for a deterministic order.
        let mut in_degree: BTreeMap<&str, usize> = self
            .indices
            .iter()
            .map(|(name, &idx)| {
                let n = self
                    .graph
                    .neighbors_directed(idx, petgraph::Direction::Incoming)
                    .count();
                (name.as_str(), n)
            })
            .collect();
        let mut order = Vec::with_capacity(self.indices.len());
        while let Some(next) = in_degree
            .iter()
            .find(|(_, &n)| n == 0)
            .map(|(name, _)| *name)
        {
            in_degree.remove(next);
            for dependent in self.graph.neighbors(self.indices[next]) {
                if let Some(n) = in_degree.get_mut(self.graph[dependent].as_str()) {
                    *n -= 1;
                }
            }
            order.push(next.to_string());
        }
        Ok(order)
    }

    /// Direct dependencies of a module, sorted by name.
    pub fn dependencies_of(&self, name: &str) -> Vec<&str> {
        let Some(&idx) = self.indices.get(name) else {
            return Vec::new();
        };
        let mut deps: Vec<&str> = self
            .graph
            .neighbors_directed(idx, petgraph::Direction::Incoming)
            .map(|i| self.graph[i].as_str())
            .collect();
        deps.sort_unstable();
        deps
    }

    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Published coordinates of a module's direct dependencies.
pub fn dependency_coordinates(
    manifest: &Manifest,
    graph: &ModuleGraph,
    name: &str,
) -> Vec<ModuleCoordinate> {
    graph
        .dependencies_of(name)
        .into_iter()
        .map(|dep| ModuleCoordinate {
            group_id: manifest.group(dep).to_string(),
            artifact_id: manifest.artifact_id(dep),
            version: manifest.version(dep).to_string(),
        })
        .collect()
}
