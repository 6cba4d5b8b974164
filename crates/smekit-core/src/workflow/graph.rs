//! Dependency graph over workflow tasks.
//!
//! Design:
//! - Forward edges: predecessor -> tasks that wait for it (successors)
//! - Reverse edges: successor -> tasks it waits for (predecessors)
//! - Invariant: edges and reverse_edges are kept in sync
//! - Invariant: the graph is acyclic after every public call
//!
//! All maps are ordered by `TaskId`, so every traversal visits nodes in
//! ascending ID order and results are reproducible.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{IdSequence, Result, SmeError, Task, TaskId, ids};

/// Longest-duration chain through the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalPath {
    pub path: Vec<Task>,
    pub total_days: u64,
}

#[derive(Debug, Default)]
pub struct DependencyGraph {
    tasks: BTreeMap<TaskId, Task>,

    /// Forward edges: task -> tasks that must wait for it.
    edges: BTreeMap<TaskId, BTreeSet<TaskId>>,

    /// Reverse edges: task -> tasks it waits for.
    reverse_edges: BTreeMap<TaskId, BTreeSet<TaskId>>,

    ids: IdSequence<ids::Task>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_task(&mut self, name: impl Into<String>, duration_days: u32) -> &Task {
        let id = self.ids.allocate();
        let task = Task::new(id, name, duration_days);
        debug!(task_id = %id, name = %task.name, duration_days, "task added");
        self.tasks.entry(id).or_insert(task)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Record that `successor` cannot start until `predecessor` finishes.
    ///
    /// The edge is added tentatively and the whole graph re-checked; if it
    /// closes a cycle it is rolled back and `CycleDetected` is returned, so
    /// the edge set is exactly as before the call. Re-adding an existing edge
    /// succeeds without change.
    pub fn add_dependency(&mut self, successor: TaskId, predecessor: TaskId) -> Result<()> {
        for id in [successor, predecessor] {
            if !self.tasks.contains_key(&id) {
                return Err(SmeError::not_found(id));
            }
        }

        if !self.insert_edge(predecessor, successor) {
            return Ok(());
        }
        if self.topological_ids().is_none() {
            self.remove_edge(predecessor, successor);
            warn!(%successor, %predecessor, "dependency rejected: cycle");
            return Err(SmeError::CycleDetected);
        }
        debug!(%successor, %predecessor, "dependency added");
        Ok(())
    }

    /// Kahn's algorithm. The frontier always yields the lowest ready ID.
    pub fn topological_order(&self) -> Result<Vec<&Task>> {
        let order = self.topological_ids().ok_or(SmeError::CycleDetected)?;
        Ok(order.into_iter().filter_map(|id| self.tasks.get(&id)).collect())
    }

    /// Longest path by total duration.
    ///
    /// `best[v]` starts at v's own duration and is relaxed along every edge
    /// in topological order. The endpoint is the node with the highest
    /// `best` (lowest ID on ties); the path is rebuilt from predecessor links.
    pub fn critical_path(&self) -> Result<CriticalPath> {
        let order = self.topological_ids().ok_or(SmeError::CycleDetected)?;

        let mut best: BTreeMap<TaskId, u64> = self
            .tasks
            .iter()
            .map(|(&id, task)| (id, u64::from(task.duration_days)))
            .collect();
        let mut prev: BTreeMap<TaskId, TaskId> = BTreeMap::new();

        for u in &order {
            let reach = best[u];
            for v in self.waiting_on(*u) {
                let candidate = reach + u64::from(self.tasks[&v].duration_days);
                if candidate > best[&v] {
                    best.insert(v, candidate);
                    prev.insert(v, *u);
                }
            }
        }

        let mut end: Option<(TaskId, u64)> = None;
        for (&id, &total) in &best {
            if end.is_none_or(|(_, top)| total > top) {
                end = Some((id, total));
            }
        }
        let Some((end, total_days)) = end else {
            return Ok(CriticalPath {
                path: Vec::new(),
                total_days: 0,
            });
        };

        let mut path = vec![self.tasks[&end].clone()];
        let mut current = end;
        while let Some(&p) = prev.get(&current) {
            path.push(self.tasks[&p].clone());
            current = p;
        }
        path.reverse();

        Ok(CriticalPath { path, total_days })
    }

    /// Tasks that must finish before `task` can start.
    pub fn predecessors(&self, task: TaskId) -> Vec<TaskId> {
        self.reverse_edges
            .get(&task)
            .map(|deps| deps.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Tasks waiting for `task`.
    pub fn successors(&self, task: TaskId) -> Vec<TaskId> {
        self.edges
            .get(&task)
            .map(|waiting| waiting.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn has_edge(&self, predecessor: TaskId, successor: TaskId) -> bool {
        self.edges
            .get(&predecessor)
            .is_some_and(|waiting| waiting.contains(&successor))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn waiting_on(&self, task: TaskId) -> impl Iterator<Item = TaskId> + '_ {
        self.edges.get(&task).into_iter().flatten().copied()
    }

    /// `None` when the edges contain a cycle.
    fn topological_ids(&self) -> Option<Vec<TaskId>> {
        let mut in_degree: BTreeMap<TaskId, usize> = self
            .tasks
            .keys()
            .map(|&id| (id, self.reverse_edges.get(&id).map_or(0, BTreeSet::len)))
            .collect();

        let mut frontier: BTreeSet<TaskId> = in_degree
            .iter()
            .filter(|&(_, &deg)| deg == 0)
            .map(|(&id, _)| id)
            .collect();

        let mut order = Vec::with_capacity(self.tasks.len());
        while let Some(u) = frontier.pop_first() {
            order.push(u);
            for v in self.waiting_on(u) {
                if let Some(deg) = in_degree.get_mut(&v) {
                    *deg -= 1;
                    if *deg == 0 {
                        frontier.insert(v);
                    }
                }
            }
        }

        (order.len() == self.tasks.len()).then_some(order)
    }

    /// Returns `false` if the edge already existed.
    fn insert_edge(&mut self, predecessor: TaskId, successor: TaskId) -> bool {
        let added = self.edges.entry(predecessor).or_default().insert(successor);
        self.reverse_edges
            .entry(successor)
            .or_default()
            .insert(predecessor);
        added
    }

    fn remove_edge(&mut self, predecessor: TaskId, successor: TaskId) {
        if let Entry::Occupied(mut e) = self.edges.entry(predecessor) {
            e.get_mut().remove(&successor);
            if e.get().is_empty() {
                e.remove_entry();
            }
        }
        if let Entry::Occupied(mut e) = self.reverse_edges.entry(successor) {
            e.get_mut().remove(&predecessor);
            if e.get().is_empty() {
                e.remove_entry();
            }
        }
    }
}
