use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    fmt::{Debug, Formatter},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    #[error("Cycle detected in dependency graph, from {:?}", .0)]
    CycleDetected(DepRoute<T>),
    #[error("Duplicate edge detected in dependency graph, from {:?}", .0)]
    DuplicateEdge(DepRoute<T>),
}

pub struct DepRoute<T> {
    // first is the start node, last is the end node
    route: Vec<T>,
}

impl<T> DepRoute<T> {
    pub fn nodes(&self) -> &[T] {
        &self.route
    }
}

impl<T> Debug for DepRoute<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut nodes = self.route.iter();
        let Some(first) = nodes.next() else {
            return write!(f, "[]");
        };
        write!(f, "{first:?}")?;
        for node in nodes {
            write!(f, " -> {node:?}")?;
        }
        Ok(())
    }
}

/// Directed dependency graph. An edge `from -> to` means `to` depends on `from`.
#[derive(Debug)]
pub struct Graph<Node, Edge = ()>
where
    Node: Debug + PartialEq + Copy + Ord,
    Edge: Debug + PartialEq,
{
    routes: Vec<(Node, Edge, Node)>,

    route_cache: BTreeMap<Node, BTreeSet<Node>>,
}

impl<Node, Edge> Default for Graph<Node, Edge>
where
    Node: Debug + PartialEq + Copy + Ord,
    Edge: Debug + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Node, Edge> Graph<Node, Edge>
where
    Node: Debug + PartialEq + Copy + Ord,
    Edge: Debug + PartialEq,
{
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            route_cache: BTreeMap::new(),
        }
    }

    pub fn route_to(&mut self, from: Node, to: Node, via: Edge) {
        self.routes.push((from, via, to));
        self.route_cache.clear();
    }

    /// Orders every node so that each one comes after all the nodes it depends on.
    ///
    /// Ties are broken by `Ord` so the result is deterministic.
    pub fn topology_sort(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        let mut in_degree = BTreeMap::<Node, usize>::new();
        for (from, _via, to) in &self.routes {
            in_degree.entry(*from).or_insert(0);
            *in_degree.entry(*to).or_insert(0) += 1;
        }

        let mut ready: BTreeSet<Node> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(node, _)| *node)
            .collect();
        let mut ordered = Vec::with_capacity(in_degree.len());

        while let Some(node) = ready.pop_first() {
            in_degree.remove(&node);
            ordered.push(node);

            for connected in self.direct_connected_nodes(node)? {
                if let Some(degree) = in_degree.get_mut(&connected) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.insert(connected);
                    }
                }
            }
        }

        if in_degree.is_empty() {
            return Ok(ordered);
        }

        let remaining: Vec<Node> = in_degree.keys().copied().collect();
        let route = self.find_cycle(&remaining).unwrap_or(remaining);
        Err(TopologyError::CycleDetected(DepRoute { route }))
    }

    fn find_cycle(&self, nodes: &[Node]) -> Option<Vec<Node>> {
        let mut visited = BTreeSet::new();
        let mut path: Vec<Node> = Vec::new();
        let mut stack: Vec<(Node, std::vec::IntoIter<Node>)> = Vec::new();

        let neighbours = |node: Node| {
            self.direct_connected_nodes(node)
                .unwrap_or_default()
                .into_iter()
                .filter(|n| nodes.contains(n))
                .collect::<Vec<_>>()
                .into_iter()
        };

        for &start in nodes {
            if !visited.insert(start) {
                continue;
            }
            stack.push((start, neighbours(start)));
            path.push(start);

            while let Some((_, next)) = stack.last_mut() {
                match next.next() {
                    Some(neighbour) if path.contains(&neighbour) => {
                        let pos = path.iter().position(|&n| n == neighbour)?;
                        let mut cycle = path.split_off(pos);
                        cycle.push(neighbour);
                        return Some(cycle);
                    }
                    Some(neighbour) => {
                        if visited.insert(neighbour) {
                            stack.push((neighbour, neighbours(neighbour)));
                            path.push(neighbour);
                        }
                    }
                    None => {
                        stack.pop();
                        path.pop();
                    }
                }
            }
        }
        None
    }

    /// Every node that depends on `node`, directly or transitively.
    pub fn connected(&mut self, node: Node) -> impl Iterator<Item = &Node> {
        if !self.route_cache.contains_key(&node) {
            let collected = self.connected_nodes(node);
            self.route_cache.insert(node, collected);
        }
        self.route_cache.get(&node).into_iter().flatten()
    }

    fn direct_connected_nodes(&self, node: Node) -> Result<BTreeSet<Node>, TopologyError<Node>> {
        let mut collected = BTreeSet::new();

        for (from, _via, to) in &self.routes {
            if *from == node && !collected.insert(*to) {
                return Err(TopologyError::DuplicateEdge(DepRoute {
                    route: vec![node, *to],
                }));
            }
        }

        Ok(collected)
    }

    fn connected_nodes(&self, node: Node) -> BTreeSet<Node> {
        let mut collected = BTreeSet::new();
        let mut queue = VecDeque::from([node]);

        while let Some(current) = queue.pop_front() {
            for (from, _via, to) in &self.routes {
                // the collected check also keeps a cyclic graph from looping forever
                if *from == current && collected.insert(*to) {
                    queue.push_back(*to);
                }
            }
        }

        collected
    }
}
