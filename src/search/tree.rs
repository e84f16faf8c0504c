use super::eval::Outcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize { self.0 }
}

/// One explored position. A node without children is either terminal or was answered from the table.
#[derive(Clone, Debug)]
pub struct EvalNode<M> {
    pub value: Outcome,
    pub depth: u32,
    pub children: Vec<(NodeId, M)>,
}

/// Nodes in depth-first creation order; a parent owns its children by id and
/// every subtree occupies a contiguous run starting at its root.
#[derive(Clone, Debug)]
pub struct SearchTree<M> {
    nodes: Vec<EvalNode<M>>,
}

// never empty: the root exists from construction
#[allow(clippy::len_without_is_empty)]
impl<M: Copy + PartialEq> SearchTree<M> {
    pub fn new() -> Self {
        Self { nodes: vec![EvalNode { value: Outcome::Draw, depth: 0, children: Vec::new() }] }
    }

    pub fn root(&self) -> NodeId { NodeId(0) }
    pub fn len(&self) -> usize { self.nodes.len() }
    pub fn node(&self, id: NodeId) -> &EvalNode<M> { &self.nodes[id.index()] }
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> { (0..self.nodes.len()).map(NodeId) }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut EvalNode<M> { &mut self.nodes[id.index()] }

    /// Appends a child one ply below `parent`, reached by `mv`.
    pub(crate) fn add_child(&mut self, parent: NodeId, mv: M) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.index()].depth + 1;
        self.nodes.push(EvalNode { value: Outcome::Draw, depth, children: Vec::new() });
        self.nodes[parent.index()].children.push((id, mv));
        id
    }

    pub fn find_move(&self, id: NodeId, mv: M) -> Option<NodeId> {
        self.node(id).children.iter().find(|(_, m)| *m == mv).map(|&(child, _)| child)
    }

    /// Nodes in the subtree rooted at `id`, itself included.
    pub fn count_subtree(&self, id: NodeId) -> usize {
        let mut count = 0;
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            count += 1;
            stack.extend(self.node(n).children.iter().map(|&(c, _)| c));
        }
        count
    }

    pub fn max_depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }
}

impl<M: Copy + PartialEq> Default for SearchTree<M> {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_are_one_ply_deeper() {
        let mut t: SearchTree<u8> = SearchTree::new();
        let root = t.root();
        let a = t.add_child(root, 1);
        let b = t.add_child(a, 2);
        let c = t.add_child(root, 3);
        assert_eq!(t.node(b).depth, 2);
        assert_eq!(t.node(c).depth, 1);
        assert_eq!(t.find_move(root, 3), Some(c));
        assert_eq!(t.find_move(root, 2), None);
        assert_eq!(t.count_subtree(root), 4);
        assert_eq!(t.count_subtree(a), 2);
        assert_eq!(t.max_depth(), 2);
    }

    #[test]
    fn ids_follow_creation_order() {
        let mut t: SearchTree<u8> = SearchTree::new();
        assert_eq!(t.len(), 1);
        assert_eq!(t.node_ids().collect::<Vec<_>>(), vec![t.root()]);
        let root = t.root();
        let a = t.add_child(root, 1);
        let b = t.add_child(a, 2);
        let c = t.add_child(root, 3);
        assert_eq!(t.node_ids().collect::<Vec<_>>(), vec![root, a, b, c]);
        assert_eq!(t.node_ids().map(NodeId::index).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }
}
