use crate::value::Value;
use crate::value_data::NodeId;
use log::trace;
use std::collections::HashSet;

/// Builds a topological order of every node reachable from `root`.
///
/// Children always precede their parents in the returned list, and `root` is
/// last. A node reachable through several paths (a shared subexpression) is
/// listed exactly once, keyed by its [`NodeId`].
///
/// The traversal is an explicit-stack post-order DFS visiting children in
/// operand order, so it yields the same order as the recursive formulation
/// without being bounded by the call stack on long chains.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut sorted_list: Vec<Value> = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    // (node, index of the next child to visit)
    let mut stack: Vec<(Value, usize)> = Vec::new();

    visited.insert(root.id());
    stack.push((root.clone(), 0));

    while let Some(top) = stack.last_mut() {
        let next_child = top.0.child_at(top.1);
        match next_child {
            Some(child) => {
                top.1 += 1;
                if visited.insert(child.id()) {
                    trace!("[topological_sort] visiting {:?}", child.id());
                    stack.push((child, 0));
                }
            }
            None => {
                if let Some((node, _)) = stack.pop() {
                    trace!("[topological_sort] adding {:?} to sorted list", node.id());
                    sorted_list.push(node);
                }
            }
        }
    }
    sorted_list
}
