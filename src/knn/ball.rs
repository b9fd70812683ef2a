//! Balls in the k-nn graph.
//!
//! The ball of radius 1 around a node is its neighbour list: the node and its knbn nearest
//! neighbours, so it has exactly knbn+1 members.
//! The ball of radius 2 is the union of the balls of radius 1 of all members of the ball of radius 1.
//! It is exactly two levels deep, not a transitive closure.
//!
//! Membership is always tested on node indexes, never on coordinates.

use indexmap::IndexSet;
use num_traits::Float;

use super::kgraph::KGraph;
use crate::dataset::NodeIdx;

impl<F> KGraph<F>
where
    F: Float + Send + Sync,
{
    /// indexes of the ball of radius 1 around node, in increasing distance
    pub fn get_ball_1(&self, node: NodeIdx) -> IndexSet<NodeIdx> {
        self.get_neighbours(node).get_nodes().collect()
    }

    /// Number of distinct nodes in the ball of radius 2 around node.
    /// The result is in \[knbn+1, nb_nodes\].
    pub fn ball_volume_2(&self, node: NodeIdx) -> usize {
        // the accumulator is seeded with the ball of radius 1, already knbn+1 nodes
        let mut ball = self.get_ball_1(node);
        let core_size = ball.len();
        for i in 0..core_size {
            let member = ball[i];
            ball.extend(self.get_neighbours(member).get_nodes());
        }
        log::trace!(
            "ball_volume_2 node : {}, volume : {}",
            node,
            ball.len()
        );
        ball.len()
    } // end of ball_volume_2

    /// number of nodes common to the balls of radius 1 of node1 and node2
    pub fn intersection_count(&self, node1: NodeIdx, node2: NodeIdx) -> usize {
        let ball1 = self.get_ball_1(node1);
        self.get_neighbours(node2)
            .get_nodes()
            .filter(|n| ball1.contains(n))
            .count()
    } // end of intersection_count

    /// Minimum over the members m of the ball of radius 1 around node of intersection_count(node, m).
    /// node itself is among the candidates, it contributes knbn+1.
    pub fn min_intersection(&self, node: NodeIdx) -> usize {
        let ball = self.get_ball_1(node);
        let min = ball
            .iter()
            .map(|&member| {
                self.get_neighbours(member)
                    .get_nodes()
                    .filter(|n| ball.contains(n))
                    .count()
            })
            .min()
            .unwrap_or(0);
        log::trace!("min_intersection node : {}, min : {}", node, min);
        min
    } // end of min_intersection
} // end of impl block for KGraph

// end of mod tests
