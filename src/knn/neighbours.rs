//! Describes an outgoing edge from a node and the neighbourhood of a node as the
//! sorted list of its edges, and the brute force k-nn ranking producing it.

use std::cmp::Ordering;

use num_traits::Float;

use super::distance::Distance;
use crate::dataset::{Dataset, NodeIdx};
use crate::error::DimError;

/// an OutEdge gives the destination node and weight (distance) of edge.
/// Two edges are equal only if they have the same destination and weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutEdge<F> {
    pub node: NodeIdx,
    pub weight: F,
} // end of struct OutEdge<F>

impl<F> OutEdge<F> {
    pub fn new(node: NodeIdx, weight: F) -> Self {
        OutEdge { node, weight }
    }
}

/// The k+1 nearest points of a node, sorted by increasing distance.
/// The node itself is at position 0.
#[derive(Clone, Debug)]
pub struct NeighbourList<F> {
    node: NodeIdx,
    edges: Vec<OutEdge<F>>,
}

impl<F: Float> NeighbourList<F> {
    /// node the list was computed for
    pub fn get_node(&self) -> NodeIdx {
        self.node
    }

    pub fn get_edges(&self) -> &[OutEdge<F>] {
        &self.edges
    }

    /// number of edges, k+1
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// indexes of the nodes in the list, in increasing distance
    pub fn get_nodes(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        self.edges.iter().map(|e| e.node)
    }
} // end of impl NeighbourList

/// Returns the knbn+1 points nearest to node (node included) sorted by increasing distance
/// computed on the first dim coordinates.
///
/// Ties are broken by keeping node itself first, then by increasing index.
/// So node is at position 0 even if the dataset contains duplicates of it.
pub fn knn<F, D>(
    node: NodeIdx,
    data: &Dataset<F>,
    dim: usize,
    knbn: usize,
    distance: &D,
) -> Result<NeighbourList<F>, DimError>
where
    F: Float,
    D: Distance<F> + ?Sized,
{
    let nb_points = data.get_nb_points();
    if node >= nb_points {
        return Err(DimError::InvalidParameter(format!(
            "node {} out of dataset of size {}",
            node, nb_points
        )));
    }
    if knbn + 1 > nb_points {
        return Err(DimError::TooManyNeighbours {
            asked: knbn + 1,
            nb_points,
        });
    }
    data.check_dim(dim)?;
    //
    let query = data.get_point(node);
    let mut edges: Vec<OutEdge<F>> = data
        .get_points()
        .iter()
        .enumerate()
        .map(|(j, p)| OutEdge::new(j, distance.eval(query, p, dim)))
        .collect();
    // stable sort: equal distances keep index order once node itself is put first
    edges.sort_by(|a, b| {
        a.weight
            .partial_cmp(&b.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| (a.node != node).cmp(&(b.node != node)))
    });
    edges.truncate(knbn + 1);
    debug_assert_eq!(edges[0].node, node);
    //
    Ok(NeighbourList { node, edges })
} // end of knn

#[cfg(test)]
mod tests {

    use super::*;
    use crate::knn::distance::{DistL1, DistL2};

    fn line_data() -> Dataset<f64> {
        // points on a line at 0, 1, 2 ... 9
        Dataset::new((0..10).map(|i| vec![i as f64, 0.]).collect()).unwrap()
    }

    #[test]
    fn test_knn_sorted() {
        let data = line_data();
        let list = knn(4, &data, 2, 3, &DistL2).unwrap();
        assert_eq!(list.len(), 4);
        assert_eq!(list.get_node(), 4);
        let nodes: Vec<NodeIdx> = list.get_nodes().collect();
        // 3 and 5 are at equal distance, 3 comes first
        assert_eq!(nodes, vec![4, 3, 5, 2]);
        let edges = list.get_edges();
        for i in 1..edges.len() {
            assert!(edges[i - 1].weight <= edges[i].weight);
        }
        assert_eq!(edges[3].weight, 2.);
    }

    #[test]
    fn test_outedge_equality() {
        // same distance to different nodes are different edges
        let e3 = OutEdge::new(3, 1.);
        let e5 = OutEdge::new(5, 1.);
        assert_ne!(e3, e5);
        assert_eq!(e3, OutEdge::new(3, 1.));
        // in a neighbour list the two edges at distance 1 from node 4 are both kept
        let data = line_data();
        let list = knn(4, &data, 2, 2, &DistL2).unwrap();
        assert_eq!(list.get_edges(), &[OutEdge::new(4, 0.), e3, e5]);
    }

    #[test]
    fn test_knn_self_first_with_duplicates() {
        // node 3 duplicates node 0 and node 1
        let points = vec![
            vec![1f32, 1.],
            vec![1., 1.],
            vec![5., 5.],
            vec![1., 1.],
            vec![2., 1.],
        ];
        let data = Dataset::new(points).unwrap();
        let list = knn(3, &data, 2, 3, &DistL1).unwrap();
        let nodes: Vec<NodeIdx> = list.get_nodes().collect();
        assert_eq!(nodes, vec![3, 0, 1, 4]);
        assert_eq!(list.get_edges()[1].weight, 0.);
    }

    #[test]
    fn test_knn_restricted_dim() {
        // on first coordinate only, node 1 is nearest to 0
        let points = vec![vec![0f64, 0.], vec![0.1, 10.], vec![1., 0.]];
        let data = Dataset::new(points).unwrap();
        let list = knn(0, &data, 1, 1, &DistL2).unwrap();
        assert_eq!(list.get_nodes().collect::<Vec<_>>(), vec![0, 1]);
        let list = knn(0, &data, 2, 1, &DistL2).unwrap();
        assert_eq!(list.get_nodes().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_knn_whole_set() {
        let data = line_data();
        let list = knn(0, &data, 2, 9, &DistL2).unwrap();
        assert_eq!(list.get_nodes().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_knn_errors() {
        let data = line_data();
        assert_eq!(
            knn(0, &data, 2, 10, &DistL2).err(),
            Some(DimError::TooManyNeighbours {
                asked: 11,
                nb_points: 10
            })
        );
        assert!(matches!(
            knn(0, &data, 3, 2, &DistL2),
            Err(DimError::DimensionTooLarge { .. })
        ));
        assert!(matches!(
            knn(10, &data, 2, 2, &DistL2),
            Err(DimError::InvalidParameter(_))
        ));
    }
} // end of mod tests
