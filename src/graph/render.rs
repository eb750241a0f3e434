//! Text listing of a graph, one line per node

use super::store::GraphStore;
use std::fmt;

/// Displays a store as a header line plus `Node <i> (<value>) -> <targets>`
/// lines. Each target is followed by a single space.
pub struct Listing<'a>(pub &'a GraphStore);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph Nodes and Adjacency Lists:")?;
        for entry in self.0.nodes() {
            write!(f, "Node {} ({}) -> ", entry.index.as_usize(), entry.value)?;
            for target in entry.targets {
                write!(f, "{} ", target.as_usize())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl GraphStore {
    pub fn listing(&self) -> Listing<'_> {
        Listing(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_format() {
        let mut store = GraphStore::new();
        let (root, _) = store.add_node(1.23, None);
        let (child, _) = store.add_node(4.56, Some(root));
        store.add_edge(root, child).unwrap();

        let expected = "Graph Nodes and Adjacency Lists:\n\
                        Node 0 (1.23) -> 1 1 \n\
                        Node 1 (4.56) -> \n";
        assert_eq!(store.listing().to_string(), expected);
    }

    #[test]
    fn test_listing_empty() {
        let store = GraphStore::new();
        assert_eq!(
            Listing(&store).to_string(),
            "Graph Nodes and Adjacency Lists:\n"
        );
    }
}
