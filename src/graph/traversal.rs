//! Graph traversal algorithms (DFS and BFS).

use std::collections::VecDeque;

use super::WeightedGraph;

impl WeightedGraph {
    /// Depth-first traversal from `start`.
    ///
    /// Returns an empty string if `start` is not in the graph. Visited flags
    /// are left set on every node reached; call
    /// [`reset_visited`](Self::reset_visited) before traversing again.
    pub fn depth_first(&mut self, start: char) -> String {
        let Some(index) = self.find_node(start) else {
            log::debug!("depth-first start '{}' not found", start);
            return String::new();
        };

        let mut out = format!("Depth first traversal starting at {}\n{} : ", start, start);
        let mut stack: Vec<usize> = vec![index];
        self.nodes[index].visited = true;

        while let Some(current) = stack.pop() {
            let next = self
                .adjacency(current)
                .map(|e| e.target)
                .find(|&t| !self.nodes[t].visited);

            if let Some(target) = next {
                // Resume `current` after the branch below it is exhausted.
                stack.push(current);
                stack.push(target);
                self.nodes[target].visited = true;
                out.push(self.nodes[target].label);
                out.push(' ');
            }
        }

        log::trace!("depth-first from '{}': {:?}", start, out);
        out
    }

    /// Breadth-first traversal from `start`.
    ///
    /// Returns an empty string if `start` is not in the graph. All visited
    /// flags are cleared before returning.
    pub fn breadth_first(&mut self, start: char) -> String {
        let Some(index) = self.find_node(start) else {
            log::debug!("breadth-first start '{}' not found", start);
            return String::new();
        };

        let mut out = format!("Breadth first traversal starting at {}\n{} : ", start, start);
        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(index);
        self.nodes[index].visited = true;

        while let Some(current) = queue.pop_front() {
            let targets: Vec<usize> = self.adjacency(current).map(|e| e.target).collect();
            for target in targets {
                if self.nodes[target].visited {
                    continue;
                }
                self.nodes[target].visited = true;
                out.push(self.nodes[target].label);
                out.push(' ');
                queue.push_back(target);
            }
        }

        self.reset_visited();
        out.push('\n');
        log::trace!("breadth-first from '{}': {:?}", start, out);
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::GraphBuilder;

    #[test]
    fn test_depth_first_on_path() {
        let mut graph = GraphBuilder::new()
            .nodes("ABC".chars())
            .edge('A', 'B', 1)
            .edge('B', 'C', 1)
            .build()
            .unwrap();
        assert_eq!(
            graph.depth_first('A'),
            "Depth first traversal starting at A\nA : B C "
        );
    }

    #[test]
    fn test_breadth_first_on_star() {
        let mut graph = GraphBuilder::new()
            .nodes("ABCD".chars())
            .edge('A', 'B', 1)
            .edge('A', 'C', 1)
            .edge('A', 'D', 1)
            .build()
            .unwrap();
        assert_eq!(
            graph.breadth_first('A'),
            "Breadth first traversal starting at A\nA : D C B \n"
        );
    }

    #[test]
    fn test_isolated_start() {
        let mut graph = GraphBuilder::new().nodes("AB".chars()).build().unwrap();
        assert_eq!(
            graph.breadth_first('A'),
            "Breadth first traversal starting at A\nA : \n"
        );
        assert_eq!(
            graph.depth_first('B'),
            "Depth first traversal starting at B\nB : "
        );
    }
}
