use log::debug;

use super::*;
use crate::{
    algo::{DfsStep, Traversal},
    commands::{BoxedCommand, CommandHistory},
    prelude::*,
};

/// Vertex color while the vertex is on the DFS stack or in the BFS queue
pub const ACTIVE_VERTEX: &str = "#ffcc66";
/// Vertex color after DFS finished the vertex
pub const FINISHED_VERTEX: &str = "#99cc99";
/// Color of traversed tree edges
pub const TREE_EDGE: &str = "red";

fn active_vertex(u: Node) -> BoxedCommand<GraphDisplay> {
    Box::new(SetVertexStyle::new(u, Some(VertexStyle::colored(ACTIVE_VERTEX))))
}

fn finished_vertex(u: Node) -> BoxedCommand<GraphDisplay> {
    Box::new(SetVertexStyle::new(u, Some(VertexStyle::colored(FINISHED_VERTEX))))
}

fn tree_edge(u: Node, v: Node) -> BoxedCommand<GraphDisplay> {
    Box::new(SetEdgeStyle::new(
        (u, v),
        Some(EdgeStyle::colored(TREE_EDGE).with_width(2)),
    ))
}

/// Records a DFS from `start` as one step per trace entry.
///
/// The first step marks `start` as active. Descending along `(u, v)` marks the edge as tree
/// edge and `v` as active. Returning to a parent marks the child just left as finished. A last
/// step finishes `start` itself. Every step also sets the caption of the display.
///
/// The history is applied to a [`GraphDisplay`] created for the same graph.
/// ** Panics if `start >= n` **
pub fn dfs_animation<G>(graph: &G, start: Node) -> CommandHistory<GraphDisplay>
where
    G: Traversal,
{
    let mut history = CommandHistory::new();
    history.push_group(
        "start",
        [
            active_vertex(start),
            Box::new(SetCaption::new(format!("start at {start}"))) as BoxedCommand<GraphDisplay>,
        ],
    );

    // vertices descended into and not yet finished
    let mut open = Vec::new();
    for step in graph.dfs(start) {
        match step {
            DfsStep::Descend(u, v) => {
                open.push(v);
                history.push_group(
                    "descend",
                    [
                        tree_edge(u, v),
                        active_vertex(v),
                        Box::new(SetCaption::new(format!("visit {v} from {u}"))),
                    ],
                );
            }
            DfsStep::Return(parent) => {
                let Some(child) = open.pop() else {
                    continue;
                };
                history.push_group(
                    "return",
                    [
                        finished_vertex(child),
                        Box::new(SetCaption::new(format!("return from {child} to {parent}"))),
                    ],
                );
            }
        }
    }

    history.push_group(
        "finish",
        [
            finished_vertex(start),
            Box::new(SetCaption::new(format!("finished {start}"))) as BoxedCommand<GraphDisplay>,
        ],
    );

    debug!("dfs_animation: {} steps from {start}", history.len());
    history
}

/// Records a BFS from `start`: one step per discovered vertex, marking the discovery edge and
/// the vertex
/// ** Panics if `start >= n` **
pub fn bfs_animation<G>(graph: &G, start: Node) -> CommandHistory<GraphDisplay>
where
    G: Traversal,
{
    let mut history = CommandHistory::new();
    history.push(SetVertexStyle::new(
        start,
        Some(VertexStyle::colored(ACTIVE_VERTEX)),
    ));

    for Edge(u, v) in graph.bfs(start) {
        history.push_group("discover", [tree_edge(u, v), active_vertex(v)]);
    }

    debug!("bfs_animation: {} steps from {start}", history.len());
    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn example() -> Graph {
        Graph::from_edges(4, false, [(0, 1), (1, 2), (0, 3)])
    }

    #[test]
    fn dfs_steps() {
        let graph = example();
        let mut display = GraphDisplay::new(&graph);
        let mut history = dfs_animation(&graph, 0);

        // start + 3 descends + 3 returns + finish
        assert_eq!(history.len(), 8);

        history.goto_command(&mut display, 3);
        assert_eq!(display.caption(), "visit 2 from 1");
        assert_eq!(
            display.vertex_style(2),
            Some(&VertexStyle::colored(ACTIVE_VERTEX))
        );
        assert!(display.edge_style(Edge(2, 1)).is_some());
        assert!(display.edge_style(Edge(0, 3)).is_none());

        history.next(&mut display, false);
        assert_eq!(display.caption(), "return from 2 to 1");
        assert_eq!(
            display.vertex_style(2),
            Some(&VertexStyle::colored(FINISHED_VERTEX))
        );
        assert_eq!(
            display.vertex_style(1),
            Some(&VertexStyle::colored(ACTIVE_VERTEX))
        );

        history.next(&mut display, false);
        assert_eq!(display.caption(), "return from 1 to 0");
        assert_eq!(
            display.vertex_style(1),
            Some(&VertexStyle::colored(FINISHED_VERTEX))
        );
        assert_eq!(
            display.vertex_style(0),
            Some(&VertexStyle::colored(ACTIVE_VERTEX))
        );

        history.run(&mut display);
        assert_eq!(display.caption(), "finished 0");
        assert!(
            graph
                .vertices()
                .all(|u| display.vertex_style(u) == Some(&VertexStyle::colored(FINISHED_VERTEX)))
        );

        history.reset(&mut display);
        assert_eq!(display.scene(), GraphDisplay::new(&graph).scene());
    }

    #[test]
    fn dfs_finishes_only_reached_vertices() {
        // 3 and 4 are not reachable from 0
        let graph = Graph::from_edges(5, true, [(0, 1), (0, 2), (3, 4)]);
        let mut display = GraphDisplay::new(&graph);
        let mut history = dfs_animation(&graph, 0);
        assert_eq!(history.len(), 6);

        history.run(&mut display);
        let finished = graph
            .vertices()
            .filter(|&u| display.vertex_style(u) == Some(&VertexStyle::colored(FINISHED_VERTEX)))
            .collect_vec();
        assert_eq!(finished, vec![0, 1, 2]);
        assert!(display.vertex_style(3).is_none());
    }

    #[test]
    fn animation_colors_differ_from_theme() {
        let theme = Theme::default();
        for color in [ACTIVE_VERTEX, FINISHED_VERTEX] {
            for style in [
                &theme.default_vertex,
                &theme.focus_vertex,
                &theme.selected_vertex,
            ] {
                assert_ne!(style.color.as_ref().map(Color::as_str), Some(color));
            }
        }
        assert_ne!(ACTIVE_VERTEX, FINISHED_VERTEX);
    }

    #[test]
    fn bfs_steps() {
        let graph = Graph::from_edges(6, false, [(0, 1), (0, 2), (1, 3), (2, 4), (2, 5)]);
        let mut display = GraphDisplay::new(&graph);
        let mut history = bfs_animation(&graph, 0);
        assert_eq!(history.len(), 6);

        history.run(&mut display);
        assert_eq!(display.scene().edge_styles.len(), 5);
        assert!(graph.vertices().all(|u| display.vertex_style(u).is_some()));

        history.goto_command(&mut display, 1);
        assert!(display.scene().edge_styles.is_empty());
        assert!(display.vertex_style(0).is_some());
    }
}
