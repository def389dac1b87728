use std::fmt::Debug;

use fxhash::FxHashMap;

use super::*;
use crate::{commands::Command, prelude::*};

/// Everything a renderer needs to draw a graph, apart from vertex positions.
///
/// Edge keys are normalized for undirected graphs, so `(u, v)` and `(v, u)` address the same
/// label and style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphScene {
    pub directed: bool,
    pub vertex_labels: Vec<Option<String>>,
    pub vertex_styles: Vec<Option<VertexStyle>>,
    pub edge_labels: FxHashMap<Edge, String>,
    pub edge_styles: FxHashMap<Edge, EdgeStyle>,
    pub focus_vertex: Option<Node>,
    pub focus_edge: Option<Edge>,
    pub selected_vertices: Vec<Node>,
    pub selected_edges: Vec<Edge>,
    /// Free text shown next to the graph, e.g. a description of the current step
    pub caption: String,
    pub theme: Theme,
}

/// Presentation state of a graph together with its render target
#[derive(Default)]
pub struct GraphDisplay {
    scene: GraphScene,
    target: Target<GraphScene>,
}

impl GraphDisplay {
    /// Creates a display without labels and styles for the nodes of `graph`
    pub fn new<G>(graph: &G) -> Self
    where
        G: GraphNodeOrder + GraphType,
    {
        let n = graph.len();
        Self {
            scene: GraphScene {
                directed: graph.is_directed(),
                vertex_labels: vec![None; n],
                vertex_styles: vec![None; n],
                ..Default::default()
            },
            target: Target::default(),
        }
    }

    /// Creates a display whose edges are labelled with their weights
    pub fn with_weight_labels<W>(graph: &WeightedGraph<W>) -> Self
    where
        W: Weight + std::fmt::Display,
    {
        let mut display = Self::new(graph);
        for WeightedEdge(w, u, v) in graph.weighted_edges() {
            display.set_edge_label(Edge(u, v), Some(w.to_string()));
        }
        display
    }

    /// Replaces the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.scene.theme = theme;
        self
    }

    /// Attaches the target notified by [`GraphDisplay::refresh`]
    pub fn set_target(&mut self, target: impl RenderTarget<GraphScene> + 'static) {
        self.target.set(Box::new(target));
    }

    pub fn scene(&self) -> &GraphScene {
        &self.scene
    }

    /// Renders the current scene unless `quick`
    pub fn refresh(&mut self, quick: bool) {
        self.target.refresh(&self.scene, quick);
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.scene.vertex_labels.len() as NumNodes
    }

    fn key(&self, edge: Edge) -> Edge {
        if self.scene.directed {
            edge
        } else {
            edge.normalized()
        }
    }

    pub fn vertex_label(&self, u: Node) -> Option<&str> {
        self.scene.vertex_labels[u as usize].as_deref()
    }

    /// Sets or removes the label of `u` and returns the previous one
    /// ** Panics if `u >= n` **
    pub fn set_vertex_label(&mut self, u: Node, label: Option<String>) -> Option<String> {
        std::mem::replace(&mut self.scene.vertex_labels[u as usize], label)
    }

    pub fn vertex_style(&self, u: Node) -> Option<&VertexStyle> {
        self.scene.vertex_styles[u as usize].as_ref()
    }

    /// Sets or removes the explicit style of `u` and returns the previous one
    /// ** Panics if `u >= n` **
    pub fn set_vertex_style(&mut self, u: Node, style: Option<VertexStyle>) -> Option<VertexStyle> {
        std::mem::replace(&mut self.scene.vertex_styles[u as usize], style)
    }

    pub fn edge_label(&self, edge: Edge) -> Option<&str> {
        self.scene.edge_labels.get(&self.key(edge)).map(String::as_str)
    }

    /// Sets or removes the label of `edge` and returns the previous one
    pub fn set_edge_label(&mut self, edge: Edge, label: Option<String>) -> Option<String> {
        let key = self.key(edge);
        match label {
            Some(label) => self.scene.edge_labels.insert(key, label),
            None => self.scene.edge_labels.remove(&key),
        }
    }

    pub fn edge_style(&self, edge: Edge) -> Option<&EdgeStyle> {
        self.scene.edge_styles.get(&self.key(edge))
    }

    /// Sets or removes the explicit style of `edge` and returns the previous one
    pub fn set_edge_style(&mut self, edge: Edge, style: Option<EdgeStyle>) -> Option<EdgeStyle> {
        let key = self.key(edge);
        match style {
            Some(style) => self.scene.edge_styles.insert(key, style),
            None => self.scene.edge_styles.remove(&key),
        }
    }

    /// Removes all explicit vertex and edge styles
    pub fn reset_all_styles(&mut self) {
        self.scene.vertex_styles.fill(None);
        self.scene.edge_styles.clear();
    }

    pub fn caption(&self) -> &str {
        &self.scene.caption
    }

    /// Replaces the caption and returns the previous one
    pub fn set_caption(&mut self, caption: String) -> String {
        std::mem::replace(&mut self.scene.caption, caption)
    }

    pub fn set_focus_vertex(&mut self, u: Option<Node>) {
        self.scene.focus_vertex = u;
    }

    pub fn set_focus_edge(&mut self, edge: Option<Edge>) {
        self.scene.focus_edge = edge.map(|e| self.key(e));
    }

    /// Makes `u` the only selected vertex
    pub fn select_vertex(&mut self, u: Node) {
        self.scene.selected_vertices = vec![u];
    }

    /// Adds `edge` to the selected edges or removes it if it is selected already
    pub fn toggle_edge_selection(&mut self, edge: Edge) {
        let key = self.key(edge);
        let selected = &mut self.scene.selected_edges;
        match selected.iter().position(|&e| e == key) {
            Some(i) => {
                selected.remove(i);
            }
            None => selected.push(key),
        }
    }

    pub fn clear_selection(&mut self) {
        self.scene.selected_vertices.clear();
        self.scene.selected_edges.clear();
    }

    /// Style a renderer should use for `u`: selection beats focus beats the explicit style,
    /// which beats the theme's default
    pub fn resolved_vertex_style(&self, u: Node) -> VertexStyle {
        let theme = &self.scene.theme;
        if self.scene.selected_vertices.contains(&u) {
            theme.selected_vertex.or(&theme.default_vertex)
        } else if self.scene.focus_vertex == Some(u) {
            theme.focus_vertex.or(&theme.default_vertex)
        } else {
            self.vertex_style(u)
                .map_or_else(|| theme.default_vertex.clone(), |s| s.or(&theme.default_vertex))
        }
    }

    /// Style a renderer should use for `edge`, with the same precedence as for vertices
    pub fn resolved_edge_style(&self, edge: Edge) -> EdgeStyle {
        let theme = &self.scene.theme;
        let key = self.key(edge);
        if self.scene.selected_edges.contains(&key) {
            theme.selected_edge.or(&theme.default_edge)
        } else if self.scene.focus_edge == Some(key) {
            theme.focus_edge.or(&theme.default_edge)
        } else {
            self.edge_style(key)
                .map_or_else(|| theme.default_edge.clone(), |s| s.or(&theme.default_edge))
        }
    }
}

impl Debug for GraphDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphDisplay")
            .field("scene", &self.scene)
            .field("has_target", &self.target.is_attached())
            .finish()
    }
}

/// Sets (or with `None` removes) the explicit style of a vertex
#[derive(Clone, Debug)]
pub struct SetVertexStyle {
    vertex: Node,
    style: Option<VertexStyle>,
    old: Option<VertexStyle>,
}

impl SetVertexStyle {
    pub fn new(vertex: Node, style: Option<VertexStyle>) -> Self {
        Self {
            vertex,
            style,
            old: None,
        }
    }
}

impl Command<GraphDisplay> for SetVertexStyle {
    fn apply(&mut self, display: &mut GraphDisplay, quick: bool) {
        self.old = display.set_vertex_style(self.vertex, self.style.clone());
        display.refresh(quick);
    }

    fn revert(&mut self, display: &mut GraphDisplay, quick: bool) {
        display.set_vertex_style(self.vertex, self.old.take());
        display.refresh(quick);
    }

    fn name(&self) -> &str {
        "set vertex style"
    }
}

/// Sets (or with `None` removes) the explicit style of an edge
#[derive(Clone, Debug)]
pub struct SetEdgeStyle {
    edge: Edge,
    style: Option<EdgeStyle>,
    old: Option<EdgeStyle>,
}

impl SetEdgeStyle {
    pub fn new(edge: impl Into<Edge>, style: Option<EdgeStyle>) -> Self {
        Self {
            edge: edge.into(),
            style,
            old: None,
        }
    }
}

impl Command<GraphDisplay> for SetEdgeStyle {
    fn apply(&mut self, display: &mut GraphDisplay, quick: bool) {
        self.old = display.set_edge_style(self.edge, self.style.clone());
        display.refresh(quick);
    }

    fn revert(&mut self, display: &mut GraphDisplay, quick: bool) {
        display.set_edge_style(self.edge, self.old.take());
        display.refresh(quick);
    }

    fn name(&self) -> &str {
        "set edge style"
    }
}

/// Sets (or with `None` removes) the label of a vertex
#[derive(Clone, Debug)]
pub struct SetVertexLabel {
    vertex: Node,
    label: Option<String>,
    old: Option<String>,
}

impl SetVertexLabel {
    pub fn new(vertex: Node, label: Option<String>) -> Self {
        Self {
            vertex,
            label,
            old: None,
        }
    }
}

impl Command<GraphDisplay> for SetVertexLabel {
    fn apply(&mut self, display: &mut GraphDisplay, quick: bool) {
        self.old = display.set_vertex_label(self.vertex, self.label.clone());
        display.refresh(quick);
    }

    fn revert(&mut self, display: &mut GraphDisplay, quick: bool) {
        display.set_vertex_label(self.vertex, self.old.take());
        display.refresh(quick);
    }

    fn name(&self) -> &str {
        "set vertex label"
    }
}

/// Sets (or with `None` removes) the label of an edge
#[derive(Clone, Debug)]
pub struct SetEdgeLabel {
    edge: Edge,
    label: Option<String>,
    old: Option<String>,
}

impl SetEdgeLabel {
    pub fn new(edge: impl Into<Edge>, label: Option<String>) -> Self {
        Self {
            edge: edge.into(),
            label,
            old: None,
        }
    }
}

impl Command<GraphDisplay> for SetEdgeLabel {
    fn apply(&mut self, display: &mut GraphDisplay, quick: bool) {
        self.old = display.set_edge_label(self.edge, self.label.clone());
        display.refresh(quick);
    }

    fn revert(&mut self, display: &mut GraphDisplay, quick: bool) {
        display.set_edge_label(self.edge, self.old.take());
        display.refresh(quick);
    }

    fn name(&self) -> &str {
        "set edge label"
    }
}

/// Replaces the caption of a graph display
#[derive(Clone, Debug)]
pub struct SetCaption {
    caption: String,
    old: String,
}

impl SetCaption {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            old: String::new(),
        }
    }
}

impl Command<GraphDisplay> for SetCaption {
    fn apply(&mut self, display: &mut GraphDisplay, quick: bool) {
        self.old = display.set_caption(self.caption.clone());
        display.refresh(quick);
    }

    fn revert(&mut self, display: &mut GraphDisplay, quick: bool) {
        display.set_caption(std::mem::take(&mut self.old));
        display.refresh(quick);
    }

    fn name(&self) -> &str {
        "set caption"
    }
}
