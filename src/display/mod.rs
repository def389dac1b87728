/*!
# Display State

Presentation state of the widgets that visualize an algorithm step by step, together with the
[`Command`](crate::commands::Command)s that mutate it. No drawing happens here: a display only
notifies its [`RenderTarget`] after a change made outside of quick mode.

- [`GraphDisplay`]: labels and styles of the vertices and edges of a graph
- [`ArrayDisplay`]: values, named pointers and per-cell classes of an array
- [`dfs_animation`] and [`bfs_animation`]: record a traversal as a
  [`CommandHistory`](crate::commands::CommandHistory) over a [`GraphDisplay`]

```
use stepgraph::{display::*, prelude::*};

let graph = Graph::from_edges(4, false, [(0, 1), (1, 2), (0, 3)]);
let mut display = GraphDisplay::new(&graph);
let mut history = dfs_animation(&graph, 0);

history.run(&mut display);
assert!(display.vertex_style(3).is_some());

history.reset(&mut display);
assert!(display.vertex_style(3).is_none());
```
*/

use std::fmt::Display;

mod animate;
mod array;
mod graph;

pub use animate::*;
pub use array::*;
pub use graph::*;

/// A CSS color such as `"red"` or `"#9999ff"`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    pub fn new(color: impl Into<String>) -> Self {
        Self(color.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Style of a vertex. Unset fields fall back to the theme's default vertex.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexStyle {
    pub color: Option<Color>,
}

impl VertexStyle {
    /// Creates a style with the given fill color
    pub fn colored(color: impl Into<Color>) -> Self {
        Self {
            color: Some(color.into()),
        }
    }

    /// Fills every unset field from `base`
    pub fn or(&self, base: &Self) -> Self {
        Self {
            color: self.color.clone().or_else(|| base.color.clone()),
        }
    }
}

/// Style of an edge. Unset fields fall back to the theme's default edge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeStyle {
    /// Stroke width in pixels
    pub width: Option<u32>,
    pub color: Option<Color>,
}

impl EdgeStyle {
    /// Creates a style with the given stroke color and the default width
    pub fn colored(color: impl Into<Color>) -> Self {
        Self {
            width: None,
            color: Some(color.into()),
        }
    }

    /// Sets the stroke width
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Fills every unset field from `base`
    pub fn or(&self, base: &Self) -> Self {
        Self {
            width: self.width.or(base.width),
            color: self.color.clone().or_else(|| base.color.clone()),
        }
    }
}

/// Styles applied when a vertex or edge has no explicit style, or is focused or selected
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub default_edge: EdgeStyle,
    pub default_vertex: VertexStyle,
    pub focus_edge: EdgeStyle,
    pub focus_vertex: VertexStyle,
    pub selected_vertex: VertexStyle,
    pub selected_edge: EdgeStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            default_edge: EdgeStyle::colored("black").with_width(1),
            default_vertex: VertexStyle::colored("white"),
            focus_edge: EdgeStyle::colored("#bbbbbb").with_width(1),
            focus_vertex: VertexStyle::colored("#cccccc"),
            selected_vertex: VertexStyle::colored("#9999ff"),
            selected_edge: EdgeStyle::colored("red").with_width(2),
        }
    }
}

/// Receives the state of a display after every change made outside of quick mode.
///
/// Closures taking `&D` are render targets.
pub trait RenderTarget<D> {
    fn render(&mut self, scene: &D);
}

impl<D, F> RenderTarget<D> for F
where
    F: FnMut(&D),
{
    fn render(&mut self, scene: &D) {
        self(scene);
    }
}

/// Optional boxed render target shared by all displays
pub(crate) struct Target<D>(Option<Box<dyn RenderTarget<D>>>);

impl<D> Default for Target<D> {
    fn default() -> Self {
        Self(None)
    }
}

impl<D> Target<D> {
    pub(crate) fn set(&mut self, target: Box<dyn RenderTarget<D>>) {
        self.0 = Some(target);
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.0.is_some()
    }

    /// Renders `scene` unless in quick mode
    pub(crate) fn refresh(&mut self, scene: &D, quick: bool) {
        if quick {
            return;
        }
        if let Some(target) = self.0.as_mut() {
            target.render(scene);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn styles_fall_back_to_base() {
        let theme = Theme::default();
        let style = EdgeStyle::colored("blue").or(&theme.default_edge);
        assert_eq!(style.width, Some(1));
        assert_eq!(style.color.as_ref().map(Color::as_str), Some("blue"));

        let style = VertexStyle::default().or(&theme.default_vertex);
        assert_eq!(style, VertexStyle::colored("white"));
        assert_eq!(theme.selected_edge.width, Some(2));
    }

    #[test]
    fn quick_mode_skips_rendering() {
        let frames = Rc::new(Cell::new(0));
        let counter = frames.clone();

        let mut target = Target::<u32>::default();
        assert!(!target.is_attached());
        target.refresh(&1, false);

        target.set(Box::new(move |_: &u32| counter.set(counter.get() + 1)));
        target.refresh(&1, true);
        assert_eq!(frames.get(), 0);
        target.refresh(&1, false);
        assert_eq!(frames.get(), 1);
    }
}
