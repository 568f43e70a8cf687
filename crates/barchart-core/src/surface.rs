// File: crates/barchart-core/src/surface.rs
// Summary: Retained drawing surface: a fixed-size canvas holding a tree of groups, rects, lines, paths and text.

/// Horizontal text alignment, inherited through groups like SVG `text-anchor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Translation applied to a group's children.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Translate {
    pub x: f64,
    pub y: f64,
}

impl Translate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Group {
    pub class: Option<String>,
    pub transform: Option<Translate>,
    pub text_anchor: Option<Anchor>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    /// `fill="none"` on axis groups; children opt back in with their own fill.
    pub fill_none: bool,
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Rect {
    pub class: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Line {
    pub class: Option<String>,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Outline described with SVG path data (only `M`, `H`, `V` are emitted here).
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PathEl {
    pub class: Option<String>,
    pub d: String,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Text {
    pub class: Option<String>,
    pub x: f64,
    pub y: f64,
    /// Baseline shift in em units.
    pub dy_em: Option<f64>,
    pub anchor: Option<Anchor>,
    pub fill: Option<String>,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Group(Group),
    Rect(Rect),
    Line(Line),
    Path(PathEl),
    Text(Text),
}

impl Node {
    pub fn class(&self) -> Option<&str> {
        match self {
            Node::Group(g) => g.class.as_deref(),
            Node::Rect(r) => r.class.as_deref(),
            Node::Line(l) => l.class.as_deref(),
            Node::Path(p) => p.class.as_deref(),
            Node::Text(t) => t.class.as_deref(),
        }
    }

    /// Depth-first walk over this node and its descendants.
    pub fn walk<'a, F: FnMut(&'a Node)>(&'a self, f: &mut F) {
        f(self);
        if let Node::Group(g) = self {
            for child in &g.children {
                child.walk(f);
            }
        }
    }
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn translated(mut self, x: f64, y: f64) -> Self {
        self.transform = Some(Translate::new(x, y));
        self
    }

    pub fn append(&mut self, node: Node) -> &mut Self {
        self.children.push(node);
        self
    }

    /// Recursively drop every descendant matching `pred`.
    pub fn remove_where(&mut self, pred: &dyn Fn(&Node) -> bool) -> usize {
        let before = self.children.len();
        self.children.retain(|n| !pred(n));
        let mut removed = before - self.children.len();
        for child in &mut self.children {
            if let Node::Group(g) = child {
                removed += g.remove_where(pred);
            }
        }
        removed
    }

    /// Drop every descendant carrying `class`.
    pub fn remove_class(&mut self, class: &str) -> usize {
        self.remove_where(&|n: &Node| n.class() == Some(class))
    }

    /// Drop the `line` children of every `tick` group.
    pub fn remove_tick_lines(&mut self) -> usize {
        let mut removed = 0;
        for child in &mut self.children {
            if let Node::Group(g) = child {
                if g.class.as_deref() == Some("tick") {
                    let before = g.children.len();
                    g.children.retain(|n| !matches!(n, Node::Line(_)));
                    removed += before - g.children.len();
                } else {
                    removed += g.remove_tick_lines();
                }
            }
        }
        removed
    }
}

/// Fixed-size canvas. Renderers only append children; the size never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    children: Vec<Node>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, children: Vec::new() }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn append(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn walk<'a, F: FnMut(&'a Node)>(&'a self, f: &mut F) {
        for child in &self.children {
            child.walk(f);
        }
    }

    /// All rectangles in document order.
    pub fn rects(&self) -> Vec<&Rect> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if let Node::Rect(r) = n {
                out.push(r);
            }
        });
        out
    }

    /// All text elements in document order.
    pub fn texts(&self) -> Vec<&Text> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if let Node::Text(t) = n {
                out.push(t);
            }
        });
        out
    }

    /// Every node carrying `class`, in document order.
    pub fn find_class(&self, class: &str) -> Vec<&Node> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if n.class() == Some(class) {
                out.push(n);
            }
        });
        out
    }
}
