//! A minimal owned SVG tree.
//!
//! Attributes keep insertion order, so rendering the same tree twice yields
//! byte-identical output.

use std::fmt::{self, Write as _};

use crate::{Color, Point, Viewport};

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::Element(value)
    }
}

/// One SVG element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any earlier value for the same key.
    pub fn attr(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
        self
    }

    pub fn fill(self, color: Color) -> Self {
        self.attr("fill", color)
    }

    pub fn stroke(self, color: Color, width: f32) -> Self {
        self.attr("stroke", color).attr("stroke-width", width)
    }

    pub fn opacity(self, opacity: f32) -> Self {
        self.attr("opacity", opacity)
    }

    pub fn class(self, class: impl fmt::Display) -> Self {
        self.attr("class", class)
    }

    pub fn translate(self, at: Point) -> Self {
        self.attr("transform", format!("translate({} {})", at.x, at.y))
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Direct element children, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Every element below this one, depth first.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        for child in self.elements() {
            out.push(child);
            out.extend(child.descendants());
        }
        out
    }

    /// Descendants whose `class` attribute contains `class` as a word.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| {
                e.get_attr("class")
                    .is_some_and(|c| c.split_whitespace().any(|w| w == class))
            })
            .collect()
    }

    /// Concatenated text content of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => out.push_str(&e.text_content()),
            }
        }
        out
    }

    /// Render as indented SVG markup.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out, 0);
        out
    }

    fn write_to(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", self.name);
        for (key, value) in &self.attrs {
            let _ = write!(out, " {key}=\"{}\"", escape(value));
        }

        if self.children.is_empty() {
            out.push_str(" />\n");
            return;
        }

        if self.children.iter().all(|c| matches!(c, Node::Text(_))) {
            out.push('>');
            for child in &self.children {
                if let Node::Text(t) = child {
                    out.push_str(&escape(t));
                }
            }
            let _ = writeln!(out, "</{}>", self.name);
            return;
        }

        out.push_str(">\n");
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_to(out, depth + 1),
                Node::Text(t) => {
                    let _ = writeln!(out, "{indent}  {}", escape(t));
                }
            }
        }
        let _ = writeln!(out, "{indent}</{}>", self.name);
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Root `<svg>` element sized to the viewport.
pub fn document(viewport: Viewport) -> Element {
    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("width", viewport.width)
        .attr("height", viewport.height)
        .attr(
            "viewBox",
            format!("0 0 {} {}", viewport.width, viewport.height),
        )
}

pub fn group() -> Element {
    Element::new("g")
}

pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Element {
    Element::new("rect")
        .attr("x", x)
        .attr("y", y)
        .attr("width", width)
        .attr("height", height)
}

pub fn circle(cx: f32, cy: f32, r: f32) -> Element {
    Element::new("circle")
        .attr("cx", cx)
        .attr("cy", cy)
        .attr("r", r)
}

pub fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32) -> Element {
    Element::new("ellipse")
        .attr("cx", cx)
        .attr("cy", cy)
        .attr("rx", rx)
        .attr("ry", ry)
}

pub fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Element {
    Element::new("line")
        .attr("x1", x1)
        .attr("y1", y1)
        .attr("x2", x2)
        .attr("y2", y2)
}

pub fn path(d: impl Into<String>) -> Element {
    Element::new("path").attr("d", d.into())
}

pub fn polygon(points: &[(f32, f32)]) -> Element {
    let points: Vec<String> = points.iter().map(|(x, y)| format!("{x},{y}")).collect();
    Element::new("polygon").attr("points", points.join(" "))
}

pub fn text(x: f32, y: f32, content: impl Into<String>) -> Element {
    Element::new("text").attr("x", x).attr("y", y).text(content)
}
