use std::{
    fmt::{self, Display},
    io::{self, Write},
};

use crate::{core::Neighbors, graph::Graph};

pub trait Export<G> {
    fn export<Wr: Write>(&self, graph: &G, out: &mut Wr) -> io::Result<()>;
}

/// Exports a graph in the [DOT](https://graphviz.org/doc/info/lang.html)
/// language.
///
/// Vertices are named by their current index, the labels are given by the
/// provided closures.
pub struct Dot<T, W> {
    name: String,
    get_vertex_label: Box<dyn Fn(&T) -> String>,
    get_edge_label: Box<dyn Fn(&W) -> String>,
}

impl<T, W> Dot<T, W> {
    pub fn new<FV, FE>(name: Option<String>, get_vertex_label: FV, get_edge_label: FE) -> Self
    where
        FV: Fn(&T) -> String + 'static,
        FE: Fn(&W) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_vertex_label: Box::new(get_vertex_label),
            get_edge_label: Box::new(get_edge_label),
        }
    }

    pub fn to_string(&self, graph: &Graph<T, W>) -> String {
        let mut out = String::new();
        // Writing into a string does not fail.
        let _ = self.write(graph, &mut out);
        out
    }

    fn write<Wr: fmt::Write>(&self, graph: &Graph<T, W>, out: &mut Wr) -> fmt::Result {
        writeln!(out, "digraph {} {{", self.name)?;

        for (index, vertex) in graph.vertices().enumerate() {
            writeln!(
                out,
                "    v{index} [label={:?}];",
                (self.get_vertex_label)(vertex)
            )?;
        }

        for src in 0..graph.vertex_bound() {
            for (dst, weight) in graph.neighbors(src) {
                writeln!(
                    out,
                    "    v{src} -> v{dst} [label={:?}];",
                    (self.get_edge_label)(weight)
                )?;
            }
        }

        writeln!(out, "}}")
    }
}

impl<T: Display, W: Display> Dot<T, W> {
    pub fn with_display(name: Option<String>) -> Self {
        Self::new(name, |v| format!("{v}"), |e| format!("{e}"))
    }
}

impl<T, W> Export<Graph<T, W>> for Dot<T, W> {
    fn export<Wr: Write>(&self, graph: &Graph<T, W>, out: &mut Wr) -> io::Result<()> {
        out.write_all(self.to_string(graph).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_directed() {
        let mut graph = Graph::new();

        graph.extend_with_vertices(["a", "b", "c"]);
        graph.extend_with_edges([("a", "b", 2), ("c", "a", 7)]);

        let dot = Dot::with_display(None).to_string(&graph);

        assert_eq!(
            dot,
            "digraph G {\n    v0 [label=\"a\"];\n    v1 [label=\"b\"];\n    v2 [label=\"c\"];\n    v0 -> v1 [label=\"2\"];\n    v2 -> v0 [label=\"7\"];\n}\n"
        );
    }

    #[test]
    fn export_into_writer() {
        let mut graph = Graph::<_, u8>::new();
        graph.add_vertex(1);

        let mut out = Vec::new();
        Dot::new(Some(String::from("single")), |v: &i32| format!("#{v}"), |_: &u8| String::new())
            .export(&graph, &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "digraph single {\n    v0 [label=\"#1\"];\n}\n"
        );
    }
}
