use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{AddEdgeError, Weight},
    graph::Graph,
};

/// Refers to an existing vertex by its index modulo the vertex count.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }

    fn vertex<T: Clone, W>(&self, graph: &Graph<T, W>) -> Option<T> {
        self.get(graph.vertex_count())
            .and_then(|index| graph.vertex(index))
            .cloned()
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<T, W> {
    AddVertex(T),
    RemoveVertex(Index),
    Clear,
    AddEdge(Index, Index, W),
    RemoveEdge(Index, Index),
    ClearEdges,
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult<T, W> {
    AddVertex(usize),
    RemoveVertex(T),
    Clear,
    AddEdge(Result<Option<W>, AddEdgeError<W>>),
    RemoveEdge(Option<W>),
    ClearEdges,
    // The operation refers to a vertex but the graph is empty.
    Skipped,
}

impl<T: Ord + Clone, W: Weight> MutOp<T, W> {
    pub fn apply(self, graph: &mut Graph<T, W>) -> MutOpResult<T, W> {
        match self {
            MutOp::AddVertex(vertex) => MutOpResult::AddVertex(graph.add_vertex(vertex)),
            MutOp::RemoveVertex(index) => {
                match index.vertex(graph).map(|vertex| graph.remove_vertex(&vertex)) {
                    Some(Ok(vertex)) => MutOpResult::RemoveVertex(vertex),
                    Some(Err(_)) | None => MutOpResult::Skipped,
                }
            }
            MutOp::Clear => {
                graph.clear();
                MutOpResult::Clear
            }
            MutOp::AddEdge(src, dst, weight) => match (src.vertex(graph), dst.vertex(graph)) {
                (Some(src), Some(dst)) => MutOpResult::AddEdge(graph.add_edge(&src, &dst, weight)),
                _ => MutOpResult::Skipped,
            },
            MutOp::RemoveEdge(src, dst) => match (src.vertex(graph), dst.vertex(graph)) {
                (Some(src), Some(dst)) => MutOpResult::RemoveEdge(graph.remove_edge(&src, &dst)),
                _ => MutOpResult::Skipped,
            },
            MutOp::ClearEdges => {
                graph.clear_edges();
                MutOpResult::ClearEdges
            }
        }
    }
}

pub struct MutOpsSeq<T, W>(pub Vec<MutOp<T, W>>);

impl<T, W> IntoIterator for MutOpsSeq<T, W> {
    type Item = MutOp<T, W>;
    type IntoIter = std::vec::IntoIter<MutOp<T, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T, W> MutOpsSeq<T, W>
where
    T: Ord + Clone + fmt::Debug,
    W: Weight + fmt::Debug,
{
    /// Applies the operations to the graph while printing them as Rust code
    /// that uses the vertex values instead of the indices.
    pub fn replay(self, graph: &mut Graph<T, W>) {
        println!("let mut graph = Graph::new();");
        println!();

        for op in self {
            match &op {
                MutOp::AddVertex(vertex) => println!("graph.add_vertex({vertex:?});"),
                MutOp::RemoveVertex(index) => {
                    if let Some(vertex) = index.vertex(graph) {
                        println!("graph.remove_vertex(&{vertex:?}).unwrap();");
                    }
                }
                MutOp::Clear => println!("graph.clear();"),
                MutOp::AddEdge(src, dst, weight) => {
                    if let (Some(src), Some(dst)) = (src.vertex(graph), dst.vertex(graph)) {
                        println!("let _ = graph.add_edge(&{src:?}, &{dst:?}, {weight:?});");
                    }
                }
                MutOp::RemoveEdge(src, dst) => {
                    if let (Some(src), Some(dst)) = (src.vertex(graph), dst.vertex(graph)) {
                        println!("graph.remove_edge(&{src:?}, &{dst:?});");
                    }
                }
                MutOp::ClearEdges => println!("graph.clear_edges();"),
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<T: fmt::Debug, W: fmt::Debug> fmt::Debug for MutOpsSeq<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")?;
        writeln!(f)?;
        writeln!(f, "// use `cargo test fuzz_replay_mut_ops_seq`")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OpKind {
    AddVertex,
    AddEdge,
    RemoveVertex,
    RemoveEdge,
    Clear,
    ClearEdges,
}

impl<'a, T, W> Arbitrary<'a> for MutOpsSeq<T, W>
where
    T: Arbitrary<'a>,
    W: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let n_target = u.int_in_range(10..=1000)?;
        let r = u.nice_f64()?;

        let m_target = ((n_target * (n_target - 1)) as f64 * r).round() as usize;

        let total = u.len();

        let mut n = 0usize;
        let mut m = 0usize;
        let mut seq = Vec::with_capacity(n_target);

        while !u.is_empty() {
            let rv = (n as f64 / n_target as f64).min(1.0);
            let re = (m as f64 / m_target.max(1) as f64).min(1.0);
            let progress = (total - u.len()) as f64 / total as f64;

            let op = match arbitrary_op(u, rv, re, progress) {
                Ok(op) => op,
                Err(_) => break,
            };

            match op {
                MutOp::AddVertex(_) => n += 1,
                MutOp::RemoveVertex(_) => n = n.saturating_sub(1),
                MutOp::Clear => {
                    n = 0;
                    m = 0
                }
                MutOp::AddEdge(_, _, _) => m += 1,
                MutOp::RemoveEdge(_, _) => m = m.saturating_sub(1),
                MutOp::ClearEdges => m = 0,
            }

            seq.push(op);
        }

        Ok(MutOpsSeq(seq))
    }
}

fn arbitrary_op<'a, T, W>(
    u: &mut Unstructured<'a>,
    rv: f64,
    re: f64,
    progress: f64,
) -> arbitrary::Result<MutOp<T, W>>
where
    T: Arbitrary<'a>,
    W: Arbitrary<'a>,
{
    // The more vertices/edges are in the graph, the less is needed to add
    // them. The ratios are averaged with the progress ratio so that adding
    // edges continues for most of the sequence.
    let wv = non_linear_decrease(0.4 * rv + 0.6 * progress);
    let we = non_linear_decrease(0.6 * re + 0.4 * progress);

    u.choose_weighted(
        &[
            OpKind::AddVertex,
            OpKind::AddEdge,
            OpKind::RemoveVertex,
            OpKind::RemoveEdge,
            OpKind::Clear,
            OpKind::ClearEdges,
        ],
        // Removing is preferred less than adding. Clearing is rare.
        &[wv, we, (1.0 - wv) * 0.25, (1.0 - we) * 0.5, 0.01, 0.01],
    )
    .and_then(|kind| match kind {
        OpKind::AddVertex => Ok(MutOp::AddVertex(u.arbitrary()?)),
        OpKind::AddEdge => Ok(MutOp::AddEdge(
            u.arbitrary()?,
            u.arbitrary()?,
            u.arbitrary()?,
        )),
        OpKind::RemoveVertex => Ok(MutOp::RemoveVertex(u.arbitrary()?)),
        OpKind::RemoveEdge => Ok(MutOp::RemoveEdge(u.arbitrary()?, u.arbitrary()?)),
        OpKind::Clear => Ok(MutOp::Clear),
        OpKind::ClearEdges => Ok(MutOp::ClearEdges),
    })
}

trait UnstructuredExt {
    fn nice_f64(&mut self) -> arbitrary::Result<f64>;
    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T>;
}

impl<'a> UnstructuredExt for Unstructured<'a> {
    fn nice_f64(&mut self) -> arbitrary::Result<f64> {
        const RESOLUTION: u8 = 100;
        let int = self.int_in_range(0..=RESOLUTION)?;
        Ok(int as f64 / RESOLUTION as f64)
    }

    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T> {
        if choices.is_empty() || choices.len() != weights.len() {
            return Err(arbitrary::Error::EmptyChoose);
        }

        let weight_sum = weights.iter().copied().sum::<f64>();
        let bound = self.nice_f64()? * weight_sum;

        let mut acc = 0.0;
        for (choice, weight) in choices.iter().zip(weights.iter().copied()) {
            acc += weight;

            if acc >= bound {
                return Ok(choice);
            }
        }

        // Rounding errors in the accumulated sum.
        Ok(&choices[choices.len() - 1])
    }
}

// f(0) = 1, f(1) ~= 0.152
fn non_linear_decrease(x: f64) -> f64 {
    1.0 / (x + 1.0).powf(std::f64::consts::E)
}
