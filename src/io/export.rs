use std::io::Write;
use std::path::Path as FsPath;

use csv::Writer;
use itertools::Itertools;
use serde::Serialize;

use crate::algo::FlowPath;
use crate::io::{Error, Indexing};

/// One row of the path export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PathRecord<F> {
    pub path: usize,
    pub flow: F,
    pub length: usize,
    pub vertices: String,
}

impl<F> PathRecord<F> {
    fn new<P>(number: usize, path: &P, indexing: Indexing) -> Self
    where
        P: FlowPath<Node = usize, Flow = F>,
    {
        let nodes: Vec<usize> = path.nodes().into_iter().collect();
        Self {
            path: number,
            flow: path.flow(),
            length: nodes.len().saturating_sub(1),
            vertices: nodes
                .into_iter()
                .map(|v| indexing.to_external(v))
                .join(" "),
        }
    }
}

/// Writes one CSV row per path with the columns `path,flow,length,vertices`; paths are numbered
/// from one.
pub fn write_paths<'a, W, P, I>(writer: W, paths: I, indexing: Indexing) -> Result<(), Error>
where
    W: Write,
    P: 'a + FlowPath<Node = usize>,
    P::Flow: Serialize,
    I: IntoIterator<Item = &'a P>,
{
    let mut wtr = Writer::from_writer(writer);
    for (n, path) in paths.into_iter().enumerate() {
        wtr.serialize(PathRecord::new(n + 1, path, indexing))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_paths_file<'a, F, P, I>(path: F, paths: I, indexing: Indexing) -> Result<(), Error>
where
    F: AsRef<FsPath>,
    P: 'a + FlowPath<Node = usize>,
    P::Flow: Serialize,
    I: IntoIterator<Item = &'a P>,
{
    let file = std::fs::File::create(path)?;
    write_paths(file, paths, indexing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::FlowNetwork;

    #[test]
    fn exports_one_row_per_path() {
        let mut net = FlowNetwork::<i32>::new(4);
        net.add_unit_edge(0, 1).unwrap();
        net.add_unit_edge(0, 2).unwrap();
        net.add_unit_edge(1, 3).unwrap();
        net.add_unit_edge(2, 3).unwrap();
        let d = crate::edge_disjoint_paths(&net, 0, 3).unwrap();

        let mut out = Vec::new();
        write_paths(&mut out, d.paths(), Indexing::OneBased).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "path,flow,length,vertices\n1,1,2,1 2 4\n2,1,2,1 3 4\n"
        );
    }

    #[test]
    fn empty_export_has_no_rows() {
        let mut out = Vec::new();
        write_paths::<_, crate::path::Path<i32>, _>(&mut out, &[], Indexing::ZeroBased).unwrap();
        assert!(out.is_empty());
    }
}
