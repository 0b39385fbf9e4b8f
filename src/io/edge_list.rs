use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path as FsPath;
use std::str::FromStr;

use crate::capacity::Capacity;
use crate::io::{Error, Indexing};
use crate::network::FlowNetwork;

fn parse<T: FromStr>(token: &str, line: usize) -> Result<T, Error> {
    token.parse().map_err(|_| Error::Parse {
        line,
        token: token.to_owned(),
    })
}

/// Reads an edge list. Edges without a capacity column get capacity one.
///
/// Lines with fewer than two fields are ignored, extra fields past the capacity as well.
pub fn read_graph<C, R>(reader: R, indexing: Indexing) -> Result<FlowNetwork<C>, Error>
where
    C: Capacity + FromStr,
    R: BufRead,
{
    let mut network: Option<FlowNetwork<C>> = None;

    for (n, line) in reader.lines().enumerate() {
        let line_no = n + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(net) = network.as_mut() else {
            let count = parse(line, line_no)?;
            let net = FlowNetwork::try_new(count).map_err(|inner| Error::TooManyVertices {
                line: line_no,
                count,
                inner,
            })?;
            network = Some(net);
            continue;
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 {
            log::warn!("line {line_no}: skipping `{line}`");
            continue;
        }
        let from = indexing.to_internal(parse(fields[0], line_no)?, line_no)?;
        let to = indexing.to_internal(parse(fields[1], line_no)?, line_no)?;
        let capacity = match fields.get(2) {
            Some(token) => parse(token, line_no)?,
            None => C::one(),
        };

        net.add_edge(from, to, capacity)
            .map_err(|inner| Error::Network {
                line: line_no,
                inner,
            })?;
    }

    let network = network.ok_or(Error::MissingVertexCount)?;
    log::debug!(
        "read graph with {} vertices and {} edges",
        network.vertex_count(),
        network.edge_count()
    );
    Ok(network)
}

pub fn read_graph_file<C, P>(path: P, indexing: Indexing) -> Result<FlowNetwork<C>, Error>
where
    C: Capacity + FromStr,
    P: AsRef<FsPath>,
{
    let file = File::open(path)?;
    read_graph(BufReader::new(file), indexing)
}

/// Writes the caller-registered edges of `network` as an edge list; residual arcs are left out.
///
/// The capacity column is only written for edges whose capacity is not one.
pub fn write_graph<C, W>(
    mut writer: W,
    network: &FlowNetwork<C>,
    indexing: Indexing,
) -> Result<(), Error>
where
    C: Capacity,
    W: Write,
{
    writeln!(writer, "{}", network.vertex_count())?;
    for (_, e) in network.forward_edges() {
        let (from, to) = (indexing.to_external(e.from()), indexing.to_external(e.to()));
        if e.capacity() == C::one() {
            writeln!(writer, "{from} {to}")?;
        } else {
            writeln!(writer, "{from} {to} {}", e.capacity())?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn write_graph_file<C, P>(
    path: P,
    network: &FlowNetwork<C>,
    indexing: Indexing,
) -> Result<(), Error>
where
    C: Capacity,
    P: AsRef<FsPath>,
{
    let file = File::create(path)?;
    write_graph(BufWriter::new(file), network, indexing)
}
