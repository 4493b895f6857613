use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter},
    path::Path,
};

use indicatif::ProgressIterator;
use itertools::Itertools;
use log::info;
use thiserror::Error;

use super::{reversible_vec_graph::ReversibleVecGraph, VertexId, Weight};
use crate::utility::get_progressspinner;

#[derive(Debug, Error)]
pub enum GraphFileError {
    #[error("unable to access graph file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to (de)serialize graph: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("unsupported graph file extension {0:?}")]
    UnknownExtension(Option<String>),
    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
    #[error("missing {0}")]
    MissingHeader(&'static str),
}

fn malformed(line: usize, reason: impl Into<String>) -> GraphFileError {
    GraphFileError::MalformedLine {
        line,
        reason: reason.into(),
    }
}

fn parse_count(value: Option<&str>, line: usize) -> Result<u32, GraphFileError> {
    let value = value.ok_or_else(|| malformed(line, "missing count"))?;
    value
        .trim()
        .parse()
        .map_err(|_| malformed(line, format!("unable to parse count {:?}", value)))
}

fn parse_vertex(value: &str, line: usize) -> Result<VertexId, GraphFileError> {
    value
        .parse()
        .map_err(|_| malformed(line, format!("unable to parse vertex {:?}", value)))
}

fn parse_weight(value: &str, line: usize) -> Result<Weight, GraphFileError> {
    let weight: Weight = value
        .parse()
        .map_err(|_| malformed(line, format!("unable to parse weight {:?}", value)))?;

    if weight.is_nan() || weight < 0.0 {
        return Err(malformed(line, format!("weight {} is not non-negative", value)));
    }

    Ok(weight)
}

pub struct GraphFactory {}

impl GraphFactory {
    /// Reads a graph, choosing the format by the file extension (`gr`, `fmi`
    /// or `bincode`).
    pub fn from_file(path: &Path) -> Result<ReversibleVecGraph, GraphFileError> {
        let extension = path
            .extension()
            .map(|extension| extension.to_string_lossy().into_owned());

        match extension.as_deref() {
            Some("gr") => Self::from_gr_file(path),
            Some("fmi") => Self::from_fmi_file(path),
            Some("bincode") => Self::from_bincode_file(path),
            _ => Err(GraphFileError::UnknownExtension(extension)),
        }
    }

    /// Reads a DIMACS shortest path file. Vertex ids in the file start at 1
    /// and are shifted to start at 0.
    pub fn from_gr_file(path: &Path) -> Result<ReversibleVecGraph, GraphFileError> {
        let reader = BufReader::new(File::open(path)?);
        let spinner = get_progressspinner("Reading .gr file");

        let mut graph = None;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let mut values = line.split_whitespace();

            match values.next() {
                // p sp <vertices> <edges>
                Some("p") => {
                    let number_of_vertices = parse_count(values.nth(1), line_number)?;
                    graph = Some(ReversibleVecGraph::new(number_of_vertices));
                }
                // a <tail> <head> <weight>
                Some("a") => {
                    let graph = graph
                        .as_mut()
                        .ok_or(GraphFileError::MissingHeader("problem line before first arc"))?;
                    let (tail, head, weight) = values
                        .collect_tuple()
                        .ok_or_else(|| malformed(line_number, "expected `a tail head weight`"))?;
                    let tail = parse_vertex(tail, line_number)?;
                    let head = parse_vertex(head, line_number)?;
                    if tail == 0 || head == 0 {
                        return Err(malformed(line_number, "vertex ids start at 1"));
                    }
                    graph.add_edge(tail - 1, head - 1, parse_weight(weight, line_number)?);
                    spinner.inc(1);
                }
                // comments and empty lines
                _ => (),
            }
        }
        spinner.finish_and_clear();

        let graph = graph.ok_or(GraphFileError::MissingHeader("problem line"))?;
        info!(
            "read {} vertices and {} edges from {}",
            graph.number_of_vertices(),
            graph.number_of_edges(),
            path.display()
        );
        Ok(graph)
    }

    /// Reads a graph in the `fmi` text format: comment lines starting with
    /// `#`, the number of vertices, the number of edges, one line per vertex
    /// and one line `tail head weight ...` per edge.
    pub fn from_fmi_file(path: &Path) -> Result<ReversibleVecGraph, GraphFileError> {
        let reader = BufReader::new(File::open(path)?);

        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| match line {
                Ok(line) => !line.starts_with('#') && !line.trim().is_empty(),
                Err(_) => true,
            });

        let mut next_count = |name: &'static str| -> Result<u32, GraphFileError> {
            let (line_number, line) = lines.next().ok_or(GraphFileError::MissingHeader(name))?;
            let line = line?;
            parse_count(Some(line.as_str()), line_number)
        };
        let number_of_vertices = next_count("number of vertices")?;
        let number_of_edges = next_count("number of edges")?;

        let mut graph = ReversibleVecGraph::new(number_of_vertices);
        for (line_number, line) in lines
            .skip(number_of_vertices as usize)
            .take(number_of_edges as usize)
            .progress_count(number_of_edges as u64)
        {
            // srcIDX trgIDX cost type maxspeed
            let line = line?;
            let (tail, head, weight) = line
                .split_whitespace()
                .next_tuple()
                .ok_or_else(|| malformed(line_number, "expected `tail head weight`"))?;
            graph.add_edge(
                parse_vertex(tail, line_number)?,
                parse_vertex(head, line_number)?,
                parse_weight(weight, line_number)?,
            );
        }

        if graph.number_of_edges() != number_of_edges {
            return Err(GraphFileError::MissingHeader("edge lines announced by the header"));
        }

        info!(
            "read {} vertices and {} edges from {}",
            graph.number_of_vertices(),
            graph.number_of_edges(),
            path.display()
        );
        Ok(graph)
    }

    pub fn from_bincode_file(path: &Path) -> Result<ReversibleVecGraph, GraphFileError> {
        let spinner = get_progressspinner("Reading .bincode file");
        let reader = BufReader::new(File::open(path)?);
        let graph = bincode::deserialize_from(reader)?;
        spinner.finish_and_clear();
        Ok(graph)
    }

    pub fn to_bincode_file(graph: &ReversibleVecGraph, path: &Path) -> Result<(), GraphFileError> {
        let writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(writer, graph)?;
        Ok(())
    }
}
