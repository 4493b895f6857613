pub mod graphs;
pub mod queue;
pub mod search;
pub mod utility;
