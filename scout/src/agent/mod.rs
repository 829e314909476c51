//! Agents built on the workflow graph.

pub mod research;
