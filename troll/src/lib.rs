//! A library for merging partial tristate configuration files into a small set of
//! mutually compatible configurations.
//!
//! Two configurations are *compatible* when they assign the same value to every
//! symbol they share, and *conflict* otherwise. Merging a batch is treated as a
//! graph problem: vertices are configurations, edges join compatible pairs, and a
//! partition of the vertices into cliques gives a set of merged configurations in
//! which every input is represented exactly once. The partition is approximated
//! greedily, by repeatedly extracting a maximum clique.
//!
//! # Orientation
//!
//! A merge is built around a [context](crate::context), which owns a handful of
//! databases:
//! - Symbol names are interned in a [symbol database](crate::db::symbol).
//! - Assignments are packed three bits to a symbol in a
//!   [configuration database](crate::db::configs), whose word-parallel conflict
//!   test decides compatibility.
//!
//! From there, a merge runs leaves to root:
//! - The [builder](crate::builder) reads configuration files into the context.
//! - The [graph](crate::graph) module builds the compatibility graph, in parallel,
//!   and serializes it in [Matrix Market coordinate format](crate::graph::mtx) for
//!   the solver.
//! - The [cover procedure](crate::procedures::cover) alternates between a
//!   [maximum clique solver](crate::solver) and clique removal until the graph is
//!   empty.
//! - The [merge procedure](crate::procedures::merge) unions each clique into one
//!   output file.
//!
//! # Example
//!
//! ```rust
//! use troll::{config::Config, context::Context};
//!
//! let mut the_context = Context::from_config(Config::default());
//!
//! // Configurations sharing a symbol are compatible exactly when they agree on it.
//! let a = the_context.read_config("X=y\nY=n\n".as_bytes()).unwrap();
//! let b = the_context.read_config("Y=n\nZ=m\n".as_bytes()).unwrap();
//! let c = the_context.read_config("Y=m\n".as_bytes()).unwrap();
//!
//! assert!(!the_context.config_db.conflict(a.configuration, b.configuration));
//! assert!(the_context.config_db.conflict(b.configuration, c.configuration));
//!
//! let graph = the_context.build_graph().unwrap();
//! assert!(graph.edge(a.configuration, b.configuration));
//! assert!(!graph.edge(b.configuration, c.configuration));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made under targets listed in [misc::log], so output can
//! be narrowed to a part of a merge. For example, with
//! [env_logger](https://docs.rs/env_logger/latest/env_logger/), `RUST_LOG=cover=info …`
//! traces clique extraction alone. No log implementation is installed by the library.

#![allow(unused_must_use)]
#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod graph;
pub mod procedures;
pub mod solver;

pub mod io;
pub mod misc;
