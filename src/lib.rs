//! Scatter plot of a two-input logic gate with a hand-placed separating
//! line, drawn with [Matplotlib][] through an embedded Python.
//!
//! Usage
//! -----
//!
//! [`gate`] holds the labeled points and the boundary, [`visualize`]
//! puts them on a figure and [`matplotlib`] is the thin binding doing
//! the drawing.
//!
//! [Matplotlib]: https://matplotlib.org/

pub mod gate;
pub mod matplotlib;
pub mod visualize;

pub use matplotlib::Error;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
