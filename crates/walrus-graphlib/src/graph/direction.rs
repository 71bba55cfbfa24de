//! Graph kind markers.
//!
//! Directed and undirected graphs share storage; the marker decides whether `add_edge`
//! also stores the reverse orientation, and lets algorithms ask for the kind they need.

mod sealed {
    pub trait Sealed {}
}

pub trait Direction: sealed::Sealed {
    const DIRECTED: bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directed {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undirected {}

impl sealed::Sealed for Directed {}
impl sealed::Sealed for Undirected {}

impl Direction for Directed {
    const DIRECTED: bool = true;
}

impl Direction for Undirected {
    const DIRECTED: bool = false;
}
