#![forbid(unsafe_code)]

//! Geometry primitives for panel composition.
//!
//! This crate provides the integer grid types the layout engine is built on:
//!
//! - [`Coordinate`] - a cell position on the terminal grid
//! - [`BoundingBox`] - an inclusive axis-aligned box with adjacency predicates
//! - [`Direction`] - the four compass directions, each with an inverse
//! - [`Position`] - where a panel asks to be docked, if anywhere
//!
//! Coordinates are `u16` and never negative once resolved; probes that may
//! step off the grid use [`BoundingBox::contains_cell`] over `i32`.

pub mod geometry;

pub use geometry::{BoundingBox, Coordinate, Direction, Position};
