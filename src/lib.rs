//! tripsheet core
//!
//! Calculation and normalization engine for the logistics trip-sheet
//! workflow: route catalog lookups, per-row distance allocation, form
//! totals, and normalization of heterogeneous trip-geometry payloads
//! into renderable polylines.

pub mod numeric;
pub mod vehicles;
pub mod catalog;
pub mod row;
pub mod totals;
pub mod polyline;
pub mod geometry;
pub mod track;
