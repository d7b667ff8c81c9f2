//! Height reporting behavior of the composed embed component.

mod support;

mod reporting;
mod wire_format;
