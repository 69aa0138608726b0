//! Layout engines for the Appton site.
//!
//! Two pieces live here:
//!
//! - [`RadialLayout`]: places N logo tiles evenly on an ellipse whose
//!   radii follow the viewport [`Breakpoint`].
//! - [`SectionFlow`]: stacks the page sections vertically.
//!
//! Positions produced by the radial engine are in **percent of the
//! container**, matching how the shell positions absolutely-placed
//! elements; callers convert to pixels against measured bounds.

mod breakpoint;
mod flow;
mod radial;

pub use breakpoint::{Breakpoint, EllipseRadii};
pub use flow::SectionFlow;
pub use radial::RadialLayout;
