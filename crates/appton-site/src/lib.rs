//! Page composition and runtime for the Appton site.
//!
//! [`SiteState`] is the Elm-style model: viewport, selection, and the
//! animation clock. [`SitePage`] is the widget tree built from a loaded
//! [`appton_data::Catalog`]. [`Site`] wires the two together: events in,
//! commands out, frames rendered to an [`appton_core::DrawList`] and
//! optionally serialized as an SVG snapshot.

mod error;
mod page;
mod runtime;
mod state;
pub mod svg;

pub use error::SiteError;
pub use page::SitePage;
pub use runtime::Site;
pub use state::{SiteMessage, SiteState};
