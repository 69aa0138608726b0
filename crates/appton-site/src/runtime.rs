//! Glue between the model and the widget tree.

use crate::error::SiteError;
use crate::page::SitePage;
use crate::state::{SiteMessage, SiteState};
use crate::svg;
use appton_core::{Command, DrawList, State as _};
use appton_data::Catalog;
use std::path::Path;
use tracing::{debug, warn};

/// The running site: model plus view, one event loop step at a time.
#[derive(Debug, Clone)]
pub struct Site {
    state: SiteState,
    page: SitePage,
}

impl Site {
    /// Build a site over a loaded catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let page = SitePage::new(&catalog);
        Self {
            state: SiteState::new(catalog),
            page,
        }
    }

    /// Load the three data files from a directory and build the site.
    ///
    /// Validation findings are logged as warnings; they never block the
    /// page.
    ///
    /// # Errors
    ///
    /// Returns an error if a data file cannot be read or parsed.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, SiteError> {
        let catalog = Catalog::load_dir(dir)?;
        for finding in catalog.validate() {
            warn!(%finding, "data validation finding");
        }
        Ok(Self::new(catalog))
    }

    /// The current model.
    #[must_use]
    pub const fn state(&self) -> &SiteState {
        &self.state
    }

    /// The widget tree.
    #[must_use]
    pub const fn page(&self) -> &SitePage {
        &self.page
    }

    /// Feed one input event through the page and the model.
    ///
    /// Returns the commands the host shell must execute (opening links,
    /// scrolling to anchors).
    pub fn handle(&mut self, event: &appton_core::Event) -> Command {
        let messages = self.page.dispatch(event);
        self.apply(messages)
    }

    /// Apply model messages directly (resize from the shell, ticks).
    pub fn apply(&mut self, messages: impl IntoIterator<Item = SiteMessage>) -> Command {
        let commands: Vec<Command> = messages
            .into_iter()
            .map(|msg| {
                let cmd = self.state.update(msg.clone());
                self.sync_page(&msg);
                if !cmd.is_none() {
                    debug!(?cmd, "command for host shell");
                }
                cmd
            })
            .collect();
        Command::batch(commands)
    }

    /// Mirror model-level changes into widget-local state.
    fn sync_page(&mut self, msg: &SiteMessage) {
        match *msg {
            SiteMessage::ViewportResized { width, height } => {
                self.page.resize(appton_core::Size::new(width, height));
            }
            SiteMessage::AppSelected { index } => {
                self.page.select_app(index);
            }
            SiteMessage::Tick { .. } => {
                self.page.set_clock(self.state.clock());
            }
            _ => {}
        }
    }

    /// Advance the animation clock by `seconds`.
    pub fn tick(&mut self, seconds: f32) {
        self.apply([SiteMessage::Tick { seconds }]);
    }

    /// Render one frame.
    #[must_use]
    pub fn render(&self) -> DrawList {
        self.page.render()
    }

    /// Render an SVG snapshot of the current frame.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NotMeasured`] before the first viewport
    /// measurement; an empty snapshot would silently hide the gate.
    pub fn snapshot(&self) -> Result<String, SiteError> {
        if !self.state.is_measured() {
            return Err(SiteError::NotMeasured);
        }
        Ok(svg::to_svg(&self.render()))
    }
}
