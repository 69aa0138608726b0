//! The Elm-style model behind the page.

use appton_core::{Command, Size, State};
use appton_data::Catalog;
use appton_layout::Breakpoint;
use serde::{Deserialize, Serialize};

/// Messages driving the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SiteMessage {
    /// The viewport was measured or resized
    ViewportResized {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
    /// A showcase control selected an app
    AppSelected {
        /// Selected index
        index: usize,
    },
    /// An orbit logo tile was activated
    LogoActivated {
        /// Activated index
        index: usize,
    },
    /// A navigation link was activated
    NavActivated {
        /// Anchor id
        target: String,
    },
    /// A team member card was activated
    MemberActivated {
        /// Activated index
        index: usize,
    },
    /// The animation clock advanced
    Tick {
        /// Elapsed seconds since the last tick
        seconds: f32,
    },
}

/// Model of the whole page: what is measured, what is selected, and how
/// far the animation clock has advanced. The catalog never changes after
/// load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteState {
    catalog: Catalog,
    /// `None` until the first real measurement arrives.
    viewport: Option<Size>,
    selected_app: usize,
    clock: f32,
}

impl SiteState {
    /// Create the initial state over a loaded catalog.
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            viewport: None,
            selected_app: 0,
            clock: 0.0,
        }
    }

    /// The loaded data set.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The measured viewport, if any.
    #[must_use]
    pub const fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    /// Whether the first measurement has happened.
    #[must_use]
    pub const fn is_measured(&self) -> bool {
        self.viewport.is_some()
    }

    /// Breakpoint tier for the current viewport.
    #[must_use]
    pub fn breakpoint(&self) -> Option<Breakpoint> {
        self.viewport.map(|v| Breakpoint::for_width(v.width))
    }

    /// Currently selected showcase index.
    #[must_use]
    pub const fn selected_app(&self) -> usize {
        self.selected_app
    }

    /// Animation clock in seconds.
    #[must_use]
    pub const fn clock(&self) -> f32 {
        self.clock
    }
}

impl State for SiteState {
    type Message = SiteMessage;

    fn update(&mut self, msg: Self::Message) -> Command {
        match msg {
            SiteMessage::ViewportResized { width, height } => {
                // A zero-width measurement means the container is not
                // established; keep the first-measurement gate closed.
                if width > 0.0 {
                    self.viewport = Some(Size::new(width, height));
                }
                Command::None
            }
            SiteMessage::AppSelected { index } => {
                if index < self.catalog.apps.len() {
                    self.selected_app = index;
                }
                Command::None
            }
            SiteMessage::LogoActivated { index } => self
                .catalog
                .apps
                .get(index)
                .map_or(Command::None, |app| Command::OpenUrl {
                    url: app.link.clone(),
                }),
            SiteMessage::NavActivated { target } => Command::ScrollTo { anchor: target },
            SiteMessage::MemberActivated { index } => self
                .catalog
                .members
                .get(index)
                .map_or(Command::None, |member| Command::OpenUrl {
                    url: member.link.clone(),
                }),
            SiteMessage::Tick { seconds } => {
                self.clock += seconds;
                Command::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = r#"{
        "name": "Appton LLC",
        "tagline": "We create apps",
        "logo": "logo_appton.png",
        "contactEmail": "contact@appton.io",
        "address": {
            "street": "701 Tillery Street",
            "locality": "Austin",
            "region": "TX",
            "postalCode": "78702",
            "country": "US"
        }
    }"#;

    const APPS: &str = r#"[
        {"name": "Lumen", "image": "apps/lumen.png", "link": "https://appton.io/lumen"},
        {"name": "Drift", "image": "apps/drift.png", "link": "https://appton.io/drift"}
    ]"#;

    const MEMBERS: &str = r#"[
        {"name": "Maya", "title": "Founder", "image": "team/maya.png",
         "link": "https://linkedin.com/in/maya"}
    ]"#;

    fn state() -> SiteState {
        SiteState::new(Catalog::from_json_strs(SITE, APPS, MEMBERS).expect("valid data"))
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert!(!state.is_measured());
        assert_eq!(state.selected_app(), 0);
        assert_eq!(state.breakpoint(), None);
    }

    #[test]
    fn test_resize_opens_the_gate() {
        let mut state = state();
        let cmd = state.update(SiteMessage::ViewportResized {
            width: 1280.0,
            height: 720.0,
        });
        assert!(cmd.is_none());
        assert!(state.is_measured());
        assert_eq!(state.breakpoint(), Some(Breakpoint::Large));
    }

    #[test]
    fn test_zero_width_resize_keeps_gate_closed() {
        let mut state = state();
        state.update(SiteMessage::ViewportResized {
            width: 0.0,
            height: 720.0,
        });
        assert!(!state.is_measured());
    }

    #[test]
    fn test_resize_recomputes_breakpoint() {
        let mut state = state();
        state.update(SiteMessage::ViewportResized {
            width: 350.0,
            height: 700.0,
        });
        assert_eq!(state.breakpoint(), Some(Breakpoint::Small));
        state.update(SiteMessage::ViewportResized {
            width: 500.0,
            height: 700.0,
        });
        assert_eq!(state.breakpoint(), Some(Breakpoint::Medium));
    }

    #[test]
    fn test_app_selection_bounds_guard() {
        let mut state = state();
        state.update(SiteMessage::AppSelected { index: 1 });
        assert_eq!(state.selected_app(), 1);
        state.update(SiteMessage::AppSelected { index: 99 });
        assert_eq!(state.selected_app(), 1);
    }

    #[test]
    fn test_logo_activation_opens_link() {
        let mut state = state();
        let cmd = state.update(SiteMessage::LogoActivated { index: 1 });
        assert_eq!(
            cmd,
            Command::OpenUrl {
                url: "https://appton.io/drift".to_string()
            }
        );
    }

    #[test]
    fn test_logo_activation_out_of_range_is_noop() {
        let mut state = state();
        assert!(state.update(SiteMessage::LogoActivated { index: 9 }).is_none());
    }

    #[test]
    fn test_nav_activation_scrolls() {
        let mut state = state();
        let cmd = state.update(SiteMessage::NavActivated {
            target: "contact".to_string(),
        });
        assert_eq!(
            cmd,
            Command::ScrollTo {
                anchor: "contact".to_string()
            }
        );
    }

    #[test]
    fn test_member_activation_opens_profile() {
        let mut state = state();
        let cmd = state.update(SiteMessage::MemberActivated { index: 0 });
        assert_eq!(
            cmd,
            Command::OpenUrl {
                url: "https://linkedin.com/in/maya".to_string()
            }
        );
    }

    #[test]
    fn test_ticks_accumulate() {
        let mut state = state();
        state.update(SiteMessage::Tick { seconds: 0.5 });
        state.update(SiteMessage::Tick { seconds: 0.25 });
        assert!((state.clock() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let mut state = state();
        state.update(SiteMessage::ViewportResized {
            width: 800.0,
            height: 600.0,
        });
        let json = serde_json::to_string(&state).expect("serialize");
        let back: SiteState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.selected_app(), state.selected_app());
        assert_eq!(back.viewport(), state.viewport());
    }
}
