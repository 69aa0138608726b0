//! The widget tree for the single page.

use crate::state::SiteMessage;
use appton_core::{Canvas, Constraints, DrawList, Event, Rect, Size, Theme, Widget};
use appton_data::Catalog;
use appton_layout::SectionFlow;
use appton_widgets::{
    Footer, Hero, LogoActivated, LogoOrbit, MemberActivated, NavActivated, NavBar, NavLink,
    Showcase, ShowcaseChanged, TeamSection,
};

/// Anchor id of the showcase section.
pub(crate) const APPS_ANCHOR: &str = "apps";

/// Anchor id of the team/contact section.
pub(crate) const CONTACT_ANCHOR: &str = "contact";

/// The composed page: every section in display order.
///
/// The page renders nothing until [`SitePage::resize`] has delivered the
/// first real viewport measurement.
#[derive(Debug, Clone)]
pub struct SitePage {
    navbar: NavBar,
    orbit: LogoOrbit,
    hero: Hero,
    showcase: Showcase,
    team: TeamSection,
    footer: Footer,
    theme: Theme,
    viewport: Option<Size>,
}

impl SitePage {
    /// Build the widget tree from a loaded catalog.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let theme = Theme::dark();
        Self {
            navbar: NavBar::new(catalog.manifest.logo.clone())
                .link(NavLink::new("OUR APPS", APPS_ANCHOR))
                .link(NavLink::new("CONTACT", CONTACT_ANCHOR))
                .theme(theme.clone()),
            orbit: LogoOrbit::new(&catalog.apps).theme(theme.clone()),
            hero: Hero::new(catalog.manifest.tagline.clone()).theme(theme.clone()),
            showcase: Showcase::new(&catalog.apps).theme(theme.clone()),
            team: TeamSection::new(&catalog.members).theme(theme.clone()),
            footer: Footer::new(catalog.manifest.clone()).theme(theme.clone()),
            theme,
            viewport: None,
        }
    }

    /// Whether the first measurement has happened.
    #[must_use]
    pub const fn is_measured(&self) -> bool {
        self.viewport.is_some()
    }

    /// The showcase carousel (selection lives there).
    #[must_use]
    pub const fn showcase(&self) -> &Showcase {
        &self.showcase
    }

    /// The orbiting logo cloud.
    #[must_use]
    pub const fn orbit(&self) -> &LogoOrbit {
        &self.orbit
    }

    /// Deliver a viewport measurement and lay the sections out.
    ///
    /// Zero-width measurements are ignored; the page stays dark until a
    /// real one arrives.
    pub fn resize(&mut self, viewport: Size) {
        if viewport.width <= 0.0 {
            return;
        }
        self.viewport = Some(viewport);
        self.relayout(viewport);
    }

    /// Advance the animation clock.
    pub fn set_clock(&mut self, seconds: f32) {
        self.orbit.set_phase(seconds);
    }

    /// Select a showcase item programmatically.
    pub fn select_app(&mut self, index: usize) -> Option<ShowcaseChanged> {
        self.showcase.select(index)
    }

    fn sections_mut(&mut self) -> [&mut dyn Widget; 6] {
        [
            &mut self.navbar,
            &mut self.orbit,
            &mut self.hero,
            &mut self.showcase,
            &mut self.team,
            &mut self.footer,
        ]
    }

    fn sections(&self) -> [&dyn Widget; 6] {
        [
            &self.navbar,
            &self.orbit,
            &self.hero,
            &self.showcase,
            &self.team,
            &self.footer,
        ]
    }

    fn relayout(&mut self, viewport: Size) {
        let constraints = Constraints::loose(viewport);
        let heights: Vec<f32> = self
            .sections()
            .iter()
            .map(|s| s.measure(constraints).height)
            .collect();

        let rects = SectionFlow::new(viewport.width).layout(&heights);
        for (section, rect) in self.sections_mut().into_iter().zip(rects) {
            section.layout(rect);
        }
    }

    /// Total page height after layout.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.sections()
            .iter()
            .map(|s| {
                let b = s.bounds();
                b.y + b.height
            })
            .fold(0.0, f32::max)
    }

    /// Render one frame.
    ///
    /// Before the first measurement this returns an empty list: no
    /// half-measured positions ever reach the output.
    #[must_use]
    pub fn render(&self) -> DrawList {
        let Some(viewport) = self.viewport else {
            return DrawList::new(Size::ZERO);
        };

        let mut list = DrawList::new(viewport);
        list.fill_rect(
            Rect::new(0.0, 0.0, viewport.width, self.content_height().max(viewport.height)),
            self.theme.background,
        );
        for section in self.sections() {
            section.paint(&mut list);
        }
        list
    }

    /// Route an input event to the sections and collect site messages.
    ///
    /// Resize events are handled synchronously here (measurement gate,
    /// breakpoint, relayout) and also reported upward so the model stays
    /// in step.
    pub fn dispatch(&mut self, event: &Event) -> Vec<SiteMessage> {
        if let Event::Resize { width, height } = *event {
            self.resize(Size::new(width, height));
            return vec![SiteMessage::ViewportResized { width, height }];
        }

        let mut messages = Vec::new();
        for section in self.sections_mut() {
            let Some(reaction) = section.event(event) else {
                continue;
            };
            if let Some(msg) = downcast_message(reaction) {
                messages.push(msg);
            }
        }
        messages
    }
}

/// Translate a widget reaction into a site message.
fn downcast_message(reaction: Box<dyn std::any::Any + Send>) -> Option<SiteMessage> {
    let reaction = match reaction.downcast::<NavActivated>() {
        Ok(msg) => {
            return Some(SiteMessage::NavActivated { target: msg.target });
        }
        Err(other) => other,
    };
    let reaction = match reaction.downcast::<LogoActivated>() {
        Ok(msg) => {
            return Some(SiteMessage::LogoActivated { index: msg.index });
        }
        Err(other) => other,
    };
    let reaction = match reaction.downcast::<ShowcaseChanged>() {
        Ok(msg) => {
            return Some(SiteMessage::AppSelected { index: msg.index });
        }
        Err(other) => other,
    };
    match reaction.downcast::<MemberActivated>() {
        Ok(msg) => Some(SiteMessage::MemberActivated { index: msg.index }),
        Err(_) => None,
    }
}
