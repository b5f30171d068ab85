//! Coordinate one submenu item with the submenu it opens.
use super::Event;
use super::expansion::{ExpansionHandle, Transition};
use super::level::{Context, MenuLevel};
use crate::core::placement::{Align, Direction};
use crate::core::{Focus, FocusStrategy, Id, Key, Placement, Settings};
use crate::focus::{self, FocusScope, Restoration};

/// How open submenus are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presentation {
    /// A floating overlay next to the trigger.
    #[default]
    Popover,
    /// A full-screen tray, for mobile devices.
    Tray,
}

impl Presentation {
    /// Picks the [`Presentation`] for the given mobile capability.
    pub fn detect(is_mobile: bool) -> Self {
        if is_mobile { Self::Tray } else { Self::Popover }
    }
}

/// The overlay of an open submenu, as handed to the positioning collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay {
    /// A floating overlay.
    Popover {
        /// Where the overlay opens.
        placement: Placement,
        /// The main-axis offset from the trigger.
        offset: f32,
        /// Whether the overlay may flip when it does not fit.
        should_flip: bool,
        /// Whether the rest of the menu stays interactive.
        is_non_modal: bool,
    },
    /// A full-screen tray.
    Tray,
}

impl Overlay {
    fn new(presentation: Presentation, placement: Placement, settings: &Settings) -> Self {
        match presentation {
            Presentation::Popover => Overlay::Popover {
                placement,
                offset: settings.offset,
                should_flip: settings.should_flip,
                is_non_modal: true,
            },
            Presentation::Tray => Overlay::Tray,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Wraps an item that has children together with the submenu it opens.
///
/// Whether it is open is owned by the parent level; the trigger only sends
/// requests through its [`ExpansionHandle`] and mounts or unmounts its
/// submenu to match.
pub struct SubmenuTrigger {
    target: Key,
    element: Id,
    depth: usize,
    parent: ExpansionHandle,
    scope: FocusScope,
    placement: Placement,
    phase: Phase,
    overlay: Option<Overlay>,
    submenu: Option<MenuLevel>,
}

impl SubmenuTrigger {
    /// Creates a [`SubmenuTrigger`] for `target`.
    ///
    /// `element` is the item itself, `parent` the expansion state of the level
    /// holding it and `scope` the focus scope of that level.
    pub fn new(
        target: Key,
        element: Id,
        depth: usize,
        parent: ExpansionHandle,
        scope: FocusScope,
        placement: Placement,
    ) -> Self {
        Self {
            target,
            element,
            depth,
            parent,
            scope,
            placement,
            phase: Phase::Closed,
            overlay: None,
            submenu: None,
        }
    }

    /// Maps a requested direction and alignment into a [`Placement`].
    pub fn compute_placement(direction: Direction, align: Align) -> Placement {
        Placement::compute(direction, align)
    }

    /// Returns the key of the item this trigger wraps.
    pub fn target(&self) -> &Key {
        &self.target
    }

    /// Returns the element of the item this trigger wraps.
    pub fn element(&self) -> Id {
        self.element
    }

    /// Returns the depth of the level holding the trigger.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns whether the parent level has this trigger expanded.
    pub fn is_open(&self) -> bool {
        self.parent.is_expanded(&self.target)
    }

    /// Returns whether the submenu is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.submenu.is_some()
    }

    /// Returns the [`Placement`] of the submenu.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Returns the overlay of the submenu, while mounted.
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Returns the submenu level, while mounted.
    pub fn submenu(&self) -> Option<&MenuLevel> {
        self.submenu.as_ref()
    }

    pub(crate) fn set_scope(&mut self, scope: FocusScope) {
        self.scope = scope;
    }

    pub(crate) fn submenu_mut(&mut self) -> Option<&mut MenuLevel> {
        self.submenu.as_mut()
    }

    /// Requests the parent level to expand this trigger. A no-op if it already is.
    pub fn open(&self, focus_strategy: Option<FocusStrategy>) -> Transition {
        self.parent.request_open(&self.target, focus_strategy)
    }

    /// Requests the parent level to collapse this trigger.
    ///
    /// Ignored if a sibling has been expanded in the meantime.
    pub fn request_close(&self) -> Transition {
        self.parent.request_close(&self.target)
    }

    /// Brings the mounted submenu in line with the parent level.
    pub(crate) fn sync(
        &mut self,
        cx: &Context<'_>,
        focus: &mut dyn Focus,
        events: &mut Vec<Event>,
    ) {
        let should_open = self.is_open();

        match self.phase {
            Phase::Closed if should_open => self.mount(cx, focus, events),
            Phase::Open if !should_open => self.unmount(cx, focus, events),
            Phase::Open => {
                if let Some(submenu) = &mut self.submenu {
                    submenu.sync(cx, focus, events);
                }
            }
            Phase::Closed | Phase::Opening | Phase::Closing => {}
        }
    }

    fn mount(&mut self, cx: &Context<'_>, focus: &mut dyn Focus, events: &mut Vec<Event>) {
        self.phase = Phase::Opening;

        let submenu = MenuLevel::mount(Some(&self.target), self.depth + 1, cx);

        if let Some(id) = self
            .parent
            .focus_strategy()
            .and_then(|strategy| submenu.initial_focus(strategy))
        {
            focus.focus(id);
        }

        self.overlay = Some(Overlay::new(cx.presentation, self.placement, cx.settings));
        self.submenu = Some(submenu);
        self.phase = Phase::Open;

        log::debug!("Opened submenu `{}` at depth {}", self.target, self.depth);
        events.push(Event::Opened {
            key: self.target.clone(),
            depth: self.depth,
        });
    }

    fn unmount(&mut self, cx: &Context<'_>, focus: &mut dyn Focus, events: &mut Vec<Event>) {
        self.phase = Phase::Closing;

        // Deeper branches go first, so focus climbs back one level at a time
        if let Some(submenu) = &mut self.submenu {
            submenu.close(cx, focus, events);
        }

        if focus::restore(&self.scope, self.element, focus) == Restoration::Returned {
            events.push(Event::FocusReturned {
                key: self.target.clone(),
            });
        }

        self.submenu = None;
        self.overlay = None;
        self.phase = Phase::Closed;

        log::debug!("Closed submenu `{}` at depth {}", self.target, self.depth);
        events.push(Event::Closed {
            key: self.target.clone(),
            depth: self.depth,
        });
    }
}
