//! Decide which interactions close which branches.
use crate::core::Key;
use crate::core::settings::{CloseOn, Settings};
use crate::core::time::{Duration, Instant};

/// A normalized interaction that may dismiss part of a menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Escape was pressed while a submenu was open.
    Escape,
    /// The pointer interacted outside of the whole menu tree.
    PointerOutside,
    /// The pointer left the trigger and the submenu of the given branch.
    HoverOut(Key),
    /// The given item was selected.
    Select(Key),
    /// The back-navigation key was pressed inside a submenu.
    Back,
}

/// What an [`Interaction`] does to the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// Close the deepest open branch only.
    CloseBranch,
    /// Close every open branch at every level.
    CloseAll,
    /// Close the hovered-out branch once the delay elapses.
    CloseBranchAfter(Duration),
    /// Close the entire tree from its root.
    CloseTree,
    /// Open the selected item's branch, or keep it open.
    OpenBranch,
    /// Leave the tree as it is.
    Keep,
}

/// Classifies an [`Interaction`].
///
/// `has_children` tells whether the selected item, if any, opens a submenu.
/// Items with children never close the tree on selection.
pub fn classify(interaction: &Interaction, settings: &Settings, has_children: bool) -> Dismissal {
    let allowed = |flag: CloseOn, dismissal: Dismissal| {
        if settings.close_on.contains(flag) {
            dismissal
        } else {
            Dismissal::Keep
        }
    };

    match interaction {
        Interaction::Escape => allowed(CloseOn::ESCAPE, Dismissal::CloseBranch),
        Interaction::Back => Dismissal::CloseBranch,
        Interaction::PointerOutside => allowed(CloseOn::POINTER_OUTSIDE, Dismissal::CloseAll),
        Interaction::HoverOut(_) => allowed(
            CloseOn::HOVER_OUT,
            Dismissal::CloseBranchAfter(settings.hover_close_delay()),
        ),
        Interaction::Select(_) if has_children => Dismissal::OpenBranch,
        Interaction::Select(_) if settings.close_on_select => Dismissal::CloseTree,
        Interaction::Select(_) => Dismissal::Keep,
    }
}

/// Pending hover dismissals, each cancellable until its deadline.
#[derive(Debug, Clone, Default)]
pub struct HoverDebounce {
    pending: Vec<(Key, Instant)>,
}

impl HoverDebounce {
    /// Creates an empty [`HoverDebounce`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `key` to close after `delay`. Returns the deadline.
    ///
    /// Rescheduling an already pending branch keeps the earlier deadline.
    pub fn schedule(&mut self, key: Key, now: Instant, delay: Duration) -> Instant {
        let deadline = now + delay;

        match self.pending.iter_mut().find(|(pending, _)| *pending == key) {
            Some((_, existing)) => {
                *existing = (*existing).min(deadline);
                *existing
            }
            None => {
                self.pending.push((key, deadline));
                deadline
            }
        }
    }

    /// Cancels the pending close of `key`. Returns whether one was pending.
    pub fn cancel(&mut self, key: &Key) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(pending, _)| pending != key);

        self.pending.len() != before
    }

    /// Returns whether `key` has a pending close.
    pub fn is_pending(&self, key: &Key) -> bool {
        self.pending.iter().any(|(pending, _)| pending == key)
    }

    /// Returns the earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(_, deadline)| *deadline).min()
    }

    /// Removes and returns every branch whose deadline has passed.
    pub fn due(&mut self, now: Instant) -> Vec<Key> {
        let mut due = Vec::new();

        self.pending.retain(|(key, deadline)| {
            if *deadline <= now {
                due.push(key.clone());
                false
            } else {
                true
            }
        });

        due
    }

    /// Drops every pending close.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
