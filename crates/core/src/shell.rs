//! Publish messages and schedule updates from inside an interaction handler.
use crate::time::Instant;

/// The status of an interaction after being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The interaction was **NOT** handled by any widget.
    Ignored,

    /// The interaction was handled and processed by a widget.
    Captured,
}

/// When the host should run the next visual update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RedrawRequest {
    /// Redraw the next frame.
    NextFrame,

    /// Redraw at the given time.
    At(Instant),

    /// No redraw is needed.
    Wait,
}

impl From<Instant> for RedrawRequest {
    fn from(time: Instant) -> Self {
        Self::At(time)
    }
}

/// A connection to the state of a shell.
///
/// Widgets use a [`Shell`] to publish messages to the application and to
/// request visual updates after mutating their state. All of it happens
/// synchronously inside the handler; the host acts on it afterwards.
#[derive(Debug)]
pub struct Shell<'a, Message> {
    messages: &'a mut Vec<Message>,
    event_status: Status,
    redraw_request: RedrawRequest,
}

impl<'a, Message> Shell<'a, Message> {
    /// Creates a new [`Shell`] with the provided buffer of messages.
    pub fn new(messages: &'a mut Vec<Message>) -> Self {
        Self {
            messages,
            event_status: Status::Ignored,
            redraw_request: RedrawRequest::Wait,
        }
    }

    /// Publish the given `Message` for an application to process it.
    pub fn publish(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Marks the current interaction as captured. Prevents "event bubbling".
    pub fn capture_event(&mut self) {
        self.event_status = Status::Captured;
    }

    /// Returns whether the current interaction has been captured.
    #[must_use]
    pub fn is_event_captured(&self) -> bool {
        self.event_status == Status::Captured
    }

    /// Requests a new frame to be drawn as soon as possible.
    pub fn request_redraw(&mut self) {
        self.redraw_request = RedrawRequest::NextFrame;
    }

    /// Requests a new frame at the given [`RedrawRequest`], keeping the earliest one.
    pub fn request_redraw_at(&mut self, redraw_request: impl Into<RedrawRequest>) {
        self.redraw_request = self.redraw_request.min(redraw_request.into());
    }

    /// Returns the request a redraw should happen, if any.
    #[must_use]
    pub fn redraw_request(&self) -> RedrawRequest {
        self.redraw_request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Duration;

    #[test]
    fn earliest_redraw_wins() {
        let mut messages: Vec<()> = Vec::new();
        let mut shell = Shell::new(&mut messages);
        let now = Instant::now();

        shell.request_redraw_at(now + Duration::from_millis(200));
        shell.request_redraw_at(now + Duration::from_millis(500));
        assert_eq!(
            shell.redraw_request(),
            RedrawRequest::At(now + Duration::from_millis(200))
        );

        shell.request_redraw();
        assert_eq!(shell.redraw_request(), RedrawRequest::NextFrame);
    }

    #[test]
    fn captured_interactions_stay_captured() {
        let mut messages = Vec::new();
        let mut shell = Shell::new(&mut messages);
        assert!(!shell.is_event_captured());

        shell.publish("opened");
        shell.capture_event();
        shell.request_redraw();

        assert!(shell.is_event_captured());
        assert_eq!(messages, vec!["opened"]);
    }
}
