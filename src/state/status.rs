//! Status Message
//!
//! The single transient success/error message shown after a mutating action.

/// Default delay before a shown message hides itself
pub const STATUS_TIMEOUT_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn class_name(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Error }
    }
}

/// Owner of the status message.
///
/// Every `show` bumps the generation; a hide timer only takes effect if it
/// carries the generation of the message that is still on screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusSlot {
    message: Option<StatusMessage>,
    visible: bool,
    generation: u64,
}

impl StatusSlot {
    /// Replace the current message and make it visible. Returns the token the
    /// hide timer must present to [`expire`](Self::expire).
    pub fn show(&mut self, message: StatusMessage) -> u64 {
        self.generation += 1;
        self.message = Some(message);
        self.visible = true;
        self.generation
    }

    /// Timer callback. Ignored if a newer message has been shown since.
    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.visible = false;
        }
    }

    pub fn clear(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        self.message.as_ref().map_or("", |m| m.text.as_str())
    }

    /// Class attribute for the `#message` element
    pub fn class_name(&self) -> String {
        match (&self.message, self.visible) {
            (None, _) => "hidden".to_string(),
            (Some(m), true) => m.kind.class_name().to_string(),
            (Some(m), false) => format!("{} hidden", m.kind.class_name()),
        }
    }
}
