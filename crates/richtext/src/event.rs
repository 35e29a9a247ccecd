//! Interaction events attached to component styles.

use crate::component::Component;

/// What happens when a rendered component is clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickAction {
    /// Open the value as a URL.
    OpenUrl,
    /// Open the value as a file path.
    OpenFile,
    /// Run the value as a command.
    RunCommand,
    /// Put the value into the input prompt.
    SuggestCommand,
    /// Jump to the page given by the value.
    ChangePage,
    /// Copy the value to the clipboard.
    CopyToClipboard,
}

impl ClickAction {
    /// Look up an action by its wire name (e.g. `open_url`).
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "open_url" => Some(ClickAction::OpenUrl),
            "open_file" => Some(ClickAction::OpenFile),
            "run_command" => Some(ClickAction::RunCommand),
            "suggest_command" => Some(ClickAction::SuggestCommand),
            "change_page" => Some(ClickAction::ChangePage),
            "copy_to_clipboard" => Some(ClickAction::CopyToClipboard),
            _ => None,
        }
    }

    /// The wire name of this action.
    pub fn name(&self) -> &'static str {
        match self {
            ClickAction::OpenUrl => "open_url",
            ClickAction::OpenFile => "open_file",
            ClickAction::RunCommand => "run_command",
            ClickAction::SuggestCommand => "suggest_command",
            ClickAction::ChangePage => "change_page",
            ClickAction::CopyToClipboard => "copy_to_clipboard",
        }
    }
}

/// A click handler: an action plus its string payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClickEvent {
    pub action: ClickAction,
    pub value: String,
}

impl ClickEvent {
    /// Create a new click event.
    pub fn new(action: ClickAction, value: impl Into<String>) -> Self {
        Self {
            action,
            value: value.into(),
        }
    }

    /// Shorthand for an `open_url` click event.
    pub fn open_url(url: impl Into<String>) -> Self {
        Self::new(ClickAction::OpenUrl, url)
    }

    /// Shorthand for a `run_command` click event.
    pub fn run_command(command: impl Into<String>) -> Self {
        Self::new(ClickAction::RunCommand, command)
    }
}

/// What is shown when a rendered component is hovered.
#[derive(Clone, Debug, PartialEq)]
pub enum HoverEvent {
    /// Show another component as a tooltip.
    ShowText(Box<Component>),
}

impl HoverEvent {
    /// Create a tooltip hover event.
    pub fn show_text(text: Component) -> Self {
        HoverEvent::ShowText(Box::new(text))
    }
}
