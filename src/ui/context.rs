use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Resolved output settings shared by every command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(json, verbose, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.color,
        };

        Self {
            json,
            verbose,
            caps,
            color: color && !json,
            unicode: caps.unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            color: false,
            unicode: true,
            width: 120,
        }
    }

    #[test]
    fn auto_follows_detected_color() {
        let ui = UiContext::from_caps(false, 0, None, plain_caps());
        assert!(!ui.color);

        let tty = TerminalCapabilities {
            color: true,
            ..plain_caps()
        };
        assert!(UiContext::from_caps(false, 0, Some(ColorWhen::Auto), tty).color);
        assert!(!UiContext::from_caps(false, 0, Some(ColorWhen::Never), tty).color);
    }

    #[test]
    fn explicit_color_always_overrides_detection() {
        let ui = UiContext::from_caps(false, 0, Some(ColorWhen::Always), plain_caps());
        assert!(ui.color);
    }

    #[test]
    fn json_never_colors() {
        let ui = UiContext::from_caps(true, 0, Some(ColorWhen::Always), plain_caps());
        assert!(!ui.color);
    }
}
