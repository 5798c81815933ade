use is_terminal::IsTerminal;

/// What the attached console can render, before any `--color` override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// Interactive, color-capable, not a CI log
    pub color: bool,
    pub unicode: bool,
    /// Columns available for the error block
    pub width: u16,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    let env = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());
    let width = crossterm::terminal::size().map(|(cols, _)| cols).ok();
    capabilities_from(env, std::io::stdout().is_terminal(), width)
}

fn capabilities_from(
    env: impl Fn(&str) -> Option<String>,
    interactive: bool,
    width: Option<u16>,
) -> TerminalCapabilities {
    let dumb = env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
    let ci = env("CI").is_some() || env("GITHUB_ACTIONS").is_some();

    // First locale variable that is set decides; none set means UTF-8.
    let unicode = !dumb
        && ["LC_ALL", "LC_CTYPE", "LANG"]
            .iter()
            .find_map(|key| env(key))
            .map_or(true, |locale| {
                let locale = locale.to_ascii_lowercase();
                locale.contains("utf-8") || locale.contains("utf8")
            });

    TerminalCapabilities {
        color: interactive && !dumb && !ci && env("NO_COLOR").is_none(),
        unicode,
        width: width.unwrap_or(80),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(vars: &[(&str, &str)], interactive: bool) -> TerminalCapabilities {
        capabilities_from(
            |key| {
                vars.iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| v.to_string())
            },
            interactive,
            None,
        )
    }

    #[test]
    fn tty_gets_color_and_unicode() {
        let caps = detect(&[("TERM", "xterm-256color"), ("LANG", "en_US.UTF-8")], true);
        assert!(caps.color);
        assert!(caps.unicode);
        assert_eq!(caps.width, 80);
    }

    #[test]
    fn no_color_ci_and_pipes_disable_color() {
        assert!(!detect(&[("NO_COLOR", "1")], true).color);
        assert!(!detect(&[("CI", "true")], true).color);
        assert!(!detect(&[], false).color);
    }

    #[test]
    fn dumb_terminal_is_plain_ascii() {
        let caps = detect(&[("TERM", "dumb")], true);
        assert!(!caps.color);
        assert!(!caps.unicode);
    }

    #[test]
    fn c_locale_falls_back_to_ascii() {
        assert!(!detect(&[("LC_ALL", "C"), ("LANG", "en_US.UTF-8")], true).unicode);
    }
}
