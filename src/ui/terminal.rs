use is_terminal::IsTerminal;

/// What stderr/stdout can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_github_actions: bool,
}

/// Output stream a renderer writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Capabilities of `stream`; color follows whether that stream is a terminal.
pub fn detect_capabilities(stream: Stream) -> TerminalCapabilities {
    detect_for(stream, |key| std::env::var(key).ok(), |s| match s {
        Stream::Stdout => std::io::stdout().is_terminal(),
        Stream::Stderr => std::io::stderr().is_terminal(),
    })
}

fn detect_for(
    stream: Stream,
    get_env: impl Fn(&str) -> Option<String>,
    is_terminal: impl Fn(Stream) -> bool,
) -> TerminalCapabilities {
    detect_capabilities_impl(get_env, is_terminal(stream))
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some_and(|v| !v.is_empty());
    let force_color = get_env("CLICOLOR_FORCE").is_some_and(|v| v != "0");

    TerminalCapabilities {
        supports_color: !no_color && (force_color || (is_tty && !term_is_dumb)),
        supports_unicode: !term_is_dumb && !ascii_locale(&get_env),
        is_github_actions: get_env("GITHUB_ACTIONS").is_some_and(|v| v == "true"),
    }
}

/// `LANG=C`/`POSIX` without a UTF-8 override
fn ascii_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    for key in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Some(val) = get_env(key).filter(|v| !v.is_empty()) {
            let v = val.to_lowercase();
            return v == "c" || v == "posix";
        }
    }
    false
}
