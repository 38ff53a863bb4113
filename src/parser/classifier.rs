use once_cell::sync::Lazy;
use regex::Regex;

/// Checkbox entry: `[ ] 12345 description` (exactly one blank or `x` in the
/// brackets, id is exactly five digits, description must be present).
static MOD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\[[ x]\]\s*(\d{5})\s+").unwrap());

/// Group opener: `group <id>`. The payload is captured raw; numeric
/// conversion happens at the parse layer so the failure can carry line context.
static GROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*group (.*)$").unwrap());

/// Group closer: the bare token `end`, nothing else on the line.
static END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*end$").unwrap());

/// Structural kind of a single input line (terminator already stripped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Checkbox entry with its five-digit id.
    Mod { id: u32 },
    /// Group opener with the raw id payload, not yet parsed.
    GroupOpen { id_text: &'a str },
    /// Group closer.
    GroupEnd,
    /// Anything else; no structural effect, passed through verbatim.
    Other,
}

/// Classify one line. First match wins: mod, group open, group close,
/// otherwise ordinary. Near-miss marker lines (wrong checkbox character,
/// wrong id width, trailing junk after `end`) are ordinary, not errors.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(caps) = MOD_RE.captures(line) {
        // Five digits always fit a u32.
        let id = caps[1].parse::<u32>().expect("digit capture");
        return LineKind::Mod { id };
    }
    if let Some(caps) = GROUP_RE.captures(line) {
        return LineKind::GroupOpen {
            id_text: caps.get(1).expect("capture 1").as_str(),
        };
    }
    if END_RE.is_match(line) {
        return LineKind::GroupEnd;
    }
    LineKind::Other
}

/// Split a line into its content and terminator (`\n`, `\r\n` or empty).
/// Classification applies to the content; the terminator is preserved
/// verbatim on output.
pub fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}
