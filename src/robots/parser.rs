//! Robots.txt line parser
//!
//! Only `User-agent` and `Disallow` are recognised. Each `User-agent` line decides
//! on its own whether the following `Disallow` lines apply; consecutive
//! `User-agent` lines do not form a shared group.

use crate::robots::ExclusionRules;
use crate::url::resolve_path_and_query;
use url::Url;

/// Line-at-a-time parser that collects the rules applying to one identity
#[derive(Debug)]
pub struct RuleParser<'a> {
    document_url: &'a Url,
    identity: Option<&'a str>,
    /// Whether the current `User-agent` line matched our identity
    active: bool,
    rules: ExclusionRules,
}

impl<'a> RuleParser<'a> {
    /// Creates a parser for a document located at `document_url`
    ///
    /// `Disallow` values are resolved against `document_url`.
    pub fn new(document_url: &'a Url, identity: Option<&'a str>) -> Self {
        Self {
            document_url,
            identity,
            active: false,
            rules: ExclusionRules::new(),
        }
    }

    /// Processes a single line of the document
    pub fn feed_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        let Some((command, value)) = line.split_once(':') else {
            tracing::trace!("Ignoring robots.txt line without ':': {}", line);
            return;
        };
        let value = value.trim();

        if command.eq_ignore_ascii_case("user-agent") {
            self.active = value == "*"
                || self
                    .identity
                    .is_some_and(|identity| eq_ignore_case(value, identity));
        } else if command.eq_ignore_ascii_case("disallow") {
            if self.active && !value.is_empty() {
                self.add_disallow(value);
            }
        } else {
            tracing::trace!("Ignoring robots.txt directive: {}", command);
        }
    }

    /// Processes every line of `body`
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. A leading byte-order mark is ignored.
    pub fn feed_document(&mut self, body: &str) {
        let body = body.strip_prefix('\u{feff}').unwrap_or(body);
        for line in body.split(|c: char| c == '\n' || c == '\r') {
            self.feed_line(line);
        }
    }

    /// Consumes the parser and returns the collected rules
    pub fn finish(self) -> ExclusionRules {
        self.rules
    }

    fn add_disallow(&mut self, value: &str) {
        match resolve_path_and_query(self.document_url, value) {
            Ok(prefix) => {
                tracing::debug!("Adding exclusion rule: {}", prefix);
                self.rules.insert(prefix);
            }
            Err(e) => {
                tracing::debug!("Dropping Disallow value '{}': {}", value, e);
            }
        }
    }
}

/// Parses a whole robots.txt document into the rules applying to `identity`
///
/// # Examples
///
/// ```
/// use robots_resolver::robots::parse_document;
/// use url::Url;
///
/// let base = Url::parse("http://example.com/robots.txt").unwrap();
/// let rules = parse_document("User-agent: *\nDisallow: /private\n", &base, None);
/// assert!(rules.matches("/private/page"));
/// ```
pub fn parse_document(body: &str, document_url: &Url, identity: Option<&str>) -> ExclusionRules {
    let mut parser = RuleParser::new(document_url, identity);
    parser.feed_document(body);
    parser.finish()
}

/// Unicode case-insensitive comparison, so Latin-1 identities match too
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
