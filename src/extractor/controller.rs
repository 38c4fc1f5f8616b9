use crate::extractor::{ControllerRecord, EndpointDescriptor, HttpMethod, Parameter};
use crate::source::SourceFile;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Annotations that mark a class as a controller.
pub const CONTROLLER_MARKERS: &[&str] = &["@RestController", "@Controller"];

/// How many lines after a mapping annotation are searched for the handler signature.
pub const LOOKAHEAD_LINES: usize = 10;
/// How many lines before a mapping annotation are searched for its doc comment.
pub const LOOKBACK_LINES: usize = 10;
/// How many characters after the mapping line are searched for `@RequestParam`s.
pub const PARAM_WINDOW_CHARS: usize = 200;

static CLASS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?:@[\w.]+(?:\([^)]*\))?\s+)*(?:(?:public|protected|private|abstract|final|static)\s+)*class\s+\w+",
    )
    .unwrap()
});

static BASE_PATH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"@RequestMapping\([^)"']*["']([^"']*)["']"#).unwrap());

static MAPPING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"@(GetMapping|PostMapping|PutMapping|DeleteMapping|PatchMapping|RequestMapping)\([^)"']*["']([^"']+)["']"#,
    )
    .unwrap()
});

static REQUEST_METHOD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"RequestMethod\.(GET|POST|PUT|DELETE|PATCH)\b").unwrap());

static SIGNATURE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:public|private|protected)\s+(?:(?:static|final|synchronized|abstract)\s+)*[\w.<>\[\]?]+(?:\s*,\s*[\w.<>\[\]?]+)*\s+(\w+)\s*\(",
    )
    .unwrap()
});

static PARAM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"@RequestParam\([^)]*?(?:value|name)\s*=\s*["']([^"']+)["'][^)]*?defaultValue\s*=\s*["']([^"']+)["'][^)]*\)"#,
    )
    .unwrap()
});

/// Spring controller extractor.
///
/// Finds `@GetMapping`, `@PostMapping`, `@PutMapping`, `@DeleteMapping`, `@PatchMapping` and
/// method-level `@RequestMapping` annotations with a literal path, then pairs each one with
/// the handler signature that follows it and the doc comment that precedes it. All searches
/// are bounded by [`LOOKAHEAD_LINES`], [`LOOKBACK_LINES`] and [`PARAM_WINDOW_CHARS`].
pub struct ControllerExtractor;

impl ControllerExtractor {
    /// Whether the content carries one of the [`CONTROLLER_MARKERS`].
    pub fn is_controller(content: &str) -> bool {
        CONTROLLER_MARKERS.iter().any(|marker| content.contains(marker))
    }

    /// Extracts a controller record from a source file, named after the file stem.
    ///
    /// Returns `None` for files that are not controllers.
    pub fn extract(source: &SourceFile) -> Option<ControllerRecord> {
        Self::extract_from(&source.stem(), &source.content)
    }

    /// Extracts a controller record from raw text.
    ///
    /// Returns `None` if the content has no controller marker. A controller without any
    /// recognizable endpoint still yields a record with an empty endpoint list.
    pub fn extract_from(display_name: &str, content: &str) -> Option<ControllerRecord> {
        if !Self::is_controller(content) {
            debug!("{} has no controller marker, skipping", display_name);
            return None;
        }

        let lines = SourceLines::new(content);
        let class_line = lines.iter().position(|line| CLASS_PATTERN.is_match(line));

        let header = match class_line {
            Some(idx) => lines.text_through(idx),
            None => content,
        };
        let base_path = BASE_PATH_PATTERN
            .captures(header)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        // Mappings on or above the class declaration are the route prefix, not endpoints.
        let first_body_line = class_line.map_or(0, |idx| idx + 1);

        let mut endpoints = Vec::new();
        for idx in first_body_line..lines.len() {
            let Some(cap) = MAPPING_PATTERN.captures(lines.get(idx)) else {
                continue;
            };
            let local_path = &cap[2];

            let Some(handler_name) = find_handler_name(&lines, idx) else {
                debug!(
                    "{}: no handler signature within {} lines of mapping {}, dropping",
                    display_name, LOOKAHEAD_LINES, local_path
                );
                continue;
            };

            let method = http_method(&cap[1], lines.get(idx));
            let mut endpoint = EndpointDescriptor::new(handler_name, &base_path, local_path, method);
            endpoint.parameters = find_parameters(lines.window_after(idx, PARAM_WINDOW_CHARS));
            endpoint.doc_summary = find_doc_summary(&lines, idx);

            debug!(
                "{}: {} {} -> {}",
                display_name, endpoint.method, endpoint.path, endpoint.handler_name
            );
            endpoints.push(endpoint);
        }

        Some(ControllerRecord {
            display_name: display_name.to_string(),
            base_path,
            endpoints,
        })
    }
}

/// Lines of a file together with their byte offsets.
struct SourceLines<'a> {
    content: &'a str,
    lines: Vec<(usize, &'a str)>,
}

impl<'a> SourceLines<'a> {
    fn new(content: &'a str) -> Self {
        let mut offset = 0;
        let lines = content
            .split('\n')
            .map(|line| {
                let start = offset;
                offset += line.len() + 1;
                (start, line)
            })
            .collect();
        Self { content, lines }
    }

    fn len(&self) -> usize {
        self.lines.len()
    }

    fn get(&self, idx: usize) -> &'a str {
        self.lines[idx].1
    }

    fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().map(|(_, line)| *line)
    }

    /// The content from the start of the file through the end of line `idx`.
    fn text_through(&self, idx: usize) -> &'a str {
        let (start, line) = self.lines[idx];
        &self.content[..start + line.len()]
    }

    /// Up to `max_chars` characters starting at the line after `idx`.
    fn window_after(&self, idx: usize, max_chars: usize) -> &'a str {
        let start = self
            .lines
            .get(idx + 1)
            .map_or(self.content.len(), |(start, _)| *start);
        let rest = &self.content[start..];
        match rest.char_indices().nth(max_chars) {
            Some((end, _)) => &rest[..end],
            None => rest,
        }
    }
}

fn http_method(annotation: &str, line: &str) -> HttpMethod {
    match annotation {
        "PostMapping" => HttpMethod::Post,
        "PutMapping" => HttpMethod::Put,
        "DeleteMapping" => HttpMethod::Delete,
        "PatchMapping" => HttpMethod::Patch,
        "RequestMapping" => REQUEST_METHOD_PATTERN
            .captures(line)
            .map_or(HttpMethod::Get, |cap| match &cap[1] {
                "POST" => HttpMethod::Post,
                "PUT" => HttpMethod::Put,
                "DELETE" => HttpMethod::Delete,
                "PATCH" => HttpMethod::Patch,
                _ => HttpMethod::Get,
            }),
        _ => HttpMethod::Get,
    }
}

fn find_handler_name(lines: &SourceLines, mapping_line: usize) -> Option<String> {
    let last = (mapping_line + LOOKAHEAD_LINES).min(lines.len().saturating_sub(1));
    (mapping_line + 1..=last).find_map(|idx| {
        SIGNATURE_PATTERN
            .captures(lines.get(idx).trim())
            .map(|cap| cap[1].to_string())
    })
}

fn find_parameters(window: &str) -> Vec<Parameter> {
    PARAM_PATTERN
        .captures_iter(window)
        .map(|cap| Parameter::new(&cap[1], &cap[2]))
        .collect()
}

fn find_doc_summary(lines: &SourceLines, mapping_line: usize) -> String {
    let floor = mapping_line.saturating_sub(LOOKBACK_LINES);

    // Walk up past annotations and blank lines to the end of a block comment.
    let mut idx = mapping_line;
    let comment_end = loop {
        if idx == floor {
            return String::new();
        }
        idx -= 1;
        let line = lines.get(idx).trim();
        if line.is_empty() || line.starts_with('@') {
            continue;
        }
        if line.ends_with("*/") {
            break idx;
        }
        return String::new();
    };

    let mut block = Vec::new();
    let mut idx = comment_end;
    loop {
        let line = lines.get(idx).trim();
        block.push(line);
        if line.starts_with("/*") || idx == floor {
            break;
        }
        idx -= 1;
    }

    block
        .into_iter()
        .rev()
        .map(comment_text)
        .find(|text| !text.is_empty() && !text.starts_with('@'))
        .map(str::to_string)
        .unwrap_or_default()
}

fn comment_text(line: &str) -> &str {
    let line = line.strip_suffix("*/").unwrap_or(line);
    line.trim_start_matches('/').trim_start_matches('*').trim()
}
