use std::iter::Enumerate;
use std::str::Lines;

use crate::error::{Error, Result, SyntaxError};

use super::{Entry, Section};

/// Line-oriented parse over descriptor text.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
        }
    }
}

impl Parser<'_> {
    pub fn into_sections(mut self) -> Result<Vec<Section>> {
        let mut sections = Vec::<Section>::with_capacity(16);
        let mut current = None::<usize>;

        while let Some((line, text)) = self.next_logical_line(current.is_some())? {
            let malformed = |kind| Error::MalformedDescriptor { line, kind };

            if let Some(header) = text.strip_prefix('[') {
                let name = parse_section_name(header).map_err(malformed)?;

                // Repeated headers extend the earlier section.
                current = Some(match sections.iter().position(|s| s.name() == name) {
                    Some(i) => i,
                    None => {
                        sections.push(Section::new(name, Vec::with_capacity(32)));
                        sections.len() - 1
                    }
                });
                continue;
            }

            // Text ahead of the first header is free-form preamble.
            if let Some(index) = current {
                sections[index].push(parse_entry(&text));
            }
        }

        Ok(sections)
    }

    /// Next non-empty line with comments stripped and `\` continuations joined.
    /// Line numbers are 1-based and refer to the first physical line. Outside a section,
    /// an unbalanced quote is not an error.
    fn next_logical_line(&mut self, in_section: bool) -> Result<Option<(usize, String)>> {
        let mut logical = String::new();
        let mut start = None::<usize>;

        while let Some((index, raw)) = self.lines.next() {
            let line = index + 1;
            let stripped = match strip_comment(raw) {
                Ok(stripped) => stripped,
                Err(_) if !in_section => raw.trim_end(),
                Err(kind) => return Err(Error::MalformedDescriptor { line, kind }),
            };

            if let Some(head) = stripped.strip_suffix('\\') {
                start.get_or_insert(line);
                logical.push_str(head);
                continue;
            }

            logical.push_str(stripped);
            let trimmed = logical.trim();
            if trimmed.is_empty() {
                logical.clear();
                start = None;
                continue;
            }

            return Ok(Some((start.unwrap_or(line), trimmed.to_string())));
        }

        // Input ended inside a continuation.
        let trimmed = logical.trim();
        Ok(match start {
            Some(line) if !trimmed.is_empty() => Some((line, trimmed.to_string())),
            _ => None,
        })
    }
}

/// Drops a `;` comment outside quotes. Quotes must close on the line they open.
fn strip_comment(line: &str) -> std::result::Result<&str, SyntaxError> {
    let mut within_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => within_quotes = !within_quotes,
            ';' if !within_quotes => return Ok(line[..i].trim_end()),
            _ => {}
        }
    }

    if within_quotes {
        Err(SyntaxError::UnterminatedString)
    } else {
        Ok(line.trim_end())
    }
}

fn parse_section_name(header: &str) -> std::result::Result<String, SyntaxError> {
    let (name, rest) = header
        .split_once(']')
        .ok_or(SyntaxError::UnterminatedSectionHeader)?;

    if name.is_empty() {
        return Err(SyntaxError::SectionNameEmpty);
    }

    if let Some(c) = rest.chars().find(|c| !c.is_whitespace()) {
        return Err(SyntaxError::UnexpectedCharacter { c });
    }

    Ok(name.to_string())
}

/// Splits `[key =] field, field, ...`. Only an `=` ahead of the first unquoted comma
/// introduces a key. The text after the key is also kept whole, unquoted, as the value.
fn parse_entry(line: &str) -> Entry {
    let mut fields = Vec::<String>::new();
    let mut key = None::<String>;
    let mut within_quotes = false;
    let mut start = 0;
    let mut value_start = 0;

    for (i, c) in line.char_indices() {
        match c {
            '"' => within_quotes = !within_quotes,
            ',' if !within_quotes => {
                fields.push(unquote(&line[start..i]));
                start = i + 1;
            }
            '=' if !within_quotes && key.is_none() && fields.is_empty() => {
                key = Some(unquote(&line[start..i]));
                start = i + 1;
                value_start = start;
            }
            _ => {}
        }
    }

    fields.push(unquote(&line[start..]));
    Entry {
        key: key.unwrap_or_default(),
        fields,
        value: unquote(&line[value_start..]),
    }
}

/// Trims unquoted whitespace and removes quote delimiters; `""` inside quotes is a literal `"`.
fn unquote(raw: &str) -> String {
    let mut value = String::with_capacity(raw.len());
    let mut within_quotes = false;
    let mut chars = raw.trim().chars().peekable();

    while let Some(c) = chars.next() {
        if c != '"' {
            value.push(c);
        } else if within_quotes && chars.peek() == Some(&'"') {
            _ = chars.next();
            value.push('"');
        } else {
            within_quotes = !within_quotes;
        }
    }

    value
}
