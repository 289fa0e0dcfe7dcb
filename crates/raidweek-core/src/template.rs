//! Named-placeholder substitution for signup command and schedule templates.
//!
//! Templates use `{name}` placeholders; `{{` and `}}` escape to literal braces.
//! Every placeholder must have a value -- an unknown name is a configuration
//! error, not a silent pass-through, so a typo in a template surfaces on the
//! first run instead of leaking `{mc_na_timestamp}` into a chat channel.

use std::collections::HashMap;

use crate::error::{Result, ScheduleError};

/// Substitute `{name}` placeholders in `template` from `values`.
///
/// # Errors
/// - `ScheduleError::MissingPlaceholder` when a placeholder has no value.
/// - `ScheduleError::MalformedTemplate` on an unterminated `{name` or a bare `}`.
pub fn render(template: &str, values: &HashMap<String, String>) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => name.push(ch),
                        None => {
                            return Err(ScheduleError::MalformedTemplate(format!(
                                "unterminated placeholder '{{{name}'"
                            )));
                        }
                    }
                }
                let value = values
                    .get(&name)
                    .ok_or(ScheduleError::MissingPlaceholder(name))?;
                out.push_str(value);
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(ScheduleError::MalformedTemplate(
                        "single '}' without matching '{'".to_string(),
                    ));
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}
