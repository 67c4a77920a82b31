// src/cli/handlers.rs
use std::io::{self, Write};

use console::style;
use serde_json::json;

use crate::clipboard::{ClipboardSink, COPIED_MESSAGE};
use crate::core::PasswordForm;
use crate::storage::KeyValueStore;
use crate::utils::format_recent_line;

// Handlers for one-shot CLI commands. Each writes its result to `out` and
// returns whether the command succeeded.

/// Apply command-line overrides on top of the configured form inputs.
pub fn apply_overrides<S: KeyValueStore>(
    form: &mut PasswordForm<S>,
    length: Option<usize>,
    no_numbers: bool,
    no_letters: bool,
    no_special: bool,
) {
    if let Some(length) = length {
        form.set_length(length);
    }
    if no_numbers {
        form.set_numbers(false);
    }
    if no_letters {
        form.set_letters(false);
    }
    if no_special {
        form.set_special(false);
    }
}

pub fn handle_generate<S, C>(
    form: &mut PasswordForm<S>,
    sink: &mut C,
    copy: bool,
    json: bool,
    out: &mut dyn Write,
) -> io::Result<bool>
where
    S: KeyValueStore,
    C: ClipboardSink + ?Sized,
{
    let password = match form.generate().cloned() {
        Ok(password) => password,
        Err(e) => {
            log::warn!("Generation rejected: {}", e);
            let message = form.validation_message().map(str::to_string).unwrap_or_else(|| e.to_string());
            report_failure(out, json, &message)?;
            return Ok(false);
        }
    };

    let copied = if copy {
        Some(form.copy_generated(sink).unwrap_or(false))
    } else {
        None
    };

    if json {
        let mut response = json!({
            "success": true,
            "id": password.id,
            "password": password.value,
        });
        if let Some(copied) = copied {
            response["copied"] = json!(copied);
        }
        writeln!(out, "{}", response)?;
    } else {
        writeln!(out, "{}", password.value)?;
        match copied {
            Some(true) => writeln!(out, "{}", style(format!("✅ {}", COPIED_MESSAGE)).green())?,
            Some(false) => writeln!(out, "{}", style("❌ Failed to copy the password to clipboard.").red())?,
            None => {}
        }
    }

    Ok(true)
}

pub fn handle_history<S: KeyValueStore>(
    form: &PasswordForm<S>,
    json: bool,
    out: &mut dyn Write,
) -> io::Result<bool> {
    let recent = form.recent();
    log::debug!("Listing {} recent passwords", form.recent_count());

    if json {
        let response = json!({
            "success": true,
            "passwords": recent,
        });
        writeln!(out, "{}", response)?;
    } else if !form.has_recent() {
        writeln!(out, "No previous passwords.")?;
    } else {
        for (position, password) in recent.iter().enumerate() {
            writeln!(out, "{}", format_recent_line(position, &password.value))?;
        }
    }

    Ok(true)
}

/// `position` is 1-based, as shown by `history`.
pub fn handle_copy<S, C>(
    form: &mut PasswordForm<S>,
    sink: &mut C,
    position: usize,
    json: bool,
    out: &mut dyn Write,
) -> io::Result<bool>
where
    S: KeyValueStore,
    C: ClipboardSink + ?Sized,
{
    let result = match position.checked_sub(1) {
        Some(index) => form.copy_recent(sink, index),
        None => Err(crate::core::form::FormError::UnknownPosition(position)),
    };

    match result {
        Ok(true) => {
            if json {
                writeln!(out, "{}", json!({ "success": true, "copied": true }))?;
            } else {
                writeln!(out, "{}", style(format!("✅ {}", COPIED_MESSAGE)).green())?;
            }
            Ok(true)
        }
        Ok(false) => {
            report_failure(out, json, "Failed to copy the password to clipboard.")?;
            Ok(false)
        }
        Err(_) => {
            report_failure(out, json, &format!("No previous password at position {}", position))?;
            Ok(false)
        }
    }
}

fn report_failure(out: &mut dyn Write, json: bool, message: &str) -> io::Result<()> {
    if json {
        writeln!(out, "{}", json!({ "success": false, "error": message }))
    } else {
        writeln!(out, "{}", style(format!("❌ {}", message)).red())
    }
}
