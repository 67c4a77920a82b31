// src/cli/menu.rs
use inquire::{CustomType, InquireError, MultiSelect, Select};
use console::{style, Term};
use std::error::Error;
use std::fmt;
use std::fmt::Write as _;
use std::thread;
use std::time::{Duration, Instant};

use crate::clipboard::{ClipboardSink, COPIED_MESSAGE};
use crate::core::PasswordForm;
use crate::storage::KeyValueStore;
use crate::utils::{format_recent_line, truncate_string};

const NUMBERS_LABEL: &str = "Include Numbers";
const LETTERS_LABEL: &str = "Include Letters";
const SPECIAL_LABEL: &str = "Include Special Character";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Generate,
    SetLength(usize),
    ChooseCharacters,
    CopyGenerated,
    CopyPrevious,
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::Generate => write!(f, "🎲 Generate Password"),
            MenuAction::SetLength(current) => write!(f, "📏 Password Length ({})", current),
            MenuAction::ChooseCharacters => write!(f, "🔤 Character Types"),
            MenuAction::CopyGenerated => write!(f, "📋 Copy Generated Password"),
            MenuAction::CopyPrevious => write!(f, "📜 Copy a Previous Password"),
            MenuAction::Quit => write!(f, "🚪 Quit"),
        }
    }
}

pub fn run_cli_menu<S: KeyValueStore>(
    form: &mut PasswordForm<S>,
    clipboard: &mut dyn ClipboardSink,
) -> Result<(), Box<dyn Error>> {
    let term = Term::stdout();

    println!("╔══════════════════════════════════════╗");
    println!("║     🔐 RANDOM PASSWORD GENERATOR     ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        println!("{}", render_form(form));

        let action = match Select::new("What would you like to do?", menu_actions(form)).prompt() {
            Ok(action) => action,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                log::info!("Form closed by user");
                break;
            }
            Err(e) => return Err(Box::new(e)),
        };

        match action {
            MenuAction::Generate => match form.generate() {
                Ok(password) => log::info!("Generated password {}", password.id),
                Err(e) => log::info!("Generation blocked: {}", e),
            },

            MenuAction::SetLength(current) => {
                let length = CustomType::<usize>::new("Password Length:")
                    .with_default(current)
                    .with_error_message("Please type a whole number")
                    .prompt();
                match length {
                    Ok(length) => form.set_length(length),
                    Err(InquireError::OperationCanceled) => {}
                    Err(e) => return Err(Box::new(e)),
                }
            }

            MenuAction::ChooseCharacters => {
                let options = form.options();
                let labels = vec![NUMBERS_LABEL, LETTERS_LABEL, SPECIAL_LABEL];
                let selected: Vec<usize> = [options.include_numbers, options.include_letters, options.include_special]
                    .iter()
                    .enumerate()
                    .filter(|(_, on)| **on)
                    .map(|(i, _)| i)
                    .collect();

                match MultiSelect::new("Include:", labels).with_default(&selected).prompt() {
                    Ok(chosen) => {
                        form.set_numbers(chosen.contains(&NUMBERS_LABEL));
                        form.set_letters(chosen.contains(&LETTERS_LABEL));
                        form.set_special(chosen.contains(&SPECIAL_LABEL));
                    }
                    Err(InquireError::OperationCanceled) => {}
                    Err(e) => return Err(Box::new(e)),
                }
            }

            MenuAction::CopyGenerated => {
                if form.copy_generated(clipboard)? {
                    show_copy_notice(&term, form)?;
                } else {
                    println!("{}", style("❌ Failed to copy the password to clipboard.").red());
                }
            }

            MenuAction::CopyPrevious => {
                let labels: Vec<String> = form
                    .recent()
                    .iter()
                    .enumerate()
                    .map(|(i, p)| format_recent_line(i, &truncate_string(&p.value, 60)))
                    .collect();

                match Select::new("Copy which password?", labels.clone()).prompt() {
                    Ok(choice) => {
                        // Labels are numbered, so each one is unique
                        let index = labels.iter().position(|label| *label == choice).unwrap_or(0);
                        if form.copy_recent(clipboard, index)? {
                            show_copy_notice(&term, form)?;
                        } else {
                            println!("{}", style("❌ Failed to copy the password to clipboard.").red());
                        }
                    }
                    Err(InquireError::OperationCanceled) => {}
                    Err(e) => return Err(Box::new(e)),
                }
            }

            MenuAction::Quit => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn menu_actions<S: KeyValueStore>(form: &PasswordForm<S>) -> Vec<MenuAction> {
    let mut actions = vec![
        MenuAction::Generate,
        MenuAction::SetLength(form.options().length),
        MenuAction::ChooseCharacters,
    ];
    if form.current().is_some() {
        actions.push(MenuAction::CopyGenerated);
    }
    if form.has_recent() {
        actions.push(MenuAction::CopyPrevious);
    }
    actions.push(MenuAction::Quit);
    actions
}

/// The form as text: inputs, validation message, output and the recent list.
fn render_form<S: KeyValueStore>(form: &PasswordForm<S>) -> String {
    let options = form.options();
    let check = |on: bool| if on { "[x]" } else { "[ ]" };
    let mut screen = String::new();

    let _ = writeln!(screen);
    let _ = writeln!(screen, "Password Length: {}", options.length);
    let _ = writeln!(screen, "{} {}", check(options.include_numbers), NUMBERS_LABEL);
    let _ = writeln!(screen, "{} {}", check(options.include_letters), LETTERS_LABEL);
    let _ = writeln!(screen, "{} {}", check(options.include_special), SPECIAL_LABEL);

    if let Some(message) = form.validation_message() {
        let _ = writeln!(screen, "{}", style(format!("⚠️  {}", message)).red());
    }

    if let Some(password) = form.current() {
        let _ = writeln!(screen);
        let _ = writeln!(screen, "Generated Password:");
        let _ = writeln!(screen, "  {}", style(&password.value).bold());
    }

    let _ = writeln!(screen);
    let _ = writeln!(screen, "Previous Passwords:");
    if !form.has_recent() {
        let _ = writeln!(screen, "  (none yet)");
    }
    for (position, password) in form.recent().iter().enumerate() {
        let _ = writeln!(screen, "  {}", format_recent_line(position, &password.value));
    }

    screen
}

/// Print the copy confirmation and clear it once the notice expires.
fn show_copy_notice<S: KeyValueStore>(term: &Term, form: &PasswordForm<S>) -> std::io::Result<()> {
    term.write_line(&style(COPIED_MESSAGE).green().to_string())?;
    while form.notice_visible(Instant::now()) {
        thread::sleep(Duration::from_millis(100));
    }
    if term.is_term() {
        term.clear_last_lines(1)?;
    }
    Ok(())
}
