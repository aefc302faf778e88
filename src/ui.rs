// UI layer: provides the interactive menu. Prompts use `dialoguer` on an
// attended terminal and plain stdin line reads when input is piped.
// The functions are small and synchronous to make the flow easy to follow.
//
// Every prompt reads exactly one line of input. Numeric prompts parse
// the line explicitly: a value that is not a number is a fatal
// input-format error and ends the program, while a number that is not a
// menu option just re-prints the menu.

use crate::model::Employee;
use crate::session::RosterSession;
use anyhow::{bail, Context, Result};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Duration;

/// Main interactive menu. Receives the session and runs the menu loop
/// until the user chooses Exit.
///
/// The menu is numbered and each choice is read as an integer from one
/// line of input. Without an attended terminal the prompts print plainly
/// and read lines straight from stdin, so a piped script drives the menu
/// the same as a keyboard.
pub fn main_menu(mut session: RosterSession) -> Result<()> {
    println!("Employee Management System");
    println!("---------------------------");

    loop {
        println!();
        println!("Menu:");
        println!("1. Add Employee");
        println!("2. View Employees");
        println!("3. Update Employee");
        println!("4. Delete Employee");
        println!("5. Search Employee");
        println!("6. Exit");

        match prompt_int("Enter your choice")? {
            1 => handle_add(&mut session)?,
            2 => handle_view(&session),
            3 => handle_update(&mut session)?,
            4 => handle_delete(&mut session)?,
            5 => handle_search(&session)?,
            6 => {
                println!("Exiting the Employee Management System. Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
    Ok(())
}

/// Collects the new employee's fields, appends the record and saves.
/// No uniqueness or format checks: adding always succeeds.
fn handle_add(session: &mut RosterSession) -> Result<()> {
    println!();
    println!("Add Employee");
    let name = prompt_text("Enter employee name")?;
    let id = prompt_int("Enter employee ID")?;
    let designation = prompt_text("Enter employee designation")?;
    let salary = prompt_float("Enter employee salary")?;

    session.roster.add(Employee::new(name, id, designation, salary));
    persist_roster(session);
    println!("Employee added successfully.");
    Ok(())
}

fn handle_view(session: &RosterSession) {
    println!();
    println!("View Employees");
    if session.roster.is_empty() {
        println!("No employees found.");
        return;
    }
    for employee in session.roster.iter() {
        println!("{}", employee);
    }
}

/// Rewrites name, designation and salary of the first record with the
/// given ID. When no record matches, the field prompts are never shown.
fn handle_update(session: &mut RosterSession) -> Result<()> {
    println!();
    println!("Update Employee");
    let id = prompt_int("Enter the ID of the employee to update")?;

    let updated = match session.roster.find_by_id_mut(id) {
        Some(employee) => {
            employee.name = prompt_text("Enter new employee name")?;
            employee.designation = prompt_text("Enter new employee designation")?;
            employee.salary = prompt_float("Enter new employee salary")?;
            true
        }
        None => false,
    };

    if updated {
        persist_roster(session);
        println!("Employee updated successfully.");
    } else {
        println!("Employee not found with ID: {}", id);
    }
    Ok(())
}

fn handle_delete(session: &mut RosterSession) -> Result<()> {
    println!();
    println!("Delete Employee");
    let id = prompt_int("Enter the ID of the employee to delete")?;

    match session.roster.delete(id) {
        Some(_) => {
            persist_roster(session);
            println!("Employee deleted successfully.");
        }
        None => println!("Employee not found with ID: {}", id),
    }
    Ok(())
}

/// Search sub-menu: by exact ID (first match only) or by
/// case-insensitive name (every match). An unknown sub-choice returns to
/// the main menu without consuming any further input.
fn handle_search(session: &RosterSession) -> Result<()> {
    println!();
    println!("Search Employee");
    println!("1. Search by ID");
    println!("2. Search by Name");

    match prompt_int("Enter your choice")? {
        1 => {
            let id = prompt_int("Enter the ID of the employee to search")?;
            match session.roster.find_by_id(id) {
                Some(employee) => {
                    println!("Employee found:");
                    println!("{}", employee);
                }
                None => println!("Employee not found with ID: {}", id),
            }
        }
        2 => {
            let name = prompt_text("Enter the name of the employee to search")?;
            let matches = session.roster.search_by_name(&name);
            if matches.is_empty() {
                println!("Employee not found with name: {}", name);
            } else {
                for employee in matches {
                    println!("Employee found:");
                    println!("{}", employee);
                }
            }
        }
        _ => println!("Invalid choice. Please try again."),
    }
    Ok(())
}

/// Rewrites the roster file behind a short spinner. A failed save is
/// reported here and the in-memory roster keeps the change; the session
/// stays usable.
fn persist_roster(session: &RosterSession) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Saving...");
    let result = session.persist();
    spinner.finish_and_clear();
    if let Err(err) = result {
        println!("Error writing to file: {}", err);
    }
}

/// Prompts for one line of input and returns it as typed, empty allowed.
///
/// `dialoguer` reads only from an attended terminal, so when stdin is a
/// pipe or a file the prompt switches to a plain line read.
fn prompt_text(prompt: &str) -> Result<String> {
    if !io::stdin().is_terminal() {
        return prompt_plain(prompt);
    }
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Prints the prompt to stdout and reads one line from stdin, stripping
/// the line terminator. Running out of input mid-session is fatal.
fn prompt_plain(prompt: &str) -> Result<String> {
    print!("{}: ", prompt);
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let bytes = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if bytes == 0 {
        bail!("input ended at prompt `{}`", prompt);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Prompts for an integer. The surrounding whitespace of the line is
/// ignored, but a value that does not parse is a fatal input-format
/// error, matching the loader's stance on malformed numeric fields.
fn prompt_int(prompt: &str) -> Result<i32> {
    let raw = prompt_text(prompt)?;
    raw.trim()
        .parse()
        .with_context(|| format!("`{}` is not a valid integer", raw.trim()))
}

/// Prompts for a number (the salary). Same contract as `prompt_int`.
fn prompt_float(prompt: &str) -> Result<f64> {
    let raw = prompt_text(prompt)?;
    raw.trim()
        .parse()
        .with_context(|| format!("`{}` is not a valid number", raw.trim()))
}
