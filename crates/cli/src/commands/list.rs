// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use dl_core::Todo;

use crate::cli::OutputFormat;
use crate::display::format_todo_line;
use crate::error::Result;
use crate::replica::Replica;

pub fn run(all: bool, output: OutputFormat) -> Result<()> {
    let replica = Replica::open_current()?;
    let todos = run_impl(&replica, all);

    match output {
        OutputFormat::Text => {
            if todos.is_empty() {
                println!("No todos");
            }
            for todo in &todos {
                println!("{}", format_todo_line(todo));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&todos)?);
        }
    }
    Ok(())
}

/// Todos in display order; deleted ones only when `all` is set.
pub(crate) fn run_impl(replica: &Replica, all: bool) -> Vec<Todo> {
    let store = replica.store();
    let todos = if all { store.get_all_todos() } else { store.get_active_todos() };
    todos.into_iter().cloned().collect()
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
