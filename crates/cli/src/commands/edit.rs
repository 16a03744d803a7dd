// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use dl_core::{Todo, TodoChanges};

use crate::display::short_id;
use crate::error::{Error, Result};
use crate::replica::Replica;

pub fn run(id: &str, title: Option<String>, completed: Option<bool>) -> Result<()> {
    let mut replica = Replica::open_current()?;
    let todo = run_impl(&mut replica, id, title, completed)?;
    let state = if todo.completed { "done" } else { "open" };
    println!("Updated {}: {} ({})", short_id(&todo.id), todo.title, state);
    Ok(())
}

pub(crate) fn run_impl(
    replica: &mut Replica,
    id: &str,
    title: Option<String>,
    completed: Option<bool>,
) -> Result<Todo> {
    let title = title.map(|t| t.trim().to_string());
    if title.as_deref() == Some("") {
        return Err(Error::FieldEmpty { field: "Title" });
    }
    let changes = TodoChanges { title, completed, position: None };
    if changes.is_empty() {
        return Err(Error::NothingToChange);
    }

    let id = replica.resolve_id(id)?;
    match replica.store_mut().update_todo(&id, changes)? {
        Some(mutation) => replica.commit(mutation),
        None => Err(Error::TodoDeleted(id)),
    }
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
