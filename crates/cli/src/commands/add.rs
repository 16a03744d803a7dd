// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use dl_core::Todo;

use crate::display::short_id;
use crate::error::{Error, Result};
use crate::replica::Replica;

pub fn run(title: &str) -> Result<()> {
    let mut replica = Replica::open_current()?;
    let todo = run_impl(&mut replica, title)?;
    println!("Created {}: {}", short_id(&todo.id), todo.title);
    Ok(())
}

pub(crate) fn run_impl(replica: &mut Replica, title: &str) -> Result<Todo> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Error::FieldEmpty { field: "Title" });
    }
    let mutation = replica.store_mut().create_todo(title)?;
    replica.commit(mutation)
}

#[cfg(test)]
#[path = "add_tests.rs"]
mod tests;
