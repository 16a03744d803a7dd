// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use dl_core::Todo;

use crate::display::short_id;
use crate::error::{Error, Result};
use crate::replica::Replica;

pub fn run(id: &str) -> Result<()> {
    let mut replica = Replica::open_current()?;
    let todo = run_impl(&mut replica, id)?;
    println!("Deleted {}: {}", short_id(&todo.id), todo.title);
    Ok(())
}

pub(crate) fn run_impl(replica: &mut Replica, id: &str) -> Result<Todo> {
    let id = replica.resolve_id(id)?;
    match replica.store_mut().delete_todo(&id)? {
        Some(mutation) => replica.commit(mutation),
        None => Err(Error::TodoDeleted(id)),
    }
}

#[cfg(test)]
#[path = "rm_tests.rs"]
mod tests;
