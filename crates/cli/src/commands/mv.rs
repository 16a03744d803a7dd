// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use dl_core::Todo;

use crate::display::short_id;
use crate::error::{Error, Result};
use crate::replica::Replica;

pub fn run(id: &str, to: usize) -> Result<()> {
    let mut replica = Replica::open_current()?;
    let renumbered = run_impl(&mut replica, id, to)?;
    if renumbered.is_empty() {
        println!("{} is already at position {}", short_id(id), to);
    } else {
        println!("Moved {} to position {} ({} renumbered)", short_id(id), to, renumbered.len());
    }
    Ok(())
}

/// Moves a todo within the active list. Returns every renumbered todo.
pub(crate) fn run_impl(replica: &mut Replica, id: &str, to: usize) -> Result<Vec<Todo>> {
    let id = replica.resolve_id(id)?;
    let (from, len) = {
        let active = replica.store().get_active_todos();
        let from = active.iter().position(|t| t.id == id);
        (from, active.len())
    };
    let from = from.ok_or_else(|| Error::TodoDeleted(id.clone()))?;
    if to >= len {
        return Err(Error::PositionOutOfRange { to, len });
    }

    match replica.store_mut().reorder_todo(&id, from, to)? {
        Some(mutation) => replica.commit(mutation),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
#[path = "mv_tests.rs"]
mod tests;
