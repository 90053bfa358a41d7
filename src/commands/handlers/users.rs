use std::io::Write;

use crate::commands::State;
use crate::domain::{Command, NewUser};
use crate::errors::{GatorError, GatorResult};

pub fn handle_login(state: &mut State, command: &Command) -> GatorResult<()> {
    let name = &command.require_args(1, "a username argument")?[0];

    if state.users.get_user(name)?.is_none() {
        return Err(GatorError::UserNotFound(name.clone()));
    }

    state.config.set_user(name)?;
    tracing::info!(user = %name, "logged in");

    writeln!(state.out, "User set to '{}'", name)?;
    Ok(())
}

pub fn handle_register(state: &mut State, command: &Command) -> GatorResult<()> {
    let name = &command.require_args(1, "a username argument")?[0];

    if state.users.get_user(name)?.is_some() {
        return Err(GatorError::UserAlreadyExists(name.clone()));
    }

    let user = state.users.create_user(&NewUser::new(name))?;
    state.config.set_user(&user.name)?;
    tracing::info!(user = %user.name, id = %user.id, "registered user");

    writeln!(state.out, "User '{}' created!", user.name)?;
    writeln!(state.out, "  ID: {}", user.id)?;
    writeln!(state.out, "  Created: {}", user.created_at.to_rfc3339())?;
    Ok(())
}

pub fn handle_reset(state: &mut State, _command: &Command) -> GatorResult<()> {
    state.users.delete_users()?;
    tracing::info!("deleted all users");

    writeln!(state.out, "All users deleted successfully.")?;
    Ok(())
}

pub fn handle_users(state: &mut State, _command: &Command) -> GatorResult<()> {
    let users = state.users.get_users()?;

    if users.is_empty() {
        writeln!(state.out, "No users registered.")?;
        return Ok(());
    }

    let current = state.config.current_user();
    for user in &users {
        if Some(user.name.as_str()) == current {
            writeln!(state.out, "* {} (current)", user.name)?;
        } else {
            writeln!(state.out, "* {}", user.name)?;
        }
    }

    Ok(())
}
