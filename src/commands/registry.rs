use std::collections::HashMap;

use crate::commands::handlers;
use crate::commands::State;
use crate::domain::Command;
use crate::errors::{GatorError, GatorResult};

pub type Handler = Box<dyn Fn(&mut State, &Command) -> GatorResult<()>>;

/// Maps verb names to handlers. New verbs are added with `register`;
/// dispatch never needs to change.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Handler>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in verb
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register("login", handlers::handle_login);
        registry.register("register", handlers::handle_register);
        registry.register("reset", handlers::handle_reset);
        registry.register("users", handlers::handle_users);
        registry.register("agg", handlers::handle_agg);
        registry.register("addfeed", handlers::handle_add_feed);
        registry.register("feeds", handlers::handle_feeds);
        registry.register("follow", handlers::handle_follow);
        registry.register("following", handlers::handle_following);

        registry
    }

    /// Bind `name` to `handler`, replacing any earlier binding
    pub fn register<F>(&mut self, name: &str, handler: F)
    where
        F: Fn(&mut State, &Command) -> GatorResult<()> + 'static,
    {
        if self
            .handlers
            .insert(name.to_string(), Box::new(handler))
            .is_some()
        {
            tracing::debug!(command = name, "replaced existing handler");
        }
    }

    /// Run the handler bound to `command.name` and return its result untouched
    pub fn dispatch(&self, state: &mut State, command: &Command) -> GatorResult<()> {
        let handler = self
            .handlers
            .get(&command.name)
            .ok_or_else(|| GatorError::UnknownCommand(command.name.clone()))?;

        tracing::debug!(command = %command.name, args = command.args.len(), "dispatching");

        handler(state, command)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered verb names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
