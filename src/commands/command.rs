use std::{fmt::Debug, marker::PhantomData};

/// A reversible mutation of a state `S`.
///
/// `revert` must exactly undo the effect of the preceding `apply`. Commands that depend on the
/// state they overwrite record it during `apply`, so a command may be applied and reverted any
/// number of times as long as both calls alternate.
pub trait Command<S> {
    /// Applies the command. If `quick`, expensive side effects may be skipped.
    fn apply(&mut self, state: &mut S, quick: bool);

    /// Undoes the last `apply`
    fn revert(&mut self, state: &mut S, quick: bool);

    /// Short human readable description used in log output
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<S, C> Command<S> for Box<C>
where
    C: Command<S> + ?Sized,
{
    fn apply(&mut self, state: &mut S, quick: bool) {
        (**self).apply(state, quick);
    }

    fn revert(&mut self, state: &mut S, quick: bool) {
        (**self).revert(state, quick);
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Owned, type-erased command as stored by a [`CommandHistory`](super::CommandHistory)
pub type BoxedCommand<S> = Box<dyn Command<S>>;

/// An ordered group of commands that is applied and reverted as a unit.
///
/// Members are applied in insertion order and reverted in reverse order.
pub struct CompositeCommand<S> {
    name: String,
    commands: Vec<BoxedCommand<S>>,
}

impl<S> CompositeCommand<S> {
    /// Creates an empty group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: Vec::new(),
        }
    }

    /// Creates a group from already boxed commands
    pub fn from_commands<I>(name: impl Into<String>, commands: I) -> Self
    where
        I: IntoIterator<Item = BoxedCommand<S>>,
    {
        Self {
            name: name.into(),
            commands: commands.into_iter().collect(),
        }
    }

    /// Appends a command to the group
    pub fn push<C>(&mut self, command: C)
    where
        C: Command<S> + 'static,
    {
        self.commands.push(Box::new(command));
    }

    /// Builder variant of [`CompositeCommand::push`]
    pub fn with<C>(mut self, command: C) -> Self
    where
        C: Command<S> + 'static,
    {
        self.push(command);
        self
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns *true* if the group has no members
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<S> Command<S> for CompositeCommand<S> {
    fn apply(&mut self, state: &mut S, quick: bool) {
        for command in &mut self.commands {
            command.apply(state, quick);
        }
    }

    fn revert(&mut self, state: &mut S, quick: bool) {
        for command in self.commands.iter_mut().rev() {
            command.revert(state, quick);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<S> Debug for CompositeCommand<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeCommand")
            .field("name", &self.name)
            .field(
                "commands",
                &self.commands.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// A command built from an `apply` and a `revert` closure
pub struct FnCommand<S, A, R> {
    name: String,
    apply: A,
    revert: R,
    _state: PhantomData<fn(&mut S)>,
}

impl<S, A, R> FnCommand<S, A, R>
where
    A: FnMut(&mut S, bool),
    R: FnMut(&mut S, bool),
{
    pub fn new(name: impl Into<String>, apply: A, revert: R) -> Self {
        Self {
            name: name.into(),
            apply,
            revert,
            _state: PhantomData,
        }
    }
}

impl<S, A, R> Command<S> for FnCommand<S, A, R>
where
    A: FnMut(&mut S, bool),
    R: FnMut(&mut S, bool),
{
    fn apply(&mut self, state: &mut S, quick: bool) {
        (self.apply)(state, quick);
    }

    fn revert(&mut self, state: &mut S, quick: bool) {
        (self.revert)(state, quick);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
