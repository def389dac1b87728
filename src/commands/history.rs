use log::trace;

use super::*;

/// A sequence of commands with a cursor.
///
/// The cursor `current` is the number of commands applied so far and always lies within
/// `0..=len()`. Moving forward applies the command at the cursor, moving backward reverts the
/// command right before it.
pub struct CommandHistory<S> {
    commands: Vec<BoxedCommand<S>>,
    current: usize,
}

impl<S> Default for CommandHistory<S> {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            current: 0,
        }
    }
}

impl<S> CommandHistory<S> {
    /// Creates an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history from already boxed commands with the cursor at `0`
    pub fn from_commands<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = BoxedCommand<S>>,
    {
        Self {
            commands: commands.into_iter().collect(),
            current: 0,
        }
    }

    /// Appends a command at the end. The cursor is not moved.
    pub fn push<C>(&mut self, command: C)
    where
        C: Command<S> + 'static,
    {
        self.commands.push(Box::new(command));
    }

    /// Appends a group of commands that is applied and reverted as one step
    pub fn push_group<I>(&mut self, name: impl Into<String>, commands: I)
    where
        I: IntoIterator<Item = BoxedCommand<S>>,
        S: 'static,
    {
        self.push(CompositeCommand::from_commands(name, commands));
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns *true* if there are no steps
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of steps applied so far
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns *true* if every step is applied
    pub fn done(&self) -> bool {
        self.current >= self.commands.len()
    }

    /// Returns *true* if at least one step is applied
    pub fn in_progress(&self) -> bool {
        self.current > 0
    }

    /// Names of all steps in order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().map(|c| c.name())
    }

    /// Applies the step at the cursor and advances it.
    /// Returns *false* without doing anything if every step is applied.
    pub fn next(&mut self, state: &mut S, quick: bool) -> bool {
        let Some(command) = self.commands.get_mut(self.current) else {
            return false;
        };

        trace!("apply #{} {} (quick={quick})", self.current, command.name());
        command.apply(state, quick);
        self.current += 1;
        true
    }

    /// Moves the cursor back and reverts the step it now points at.
    /// Returns *false* without doing anything if no step is applied.
    pub fn previous(&mut self, state: &mut S, quick: bool) -> bool {
        if self.current == 0 {
            return false;
        }

        self.current -= 1;
        let command = &mut self.commands[self.current];
        trace!("revert #{} {} (quick={quick})", self.current, command.name());
        command.revert(state, quick);
        true
    }

    /// Applies all remaining steps
    pub fn run(&mut self, state: &mut S) {
        while self.next(state, false) {}
    }

    /// Reverts all applied steps
    pub fn reset(&mut self, state: &mut S) {
        while self.previous(state, false) {}
    }

    /// Moves the cursor to `k`, clamped to `0..=len()`.
    ///
    /// Every step but the last one is executed in quick mode.
    pub fn goto_command(&mut self, state: &mut S, k: usize) {
        let k = k.min(self.commands.len());

        while self.current < k {
            let quick = self.current + 1 < k;
            self.next(state, quick);
        }

        while self.current > k {
            let quick = self.current > k + 1;
            self.previous(state, quick);
        }
    }
}

impl<S> std::fmt::Debug for CommandHistory<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandHistory")
            .field("len", &self.commands.len())
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    /// Sets `state[index]` and remembers the overwritten value
    struct Set {
        index: usize,
        value: i32,
        old: Option<i32>,
    }

    impl Command<Vec<i32>> for Set {
        fn apply(&mut self, state: &mut Vec<i32>, _quick: bool) {
            self.old = Some(std::mem::replace(&mut state[self.index], self.value));
        }

        fn revert(&mut self, state: &mut Vec<i32>, _quick: bool) {
            if let Some(old) = self.old.take() {
                state[self.index] = old;
            }
        }
    }

    fn set(index: usize, value: i32) -> Set {
        Set {
            index,
            value,
            old: None,
        }
    }

    fn history() -> CommandHistory<Vec<i32>> {
        let mut history = CommandHistory::new();
        history.push(set(0, 5));
        history.push(set(1, 7));
        history.push_group("both", [
            Box::new(set(0, 1)) as BoxedCommand<Vec<i32>>,
            Box::new(set(0, 2)),
            Box::new(set(2, 3)),
        ]);
        history.push(set(2, 9));
        history
    }

    #[test]
    fn step_forward_and_backward() {
        let mut state = vec![0; 3];
        let mut history = history();
        assert_eq!(history.len(), 4);
        assert!(!history.in_progress());
        assert!(!history.previous(&mut state, false));

        assert!(history.next(&mut state, false));
        assert_eq!(state, vec![5, 0, 0]);
        assert!(history.next(&mut state, false));
        assert!(history.next(&mut state, false));
        assert_eq!(state, vec![2, 7, 3]);
        assert_eq!(history.current(), 3);

        assert!(history.previous(&mut state, false));
        assert_eq!(state, vec![5, 7, 0]);

        history.run(&mut state);
        assert!(history.done());
        assert!(!history.next(&mut state, false));
        assert_eq!(state, vec![2, 7, 9]);

        history.reset(&mut state);
        assert_eq!(history.current(), 0);
        assert_eq!(state, vec![0; 3]);
    }

    #[test]
    fn goto_matches_single_steps() {
        let mut expected = Vec::new();
        {
            let mut state = vec![0; 3];
            let mut history = history();
            expected.push(state.clone());
            while history.next(&mut state, false) {
                expected.push(state.clone());
            }
        }

        let mut state = vec![0; 3];
        let mut history = history();
        for k in [4, 1, 3, 0, 2, 2, 10] {
            history.goto_command(&mut state, k);
            let k = k.min(4);
            assert_eq!(history.current(), k);
            assert_eq!(state, expected[k]);
        }
    }

    #[test]
    fn goto_uses_quick_mode_for_intermediate_steps() {
        let mut history = CommandHistory::new();
        for i in 0..4 {
            history.push(FnCommand::new(
                format!("step {i}"),
                |log: &mut Vec<bool>, quick| log.push(quick),
                |log: &mut Vec<bool>, quick| log.push(quick),
            ));
        }

        let mut log = Vec::new();
        history.goto_command(&mut log, 3);
        assert_eq!(log, vec![true, true, false]);

        log.clear();
        history.goto_command(&mut log, 0);
        assert_eq!(log, vec![true, true, false]);

        assert_eq!(
            history.names().collect_vec(),
            vec!["step 0", "step 1", "step 2", "step 3"]
        );
    }

    #[test]
    fn empty_history() {
        let mut history = CommandHistory::<()>::new();
        assert!(history.done());
        assert!(!history.next(&mut (), false));
        history.goto_command(&mut (), 3);
        assert_eq!(history.current(), 0);
    }
}
