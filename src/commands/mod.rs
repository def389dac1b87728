/*!
# Reversible Commands

A [`Command`] is a mutation of some external state `S` that knows how to undo itself. A
[`CommandHistory`] holds a sequence of commands and a cursor, and moves through the sequence
step by step in both directions or seeks to an arbitrary position.

Commands do not own the state they mutate: the state is passed into every call. This lets a
single history drive a display widget that is owned elsewhere, and lets several histories
share one state type.

```
use stepgraph::commands::*;

let mut state = vec![1, 2, 3];
let mut history = CommandHistory::new();
history.push(FnCommand::new(
    "push 4",
    |s: &mut Vec<i32>, _quick| s.push(4),
    |s: &mut Vec<i32>, _quick| {
        s.pop();
    },
));

history.run(&mut state);
assert_eq!(state, vec![1, 2, 3, 4]);

history.reset(&mut state);
assert_eq!(state, vec![1, 2, 3]);
```

## Quick mode
Every call receives a `quick` flag. A command with an expensive side effect (usually a redraw)
skips it in quick mode but still updates the state. [`CommandHistory::goto_command`] runs all
intermediate steps in quick mode and only the final one normally.
*/

mod command;
mod history;

pub use command::*;
pub use history::*;
