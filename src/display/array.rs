use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Debug,
    ops::{AddAssign, SubAssign},
};

use super::*;
use crate::commands::{Command, CompositeCommand};

/// Class marking the cell an algorithm currently works on
pub const ACTIVE_CLASS: &str = "active";

/// Values, named pointers (e.g. `i`, `j`, `low`) and per-cell classes of an array
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayScene<T> {
    pub values: Vec<T>,
    pub classes: Vec<BTreeSet<String>>,
    pub pointers: BTreeMap<String, usize>,
}

/// Presentation state of an array together with its render target
pub struct ArrayDisplay<T> {
    scene: ArrayScene<T>,
    target: Target<ArrayScene<T>>,
}

impl<T> ArrayDisplay<T> {
    pub fn new(values: Vec<T>) -> Self {
        let classes = vec![BTreeSet::new(); values.len()];
        Self {
            scene: ArrayScene {
                values,
                classes,
                pointers: BTreeMap::new(),
            },
            target: Target::default(),
        }
    }

    /// Attaches the target notified by [`ArrayDisplay::refresh`]
    pub fn set_target(&mut self, target: impl RenderTarget<ArrayScene<T>> + 'static) {
        self.target.set(Box::new(target));
    }

    pub fn scene(&self) -> &ArrayScene<T> {
        &self.scene
    }

    /// Renders the current scene unless `quick`
    pub fn refresh(&mut self, quick: bool) {
        self.target.refresh(&self.scene, quick);
    }

    pub fn len(&self) -> usize {
        self.scene.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scene.values.is_empty()
    }

    pub fn values(&self) -> &[T] {
        &self.scene.values
    }

    /// ** Panics if `i >= len` **
    pub fn value(&self, i: usize) -> &T {
        &self.scene.values[i]
    }

    /// Replaces the value at `i` and returns the previous one
    /// ** Panics if `i >= len` **
    pub fn set_value(&mut self, i: usize, value: T) -> T {
        std::mem::replace(&mut self.scene.values[i], value)
    }

    /// Swaps the values of two cells; classes stay with their cell
    /// ** Panics if `i >= len` or `j >= len` **
    pub fn swap(&mut self, i: usize, j: usize) {
        self.scene.values.swap(i, j);
    }

    /// Appends a cell without classes
    pub fn push(&mut self, value: T) {
        self.scene.values.push(value);
        self.scene.classes.push(BTreeSet::new());
    }

    /// Removes the last cell and returns its value
    pub fn pop(&mut self) -> Option<T> {
        self.scene.classes.pop();
        self.scene.values.pop()
    }

    pub fn pointer(&self, name: &str) -> Option<usize> {
        self.scene.pointers.get(name).copied()
    }

    pub fn pointers(&self) -> &BTreeMap<String, usize> {
        &self.scene.pointers
    }

    /// Points `name` at `index` (or removes it) and returns the previous index
    pub fn set_pointer(&mut self, name: &str, index: Option<usize>) -> Option<usize> {
        match index {
            Some(index) => self.scene.pointers.insert(name.to_owned(), index),
            None => self.scene.pointers.remove(name),
        }
    }

    /// Removes all pointers and returns them
    pub fn reset_all_pointers(&mut self) -> BTreeMap<String, usize> {
        std::mem::take(&mut self.scene.pointers)
    }

    pub fn has_class(&self, i: usize, class: &str) -> bool {
        self.scene.classes[i].contains(class)
    }

    /// Returns *true* if the class was not present before
    pub fn add_class(&mut self, i: usize, class: &str) -> bool {
        self.scene.classes[i].insert(class.to_owned())
    }

    /// Returns *true* if the class was present before
    pub fn remove_class(&mut self, i: usize, class: &str) -> bool {
        self.scene.classes[i].remove(class)
    }

    pub fn toggle_class(&mut self, i: usize, class: &str) {
        if !self.remove_class(i, class) {
            self.add_class(i, class);
        }
    }

    /// Removes `class` from every cell and returns which cells had it
    pub fn remove_class_everywhere(&mut self, class: &str) -> Vec<bool> {
        self.scene
            .classes
            .iter_mut()
            .map(|classes| classes.remove(class))
            .collect()
    }
}

impl<T: Debug> Debug for ArrayDisplay<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayDisplay")
            .field("scene", &self.scene)
            .field("has_target", &self.target.is_attached())
            .finish()
    }
}

/// Replaces the value of a cell
#[derive(Clone, Debug)]
pub struct ArraySetValue<T> {
    index: usize,
    value: T,
    old: Option<T>,
}

impl<T> ArraySetValue<T> {
    pub fn new(index: usize, value: T) -> Self {
        Self {
            index,
            value,
            old: None,
        }
    }
}

impl<T: Clone> Command<ArrayDisplay<T>> for ArraySetValue<T> {
    fn apply(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        self.old = Some(display.set_value(self.index, self.value.clone()));
        display.refresh(quick);
    }

    fn revert(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        if let Some(old) = self.old.take() {
            display.set_value(self.index, old);
        }
        display.refresh(quick);
    }

    fn name(&self) -> &str {
        "set value"
    }
}

/// Adds `delta` to the value of a cell
#[derive(Clone, Debug)]
pub struct ArrayIncrementValue<T> {
    index: usize,
    delta: T,
}

impl<T> ArrayIncrementValue<T> {
    pub fn new(index: usize, delta: T) -> Self {
        Self { index, delta }
    }
}

impl<T> Command<ArrayDisplay<T>> for ArrayIncrementValue<T>
where
    T: Clone + AddAssign + SubAssign,
{
    fn apply(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        display.scene.values[self.index] += self.delta.clone();
        display.refresh(quick);
    }

    fn revert(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        display.scene.values[self.index] -= self.delta.clone();
        display.refresh(quick);
    }

    fn name(&self) -> &str {
        "increment value"
    }
}

/// Swaps the values of two cells
#[derive(Clone, Copy, Debug)]
pub struct ArraySwap {
    i: usize,
    j: usize,
}

impl ArraySwap {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

impl<T> Command<ArrayDisplay<T>> for ArraySwap {
    fn apply(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        display.swap(self.i, self.j);
        display.refresh(quick);
    }

    fn revert(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        display.swap(self.i, self.j);
        display.refresh(quick);
    }

    fn name(&self) -> &str {
        "swap"
    }
}

/// Appends a cell
#[derive(Clone, Debug)]
pub struct ArrayPush<T> {
    value: T,
}

impl<T> ArrayPush<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone> Command<ArrayDisplay<T>> for ArrayPush<T> {
    fn apply(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        display.push(self.value.clone());
        display.refresh(quick);
    }

    fn revert(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        display.pop();
        display.refresh(quick);
    }

    fn name(&self) -> &str {
        "push"
    }
}

/// Removes the last cell. Popping an empty array does nothing, also on revert.
#[derive(Clone, Debug)]
pub struct ArrayPop<T> {
    popped: Option<(T, BTreeSet<String>)>,
}

impl<T> Default for ArrayPop<T> {
    fn default() -> Self {
        Self { popped: None }
    }
}

impl<T> ArrayPop<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Command<ArrayDisplay<T>> for ArrayPop<T> {
    fn apply(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        let classes = display.scene.classes.pop();
        self.popped = display.scene.values.pop().zip(classes);
        display.refresh(quick);
    }

    fn revert(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        if let Some((value, classes)) = self.popped.take() {
            display.scene.values.push(value);
            display.scene.classes.push(classes);
        }
        display.refresh(quick);
    }

    fn name(&self) -> &str {
        "pop"
    }
}

/// Adds a class to a cell; reverting removes it only if it was not present before
#[derive(Clone, Debug)]
pub struct ArrayAddClass {
    index: usize,
    class: String,
    added: bool,
}

impl ArrayAddClass {
    pub fn new(index: usize, class: impl Into<String>) -> Self {
        Self {
            index,
            class: class.into(),
            added: false,
        }
    }
}

impl<T> Command<ArrayDisplay<T>> for ArrayAddClass {
    fn apply(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        self.added = display.add_class(self.index, &self.class);
        display.refresh(quick);
    }

    fn revert(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        if self.added {
            display.remove_class(self.index, &self.class);
        }
        display.refresh(quick);
    }

    fn name(&self) -> &str {
        "add class"
    }
}

/// Removes a class from every cell
#[derive(Clone, Debug)]
pub struct ArrayRemoveAllClasses {
    class: String,
    had_class: Vec<bool>,
}

impl ArrayRemoveAllClasses {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            had_class: Vec::new(),
        }
    }
}

impl<T> Command<ArrayDisplay<T>> for ArrayRemoveAllClasses {
    fn apply(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        self.had_class = display.remove_class_everywhere(&self.class);
        display.refresh(quick);
    }

    fn revert(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        for (i, had) in std::mem::take(&mut self.had_class).into_iter().enumerate() {
            if had {
                display.add_class(i, &self.class);
            }
        }
        display.refresh(quick);
    }

    fn name(&self) -> &str {
        "remove all classes"
    }
}

/// Moves the [`ACTIVE_CLASS`] to a single cell
pub struct ArraySetActive<T>(CompositeCommand<ArrayDisplay<T>>);

impl<T: 'static> ArraySetActive<T> {
    pub fn new(index: usize) -> Self {
        Self(
            CompositeCommand::new("set active")
                .with(ArrayRemoveAllClasses::new(ACTIVE_CLASS))
                .with(ArrayAddClass::new(index, ACTIVE_CLASS)),
        )
    }
}

impl<T> Command<ArrayDisplay<T>> for ArraySetActive<T> {
    fn apply(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        self.0.apply(display, quick);
    }

    fn revert(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        self.0.revert(display, quick);
    }

    fn name(&self) -> &str {
        self.0.name()
    }
}

/// Points a named pointer at a cell, or removes it with `None`
#[derive(Clone, Debug)]
pub struct ArraySetPointer {
    name: String,
    index: Option<usize>,
    old: Option<usize>,
}

impl ArraySetPointer {
    pub fn new(name: impl Into<String>, index: Option<usize>) -> Self {
        Self {
            name: name.into(),
            index,
            old: None,
        }
    }
}

impl<T> Command<ArrayDisplay<T>> for ArraySetPointer {
    fn apply(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        self.old = display.set_pointer(&self.name, self.index);
        display.refresh(quick);
    }

    fn revert(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        display.set_pointer(&self.name, self.old.take());
        display.refresh(quick);
    }

    fn name(&self) -> &str {
        "set pointer"
    }
}

/// Removes every pointer
#[derive(Clone, Debug, Default)]
pub struct ArrayResetPointers {
    old: BTreeMap<String, usize>,
}

impl ArrayResetPointers {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Command<ArrayDisplay<T>> for ArrayResetPointers {
    fn apply(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        self.old = display.reset_all_pointers();
        display.refresh(quick);
    }

    fn revert(&mut self, display: &mut ArrayDisplay<T>, quick: bool) {
        for (name, index) in std::mem::take(&mut self.old) {
            display.set_pointer(&name, Some(index));
        }
        display.refresh(quick);
    }

    fn name(&self) -> &str {
        "reset pointers"
    }
}
