//! Ordered collection with change notifications.
//!
//! [`ObservableVec`] wraps a `Vec` behind a narrow mutation API. Every
//! mutation completes first and then notifies each subscriber with a
//! [`ListChanged`] describing the affected item and action.
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tessera_core::{ListAction, ObservableVec};
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut items = ObservableVec::new();
//! let log = Rc::clone(&seen);
//! items.subscribe(move |change| log.borrow_mut().push(change.action));
//!
//! items.push("a");
//! items.clear();
//! assert_eq!(*seen.borrow(), vec![ListAction::Add, ListAction::Clear]);
//! ```

use std::fmt;
use thiserror::Error;

/// Kind of mutation applied to an [`ObservableVec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListAction {
    /// An item was appended or inserted
    Add,
    /// An item was replaced in place or modified through `update`
    Update,
    /// An item was removed
    Remove,
    /// All items were removed
    Clear,
}

/// Change notification payload.
#[derive(Debug)]
pub struct ListChanged<'a, T> {
    /// The affected item (the new value for `Update`, the removed value for
    /// `Remove`, `None` for `Clear`)
    pub item: Option<&'a T>,
    /// Position of the affected item at the time of the change
    pub index: Option<usize>,
    /// What happened
    pub action: ListAction,
}

/// Error for positional mutations outside the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of range for collection of length {len}")]
pub struct IndexOutOfRange {
    /// Requested index
    pub index: usize,
    /// Collection length at the time of the request
    pub len: usize,
}

type Subscriber<T> = Box<dyn FnMut(&ListChanged<'_, T>)>;

/// An ordered, mutable sequence that reports its own mutations.
pub struct ObservableVec<T> {
    items: Vec<T>,
    subscribers: Vec<Subscriber<T>>,
}

impl<T> ObservableVec<T> {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Register a change callback.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&ListChanged<'_, T>) + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when `index` addresses an existing item.
    #[must_use]
    pub fn in_range(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// Borrow an item.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Borrow an item mutably without notifying subscribers.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Last item.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Iterate in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate mutably without notifying subscribers.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// View as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Append an item, returning its index.
    pub fn push(&mut self, item: T) -> usize {
        let index = self.items.len();
        self.items.push(item);
        self.notify(Some(index), ListAction::Add);
        index
    }

    /// Insert an item at `index`, shifting later items.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), IndexOutOfRange> {
        if index > self.items.len() {
            return Err(self.out_of_range(index));
        }
        self.items.insert(index, item);
        self.notify(Some(index), ListAction::Add);
        Ok(())
    }

    /// Replace the item at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, IndexOutOfRange> {
        if index >= self.items.len() {
            return Err(self.out_of_range(index));
        }
        let old = std::mem::replace(&mut self.items[index], item);
        self.notify(Some(index), ListAction::Update);
        Ok(old)
    }

    /// Modify the item at `index` in place, then notify an `Update`.
    pub fn update<R>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, IndexOutOfRange> {
        if index >= self.items.len() {
            return Err(self.out_of_range(index));
        }
        let result = f(&mut self.items[index]);
        self.notify(Some(index), ListAction::Update);
        Ok(result)
    }

    /// Remove and return the item at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        if index >= self.items.len() {
            return Err(self.out_of_range(index));
        }
        let item = self.items.remove(index);
        let change = ListChanged {
            item: Some(&item),
            index: Some(index),
            action: ListAction::Remove,
        };
        for subscriber in &mut self.subscribers {
            subscriber(&change);
        }
        Ok(item)
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
        self.notify(None, ListAction::Clear);
    }

    fn notify(&mut self, index: Option<usize>, action: ListAction) {
        if self.subscribers.is_empty() {
            return;
        }
        let change = ListChanged {
            item: index.and_then(|i| self.items.get(i)),
            index,
            action,
        };
        for subscriber in &mut self.subscribers {
            subscriber(&change);
        }
    }

    fn out_of_range(&self, index: usize) -> IndexOutOfRange {
        IndexOutOfRange {
            index,
            len: self.items.len(),
        }
    }
}

impl<T: PartialEq> ObservableVec<T> {
    /// Position of the first item equal to `item`.
    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|x| x == item)
    }

    /// True when an equal item is present.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Remove the first item equal to `item`.
    pub fn remove_item(&mut self, item: &T) -> Option<T> {
        let index = self.index_of(item)?;
        self.remove(index).ok()
    }
}

impl<T> Default for ObservableVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableVec")
            .field("items", &self.items)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a ObservableVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for ObservableVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            subscribers: Vec::new(),
        }
    }
}
