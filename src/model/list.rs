//! ModelList - an observable list used as the backing model of UI components
//!
//! Every structural mutation fires exactly one `children` property change
//! carrying the full current contents. Element hooks run first, once per
//! element entering or leaving the list. Failed operations leave the list
//! untouched and fire nothing.

use std::fmt;
use std::mem;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::errors::{ModelError, ModelResult};

use super::event::{ListenerId, PropertyChangeEvent, CHILDREN_PROPERTY};
use super::hooks::{ElementHooks, NoHooks};
use super::ChangeSupport;

/// Ordered, observable collection of model elements
pub struct ModelList<T, H = NoHooks> {
    children: Vec<T>,
    hooks: H,
    support: ChangeSupport<T>,
}

impl<T> ModelList<T> {
    /// Create an empty list without element hooks
    pub fn new() -> Self {
        Self::with_hooks(NoHooks)
    }

    /// Create a list owning the given elements
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_vec_with_hooks(items, NoHooks)
    }
}

impl<T, H> ModelList<T, H> {
    /// Create an empty list with element hooks
    pub fn with_hooks(hooks: H) -> Self {
        Self::from_vec_with_hooks(Vec::new(), hooks)
    }

    /// Create a list owning the given elements, with element hooks.
    /// Hooks are not called for the initial elements.
    pub fn from_vec_with_hooks(items: Vec<T>, hooks: H) -> Self {
        Self {
            children: items,
            hooks,
            support: ChangeSupport::new(),
        }
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// Register a change listener
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PropertyChangeEvent<'_, T>) + 'static,
    {
        self.support.subscribe(listener)
    }

    /// Remove a change listener
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.support.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.support.listener_count()
    }

    // ========================================================================
    // READ ACCESS
    // ========================================================================

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> ModelResult<&T> {
        self.children
            .get(index)
            .ok_or_else(|| ModelError::out_of_range(index, self.children.len()))
    }

    /// The bindable `children` view
    pub fn children(&self) -> &[T] {
        &self.children
    }

    pub fn as_slice(&self) -> &[T] {
        &self.children
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.children.iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.children.clone()
    }

    /// Copy of the elements in `from..to`, clipped to the list length
    pub fn sub_list(&self, from: usize, to: usize) -> Vec<T>
    where
        T: Clone,
    {
        let end = to.min(self.children.len());
        if from >= end {
            return Vec::new();
        }
        self.children[from..end].to_vec()
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.children.contains(item)
    }

    pub fn contains_all(&self, items: &[T]) -> bool
    where
        T: PartialEq,
    {
        items.iter().all(|item| self.children.contains(item))
    }

    /// Position of the first occurrence of `item`
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.children.iter().position(|c| c == item)
    }

    /// Position of the last occurrence of `item`
    pub fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.children.iter().rposition(|c| c == item)
    }

    fn check_index(&self, index: usize, bound: usize) -> ModelResult<()> {
        if index >= bound {
            crate::log!(
                "ModelList: index {} out of range (len {})",
                index,
                self.children.len()
            );
            return Err(ModelError::out_of_range(index, self.children.len()));
        }
        Ok(())
    }

    fn position_of(&self, item: &T) -> ModelResult<usize>
    where
        T: PartialEq,
    {
        self.index_of(item).ok_or_else(|| {
            crate::log!("ModelList: element not found");
            ModelError::ElementNotFound
        })
    }

    fn fire_collection_changed(&mut self) {
        self.support
            .fire(CHILDREN_PROPERTY, None, self.children.as_slice());
    }
}

impl<T, H: ElementHooks<T>> ModelList<T, H> {
    // ========================================================================
    // SINGLE-ELEMENT MUTATIONS
    // ========================================================================

    /// Append an element. Always succeeds.
    pub fn add(&mut self, item: T) -> bool {
        self.children.push(item);
        if let Some(added) = self.children.last() {
            self.hooks.on_add(added);
        }
        self.fire_collection_changed();
        true
    }

    /// Insert an element at `index` (which may equal the length)
    pub fn insert(&mut self, index: usize, item: T) -> ModelResult<()> {
        self.check_index(index, self.children.len() + 1)?;
        self.children.insert(index, item);
        self.hooks.on_add(&self.children[index]);
        self.fire_collection_changed();
        Ok(())
    }

    /// Remove and return the element at `index`
    pub fn remove_at(&mut self, index: usize) -> ModelResult<T> {
        self.check_index(index, self.children.len())?;
        let item = self.children.remove(index);
        self.hooks.on_remove(&item);
        self.fire_collection_changed();
        Ok(item)
    }

    /// Remove and return the first element equal to `item`
    pub fn remove(&mut self, item: &T) -> ModelResult<T>
    where
        T: PartialEq,
    {
        let index = self.position_of(item)?;
        self.remove_at(index)
    }

    /// Replace the element at `index`, returning the previous one
    pub fn set(&mut self, index: usize, item: T) -> ModelResult<T> {
        self.check_index(index, self.children.len())?;
        let old = mem::replace(&mut self.children[index], item);
        self.hooks.on_remove(&old);
        self.hooks.on_add(&self.children[index]);
        self.fire_collection_changed();
        Ok(old)
    }

    // ========================================================================
    // REORDERING
    // ========================================================================

    /// Swap the element at `index` with its predecessor.
    /// The first element stays put and nothing fires.
    pub fn move_up(&mut self, index: usize) -> ModelResult<()> {
        self.check_index(index, self.children.len())?;
        if index == 0 {
            return Ok(());
        }
        self.children.swap(index - 1, index);
        self.fire_collection_changed();
        Ok(())
    }

    /// Swap the element at `index` with its successor.
    /// Fails for the last position.
    pub fn move_down(&mut self, index: usize) -> ModelResult<()> {
        self.check_index(index, self.children.len().saturating_sub(1))?;
        self.children.swap(index, index + 1);
        self.fire_collection_changed();
        Ok(())
    }

    /// Move the first occurrence of `item` one position up
    pub fn move_item_up(&mut self, item: &T) -> ModelResult<()>
    where
        T: PartialEq,
    {
        let index = self.position_of(item)?;
        self.move_up(index)
    }

    /// Move the first occurrence of `item` one position down
    pub fn move_item_down(&mut self, item: &T) -> ModelResult<()>
    where
        T: PartialEq,
    {
        let index = self.position_of(item)?;
        self.move_down(index)
    }

    // ========================================================================
    // BULK MUTATIONS
    // ========================================================================

    /// Remove every element
    pub fn clear(&mut self) {
        let old = mem::take(&mut self.children);
        for item in &old {
            self.hooks.on_remove(item);
        }
        self.fire_collection_changed();
    }

    /// Replace the entire contents
    pub fn replace_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let old = mem::replace(&mut self.children, items.into_iter().collect());
        crate::log_fn!(
            "ModelList::replace_all",
            "{} -> {} elements",
            old.len(),
            self.children.len()
        );
        for item in &old {
            self.hooks.on_remove(item);
        }
        for item in &self.children {
            self.hooks.on_add(item);
        }
        self.fire_collection_changed();
    }

    /// Bindable setter for the `children` property; copies `children`
    pub fn set_children(&mut self, children: &[T])
    where
        T: Clone,
    {
        self.replace_all(children.iter().cloned());
    }

    /// Append all elements. Returns `false`, firing nothing, when `items`
    /// is empty.
    pub fn add_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let start = self.children.len();
        self.children.extend(items);
        if self.children.len() == start {
            return false;
        }
        for item in &self.children[start..] {
            self.hooks.on_add(item);
        }
        self.fire_collection_changed();
        true
    }

    /// Insert all elements at `index`, preserving their order
    pub fn add_all_at<I>(&mut self, index: usize, items: I) -> ModelResult<bool>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_index(index, self.children.len() + 1)?;
        let new: Vec<T> = items.into_iter().collect();
        if new.is_empty() {
            return Ok(false);
        }
        let end = index + new.len();
        self.children.splice(index..index, new);
        for item in &self.children[index..end] {
            self.hooks.on_add(item);
        }
        self.fire_collection_changed();
        Ok(true)
    }

    /// Remove every occurrence of each element in `items`.
    /// Fires a notification even when nothing matched.
    pub fn remove_all(&mut self, items: &[T]) -> bool
    where
        T: PartialEq,
    {
        let removed = self.extract(|c| items.contains(c));
        self.fire_collection_changed();
        removed
    }

    /// Keep only elements present in `items`.
    /// Fires a notification even when nothing was removed.
    pub fn retain_all(&mut self, items: &[T]) -> bool
    where
        T: PartialEq,
    {
        let removed = self.extract(|c| !items.contains(c));
        self.fire_collection_changed();
        removed
    }

    /// Drop the elements matching `pred`, calling the remove hook for each
    fn extract<F>(&mut self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let (removed, kept): (Vec<T>, Vec<T>) =
            mem::take(&mut self.children).into_iter().partition(pred);
        self.children = kept;
        for item in &removed {
            self.hooks.on_remove(item);
        }
        !removed.is_empty()
    }
}

impl<T, H: Default> Default for ModelList<T, H> {
    fn default() -> Self {
        Self::with_hooks(H::default())
    }
}

impl<T> From<Vec<T>> for ModelList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> FromIterator<T> for ModelList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T, H> IntoIterator for &'a ModelList<T, H> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl<T: fmt::Debug, H> fmt::Debug for ModelList<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelList")
            .field("children", &self.children)
            .field("listeners", &self.support.listener_count())
            .finish()
    }
}

impl<T: PartialEq, H, H2> PartialEq<ModelList<T, H2>> for ModelList<T, H> {
    fn eq(&self, other: &ModelList<T, H2>) -> bool {
        self.children == other.children
    }
}

impl<T: PartialEq, H> PartialEq<[T]> for ModelList<T, H> {
    fn eq(&self, other: &[T]) -> bool {
        self.children == other
    }
}

impl<T: PartialEq, H> PartialEq<Vec<T>> for ModelList<T, H> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.children == other
    }
}

impl<T: Serialize, H> Serialize for ModelList<T, H> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.children.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>, H: Default> Deserialize<'de> for ModelList<T, H> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let children = Vec::<T>::deserialize(deserializer)?;
        Ok(Self::from_vec_with_hooks(children, H::default()))
    }
}
