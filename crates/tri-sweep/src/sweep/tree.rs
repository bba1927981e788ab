//! Height-balanced (AVL) binary search tree with an injected ordering.

use std::cmp::Ordering;

/// Strategy that orders the values of an [`OrderedTree`].
///
/// The tree never stores the comparator, so its ordering may depend on
/// external state (such as a sweep position). The tree is only sorted with
/// respect to the comparator it was last modified with; using a comparator
/// that disagrees with that order gives unspecified (but memory-safe)
/// results.
pub trait Comparator<T> {
    /// Compares two values.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    height: i32,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

type Link<T> = Option<Box<Node<T>>>;

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn update(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

#[inline]
fn height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(0, |n| n.height)
}

/// An AVL tree whose order is supplied per call by a [`Comparator`].
///
/// Values comparing equal to an existing value are inserted after it.
#[derive(Debug, Clone)]
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<T> OrderedTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree (0 when empty).
    #[inline]
    pub fn height(&self) -> usize {
        height(&self.root) as usize
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts a value.
    pub fn insert<C: Comparator<T>>(&mut self, value: T, cmp: &C) {
        self.root = Some(insert_node(self.root.take(), value, cmp));
        self.len += 1;
    }

    /// Removes the value comparing equal to `value` and returns it.
    ///
    /// Returns `None` if no such value is found along the search path.
    pub fn remove<C: Comparator<T>>(&mut self, value: &T, cmp: &C) -> Option<T> {
        let mut removed = None;
        self.root = remove_node(self.root.take(), value, cmp, &mut removed);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Returns the stored value comparing equal to `value`.
    pub fn find<C: Comparator<T>>(&self, value: &T, cmp: &C) -> Option<&T> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match cmp.compare(value, &node.value) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Returns the greatest value ordered strictly before `value`.
    ///
    /// `value` need not be stored in the tree.
    pub fn below<C: Comparator<T>>(&self, value: &T, cmp: &C) -> Option<&T> {
        let mut cur = self.root.as_deref();
        let mut best = None;
        while let Some(node) = cur {
            if cmp.compare(value, &node.value) == Ordering::Greater {
                best = Some(&node.value);
                cur = node.right.as_deref();
            } else {
                cur = node.left.as_deref();
            }
        }
        best
    }

    /// Returns the least value ordered strictly after `value`.
    ///
    /// `value` need not be stored in the tree.
    pub fn above<C: Comparator<T>>(&self, value: &T, cmp: &C) -> Option<&T> {
        let mut cur = self.root.as_deref();
        let mut best = None;
        while let Some(node) = cur {
            if cmp.compare(value, &node.value) == Ordering::Less {
                best = Some(&node.value);
                cur = node.left.as_deref();
            } else {
                cur = node.right.as_deref();
            }
        }
        best
    }

    /// Returns the smallest value.
    pub fn first(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the largest value.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Iterates over the values in order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over an [`OrderedTree`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.value)
    }
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update();
    pivot.right = Some(node);
    pivot.update();
    pivot
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update();
    pivot.left = Some(node);
    pivot.update();
    pivot
}

fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update();
    let balance = node.balance_factor();
    if balance > 1 {
        if node.left.as_ref().is_some_and(|l| l.balance_factor() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if balance < -1 {
        if node.right.as_ref().is_some_and(|r| r.balance_factor() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    }
}

fn insert_node<T, C: Comparator<T>>(link: Link<T>, value: T, cmp: &C) -> Box<Node<T>> {
    let Some(mut node) = link else {
        return Node::leaf(value);
    };
    if cmp.compare(&value, &node.value) == Ordering::Less {
        node.left = Some(insert_node(node.left.take(), value, cmp));
    } else {
        node.right = Some(insert_node(node.right.take(), value, cmp));
    }
    rebalance(node)
}

fn remove_node<T, C: Comparator<T>>(
    link: Link<T>,
    value: &T,
    cmp: &C,
    removed: &mut Option<T>,
) -> Link<T> {
    let mut node = link?;
    match cmp.compare(value, &node.value) {
        Ordering::Less => node.left = remove_node(node.left.take(), value, cmp, removed),
        Ordering::Greater => node.right = remove_node(node.right.take(), value, cmp, removed),
        Ordering::Equal => {
            let Node {
                value: found,
                left,
                right,
                ..
            } = *node;
            *removed = Some(found);
            return match (left, right) {
                (None, rest) | (rest, None) => rest,
                (Some(left), Some(right)) => {
                    let (rest, mut successor) = take_min(right);
                    successor.left = Some(left);
                    successor.right = rest;
                    Some(rebalance(successor))
                }
            };
        }
    }
    Some(rebalance(node))
}

/// Detaches the smallest node, returning the remaining subtree and that node.
fn take_min<T>(mut node: Box<Node<T>>) -> (Link<T>, Box<Node<T>>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            (Some(rebalance(node)), min)
        }
    }
}
