//! Binary heap priority queue with arbitrary-element removal.
//!
//! Unlike `std::collections::BinaryHeap`, the ordering direction is chosen at
//! runtime and any element can be removed by equality, which the frontier
//! search needs when a node's priority becomes stale.

/// Ordering direction of a [`PriorityQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOrder {
    /// Smallest priority is popped first.
    Min,
    /// Largest priority is popped first.
    Max,
}

/// An element stored in the heap with its priority.
#[derive(Debug, Clone, PartialEq)]
pub struct HeapNode<T, P> {
    /// The stored element.
    pub element: T,
    /// The element's priority.
    pub priority: P,
}

impl<T, P> HeapNode<T, P> {
    /// Create a heap node.
    pub const fn new(element: T, priority: P) -> Self {
        Self { element, priority }
    }
}

/// Binary heap with min/max ordering fixed at construction.
///
/// Ties between equal priorities are broken arbitrarily; there is no FIFO
/// guarantee.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P> {
    heap: Vec<HeapNode<T, P>>,
    order: HeapOrder,
    equals: fn(&T, &T) -> bool,
}

impl<T: PartialEq, P: PartialOrd> PriorityQueue<T, P> {
    /// Create an empty queue that matches elements with `PartialEq`.
    #[must_use]
    pub fn new(order: HeapOrder) -> Self {
        Self::with_equality(order, <T as PartialEq>::eq)
    }

    /// Create an empty min-heap.
    #[must_use]
    pub fn min() -> Self {
        Self::new(HeapOrder::Min)
    }

    /// Create an empty max-heap.
    #[must_use]
    pub fn max() -> Self {
        Self::new(HeapOrder::Max)
    }
}

impl<T, P: PartialOrd> PriorityQueue<T, P> {
    /// Create an empty queue that matches elements with `equals` in
    /// [`has`](Self::has) and [`remove`](Self::remove).
    #[must_use]
    pub fn with_equality(order: HeapOrder, equals: fn(&T, &T) -> bool) -> Self {
        Self {
            heap: Vec::new(),
            order,
            equals,
        }
    }

    /// The ordering direction.
    #[must_use]
    pub const fn order(&self) -> HeapOrder {
        self.order
    }

    /// Number of queued elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The element that [`pop`](Self::pop) would return next.
    #[must_use]
    pub fn peek(&self) -> Option<&HeapNode<T, P>> {
        self.heap.first()
    }

    /// Add an element.
    pub fn push(&mut self, element: T, priority: P) {
        self.heap.push(HeapNode::new(element, priority));
        self.sift_up(self.heap.len() - 1);
    }

    /// Add several elements, returning the new length.
    pub fn push_all<I>(&mut self, nodes: I) -> usize
    where
        I: IntoIterator<Item = HeapNode<T, P>>,
    {
        self.extend(nodes);
        self.len()
    }

    /// Remove and return the extremal element.
    pub fn pop(&mut self) -> Option<HeapNode<T, P>> {
        if self.heap.is_empty() {
            return None;
        }
        let popped = self.heap.swap_remove(0);
        self.sift_down(0);
        Some(popped)
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Check whether an element equal to `element` is queued.
    #[must_use]
    pub fn has(&self, element: &T) -> bool {
        self.position(element).is_some()
    }

    /// Remove one element equal to `element`.
    ///
    /// Returns the removed node, or `None` if no element matched.
    pub fn remove(&mut self, element: &T) -> Option<HeapNode<T, P>> {
        let index = self.position(element)?;
        let removed = self.heap.swap_remove(index);

        // The last element now sits at `index` and may violate the heap in
        // either direction.
        if index < self.heap.len() {
            if index > 0 && self.prefers(index, parent(index)) {
                self.sift_up(index);
            } else {
                self.sift_down(index);
            }
        }
        Some(removed)
    }

    /// Iterate over queued nodes in heap (not priority) order.
    pub fn iter(&self) -> std::slice::Iter<'_, HeapNode<T, P>> {
        self.heap.iter()
    }

    fn position(&self, element: &T) -> Option<usize> {
        self.heap
            .iter()
            .position(|node| (self.equals)(&node.element, element))
    }

    /// True if the node at `a` must sit above the node at `b`.
    fn prefers(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.heap[a].priority, &self.heap[b].priority);
        match self.order {
            HeapOrder::Min => a < b,
            HeapOrder::Max => a > b,
        }
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let up = parent(node);
            if !self.prefers(node, up) {
                break;
            }
            self.heap.swap(node, up);
            node = up;
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.heap.len();
        loop {
            let left = left(node);
            if left >= len {
                break;
            }
            let right = right(node);
            let child = if right < len && self.prefers(right, left) {
                right
            } else {
                left
            };
            if !self.prefers(child, node) {
                break;
            }
            self.heap.swap(node, child);
            node = child;
        }
    }
}

impl<T, P: PartialOrd> Extend<HeapNode<T, P>> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = HeapNode<T, P>>>(&mut self, iter: I) {
        for node in iter {
            self.push(node.element, node.priority);
        }
    }
}

const fn parent(i: usize) -> usize {
    ((i + 1) >> 1) - 1
}

const fn left(i: usize) -> usize {
    (i << 1) + 1
}

const fn right(i: usize) -> usize {
    (i + 1) << 1
}
