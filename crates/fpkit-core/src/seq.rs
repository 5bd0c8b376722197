use std::any::Any;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// An ordered, finite sequence of elements.
///
/// Iteration order always matches construction order. Operations never
/// mutate a sequence in place; `filter` and `map` return new sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<T>(Vec<T>);

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    /// Keep the elements for which `pred` holds, in order.
    pub fn filter<P>(&self, pred: P) -> Sequence<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        filter(&self.0, pred)
    }

    /// Apply `f` to every element, in order.
    pub fn map<U, F>(&self, f: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        map(&self.0, f)
    }

    /// Left fold starting from `initial`.
    pub fn reduce<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        reduce(&self.0, initial, combine)
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self(Vec::from(items))
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Sequence<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.0 == other
    }
}

/// Return a new sequence holding, in original order, exactly the elements
/// of `seq` for which `pred` returns true.
///
/// `pred` is called once per element.
pub fn filter<T, P>(seq: &[T], mut pred: P) -> Sequence<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut result = Vec::new();
    for item in seq {
        if pred(item) {
            result.push(item.clone());
        }
    }
    Sequence(result)
}

/// Return a new sequence of the same length where element `i` is `f(seq[i])`.
pub fn map<T, U, F>(seq: &[T], f: F) -> Sequence<U>
where
    F: FnMut(&T) -> U,
{
    Sequence(seq.iter().map(f).collect())
}

/// Fold `seq` left to right: `acc = combine(acc, e)` for each element.
///
/// An empty sequence returns `initial` unchanged.
pub fn reduce<T, A, F>(seq: &[T], initial: A, mut combine: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    let mut acc = initial;
    for item in seq {
        acc = combine(acc, item);
    }
    acc
}

/// Return the argument unchanged.
pub fn identity<T>(x: T) -> T {
    x
}

/// Type-erased counterpart of [`identity`].
///
/// The static type is lost on the way through; callers must `downcast` to
/// recover it.
pub fn identity_any(x: Box<dyn Any>) -> Box<dyn Any> {
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_files() -> Sequence<String> {
        ["README.md", "HelloWorld.swift", "FlappyBird.swift"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn filter_swift_files() {
        let files = example_files();
        let swift = files.filter(|f| f.ends_with(".swift"));
        assert_eq!(swift, vec!["HelloWorld.swift".to_string(), "FlappyBird.swift".into()]);
        // input untouched
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn filter_calls_predicate_once_per_element() {
        let numbers = Sequence::from([1, 2, 3, 4, 5]);
        let mut calls = 0;
        let evens = filter(numbers.as_slice(), |n| {
            calls += 1;
            n % 2 == 0
        });
        assert_eq!(evens, vec![2, 4]);
        assert_eq!(calls, 5);
    }

    #[test]
    fn filter_nothing_matches() {
        let numbers = Sequence::from([1, 3, 5]);
        assert!(numbers.filter(|n| n % 2 == 0).is_empty());
    }

    #[test]
    fn map_increments() {
        let numbers = Sequence::from([1, 2, 3, 4, 5]);
        let larger = numbers.map(|n| n + 1);
        assert_eq!(larger, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn map_changes_type() {
        let numbers = Sequence::from([7, 40]);
        let labels = numbers.map(|n| format!("#{n}"));
        assert_eq!(labels[0], "#7");
        assert_eq!(labels[1], "#40");
    }

    #[test]
    fn map_empty() {
        let empty: Sequence<i32> = Sequence::new();
        assert!(empty.map(|n| n * 2).is_empty());
    }

    #[test]
    fn reduce_sum() {
        let numbers = Sequence::from([1, 2, 3, 4, 5]);
        assert_eq!(numbers.reduce(0, |acc, n| acc + n), 15);
    }

    #[test]
    fn reduce_empty_returns_initial() {
        let empty: Sequence<i32> = Sequence::new();
        assert_eq!(empty.reduce(42, |acc, n| acc + n), 42);
    }

    #[test]
    fn reduce_is_left_to_right() {
        let words = Sequence::from(["a", "b", "c"]);
        let joined = reduce(words.as_slice(), String::from(">"), |acc, w| acc + *w);
        assert_eq!(joined, ">abc");
    }

    #[test]
    fn filter_map_reduce_chain() {
        let numbers = Sequence::from([1, 2, 3, 4, 5, 6]);
        let total = numbers
            .filter(|n| n % 2 == 1)
            .map(|n| n * 10)
            .reduce(0, |acc, n| acc + n);
        assert_eq!(total, 90);
    }

    #[test]
    fn identity_returns_input() {
        assert_eq!(identity("Foo"), "Foo");
        assert_eq!(identity(3), 3);
    }

    #[test]
    fn identity_any_needs_downcast() {
        let out = identity_any(Box::new("Bar"));
        assert!(out.is::<&str>());
        assert_eq!(out.downcast_ref::<&str>(), Some(&"Bar"));
        assert!(identity_any(Box::new(7u8)).downcast::<String>().is_err());
    }

    #[test]
    fn serializes_as_array() {
        let numbers = Sequence::from([1, 2, 3]);
        let json = serde_json::to_string(&numbers).unwrap();
        assert_eq!(json, "[1,2,3]");
        let parsed: Sequence<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, numbers);
    }

    #[test]
    fn iteration_order_matches_construction() {
        let seq: Sequence<char> = "xyz".chars().collect();
        let collected: String = seq.iter().collect();
        assert_eq!(collected, "xyz");
        assert_eq!(seq.get(2), Some(&'z'));
        assert_eq!(seq.get(3), None);
    }
}
