//! The data request cart.
//!
//! A cart is an insertion-ordered set of archive files, where two files are
//! the same if they have the same `id`. Persistence is handled by a
//! [`CartStore`] injected through [`StoredCart`].

mod error;
mod store;

pub use error::{StoreError, StoreResult};
pub use store::{CartStore, JsonFileCartStore, MemoryCartStore, StoredCart};

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The observation a file belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartObservation {
    pub id: String,
    pub name: String,
}

/// A file that can be put into the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartFile {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<CartObservation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl CartFile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            observation: None,
            target: None,
        }
    }

    pub fn with_observation(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.observation = Some(CartObservation {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// The observation id, or the empty string for files without one.
    pub fn observation_id(&self) -> &str {
        self.observation.as_ref().map_or("", |o| o.id.as_str())
    }
}

/// An insertion-ordered, `id`-deduplicated collection of [`CartFile`]s.
///
/// # Examples
///
/// ```
/// use archive_query::cart::{Cart, CartFile};
///
/// let mut cart = Cart::default();
/// cart.add(&[CartFile::new("A", "a.fits"), CartFile::new("A", "again.fits")]);
/// assert_eq!(cart.len(), 1);
/// assert_eq!(cart.files()[0].name, "a.fits");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    files: Vec<CartFile>,
}

impl Cart {
    /// Build a cart from stored files, dropping repeated ids.
    pub fn from_files(files: Vec<CartFile>) -> Self {
        let mut cart = Self::default();
        cart.add(&files);
        cart
    }

    /// Whether a file with the same `id` is in the cart. Other fields are ignored.
    pub fn contains(&self, file: &CartFile) -> bool {
        self.files.iter().any(|f| f.id == file.id)
    }

    /// Append the files not yet in the cart, keeping their order.
    ///
    /// Returns the number of files added.
    pub fn add(&mut self, files: &[CartFile]) -> usize {
        let before = self.files.len();
        for file in files {
            if self.contains(file) {
                debug!("Skipping file {} already in cart", file.id);
                continue;
            }
            self.files.push(file.clone());
        }
        self.files.len() - before
    }

    /// Remove every file whose `id` matches one of `files`.
    ///
    /// Returns the number of files removed.
    pub fn remove(&mut self, files: &[CartFile]) -> usize {
        let before = self.files.len();
        self.files
            .retain(|kept| !files.iter().any(|file| file.id == kept.id));
        before - self.files.len()
    }

    /// Files grouped by observation id. Files without an observation are
    /// grouped under the empty string.
    pub fn group_by_observation(&self) -> BTreeMap<String, Vec<&CartFile>> {
        let mut groups: BTreeMap<String, Vec<&CartFile>> = BTreeMap::new();
        for file in &self.files {
            groups
                .entry(file.observation_id().to_string())
                .or_default()
                .push(file);
        }
        groups
    }

    pub fn files(&self) -> &[CartFile] {
        &self.files
    }

    pub fn iter(&self) -> impl Iterator<Item = &CartFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartFile;
    type IntoIter = std::slice::Iter<'a, CartFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: &str) -> CartFile {
        CartFile::new(id, format!("{}.fits", id))
    }

    fn ids(cart: &Cart) -> Vec<&str> {
        cart.iter().map(|f| f.id.as_str()).collect()
    }

    fn cart_a_to_f() -> Cart {
        let mut cart = Cart::default();
        cart.add(&["A", "B", "C", "D", "E", "F"].map(file));
        cart
    }

    #[test]
    fn test_add_skips_files_already_in_cart() {
        let mut cart = cart_a_to_f();
        let added = cart.add(&["A", "Q", "D", "R"].map(file));
        assert_eq!(added, 2);
        assert_eq!(cart.len(), 8);
        assert_eq!(ids(&cart), vec!["A", "B", "C", "D", "E", "F", "Q", "R"]);
    }

    #[test]
    fn test_contains_compares_ids_only() {
        let cart = cart_a_to_f();
        assert!(cart.contains(&CartFile::new("C", "renamed.fits").with_target("M31")));
        assert!(!cart.contains(&file("Z")));
    }

    #[test]
    fn test_remove() {
        let mut cart = cart_a_to_f();
        let removed = cart.remove(&["B", "E", "X"].map(file));
        assert_eq!(removed, 2);
        assert_eq!(ids(&cart), vec!["A", "C", "D", "F"]);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.remove(&[file("A")]), 0);
    }

    #[test]
    fn test_group_by_observation() {
        let mut cart = Cart::default();
        cart.add(&[
            file("1").with_observation("obs-2", "Second"),
            file("2"),
            file("3").with_observation("obs-1", "First"),
            file("4").with_observation("obs-2", "Second"),
        ]);

        let groups = cart.group_by_observation();
        assert_eq!(groups.len(), 3);
        let group_ids =
            |key: &str| groups[key].iter().map(|f| f.id.as_str()).collect::<Vec<_>>();
        assert_eq!(group_ids(""), vec!["2"]);
        assert_eq!(group_ids("obs-1"), vec!["3"]);
        assert_eq!(group_ids("obs-2"), vec!["1", "4"]);
    }

    #[test]
    fn test_from_files_deduplicates() {
        let cart = Cart::from_files(vec![file("A"), file("B"), file("A")]);
        assert_eq!(ids(&cart), vec!["A", "B"]);
    }

    #[test]
    fn test_wire_shape() {
        let cart = Cart::from_files(vec![
            file("A").with_observation("obs-1", "NGC 300"),
            file("B"),
        ]);
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"id": "A", "name": "A.fits", "observation": {"id": "obs-1", "name": "NGC 300"}},
                {"id": "B", "name": "B.fits"}
            ])
        );
        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }
}
