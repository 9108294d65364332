//! Cart persistence.
//!
//! [`CartStore`] is the seam between the cart and wherever it is kept.
//! [`MemoryCartStore`] keeps the files in a shared in-process buffer and is
//! what tests use; [`JsonFileCartStore`] keeps them in a JSON file.

use log::{debug, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use super::error::{StoreError, StoreResult};
use super::{Cart, CartFile};

/// Loads and saves the contents of a cart.
pub trait CartStore {
    /// The stored files, in cart order. An empty store yields no files.
    fn load(&self) -> StoreResult<Vec<CartFile>>;

    /// Replace the stored files.
    fn save(&self, files: &[CartFile]) -> StoreResult<()>;
}

impl<S: CartStore + ?Sized> CartStore for &S {
    fn load(&self) -> StoreResult<Vec<CartFile>> {
        (**self).load()
    }

    fn save(&self, files: &[CartFile]) -> StoreResult<()> {
        (**self).save(files)
    }
}

/// In-memory cart store.
///
/// Clones share the same contents, so a clone handed to a [`StoredCart`] can
/// be inspected from elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStore {
    files: Arc<RwLock<Vec<CartFile>>>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with `files`.
    pub fn with_files(files: Vec<CartFile>) -> Self {
        Self {
            files: Arc::new(RwLock::new(files)),
        }
    }

    /// Number of files currently stored.
    pub fn file_count(&self) -> StoreResult<usize> {
        Ok(self.files.read().map_err(|_| StoreError::Poisoned)?.len())
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> StoreResult<Vec<CartFile>> {
        Ok(self.files.read().map_err(|_| StoreError::Poisoned)?.clone())
    }

    fn save(&self, files: &[CartFile]) -> StoreResult<()> {
        let mut stored = self.files.write().map_err(|_| StoreError::Poisoned)?;
        *stored = files.to_vec();
        Ok(())
    }
}

/// Cart store backed by a JSON file holding an array of files.
#[derive(Debug, Clone)]
pub struct JsonFileCartStore {
    path: PathBuf,
}

impl JsonFileCartStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CartStore for JsonFileCartStore {
    fn load(&self) -> StoreResult<Vec<CartFile>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Cart file {} not found, starting with an empty cart",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };
        let files: Vec<CartFile> =
            serde_json::from_str(&content).map_err(|source| StoreError::Serialization {
                context: self.path.display().to_string(),
                source,
            })?;
        info!("Loaded {} cart files from {}", files.len(), self.path.display());
        Ok(files)
    }

    fn save(&self, files: &[CartFile]) -> StoreResult<()> {
        let json =
            serde_json::to_string_pretty(files).map_err(|source| StoreError::Serialization {
                context: self.path.display().to_string(),
                source,
            })?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        debug!("Saved {} cart files to {}", files.len(), self.path.display());
        Ok(())
    }
}

/// A cart bound to a store: loaded on open, saved after every change.
///
/// # Examples
///
/// ```
/// use archive_query::cart::{CartFile, CartStore, MemoryCartStore, StoredCart};
///
/// let store = MemoryCartStore::new();
/// let mut cart = StoredCart::open(store.clone()).unwrap();
/// cart.add(&[CartFile::new("A", "a.fits")]).unwrap();
/// assert_eq!(store.load().unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct StoredCart<S: CartStore> {
    cart: Cart,
    store: S,
}

impl<S: CartStore> StoredCart<S> {
    pub fn open(store: S) -> StoreResult<Self> {
        let cart = Cart::from_files(store.load()?);
        Ok(Self { cart, store })
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn contains(&self, file: &CartFile) -> bool {
        self.cart.contains(file)
    }

    /// Apply `change` to a copy of the cart and keep it once the store has
    /// saved it. On a failed save the cart is left as it was.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut Cart) -> T,
        changed: impl FnOnce(&T) -> bool,
    ) -> StoreResult<T> {
        let mut next = self.cart.clone();
        let outcome = change(&mut next);
        if changed(&outcome) {
            self.store.save(next.files())?;
            self.cart = next;
        }
        Ok(outcome)
    }

    pub fn add(&mut self, files: &[CartFile]) -> StoreResult<usize> {
        self.commit(|cart| cart.add(files), |added| *added > 0)
    }

    pub fn remove(&mut self, files: &[CartFile]) -> StoreResult<usize> {
        self.commit(|cart| cart.remove(files), |removed| *removed > 0)
    }

    pub fn clear(&mut self) -> StoreResult<()> {
        self.commit(Cart::clear, |_| true)
    }

    pub fn into_inner(self) -> (Cart, S) {
        (self.cart, self.store)
    }
}
