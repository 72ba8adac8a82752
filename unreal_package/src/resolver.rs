//! Cross-reference resolver.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use unreal_package_base::{NameIndex, PackageIndex};

use crate::tables::{ExportEntry, ImportEntry};

/// A constructor registered for a class name in the external class registry. The registry
/// itself only needs to know a class was registered; concrete field layouts are out of scope
/// (Non-goal (b)).
pub type ClassConstructor = fn() -> ();

/// Process-wide, append-only class-name -> constructor bindings. Treated as immutable after
/// the first package load.
#[derive(Default)]
pub struct ClassRegistry {
    constructors: HashMap<String, ClassConstructor>,
}

impl ClassRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        ClassRegistry::default()
    }

    /// Register a constructor for `class_name`. Later registrations overwrite earlier ones.
    pub fn register(&mut self, class_name: impl Into<String>, constructor: ClassConstructor) {
        self.constructors.insert(class_name.into(), constructor);
    }

    /// Look up the constructor registered for `class_name`, if any.
    pub fn lookup(&self, class_name: &str) -> Option<ClassConstructor> {
        self.constructors.get(class_name).copied()
    }
}

/// A lazily-constructed placeholder for an imported or exported object.
#[derive(Debug, Clone)]
pub struct PlaceholderObject {
    /// Object name.
    pub name: NameIndex,
    /// The package index this placeholder was constructed for.
    pub package_index: PackageIndex,
    /// Outer object, resolved lazily; `None` for a top-level object.
    pub outer: Option<ObjectHandle>,
    /// Resolved class name. `None` for imports, whose class is never resolved to an object
    /// (class = null); `Some` for exports, defaulting to `"UnknownObject"` on a registry miss.
    pub class_name: Option<String>,
    /// `true` once an external object deserializer has populated this object's state.
    pub loaded: bool,
}

/// A shared, mutable handle to a [`PlaceholderObject`].
///
/// `Rc<RefCell<_>>` rather than `Arc<Mutex<_>>` since the core is single-threaded cooperative.
pub type ObjectHandle = Rc<RefCell<PlaceholderObject>>;

const UNKNOWN_OBJECT: &str = "UnknownObject";

/// Memoized placeholder-object graph over a package's Import/Export tables.
///
/// Both tables are backed by a `Vec<Option<ObjectHandle>>` slab indexed by table position, so
/// memoization is O(1) without a hash map. Owns its copy of the tables rather than borrowing
/// them, so a [`Resolver`] can live alongside the package it was built from.
pub struct Resolver {
    imports: Vec<ImportEntry>,
    exports: Vec<ExportEntry>,
    names: Vec<String>,
    import_slab: Vec<Option<ObjectHandle>>,
    export_slab: Vec<Option<ObjectHandle>>,
}

impl Resolver {
    /// Create a resolver over a package's tables. `names` maps a [`NameIndex::index`] to its
    /// interned string.
    pub fn new(imports: Vec<ImportEntry>, exports: Vec<ExportEntry>, names: Vec<String>) -> Self {
        let import_slab = vec![None; imports.len()];
        let export_slab = vec![None; exports.len()];
        Resolver {
            imports,
            exports,
            names,
            import_slab,
            export_slab,
        }
    }

    fn name_string(&self, name: NameIndex) -> String {
        let base = self
            .names
            .get(name.index as usize)
            .cloned()
            .unwrap_or_default();
        name.display(&base)
    }

    /// Resolve `index` to an object handle, constructing (and memoizing) it on first access.
    ///
    /// `i=0` yields `None`; `i<0`/`i>0` resolve against Imports/Exports respectively, with
    /// outer-chains resolved recursively. Well-formed packages terminate at a top-level entry
    /// whose outer-index is `0`; this function never recurses past the table length, so it
    /// cannot loop forever even on a malformed cyclic file.
    pub fn index_to_object(&mut self, index: PackageIndex) -> Option<ObjectHandle> {
        self.index_to_object_bounded(index, self.imports.len() + self.exports.len() + 1)
    }

    fn index_to_object_bounded(&mut self, index: PackageIndex, budget: usize) -> Option<ObjectHandle> {
        if index.is_none() || budget == 0 {
            return None;
        }

        if let Some(import_index) = index.import_index() {
            return self.resolve_import(import_index, budget);
        }

        if let Some(export_index) = index.export_index() {
            return self.resolve_export(export_index, budget);
        }

        None
    }

    fn resolve_import(&mut self, import_index: usize, budget: usize) -> Option<ObjectHandle> {
        if let Some(Some(handle)) = self.import_slab.get(import_index) {
            return Some(handle.clone());
        }

        let entry = self.imports.get(import_index)?.clone();
        let outer = self.index_to_object_bounded(entry.outer_index, budget - 1);

        let handle = Rc::new(RefCell::new(PlaceholderObject {
            name: entry.object_name,
            package_index: PackageIndex::from_import(import_index as i32),
            outer,
            class_name: None,
            loaded: false,
        }));

        self.import_slab[import_index] = Some(handle.clone());
        Some(handle)
    }

    fn resolve_export(&mut self, export_index: usize, budget: usize) -> Option<ObjectHandle> {
        if let Some(Some(handle)) = self.export_slab.get(export_index) {
            return Some(handle.clone());
        }

        let entry = self.exports.get(export_index)?.clone();
        let outer = self.index_to_object_bounded(entry.outer_index, budget - 1);
        let class_name = self.resolve_export_class_name(export_index, budget);

        let handle = Rc::new(RefCell::new(PlaceholderObject {
            name: entry.object_name,
            package_index: PackageIndex::from_export(export_index as i32),
            outer,
            class_name: Some(class_name),
            loaded: false,
        }));

        self.export_slab[export_index] = Some(handle.clone());
        Some(handle)
    }

    /// Class resolution prefers the registered class; on miss, walk the super chain for the
    /// nearest registered class; default to `UnknownObject`. The class registry itself is
    /// external (Non-goal (b)), so this always returns the nearest resolvable *name*; binding
    /// that name to a constructor is the caller's job.
    fn resolve_export_class_name(&mut self, export_index: usize, mut budget: usize) -> String {
        let mut current = self.exports.get(export_index).cloned();

        while let Some(entry) = current {
            if !entry.class_index.is_none() {
                if let Some(class_object) = self.index_to_object_bounded(entry.class_index, budget) {
                    let name = class_object.borrow().name;
                    return self.name_string(name);
                }
            }

            if budget == 0 || entry.super_index.is_none() {
                break;
            }
            budget -= 1;
            current = entry
                .super_index
                .export_index()
                .and_then(|i| self.exports.get(i).cloned());
        }

        UNKNOWN_OBJECT.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import(outer: PackageIndex) -> ImportEntry {
        ImportEntry {
            class_package: NameIndex::new(0, 0),
            class_name: NameIndex::new(0, 0),
            outer_index: outer,
            object_name: NameIndex::new(0, 0),
        }
    }

    fn export(outer: PackageIndex, class_index: PackageIndex) -> ExportEntry {
        ExportEntry {
            class_index,
            outer_index: outer,
            object_name: NameIndex::new(0, 0),
            ..Default::default()
        }
    }

    #[test]
    fn index_zero_resolves_to_none() {
        let imports = Vec::new();
        let exports = Vec::new();
        let names = Vec::new();
        let mut resolver = Resolver::new(imports, exports, names);
        assert!(resolver.index_to_object(PackageIndex::NONE).is_none());
    }

    #[test]
    fn import_resolution_is_memoized() {
        let imports = vec![import(PackageIndex::NONE)];
        let exports = Vec::new();
        let names = vec!["Core".to_string()];
        let mut resolver = Resolver::new(imports, exports, names);
        let first = resolver.index_to_object(PackageIndex::from_import(0)).unwrap();
        let second = resolver.index_to_object(PackageIndex::from_import(0)).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn top_level_outer_chain_terminates() {
        let imports = vec![import(PackageIndex::NONE)];
        let exports = vec![export(PackageIndex::NONE, PackageIndex::from_import(0))];
        let names = vec!["Object".to_string()];
        let mut resolver = Resolver::new(imports, exports, names);
        let object = resolver.index_to_object(PackageIndex::from_export(0)).unwrap();
        assert!(object.borrow().outer.is_none());
    }

    #[test]
    fn import_placeholders_carry_no_class() {
        let imports = vec![import(PackageIndex::NONE)];
        let exports = Vec::new();
        let names = vec!["Core".to_string()];
        let mut resolver = Resolver::new(imports, exports, names);
        let object = resolver.index_to_object(PackageIndex::from_import(0)).unwrap();
        assert!(object.borrow().class_name.is_none());
    }

    #[test]
    fn export_placeholders_default_to_unknown_object() {
        let imports = Vec::new();
        let exports = vec![export(PackageIndex::NONE, PackageIndex::NONE)];
        let names = vec!["Object".to_string()];
        let mut resolver = Resolver::new(imports, exports, names);
        let object = resolver.index_to_object(PackageIndex::from_export(0)).unwrap();
        assert_eq!(object.borrow().class_name.as_deref(), Some(UNKNOWN_OBJECT));
    }
}
