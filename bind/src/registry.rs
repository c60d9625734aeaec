use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::bindings::{Binding, Solved};
use crate::catalog::Catalog;
use crate::errors::ConfigureError;
use crate::reflect::TypeInfo;

/////////////////////////////////////////////////////////////////////////////////////////

/// A type-and-scope-indexed table of bindings, optionally chained to a parent
/// registry. Reads and writes are guarded by one lock per node; the parent
/// chain is walked one node at a time, releasing each lock before ascending.
pub(crate) struct Registry {
    bindings: RwLock<HashMap<(TypeInfo, String), Arc<dyn Binding>>>,
    parent: Option<Arc<Registry>>,
}

impl Registry {
    pub(crate) fn new(parent: Option<Arc<Registry>>) -> Arc<Self> {
        Arc::new(Self {
            bindings: RwLock::new(HashMap::new()),
            parent,
        })
    }

    /// Inserts every binding, failing on the first duplicate `(type, scope)`
    /// pair. Bindings inserted earlier in the same call are not rolled back
    /// on failure. After insertion, eagerly solves every `is_eager()`
    /// binding and replaces its slot with the produced, now-cached value.
    pub(crate) fn configure(
        self: &Arc<Self>,
        bindings: Vec<Arc<dyn Binding>>,
    ) -> Result<(), ConfigureError> {
        let mut eager_keys = Vec::new();

        {
            let mut map = self.bindings.write().unwrap();
            for binding in bindings {
                let key = (binding.source_type(), binding.scope().to_owned());
                if map.contains_key(&key) {
                    return Err(ConfigureError::Duplicate {
                        source_type: key.0,
                        scope: key.1,
                    });
                }
                if binding.is_eager() {
                    eager_keys.push(key.clone());
                }
                map.insert(key, binding);
            }
        }

        let catalog = Catalog::from_registry(self.clone());
        for key in eager_keys {
            let binding = self
                .bindings
                .read()
                .unwrap()
                .get(&key)
                .expect("just inserted")
                .clone();

            let value = binding
                .solve(&catalog)
                .map_err(|err| ConfigureError::EagerInit { source: err })?;

            let solved: Arc<dyn Binding> = Arc::new(Solved::new(key.0, key.1.clone(), value));

            self.bindings.write().unwrap().insert(key, solved);
        }

        Ok(())
    }

    /// Looks up a binding by exact `(type, scope)`, innermost registry first.
    pub(crate) fn find(&self, t: TypeInfo, scope: &str) -> Option<Arc<dyn Binding>> {
        {
            let map = self.bindings.read().unwrap();
            if let Some(binding) = map.get(&(t, scope.to_owned())) {
                return Some(binding.clone());
            }
        }

        self.parent.as_ref().and_then(|parent| parent.find(t, scope))
    }
}
