use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::FunctionDescriptor;

/// Inventory wrapper for statically declared functions.
pub struct FunctionReg(pub &'static FunctionDescriptor);
inventory::collect!(FunctionReg);

/// Errors raised while assembling a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// Two descriptors share a name (ignoring case) and an arity.
	#[error("{label}: duplicate function '{name}' with {arity} arguments")]
	Duplicate {
		label: &'static str,
		name: &'static str,
		arity: usize,
	},
}

/// Append-only builder for a [`FunctionRegistry`].
pub struct FunctionRegistryBuilder {
	label: &'static str,
	defs: Vec<&'static FunctionDescriptor>,
}

impl FunctionRegistryBuilder {
	/// Creates a new builder with the given label for error messages.
	pub fn new(label: &'static str) -> Self {
		Self { label, defs: Vec::new() }
	}

	/// Returns the number of descriptors pushed so far.
	pub fn len(&self) -> usize {
		self.defs.len()
	}

	/// Returns true if nothing has been pushed yet.
	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}

	/// Appends a descriptor.
	pub fn push(mut self, def: &'static FunctionDescriptor) -> Self {
		self.defs.push(def);
		self
	}

	/// Appends every descriptor declared with [`function!`](crate::function), ordered by name then arity.
	pub fn extend_inventory(mut self) -> Self {
		let mut defs: Vec<_> = inventory::iter::<FunctionReg>.into_iter().map(|reg| reg.0).collect();
		defs.sort_by(|a, b| a.name.cmp(b.name).then(a.arity().cmp(&b.arity())));
		self.defs.extend(defs);
		self
	}

	/// Indexes the pushed descriptors, rejecting duplicate `(name, arity)` keys.
	pub fn build(self) -> Result<FunctionRegistry, RegistryError> {
		let mut index = FxHashMap::default();
		for (pos, def) in self.defs.iter().enumerate() {
			let key = (def.name.to_ascii_lowercase(), def.arity());
			if index.insert(key, pos).is_some() {
				return Err(RegistryError::Duplicate {
					label: self.label,
					name: def.name,
					arity: def.arity(),
				});
			}
		}
		tracing::debug!(registry = self.label, functions = self.defs.len(), "function registry built");
		Ok(FunctionRegistry {
			label: self.label,
			defs: self.defs,
			index,
		})
	}
}

/// Read-only lookup of functions by `(name, arity)`.
#[derive(Debug)]
pub struct FunctionRegistry {
	label: &'static str,
	defs: Vec<&'static FunctionDescriptor>,
	index: FxHashMap<(String, usize), usize>,
}

impl FunctionRegistry {
	/// A registry with no functions.
	pub fn empty() -> Self {
		Self {
			label: "empty",
			defs: Vec::new(),
			index: FxHashMap::default(),
		}
	}

	/// The registry of all builtin extension functions.
	pub fn builtins() -> Result<Self, RegistryError> {
		FunctionRegistryBuilder::new("builtins").extend_inventory().build()
	}

	/// Looks up the function named `name` (ignoring case) taking `arg_count` arguments.
	pub fn find(&self, name: &str, arg_count: usize) -> Option<&'static FunctionDescriptor> {
		self.index
			.get(&(name.to_ascii_lowercase(), arg_count))
			.map(|&pos| self.defs[pos])
	}

	/// Returns the lowest-arity function named `name`, if any.
	pub fn find_any(&self, name: &str) -> Option<&'static FunctionDescriptor> {
		self.defs
			.iter()
			.copied()
			.filter(|def| def.name.eq_ignore_ascii_case(name))
			.min_by_key(|def| def.arity())
	}

	/// Iterates descriptors in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &'static FunctionDescriptor> + '_ {
		self.defs.iter().copied()
	}

	pub fn label(&self) -> &'static str {
		self.label
	}

	pub fn len(&self) -> usize {
		self.defs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}
}
