//! The type registry.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::{TypeMapping, builtin, error::TypeError};

/// Returned by [`TypeRegistry::describe`] for input that does not resolve.
pub const UNKNOWN_TYPE_DESCRIPTION: &str = "Unknown assignment type";

/// Read-only table of portable types and aliases.
///
/// Lookups are case- and whitespace-insensitive. Canonical keys are always
/// checked before aliases, so an alias that happens to equal a canonical key is
/// shadowed. Every query is a pure in-memory lookup, so a single instance can
/// be shared across threads by reference.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    mappings: Vec<TypeMapping>,
    index: HashMap<String, usize>,
    /// `(alias, target)` in registration order, both normalized.
    aliases: Vec<(String, String)>,
    alias_index: HashMap<String, usize>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TypeRegistry {
    /// The registry populated from the built-in type and alias tables.
    ///
    /// # Panics
    ///
    /// Panics if the built-in tables are inconsistent (duplicate key or
    /// dangling alias). The unit tests pin the tables, so this cannot happen
    /// in a released build.
    #[must_use]
    pub fn builtin() -> Self {
        let mappings = builtin::TYPES
            .iter()
            .map(|(portable, lms, subtype, description)| {
                TypeMapping::new(portable, lms, subtype, description)
            })
            .collect();
        let aliases = builtin::ALIASES
            .iter()
            .map(|(alias, target)| ((*alias).to_string(), (*target).to_string()))
            .collect();

        Self::from_parts(mappings, aliases).expect("built-in type table should be consistent")
    }

    /// Build a registry from explicit mappings and `(alias, target)` pairs.
    ///
    /// Keys are normalized (trimmed, lowercased). The first occurrence of a
    /// repeated alias wins.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::DuplicateType`] if two mappings share a key and
    /// [`TypeError::DanglingAlias`] if an alias target is not a mapping key.
    pub fn from_parts(
        mappings: Vec<TypeMapping>,
        aliases: Vec<(String, String)>,
    ) -> Result<Self, TypeError> {
        let mut registry = Self {
            mappings: Vec::with_capacity(mappings.len()),
            index: HashMap::with_capacity(mappings.len()),
            aliases: Vec::with_capacity(aliases.len()),
            alias_index: HashMap::with_capacity(aliases.len()),
        };

        for mut mapping in mappings {
            let key = normalize(&mapping.portable_type);
            if registry.index.contains_key(&key) {
                return Err(TypeError::DuplicateType(key));
            }
            mapping.portable_type.clone_from(&key);
            registry.index.insert(key, registry.mappings.len());
            registry.mappings.push(mapping);
        }

        for (alias, target) in aliases {
            let alias = normalize(&alias);
            let target = normalize(&target);
            if !registry.index.contains_key(&target) {
                return Err(TypeError::DanglingAlias { alias, target });
            }
            if registry.index.contains_key(&alias) {
                tracing::debug!(%alias, %target, "alias shadowed by canonical type");
            }
            if registry.alias_index.contains_key(&alias) {
                continue;
            }
            registry
                .alias_index
                .insert(alias.clone(), registry.aliases.len());
            registry.aliases.push((alias, target));
        }

        Ok(registry)
    }

    /// Resolve a portable type name or alias to its mapping.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::NotFound`], carrying [`Self::suggest`] results, when
    /// the input matches neither a canonical key nor an alias.
    pub fn resolve(&self, input: &str) -> Result<&TypeMapping, TypeError> {
        self.get(input).ok_or_else(|| TypeError::NotFound {
            input: input.to_string(),
            suggestions: self.suggest(input),
        })
    }

    /// Like [`Self::resolve`], without computing suggestions on a miss.
    #[must_use]
    pub fn get(&self, input: &str) -> Option<&TypeMapping> {
        let key = normalize(input);
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                let &alias_idx = self.alias_index.get(&key)?;
                *self.index.get(&self.aliases[alias_idx].1)?
            }
        };
        Some(&self.mappings[idx])
    }

    /// Whether `input` resolves.
    #[must_use]
    pub fn is_valid(&self, input: &str) -> bool {
        self.get(input).is_some()
    }

    /// All canonical portable keys.
    #[must_use]
    pub fn portable_types(&self) -> BTreeSet<&str> {
        self.mappings
            .iter()
            .map(|m| m.portable_type.as_str())
            .collect()
    }

    /// All distinct LMS type names targeted by some mapping.
    #[must_use]
    pub fn lms_types(&self) -> BTreeSet<&str> {
        self.mappings.iter().map(|m| m.lms_type.as_str()).collect()
    }

    /// Human-readable description, or [`UNKNOWN_TYPE_DESCRIPTION`].
    #[must_use]
    pub fn describe(&self, input: &str) -> &str {
        self.get(input)
            .map_or(UNKNOWN_TYPE_DESCRIPTION, |m| m.description.as_str())
    }

    /// "Did you mean" candidates for `input`.
    ///
    /// A candidate matches when it contains the input or the input contains it,
    /// compared case-insensitively. Canonical keys are scanned first, then
    /// aliases (reported as their target). Duplicates are dropped and discovery
    /// order is kept. Blank input matches nothing.
    #[must_use]
    pub fn suggest(&self, input: &str) -> Vec<String> {
        let needle = normalize(input);
        if needle.is_empty() {
            return Vec::new();
        }

        let matches = |candidate: &str| candidate.contains(&needle) || needle.contains(candidate);

        let canonical = self
            .mappings
            .iter()
            .map(|m| m.portable_type.as_str())
            .filter(|key| matches(*key));
        let via_alias = self
            .aliases
            .iter()
            .filter(|(alias, _)| matches(alias.as_str()))
            .map(|(_, target)| target.as_str());

        let mut seen = HashSet::new();
        canonical
            .chain(via_alias)
            .filter(|key| seen.insert(*key))
            .map(str::to_string)
            .collect()
    }

    /// `(lms_type, lms_subtype)` for `input`; the subtype is empty for
    /// ungrouped types.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve`].
    pub fn to_lms_format(&self, input: &str) -> Result<(&str, &str), TypeError> {
        let mapping = self.resolve(input)?;
        Ok((mapping.lms_type.as_str(), mapping.lms_subtype.as_str()))
    }

    /// Mappings in table order.
    pub fn mappings(&self) -> impl Iterator<Item = &TypeMapping> {
        self.mappings.iter()
    }

    /// Aliases that resolve to `portable` (not counting shadowed ones).
    #[must_use]
    pub fn aliases_for(&self, portable: &str) -> Vec<&str> {
        let key = normalize(portable);
        self.aliases
            .iter()
            .filter(|(alias, target)| *target == key && !self.index.contains_key(alias))
            .map(|(alias, _)| alias.as_str())
            .collect()
    }

    /// `"<description> → <lms label>"`, as shown by `atk types`.
    #[must_use]
    pub fn describe_with_target(mapping: &TypeMapping) -> String {
        format!("{} → {}", mapping.description, mapping.lms_label())
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
