//! Method-usage resolver
//!
//! Links each recorded call site to the method it targets by the key
//! `objectType.methodName` and appends a backlink to that method's `usedIn`.
//! Overloads share a key, so they collapse onto one `MethodDetail`. Usages
//! whose receiver type is not a project class are dropped.

use crate::project::{FlatProject, MethodUsageRef};
use std::collections::HashMap;

/// Position of a method inside a `FlatProject`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodLocation {
    pub file_index: usize,
    pub class_index: usize,
    pub method_index: usize,
}

fn method_key(class_name: &str, method_name: &str) -> String {
    format!("{}.{}", class_name, method_name)
}

/// `Class.method` table, last write wins
#[derive(Debug, Default)]
pub struct MethodIndex {
    by_key: HashMap<String, MethodLocation>,
}

impl MethodIndex {
    pub fn build(project: &FlatProject) -> Self {
        let mut by_key = HashMap::new();
        for (file_index, file) in project.files.iter().enumerate() {
            for (class_index, class) in file.details.classes.iter().enumerate() {
                for (method_index, method) in class.methods.iter().enumerate() {
                    by_key.insert(
                        method_key(&class.name, &method.name),
                        MethodLocation {
                            file_index,
                            class_index,
                            method_index,
                        },
                    );
                }
            }
        }
        Self { by_key }
    }

    pub fn get(&self, class_name: &str, method_name: &str) -> Option<MethodLocation> {
        self.by_key.get(&method_key(class_name, method_name)).copied()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

/// Append every resolvable usage to its target's `usedIn`
///
/// Returns the number of links appended. Appends are not deduplicated, so
/// running this twice doubles every `usedIn` list.
pub fn resolve_method_usages(project: &mut FlatProject) -> usize {
    let index = MethodIndex::build(project);

    let mut links: Vec<(MethodLocation, MethodUsageRef)> = Vec::new();
    let mut dropped = 0;
    for class in project.classes() {
        for usage in &class.methods_used {
            if usage.class_used_in.is_empty() || usage.method_name.is_empty() {
                continue;
            }
            match index.get(&usage.object_type, &usage.method_name) {
                Some(location) => links.push((location, usage.clone())),
                None => dropped += 1,
            }
        }
    }

    let linked = links.len();
    for (location, usage) in links {
        let method = &mut project.files[location.file_index].details.classes[location.class_index]
            .methods[location.method_index];
        method.used_in.get_or_insert_with(Vec::new).push(usage);
    }

    tracing::debug!(
        "Linked {} method usages ({} unresolved) against {} declared methods",
        linked,
        dropped,
        index.len()
    );
    linked
}
