//! Inheritance resolver
//!
//! Maps each declared parent name to the project class of that name. Names
//! with no project class (framework types, typos) pass through unchanged.
//! Single hop: the parents of a parent are never followed.

use crate::project::FlatProject;
use std::collections::HashMap;

/// Position of a class inside a `FlatProject`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassLocation {
    pub file_index: usize,
    pub class_index: usize,
}

/// Class name table
///
/// Names are treated as unique project-wide. On duplicates the class seen
/// last in file order wins.
#[derive(Debug, Default)]
pub struct ClassIndex {
    by_name: HashMap<String, ClassLocation>,
}

impl ClassIndex {
    pub fn build(project: &FlatProject) -> Self {
        let mut by_name = HashMap::new();
        for (file_index, file) in project.files.iter().enumerate() {
            for (class_index, class) in file.details.classes.iter().enumerate() {
                by_name.insert(
                    class.name.clone(),
                    ClassLocation {
                        file_index,
                        class_index,
                    },
                );
            }
        }
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<ClassLocation> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Set `parentClasses` on every class
///
/// Returns how many parent names resolved to a project class. Depends only
/// on `inheritance` and the name table, so running it again gives the same
/// result.
pub fn resolve_inheritance(project: &mut FlatProject) -> usize {
    let index = ClassIndex::build(project);

    let mut resolved_count = 0;
    let mut resolved_parents: Vec<Vec<Vec<String>>> = Vec::with_capacity(project.files.len());
    for file in &project.files {
        let mut per_class = Vec::with_capacity(file.details.classes.len());
        for class in &file.details.classes {
            let parents: Vec<String> = class
                .inheritance
                .iter()
                .map(|parent| match index.get(parent) {
                    Some(location) => {
                        resolved_count += 1;
                        let target = &project.files[location.file_index].details.classes
                            [location.class_index];
                        target.name.clone()
                    }
                    None => parent.clone(),
                })
                .collect();
            per_class.push(parents);
        }
        resolved_parents.push(per_class);
    }

    for (file, per_class) in project.files.iter_mut().zip(resolved_parents) {
        for (class, parents) in file.details.classes.iter_mut().zip(per_class) {
            class.parent_classes = Some(parents);
        }
    }

    tracing::debug!(
        "Resolved {} parent references against {} project classes",
        resolved_count,
        index.len()
    );
    resolved_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{aggregate, ClassDetail, ProjectFile};

    fn class(name: &str, inheritance: &[&str]) -> ClassDetail {
        let mut class = ClassDetail::new(name);
        class.inheritance = inheritance.iter().map(|s| s.to_string()).collect();
        class
    }

    fn parents_of<'a>(project: &'a FlatProject, name: &str) -> &'a [String] {
        project
            .find_class(name)
            .and_then(|c| c.parent_classes.as_deref())
            .unwrap_or_default()
    }

    #[test]
    fn test_declared_parent_resolves_to_project_class() {
        let mut project = aggregate(vec![
            ProjectFile::new("base.ts", vec![class("Base", &[])]),
            ProjectFile::new("derived.ts", vec![class("Derived", &["Base"])]),
        ]);

        let resolved = resolve_inheritance(&mut project);

        assert_eq!(resolved, 1);
        assert_eq!(parents_of(&project, "Derived"), ["Base"]);
    }

    #[test]
    fn test_unknown_parent_passes_through() {
        let mut project = aggregate(vec![ProjectFile::new(
            "derived.ts",
            vec![class("Derived", &["Unknown"])],
        )]);

        let resolved = resolve_inheritance(&mut project);

        assert_eq!(resolved, 0);
        assert_eq!(parents_of(&project, "Derived"), ["Unknown"]);
    }

    #[test]
    fn test_empty_inheritance_gives_empty_parents() {
        let mut project = aggregate(vec![ProjectFile::new("a.ts", vec![class("A", &[])])]);
        resolve_inheritance(&mut project);
        assert_eq!(project.files[0].details.classes[0].parent_classes, Some(vec![]));
    }

    #[test]
    fn test_duplicate_names_last_write_wins() {
        let project = aggregate(vec![
            ProjectFile::new("first.ts", vec![class("Shared", &[])]),
            ProjectFile::new("second.ts", vec![class("Other", &[]), class("Shared", &[])]),
            ProjectFile::new("user.ts", vec![class("User", &["Shared"])]),
        ]);

        let index = ClassIndex::build(&project);

        assert_eq!(index.len(), 3);
        assert_eq!(
            index.get("Shared"),
            Some(ClassLocation {
                file_index: 1,
                class_index: 1
            })
        );

        let mut project = project;
        resolve_inheritance(&mut project);
        assert_eq!(parents_of(&project, "User"), ["Shared"]);
    }

    #[test]
    fn test_resolution_is_single_hop() {
        let mut project = aggregate(vec![ProjectFile::new(
            "chain.ts",
            vec![class("A", &[]), class("B", &["A"]), class("C", &["B"])],
        )]);

        resolve_inheritance(&mut project);

        assert_eq!(parents_of(&project, "C"), ["B"]);
        assert_eq!(parents_of(&project, "B"), ["A"]);
        assert!(parents_of(&project, "A").is_empty());
    }

    #[test]
    fn test_self_inheritance_resolves_to_itself() {
        let mut project = aggregate(vec![ProjectFile::new("loop.ts", vec![class("Node", &["Node"])])]);
        assert_eq!(resolve_inheritance(&mut project), 1);
        assert_eq!(parents_of(&project, "Node"), ["Node"]);
    }

    #[test]
    fn test_length_and_order_preserved() {
        let mut project = aggregate(vec![
            ProjectFile::new("a.cs", vec![class("Base", &[]), class("IThing", &[])]),
            ProjectFile::new(
                "b.cs",
                vec![class("Impl", &["IDisposable", "Base", "IThing", "Base"])],
            ),
        ]);

        let resolved = resolve_inheritance(&mut project);

        assert_eq!(resolved, 3);
        for class in project.classes() {
            let parents = class.parent_classes.as_ref().unwrap();
            assert_eq!(parents.len(), class.inheritance.len());
        }
        assert_eq!(parents_of(&project, "Impl"), ["IDisposable", "Base", "IThing", "Base"]);
    }

    #[test]
    fn test_idempotent() {
        let mut project = aggregate(vec![
            ProjectFile::new("a.ts", vec![class("Base", &[])]),
            ProjectFile::new("b.ts", vec![class("Derived", &["Base", "External"])]),
        ]);

        resolve_inheritance(&mut project);
        let first = project.clone();
        resolve_inheritance(&mut project);

        assert_eq!(project, first);
    }
}
