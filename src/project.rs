//! Project model
//!
//! The resolved analytical product. Base fields are written once during
//! extraction; the resolvers only set `parentClasses` and append to `usedIn`.
//! Field names serialize in camelCase for the presentation layer.

use serde::{Deserialize, Serialize};

/// A call site found inside a class
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodUsageRef {
    /// Class containing the call site
    pub class_used_in: String,
    pub method_name: String,
    /// Receiver type supplied at extraction time
    pub object_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDetail {
    pub name: String,
    /// Set only by the usage resolver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_in: Option<Vec<MethodUsageRef>>,
}

impl MethodDetail {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            used_in: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDetail {
    pub name: String,
    /// Declared parent names, possibly external
    pub inheritance: Vec<String>,
    /// Set only by the inheritance resolver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_classes: Option<Vec<String>>,
    pub methods: Vec<MethodDetail>,
    pub methods_used: Vec<MethodUsageRef>,
}

impl ClassDetail {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDetails {
    pub classes: Vec<ClassDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub path: String,
    pub details: FileDetails,
}

impl ProjectFile {
    pub fn new(path: impl Into<String>, classes: Vec<ClassDetail>) -> Self {
        Self {
            path: path.into(),
            details: FileDetails { classes },
        }
    }

    pub fn classes(&self) -> &[ClassDetail] {
        &self.details.classes
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatProject {
    pub files: Vec<ProjectFile>,
}

impl FlatProject {
    /// Every class in file order, then declaration order
    pub fn classes(&self) -> impl Iterator<Item = &ClassDetail> {
        self.files.iter().flat_map(|file| file.details.classes.iter())
    }

    pub fn class_count(&self) -> usize {
        self.files.iter().map(|file| file.details.classes.len()).sum()
    }

    /// First class with the given name, in file order
    pub fn find_class(&self, name: &str) -> Option<&ClassDetail> {
        self.classes().find(|class| class.name == name)
    }
}

/// Merge per-file results into one project
///
/// Keeps the order it is given. No deduplication, no cross-file lookups.
pub fn aggregate<I>(files: I) -> FlatProject
where
    I: IntoIterator<Item = ProjectFile>,
{
    FlatProject {
        files: files.into_iter().collect(),
    }
}
