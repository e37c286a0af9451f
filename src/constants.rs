// src/constants.rs

/// Extension (without the dot) of the files the walker hands to the analyzers.
pub const FEATURE_EXTENSION: &str = "feature";

/// Character rendered in the Export column when `@exportScenarios` was found.
pub const EXPORT_MARKER: &str = "V";

/// Title of the feature-list report.
pub const FEATURE_REPORT_TITLE: &str = "Features List";

/// Title of the indentation report.
pub const INDENTATION_REPORT_TITLE: &str = "Indentation Check";

/// Placeholder shown in the report's search box.
pub const SEARCH_PLACEHOLDER: &str = "Search for features..";

/// Diagnostic appended when a file tagged `@tree` mixes tabs and spaces.
pub const TAG_TREE_MIXED_MESSAGE: &str = "tag tree detected, in file lines detected spaces and tabs";

/// Diagnostic appended when tabs are the default but spaces were found.
pub const SPACES_WITH_TAB_DEFAULT_MESSAGE: &str =
    "inconsistent spaces detected in file lines, tabs expected";

/// Diagnostic appended when spaces are the default but tabs were found.
pub const TABS_WITH_SPACE_DEFAULT_MESSAGE: &str =
    "inconsistent tabs detected in file lines, spaces expected";
