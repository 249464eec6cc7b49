//! Rendering of automake declarations
//!
//! Every declaration is written in continuation-line form:
//!
//! ```text
//! libcasm_la_SOURCES =\
//!                    src/casm/a.cc\
//!                    src/casm/b.cc
//! ```
//!
//! The higher-level helpers compose declarations into library, program,
//! header and distribution blocks. None of them emit a declaration with an
//! empty value list.

use std::fmt;

/// Line-ending token that continues a value list on the next line
pub const CONTINUATION: &str = "\\";

/// Separator placed between fragments in one output file
pub const BANNER: &str =
    "\n\n# ------------------------------------------------------------------------------\n\n";

/// Assignment operator of a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Plain assignment (`=`)
    Assign,
    /// Append to an existing variable (`+=`)
    Append,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assign => f.write_str("="),
            Self::Append => f.write_str("+="),
        }
    }
}

/// Render one declaration
///
/// The first line is `<variable> <op>` followed by the continuation marker;
/// each target then gets its own line, indented to the width of the first.
/// There is no trailing newline.
///
/// Callers must not pass an empty target list.
#[must_use]
pub fn declaration<S: AsRef<str>>(variable: &str, op: Operator, targets: &[S]) -> String {
    debug_assert!(
        !targets.is_empty(),
        "declaration '{variable}' rendered without targets"
    );

    let head = format!("{variable} {op}");
    let indent = " ".repeat(head.len());
    let separator = format!("{CONTINUATION}\n");

    let body = targets
        .iter()
        .map(|target| format!("{indent}{}", target.as_ref()))
        .collect::<Vec<_>>()
        .join(&separator);

    format!("{head}{separator}{body}")
}

/// Rewrite a target name into a valid automake variable stem
///
/// Automake only accepts letters, digits, `_` and `@` in derived variable
/// names, so `casm-complete` becomes `casm_complete`.
#[must_use]
pub fn canonical_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '@' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Ordered keyword to value-list mapping for one unit (SOURCES, LDADD, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    entries: Vec<(String, Vec<String>)>,
}

impl Declarations {
    /// Create an empty set of declarations
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a keyword and its values, builder style
    #[must_use]
    pub fn with<I, S>(mut self, keyword: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(keyword, values);
        self
    }

    /// Add a keyword and its values
    pub fn push<I, S>(&mut self, keyword: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.push((
            keyword.to_string(),
            values.into_iter().map(Into::into).collect(),
        ));
    }

    /// Iterate keywords in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }
}

fn append_keywords(value: &mut String, stem: &str, decls: &Declarations) {
    for (keyword, values) in decls.iter() {
        if values.is_empty() {
            continue;
        }
        value.push('\n');
        value.push_str(&declaration(
            &format!("{stem}_{keyword}"),
            Operator::Assign,
            values,
        ));
    }
}

/// Register a libtool library under `prefix` and declare its keywords
///
/// ```text
/// lib_LTLIBRARIES +=\
///                 libcasm.la
/// libcasm_la_SOURCES =\
///                    ...
/// ```
#[must_use]
pub fn library(libname: &str, prefix: &str, decls: &Declarations) -> String {
    let mut value = declaration(
        &format!("{prefix}_LTLIBRARIES"),
        Operator::Append,
        &[format!("{libname}.la")],
    );
    append_keywords(&mut value, &format!("{}_la", canonical_name(libname)), decls);
    value
}

/// Register a program under `prefix` and declare its keywords
#[must_use]
pub fn program(name: &str, prefix: &str, decls: &Declarations) -> String {
    let mut value = declaration(&format!("{prefix}_PROGRAMS"), Operator::Append, &[name]);
    append_keywords(&mut value, &canonical_name(name), decls);
    value
}

/// Declare an install directory under `$(includedir)` and its headers
///
/// Returns `None` when there are no headers to install.
#[must_use]
pub fn headers(install_subdir: &str, headers: &[String]) -> Option<String> {
    if headers.is_empty() {
        return None;
    }

    let stem = canonical_name(install_subdir);
    Some(format!(
        "{stem}dir = $(includedir)/{install_subdir}\n{}",
        declaration(&format!("{stem}_HEADERS"), Operator::Assign, headers)
    ))
}

/// Append files that ship with the distribution but are not compiled
///
/// Returns `None` when `files` is empty.
#[must_use]
pub fn extra_dist(files: &[String]) -> Option<String> {
    (!files.is_empty()).then(|| declaration("EXTRA_DIST", Operator::Append, files))
}

/// Append executables to the `TESTS` list
///
/// Returns `None` when `names` is empty.
#[must_use]
pub fn tests(names: &[String]) -> Option<String> {
    (!names.is_empty()).then(|| declaration("TESTS", Operator::Append, names))
}
