//! Name derivation for schema files and type references.
//!
//! All functions here are pure string transforms over descriptor data and
//! return slices of their input.

/// Extracts the Go package identifier from a `go_package` option value.
///
/// `"example.com/pkg;short"` yields `short`, `"example.com/pkg"` yields
/// `pkg`, and a value with neither separator is returned unchanged.
#[must_use]
pub fn package_identifier(go_package: &str) -> &str {
    if let Some((_, ident)) = go_package.split_once(';') {
        return ident;
    }

    match go_package.rsplit_once('/') {
        Some((_, ident)) => ident,
        None => go_package,
    }
}

/// Removes the filename extension from a schema file name.
///
/// The extension starts at the last `.` of the final path element, so dots
/// in directory names are left alone.
#[must_use]
pub fn strip_extension(name: &str) -> &str {
    let file_start = name.rfind('/').map_or(0, |idx| idx + 1);
    match name[file_start..].rfind('.') {
        Some(dot) => &name[..file_start + dot],
        None => name,
    }
}

/// Derives the short identifier of a schema file: its name without extension
/// and without `prefix` when the stem starts with it.
#[must_use]
pub fn short_name<'a>(name: &'a str, prefix: &str) -> &'a str {
    let stem = strip_extension(name);
    stem.strip_prefix(prefix).unwrap_or(stem)
}

/// Rewrites a fully qualified type reference relative to `namespace`.
///
/// The leading `.` of a fully qualified reference is dropped. References
/// inside `namespace` lose the namespace and its separator; references to
/// other namespaces keep their qualifier.
#[must_use]
pub fn qualify_type<'a>(reference: &'a str, namespace: &str) -> &'a str {
    let reference = reference.strip_prefix('.').unwrap_or(reference);
    if namespace.is_empty() {
        return reference;
    }

    reference
        .strip_prefix(namespace)
        .and_then(|rest| rest.strip_prefix('.'))
        .unwrap_or(reference)
}
