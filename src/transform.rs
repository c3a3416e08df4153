// 🔧 Enum Rewriter - TypeScript enum → const-object codemod
//
// "A string enum is an open door; a const object with a literal-union type
//  is a closed set"
//
// Problem solved:
// - `enum X { KEY = 'value' }` compiles to a mutable runtime object
// - Rewriting to `const X = { KEY: 'value' } as const` plus a derived
//   literal-union type gives the same names with a sealed value set
// - Applied in place across a source tree, touching only files that change

use anyhow::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ============================================================================
// ENUM REWRITE
// ============================================================================

/// Result of rewriting one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// The rewritten source (identical to the input when `changed` is false)
    pub contents: String,

    /// Whether any enum block was found and rewritten
    pub changed: bool,
}

fn enum_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"enum\s+(\w+)\s+\{([^}]+)\}").unwrap())
}

/// Rewrite every `enum Name { KEY = 'value', ... }` block in a TypeScript
/// source into a `const` object with a derived literal-union type.
///
/// Tolerates trailing commas and arbitrary spacing between members. A
/// preceding `export` keyword survives untouched because the match starts
/// at the `enum` keyword. Sources with no enum blocks pass through
/// unchanged.
pub fn rewrite_enums(source: &str) -> RewriteOutcome {
    let mut changed = false;

    let contents = enum_pattern()
        .replace_all(source, |caps: &regex::Captures| {
            changed = true;

            let name = &caps[1];
            let body = &caps[2];

            let members: String = body
                .split(',')
                .map(|member| member.trim())
                .filter(|member| !member.is_empty())
                .map(|member| member.split('=').collect::<Vec<_>>())
                .map(|kv| {
                    let value = kv.get(1).unwrap_or(&"").trim();
                    format!("{}: {},", kv[0].trim(), value)
                })
                .collect::<Vec<_>>()
                .join("\n  ");

            format!(
                "const {name} = {{\n  {members}\n}} as const;\n\nexport type {name} = (typeof {name})[keyof typeof {name}];"
            )
        })
        .to_string();

    RewriteOutcome { contents, changed }
}

// ============================================================================
// TREE TRAVERSAL
// ============================================================================

/// Summary of one tree walk.
#[derive(Debug, Clone, Default)]
pub struct RewriteReport {
    /// Number of `.ts` files inspected
    pub scanned: usize,

    /// Files that contained enum blocks and were rewritten in place
    pub rewritten: Vec<PathBuf>,
}

/// Rewrite a single file in place.
///
/// Writes back only when an enum block was actually rewritten; unchanged
/// files are never touched. Returns whether the file changed.
pub fn rewrite_file(path: &Path) -> Result<bool> {
    let source = fs::read_to_string(path)?;

    let outcome = rewrite_enums(&source);
    if outcome.changed {
        fs::write(path, outcome.contents)?;
    }

    Ok(outcome.changed)
}

/// Walk a directory tree and rewrite every `.ts` file under it.
///
/// Skips any path containing `node_modules` or `__` (generated and
/// vendored trees). Other file extensions are ignored.
pub fn rewrite_tree(root: &Path) -> Result<RewriteReport> {
    let mut report = RewriteReport::default();
    visit_tree(root, &mut report)?;
    Ok(report)
}

fn visit_tree(dir: &Path, report: &mut RewriteReport) -> Result<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let lossy = path.to_string_lossy();

        if lossy.contains("node_modules") || lossy.contains("__") {
            continue;
        }

        if path.is_dir() {
            visit_tree(&path, report)?;
        } else if path.extension().map_or(false, |ext| ext == "ts") {
            report.scanned += 1;
            if rewrite_file(&path)? {
                report.rewritten.push(path);
            }
        }
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_enum_rewrite() {
        let source = r#"export enum BasicEnum { FIRST = 'first', SECOND = 'second' }"#;
        let expected = r#"export const BasicEnum = {
  FIRST: 'first',
  SECOND: 'second',
} as const;

export type BasicEnum = (typeof BasicEnum)[keyof typeof BasicEnum];"#;

        let outcome = rewrite_enums(source);
        assert!(outcome.changed);
        assert_eq!(outcome.contents.trim(), expected);
    }

    #[test]
    fn test_trailing_comma_tolerated() {
        let source = r#"export enum TrailingCommaEnum { FIRST = 'first', SECOND = 'second', }"#;
        let expected = r#"export const TrailingCommaEnum = {
  FIRST: 'first',
  SECOND: 'second',
} as const;

export type TrailingCommaEnum = (typeof TrailingCommaEnum)[keyof typeof TrailingCommaEnum];"#;

        let outcome = rewrite_enums(source);
        assert!(outcome.changed);
        assert_eq!(outcome.contents.trim(), expected);
    }

    #[test]
    fn test_extra_spacing_tolerated() {
        let source = r#"export enum SpacingEnum {
    FIRST = 'first',
    SECOND = 'second'
}"#;
        let expected = r#"export const SpacingEnum = {
  FIRST: 'first',
  SECOND: 'second',
} as const;

export type SpacingEnum = (typeof SpacingEnum)[keyof typeof SpacingEnum];"#;

        let outcome = rewrite_enums(source);
        assert!(outcome.changed);
        assert_eq!(outcome.contents.trim(), expected);
    }

    #[test]
    fn test_no_enums_pass_through() {
        let source = r#"export const someVariable = 123;"#;

        let outcome = rewrite_enums(source);
        assert!(!outcome.changed, "plain sources must not be flagged");
        assert_eq!(outcome.contents.trim(), source);
    }

    #[test]
    fn test_tax_type_shape_rewrite() {
        // The label-set shape this crate's TaxType mirrors
        let source = r#"export enum MultitaxTypes { GST = "gst", VAT = "vatNumber" }"#;

        let outcome = rewrite_enums(source);
        assert!(outcome.changed);
        assert!(outcome.contents.contains("GST: \"gst\","));
        assert!(outcome.contents.contains("VAT: \"vatNumber\","));
        assert!(outcome.contents.contains("as const;"));
        assert!(outcome
            .contents
            .contains("export type MultitaxTypes = (typeof MultitaxTypes)[keyof typeof MultitaxTypes];"));
    }

    #[test]
    fn test_tree_walk_rewrites_in_place_and_skips_vendored() {
        let root = std::env::temp_dir().join(format!(
            "enum-rewriter-test-{}",
            std::process::id()
        ));
        let nested = root.join("src");
        let vendored = root.join("node_modules");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir_all(&vendored).unwrap();

        let target = nested.join("types.ts");
        let plain = nested.join("plain.ts");
        let skipped = vendored.join("dep.ts");
        let other = nested.join("notes.md");
        fs::write(&target, "export enum E { A = 'a' }").unwrap();
        fs::write(&plain, "export const x = 1;").unwrap();
        fs::write(&skipped, "export enum E { A = 'a' }").unwrap();
        fs::write(&other, "enum E { A = 'a' }").unwrap();

        let report = rewrite_tree(&root).unwrap();

        // Only the two .ts files outside node_modules are scanned
        assert_eq!(report.scanned, 2);
        assert_eq!(report.rewritten, vec![target.clone()]);

        let rewritten = fs::read_to_string(&target).unwrap();
        assert!(rewritten.contains("export const E = {"));
        assert!(rewritten.contains("A: 'a',"));

        // Untouched: no enum in one, vendored path in the other
        assert_eq!(fs::read_to_string(&plain).unwrap(), "export const x = 1;");
        assert_eq!(
            fs::read_to_string(&skipped).unwrap(),
            "export enum E { A = 'a' }"
        );

        fs::remove_dir_all(&root).unwrap();
    }
}
