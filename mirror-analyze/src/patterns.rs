//! Compiled patterns used by the extractors.
//!
//! Regions are delimited by the first closing brace after the opening one.
//! Nested braces cut a region short; that is an accepted limitation.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// `export [default] [async] function|const|let|class Name`
pub(crate) static EXPORTED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"export\s+(?:default\s+)?(?:async\s+)?(?:function|const|let|class)\s+([A-Z][A-Za-z0-9_]*)")
});

/// `export default Name` re-export
pub(crate) static DEFAULT_EXPORT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"export\s+default\s+([A-Z][A-Za-z0-9_]*)"));

/// `interface Name [extends ..] { body }` or `type Name = { body }`
pub(crate) static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?:interface\s+([A-Za-z_$][\w$]*)\b[^{]*\{|type\s+([A-Za-z_$][\w$]*)(?:<[^=]*>)?\s*=\s*\{)([^}]*)\}",
    )
});

/// One `name?: type` member of a declaration body segment
pub(crate) static FIELD: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^\s*(?:readonly\s+)?([A-Za-z_$][\w$]*)(\?)?\s*:\s*(.+?)\s*,?\s*$")
});

/// `const [value, setValue] = [React.]useState<T>(initial)`
pub(crate) static STATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"const\s*\[\s*(\w+)\s*,\s*(\w+)\s*\]\s*=\s*(?:React\.)?useState\s*(?:<(.+?)>)?\s*\(([^)]*)\)",
    )
});

/// Handlers bound with an arrow or function expression, or declared with `function`.
/// The binding and the arrow's parameter list may both carry a type annotation.
pub(crate) static HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?:(?:const|let|var)\s+(\w*[hH]andle\w*)(?:\s*:\s*[^=]+?)?\s*=\s*(?:useCallback\s*\(\s*)?(?:async\s*)?(?:function\b|(?:\([^)]*\)|\w+)(?:\s*:\s*[^=]+?)?\s*=>))|(?:function\s+(\w*[hH]andle\w*)\s*\()",
    )
});

/// Any `useXxx(` call
pub(crate) static HOOK_CALL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b(use[A-Z]\w*)\s*\("));

/// Named imports from the icon package
pub(crate) static ICON_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    compile(r#"import\s*\{([^}]*)\}\s*from\s*['"]lucide-react['"]"#)
});

/// `className` with a string, quoted-expression or template-literal value
pub(crate) static CLASS_NAME: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r#"className\s*=\s*(?:"([^"]*)"|'([^']*)'|\{\s*`([^`]*)`\s*\}|\{\s*["']([^"']*)["']\s*\})"#,
    )
});

/// A capitalized JSX tag opening, preceded by whitespace or markup punctuation
pub(crate) static JSX_TAG: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?:^|[\s(>{}])<([A-Z][A-Za-z0-9]*)"));

/// React's own hooks; never reported as auxiliary helpers
pub(crate) const BUILTIN_HOOKS: &[&str] = &[
    "useState",
    "useEffect",
    "useLayoutEffect",
    "useInsertionEffect",
    "useContext",
    "useReducer",
    "useCallback",
    "useMemo",
    "useRef",
    "useId",
    "useTransition",
    "useDeferredValue",
    "useImperativeHandle",
    "useDebugValue",
    "useSyncExternalStore",
    "useOptimistic",
    "useActionState",
];
