//! Component shape extraction.

use serde::Serialize;
use tracing::debug;

use crate::{
    fields::{Field, declarations},
    patterns::{
        BUILTIN_HOOKS, CLASS_NAME, DEFAULT_EXPORT, EXPORTED_NAME, HANDLER, HOOK_CALL, ICON_IMPORT,
        JSX_TAG, STATE,
    },
};

/// Everything the extractor could infer about one component file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentDescription {
    /// Component identifier; empty when no export matched
    pub name: String,
    /// Fields of the lexically last `*Props` declaration
    pub props: Vec<Field>,
    pub state: Vec<StateVar>,
    pub handlers: Vec<Handler>,
    /// Custom hooks, i.e. `useXxx` calls outside React's own set
    pub hooks: Vec<String>,
    pub uses_effects: bool,
    pub children: Vec<String>,
    pub icons: Vec<String>,
    pub styles: Vec<String>,
}

/// A `useState` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateVar {
    pub name: String,
    pub setter: String,
    /// Generic argument as written, or `"unknown"`
    pub ty: String,
    /// Initial value expression as written
    pub initial: String,
}

/// An event handler and the interaction it was classified as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Handler {
    pub name: String,
    pub kind: HandlerKind,
}

/// Interaction kind, derived from keywords in the handler name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerKind {
    Submit,
    Change,
    Click,
    Input,
    Key,
    Focus,
    Blur,
    Toggle,
    Hover,
    Custom,
}

impl HandlerKind {
    /// Keywords checked in order against the lower-cased handler name.
    const KEYWORDS: &'static [(&'static str, HandlerKind)] = &[
        ("submit", HandlerKind::Submit),
        ("change", HandlerKind::Change),
        ("click", HandlerKind::Click),
        ("input", HandlerKind::Input),
        ("key", HandlerKind::Key),
        ("focus", HandlerKind::Focus),
        ("blur", HandlerKind::Blur),
        ("toggle", HandlerKind::Toggle),
        ("hover", HandlerKind::Hover),
        ("mouse", HandlerKind::Hover),
    ];

    /// Classify a handler by substring search over its name.
    pub fn classify(name: &str) -> Self {
        let lower = name.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map_or(HandlerKind::Custom, |(_, kind)| *kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HandlerKind::Submit => "submit",
            HandlerKind::Change => "change",
            HandlerKind::Click => "click",
            HandlerKind::Input => "input",
            HandlerKind::Key => "key",
            HandlerKind::Focus => "focus",
            HandlerKind::Blur => "blur",
            HandlerKind::Toggle => "toggle",
            HandlerKind::Hover => "hover",
            HandlerKind::Custom => "custom",
        }
    }

    /// DOM event to bind a Stimulus action to, if the kind has one.
    pub fn dom_event(&self) -> Option<&'static str> {
        match self {
            HandlerKind::Submit => Some("submit"),
            HandlerKind::Change => Some("change"),
            HandlerKind::Click | HandlerKind::Toggle => Some("click"),
            HandlerKind::Input => Some("input"),
            HandlerKind::Key => Some("keydown"),
            HandlerKind::Focus => Some("focus"),
            HandlerKind::Blur => Some("blur"),
            HandlerKind::Hover => Some("mouseenter"),
            HandlerKind::Custom => None,
        }
    }
}

/// Extract a component description from React source text.
///
/// Never fails: each heuristic that finds nothing leaves its field empty.
pub fn analyze_component(source: &str) -> ComponentDescription {
    let name = component_name(source);
    let icons = icons(source);
    let children = children(source, &name, &icon_bindings(source));

    let description = ComponentDescription {
        props: last_props(source),
        state: state(source),
        handlers: handlers(source),
        hooks: hooks(source),
        uses_effects: HOOK_CALL
            .captures_iter(source)
            .any(|c| matches!(&c[1], "useEffect" | "useLayoutEffect")),
        styles: styles(source),
        name,
        children,
        icons,
    };

    debug!(
        component = %description.name,
        props = description.props.len(),
        state = description.state.len(),
        handlers = description.handlers.len(),
        "analyzed component"
    );

    description
}

fn component_name(source: &str) -> String {
    EXPORTED_NAME
        .captures(source)
        .or_else(|| DEFAULT_EXPORT.captures(source))
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

/// Multiple Props declarations: the last one in the text wins.
fn last_props(source: &str) -> Vec<Field> {
    declarations(source)
        .into_iter()
        .filter(|decl| decl.name.ends_with("Props"))
        .last()
        .map(|decl| decl.fields)
        .unwrap_or_default()
}

fn state(source: &str) -> Vec<StateVar> {
    STATE
        .captures_iter(source)
        .map(|caps| StateVar {
            name: caps[1].to_string(),
            setter: caps[2].to_string(),
            ty: caps
                .get(3)
                .map_or("unknown", |m| m.as_str().trim())
                .to_string(),
            initial: caps[4].trim().to_string(),
        })
        .collect()
}

fn handlers(source: &str) -> Vec<Handler> {
    let mut found: Vec<Handler> = Vec::new();
    for caps in HANDLER.captures_iter(source) {
        let Some(name) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };
        let name = name.as_str();
        if found.iter().any(|h| h.name == name) {
            continue;
        }
        found.push(Handler {
            name: name.to_string(),
            kind: HandlerKind::classify(name),
        });
    }
    found
}

fn hooks(source: &str) -> Vec<String> {
    unique(
        HOOK_CALL
            .captures_iter(source)
            .map(|caps| caps[1].to_string())
            .filter(|hook| !BUILTIN_HOOKS.contains(&hook.as_str())),
    )
}

/// Import specifiers from the icon package, e.g. `Trash2 as TrashIcon`
fn icon_specifiers(source: &str) -> Vec<Vec<String>> {
    ICON_IMPORT
        .captures_iter(source)
        .flat_map(|caps| {
            caps[1]
                .split(',')
                .map(|spec| {
                    spec.split_whitespace()
                        .filter(|word| *word != "as")
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .filter(|words| !words.is_empty())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Imported icon names; `A as B` records `A`.
fn icons(source: &str) -> Vec<String> {
    unique(
        icon_specifiers(source)
            .into_iter()
            .filter_map(|words| words.into_iter().next()),
    )
}

/// Every name an icon can appear under in JSX, imported and local.
fn icon_bindings(source: &str) -> Vec<String> {
    unique(icon_specifiers(source).into_iter().flatten())
}

fn styles(source: &str) -> Vec<String> {
    unique(CLASS_NAME.captures_iter(source).flat_map(|caps| {
        let value = (1..=4)
            .find_map(|i| caps.get(i))
            .map_or("", |m| m.as_str());
        value
            .split_whitespace()
            .map(|token| token.trim_matches(['\'', '"']))
            .filter(|token| is_style_token(token))
            .map(str::to_string)
            .collect::<Vec<_>>()
    }))
}

/// Drops interpolation fragments left over from template literals.
fn is_style_token(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric) && !token.contains(['$', '{', '}', '`'])
}

fn children(source: &str, own_name: &str, icon_bindings: &[String]) -> Vec<String> {
    unique(
        JSX_TAG
            .captures_iter(source)
            .map(|caps| caps[1].to_string())
            .filter(|tag| {
                tag != own_name
                    && tag != "Fragment"
                    && tag != "React"
                    && !icon_bindings.iter().any(|icon| icon == tag)
            }),
    )
}

/// Collect, keeping only the first occurrence of each value.
fn unique(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TASK_CARD: &str = r#"
import React, { useState, useEffect } from 'react';
import { Check, Trash2 as TrashIcon } from 'lucide-react';
import { Badge } from './Badge';
import { useTasks } from '../hooks/useTasks';

interface TaskCardProps {
  task: Task;
  compact?: boolean;
  onDelete: (id: string) => void;
}

export function TaskCard({ task, compact, onDelete }: TaskCardProps) {
  const [expanded, setExpanded] = useState<boolean>(false);
  const [draft, setDraft] = useState('');
  const { update } = useTasks();

  useEffect(() => {
    setDraft(task.title);
  }, [task]);

  const handleToggle = () => setExpanded(!expanded);
  const handleTitleChange = (e: React.ChangeEvent<HTMLInputElement>) => setDraft(e.target.value);
  async function handleSubmit(event) {
    await update(task.id, draft);
  }
  const handleArchive = useCallback(() => onDelete(task.id), [task]);

  return (
    <div className="rounded-lg border p-4 shadow-sm">
      <Badge label={task.status} />
      <button className={`btn ${expanded ? 'btn-active' : ''}`} onClick={handleToggle}>
        <Check />
      </button>
      <TrashIcon />
    </div>
  );
}
"#;

    #[test]
    fn test_empty_source_yields_defaults() {
        assert_eq!(analyze_component(""), ComponentDescription::default());
        assert_eq!(
            analyze_component("just some words { with } braces"),
            ComponentDescription::default()
        );
    }

    #[test]
    fn test_component_name() {
        assert_eq!(analyze_component(TASK_CARD).name, "TaskCard");
        assert_eq!(
            analyze_component("const Panel = () => null;\nexport default Panel;").name,
            "Panel"
        );
        assert_eq!(
            analyze_component("export default function Header() {}").name,
            "Header"
        );
    }

    #[test]
    fn test_props() {
        let desc = analyze_component(TASK_CARD);
        assert_eq!(
            desc.props,
            vec![
                Field::new("task", false, "Task"),
                Field::new("compact", true, "boolean"),
                Field::new("onDelete", false, "(id: string) => void"),
            ]
        );
    }

    #[test]
    fn test_last_props_declaration_wins() {
        let source = "interface ButtonProps { label: string }\n\
                      export const Button = () => null;\n\
                      type ButtonProps = { title: string; size?: number }\n";
        let desc = analyze_component(source);
        assert_eq!(
            desc.props,
            vec![
                Field::new("title", false, "string"),
                Field::new("size", true, "number"),
            ]
        );
    }

    #[test]
    fn test_state() {
        let desc = analyze_component(TASK_CARD);
        assert_eq!(
            desc.state,
            vec![
                StateVar {
                    name: "expanded".into(),
                    setter: "setExpanded".into(),
                    ty: "boolean".into(),
                    initial: "false".into(),
                },
                StateVar {
                    name: "draft".into(),
                    setter: "setDraft".into(),
                    ty: "unknown".into(),
                    initial: "''".into(),
                },
            ]
        );
    }

    #[test]
    fn test_state_nested_generic() {
        let desc = analyze_component(
            "const [byId, setById] = React.useState<Record<string, Task>>({});",
        );
        assert_eq!(desc.state[0].ty, "Record<string, Task>");
        assert_eq!(desc.state[0].initial, "{}");
    }

    #[test]
    fn test_handlers_classified() {
        let desc = analyze_component(TASK_CARD);
        assert_eq!(
            desc.handlers,
            vec![
                Handler {
                    name: "handleToggle".into(),
                    kind: HandlerKind::Toggle,
                },
                Handler {
                    name: "handleTitleChange".into(),
                    kind: HandlerKind::Change,
                },
                Handler {
                    name: "handleSubmit".into(),
                    kind: HandlerKind::Submit,
                },
                Handler {
                    name: "handleArchive".into(),
                    kind: HandlerKind::Custom,
                },
            ]
        );
    }

    #[test]
    fn test_handlers_with_type_annotations() {
        let source = r#"
export function Editor() {
  const handleReset = (): void => setDraft('');
  const handleSubmit = async (e: FormEvent): Promise<void> => {
    e.preventDefault();
  };
  const handleChange: ChangeEventHandler<HTMLInputElement> = (e) => setDraft(e.target.value);
  return <form onSubmit={handleSubmit} />;
}
"#;
        let desc = analyze_component(source);
        assert_eq!(
            desc.handlers,
            vec![
                Handler {
                    name: "handleReset".into(),
                    kind: HandlerKind::Custom,
                },
                Handler {
                    name: "handleSubmit".into(),
                    kind: HandlerKind::Submit,
                },
                Handler {
                    name: "handleChange".into(),
                    kind: HandlerKind::Change,
                },
            ]
        );
    }

    #[test]
    fn test_aliased_icon_is_not_a_child() {
        let desc = analyze_component(
            "import { Trash2 as TrashIcon } from 'lucide-react';
             export const Row = () => <div><TrashIcon /><Badge /></div>;",
        );
        assert_eq!(desc.icons, vec!["Trash2"]);
        assert_eq!(desc.children, vec!["Badge"]);
    }

    #[test]
    fn test_classify_keyword_order() {
        assert_eq!(HandlerKind::classify("handleInputChange"), HandlerKind::Change);
        assert_eq!(HandlerKind::classify("onHandleClick"), HandlerKind::Click);
        assert_eq!(HandlerKind::classify("handleKeyDown"), HandlerKind::Key);
        assert_eq!(HandlerKind::classify("handleMouseEnter"), HandlerKind::Hover);
        assert_eq!(HandlerKind::classify("handleDrop"), HandlerKind::Custom);
    }

    #[test]
    fn test_hooks_exclude_builtins() {
        let desc = analyze_component(TASK_CARD);
        assert_eq!(desc.hooks, vec!["useTasks"]);
        assert!(desc.uses_effects);
    }

    #[test]
    fn test_icons_children_styles() {
        let desc = analyze_component(TASK_CARD);
        assert_eq!(desc.icons, vec!["Check", "Trash2"]);
        assert_eq!(desc.children, vec!["Badge"]);
        assert_eq!(
            desc.styles,
            vec!["rounded-lg", "border", "p-4", "shadow-sm", "btn", "btn-active"]
        );
    }

    #[test]
    fn test_description_serializes() {
        let desc = analyze_component(TASK_CARD);
        let json = serde_json::to_value(&desc).unwrap();
        assert_eq!(json["name"], "TaskCard");
        assert_eq!(json["handlers"][0]["kind"], "toggle");
    }
}
