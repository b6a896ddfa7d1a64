//! The four artifacts mirrored from one React component.

use std::path::PathBuf;

use railmirror_analyze::{ComponentDescription, Field, HandlerKind, StateVar};
use railmirror_core::{
    FileRules, GeneratedFile, Overwrite, to_kebab_case, to_pascal_case, to_snake_case,
};

use crate::{CodeBuilder, Placeholders, TemplateKind, TemplateSet, render};

/// Derived names and placeholder values for one component.
#[derive(Debug, Clone)]
pub struct ComponentContext {
    pub description: ComponentDescription,
    /// `task_card`
    pub file_name: String,
    /// `task-card`; also the Stimulus controller identifier
    pub css_class: String,
    pub placeholders: Placeholders,
}

impl ComponentContext {
    /// Build the context. `source_path` is echoed into the artifacts as-is.
    pub fn new(description: ComponentDescription, source_path: &str) -> Self {
        let file_name = to_snake_case(&description.name);
        let css_class = to_kebab_case(&description.name);

        let mut placeholders = Placeholders::new();
        placeholders
            .set("component_name", description.name.as_str())
            .set("class_name", format!("{}Component", description.name))
            .set("file_name", file_name.as_str())
            .set("css_class", css_class.as_str())
            .set("controller_name", css_class.as_str())
            .set("source_path", source_path)
            .set("prop_readers", prop_readers(&description.props))
            .set("initialize_signature", initialize_signature(&description.props))
            .set("instance_assignments", instance_assignments(&description.props))
            .set("class_list", class_list(&css_class, &description.styles))
            .set("icon_markup", icon_markup(&description.icons))
            .set("state_targets", state_targets(&css_class, &description.state))
            .set("action_markup", action_markup(&css_class, &description))
            .set("child_components", child_components(&description.children))
            .set("style_apply", style_apply(&description.styles))
            .set("hooks_note", hooks_note(&description.hooks))
            .set("targets_array", targets_array(&description.state))
            .set("values_object", values_object(&description.state))
            .set("connect_method", connect_method(description.uses_effects))
            .set("action_methods", action_methods(&description));

        Self {
            description,
            file_name,
            css_class,
            placeholders,
        }
    }

    /// All four artifacts, rendered from `templates`.
    pub fn artifacts<'a>(&'a self, templates: &'a TemplateSet) -> Vec<ComponentArtifact<'a>> {
        ComponentFile::ALL
            .into_iter()
            .map(|file| ComponentArtifact {
                file,
                context: self,
                template: templates.get(file.template()),
            })
            .collect()
    }
}

/// The files mirrored from each component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentFile {
    Class,
    Markup,
    Stylesheet,
    Controller,
}

impl ComponentFile {
    pub const ALL: [ComponentFile; 4] = [
        ComponentFile::Class,
        ComponentFile::Markup,
        ComponentFile::Stylesheet,
        ComponentFile::Controller,
    ];

    pub fn template(&self) -> TemplateKind {
        match self {
            ComponentFile::Class => TemplateKind::ComponentClass,
            ComponentFile::Markup => TemplateKind::ComponentMarkup,
            ComponentFile::Stylesheet => TemplateKind::Stylesheet,
            ComponentFile::Controller => TemplateKind::StimulusController,
        }
    }
}

/// One rendered file of the component family.
pub struct ComponentArtifact<'a> {
    pub file: ComponentFile,
    context: &'a ComponentContext,
    template: &'a str,
}

impl GeneratedFile for ComponentArtifact<'_> {
    fn relative_path(&self) -> PathBuf {
        let name = &self.context.file_name;
        let path = match self.file {
            ComponentFile::Class => format!("app/components/{name}_component.rb"),
            ComponentFile::Markup => format!("app/components/{name}_component.html.erb"),
            ComponentFile::Stylesheet => format!(
                "app/assets/stylesheets/components/{}.css",
                self.context.css_class
            ),
            ComponentFile::Controller => format!("app/javascript/controllers/{name}_controller.js"),
        };
        PathBuf::from(path)
    }

    fn rules(&self) -> FileRules {
        // Controllers are hand-finished after the first run
        let overwrite = match self.file {
            ComponentFile::Controller => Overwrite::IfMissing,
            _ => Overwrite::Always,
        };
        FileRules { overwrite }
    }

    fn render(&self) -> String {
        render(self.template, &self.context.placeholders)
    }
}

fn plain_props(props: &[Field]) -> impl Iterator<Item = &Field> {
    props.iter().filter(|p| !p.is_callback())
}

fn prop_readers(props: &[Field]) -> String {
    let readers: Vec<String> = plain_props(props)
        .map(|p| format!(":{}", to_snake_case(&p.name)))
        .collect();
    let callbacks: Vec<&str> = props
        .iter()
        .filter(|p| p.is_callback())
        .map(|p| p.name.as_str())
        .collect();

    CodeBuilder::nested(1)
        .when(!readers.is_empty(), |b| {
            b.line(&format!("attr_reader {}", readers.join(", ")))
        })
        .when(!callbacks.is_empty(), |b| {
            b.line(&format!(
                "# Callback props become Stimulus actions: {}",
                callbacks.join(", ")
            ))
        })
        .build()
}

fn initialize_signature(props: &[Field]) -> String {
    let params: Vec<String> = plain_props(props)
        .map(|p| {
            let name = to_snake_case(&p.name);
            if p.optional {
                format!("{name}: nil")
            } else {
                format!("{name}:")
            }
        })
        .collect();

    if params.is_empty() {
        String::new()
    } else {
        format!("({})", params.join(", "))
    }
}

fn instance_assignments(props: &[Field]) -> String {
    CodeBuilder::nested(2)
        .each(plain_props(props), |b, p| {
            let name = to_snake_case(&p.name);
            b.line(&format!("@{name} = {name}"))
        })
        .build()
}

fn class_list(css_class: &str, styles: &[String]) -> String {
    std::iter::once(css_class)
        .chain(styles.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

fn icon_markup(icons: &[String]) -> String {
    CodeBuilder::nested(1)
        .each(icons, |b, icon| {
            b.line(&format!("<%= lucide_icon(\"{}\") %>", to_kebab_case(icon)))
        })
        .build()
}

fn state_targets(controller: &str, state: &[StateVar]) -> String {
    CodeBuilder::nested(1)
        .each(state, |b, var| {
            b.line(&format!(
                "<div data-{controller}-target=\"{}\"></div>",
                var.name
            ))
        })
        .build()
}

fn action_markup(controller: &str, description: &ComponentDescription) -> String {
    CodeBuilder::nested(1)
        .each(&description.handlers, |b, handler| {
            let Some(event) = handler.kind.dom_event() else {
                return b.line(&format!(
                    "<%# {}: custom handler, wire it up manually %>",
                    handler.name
                ));
            };
            let action = format!("data-action=\"{event}->{controller}#{}\"", handler.name);
            let element = match handler.kind {
                HandlerKind::Click | HandlerKind::Toggle => {
                    format!("<button type=\"button\" {action}></button>")
                }
                HandlerKind::Submit => format!("<form {action}></form>"),
                HandlerKind::Change | HandlerKind::Input => format!("<input {action}>"),
                _ => format!("<div {action}></div>"),
            };
            b.line(&element)
        })
        .build()
}

fn child_components(children: &[String]) -> String {
    CodeBuilder::nested(1)
        .each(children, |b, child| {
            b.line(&format!(
                "<%= render {}Component.new %>",
                to_pascal_case(child)
            ))
        })
        .build()
}

fn style_apply(styles: &[String]) -> String {
    if styles.is_empty() {
        return String::new();
    }
    CodeBuilder::nested(1)
        .line(&format!("@apply {};", styles.join(" ")))
        .build()
}

fn hooks_note(hooks: &[String]) -> String {
    if hooks.is_empty() {
        String::new()
    } else {
        format!("// Custom hooks to port: {}", hooks.join(", "))
    }
}

fn targets_array(state: &[StateVar]) -> String {
    let names: Vec<String> = state.iter().map(|s| format!("\"{}\"", s.name)).collect();
    format!("[{}]", names.join(", "))
}

fn values_object(state: &[StateVar]) -> String {
    if state.is_empty() {
        return "{}".to_string();
    }
    let entries: Vec<String> = state
        .iter()
        .map(|s| format!("{}: {}", s.name, stimulus_value_type(s)))
        .collect();
    format!("{{ {} }}", entries.join(", "))
}

/// Stimulus value type for a state variable: the declared type when there
/// is one, the shape of the initial value otherwise.
pub fn stimulus_value_type(state: &StateVar) -> &'static str {
    let ty = state.ty.to_lowercase();
    match ty.as_str() {
        "boolean" => return "Boolean",
        "number" => return "Number",
        "string" => return "String",
        _ if ty.ends_with("[]") || ty.starts_with("array<") => return "Array",
        "unknown" => {}
        _ => return "Object",
    }

    let initial = state.initial.as_str();
    if initial == "true" || initial == "false" {
        "Boolean"
    } else if initial.parse::<f64>().is_ok() {
        "Number"
    } else if initial.starts_with(['"', '\'', '`']) {
        "String"
    } else if initial.starts_with('[') {
        "Array"
    } else {
        "Object"
    }
}

/// A controller method preceded by a blank line, spliced after the
/// `static values` line.
fn method(header: &str, comment: &str) -> String {
    let body = CodeBuilder::nested(1)
        .block(header, "}", |b| b.line(comment))
        .build();
    format!("\n\n{body}")
}

fn connect_method(uses_effects: bool) -> String {
    if !uses_effects {
        return String::new();
    }
    method(
        "connect() {",
        "// Port the component's useEffect side effects here",
    )
}

fn action_methods(description: &ComponentDescription) -> String {
    description
        .handlers
        .iter()
        .map(|handler| {
            method(
                &format!("{}(event) {{", handler.name),
                &format!("// {} handler mirrored from React", handler.kind.as_str()),
            )
        })
        .collect()
}
