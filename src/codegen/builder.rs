//! Code builder: one `SymbolRecord` and one kind in, one text fragment out.

use tracing::warn;

use crate::config::TranspilerConfig;
use crate::error::{Result, TransformError};
use crate::symbols::SymbolRecord;

use super::docs::DocBuilder;
use super::kind::TransformKind;
use super::view::SymbolView;

/// Parts of a generated method that do not come from the record itself.
struct MethodSpec<'a> {
    kind: TransformKind,
    name: &'a str,
    params: Vec<String>,
    return_type: Option<&'a str>,
    body: Vec<String>,
}

/// Generates attribute, getter and setter code for extracted declarations.
///
/// The scratch buffers are cleared at the start of every [`build`](Self::build)
/// call; the builder carries no other state between calls.
#[derive(Debug, Default)]
pub struct CodeBuilder {
    code: Vec<String>,
    docs: DocBuilder,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the fragment for `kind`, optionally preceded by a doc block.
    pub fn build(
        &mut self,
        record: &SymbolRecord,
        kind: TransformKind,
        config: &TranspilerConfig,
    ) -> Result<String> {
        self.reset();
        let view = SymbolView::new(record);
        match kind {
            TransformKind::Attribute => self.build_attribute(&view, config),
            TransformKind::Getter => self.build_getter(&view, config),
            TransformKind::Setter => self.build_setter(&view, config),
            TransformKind::Method => {
                warn!(kind = %kind, identifier = %record.identifier, "no generator for kind");
                return Err(TransformError::InvalidTransformationKind(kind));
            }
        }
        Ok(self.code.join("\n"))
    }

    fn reset(&mut self) {
        self.code.clear();
        self.docs.reset();
    }

    fn build_attribute(&mut self, view: &SymbolView<'_>, config: &TranspilerConfig) {
        if let Some(ty) = view.explicit_type().filter(|_| config.comments) {
            self.docs
                .add_text(&format!("Backing field for {}.", view.identifier()))
                .add_return(ty);
            self.code.push(self.docs.render());
        }

        let decorators = view.decorators();
        if !decorators.is_empty() {
            self.code.push(decorators);
        }

        let mut head = String::from("private");
        if let Some(keyword) = view.static_keyword() {
            head.push(' ');
            head.push_str(keyword);
        }
        let value = view.value();
        let separator = if value == ";" { "" } else { " " };
        self.code.push(format!(
            "{head} {}: {}{separator}{value}",
            view.backing_field(),
            view.declared_type()
        ));
    }

    fn build_getter(&mut self, view: &SymbolView<'_>, config: &TranspilerConfig) {
        let method = MethodSpec {
            kind: TransformKind::Getter,
            name: view.identifier(),
            params: Vec::new(),
            return_type: view.explicit_type(),
            body: vec![format!("return this.{};", view.backing_field())],
        };
        if let Some(ty) = method.return_type.filter(|_| config.comments) {
            self.docs
                .add_text(&format!("Gets the value of {}.", method.name))
                .add_return(ty);
            self.code.push(self.docs.render());
        }
        self.build_method(view, method, config);
    }

    fn build_setter(&mut self, view: &SymbolView<'_>, config: &TranspilerConfig) {
        let name = view.identifier();
        let param = match view.explicit_type() {
            Some(ty) => format!("{name}: {ty}"),
            None => name.to_string(),
        };
        let method = MethodSpec {
            kind: TransformKind::Setter,
            name,
            params: vec![param],
            return_type: None,
            body: vec![format!("this.{} = {name};", view.backing_field())],
        };
        if config.comments {
            self.docs
                .add_text(&format!("Sets the value of {name}."))
                .add_param(name, "new value", view.explicit_type().unwrap_or_default());
            self.code.push(self.docs.render());
        }
        self.build_method(view, method, config);
    }

    fn build_method(
        &mut self,
        view: &SymbolView<'_>,
        method: MethodSpec<'_>,
        config: &TranspilerConfig,
    ) {
        let mut signature = vec!["public"];
        signature.extend(view.static_keyword());
        signature.push(method.kind.sub_accessor());

        let mut header = format!(
            "{} {}({})",
            signature.join(" "),
            method.name,
            method.params.join(", ")
        );
        if let Some(ty) = method.return_type {
            header.push_str(": ");
            header.push_str(ty);
        }
        header.push_str(" {");

        self.code.push(header);
        let indent = config.indent(1);
        self.code
            .extend(method.body.into_iter().map(|line| format!("{indent}{line}")));
        self.code.push("}".to_string());
    }
}
