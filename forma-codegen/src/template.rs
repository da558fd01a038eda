//! Template compilation and rendering.
//!
//! A template is compiled once per run into a private Handlebars registry.
//! Output is never HTML-escaped, since the result is source code. Helpers
//! are registered on that registry from an explicit [`Helpers`] bundle.

use std::sync::Arc;

use forma_config::{GenerationConfig, StrictMode, Visibility};
use forma_core::NamingStrategy;
use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext as HbsRenderContext,
    RenderError, RenderErrorReason,
};
use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

/// The component template shipped with Forma.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/component.hbs");

const TEMPLATE_NAME: &str = "component";

/// Data bound into the template for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext {
    /// Entity identifier after entity-name casing.
    pub component_name: String,
    /// The raw entity token.
    pub entity_token: String,
    /// Output file stem after file-name casing.
    pub file_name: String,
    pub export_default: bool,
    pub generate_type: bool,
}

/// Everything the template helpers need, supplied at compile time.
#[derive(Clone)]
pub struct Helpers {
    naming: Arc<dyn NamingStrategy>,
    visibility: Visibility,
    strict_mode: StrictMode,
}

impl Helpers {
    pub fn new(
        naming: Arc<dyn NamingStrategy>,
        visibility: Visibility,
        strict_mode: StrictMode,
    ) -> Self {
        Self {
            naming,
            visibility,
            strict_mode,
        }
    }

    /// Helpers using the config's visibility and strict mode.
    pub fn from_config(config: &GenerationConfig, naming: Arc<dyn NamingStrategy>) -> Self {
        Self::new(naming, config.property_visibility, config.strict_mode)
    }

    fn register(self, registry: &mut Handlebars<'static>) {
        let naming = Arc::clone(&self.naming);
        registry.register_helper(
            "toEntityName",
            Box::new(
                move |h: &Helper,
                      _: &Handlebars,
                      _: &Context,
                      _: &mut HbsRenderContext,
                      out: &mut dyn Output|
                      -> HelperResult {
                    let raw = string_param(h, "toEntityName")?;
                    out.write(&naming.entity_name(raw))?;
                    Ok(())
                },
            ),
        );

        let naming = Arc::clone(&self.naming);
        registry.register_helper(
            "toFileName",
            Box::new(
                move |h: &Helper,
                      _: &Handlebars,
                      _: &Context,
                      _: &mut HbsRenderContext,
                      out: &mut dyn Output|
                      -> HelperResult {
                    let raw = string_param(h, "toFileName")?;
                    out.write(&naming.file_name(raw))?;
                    Ok(())
                },
            ),
        );

        let naming = self.naming;
        registry.register_helper(
            "toPropertyName",
            Box::new(
                move |h: &Helper,
                      _: &Handlebars,
                      _: &Context,
                      _: &mut HbsRenderContext,
                      out: &mut dyn Output|
                      -> HelperResult {
                    let raw = string_param(h, "toPropertyName")?;
                    out.write(&naming.property_name(raw))?;
                    Ok(())
                },
            ),
        );

        let visibility = self.visibility;
        registry.register_helper(
            "printPropertyVisibility",
            Box::new(
                move |_: &Helper,
                      _: &Handlebars,
                      _: &Context,
                      _: &mut HbsRenderContext,
                      out: &mut dyn Output|
                      -> HelperResult {
                    out.write(visibility.prefix())?;
                    Ok(())
                },
            ),
        );

        let strict_mode = self.strict_mode;
        registry.register_helper(
            "strictMark",
            Box::new(
                move |_: &Helper,
                      _: &Handlebars,
                      _: &Context,
                      _: &mut HbsRenderContext,
                      out: &mut dyn Output|
                      -> HelperResult {
                    out.write(strict_mode.mark())?;
                    Ok(())
                },
            ),
        );

        registry.register_helper(
            "json",
            Box::new(
                |h: &Helper,
                 _: &Handlebars,
                 _: &Context,
                 _: &mut HbsRenderContext,
                 out: &mut dyn Output|
                 -> HelperResult {
                    let param = h
                        .param(0)
                        .ok_or(RenderErrorReason::ParamNotFoundForIndex("json", 0))?;
                    out.write(&json_fields(param.value()))?;
                    Ok(())
                },
            ),
        );
    }
}

fn string_param<'a>(h: &'a Helper, helper: &'static str) -> std::result::Result<&'a str, RenderError> {
    let param = h
        .param(0)
        .ok_or(RenderErrorReason::ParamNotFoundForIndex(helper, 0))?;
    param
        .value()
        .as_str()
        .ok_or_else(|| RenderErrorReason::InvalidParamType("string").into())
}

/// Render a value as object-literal fields: unquoted keys, no outer braces.
fn json_fields(value: &Value) -> String {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| format!("{}:{}", key, json_literal(value)))
            .collect::<Vec<_>>()
            .join(","),
        Value::Array(items) => items
            .iter()
            .map(json_literal)
            .collect::<Vec<_>>()
            .join(","),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_literal(value: &Value) -> String {
    match value {
        Value::Object(_) => format!("{{{}}}", json_fields(value)),
        Value::Array(_) => format!("[{}]", json_fields(value)),
        other => other.to_string(),
    }
}

/// A compiled template plus its helpers.
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Compile `source`. A malformed template is a fatal error.
    pub fn compile(source: &str, helpers: Helpers) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);
        helpers.register(&mut registry);

        registry
            .register_template_string(TEMPLATE_NAME, source)
            .map_err(|e| {
                Box::new(Error::Template {
                    name: TEMPLATE_NAME.to_string(),
                    source: Box::new(e),
                })
            })?;

        Ok(Self { registry })
    }

    /// Render the template for one entity.
    pub fn render(&self, context: &RenderContext) -> Result<String> {
        self.registry.render(TEMPLATE_NAME, context).map_err(|e| {
            Box::new(Error::Render {
                entity: context.entity_token.clone(),
                source: Box::new(e),
            })
        })
    }
}
