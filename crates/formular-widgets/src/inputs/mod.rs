//! The form-input rendering contract.
//!
//! Every input renderer follows the same shape: a field descriptor and an
//! owned configuration come in, an HTML fragment goes out. The composition
//! is decomposed into overridable steps — build the control, pick its
//! default attributes, assemble the client-side options payload, wrap the
//! whole thing — so each variant customizes only what it must.
//!
//! Variants form a closed set behind [`FormInput`]; selection is by tag,
//! and every variant is stateless across calls. All per-render state lives
//! in [`InputState`], which owns the configuration copy for the duration
//! of one call.
//!
//! # Examples
//!
//! ```
//! use formular_core::{Config, DefaultContext, Field};
//! use formular_widgets::inputs::FormInput;
//!
//! let field = Field::new("accept_terms").value(true);
//! let html = FormInput::CheckBox.render(&field, Config::new(), &DefaultContext);
//! assert!(html.as_str().contains(r#"type="checkbox""#));
//! assert!(html.as_str().contains("checked"));
//! ```

mod article_editor;
mod checkbox;
mod clear;
mod email_cc;
mod phone;
mod remote_link;

pub use article_editor::ArticleEditor;
pub use checkbox::CheckBox;
pub use clear::Clear;
pub use email_cc::EmailCcField;
pub use phone::PhoneField;
pub use remote_link::RemoteLinkTo;

use formular_core::{content_tag, Config, Field, Markup, Tag, ViewContext};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Form layout mode, consumed from the `layout` configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Label above control
    #[default]
    Vertical,
    /// Two-column grid: label column, control column
    Horizontal,
    /// Controls flow inline; labels are visually hidden
    Inline,
}

impl Layout {
    fn from_config(config: &mut Config) -> Self {
        match config.take_str("layout").as_deref() {
            Some("horizontal") => Self::Horizontal,
            Some("inline") => Self::Inline,
            _ => Self::Vertical,
        }
    }
}

/// The two boolean facets every input resolves once per render.
///
/// `custom` selects the styled control skin and defaults to `true`;
/// `inline` selects inline flow and defaults to `false`. Resolution
/// consumes the corresponding configuration keys (`custom` at the top
/// level, `inline` inside the `input` section) so they never surface as
/// literal attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facets {
    /// Styled control skin
    pub custom: bool,
    /// Inline flow
    pub inline: bool,
}

impl Facets {
    fn resolve(options: &mut Config, input: &mut Config) -> Self {
        let custom = !matches!(options.take("custom"), Some(Value::Bool(false)));
        let inline = input.take_bool("inline") == Some(true);
        Self { custom, inline }
    }
}

/// Per-render state: the field, the owned configuration copy, the
/// resolved layout and facets, and the capability bundle.
///
/// Created at the top of a render call and consumed within it. The
/// caller's configuration is split into its sections (`input`, `wrapper`,
/// `label`) up front; whatever a variant does not consume ends up as
/// literal attributes on the control.
pub struct InputState<'a> {
    field: &'a Field,
    ctx: &'a dyn ViewContext,
    layout: Layout,
    facets: Facets,
    options: Config,
    input: Config,
    wrapper: Config,
    label: Config,
}

impl<'a> InputState<'a> {
    /// Split the configuration and resolve layout and facets.
    #[must_use]
    pub fn new(field: &'a Field, config: Config, ctx: &'a dyn ViewContext) -> Self {
        let mut options = config;
        let layout = Layout::from_config(&mut options);
        let mut input = options.take_section("input");
        let wrapper = options.take_section("wrapper");
        let label = options.take_section("label");
        let facets = Facets::resolve(&mut options, &mut input);
        Self {
            field,
            ctx,
            layout,
            facets,
            options,
            input,
            wrapper,
            label,
        }
    }

    /// The field being rendered.
    #[must_use]
    pub const fn field(&self) -> &Field {
        self.field
    }

    /// The capability bundle.
    #[must_use]
    pub const fn ctx(&self) -> &dyn ViewContext {
        self.ctx
    }

    /// The resolved layout.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// The resolved facets. Memoized for the render call; reading them
    /// never consumes configuration again.
    #[must_use]
    pub const fn facets(&self) -> Facets {
        self.facets
    }

    /// Remaining top-level options, for variants consuming their own keys.
    pub fn options_mut(&mut self) -> &mut Config {
        &mut self.options
    }

    /// The `input` section, for variants consuming control-level keys.
    pub fn input_mut(&mut self) -> &mut Config {
        &mut self.input
    }

    /// Take the `input` section for building the control.
    pub fn take_input(&mut self) -> Config {
        std::mem::take(&mut self.input)
    }

    /// Take the `wrapper` section for building the container.
    pub fn take_wrapper(&mut self) -> Config {
        std::mem::take(&mut self.wrapper)
    }

    /// Build an `<input type="text">` control bound to the field.
    ///
    /// `defaults` merge under the caller's `input` section; a `js` payload
    /// serializes into `data-input-js-options` for client-side behavior.
    pub fn text_field(&mut self, defaults: Value, js: Option<Value>) -> Markup {
        self.control("text", defaults, js)
    }

    /// Build an `<input>` control of the given type.
    pub fn control(&mut self, input_type: &str, defaults: Value, js: Option<Value>) -> Markup {
        let mut attrs = self.take_input();
        attrs.reverse_merge(defaults);
        attrs.set("type", input_type);
        attrs.set("name", self.field.name());
        if !attrs.contains("value") && self.field.get_value().is_present() {
            attrs.set("value", self.field.get_value().display());
        }
        if !self.field.is_valid() {
            attrs.merge_class("is-invalid");
        }
        if let Some(js) = js {
            attrs.set("data-input-js-options", js.to_string());
        }
        Tag::new("input").attrs(attrs.into_attrs()).build()
    }

    /// Build a `<textarea>` control with the given body content.
    pub fn text_area(&mut self, defaults: Value, js: Option<Value>, content: &str) -> Markup {
        let mut attrs = self.take_input();
        attrs.reverse_merge(defaults);
        attrs.set("name", self.field.name());
        if !self.field.is_valid() {
            attrs.merge_class("is-invalid");
        }
        if let Some(js) = js {
            attrs.set("data-input-js-options", js.to_string());
        }
        Tag::new("textarea")
            .attrs(attrs.into_attrs())
            .text(content)
            .build()
    }

    /// Build the label element. Caller `label` section wins over
    /// `defaults`; a `text` key overrides the humanized field name.
    pub fn build_label(&mut self, defaults: Value) -> Markup {
        let mut attrs = std::mem::take(&mut self.label);
        let text = attrs
            .take_str("text")
            .unwrap_or_else(|| self.field.label_text());
        attrs.reverse_merge(defaults);
        if self.layout == Layout::Inline {
            attrs.merge_class("sr-only");
        }
        if !attrs.contains("for") {
            attrs.set("for", self.field.tag_id());
        }
        Tag::new("label").attrs(attrs.into_attrs()).text(&text).build()
    }

    /// Validation feedback from the bound record, or nothing.
    #[must_use]
    pub fn build_feedback(&self) -> Markup {
        if self.field.is_valid() {
            return Markup::empty();
        }
        Tag::new("div")
            .class("invalid-feedback")
            .text(&self.field.errors().join(", "))
            .build()
    }

    /// Help text from the consumed `hint` key, or nothing.
    pub fn build_hint(&mut self) -> Markup {
        self.options.take_str("hint").map_or_else(Markup::empty, |hint| {
            Tag::new("small")
                .class("form-text text-muted")
                .text(&hint)
                .build()
        })
    }

    /// Wrap a control in an input group with a leading icon.
    #[must_use]
    pub fn input_group(&self, icon_name: &str, control: Markup) -> Markup {
        let icon = crate::icons::icon(icon_name, Config::new(), self.ctx);
        let prepend = Tag::new("div")
            .class("input-group-prepend")
            .body(
                Tag::new("span")
                    .class("input-group-text")
                    .body(icon)
                    .build(),
            )
            .build();
        Tag::new("div")
            .class("input-group")
            .body(prepend)
            .body(control)
            .build()
    }
}

/// The overridable steps of the form-input contract.
///
/// Defaults cover the common text-control shape; variants override the
/// steps where they differ. No step fails on malformed configuration:
/// unrecognized keys pass through to the tag builder as attributes.
pub trait InputVariant {
    /// Default attributes for the control, merged under the caller's
    /// `input` section.
    fn input_html_options(&self, state: &InputState<'_>) -> Value;

    /// Opaque client-side options payload. The contract's only obligation
    /// is correct merging and defaulting, never interpretation.
    fn input_js_options(&self, state: &mut InputState<'_>) -> Option<Value> {
        let _ = state;
        None
    }

    /// Produce the primary control element bound to the field.
    fn build_input(&self, state: &mut InputState<'_>) -> Markup {
        let js = self.input_js_options(state);
        let defaults = self.input_html_options(state);
        state.text_field(defaults, js)
    }

    /// Attributes for the surrounding container.
    fn wrapper_options(&self, state: &InputState<'_>) -> Value {
        let _ = state;
        json!({"class": "form-group"})
    }

    /// Attributes for the label.
    fn label_options(&self, state: &InputState<'_>) -> Value {
        let _ = state;
        json!({})
    }

    /// Icon prepended in an input-group wrapper, when the variant has one.
    fn input_group_icon(&self) -> Option<&'static str> {
        None
    }

    /// Syntactic validity of the bound value.
    ///
    /// Permissive by default, and every shipped variant keeps it that way:
    /// invalid styling comes from the bound record's error messages, never
    /// from format checks.
    fn format_valid(&self, state: &InputState<'_>) -> bool {
        let _ = state;
        true
    }

    /// Compose the full fragment: wrapper, label, control, feedback, hint.
    fn to_html(&self, state: &mut InputState<'_>) -> Markup {
        let mut label_defaults = Config::from_value(self.label_options(state));
        if state.layout() == Layout::Horizontal {
            label_defaults.merge_class("col-sm-2 col-form-label");
        }
        let label = state.build_label(label_defaults.into_value());

        let mut control = self.build_input(state);
        if let Some(icon_name) = self.input_group_icon() {
            control = state.input_group(icon_name, control);
        }
        let feedback = state.build_feedback();
        let hint = state.build_hint();

        let mut wrapper = state.take_wrapper();
        wrapper.reverse_merge(self.wrapper_options(state));

        match state.layout() {
            Layout::Horizontal => {
                wrapper.merge_class("row");
                let col = Tag::new("div")
                    .class("col-sm-10")
                    .body(control + feedback + hint)
                    .build();
                content_tag("div", wrapper.into_attrs(), label + col)
            }
            Layout::Vertical | Layout::Inline => {
                content_tag("div", wrapper.into_attrs(), label + control + feedback + hint)
            }
        }
    }
}

/// The closed set of form-input variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormInput {
    /// Checkbox with custom/inline skins
    CheckBox,
    /// Clear button
    Clear,
    /// Comma-separated CC address field
    EmailCc,
    /// Masked phone field
    Phone,
    /// Asynchronous submit link
    RemoteLink,
    /// Rich-text article editor
    ArticleEditor,
}

impl FormInput {
    /// Render the field with this variant.
    ///
    /// The configuration is owned by the call: consumed keys are gone,
    /// the caller's own mapping is untouched.
    #[must_use]
    pub fn render(self, field: &Field, config: Config, ctx: &dyn ViewContext) -> Markup {
        let mut state = InputState::new(field, config, ctx);
        self.variant().to_html(&mut state)
    }

    fn variant(self) -> &'static dyn InputVariant {
        match self {
            Self::CheckBox => &CheckBox,
            Self::Clear => &Clear,
            Self::EmailCc => &EmailCcField,
            Self::Phone => &PhoneField,
            Self::RemoteLink => &RemoteLinkTo,
            Self::ArticleEditor => &ArticleEditor,
        }
    }
}
