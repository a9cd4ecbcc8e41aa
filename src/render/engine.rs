use chrono::NaiveDate;

use crate::controller::LoginController;
use crate::schema::{
    CheckboxWidget, ChoiceOption, DateWidget, MultiSelectWidget, Screen, SelectWidget, Widget,
    flatten_options,
};
use crate::state::StateValue;

use super::control::{
    Autocomplete, ButtonControl, ButtonStyle, CeremonyKind, ChoiceEntry, Control, InputMode,
    Markup, RenderedWidget, TextField,
};

pub(crate) fn render_widget(
    controller: &LoginController,
    screen: &Screen,
    widget: &Widget,
    form_id: &str,
    widget_id: &str,
) -> Option<RenderedWidget> {
    let control = dispatch(controller, screen, widget, form_id, widget_id)?;
    let error_message = controller.error_message_for_widget(form_id, widget_id);
    Some(RenderedWidget {
        control,
        error_message,
    })
}

fn dispatch(
    controller: &LoginController,
    screen: &Screen,
    widget: &Widget,
    form_id: &str,
    widget_id: &str,
) -> Option<Control> {
    let disabled = controller.is_processing();

    match widget {
        Widget::Form(form) => {
            // A nested form scopes its children's state under its own id.
            let children = form
                .widgets
                .iter()
                .filter_map(|child| render_widget(controller, screen, child, &form.id, child.id()))
                .collect();
            Some(Control::Group {
                form_id: form.id.clone(),
                children,
            })
        }

        Widget::Static(w) => {
            let markup = w
                .render
                .as_ref()
                .and_then(|r| markup_of(&r.type_))
                .or_else(|| fallback(controller, "static", w.render.as_ref().map(|r| r.type_.as_str())))?;
            Some(Control::StaticText {
                markup,
                text: w.value.clone(),
            })
        }

        Widget::Input(w) => {
            let default = w
                .value
                .clone()
                .map(StateValue::Text)
                .unwrap_or(StateValue::Null);
            let cell = controller.state_for(form_id, widget_id, default);
            let value = cell.get().as_text().unwrap_or_default().to_string();
            Some(Control::TextField(TextField {
                label: w.label.clone(),
                value,
                secret: false,
                input_mode: input_mode_of(w.inputmode.as_deref()),
                autocomplete: autocomplete_of(w.autocomplete.as_deref()),
                readonly: w.readonly,
                disabled,
                quality_indicator: false,
            }))
        }

        Widget::Password(w) => {
            let cell = controller.state_for(form_id, widget_id, StateValue::text(""));
            Some(Control::TextField(TextField {
                label: w.label.clone(),
                value: cell.get().as_text().unwrap_or_default().to_string(),
                secret: true,
                input_mode: InputMode::Text,
                autocomplete: Autocomplete::None,
                readonly: false,
                disabled,
                quality_indicator: w.quality_indicator,
            }))
        }

        Widget::Passcode(w) => {
            let cell = controller.state_for(form_id, widget_id, StateValue::text(""));
            Some(Control::TextField(TextField {
                label: w.label.clone(),
                value: cell.get().as_text().unwrap_or_default().to_string(),
                secret: false,
                input_mode: InputMode::Numeric,
                autocomplete: Autocomplete::OneTimeCode,
                readonly: false,
                disabled,
                quality_indicator: false,
            }))
        }

        Widget::Phone(w) => {
            let default = w
                .value
                .clone()
                .map(StateValue::Text)
                .unwrap_or(StateValue::Null);
            let cell = controller.state_for(form_id, widget_id, default);
            Some(Control::TextField(TextField {
                label: w.label.clone(),
                value: cell.get().as_text().unwrap_or_default().to_string(),
                secret: false,
                input_mode: InputMode::Phone,
                autocomplete: Autocomplete::PhoneNumber,
                readonly: w.readonly,
                disabled,
                quality_indicator: false,
            }))
        }

        Widget::Checkbox(w) => render_checkbox(controller, w, form_id, widget_id, disabled),

        Widget::Select(w) => render_select(controller, w, form_id, widget_id, disabled),

        Widget::MultiSelect(w) => render_multi_select(controller, w, form_id, widget_id, disabled),

        Widget::Date(w) => render_date(controller, w, form_id, widget_id, disabled),

        Widget::Submit(w) => {
            let render = match &w.render {
                Some(render) => render,
                None => return fallback(controller, "submit", None),
            };
            let style = match render.type_.as_str() {
                "button" => ButtonStyle::Button,
                "link" => ButtonStyle::Link,
                other => return fallback(controller, "submit", Some(other)),
            };
            Some(Control::Button(ButtonControl {
                label: w.label.clone(),
                style,
                text_color: render.text_color.clone(),
                bg_color: render.bg_color.clone(),
                icon: render.hint.as_ref().and_then(|h| h.icon.clone()),
                disabled,
            }))
        }

        Widget::PasskeyLogin(w) => ceremony_button(
            controller,
            &w.label,
            w.render.as_ref().map(|r| r.type_.as_str()),
            CeremonyKind::PasskeyLogin,
            disabled,
        ),
        Widget::PasskeyEnroll(w) => ceremony_button(
            controller,
            &w.label,
            w.render.as_ref().map(|r| r.type_.as_str()),
            CeremonyKind::PasskeyEnroll,
            disabled,
        ),
        Widget::WebauthnLogin(w) => ceremony_button(
            controller,
            &w.label,
            w.render.as_ref().map(|r| r.type_.as_str()),
            CeremonyKind::WebauthnLogin,
            disabled,
        ),
        Widget::WebauthnEnroll(w) => ceremony_button(
            controller,
            &w.label,
            w.render.as_ref().map(|r| r.type_.as_str()),
            CeremonyKind::WebauthnEnroll,
            disabled,
        ),

        Widget::Unrecognized(w) => fallback(controller, &w.kind, None),
    }
}

fn render_checkbox(
    controller: &LoginController,
    w: &CheckboxWidget,
    form_id: &str,
    widget_id: &str,
    disabled: bool,
) -> Option<Control> {
    let cell = controller.state_for(form_id, widget_id, StateValue::Flag(w.value));

    let render = match &w.render {
        Some(render) => render,
        None => return fallback(controller, "checkbox", None),
    };

    let label_markup = match markup_of(&render.label_type) {
        Some(markup) => markup,
        None => return fallback(controller, "checkbox", Some(&render.label_type)),
    };

    match render.type_.as_str() {
        "checkboxShown" => Some(Control::Checkbox {
            label: w.label.clone(),
            label_markup,
            checked: cell.get().as_flag().unwrap_or(false),
            visible: true,
            disabled,
        }),
        "checkboxHidden" => {
            // Hidden consent: accepted at bind time without interaction.
            cell.set(StateValue::Flag(true));
            Some(Control::Checkbox {
                label: w.label.clone(),
                label_markup,
                checked: true,
                visible: false,
                disabled,
            })
        }
        other => fallback(controller, "checkbox", Some(other)),
    }
}

fn render_select(
    controller: &LoginController,
    w: &SelectWidget,
    form_id: &str,
    widget_id: &str,
    disabled: bool,
) -> Option<Control> {
    let default = w
        .value
        .clone()
        .map(StateValue::Text)
        .unwrap_or(StateValue::Null);
    let cell = controller.state_for(form_id, widget_id, default);
    let selected = cell.get().as_text().map(str::to_string);
    let entries = choice_entries(&w.options);

    match w.render.as_ref().map(|r| r.type_.as_str()) {
        Some("radio") => Some(Control::RadioGroup {
            label: w.label.clone(),
            entries,
            selected,
            disabled,
        }),
        Some("dropdown") => {
            // The label is re-derived from the flattened entries on every
            // render; a value that vanished from the option tree shows a
            // blank label rather than a stale one.
            let selected_label = selected.as_deref().and_then(|value| {
                entries
                    .iter()
                    .find(|e| e.value == value)
                    .map(|e| e.label.clone())
            });
            Some(Control::Dropdown {
                label: w.label.clone(),
                entries,
                selected_value: selected,
                selected_label,
                disabled,
            })
        }
        other => fallback(controller, "select", other),
    }
}

fn render_multi_select(
    controller: &LoginController,
    w: &MultiSelectWidget,
    form_id: &str,
    widget_id: &str,
    disabled: bool,
) -> Option<Control> {
    let default = StateValue::List(w.value.iter().flatten().cloned().collect());
    let cell = controller.state_for(form_id, widget_id, default);
    let selected = cell.get().as_list().map(<[String]>::to_vec).unwrap_or_default();

    Some(Control::Checklist {
        label: w.label.clone(),
        entries: choice_entries(&w.options),
        selected,
        disabled,
    })
}

fn render_date(
    controller: &LoginController,
    w: &DateWidget,
    form_id: &str,
    widget_id: &str,
    disabled: bool,
) -> Option<Control> {
    let default = w
        .value
        .clone()
        .map(StateValue::Text)
        .unwrap_or(StateValue::Null);
    let cell = controller.state_for(form_id, widget_id, default);
    let value = cell.get().as_text().map(str::to_string);

    match w.render.as_ref().map(|r| r.type_.as_str()) {
        Some("native") => Some(Control::DateField {
            label: w.label.clone(),
            placeholder: w.placeholder.clone(),
            value,
            disabled,
        }),
        Some("fieldSet") => {
            let (year, month, day) = value
                .as_deref()
                .and_then(split_date)
                .unwrap_or_default();
            Some(Control::DateFieldSet {
                label: w.label.clone(),
                year,
                month,
                day,
                disabled,
            })
        }
        other => fallback(controller, "date", other),
    }
}

fn ceremony_button(
    controller: &LoginController,
    label: &str,
    render_type: Option<&str>,
    kind: CeremonyKind,
    disabled: bool,
) -> Option<Control> {
    match render_type {
        Some("button") => Some(Control::CeremonyButton {
            label: label.to_string(),
            kind,
            disabled,
        }),
        other => fallback(controller, "ceremony", other),
    }
}

/// Reports an unrenderable (widget, sub-type) combination and yields the
/// fallback outcome. Always returns `None`.
fn fallback<T>(controller: &LoginController, widget_kind: &str, sub_type: Option<&str>) -> Option<T> {
    tracing::warn!(
        widget = widget_kind,
        render = sub_type.unwrap_or("<none>"),
        "unrenderable widget; taking fallback path"
    );
    controller.session().trigger_fallback();
    None
}

fn markup_of(type_: &str) -> Option<Markup> {
    match type_ {
        "text" => Some(Markup::Plain),
        "html" => Some(Markup::Html),
        _ => None,
    }
}

fn input_mode_of(inputmode: Option<&str>) -> InputMode {
    match inputmode {
        Some("email") => InputMode::Email,
        Some("numeric") => InputMode::Numeric,
        Some("tel") => InputMode::Phone,
        _ => InputMode::Text,
    }
}

fn autocomplete_of(autocomplete: Option<&str>) -> Autocomplete {
    match autocomplete {
        Some("username") => Autocomplete::Username,
        Some("one-time-code") => Autocomplete::OneTimeCode,
        Some("tel") => Autocomplete::PhoneNumber,
        _ => Autocomplete::None,
    }
}

fn choice_entries(options: &[ChoiceOption]) -> Vec<ChoiceEntry> {
    flatten_options(options)
        .into_iter()
        .filter_map(|option| {
            let value = option.value()?.to_string();
            let label = option.label().unwrap_or_default().to_string();
            Some(ChoiceEntry { label, value })
        })
        .collect()
}

/// Composes a `yyyy-MM-dd` value from field-set parts.
///
/// Returns `None` unless all three parts are present and form a valid
/// calendar date; a partially-typed date never becomes a submitted value.
pub fn compose_date(year: &str, month: &str, day: &str) -> Option<String> {
    if year.is_empty() || month.is_empty() || day.is_empty() {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(
        year.parse().ok()?,
        month.parse().ok()?,
        day.parse().ok()?,
    )?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// Splits a `yyyy-MM-dd` value into field-set parts.
pub fn split_date(value: &str) -> Option<(String, String, String)> {
    let mut parts = value.splitn(3, '-');
    let year = parts.next()?.to_string();
    let month = parts.next()?.to_string();
    let day = parts.next()?.to_string();
    Some((year, month, day))
}
