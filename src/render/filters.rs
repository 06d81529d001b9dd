//! MiniJinja filter registration.

use minijinja::{Environment, Value};

use crate::output::OutputMode;
use crate::theme::Theme;
use crate::util::{pad_to_width, percent_bar, truncate_to_width};

fn columns(n: i64) -> usize {
    n.max(0) as usize
}

/// Registers all built-in filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>, theme: &Theme, mode: OutputMode) {
    let styles = theme.styles.clone();
    let is_debug = mode.is_debug();
    let use_color = mode.should_use_color();

    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if is_debug {
            styles.apply_debug(&name, &text)
        } else {
            styles.apply_with_mode(&name, &text, use_color)
        }
    });

    // {{ "" | nl }} emits a bare line break where a block tag ate one.
    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });

    env.add_filter("pad", |value: Value, width: i64| -> String {
        pad_to_width(&value.to_string(), columns(width))
    });

    env.add_filter("clip", |value: Value, width: i64| -> String {
        truncate_to_width(&value.to_string(), columns(width))
    });

    env.add_filter("bar", |percent: i64, width: Option<i64>| -> String {
        percent_bar(percent.clamp(0, 100) as u32, columns(width.unwrap_or(20)))
    });

    env.add_filter("rule", |width: i64| -> String { "─".repeat(columns(width)) });
}
