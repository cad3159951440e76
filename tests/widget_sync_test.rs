// Event sequences against the widget: caret, rows and textarea anchor stay aligned

use overlay_textarea_wasm::host::{HostSurface, NullSurface};
use overlay_textarea_wasm::renderers::{to_pixels, DisplayList, ACTIVE_OPACITY, DIMMED_OPACITY};
use overlay_textarea_wasm::{CursorPosition, EditorConfig, TextEditorWidget};

fn assert_aligned<S: HostSurface>(editor: &TextEditorWidget<S>) {
    let list: DisplayList = editor.render();
    let expected = to_pixels(editor.cursor_position(), editor.config().metrics());
    assert_eq!(list.caret.position(), expected);
    assert_eq!(list.input_anchor, expected);
    assert_eq!(
        list.lines.iter().map(|l| l.text.as_str()).collect::<Vec<_>>().join("\n"),
        editor.state().content()
    );
    assert_eq!(list.line_numbers.len(), list.lines.len());
}

#[test]
fn test_typing_session_keeps_overlay_aligned() {
    let mut editor = TextEditorWidget::new(EditorConfig::default(), NullSurface);
    assert_aligned(&editor);

    let mut text = String::new();
    for ch in "fn main() {\n    run();\n}\n".chars() {
        text.push(ch);
        let offset = text.chars().count();
        editor.on_content_change(text.clone(), offset);
        assert_aligned(&editor);
    }
    assert_eq!(editor.cursor_position(), CursorPosition::new(3, 0));

    // Arrow back to the end of line 1
    editor.on_selection_move(22);
    assert_eq!(editor.cursor_position(), CursorPosition::new(1, 10));
    assert_aligned(&editor);
}

#[test]
fn test_deleting_a_newline_joins_lines() {
    let mut editor = TextEditorWidget::new(EditorConfig::default(), NullSurface);
    editor.on_content_change("ab\ncd".to_string(), 3);
    assert_eq!(editor.render().lines.len(), 2);

    // Backspace at the start of line 1
    editor.on_content_change("abcd".to_string(), 2);
    let list = editor.render();
    assert_eq!(list.lines.len(), 1);
    assert_eq!(list.line_numbers, vec![1]);
    assert_eq!(editor.cursor_position(), CursorPosition::new(0, 2));
    assert_aligned(&editor);
}

#[test]
fn test_focus_only_changes_caret_emphasis() {
    let mut editor = TextEditorWidget::new(EditorConfig::default(), NullSurface);
    editor.on_content_change("x\ny".to_string(), 2);

    let unfocused = editor.render();
    editor.on_focus();
    let focused = editor.render();
    editor.on_blur();
    let blurred = editor.render();

    assert_eq!(unfocused.caret.opacity, DIMMED_OPACITY);
    assert_eq!(focused.caret.opacity, ACTIVE_OPACITY);
    assert_eq!(blurred, unfocused);
    assert_eq!(focused.lines, unfocused.lines);
    assert_eq!(focused.caret.position(), unfocused.caret.position());
}

#[test]
fn test_custom_metrics_scale_caret() {
    let config = EditorConfig {
        char_width: 10.0,
        line_height: 20.0,
        ..Default::default()
    };
    let mut editor = TextEditorWidget::new(config, NullSurface);
    editor.on_content_change("abc\nde".to_string(), 6);

    let caret = editor.render().caret;
    assert_eq!((caret.top, caret.left, caret.height), (20.0, 20.0, 20.0));
}
