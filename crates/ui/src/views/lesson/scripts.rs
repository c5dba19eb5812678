use dioxus::document::eval;

/// Copy `text` to the system clipboard. Returns `false` when the webview refuses.
pub(super) async fn write_clipboard(text: &str) -> bool {
    let bridge = eval(WRITE_CLIPBOARD_SCRIPT);
    if bridge.send(text).is_err() {
        return false;
    }
    bridge.join::<bool>().await.unwrap_or(false)
}

// The text arrives as a message so it never needs escaping into the script.
const WRITE_CLIPBOARD_SCRIPT: &str = r"
    const text = await dioxus.recv();
    try {
        await navigator.clipboard.writeText(text);
        return true;
    } catch (_) {
        return false;
    }
";
